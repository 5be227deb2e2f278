use thiserror::Error;

use crate::{
    consts::consts::PersonId,
    database::{request_manager::RequestManagerError, table::table::ApplyErrors},
};

/// Failures a resource handler reports to the HTTP layer
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Person {0} does not exist")]
    NotFound(PersonId),

    /// Replace is only defined over existing people
    #[error("Cannot replace person {0}, it does not exist")]
    BadRequest(PersonId),

    #[error("Address book unavailable: {0}")]
    Unavailable(RequestManagerError),
}

impl From<ApplyErrors> for ResourceError {
    fn from(err: ApplyErrors) -> Self {
        match err {
            ApplyErrors::CannotGetDoesNotExist(id) | ApplyErrors::CannotDeleteDoesNotExist(id) => {
                ResourceError::NotFound(id)
            }
            ApplyErrors::CannotUpdateDoesNotExist(id) => ResourceError::BadRequest(id),
        }
    }
}

impl From<RequestManagerError> for ResourceError {
    fn from(err: RequestManagerError) -> Self {
        match err {
            RequestManagerError::Rejected(apply_error) => apply_error.into(),
            other => ResourceError::Unavailable(other),
        }
    }
}
