use crate::{consts::consts::PersonId, database::request_manager::RequestManagerError};

use super::{address_book::AddressBook, person::Person, person::PersonPayload};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Allocates a new id and appends the person, returns the stored person
    Create(PersonPayload),
    /// Overwrites the name of an existing person, never inserts
    Replace(PersonId, PersonPayload),
    /// Removes the person and returns the removed state
    Remove(PersonId),
    Get(PersonId),
    /// Returns the whole address book
    List,
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::Create(_) | Action::Replace(_, _) | Action::Remove(_) => true,
            Action::Get(_) | Action::List => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ActionResult {
    SuccessStatus(String),
    Single(Person),
    List(AddressBook),
}

impl ActionResult {
    pub fn single(self) -> Result<Person, RequestManagerError> {
        match self {
            ActionResult::Single(person) => Ok(person),
            _ => Err(RequestManagerError::UnexpectedResult("Single")),
        }
    }

    pub fn list(self) -> Result<AddressBook, RequestManagerError> {
        match self {
            ActionResult::List(address_book) => Ok(address_book),
            _ => Err(RequestManagerError::UnexpectedResult("List")),
        }
    }

    pub fn success_status(self) -> Result<String, RequestManagerError> {
        match self {
            ActionResult::SuccessStatus(status) => Ok(status),
            _ => Err(RequestManagerError::UnexpectedResult("SuccessStatus")),
        }
    }
}
