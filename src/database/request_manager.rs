use std::time::Duration;

use flume::Sender;
use thiserror::Error;

use crate::model::action::{Action, ActionResult};

use super::table::table::ApplyErrors;

#[derive(Debug)]
pub enum DatabaseRequestAction {
    Request(Action),
    Shutdown,
}

impl DatabaseRequestAction {
    /// Prints complex logs in a more readable format
    pub fn log_format(&self) -> String {
        match self {
            DatabaseRequestAction::Request(action) => format!("{:?}", action),
            DatabaseRequestAction::Shutdown => "Shutdown".to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum DatabaseResponseAction {
    Response(ActionResult),
    Rejected(ApplyErrors),
}

pub struct DatabaseRequest {
    pub response_sender: oneshot::Sender<DatabaseResponseAction>,
    pub action: DatabaseRequestAction,
}

#[derive(Error, Debug)]
pub enum RequestManagerError {
    #[error("Database took too long to respond to request")]
    DatabaseTimeout,
    #[error("Database is not running")]
    DatabaseDisconnected,
    #[error("{0}")]
    Rejected(ApplyErrors),
    #[error("Database responded with an unexpected result, expected {0}")]
    UnexpectedResult(&'static str),
}

/// Handle used to talk to the database thread
///
/// Every request is sent over a shared channel to the single thread owning the address book, which
/// replies on a oneshot channel created per request. Reads give up after `response_timeout`,
/// mutations wait for their result. Cloning the manager is cheap, each handler owns its own clone.
#[derive(Clone)]
pub struct RequestManager {
    database_sender: Sender<DatabaseRequest>,
    response_timeout: Duration,
}

impl RequestManager {
    pub fn new(database_sender: Sender<DatabaseRequest>, response_timeout: Duration) -> Self {
        Self {
            database_sender,
            response_timeout,
        }
    }

    /// Sends a single action to the database and returns its result, a rejected action is
    /// surfaced as `RequestManagerError::Rejected`
    pub fn send_action(&self, action: Action) -> Result<ActionResult, RequestManagerError> {
        match self.send_database_request(DatabaseRequestAction::Request(action))? {
            DatabaseResponseAction::Response(action_result) => Ok(action_result),
            DatabaseResponseAction::Rejected(err) => Err(RequestManagerError::Rejected(err)),
        }
    }

    /// Sends a shutdown request to the database and returns the database's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        match self.send_database_request(DatabaseRequestAction::Shutdown)? {
            DatabaseResponseAction::Response(action_result) => action_result.success_status(),
            DatabaseResponseAction::Rejected(err) => Err(RequestManagerError::Rejected(err)),
        }
    }

    fn send_database_request(
        &self,
        action: DatabaseRequestAction,
    ) -> Result<DatabaseResponseAction, RequestManagerError> {
        let (response_sender, response_receiver) = oneshot::channel::<DatabaseResponseAction>();

        // A mutation that was sent must be reported, so it is never abandoned half way
        let wait_for_commit =
            matches!(&action, DatabaseRequestAction::Request(action) if action.is_mutation());

        let request = DatabaseRequest {
            response_sender,
            action,
        };

        // Sends the request to the database thread, the database will respond
        //  on the response_receiver once it has finished processing the request
        self.database_sender
            .send(request)
            .map_err(|_| RequestManagerError::DatabaseDisconnected)?;

        if wait_for_commit {
            return response_receiver
                .recv()
                .map_err(|_| RequestManagerError::DatabaseDisconnected);
        }

        match response_receiver.recv_timeout(self.response_timeout) {
            Ok(response) => Ok(response),
            Err(oneshot::RecvTimeoutError::Timeout) => Err(RequestManagerError::DatabaseTimeout),
            Err(oneshot::RecvTimeoutError::Disconnected) => {
                Err(RequestManagerError::DatabaseDisconnected)
            }
        }
    }
}
