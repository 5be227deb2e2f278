use std::time::Duration;

use crate::{
    consts::consts::{ContactsUri, DEFAULT_PORT},
    model::person::PersonPayload,
};

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub contacts_uri: ContactsUri,
    pub seed: Vec<PersonPayload>,
    pub response_timeout: Duration,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// Base used for every `href` handed out by the database
    pub fn set_contacts_uri(mut self, contacts_uri: ContactsUri) -> Self {
        self.contacts_uri = contacts_uri;
        self
    }

    /// People created, in order, before the database starts taking requests. They go through the
    /// regular create path so they get ids 1..=n.
    pub fn set_seed(mut self, seed: Vec<PersonPayload>) -> Self {
        self.seed = seed;
        self
    }

    /// How long a caller waits for the database thread before giving up
    pub fn set_response_timeout(mut self, response_timeout: Duration) -> Self {
        self.response_timeout = response_timeout;
        self
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            contacts_uri: ContactsUri::from_root(&format!("http://localhost:{}", DEFAULT_PORT)),
            seed: vec![],
            response_timeout: Duration::from_secs(2),
        }
    }
}
