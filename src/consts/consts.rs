use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn increment(&self) -> PersonId {
        PersonId(self.0 + 1)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Absolute URI of the contacts collection, e.g. `http://localhost:8282/contacts`
///
/// Person links are always derived from this base, they are never stored alongside the person.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactsUri(String);

impl ContactsUri {
    /// Builds the collection URI from the public root of the server (scheme, host and port)
    pub fn from_root(root: &str) -> Self {
        ContactsUri(format!("{}{}", root.trim_end_matches('/'), CONTACTS_PATH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn person_href(&self, id: PersonId) -> String {
        format!("{}{}/{}", self.0, PERSON_PATH, id)
    }
}

impl fmt::Display for ContactsUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Values
pub const START_AT_INDEX: PersonId = PersonId(1);
pub const CONTACTS_PATH: &str = "/contacts";
pub const PERSON_PATH: &str = "/person";
pub const DEFAULT_PORT: u16 = 8282;
