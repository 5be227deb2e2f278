use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

/// A contact as it is handed out by the address book. `href` is recomputed from `id` every time a
/// person leaves the table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub href: String,
}

/// Body accepted when creating or replacing a person
///
/// Only the name is meaningful. Any `id` or `href` sent by the client is dropped during
/// deserialization, the server owns both.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PersonPayload {
    #[serde(default)]
    pub name: String,
}

impl PersonPayload {
    pub fn new(name: &str) -> Self {
        PersonPayload {
            name: name.to_string(),
        }
    }
}
