use crate::{
    consts::consts::{ContactsUri, PersonId},
    model::person::{Person, PersonPayload},
};

/// Stored form of a person, the link is not part of the row
#[derive(Clone, Debug, PartialEq)]
pub struct PersonRow {
    pub id: PersonId,
    pub name: String,
}

impl PersonRow {
    pub fn new(id: PersonId, payload: PersonPayload) -> Self {
        PersonRow {
            id,
            name: payload.name,
        }
    }

    /// Overwrites the mutable fields in place, `id` is untouched
    pub fn apply_replace(&mut self, payload: PersonPayload) {
        self.name = payload.name;
    }

    pub fn to_person(&self, contacts_uri: &ContactsUri) -> Person {
        Person {
            id: self.id,
            name: self.name.clone(),
            href: contacts_uri.person_href(self.id),
        }
    }
}
