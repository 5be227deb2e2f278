use thiserror::Error;

use crate::{
    consts::consts::{ContactsUri, PersonId},
    model::{
        action::{Action, ActionResult},
        address_book::AddressBook,
        person::Person,
    },
};

use super::{row::PersonRow, sequence::PersonIdSequence};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyErrors {
    // CRUD - GET
    #[error("Not found, record does not exist: {0}")]
    CannotGetDoesNotExist(PersonId),

    // CRUD - UPDATE
    #[error("Cannot update, record does not exist: {0}")]
    CannotUpdateDoesNotExist(PersonId),

    // CRUD - DELETE
    #[error("Cannot delete, record does not exist: {0}")]
    CannotDeleteDoesNotExist(PersonId),
}

/// The address book state: the ordered person list together with the id sequence
pub struct PersonTable {
    person_rows: Vec<PersonRow>,
    sequence: PersonIdSequence,
    contacts_uri: ContactsUri,
}

impl PersonTable {
    pub fn new(contacts_uri: ContactsUri) -> Self {
        Self {
            person_rows: Vec::new(),
            sequence: PersonIdSequence::new(),
            contacts_uri,
        }
    }

    pub fn len(&self) -> usize {
        self.person_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.person_rows.is_empty()
    }

    pub fn next_id(&self) -> PersonId {
        self.sequence.peek()
    }

    // Every mutation checks existence before touching any state, a rejected action leaves the
    // table exactly as it was
    pub fn apply(&mut self, action: Action) -> Result<ActionResult, ApplyErrors> {
        let action_result = match action {
            Action::Create(payload) => {
                let id = self.sequence.next_id();
                let row = PersonRow::new(id, payload);
                let person = row.to_person(&self.contacts_uri);

                self.person_rows.push(row);

                ActionResult::Single(person)
            }
            Action::Replace(id, payload) => {
                let row = self
                    .person_rows
                    .iter_mut()
                    .find(|row| row.id == id)
                    .ok_or(ApplyErrors::CannotUpdateDoesNotExist(id))?;

                row.apply_replace(payload);

                ActionResult::Single(row.to_person(&self.contacts_uri))
            }
            Action::Remove(id) => {
                let position = self
                    .position(id)
                    .ok_or(ApplyErrors::CannotDeleteDoesNotExist(id))?;

                // `remove` rather than `swap_remove`, the list keeps insertion order
                let previous = self.person_rows.remove(position);

                ActionResult::Single(previous.to_person(&self.contacts_uri))
            }
            Action::Get(id) => {
                let person = self
                    .person_rows
                    .iter()
                    .find(|row| row.id == id)
                    .map(|row| row.to_person(&self.contacts_uri))
                    .ok_or(ApplyErrors::CannotGetDoesNotExist(id))?;

                ActionResult::Single(person)
            }
            Action::List => ActionResult::List(self.snapshot()),
        };

        Ok(action_result)
    }

    pub fn snapshot(&self) -> AddressBook {
        let person_list: Vec<Person> = self
            .person_rows
            .iter()
            .map(|row| row.to_person(&self.contacts_uri))
            .collect();

        AddressBook {
            next_id: self.sequence.peek(),
            person_list,
        }
    }

    fn position(&self, id: PersonId) -> Option<usize> {
        self.person_rows.iter().position(|row| row.id == id)
    }
}
