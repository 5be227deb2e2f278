use crate::{
    database::request_manager::RequestManager,
    model::{
        action::Action,
        address_book::AddressBook,
        person::{Person, PersonPayload},
    },
};

use super::error::ResourceError;

/// Operations over the whole collection, `/contacts`
#[derive(Clone)]
pub struct ContactsResource {
    request_manager: RequestManager,
}

impl ContactsResource {
    pub fn new(request_manager: RequestManager) -> Self {
        Self { request_manager }
    }

    /// Safe and idempotent, returns the people in insertion order
    pub fn list(&self) -> Result<AddressBook, ResourceError> {
        let address_book = self.request_manager.send_action(Action::List)?.list()?;

        Ok(address_book)
    }

    /// Not idempotent, every call stores a new person under a freshly allocated id
    pub fn create(&self, payload: PersonPayload) -> Result<Person, ResourceError> {
        let person = self
            .request_manager
            .send_action(Action::Create(payload))?
            .single()?;

        Ok(person)
    }
}
