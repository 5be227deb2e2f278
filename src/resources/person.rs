use crate::{
    consts::consts::PersonId,
    database::request_manager::RequestManager,
    model::{
        action::Action,
        person::{Person, PersonPayload},
    },
};

use super::error::ResourceError;

/// Operations on a single person, `/contacts/person/{id}`
#[derive(Clone)]
pub struct PersonResource {
    request_manager: RequestManager,
}

impl PersonResource {
    pub fn new(request_manager: RequestManager) -> Self {
        Self { request_manager }
    }

    pub fn get(&self, id: PersonId) -> Result<Person, ResourceError> {
        let person = self.request_manager.send_action(Action::Get(id))?.single()?;

        Ok(person)
    }

    /// Overwrites the name of an existing person. An unknown id is a `BadRequest`, not an insert.
    pub fn replace(&self, id: PersonId, payload: PersonPayload) -> Result<Person, ResourceError> {
        let person = self
            .request_manager
            .send_action(Action::Replace(id, payload))?
            .single()?;

        Ok(person)
    }

    /// Removing an id twice reports `NotFound` the second time, the end state is the same
    pub fn delete(&self, id: PersonId) -> Result<(), ResourceError> {
        self.request_manager.send_action(Action::Remove(id))?.single()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        database::{database::Database, options::DatabaseOptions},
        resources::contacts::ContactsResource,
    };

    use super::*;

    fn start() -> (ContactsResource, PersonResource, RequestManager) {
        let request_manager = Database::new(DatabaseOptions::default()).run().unwrap();

        (
            ContactsResource::new(request_manager.clone()),
            PersonResource::new(request_manager.clone()),
            request_manager,
        )
    }

    #[test]
    fn scenario_create_list_delete() {
        let (contacts, people, request_manager) = start();

        let juan = contacts.create(PersonPayload::new("Juan")).unwrap();
        let maria = contacts.create(PersonPayload::new("Maria")).unwrap();
        assert_eq!((juan.id, maria.id), (PersonId(1), PersonId(2)));

        let listed = contacts.list().unwrap().person_list;
        assert_eq!(listed, vec![juan.clone(), maria.clone()]);

        people.delete(juan.id).unwrap();
        assert!(matches!(people.get(juan.id), Err(ResourceError::NotFound(PersonId(1)))));
        assert_eq!(contacts.list().unwrap().person_list, vec![maria]);

        request_manager.send_shutdown_request().unwrap();
    }

    #[test]
    fn errors_map_to_their_kind() {
        let (_, people, request_manager) = start();

        assert!(matches!(people.get(PersonId(9)), Err(ResourceError::NotFound(_))));
        assert!(matches!(people.delete(PersonId(9)), Err(ResourceError::NotFound(_))));
        assert!(matches!(
            people.replace(PersonId(9), PersonPayload::new("Maria")),
            Err(ResourceError::BadRequest(_))
        ));

        request_manager.send_shutdown_request().unwrap();

        assert!(matches!(people.get(PersonId(1)), Err(ResourceError::Unavailable(_))));
    }
}
