use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

use super::person::Person;

/// Point-in-time view of the whole collection, in insertion order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressBook {
    pub next_id: PersonId,
    pub person_list: Vec<Person>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let address_book = AddressBook {
            next_id: PersonId(2),
            person_list: vec![Person {
                id: PersonId(1),
                name: "Salvador".to_string(),
                href: "http://localhost:8282/contacts/person/1".to_string(),
            }],
        };

        let json = serde_json::to_value(&address_book).unwrap();

        assert_eq!(json["nextId"], 2);
        assert_eq!(json["personList"][0]["name"], "Salvador");
    }
}
