use actix_web::{
    delete, get,
    http::{header, StatusCode},
    post, put,
    web::{self, Data},
    HttpResponse, ResponseError,
};
use serde_json::json;

use crate::{
    consts::consts::PersonId,
    model::person::PersonPayload,
    resources::{contacts::ContactsResource, error::ResourceError, person::PersonResource},
};

impl ResponseError for ResourceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::NotFound(_) => StatusCode::NOT_FOUND,
            ResourceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ResourceError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// GET /contacts -- safe, returns the whole address book
#[get("/contacts")]
async fn list_contacts(contacts: Data<ContactsResource>) -> Result<HttpResponse, ResourceError> {
    let address_book = contacts.list()?;

    Ok(HttpResponse::Ok().json(address_book))
}

/// POST /contacts -- stores a new person, the server picks the id
#[post("/contacts")]
async fn create_person(
    contacts: Data<ContactsResource>,
    payload: web::Json<PersonPayload>,
) -> Result<HttpResponse, ResourceError> {
    let person = contacts.create(payload.into_inner())?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, person.href.clone()))
        .json(person))
}

#[get("/contacts/person/{id}")]
async fn get_person(
    people: Data<PersonResource>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ResourceError> {
    let person = people.get(PersonId(id.into_inner()))?;

    Ok(HttpResponse::Ok().json(person))
}

#[put("/contacts/person/{id}")]
async fn replace_person(
    people: Data<PersonResource>,
    id: web::Path<u64>,
    payload: web::Json<PersonPayload>,
) -> Result<HttpResponse, ResourceError> {
    let person = people.replace(PersonId(id.into_inner()), payload.into_inner())?;

    Ok(HttpResponse::Ok().json(person))
}

#[delete("/contacts/person/{id}")]
async fn delete_person(
    people: Data<PersonResource>,
    id: web::Path<u64>,
) -> Result<HttpResponse, ResourceError> {
    people.delete(PersonId(id.into_inner()))?;

    Ok(HttpResponse::NoContent().finish())
}

/// Registers the contacts routes. Expects `Data<ContactsResource>` and `Data<PersonResource>` to be
/// registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_contacts)
        .service(create_person)
        .service(get_person)
        .service(replace_person)
        .service(delete_person);
}
