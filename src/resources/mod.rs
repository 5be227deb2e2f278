pub mod contacts;
pub mod error;
pub mod person;
