pub mod action;
pub mod address_book;
pub mod person;
