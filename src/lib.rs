pub mod clients;
pub mod consts;
pub mod database;
pub mod model;
pub mod resources;
