#[macro_use]
extern crate diesel;

pub mod config;
pub mod database;
pub mod models;
pub mod schema;
pub mod session;
