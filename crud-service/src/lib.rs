//! CRUD service exposing items stored in a document database

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod routes;
pub mod server;
pub mod types;
