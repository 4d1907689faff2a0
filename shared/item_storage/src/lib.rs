//! Item storage services for the CRUD service
//!
//! This crate provides the document store binding (`DynamoDB` in deployed
//! environments, in-memory for tests), the `Item` repository and the health probe
//! write used to confirm store connectivity.

pub mod document_store;
pub mod health_probe;
pub mod item;
