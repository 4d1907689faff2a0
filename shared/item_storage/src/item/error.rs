//! Error types for item storage operations

use thiserror::Error;

use crate::document_store::DocumentStoreError;

/// Result type alias for item storage operations
pub type ItemStorageResult<T> = Result<T, ItemStorageError>;

/// Errors raised by the item repository
#[derive(Debug, Error)]
pub enum ItemStorageError {
    /// No item is stored under the id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An item is already stored under the id
    #[error("Item already exists: {0}")]
    Conflict(String),

    /// Underlying document store failure
    #[error(transparent)]
    StoreError(#[from] DocumentStoreError),

    /// Failed to convert between an item and its document
    #[error("Failed to parse item: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ItemStorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
