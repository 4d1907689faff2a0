//! Error types for document store operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, get_item::GetItemError, put_item::PutItemError, scan::ScanError,
};
use thiserror::Error;

/// Result type alias for document store operations
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Errors that can occur while talking to the document store
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    /// Insert-if-absent hit an existing document
    #[error("Document already exists: {0}")]
    DocumentExists(String),

    /// The key addressing a document is empty
    #[error("Document key must not be empty")]
    EmptyKey,

    /// Conditional remove found no document for the key
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Failed to write document into `DynamoDB`
    #[error("Failed to put document into DynamoDB: {0:?}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to read document from `DynamoDB`
    #[error("Failed to get document from DynamoDB: {0:?}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to delete document from `DynamoDB`
    #[error("Failed to delete document from DynamoDB: {0:?}")]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// Failed to scan documents from `DynamoDB`
    #[error("Failed to scan documents from DynamoDB: {0:?}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to convert between a document and a `DynamoDB` item
    #[error("Failed to convert document: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for DocumentStoreError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
