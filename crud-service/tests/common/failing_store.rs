use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use axum::Router;
use crud_service::{server, types::Environment};
use item_storage::{
    document_store::{Document, DocumentStore, DocumentStoreError, DocumentStoreResult},
    health_probe::HealthProbe,
    item::ItemStorage,
};

/// Document store whose every call fails as if `DynamoDB` were unreachable
pub struct UnreachableDocumentStore;

#[async_trait]
impl DocumentStore for UnreachableDocumentStore {
    async fn insert(&self, _key: &str, _document: Document) -> DocumentStoreResult<()> {
        Err(DocumentStoreError::DynamoDbPutError(SdkError::timeout_error(
            "store unreachable",
        )))
    }

    async fn get(&self, _key: &str) -> DocumentStoreResult<Option<Document>> {
        Err(DocumentStoreError::DynamoDbGetError(SdkError::timeout_error(
            "store unreachable",
        )))
    }

    async fn upsert(&self, _key: &str, _document: Document) -> DocumentStoreResult<()> {
        Err(DocumentStoreError::DynamoDbPutError(SdkError::timeout_error(
            "store unreachable",
        )))
    }

    async fn remove(&self, _key: &str) -> DocumentStoreResult<()> {
        Err(DocumentStoreError::DynamoDbDeleteError(SdkError::timeout_error(
            "store unreachable",
        )))
    }

    async fn scan_with_field(&self, _field: &str) -> DocumentStoreResult<Vec<Document>> {
        Err(DocumentStoreError::DynamoDbScanError(SdkError::timeout_error(
            "store unreachable",
        )))
    }
}

/// Router wired onto a store that rejects every call
pub fn unreachable_store_app() -> Router {
    let document_store = Arc::new(UnreachableDocumentStore);

    server::app(
        Environment::Development,
        Arc::new(ItemStorage::new(document_store.clone())),
        Arc::new(HealthProbe::new(document_store)),
    )
}
