//! Document store binding
//!
//! A document is a JSON object addressed by a string key inside one logical
//! namespace. The service only ever needs five primitives from the store, which
//! are captured by [`DocumentStore`]. [`DynamoDbDocumentStore`] is the deployed
//! implementation; the `mock` module carries an in-memory one for tests.

mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::{error::SdkError, types::AttributeValue, Client as DynamoDbClient};
use serde_json::Value;
use strum::Display;

pub use error::{DocumentStoreError, DocumentStoreResult};

/// A schemaless document body
pub type Document = serde_json::Map<String, Value>;

/// Attribute names reserved by the `DynamoDB` binding
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentAttribute {
    /// Partition key holding the document key
    DocumentKey,
}

/// Logical address of the collection that holds the documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNamespace {
    /// Top level grouping
    pub bucket: String,
    /// Grouping inside the bucket
    pub scope: String,
    /// Collection inside the scope
    pub collection: String,
}

impl StoreNamespace {
    /// Creates a new namespace
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        scope: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            scope: scope.into(),
            collection: collection.into(),
        }
    }

    /// `DynamoDB` table backing this namespace, `<bucket>.<scope>.<collection>`
    #[must_use]
    pub fn table_name(&self) -> String {
        format!("{}.{}.{}", self.bucket, self.scope, self.collection)
    }
}

/// Key-value and scan primitives over a single namespace
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes `document` under `key` only if no document exists for it
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError::DocumentExists` if `key` is taken
    async fn insert(&self, key: &str, document: Document) -> DocumentStoreResult<()>;

    /// Reads the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError` if the read fails
    async fn get(&self, key: &str) -> DocumentStoreResult<Option<Document>>;

    /// Writes `document` under `key`, replacing whatever was there
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError` if the write fails
    async fn upsert(&self, key: &str, document: Document) -> DocumentStoreResult<()>;

    /// Removes the document stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError::DocumentNotFound` if nothing is stored under `key`
    async fn remove(&self, key: &str) -> DocumentStoreResult<()>;

    /// Returns every document in the namespace that carries `field`
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError` if the scan fails
    async fn scan_with_field(&self, field: &str) -> DocumentStoreResult<Vec<Document>>;
}

/// Rejects keys no store can address
///
/// # Errors
///
/// Returns `DocumentStoreError::EmptyKey` if `key` is empty
pub fn ensure_key(key: &str) -> DocumentStoreResult<()> {
    if key.is_empty() {
        return Err(DocumentStoreError::EmptyKey);
    }
    Ok(())
}

/// Document store backed by a single `DynamoDB` table
pub struct DynamoDbDocumentStore {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl DynamoDbDocumentStore {
    /// Creates a new `DynamoDB` document store
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - Table holding the namespace, partitioned on `document_key`
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    fn key_attribute(key: &str) -> (String, AttributeValue) {
        (
            DocumentAttribute::DocumentKey.to_string(),
            AttributeValue::S(key.to_string()),
        )
    }

    fn to_item(
        key: &str,
        mut document: Document,
    ) -> DocumentStoreResult<HashMap<String, AttributeValue>> {
        document.insert(
            DocumentAttribute::DocumentKey.to_string(),
            Value::String(key.to_string()),
        );
        Ok(serde_dynamo::to_item(Value::Object(document))?)
    }

    fn from_item(item: HashMap<String, AttributeValue>) -> DocumentStoreResult<Document> {
        let mut document: Document = serde_dynamo::from_item(item)?;
        document.remove(&DocumentAttribute::DocumentKey.to_string());
        Ok(document)
    }
}

#[async_trait::async_trait]
impl DocumentStore for DynamoDbDocumentStore {
    async fn insert(&self, key: &str, document: Document) -> DocumentStoreResult<()> {
        ensure_key(key)?;
        let item = Self::to_item(key, document)?;

        // Create only if *no item with this key* exists.
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#pk)")
            .expression_attribute_names("#pk", DocumentAttribute::DocumentKey.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    DocumentStoreError::DocumentExists(key.to_string())
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    async fn get(&self, key: &str) -> DocumentStoreResult<Option<Document>> {
        ensure_key(key)?;
        let (name, value) = Self::key_attribute(key);
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(name, value)
            .consistent_read(true)
            .send()
            .await?;

        response.item.map(Self::from_item).transpose()
    }

    async fn upsert(&self, key: &str, document: Document) -> DocumentStoreResult<()> {
        ensure_key(key)?;
        let item = Self::to_item(key, document)?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> DocumentStoreResult<()> {
        ensure_key(key)?;
        let (name, value) = Self::key_attribute(key);

        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(name, value)
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", DocumentAttribute::DocumentKey.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    DocumentStoreError::DocumentNotFound(key.to_string())
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    async fn scan_with_field(&self, field: &str) -> DocumentStoreResult<Vec<Document>> {
        // The paginator follows `LastEvaluatedKey` until the table is exhausted
        let items = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("attribute_exists(#field)")
            .expression_attribute_names("#field", field)
            .consistent_read(true)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await?;

        tracing::debug!(count = items.len(), table = %self.table_name, "Scanned documents");

        items.into_iter().map(Self::from_item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_table_name() {
        let namespace = StoreNamespace::new("appdata", "crud", "items");
        assert_eq!(namespace.table_name(), "appdata.crud.items");
    }

    #[test]
    fn test_ensure_key() {
        assert!(ensure_key("a1").is_ok());
        assert!(matches!(ensure_key(""), Err(DocumentStoreError::EmptyKey)));
    }

    #[test]
    fn test_item_conversion_strips_document_key() {
        let mut document = Document::new();
        document.insert("id".to_string(), Value::String("a1".to_string()));
        document.insert("name".to_string(), Value::String("Widget".to_string()));

        let item = DynamoDbDocumentStore::to_item("a1", document.clone()).unwrap();
        assert_eq!(
            item.get("document_key"),
            Some(&AttributeValue::S("a1".to_string()))
        );

        let restored = DynamoDbDocumentStore::from_item(item).unwrap();
        assert_eq!(restored, document);
    }
}
