//! Item repository on top of the document store
//!
//! Each item is one document keyed by its `id`. The repository is the only place
//! where store-level conditions (existing or missing documents) are turned into
//! item errors.

mod error;

use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::Display;
use tracing::instrument;

use crate::document_store::{Document, DocumentStore, DocumentStoreError};
pub use error::{ItemStorageError, ItemStorageResult};

/// An item as stored and exchanged over the API
///
/// Missing or `null` fields deserialize as empty strings and unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Item {
    /// Unique identifier, also the document key
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-form description
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    /// Creates a new item
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    fn to_document(&self) -> ItemStorageResult<Document> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }

    fn from_document(document: Document) -> ItemStorageResult<Self> {
        Ok(serde_json::from_value(Value::Object(document))?)
    }
}

/// Attribute names of an item document
#[derive(Debug, Clone, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ItemAttribute {
    /// Item id, present on every item document
    Id,
}

/// Repository for item operations
pub struct ItemStorage {
    document_store: Arc<dyn DocumentStore>,
}

impl ItemStorage {
    /// Creates a new item repository
    ///
    /// # Arguments
    ///
    /// * `document_store` - Store binding addressing the items namespace
    #[must_use]
    pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
        Self { document_store }
    }

    /// Inserts a new item
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::Conflict` if an item with the same id exists
    /// or `ItemStorageError::StoreError` if the store write fails, including
    /// when the id is empty
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn create(&self, item: Item) -> ItemStorageResult<Item> {
        self.document_store
            .insert(&item.id, item.to_document()?)
            .await
            .map_err(|err| match err {
                DocumentStoreError::DocumentExists(_) => {
                    ItemStorageError::Conflict(item.id.clone())
                }
                err => err.into(),
            })?;

        tracing::debug!("Item created");
        Ok(item)
    }

    /// Gets a single item by id
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::NotFound` if no item is stored under `id`.
    /// Documents without an `id` attribute are not items and count as absent.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ItemStorageResult<Item> {
        let document = self
            .document_store
            .get(id)
            .await?
            .filter(|document| document.contains_key(&ItemAttribute::Id.to_string()))
            .ok_or_else(|| ItemStorageError::NotFound(id.to_string()))?;

        Item::from_document(document)
    }

    /// Gets every item, ordered by ascending id
    ///
    /// Documents without an `id` attribute are not items and are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError` if the scan fails or a document cannot be parsed
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ItemStorageResult<Vec<Item>> {
        let documents = self
            .document_store
            .scan_with_field(&ItemAttribute::Id.to_string())
            .await?;

        let mut items = documents
            .into_iter()
            .map(Item::from_document)
            .collect::<ItemStorageResult<Vec<_>>>()?;
        items.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(items)
    }

    /// Replaces the item stored under `id`, creating it if absent
    ///
    /// The id carried in `item` is ignored in favour of `id`.
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::StoreError` if the store write fails
    #[instrument(skip(self, item))]
    pub async fn update(&self, id: &str, item: Item) -> ItemStorageResult<Item> {
        let item = Item {
            id: id.to_string(),
            ..item
        };
        self.document_store
            .upsert(id, item.to_document()?)
            .await?;

        tracing::debug!("Item upserted");
        Ok(item)
    }

    /// Deletes an item by id
    ///
    /// # Errors
    ///
    /// Returns `ItemStorageError::NotFound` if no item is stored under `id`
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ItemStorageResult<()> {
        self.document_store
            .remove(id)
            .await
            .map_err(|err| match err {
                DocumentStoreError::DocumentNotFound(_) => {
                    ItemStorageError::NotFound(id.to_string())
                }
                err => err.into(),
            })?;

        tracing::debug!("Item deleted");
        Ok(())
    }
}
