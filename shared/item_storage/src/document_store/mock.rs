//! In-memory document store with the same insert/remove semantics as `DynamoDB`

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::{ensure_key, Document, DocumentStore, DocumentStoreError, DocumentStoreResult};

/// Document store holding everything in a process-local map
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<BTreeMap<String, Document>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents, including non-item documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents at all
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, key: &str, document: Document) -> DocumentStoreResult<()> {
        ensure_key(key)?;
        let mut documents = self.documents.write().await;
        if documents.contains_key(key) {
            return Err(DocumentStoreError::DocumentExists(key.to_string()));
        }
        documents.insert(key.to_string(), document);
        Ok(())
    }

    async fn get(&self, key: &str) -> DocumentStoreResult<Option<Document>> {
        ensure_key(key)?;
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn upsert(&self, key: &str, document: Document) -> DocumentStoreResult<()> {
        ensure_key(key)?;
        self.documents
            .write()
            .await
            .insert(key.to_string(), document);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DocumentStoreResult<()> {
        ensure_key(key)?;
        self.documents
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| DocumentStoreError::DocumentNotFound(key.to_string()))
    }

    async fn scan_with_field(&self, field: &str) -> DocumentStoreResult<Vec<Document>> {
        Ok(self
            .documents
            .read()
            .await
            .values()
            .filter(|document| document.contains_key(field))
            .cloned()
            .collect())
    }
}
