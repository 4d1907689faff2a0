//! Connectivity probe against the document store
//!
//! The probe upserts a single well-known document with the current timestamp.
//! It does not read the document back.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::document_store::{Document, DocumentStore, DocumentStoreResult};

/// Key of the document written by every probe
pub const HEALTH_PING_KEY: &str = "health::ping";

/// Storage client for the health ping document
pub struct HealthProbe {
    document_store: Arc<dyn DocumentStore>,
}

impl HealthProbe {
    /// Creates a new health probe
    #[must_use]
    pub fn new(document_store: Arc<dyn DocumentStore>) -> Self {
        Self { document_store }
    }

    /// Writes `{"ts": <unix millis>}` under [`HEALTH_PING_KEY`]
    ///
    /// # Errors
    ///
    /// Returns `DocumentStoreError` if the store write fails
    pub async fn ping(&self) -> DocumentStoreResult<()> {
        let mut document = Document::new();
        document.insert("ts".to_string(), Value::from(Utc::now().timestamp_millis()));

        self.document_store.upsert(HEALTH_PING_KEY, document).await
    }
}
