//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use item_storage::{document_store::DocumentStoreError, item::ItemStorageError};
use schemars::JsonSchema;
use serde::Serialize;

/// Error body returned to clients, `{"error": <message>}`
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Status code the error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.status, self.inner.error),
            500..=599 => tracing::error!("Server error: {} - {}", self.status, self.inner.error),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert item storage errors to application errors
impl From<ItemStorageError> for AppError {
    fn from(err: ItemStorageError) -> Self {
        use ItemStorageError::{Conflict, NotFound, SerializationError, StoreError};

        match &err {
            NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            Conflict(_) => Self::new(StatusCode::CONFLICT, err.to_string()),
            StoreError(store_err) => {
                tracing::error!("Document store error: {store_err}");
                Self::internal()
            }
            SerializationError(msg) => {
                tracing::error!("Item serialization error: {msg}");
                Self::internal()
            }
        }
    }
}

/// Convert raw document store errors to application errors
impl From<DocumentStoreError> for AppError {
    fn from(err: DocumentStoreError) -> Self {
        tracing::error!("Document store error: {err}");
        Self::internal()
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_mapping() {
        let (status, body) =
            body_json(ItemStorageError::NotFound("x1".to_string()).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Item not found: x1"}));
    }

    #[tokio::test]
    async fn test_conflict_mapping() {
        let (status, body) =
            body_json(ItemStorageError::Conflict("x1".to_string()).into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!({"error": "Item already exists: x1"}));
    }

    #[tokio::test]
    async fn test_infrastructure_errors_hide_details() {
        let err: AppError =
            ItemStorageError::SerializationError("bad document".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = body_json(
            DocumentStoreError::SerializationError("bad item".to_string()).into(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_empty_key_is_unclassified() {
        let (status, body) =
            body_json(ItemStorageError::StoreError(DocumentStoreError::EmptyKey).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Internal server error"}));
    }
}
