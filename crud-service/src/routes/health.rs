use std::sync::Arc;

use axum::Extension;
use item_storage::health_probe::HealthProbe;

use crate::types::AppError;

/// Health check endpoint
///
/// Writes a timestamped ping document to the store and answers `OK`.
/// A failing write surfaces as a `500`; the ping is never read back.
///
/// # Errors
///
/// Returns `500 INTERNAL_SERVER_ERROR` if the store write fails
pub async fn handler(
    Extension(health_probe): Extension<Arc<HealthProbe>>,
) -> Result<String, AppError> {
    health_probe.ping().await?;

    Ok("OK".to_string())
}
