use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use item_storage::item::{Item, ItemStorage};

use crate::types::AppError;

/// Create a new item
///
/// The caller supplies the id. Fields missing from the body (or `null`) default
/// to empty strings and unknown fields are ignored.
///
/// # Returns
///
/// Returns `200 OK` with the created item
///
/// # Errors
///
/// Returns an error if:
/// - `409 CONFLICT` - An item with the same id already exists
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails, including an empty id
pub async fn create_item(
    Extension(item_storage): Extension<Arc<ItemStorage>>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, AppError> {
    let item = item_storage.create(item).await?;

    Ok(Json(item))
}

/// Get an item by ID
///
/// # Errors
///
/// Returns an error if:
/// - `404 NOT_FOUND` - No item with the given id exists
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn get_item(
    Path(id): Path<String>,
    Extension(item_storage): Extension<Arc<ItemStorage>>,
) -> Result<Json<Item>, AppError> {
    let item = item_storage.get(&id).await?;

    Ok(Json(item))
}

/// List every item, ordered by id
///
/// # Errors
///
/// Returns `500 INTERNAL_SERVER_ERROR` if the storage scan fails
pub async fn get_items(
    Extension(item_storage): Extension<Arc<ItemStorage>>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = item_storage.get_all().await?;

    Ok(Json(items))
}

/// Replace an item, creating it if it does not exist
///
/// The id from the path wins over any id in the body.
///
/// # Returns
///
/// Returns `200 OK` with the stored item
///
/// # Errors
///
/// Returns `500 INTERNAL_SERVER_ERROR` if the storage write fails
pub async fn update_item(
    Path(id): Path<String>,
    Extension(item_storage): Extension<Arc<ItemStorage>>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, AppError> {
    let item = item_storage.update(&id, item).await?;

    Ok(Json(item))
}

/// Delete an item
///
/// # Returns
///
/// Returns `200 OK` with an empty body
///
/// # Errors
///
/// Returns an error if:
/// - `404 NOT_FOUND` - No item with the given id exists
/// - `500 INTERNAL_SERVER_ERROR` - Storage operation fails
pub async fn delete_item(
    Path(id): Path<String>,
    Extension(item_storage): Extension<Arc<ItemStorage>>,
) -> Result<StatusCode, AppError> {
    item_storage.delete(&id).await?;

    Ok(StatusCode::OK)
}
