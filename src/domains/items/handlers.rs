//! HTTP handlers for `/items`.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};
use tracing::debug;

use super::model::{Item, ItemPayload};
use crate::core::LabServer;
use crate::core::transport::JsonPayload;
use crate::domains::store::{
    Deleted, FieldIssue, Record, StoreError, StoreResult, Validate, ValidationError,
};

/// Base path of the item resource.
pub const ITEMS_PATH: &str = "/items";

/// Routes for the item resource.
pub fn item_routes() -> Router<LabServer> {
    Router::new()
        .route(ITEMS_PATH, get(list_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(get_item).put(replace_item).delete(delete_item),
        )
}

/// Parse the raw `item_id` segment.
///
/// Anything that is not an integer is a validation failure. Integers no item
/// can carry (negative, or wider than `u64`) parse to `None` and end up as
/// not found.
fn item_id(path: Result<Path<String>, PathRejection>) -> StoreResult<Option<u64>> {
    let raw = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!("Rejected item id: {}", rejection);
            return Err(not_an_integer());
        }
    };

    let text = raw.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!("Rejected item id: {:?}", raw);
        return Err(not_an_integer());
    }

    if negative {
        return Ok(None);
    }
    Ok(digits.parse::<u64>().ok())
}

fn not_an_integer() -> StoreError {
    ValidationError::single(FieldIssue::new(
        &["path", "item_id"],
        "Input should be a valid integer, unable to parse string as an integer",
        "int_parsing",
    ))
    .into()
}

fn unknown_item() -> StoreError {
    StoreError::not_found(Item::NOT_FOUND)
}

async fn list_items(State(server): State<LabServer>) -> Json<Vec<Item>> {
    Json(server.items().list().await)
}

async fn create_item(
    State(server): State<LabServer>,
    JsonPayload(payload): JsonPayload,
) -> StoreResult<Json<Item>> {
    server.items().create(&payload).await.map(Json)
}

async fn get_item(
    State(server): State<LabServer>,
    path: Result<Path<String>, PathRejection>,
) -> StoreResult<Json<Item>> {
    let id = item_id(path)?.ok_or_else(unknown_item)?;
    server.items().get(id).await.map(Json)
}

async fn replace_item(
    State(server): State<LabServer>,
    path: Result<Path<String>, PathRejection>,
    JsonPayload(payload): JsonPayload,
) -> StoreResult<Json<Item>> {
    match item_id(path)? {
        Some(id) => server.items().replace(id, &payload).await.map(Json),
        None => {
            // A bad body still wins over a missing item.
            ItemPayload::validate(&payload)?;
            Err(unknown_item())
        }
    }
}

async fn delete_item(
    State(server): State<LabServer>,
    path: Result<Path<String>, PathRejection>,
) -> StoreResult<Json<Deleted>> {
    let id = item_id(path)?.ok_or_else(unknown_item)?;
    server.items().delete(id).await.map(Json)
}
