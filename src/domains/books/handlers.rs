//! HTTP handlers for `/books`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use super::model::Book;
use crate::core::LabServer;
use crate::core::transport::JsonPayload;
use crate::domains::store::{Deleted, StoreResult};

/// Base path of the book resource.
pub const BOOKS_PATH: &str = "/books";

/// Routes for the book resource.
pub fn book_routes() -> Router<LabServer> {
    Router::new()
        .route(BOOKS_PATH, get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(replace_book).delete(delete_book),
        )
}

async fn list_books(State(server): State<LabServer>) -> Json<Vec<Book>> {
    Json(server.books().list().await)
}

async fn create_book(
    State(server): State<LabServer>,
    JsonPayload(payload): JsonPayload,
) -> StoreResult<(StatusCode, Json<Book>)> {
    let book = server.books().create(&payload).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn get_book(
    State(server): State<LabServer>,
    Path(id): Path<String>,
) -> StoreResult<Json<Book>> {
    server.books().get(&id).await.map(Json)
}

async fn replace_book(
    State(server): State<LabServer>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> StoreResult<Json<Book>> {
    server.books().replace(&id, &payload).await.map(Json)
}

async fn delete_book(
    State(server): State<LabServer>,
    Path(id): Path<String>,
) -> StoreResult<Json<Deleted>> {
    server.books().delete(&id).await.map(Json)
}
