//! HTTP handlers for `/coffee-shops`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use super::model::CoffeeShop;
use crate::core::LabServer;
use crate::core::transport::JsonPayload;
use crate::domains::store::{Deleted, StoreResult};

/// Base path of the coffee shop resource.
pub const COFFEE_SHOPS_PATH: &str = "/coffee-shops";

/// Routes for the coffee shop resource.
pub fn coffee_shop_routes() -> Router<LabServer> {
    Router::new()
        .route(
            COFFEE_SHOPS_PATH,
            get(list_coffee_shops).post(create_coffee_shop),
        )
        .route(
            "/coffee-shops/{id}",
            get(get_coffee_shop)
                .put(replace_coffee_shop)
                .delete(delete_coffee_shop),
        )
}

async fn list_coffee_shops(State(server): State<LabServer>) -> Json<Vec<CoffeeShop>> {
    Json(server.coffee_shops().list().await)
}

async fn create_coffee_shop(
    State(server): State<LabServer>,
    JsonPayload(payload): JsonPayload,
) -> StoreResult<(StatusCode, Json<CoffeeShop>)> {
    let shop = server.coffee_shops().create(&payload).await?;
    Ok((StatusCode::CREATED, Json(shop)))
}

async fn get_coffee_shop(
    State(server): State<LabServer>,
    Path(id): Path<String>,
) -> StoreResult<Json<CoffeeShop>> {
    server.coffee_shops().get(&id).await.map(Json)
}

async fn replace_coffee_shop(
    State(server): State<LabServer>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> StoreResult<Json<CoffeeShop>> {
    server.coffee_shops().replace(&id, &payload).await.map(Json)
}

async fn delete_coffee_shop(
    State(server): State<LabServer>,
    Path(id): Path<String>,
) -> StoreResult<Json<Deleted>> {
    server.coffee_shops().delete(&id).await.map(Json)
}
