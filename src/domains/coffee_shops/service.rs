//! Coffee shop service.
//!
//! Validates raw payloads and drives the coffee shop store. Identifiers are
//! supplied by the caller and stored as given.

use serde_json::Value;
use tracing::{info, instrument};

use super::model::{CoffeeShop, CoffeeShopUpdate, demo_coffee_shops};
use crate::domains::store::{Deleted, ResourceStore, StoreResult, Validate};

pub struct CoffeeShopService {
    store: ResourceStore<CoffeeShop>,
}

impl CoffeeShopService {
    pub fn new() -> Self {
        info!("Initializing CoffeeShopService");
        Self {
            store: ResourceStore::new(),
        }
    }

    /// Insert the demo shops through the regular create path.
    pub async fn seed_demo_data(&self) {
        for shop in demo_coffee_shops() {
            self.insert(shop).await;
        }
        if let Some(first) = self.store.list().await.first() {
            info!("First coffee shop ID: {}", first.id);
            info!("Name: {}", first.name);
        }
    }

    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> StoreResult<CoffeeShop> {
        let shop = CoffeeShop::validate(payload)?;
        Ok(self.insert(shop).await)
    }

    async fn insert(&self, shop: CoffeeShop) -> CoffeeShop {
        let shop = self.store.insert(shop).await;
        info!(id = %shop.id, "Added coffee shop '{}'", shop.name);
        shop
    }

    pub async fn list(&self) -> Vec<CoffeeShop> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> StoreResult<CoffeeShop> {
        self.store.get(&id.to_string()).await
    }

    #[instrument(skip(self, payload))]
    pub async fn replace(&self, id: &str, payload: &Value) -> StoreResult<CoffeeShop> {
        let update = CoffeeShopUpdate::validate(payload)?;
        let shop = self.store.replace(&id.to_string(), update).await?;
        info!("Updated coffee shop '{}'", shop.name);
        Ok(shop)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> StoreResult<Deleted> {
        let shop = self.store.remove(&id.to_string()).await?;
        info!("Removed coffee shop '{}'", shop.name);
        Ok(Deleted::new("coffee shop deleted successfully"))
    }
}

impl Default for CoffeeShopService {
    fn default() -> Self {
        Self::new()
    }
}
