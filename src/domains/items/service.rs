//! Item service.
//!
//! Items get sequential identifiers from the store; freed identifiers are
//! never handed out again.

use serde_json::Value;
use tracing::{info, instrument};

use super::model::{Item, ItemPayload};
use crate::domains::store::{Deleted, ResourceStore, StoreResult, Validate};

pub struct ItemService {
    store: ResourceStore<Item>,
}

impl ItemService {
    pub fn new() -> Self {
        info!("Initializing ItemService");
        Self {
            store: ResourceStore::new(),
        }
    }

    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> StoreResult<Item> {
        let payload = ItemPayload::validate(payload)?;
        let item = self
            .store
            .insert_with_next_id(|id| Item::new(id, payload))
            .await;
        info!(id = item.id, "Created item '{}'", item.name);
        Ok(item)
    }

    pub async fn list(&self) -> Vec<Item> {
        self.store.list().await
    }

    pub async fn get(&self, id: u64) -> StoreResult<Item> {
        self.store.get(&id).await
    }

    #[instrument(skip(self, payload))]
    pub async fn replace(&self, id: u64, payload: &Value) -> StoreResult<Item> {
        let changes = ItemPayload::validate(payload)?;
        let item = self.store.replace(&id, changes).await?;
        info!("Updated item '{}'", item.name);
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> StoreResult<Deleted> {
        let item = self.store.remove(&id).await?;
        info!("Deleted item '{}'", item.name);
        Ok(Deleted::new("Item deleted"))
    }
}

impl Default for ItemService {
    fn default() -> Self {
        Self::new()
    }
}
