//! Server state shared by every HTTP handler.
//!
//! `LabServer` owns one service (and therefore one store) per resource. It is
//! built once at startup and handed to the router as its state; clones share
//! the same stores.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::{books::BookService, coffee_shops::CoffeeShopService, items::ItemService};

#[derive(Clone)]
pub struct LabServer {
    /// Server configuration.
    config: Arc<Config>,

    coffee_shops: Arc<CoffeeShopService>,
    books: Arc<BookService>,
    items: Arc<ItemService>,
}

impl LabServer {
    /// Create a server with empty stores.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            coffee_shops: Arc::new(CoffeeShopService::new()),
            books: Arc::new(BookService::new()),
            items: Arc::new(ItemService::new()),
        }
    }

    /// Load the demo coffee shops and books.
    pub async fn seed_demo_data(&self) {
        info!("Seeding demo data");
        self.coffee_shops.seed_demo_data().await;
        self.books.seed_demo_data().await;

        if let Some(average) = self.books.average_price().await {
            info!("Average book price: ${:.2}", average);
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn coffee_shops(&self) -> &CoffeeShopService {
        &self.coffee_shops
    }

    pub fn books(&self) -> &BookService {
        &self.books
    }

    pub fn items(&self) -> &ItemService {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_stores() {
        let server = LabServer::new(Config::default());
        let clone = server.clone();

        clone
            .items()
            .create(&serde_json::json!({"name": "shared", "description": "d"}))
            .await
            .unwrap();
        assert_eq!(server.items().list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_seed_demo_data() {
        let server = LabServer::new(Config::default());
        server.seed_demo_data().await;

        assert_eq!(server.coffee_shops().list().await.len(), 3);
        assert_eq!(server.books().list().await.len(), 3);
        assert!(server.items().list().await.is_empty());
        assert_eq!(server.name(), "crud-labs-server");
    }
}
