//! Coffee shops domain module.
//!
//! Boston coffee shops keyed by a caller-supplied string identifier.
//!
//! - `model.rs` - `CoffeeShop` record, update payload and demo data
//! - `service.rs` - Validation and store access
//! - `handlers.rs` - Routes under `/coffee-shops`

mod handlers;
mod model;
mod service;

pub use handlers::{COFFEE_SHOPS_PATH, coffee_shop_routes};
pub use model::{CoffeeShop, CoffeeShopUpdate, demo_coffee_shops};
pub use service::CoffeeShopService;
