//! Items domain module.
//!
//! Generic name/description items with store-assigned sequential ids.

mod handlers;
mod model;
mod service;

pub use handlers::{ITEMS_PATH, item_routes};
pub use model::{Item, ItemPayload};
pub use service::ItemService;
