//! CRUD Labs Server Library
//!
//! An in-memory resource store served over a small REST API. Three resources
//! are exposed: coffee shops and books (caller-supplied string ids) and items
//! (store-assigned sequential integer ids).
//!
//! # Architecture
//!
//! - **core**: Configuration, logging, error handling, shared server state and
//!   the HTTP transport
//! - **domains**: Business logic organized by resource
//!   - **store**: The generic ordered resource store and payload validation
//!   - **coffee_shops**, **books**, **items**: One REST resource each
//!
//! # Example
//!
//! ```rust,no_run
//! use crud_labs_server::core::{Config, HttpTransport, LabServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = LabServer::new(config.clone());
//!     HttpTransport::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, LabServer, Result};
