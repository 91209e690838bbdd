//! Transport layer for the server.
//!
//! The service speaks plain REST over HTTP:
//! - `http.rs` - axum router, listener lifecycle and graceful shutdown
//! - `json.rs` - request body extraction and store error responses
//! - `config.rs` - listener configuration

mod config;
mod error;
pub mod http;
mod json;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
pub use json::JsonPayload;
