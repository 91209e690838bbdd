//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, logging, error handling, the shared
//! server state and the HTTP transport.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use server::LabServer;
pub use transport::{HttpConfig, HttpTransport};
