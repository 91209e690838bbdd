//! Store domain module.
//!
//! The resource store is the shared core of every CRUD surface in this
//! server: an ordered, in-memory collection of typed records keyed by an
//! identifier.
//!
//! ## Architecture
//!
//! - `record.rs` - The `Record` trait each resource kind implements
//! - `memory.rs` - `ResourceStore`, the ordered collection and its id counter
//! - `validation.rs` - Field-level payload checks producing `ValidationError`
//! - `error.rs` - Store error types
//!
//! ## Adding a New Resource
//!
//! 1. Define the record and its update payload in a new domain module
//! 2. Implement `Record` and `Validate` for them
//! 3. Wrap a `ResourceStore<YourRecord>` in a service
//!
//! **No need to modify `memory.rs`!**

mod error;
mod memory;
mod record;
mod validation;

pub use error::{StoreError, StoreResult};
pub use memory::ResourceStore;
pub use record::{Deleted, Record};
pub use validation::{FieldIssue, PayloadReader, Validate, ValidationError};
