//! Domains module containing business logic organized by resource.
//!
//! `store` holds the shared in-memory resource store; every other submodule
//! is one REST resource built on top of it.

pub mod books;
pub mod coffee_shops;
pub mod items;
pub mod store;
