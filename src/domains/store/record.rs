//! The record abstraction shared by every resource kind.

use serde::Serialize;
use std::fmt;

/// Trait for records held in a [`ResourceStore`](super::ResourceStore).
///
/// A record owns an immutable identifier and a set of mutable attributes
/// that are replaced wholesale by [`Record::apply`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier type (caller-supplied string or store-assigned integer).
    type Id: PartialEq + Clone + fmt::Display + Send + Sync;

    /// Validated update payload: every mutable field, no identifier.
    type Changes: Send;

    /// Detail reported to clients when a lookup misses.
    const NOT_FOUND: &'static str;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Overwrite all mutable fields from `changes`, keeping the identifier.
    fn apply(&mut self, changes: Self::Changes);
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deleted {
    pub message: String,

    /// Echo of the removed record's title, for resources that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Deleted {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
