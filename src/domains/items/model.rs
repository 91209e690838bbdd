//! Item record and payload.

use serde::Serialize;
use serde_json::Value;

use crate::domains::store::{PayloadReader, Record, Validate, ValidationError};

/// A generic item. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Body of a create or replace request. Never carries an identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(id: u64, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
        }
    }
}

impl Record for Item {
    type Id = u64;
    type Changes = ItemPayload;

    const NOT_FOUND: &'static str = "Item not found";

    fn id(&self) -> &u64 {
        &self.id
    }

    fn apply(&mut self, changes: ItemPayload) {
        self.name = changes.name;
        self.description = changes.description;
    }
}

impl Validate for ItemPayload {
    fn validate(payload: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadReader::new(payload);
        match (fields.string("name"), fields.string("description")) {
            (Some(name), Some(description)) => Ok(Self { name, description }),
            _ => Err(fields.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_description() {
        let err = ItemPayload::validate(&json!({"name": "Only Name"})).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].loc, vec!["body", "description"]);
    }

    #[test]
    fn test_item_serializes_id_first() {
        let item = Item::new(
            1,
            ItemPayload {
                name: "n".into(),
                description: "d".into(),
            },
        );
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"id":1,"name":"n","description":"d"}"#
        );
    }
}
