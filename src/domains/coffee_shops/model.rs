//! Coffee shop record and update payload.

use serde::Serialize;
use serde_json::Value;

use crate::domains::store::{PayloadReader, Record, Validate, ValidationError};

/// A coffee shop. The identifier is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeShop {
    pub id: String,
    pub name: String,
    pub neighborhood: String,
    pub specialty: String,
    pub rating: f64,
}

/// Replacement attributes for an existing coffee shop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoffeeShopUpdate {
    pub name: String,
    pub neighborhood: String,
    pub specialty: String,
    pub rating: f64,
}

impl Record for CoffeeShop {
    type Id = String;
    type Changes = CoffeeShopUpdate;

    const NOT_FOUND: &'static str = "coffee shop not found";

    fn id(&self) -> &String {
        &self.id
    }

    fn apply(&mut self, changes: CoffeeShopUpdate) {
        self.name = changes.name;
        self.neighborhood = changes.neighborhood;
        self.specialty = changes.specialty;
        self.rating = changes.rating;
    }
}

impl Validate for CoffeeShop {
    fn validate(payload: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadReader::new(payload);
        match (
            fields.string("id"),
            fields.string("name"),
            fields.string("neighborhood"),
            fields.string("specialty"),
            fields.float("rating"),
        ) {
            (Some(id), Some(name), Some(neighborhood), Some(specialty), Some(rating)) => Ok(Self {
                id,
                name,
                neighborhood,
                specialty,
                rating,
            }),
            _ => Err(fields.into_error()),
        }
    }
}

impl Validate for CoffeeShopUpdate {
    fn validate(payload: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadReader::new(payload);
        match (
            fields.string("name"),
            fields.string("neighborhood"),
            fields.string("specialty"),
            fields.float("rating"),
        ) {
            (Some(name), Some(neighborhood), Some(specialty), Some(rating)) => Ok(Self {
                name,
                neighborhood,
                specialty,
                rating,
            }),
            _ => Err(fields.into_error()),
        }
    }
}

/// The three Boston shops the service can start with.
pub fn demo_coffee_shops() -> Vec<CoffeeShop> {
    [
        ("1", "Tatte Bakery", "Back Bay", "Matcha Latte", 4.5),
        ("2", "Thinking Cup", "Downtown", "Espresso", 4.7),
        ("3", "Pavement Coffeehouse", "Fenway", "Cold Brew", 4.3),
    ]
    .into_iter()
    .map(|(id, name, neighborhood, specialty, rating)| CoffeeShop {
        id: id.to_string(),
        name: name.to_string(),
        neighborhood: neighborhood.to_string(),
        specialty: specialty.to_string(),
        rating,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_full_payload() {
        let payload = json!({
            "id": "7",
            "name": "Gracenote",
            "neighborhood": "Leather District",
            "specialty": "Pour Over",
            "rating": 5
        });
        let shop = CoffeeShop::validate(&payload).unwrap();
        assert_eq!(shop.id, "7");
        assert_eq!(shop.rating, 5.0);
    }

    #[test]
    fn test_validate_rejects_numeric_id() {
        let payload = json!({
            "id": 7,
            "name": "Gracenote",
            "neighborhood": "Leather District",
            "specialty": "Pour Over",
            "rating": 4.9
        });
        let err = CoffeeShop::validate(&payload).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].loc, vec!["body", "id"]);
    }

    #[test]
    fn test_update_ignores_id_in_body() {
        let payload = json!({
            "id": "999",
            "name": "Renamed",
            "neighborhood": "Fenway",
            "specialty": "Latte",
            "rating": 3.2
        });
        let update = CoffeeShopUpdate::validate(&payload).unwrap();

        let mut shop = demo_coffee_shops().remove(0);
        shop.apply(update);
        assert_eq!(shop.id, "1");
        assert_eq!(shop.name, "Renamed");
    }

    #[test]
    fn test_update_requires_every_field() {
        let err = CoffeeShopUpdate::validate(&json!({"name": "Only"})).unwrap_err();
        assert_eq!(err.issues().len(), 3);
    }
}
