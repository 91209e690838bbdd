//! Book record and update payload.

use serde::Serialize;
use serde_json::Value;

use crate::domains::store::{PayloadReader, Record, Validate, ValidationError};

/// Page counts above this are logged as suspicious.
pub const MAX_PLAUSIBLE_PAGES: i64 = 2000;

/// A book. The identifier is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub pages: i64,
}

/// Replacement attributes for an existing book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub pages: i64,
}

impl Record for Book {
    type Id = String;
    type Changes = BookUpdate;

    const NOT_FOUND: &'static str = "book not found";

    fn id(&self) -> &String {
        &self.id
    }

    fn apply(&mut self, changes: BookUpdate) {
        self.title = changes.title;
        self.author = changes.author;
        self.price = changes.price;
        self.pages = changes.pages;
    }
}

impl Validate for Book {
    fn validate(payload: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadReader::new(payload);
        match (
            fields.string("id"),
            fields.string("title"),
            fields.string("author"),
            fields.float("price"),
            fields.integer("pages"),
        ) {
            (Some(id), Some(title), Some(author), Some(price), Some(pages)) => Ok(Self {
                id,
                title,
                author,
                price,
                pages,
            }),
            _ => Err(fields.into_error()),
        }
    }
}

impl Validate for BookUpdate {
    fn validate(payload: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadReader::new(payload);
        match (
            fields.string("title"),
            fields.string("author"),
            fields.float("price"),
            fields.integer("pages"),
        ) {
            (Some(title), Some(author), Some(price), Some(pages)) => Ok(Self {
                title,
                author,
                price,
                pages,
            }),
            _ => Err(fields.into_error()),
        }
    }
}

/// Whether a price change is steep enough to look like a clearance.
pub fn is_clearance_drop(old_price: f64, new_price: f64) -> bool {
    new_price < old_price * 0.5
}

pub fn demo_books() -> Vec<Book> {
    [
        ("1", "The Great Gatsby", "F. Scott Fitzgerald", 12.99, 180),
        ("2", "1984", "George Orwell", 14.99, 328),
        ("3", "To Kill a Mockingbird", "Harper Lee", 13.99, 281),
    ]
    .into_iter()
    .map(|(id, title, author, price, pages)| Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        price,
        pages,
    })
    .collect()
}
