//! Book service.
//!
//! Besides validation and store access, the book service watches for a few
//! suspicious patterns and reports them through the log: implausible page
//! counts, reused identifiers, steep price drops and a shrinking collection.

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::model::{Book, BookUpdate, MAX_PLAUSIBLE_PAGES, demo_books, is_clearance_drop};
use crate::domains::store::{Deleted, Record, ResourceStore, StoreResult, Validate};

/// At or below this many books a delete is logged as critical.
const LOW_COLLECTION_THRESHOLD: usize = 2;

pub struct BookService {
    store: ResourceStore<Book>,
}

impl BookService {
    pub fn new() -> Self {
        info!("Initializing BookService");
        Self {
            store: ResourceStore::new(),
        }
    }

    pub async fn seed_demo_data(&self) {
        for book in demo_books() {
            self.insert(book).await;
        }
        info!(
            "Books API initialized with {} books",
            self.store.len().await
        );
    }

    #[instrument(skip_all)]
    pub async fn create(&self, payload: &Value) -> StoreResult<Book> {
        let book = Book::validate(payload)?;
        debug!(?book, "Processing new book addition");
        Ok(self.insert(book).await)
    }

    async fn insert(&self, book: Book) -> Book {
        if book.pages > MAX_PLAUSIBLE_PAGES {
            warn!(
                "Unusually high page count detected: {} pages for book '{}'",
                book.pages, book.title
            );
        }
        let (book, duplicate) = self.store.insert_noting_duplicate(book).await;
        if duplicate {
            warn!("Duplicate book ID detected: {}", book.id);
        }
        info!("Added '{}' by {}", book.title, book.author);
        book
    }

    pub async fn list(&self) -> Vec<Book> {
        let books = self.store.list().await;
        info!("Returning {} books", books.len());
        books
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> StoreResult<Book> {
        match self.store.get(&id.to_string()).await {
            Ok(book) => {
                info!("Book found: '{}'", book.title);
                Ok(book)
            }
            Err(e) => {
                error!("Book {} not found", id);
                Err(e)
            }
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn replace(&self, id: &str, payload: &Value) -> StoreResult<Book> {
        let update = BookUpdate::validate(payload)?;

        let result = self
            .store
            .modify(&id.to_string(), |book| {
                let old_price = book.price;
                book.apply(update);
                (old_price, book.clone())
            })
            .await;

        match result {
            Ok((old_price, book)) => {
                if is_clearance_drop(old_price, book.price) {
                    warn!(
                        "Significant price drop for book {}: ${:.2} -> ${:.2} (possible clearance)",
                        id, old_price, book.price
                    );
                }
                info!("Updated '{}'", book.title);
                Ok(book)
            }
            Err(e) => {
                error!("Book {} not found for update", id);
                Err(e)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> StoreResult<Deleted> {
        let remaining = self.store.len().await;
        if remaining <= LOW_COLLECTION_THRESHOLD {
            error!(
                "CRITICAL: Library collection is critically low! Only {} books remaining.",
                remaining
            );
        }

        match self.store.remove(&id.to_string()).await {
            Ok(book) => {
                info!("Removed '{}'", book.title);
                Ok(Deleted::new("book deleted successfully").with_title(book.title))
            }
            Err(e) => {
                error!("Book {} not found for deletion", id);
                Err(e)
            }
        }
    }

    /// Mean price over the current collection, `None` when it is empty.
    pub async fn average_price(&self) -> Option<f64> {
        let books = self.store.list().await;
        if books.is_empty() {
            return None;
        }
        let total: f64 = books.iter().map(|book| book.price).sum();
        Some(total / books.len() as f64)
    }
}

impl Default for BookService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book_payload(id: &str, title: &str, price: f64) -> Value {
        json!({
            "id": id,
            "title": title,
            "author": "Anon",
            "price": price,
            "pages": 100
        })
    }

    #[tokio::test]
    async fn test_seeded_collection() {
        let service = BookService::new();
        service.seed_demo_data().await;

        let books = service.list().await;
        assert_eq!(books.len(), 3);
        assert_eq!(books[1].title, "1984");
    }

    #[tokio::test]
    async fn test_average_price() {
        let service = BookService::new();
        assert_eq!(service.average_price().await, None);

        service.create(&book_payload("a", "A", 10.0)).await.unwrap();
        service.create(&book_payload("b", "B", 20.0)).await.unwrap();
        assert_eq!(service.average_price().await, Some(15.0));
    }

    #[tokio::test]
    async fn test_duplicate_id_is_stored() {
        let service = BookService::new();
        service.create(&book_payload("1", "First", 5.0)).await.unwrap();
        service.create(&book_payload("1", "Second", 6.0)).await.unwrap();

        assert_eq!(service.list().await.len(), 2);
        assert_eq!(service.get("1").await.unwrap().title, "First");
    }

    #[tokio::test]
    async fn test_replace_price_drop() {
        let service = BookService::new();
        service.create(&book_payload("1", "Sale", 40.0)).await.unwrap();

        let update = json!({"title": "Sale", "author": "Anon", "price": 5.0, "pages": 100});
        let updated = service.replace("1", &update).await.unwrap();
        assert_eq!(updated.price, 5.0);
        assert_eq!(updated.id, "1");
    }

    #[tokio::test]
    async fn test_replace_invalid_payload_keeps_book() {
        let service = BookService::new();
        let created = service.create(&book_payload("1", "Keep", 40.0)).await.unwrap();

        let err = service
            .replace("1", &json!({"title": "Broken"}))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get("1").await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_echoes_title() {
        let service = BookService::new();
        service.seed_demo_data().await;

        let deleted = service.delete("2").await.unwrap();
        assert_eq!(deleted.message, "book deleted successfully");
        assert_eq!(deleted.title.as_deref(), Some("1984"));

        let ids: Vec<_> = service.list().await.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_delete_missing_book() {
        let service = BookService::new();
        let err = service.delete("nope").await.unwrap_err();
        assert_eq!(err.to_string(), "book not found");
    }
}
