//! Books domain module.
//!
//! Books keyed by a caller-supplied string identifier, with logging for
//! suspicious page counts, duplicate ids, price drops and low stock.

mod handlers;
mod model;
mod service;

pub use handlers::{BOOKS_PATH, book_routes};
pub use model::{Book, BookUpdate, MAX_PLAUSIBLE_PAGES, demo_books, is_clearance_drop};
pub use service::BookService;
