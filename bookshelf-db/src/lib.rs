//! SQLite persistence layer for the book catalog.
//!
//! Provides schema creation, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use rusqlite::Connection;

pub use operations::{
    delete_book, find_book_by_title, get_book, insert_book, update_book, OperationError,
};
pub use queries::{book_ids, count_books, list_books};
pub use schema::{create_schema, open_database, open_memory, SchemaError};
