//! CRUD operations for book records.

use bookshelf_catalog::types::{Book, NewBook};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::queries::row_to_book;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("No book with id {0}")]
    NotFound(i64),
}

/// Insert a new book. Returns the database-assigned id.
pub fn insert_book(conn: &Connection, book: &NewBook) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO books (title, author, published_date, price_cents)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            book.title,
            book.author,
            book.published_date.to_string(),
            book.price_cents,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rewrite all editable fields of an existing book and refresh `updated_at`.
pub fn update_book(conn: &Connection, book: &Book) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE books SET
             title = ?2,
             author = ?3,
             published_date = ?4,
             price_cents = ?5,
             updated_at = datetime('now')
         WHERE id = ?1",
        params![
            book.id,
            book.title,
            book.author,
            book.published_date.to_string(),
            book.price_cents,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound(book.id));
    }
    Ok(())
}

/// Remove a book from the catalog.
pub fn delete_book(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::NotFound(id));
    }
    Ok(())
}

/// Fetch a book by id.
pub fn get_book(conn: &Connection, id: i64) -> Result<Option<Book>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, published_date, price_cents, created_at, updated_at
         FROM books WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_book);
    match result {
        Ok(book) => Ok(Some(book)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Find a book by exact title. Used by the seed importer's duplicate check.
pub fn find_book_by_title(conn: &Connection, title: &str) -> Result<Option<Book>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, published_date, price_cents, created_at, updated_at
         FROM books WHERE title = ?1 LIMIT 1",
    )?;
    let result = stmt.query_row(params![title], row_to_book);
    match result {
        Ok(book) => Ok(Some(book)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
