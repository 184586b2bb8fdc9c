//! Read queries for the book catalog.

use bookshelf_catalog::types::Book;
use chrono::NaiveDate;
use rusqlite::Connection;

use crate::operations::OperationError;

/// List every book in the catalog, in id order.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, author, published_date, price_cents, created_at, updated_at
         FROM books ORDER BY id",
    )?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Collect the ids of every book in the catalog, in id order.
pub fn book_ids(conn: &Connection) -> Result<Vec<i64>, OperationError> {
    let mut stmt = conn.prepare("SELECT id FROM books ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Count the books in the catalog.
pub fn count_books(conn: &Connection) -> Result<i64, OperationError> {
    conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .map_err(Into::into)
}

/// Map a result row to a `Book`. Stored dates are ISO-8601 text; a value
/// that fails to decode surfaces as a conversion error, never a panic.
pub(crate) fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    let date_text: String = row.get(3)?;
    let published_date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        published_date,
        price_cents: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
