//! Import seed books from a CSV source.
//!
//! Rows are `title,author,date,price` with no header row. A row that fails
//! to decode or validate is skipped with a warning; a row whose title is
//! already in the catalog is skipped silently, so re-running the import
//! against the same seed file never duplicates records.

use std::io::Read;
use std::path::Path;

use bookshelf_catalog::parse::{parse_date, parse_price};
use bookshelf_catalog::types::NewBook;
use bookshelf_db::operations::{self, OperationError};
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Statistics from a single seed import.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub rows_read: u64,
    pub inserted: u64,
    pub skipped_existing: u64,
    pub skipped_invalid: u64,
}

/// Import seed books from the CSV file at `path`.
pub fn import_csv(conn: &Connection, path: &Path) -> Result<ImportStats, ImportError> {
    let file = std::fs::File::open(path)?;
    import_rows(conn, file)
}

/// Import seed books from any CSV source.
///
/// The whole batch commits as one transaction. Individual bad rows are
/// skipped, never fatal; only I/O and database failures abort the import.
pub fn import_rows<R: Read>(conn: &Connection, source: R) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let tx = conn.unchecked_transaction()?;

    for record in reader.records() {
        stats.rows_read += 1;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping unreadable seed row: {e}");
                stats.skipped_invalid += 1;
                continue;
            }
        };
        match seed_row(&tx, &record)? {
            RowOutcome::Inserted => stats.inserted += 1,
            RowOutcome::Existing => stats.skipped_existing += 1,
            RowOutcome::Invalid => stats.skipped_invalid += 1,
        }
    }

    tx.commit()?;

    Ok(stats)
}

enum RowOutcome {
    Inserted,
    Existing,
    Invalid,
}

/// Validate and insert a single seed row.
fn seed_row(conn: &Connection, record: &csv::StringRecord) -> Result<RowOutcome, ImportError> {
    let (Some(title), Some(author), Some(date_text), Some(price_text)) =
        (record.get(0), record.get(1), record.get(2), record.get(3))
    else {
        log::warn!(
            "Skipping seed row with {} column(s), expected 4",
            record.len()
        );
        return Ok(RowOutcome::Invalid);
    };

    if title.is_empty() {
        log::warn!("Skipping seed row with empty title");
        return Ok(RowOutcome::Invalid);
    }

    let published_date = match parse_date(date_text) {
        Ok(date) => date,
        Err(e) => {
            log::warn!("Skipping seed row '{title}': {e}");
            return Ok(RowOutcome::Invalid);
        }
    };
    let price_cents = match parse_price(price_text) {
        Ok(cents) => cents,
        Err(e) => {
            log::warn!("Skipping seed row '{title}': {e}");
            return Ok(RowOutcome::Invalid);
        }
    };

    if operations::find_book_by_title(conn, title)?.is_some() {
        return Ok(RowOutcome::Existing);
    }

    operations::insert_book(
        conn,
        &NewBook {
            title: title.to_string(),
            author: author.to_string(),
            published_date,
            price_cents,
        },
    )?;
    Ok(RowOutcome::Inserted)
}
