//! Data model types for the book catalog.

use chrono::NaiveDate;

/// A book record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Database-assigned id, immutable for the lifetime of the catalog.
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
    /// Price in minor currency units (cents), never major-unit floats.
    pub price_cents: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// An insertion payload: a book before the database assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_date: NaiveDate,
    pub price_cents: i64,
}
