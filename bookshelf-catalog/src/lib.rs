//! Book catalog data model types and field parsing.
//!
//! This crate defines the catalog record types and the validators that turn
//! raw console/CSV text into typed values, without any database
//! dependencies. Consumers use these types directly for display or pass
//! them to `bookshelf-db` for persistence.

pub mod parse;
pub mod types;

pub use parse::{
    format_date, format_price, parse_date, parse_id, parse_price, ParseError, MONTHS,
};
pub use types::*;
