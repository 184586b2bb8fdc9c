//! Seed the book catalog database from external tabular sources.
//!
//! This crate owns the ETL logic: decoding seed CSV rows, validating their
//! fields, and inserting the records that are both well-formed and not
//! already present in the catalog.

pub mod csv_import;

pub use csv_import::{import_csv, import_rows, ImportError, ImportStats};
