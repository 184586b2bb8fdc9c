use thiserror::Error;

/// Errors that can occur during startup, before the interactive loop takes
/// over error reporting.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or created
    #[error("Database error: {0}")]
    Schema(#[from] bookshelf_db::SchemaError),

    /// Seed import aborted
    #[error("Seed import failed: {0}")]
    Import(#[from] bookshelf_import::ImportError),
}
