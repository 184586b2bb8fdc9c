//! bookshelf CLI
//!
//! Interactive command-line manager for a book catalog backed by SQLite,
//! seeded from a CSV file on startup.

mod console;
mod edit;
mod error;
mod prompt;
mod workflow;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::console::StdConsole;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Manage a catalog of books from the command line", long_about = None)]
struct Cli {
    /// Catalog database path
    #[arg(long, default_value = "books.db")]
    db: PathBuf,

    /// Seed CSV imported on startup when present
    #[arg(long, default_value = "suggested_books.csv")]
    seed: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let conn = bookshelf_db::open_database(&cli.db)?;

    if cli.seed.exists() {
        let stats = bookshelf_import::import_csv(&conn, &cli.seed)?;
        log::info!(
            "Seeded {} book(s) from {} ({} already present, {} invalid)",
            stats.inserted,
            cli.seed.display(),
            stats.skipped_existing,
            stats.skipped_invalid,
        );
    } else {
        log::warn!("Seed file {} not found; skipping import", cli.seed.display());
    }

    let mut console = StdConsole;
    match workflow::run(&conn, &mut console) {
        Ok(()) => Ok(()),
        // Closed stdin is a normal way for an interactive session to end.
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            log::info!("Input closed; exiting");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
