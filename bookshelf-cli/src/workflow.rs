//! The interactive menu workflow.
//!
//! A blocking loop over the main menu: add, list, search (leading to the
//! per-book detail view with edit and delete), and exit. Malformed menu
//! input re-prompts; database errors on a single action are reported and
//! drop back to the menu. Only console I/O failures end the loop early.

use std::io;

use bookshelf_catalog::parse::{format_date, format_price};
use bookshelf_catalog::types::{Book, NewBook};
use bookshelf_db::operations::{self, OperationError};
use bookshelf_db::{queries, Connection};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::console::Console;
use crate::edit;
use crate::prompt;

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddBook,
    ListBooks,
    SearchBook,
    Analysis,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::ListBooks),
            "3" => Some(Self::SearchBook),
            "4" => Some(Self::Analysis),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Detail-view selection for a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailChoice {
    Edit,
    Delete,
    Back,
}

impl DetailChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Edit),
            "2" => Some(Self::Delete),
            "3" => Some(Self::Back),
            _ => None,
        }
    }
}

const MAIN_MENU: &str = "
BOOK CATALOG
  1) Add book
  2) View all books
  3) Search for a book
  4) Book analysis
  5) Exit
";

const DETAIL_MENU: &str = "
  1) Edit entry
  2) Delete entry
  3) Return to main menu
";

/// Drive the menu loop until the user chooses Exit.
pub(crate) fn run(conn: &Connection, console: &mut dyn Console) -> io::Result<()> {
    loop {
        match main_menu(console)? {
            MenuChoice::AddBook => add_book(conn, console)?,
            MenuChoice::ListBooks => list_books(conn, console)?,
            MenuChoice::SearchBook => search_book(conn, console)?,
            MenuChoice::Analysis => {
                // Reserved menu entry with no behavior yet.
                console.say(&format!(
                    "{}",
                    "Book analysis is not available yet."
                        .if_supports_color(Stdout, |t| t.dimmed())
                ));
            }
            MenuChoice::Exit => {
                console.say("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn main_menu(console: &mut dyn Console) -> io::Result<MenuChoice> {
    loop {
        console.say(MAIN_MENU);
        let line = console.read_line("What would you like to do? ")?;
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => console.pause(
                "Please choose one of the menu items above, a number between 1-5.\nPress enter. ",
            )?,
        }
    }
}

fn sub_menu(console: &mut dyn Console) -> io::Result<DetailChoice> {
    loop {
        console.say(DETAIL_MENU);
        let line = console.read_line("What would you like to do? ")?;
        match DetailChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => console.pause(
                "Please choose one of the menu items above, a number between 1-3.\nPress enter. ",
            )?,
        }
    }
}

fn add_book(conn: &Connection, console: &mut dyn Console) -> io::Result<()> {
    console.say(&format!(
        "\n{}",
        "Add a New Book".if_supports_color(Stdout, |t| t.bold())
    ));
    let title = console.read_line("Book title: ")?;
    let author = console.read_line("Author: ")?;
    let published_date = prompt::prompt_date(console, "Published (Example: January 13, 2003): ")?;
    let price_cents = prompt::prompt_price(console, "Price (Example: 10.99): ")?;

    let book = NewBook {
        title,
        author,
        published_date,
        price_cents,
    };
    match operations::insert_book(conn, &book) {
        Ok(_) => console.say(&format!(
            "{} Book added!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green())
        )),
        Err(e) => db_error(console, &e),
    }
    Ok(())
}

fn list_books(conn: &Connection, console: &mut dyn Console) -> io::Result<()> {
    match queries::list_books(conn) {
        Ok(books) if books.is_empty() => {
            console.say(&format!(
                "\n{}",
                "The catalog is empty.".if_supports_color(Stdout, |t| t.dimmed())
            ));
        }
        Ok(books) => {
            console.say("");
            for book in &books {
                console.say(&format!("{} | {} | {}", book.id, book.title, book.author));
            }
        }
        Err(e) => db_error(console, &e),
    }
    console.pause("\nPress enter to return to the main menu. ")
}

fn search_book(conn: &Connection, console: &mut dyn Console) -> io::Result<()> {
    let ids = match queries::book_ids(conn) {
        Ok(ids) => ids,
        Err(e) => {
            db_error(console, &e);
            return Ok(());
        }
    };
    if ids.is_empty() {
        console.say(&format!(
            "\n{}",
            "The catalog is empty; nothing to search.".if_supports_color(Stdout, |t| t.dimmed())
        ));
        return Ok(());
    }

    let id = prompt::prompt_id(console, &ids)?;
    match operations::get_book(conn, id) {
        Ok(Some(book)) => book_detail(conn, console, book),
        // The id list can go stale only through this same single-user loop,
        // but a missing row still shouldn't panic.
        Ok(None) => {
            console.say("That book is no longer in the catalog.");
            Ok(())
        }
        Err(e) => {
            db_error(console, &e);
            Ok(())
        }
    }
}

fn book_detail(conn: &Connection, console: &mut dyn Console, book: Book) -> io::Result<()> {
    console.say(&format!(
        "\n{} by {}",
        book.title.if_supports_color(Stdout, |t| t.bold()),
        book.author
    ));
    console.say(&format!("Published: {}", format_date(book.published_date)));
    console.say(&format!(
        "Current price: ${}",
        format_price(book.price_cents)
    ));

    match sub_menu(console)? {
        DetailChoice::Edit => edit_book(conn, console, book),
        DetailChoice::Delete => delete_book(conn, console, &book),
        DetailChoice::Back => Ok(()),
    }
}

fn edit_book(conn: &Connection, console: &mut dyn Console, mut book: Book) -> io::Result<()> {
    book.title = edit::edit_text(console, "Title", &book.title)?;
    book.author = edit::edit_text(console, "Author", &book.author)?;
    book.published_date = edit::edit_date(console, book.published_date)?;
    book.price_cents = edit::edit_price(console, book.price_cents)?;

    match operations::update_book(conn, &book) {
        Ok(()) => console.say(&format!(
            "{} Book updated!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green())
        )),
        Err(e) => db_error(console, &e),
    }
    Ok(())
}

fn delete_book(conn: &Connection, console: &mut dyn Console, book: &Book) -> io::Result<()> {
    match operations::delete_book(conn, book.id) {
        Ok(()) => console.say(&format!(
            "{} Book deleted!",
            "\u{2714}".if_supports_color(Stdout, |t| t.green())
        )),
        Err(e) => db_error(console, &e),
    }
    Ok(())
}

fn db_error(console: &mut dyn Console, e: &OperationError) {
    log::error!("database operation failed: {e}");
    console.say(&format!(
        "{} Database error: {e}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red())
    ));
}
