//! Re-prompting input loops built on the field validators.
//!
//! Each loop keeps asking until the input validates, showing the
//! validator's message and waiting for an enter-press between attempts.
//! Only I/O failures escape to the caller.

use std::io;

use bookshelf_catalog::parse::{parse_date, parse_id, parse_price};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::console::Console;

/// Prompt until the input parses as a valid calendar date.
pub(crate) fn prompt_date(console: &mut dyn Console, prompt: &str) -> io::Result<NaiveDate> {
    loop {
        let line = console.read_line(prompt)?;
        match parse_date(&line) {
            Ok(date) => return Ok(date),
            Err(e) => {
                console.say(&format!(
                    "\n{}",
                    "Date error".if_supports_color(Stdout, |t| t.red())
                ));
                console.say(&format!("  {e}"));
                console.say("  The date should be a month name, day and year from the past.");
                console.say("  Example: January 13, 2003");
                console.pause("  Press enter to try again. ")?;
            }
        }
    }
}

/// Prompt until the input parses as a price.
pub(crate) fn prompt_price(console: &mut dyn Console, prompt: &str) -> io::Result<i64> {
    loop {
        let line = console.read_line(prompt)?;
        match parse_price(&line) {
            Ok(cents) => return Ok(cents),
            Err(e) => {
                console.say(&format!(
                    "\n{}",
                    "Price error".if_supports_color(Stdout, |t| t.red())
                ));
                console.say(&format!("  {e}"));
                console.say("  The price should be a number without a currency symbol.");
                console.say("  Example: 10.99");
                console.pause("  Press enter to try again. ")?;
            }
        }
    }
}

/// Prompt until the input names one of the listed book ids.
pub(crate) fn prompt_id(console: &mut dyn Console, options: &[i64]) -> io::Result<i64> {
    let prompt = format!("\nOptions: {options:?}\nWhat is the book's id? ");
    loop {
        let line = console.read_line(&prompt)?;
        match parse_id(&line, options) {
            Ok(id) => return Ok(id),
            Err(e) => {
                console.say(&format!(
                    "\n{}",
                    "ID error".if_supports_color(Stdout, |t| t.red())
                ));
                console.say(&format!("  {e}"));
                console.pause("  Press enter to try again. ")?;
            }
        }
    }
}
