//! Interactive replacement of a single book field.
//!
//! Each editor shows the field's current value, then collects a
//! replacement. Dates and prices loop through their validators until the
//! input is acceptable; title and author are free text and taken verbatim.

use std::io;

use bookshelf_catalog::parse::{format_date, format_price};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::console::Console;
use crate::prompt;

fn show_current(console: &mut dyn Console, label: &str, current: &str) {
    console.say(&format!(
        "\n{}",
        format!("Edit {label}").if_supports_color(Stdout, |t| t.bold())
    ));
    console.say(&format!("Current value: {current}"));
}

/// Prompt once for a free-text field and return the input verbatim.
pub(crate) fn edit_text(
    console: &mut dyn Console,
    label: &str,
    current: &str,
) -> io::Result<String> {
    show_current(console, label, current);
    console.read_line("What would you like to change it to? ")
}

/// Prompt for a replacement date until it parses.
pub(crate) fn edit_date(console: &mut dyn Console, current: NaiveDate) -> io::Result<NaiveDate> {
    show_current(console, "Published Date", &format_date(current));
    prompt::prompt_date(
        console,
        "What would you like to change it to? (Example: January 13, 2003) ",
    )
}

/// Prompt for a replacement price until it parses.
pub(crate) fn edit_price(console: &mut dyn Console, current_cents: i64) -> io::Result<i64> {
    show_current(console, "Price", &format_price(current_cents));
    prompt::prompt_price(
        console,
        "What would you like to change it to? (Example: 10.99) ",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn edit_text_returns_input_verbatim() {
        let mut console = ScriptedConsole::new(["  spaced out  "]);
        let value = edit_text(&mut console, "Title", "Old Title").unwrap();
        assert_eq!(value, "  spaced out  ");
        assert!(console.output_text().contains("Current value: Old Title"));
    }

    #[test]
    fn edit_text_accepts_empty_input() {
        let mut console = ScriptedConsole::new([""]);
        assert_eq!(edit_text(&mut console, "Author", "Someone").unwrap(), "");
    }

    #[test]
    fn edit_date_loops_until_valid() {
        let mut console = ScriptedConsole::new([
            "not a date",
            "", // press enter after the error banner
            "March 15, ninety", // year still malformed
            "",
            "March 15, 2010",
        ]);
        let current = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
        let date = edit_date(&mut console, current).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2010, 3, 15).unwrap());
        assert!(console.output_text().contains("Current value: January 01, 2001"));
        assert!(console.output_text().contains("Date error"));
    }

    #[test]
    fn edit_price_shows_major_units_and_returns_cents() {
        let mut console = ScriptedConsole::new(["12.50"]);
        let cents = edit_price(&mut console, 1099).unwrap();
        assert_eq!(cents, 1250);
        assert!(console.output_text().contains("Current value: 10.99"));
    }
}
