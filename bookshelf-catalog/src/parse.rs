//! Field validators and renderers for book input.
//!
//! Raw text from the console or the seed CSV becomes typed values here.
//! Every validator returns an explicit `Result`; callers decide whether to
//! re-prompt (interactive flows) or skip the record (batch import).

use chrono::NaiveDate;
use thiserror::Error;

/// Full English month names in calendar order. Month numbers are derived
/// from position in this list (January = 1). Matching is case-sensitive.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Why a raw field failed to validate.
///
/// `IdNotFound` is the one non-format failure: the text parsed fine but
/// named an id outside the valid set. It carries the option list so the
/// caller can show the user what would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected a date like 'January 13, 2003'")]
    MissingField,
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("no such calendar date: {month} {day}, {year}")]
    NoSuchDate { year: i32, month: String, day: u32 },
    #[error("id {id} is not one of {options:?}")]
    IdNotFound { id: i64, options: Vec<i64> },
}

/// Parse a date written as `<Month name> <day>, <year>`.
///
/// The month must be one of [`MONTHS`] exactly; the day may carry a
/// trailing comma; the combination must name a real calendar date.
///
/// # Examples
///
/// ```
/// use bookshelf_catalog::parse::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("January 13, 2003").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2003, 1, 13).unwrap());
///
/// assert!(parse_date("Januar 13, 2003").is_err());
/// assert!(parse_date("February 30, 2020").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let mut fields = text.split_whitespace();
    let month_name = fields.next().ok_or(ParseError::MissingField)?;
    let day_field = fields.next().ok_or(ParseError::MissingField)?;
    let year_field = fields.next().ok_or(ParseError::MissingField)?;

    let month = MONTHS
        .iter()
        .position(|m| *m == month_name)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| ParseError::UnknownMonth(month_name.to_string()))?;

    let day_text = day_field.split(',').next().unwrap_or(day_field);
    let day: u32 = day_text
        .parse()
        .map_err(|_| ParseError::NotANumber(day_text.to_string()))?;
    let year: i32 = year_field
        .parse()
        .map_err(|_| ParseError::NotANumber(year_field.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::NoSuchDate {
        year,
        month: month_name.to_string(),
        day,
    })
}

/// Parse a price in major units ("10.99", no currency symbol) into minor
/// units (1099).
///
/// The value is multiplied by 100 and truncated toward zero, so extra
/// decimals are dropped rather than rounded. Negative prices are accepted
/// and stored as negative cent values.
pub fn parse_price(text: &str) -> Result<i64, ParseError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
    let scaled = value * 100.0;
    // Scaling in f64 leaves exact cent amounts like 0.99 a hair off an
    // integer; snap those before truncating.
    let nearest = scaled.round();
    let cents = if (scaled - nearest).abs() < 1e-6 {
        nearest
    } else {
        scaled.trunc()
    };
    Ok(cents as i64)
}

/// Parse a book id and check it against the set of valid options.
pub fn parse_id(text: &str, options: &[i64]) -> Result<i64, ParseError> {
    let trimmed = text.trim();
    let id: i64 = trimmed
        .parse()
        .map_err(|_| ParseError::NotANumber(trimmed.to_string()))?;
    if options.contains(&id) {
        Ok(id)
    } else {
        Err(ParseError::IdNotFound {
            id,
            options: options.to_vec(),
        })
    }
}

/// Render a date the way [`parse_date`] reads it: `"January 13, 2003"`.
/// Days are zero-padded to two digits.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Render a minor-unit price in major units with two decimals: `1099` →
/// `"10.99"`. The inverse of [`parse_price`] for ≤2-decimal inputs.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
