//! Date validation for the search form's optional date range.
//!
//! A single textual format is accepted: month/day/year with a four digit year
//! (`4/5/2023` or `04/05/2023`). Valid dates are normalized to `MM/DD/YYYY`,
//! which is also the format the search endpoint expects.

use chrono::NaiveDate;
use thiserror::Error;

/// Canonical output format for validated dates
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Placeholder shown in empty date fields
pub const DATE_PLACEHOLDER: &str = "MM/DD/YYYY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date: '{0}' (expected MM/DD/YYYY)")]
    Format(String),
    #[error("Start date {start} is after end date {end}")]
    Range { start: String, end: String },
}

/// Parse a user-entered date; empty input means "no date"
pub fn parse_date(input: &str) -> Result<Option<NaiveDate>, DateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let format_error = || DateError::Format(input.to_string());

    let parts: Vec<&str> = trimmed.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(format_error());
    };

    if !is_digits(month, 1..=2) || !is_digits(day, 1..=2) || !is_digits(year, 4..=4) {
        return Err(format_error());
    }

    // Digits were checked above, so these parses only fail on overflow
    let month: u32 = month.parse().map_err(|_| format_error())?;
    let day: u32 = day.parse().map_err(|_| format_error())?;
    let year: i32 = year.parse().map_err(|_| format_error())?;

    // Rejects impossible dates such as 02/30/2024
    NaiveDate::from_ymd_opt(year, month, day).map(Some).ok_or_else(format_error)
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a single date field, returning its normalized text
///
/// Empty input is valid and yields an empty string.
///
/// # Examples
///
/// ```
/// use civicly::form::dates::validate_date;
///
/// assert_eq!(validate_date("4/5/2023").unwrap(), "04/05/2023");
/// assert_eq!(validate_date("").unwrap(), "");
/// assert!(validate_date("2023-04-05").is_err());
/// ```
pub fn validate_date(input: &str) -> Result<String, DateError> {
    Ok(parse_date(input)?.map(format_date).unwrap_or_default())
}

/// Validate a start/end pair, returning both normalized
///
/// Fails with [`DateError::Range`] when both are present and start is strictly
/// after end. Equal dates are allowed.
pub fn validate_range(start: &str, end: &str) -> Result<(String, String), DateError> {
    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;

    if let (Some(s), Some(e)) = (start_date, end_date)
        && s > e
    {
        return Err(DateError::Range { start: format_date(s), end: format_date(e) });
    }

    Ok((
        start_date.map(format_date).unwrap_or_default(),
        end_date.map(format_date).unwrap_or_default(),
    ))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
