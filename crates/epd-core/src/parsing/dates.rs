use super::labels::label_match;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// Day-first numeric dates as they appear in Dutch EPDs: 1-2 digit day and
// month, 4-digit year, joined by / or -.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})").unwrap());

/// Find a label via [`label_match`] and parse a date out of its value.
///
/// Returns `None` when no label matches, when the matched value contains
/// no date token, or when the token is not a valid calendar date. A label
/// that matches without a usable date does not fall through to the next
/// synonym list.
pub fn date_from_text(text: &str, labels: &[&str]) -> Option<NaiveDate> {
    let value = label_match(text, labels)?;
    let caps = DATE_RE.captures(&value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Shift a date by whole years, keeping month and day.
///
/// Feb 29 sources land on Mar 1 of the target year when it is not a leap
/// year, matching how the upstream tooling always derived validity ends.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}
