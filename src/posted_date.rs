// src/posted_date.rs
//! Converts the search API's relative "posted X ago" phrases into absolute dates.

use chrono::{Datelike, Days, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

/// Placeholder written when a date cannot be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Two-digit month, two-digit day, four-digit year.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

lazy_static! {
    // Anchored at the start only; trailing text after "ago" is ignored.
    static ref DAY_REGEX: Regex = Regex::new(r"^([0-9]+) days? ago").unwrap();
    static ref WEEK_REGEX: Regex = Regex::new(r"^([0-9]+) weeks? ago").unwrap();
    static ref MONTH_REGEX: Regex = Regex::new(r"^([0-9]+) months? ago").unwrap();
    static ref YEAR_REGEX: Regex = Regex::new(r"^([0-9]+) years? ago").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offset {
    Days(u64),
    Weeks(u64),
    Months(u64),
    Years(u64),
}

impl Offset {
    /// Patterns are tried in day, week, month, year order.
    fn parse(text: &str) -> Option<Self> {
        if let Some(n) = capture_count(&DAY_REGEX, text)? {
            return Some(Offset::Days(n));
        }
        if let Some(n) = capture_count(&WEEK_REGEX, text)? {
            return Some(Offset::Weeks(n));
        }
        if let Some(n) = capture_count(&MONTH_REGEX, text)? {
            return Some(Offset::Months(n));
        }
        capture_count(&YEAR_REGEX, text)?.map(Offset::Years)
    }

    fn subtract_from(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Offset::Days(n) => today.checked_sub_days(Days::new(n)),
            Offset::Weeks(n) => today.checked_sub_days(Days::new(n.checked_mul(7)?)),
            Offset::Months(n) => today.checked_sub_months(Months::new(u32::try_from(n).ok()?)),
            Offset::Years(n) => {
                let months = u32::try_from(n.checked_mul(12)?).ok()?;
                today.checked_sub_months(Months::new(months))
            }
        }
    }
}

/// `None` when the pattern does not match, `Some(None)` when it matches but the
/// number is too large to represent.
fn capture_count(pattern: &Regex, text: &str) -> Option<Option<u64>> {
    let captures = match pattern.captures(text) {
        Some(captures) => captures,
        None => return Some(None),
    };
    captures[1].parse::<u64>().ok().map(Some)
}

/// Resolve `posted_at` against `today` and format it as `MM/DD/YYYY`.
///
/// Anything that is not one of the four recognised phrases, or whose offset
/// lands outside the representable calendar, yields [`NOT_AVAILABLE`].
pub fn normalize_posted_at(posted_at: Option<&str>, today: NaiveDate) -> String {
    posted_at
        .and_then(|text| resolve_posted_at(text, today))
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// The absolute date behind a relative phrase, if it is recognised.
pub fn resolve_posted_at(posted_at: &str, today: NaiveDate) -> Option<NaiveDate> {
    let date = Offset::parse(posted_at)?.subtract_from(today)?;
    // Years before 1 do not fit the four-digit output format.
    (date.year() >= 1).then_some(date)
}
