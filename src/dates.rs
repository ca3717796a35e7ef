use chrono::{DateTime, Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode digits.
static EMBEDDED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("valid date pattern"));

/// A `YYYY-MM-DD` date lifted verbatim from free text. The parts are not
/// validated as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub key: String,
}

impl EmbeddedDate {
    pub fn quarter_key(&self) -> Option<String> {
        quarter_key(self.year, self.month)
    }
}

pub fn extract_embedded_date(text: &str) -> Option<EmbeddedDate> {
    let captures = EMBEDDED_DATE.captures(text)?;
    let year = captures.get(1)?.as_str();
    let month = captures.get(2)?.as_str();
    let day = captures.get(3)?.as_str();

    Some(EmbeddedDate {
        year: year.parse().ok()?,
        month: month.parse().ok()?,
        day: day.parse().ok()?,
        key: format!("{year}-{month}-{day}"),
    })
}

/// Reads the leading integer of `text` the way `parseInt` does: surrounding
/// whitespace and trailing garbage are ignored, at least one digit is required.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// UTC calendar date of a Unix-seconds timestamp given as text.
pub fn posted_date(posted: &str) -> Option<NaiveDate> {
    let seconds = parse_leading_int(posted)?;
    DateTime::from_timestamp(seconds, 0).map(|instant| instant.date_naive())
}

pub fn posted_quarter_key(posted: &str) -> Option<String> {
    let date = posted_date(posted)?;
    quarter_key(date.year(), date.month())
}

/// `"YYYY-Qn"` with `n = ceil(month / 3)`. Years outside `0..=9999` and months
/// outside `1..=12` have no key.
pub fn quarter_key(year: i32, month: u32) -> Option<String> {
    if !(0..=9999).contains(&year) || !(1..=12).contains(&month) {
        return None;
    }
    Some(format!("{year:04}-Q{}", month.div_ceil(3)))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
