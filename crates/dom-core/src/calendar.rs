//! # Calendar Fields
//!
//! Date and time-of-day checks for form input. A date is valid only if it
//! names a real calendar day: `2024-02-29` passes, `2023-02-29` does not.

use chrono::{Datelike, NaiveDate, NaiveTime};

fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'9' => c.is_ascii_digit(),
            sep => c == sep,
        })
}

/// Parse `YYYY-MM-DD`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if !has_shape(raw, "9999-99-99") {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Earliest year accepted in `DD/MM/YYYY` input.
pub const BR_DATE_MIN_YEAR: i32 = 1900;
/// Latest year accepted in `DD/MM/YYYY` input.
pub const BR_DATE_MAX_YEAR: i32 = 2100;

/// Parse `DD/MM/YYYY` with the year between 1900 and 2100.
pub fn parse_br_date(raw: &str) -> Option<NaiveDate> {
    if !has_shape(raw, "99/99/9999") {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()?;
    (BR_DATE_MIN_YEAR..=BR_DATE_MAX_YEAR)
        .contains(&date.year())
        .then_some(date)
}

/// Parse `HH:MM`, 00:00 through 23:59.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    if !has_shape(raw, "99:99") {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

pub fn is_valid_iso_date(raw: &str) -> bool {
    parse_iso_date(raw).is_some()
}

pub fn is_valid_br_date(raw: &str) -> bool {
    parse_br_date(raw).is_some()
}

pub fn is_valid_time(raw: &str) -> bool {
    parse_time(raw).is_some()
}
