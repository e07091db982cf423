//! Calendar-date helpers for the ISO `YYYY-MM-DD` strings used across the app.
//!
//! Zero-padded ISO dates sort lexicographically in chronological order, so the
//! rest of the crate keeps them as plain strings; parsing only happens here,
//! for validation at the dataset boundary and for display labels.

use time::{macros::format_description, Date};

/// Parses a strict `YYYY-MM-DD` date, rejecting anything else.
pub fn parse_iso(value: &str) -> Option<Date> {
    Date::parse(value, &format_description!("[year]-[month]-[day]")).ok()
}

/// Short axis/label form, e.g. `"2023-12-01"` -> `"Dec 1"`.
///
/// Unparseable input falls back to the raw string rather than erroring; labels
/// are cosmetic.
pub fn short_label(value: &str) -> String {
    match parse_iso(value) {
        Some(date) => date
            .format(&format_description!(
                "[month repr:short] [day padding:none]"
            ))
            .unwrap_or_else(|_| value.to_string()),
        None => value.to_string(),
    }
}
