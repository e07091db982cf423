//! Cross-cutting helpers: display formatting and calendar-date handling.

pub mod dates;
pub mod format;
