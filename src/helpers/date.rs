//! Date helper functions

use chrono::NaiveDate;

/// Format used next to "Written on", e.g. "May 04, 2023"
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Format used in post file names and `<time datetime>`
pub const SOURCE_FORMAT: &str = "%Y-%m-%d";

/// Format a publish date for readers
///
/// # Examples
/// ```ignore
/// display_date(&date) // -> "May 04, 2023"
/// ```
pub fn display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Format a publish date the way post source files are named
///
/// # Examples
/// ```ignore
/// source_date(&date) // -> "2023-05-04"
/// ```
pub fn source_date(date: &NaiveDate) -> String {
    date.format(SOURCE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_source_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), SOURCE_FORMAT).ok()
}
