//! Date formatting for shaped records.

use chrono::{DateTime, Utc};

/// Formats a timestamp as `M/D/YYYY` without zero padding.
///
/// # Examples
///
/// ```ignore
/// let ts = "2011-01-25T18:44:36Z".parse().unwrap();
/// assert_eq!(display_date(ts), "1/25/2011");
/// ```
pub fn display_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y").to_string()
}
