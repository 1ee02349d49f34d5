use chrono::{DateTime, Utc};

/// Long calendar date, e.g. "November 14, 2023".
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}
