use chrono::{Duration, NaiveDate};

#[must_use]
pub fn format_aired_date(date: NaiveDate) -> String {
    format!("Aired {}", date.format("%b %-d, %Y"))
}

/// `m:ss`, clamped at zero.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}
