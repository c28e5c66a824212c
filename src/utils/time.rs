//! Time utilities: unix timestamps as stored in the log, local dates, formatting.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::fmt::Write;

/// Current time as fractional unix seconds.
pub fn now_timestamp() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

fn to_local(ts: f64) -> Option<DateTime<Local>> {
    let secs = ts.floor();
    let nanos = ((ts - secs) * 1e9) as u32;
    DateTime::from_timestamp(secs as i64, nanos).map(|dt| dt.with_timezone(&Local))
}

/// Local calendar date of a unix timestamp.
pub fn local_date(ts: f64) -> Option<NaiveDate> {
    to_local(ts).map(|dt| dt.date_naive())
}

/// Format a unix timestamp in local time, falling back to the raw number
/// when it is out of range or `fmt` is not a valid chrono format.
pub fn format_timestamp(ts: f64, fmt: &str) -> String {
    let mut out = String::new();
    match to_local(ts) {
        Some(dt) if write!(out, "{}", dt.format(fmt)).is_ok() => out,
        _ => ts.to_string(),
    }
}
