//! Formatting utilities used for CLI output.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Seconds → "02h 25m" (or "02:25" when `short`).
pub fn secs2readable(secs: f64, short: bool) -> String {
    let total_m = (secs.abs() / 60.0).floor() as i64;
    let hours = total_m / 60;
    let minutes = total_m % 60;

    if short {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Amount with currency symbol and two decimals, sign dropped.
pub fn money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount.abs())
}

pub fn hours(h: f64) -> String {
    format!("{:.2}h", h)
}
