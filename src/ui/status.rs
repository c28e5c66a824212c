//! Human readable rendering of operation outputs.

use crate::config::Config;
use crate::core::ops::{Balance, Output, StatusSummary};
use crate::utils::formatting::{bold, hours};
use crate::utils::time::format_timestamp;
use crate::utils::{money, secs2readable};
use ansi_term::Colour;

const ICON_HOME: &str = "🏠";
const ICON_CLOCK: &str = "🕒";
const ICON_PENDING: &str = "💰";
const ICON_OVERPAID: &str = "💸";

/// Colour of a balance: green when money is owed, red when overpaid
fn colour_for_balance(balance: &Balance) -> Colour {
    match balance {
        Balance::Pending(_) => Colour::Green,
        Balance::Overpaid(_) => Colour::Red,
    }
}

pub fn balance_line(balance: &Balance, cfg: &Config) -> String {
    let (icon, text) = match balance {
        Balance::Pending(a) => (ICON_PENDING, format!("Pending: {}", money(*a, &cfg.currency))),
        Balance::Overpaid(a) => (ICON_OVERPAID, format!("Overpaid: {}", money(*a, &cfg.currency))),
    };
    format!("{} {}", icon, colour_for_balance(balance).paint(text))
}

/// Shift indicator, then the balance line only when something is outstanding.
pub fn render_status(summary: &StatusSummary, cfg: &Config) -> Vec<String> {
    let mut lines = Vec::new();

    match summary.elapsed_seconds {
        Some(secs) => lines.push(format!(
            "{} In a shift for {} (+{} so far)",
            ICON_CLOCK,
            bold(&secs2readable(secs, false)),
            money(summary.accruing, &cfg.currency)
        )),
        None => lines.push(format!("{} Not in a shift", ICON_HOME)),
    }

    if let Some(balance) = &summary.balance {
        lines.push(balance_line(balance, cfg));
    }

    lines
}

/// One-line confirmation for a mutating operation (status excluded).
pub fn render_outcome(output: &Output, cfg: &Config) -> Vec<String> {
    let cur = cfg.currency.as_str();

    match output {
        Output::WageSet { previous, rate } => {
            let mut line = format!("Hourly wage set to {}", money(*rate, cur));
            if let Some(prev) = previous {
                line.push_str(&format!(" (was {})", money(*prev, cur)));
            }
            vec![line]
        }
        Output::PaymentRecorded { amount, balance } => {
            let mut lines = vec![format!("Payment of {} recorded", money(*amount, cur))];
            match balance {
                Some(b) => lines.push(balance_line(b, cfg)),
                None => lines.push("Nothing outstanding".to_string()),
            }
            lines
        }
        Output::ShiftBegun { at, wage } => vec![format!(
            "Shift started at {} ({}/h)",
            format_timestamp(*at, &cfg.timestamp_format),
            money(*wage, cur)
        )],
        Output::ShiftEnded { shift } => vec![format!(
            "Shift ended: {} worked ({}), {} earned",
            secs2readable(shift.seconds(), false),
            hours(shift.hours()),
            money(shift.earned(), cur)
        )],
        Output::Status(summary) => render_status(summary, cfg),
    }
}
