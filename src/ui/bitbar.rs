//! Status rendered for a BitBar/xbar menu-bar plugin: a title line, then
//! dropdown entries separated by `---`.

use crate::config::Config;
use crate::core::ops::{Balance, StatusSummary};
use crate::utils::formatting::hours;
use crate::utils::{money, secs2readable};

/// What the clickable dropdown entries run.
pub struct ShiftActions {
    pub executable: String,
    pub log_file: String,
}

impl ShiftActions {
    /// Dropdown entry running `<executable> <flag> --log <log_file>`.
    fn entry(&self, title: &str, flag: &str) -> String {
        format!(
            "{} | bash=\"{}\" param1={} param2=--log param3=\"{}\" terminal=false refresh=true",
            title, self.executable, flag, self.log_file
        )
    }
}

pub fn render_bitbar(summary: &StatusSummary, cfg: &Config, actions: &ShiftActions) -> Vec<String> {
    let cur = cfg.currency.as_str();
    let signed_balance = match summary.balance {
        Some(Balance::Pending(a)) => money(a, cur),
        Some(Balance::Overpaid(a)) => format!("-{}", money(a, cur)),
        None => money(0.0, cur),
    };
    let colour = if summary.in_shift() { "green" } else { "red" };

    let mut lines = vec![
        format!("{} : {} | color={}", hours(summary.hours_today), signed_balance, colour),
        "---".to_string(),
        format!("Hours worked today: {}", hours(summary.hours_today)),
        format!("Payment since last paycheck: {}", signed_balance),
    ];

    match summary.elapsed_seconds {
        Some(secs) => lines.push(format!(
            "Shift ongoing: {} (+{})",
            secs2readable(secs, true),
            money(summary.accruing, cur)
        )),
        None => lines.push("Shift not ongoing".to_string()),
    }

    lines.push("---".to_string());
    if summary.in_shift() {
        lines.push(actions.entry("End Shift", "--end"));
    } else {
        lines.push(actions.entry("Start Shift", "--begin"));
    }

    lines
}

pub fn render_not_configured() -> Vec<String> {
    vec!["Not configured".to_string()]
}
