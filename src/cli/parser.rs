use crate::core::ops::Operation;
use clap::{ArgGroup, Parser};

/// Command-line interface definition for rHours
#[derive(Parser, Debug)]
#[command(
    name = "rhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tool for managing your work hours and the money you made",
    long_about = None,
    group(ArgGroup::new("mode").multiple(false))
)]
pub struct Cli {
    /// Override the event log path (useful for tests or a second job)
    #[arg(long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Verbose diagnostics on stderr and full error details
    #[arg(long = "debug")]
    pub debug: bool,

    #[arg(short = 's', long = "status", group = "mode", help = "See the current status summary (default)")]
    pub status: bool,

    #[arg(short = 'b', long = "begin", group = "mode", help = "Begin a shift")]
    pub begin: bool,

    #[arg(short = 'e', long = "end", group = "mode", help = "End the ongoing shift")]
    pub end: bool,

    #[arg(
        short = 'p',
        long = "payment",
        value_name = "AMOUNT",
        group = "mode",
        allow_negative_numbers = true,
        value_parser = non_negative_amount,
        help = "Add a received payment"
    )]
    pub payment: Option<f64>,

    #[arg(
        short = 'w',
        long = "wage",
        value_name = "RATE",
        group = "mode",
        allow_negative_numbers = true,
        value_parser = non_negative_amount,
        help = "Change the hourly wage"
    )]
    pub wage: Option<f64>,

    #[arg(long = "bitbar", group = "mode", help = "Print the status for a BitBar/xbar menu-bar plugin")]
    pub bitbar: bool,

    #[arg(long = "clear", group = "mode", help = "Delete the whole event log")]
    pub clear: bool,

    #[arg(short = 'y', long = "yes", requires = "clear", help = "Do not ask for confirmation (with --clear)")]
    pub yes: bool,

    #[arg(long = "config", group = "mode", help = "Print the current configuration")]
    pub show_config: bool,
}

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Run(Operation),
    Bitbar,
    Clear { confirmed: bool },
    ShowConfig,
}

impl Cli {
    pub fn action(&self) -> Action {
        if let Some(rate) = self.wage {
            Action::Run(Operation::Wage(rate))
        } else if let Some(amount) = self.payment {
            Action::Run(Operation::Payment(amount))
        } else if self.begin {
            Action::Run(Operation::Begin)
        } else if self.end {
            Action::Run(Operation::End)
        } else if self.bitbar {
            Action::Bitbar
        } else if self.clear {
            Action::Clear { confirmed: self.yes }
        } else if self.show_config {
            Action::ShowConfig
        } else {
            Action::Run(Operation::Status)
        }
    }
}

/// Value parser for money amounts and rates: a finite number ≥ 0.
pub fn non_negative_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;

    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", s));
    }
    if value < 0.0 {
        return Err(format!("'{}' must not be negative", s));
    }
    Ok(value)
}
