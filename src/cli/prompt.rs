//! Interactive stdin prompts.

use crate::cli::parser::non_negative_amount;
use crate::core::setup::WagePrompt;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};

/// Asks the hourly wage on stdin the first time the tool runs.
pub struct StdinWagePrompt;

impl WagePrompt for StdinWagePrompt {
    fn ask_wage(&mut self) -> AppResult<f64> {
        info("No event log found: let's set it up.");
        print!("Hourly wage: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(AppError::InvalidInput("no hourly wage given".into()));
        }

        non_negative_amount(line.trim()).map_err(AppError::InvalidInput)
    }
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
