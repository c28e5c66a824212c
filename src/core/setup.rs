//! First-run configuration: the log does not exist yet, ask for the wage
//! and create it with a single WAGE_SET.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Report};
use crate::store::EventLog;
use tracing::info;

/// Source of the hourly wage asked on first run.
pub trait WagePrompt {
    fn ask_wage(&mut self) -> AppResult<f64>;
}

pub fn first_run(log: &EventLog, prompt: &mut dyn WagePrompt) -> AppResult<Report> {
    let wage = prompt.ask_wage()?;

    if !wage.is_finite() || wage < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "hourly wage must be a non-negative number, got {}",
            wage
        )));
    }

    log.create_with(&Event::wage(wage))?;
    info!(path = %log.path().display(), wage, "event log initialized");

    Ok(Report::seeded(wage))
}
