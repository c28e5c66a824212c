use crate::cli::prompt::ask_confirmation;
use crate::errors::AppResult;
use crate::store::EventLog;
use crate::ui::messages::{info, success};

pub fn handle(log: &EventLog, confirmed: bool) -> AppResult<()> {
    let prompt = format!(
        "Delete the whole event log at {}? Shifts, wages and payments will be lost.",
        log.path().display()
    );

    if !confirmed && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    if log.clear()? {
        success(format!("Event log {} deleted.", log.path().display()));
    } else {
        info(format!("No event log at {}.", log.path().display()));
    }

    Ok(())
}
