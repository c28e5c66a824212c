use crate::config::Config;
use crate::core::ops::status;
use crate::core::report::ReportBuilder;
use crate::errors::{AppError, AppResult};
use crate::store::EventLog;
use crate::ui::bitbar::{ShiftActions, render_bitbar, render_not_configured};
use crate::utils::time::now_timestamp;
use std::env;

/// Menu-bar status. Never prompts: an unconfigured log is reported as such.
pub fn handle(log: &EventLog, cfg: &Config) -> AppResult<()> {
    let lines = if log.exists() {
        let report = ReportBuilder::new(log).read_sanitized(None, "")?;
        let summary =
            status(&report, now_timestamp()).map_err(|c| AppError::corrupt(log.path(), c))?;

        let exe = env::current_exe()?;
        let actions = ShiftActions {
            executable: exe.to_string_lossy().to_string(),
            log_file: log.path().to_string_lossy().to_string(),
        };
        render_bitbar(&summary, cfg, &actions)
    } else {
        render_not_configured()
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
