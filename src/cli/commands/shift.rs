use crate::cli::prompt::StdinWagePrompt;
use crate::config::Config;
use crate::core::ops::{Operation, Output, execute};
use crate::errors::AppResult;
use crate::store::EventLog;
use crate::ui::messages::{info, success};
use crate::ui::status::{render_outcome, render_status};
use crate::utils::money;
use crate::utils::time::now_timestamp;

/// Handle wage, payment, begin, end and status.
pub fn handle(op: &Operation, log: &EventLog, cfg: &Config, persist_config: bool) -> AppResult<()> {
    let execution = execute(log, op, now_timestamp(), &mut StdinWagePrompt)?;

    if let Some(wage) = execution.configured_wage {
        success(format!(
            "Event log created at {} with an hourly wage of {}",
            log.path().display(),
            money(wage, &cfg.currency)
        ));

        if persist_config && !Config::config_file().exists() {
            let path = cfg.save()?;
            info(format!("Configuration written to {}", path.display()));
        }
    }

    match &execution.outcome.output {
        Output::Status(summary) => {
            for line in render_status(summary, cfg) {
                println!("{}", line);
            }
        }
        other => {
            for line in render_outcome(other, cfg) {
                success(line);
            }
        }
    }

    Ok(())
}
