//! rHours library root.
//! Exposes the CLI parser, the event log store, the report builder and the
//! shift operations.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod telemetry;
pub mod ui;
pub mod utils;

use cli::parser::{Action, Cli};
use config::Config;
use errors::AppResult;
use store::EventLog;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let log = EventLog::new(cfg.log_path());

    match cli.action() {
        Action::Run(op) => cli::commands::shift::handle(&op, &log, cfg, cli.log.is_none()),
        Action::Bitbar => cli::commands::bitbar::handle(&log, cfg),
        Action::Clear { confirmed } => cli::commands::clear::handle(&log, confirmed),
        Action::ShowConfig => cli::commands::config::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run(cli: &Cli) -> AppResult<()> {
    // 1️⃣ load config once
    let mut cfg = Config::load()?;

    // 2️⃣ command-line override of the log path
    if let Some(custom_log) = &cli.log {
        cfg.log_file = custom_log.clone();
    }

    dispatch(cli, &cfg)
}
