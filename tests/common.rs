#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rhours::core::setup::WagePrompt;
use rhours::errors::{AppError, AppResult};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a per-test directory so the user's
/// real configuration is never read or written.
pub fn rh(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rhours");
    cmd.env("HOME", temp_home(name));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhours_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhours_log.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a log with the given raw contents
pub fn write_test_log(name: &str, contents: &str) -> String {
    let log_path = setup_test_log(name);
    fs::write(&log_path, contents).expect("write test log");
    log_path
}

pub fn read_test_log(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// First-run prompt that answers with a fixed wage and counts the calls.
pub struct FixedWage {
    pub wage: f64,
    pub asked: usize,
}

impl FixedWage {
    pub fn new(wage: f64) -> Self {
        Self { wage, asked: 0 }
    }
}

impl WagePrompt for FixedWage {
    fn ask_wage(&mut self) -> AppResult<f64> {
        self.asked += 1;
        Ok(self.wage)
    }
}

/// Prompt that must never be reached.
pub struct NoPrompt;

impl WagePrompt for NoPrompt {
    fn ask_wage(&mut self) -> AppResult<f64> {
        Err(AppError::InvalidInput("unexpected wage prompt".into()))
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
