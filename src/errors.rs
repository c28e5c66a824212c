//! Unified application error type.
//! Store, builder, operations and CLI all return AppError so the top level
//! can pick the message and the exit code in a single place.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for every failure raised by the log/shift logic.
pub const CORE_FAILURE_EXIT_CODE: i32 = 3;

/// The structural invariant a corrupted log violates.
#[derive(Debug, Clone, PartialEq)]
pub enum Corruption {
    UnknownKind { line: usize, kind: String },
    BadValue { line: usize, value: String },
    MalformedRecord { line: usize },
    DoubleBegin { line: usize },
    BeginBeforeWage { line: usize },
    DoubleEnd { line: usize },
    NegativeDuration { line: usize },
    NoWageSet,
    ShiftInFuture,
}

impl fmt::Display for Corruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Corruption::UnknownKind { line, kind } => {
                write!(f, "unknown event kind '{}' (line {})", kind, line)
            }
            Corruption::BadValue { line, value } => {
                write!(f, "value '{}' is not a number (line {})", value, line)
            }
            Corruption::MalformedRecord { line } => {
                write!(f, "record is not '<KIND>,<value>' (line {})", line)
            }
            Corruption::DoubleBegin { line } => write!(f, "double begin (line {})", line),
            Corruption::BeginBeforeWage { line } => {
                write!(f, "begin before wage (line {})", line)
            }
            Corruption::DoubleEnd { line } => write!(f, "double end (line {})", line),
            Corruption::NegativeDuration { line } => {
                write!(f, "negative duration (line {})", line)
            }
            Corruption::NoWageSet => write!(f, "no wage set"),
            Corruption::ShiftInFuture => write!(f, "the ongoing shift starts in the future"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Log / shift logic
    // ---------------------------
    #[error(
        "Corrupted log file {}: {reason}. Inspect it, fix it or delete it to start over.",
        .path.display()
    )]
    CorruptLog { path: PathBuf, reason: Corruption },

    #[error("{0}")]
    PreconditionFailed(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Log file error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Interactive input
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: Corruption) -> Self {
        AppError::CorruptLog {
            path: path.into(),
            reason,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CorruptLog { .. } | AppError::PreconditionFailed(_) => {
                CORE_FAILURE_EXIT_CODE
            }
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
