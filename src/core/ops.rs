//! The five operations of the tool. Each one is a pure function of the
//! replayed report and the current time; [`execute`] does the I/O.

use crate::core::report::{ReportBuilder, check_expectation};
use crate::core::setup::{WagePrompt, first_run};
use crate::errors::{AppError, AppResult, Corruption};
use crate::models::{Event, Report, Shift};
use crate::store::EventLog;
use crate::utils::time::local_date;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Wage(f64),
    Payment(f64),
    Begin,
    End,
    Status,
}

/// Shift state an operation requires before it may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub in_shift: bool,
    pub failure_message: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum Balance {
    Pending(f64),
    Overpaid(f64),
}

impl Balance {
    /// `None` when the outstanding amount is within tolerance.
    pub fn of(report: &Report) -> Option<Self> {
        if !report.has_outstanding() {
            return None;
        }
        let outstanding = report.outstanding();
        if outstanding > 0.0 {
            Some(Balance::Pending(outstanding))
        } else {
            Some(Balance::Overpaid(-outstanding))
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusSummary {
    pub wage: Option<f64>,
    pub shift_started_at: Option<f64>,
    pub elapsed_seconds: Option<f64>,
    /// Earnings of the ongoing shift, not yet in the balance.
    pub accruing: f64,
    pub hours_today: f64,
    pub balance: Option<Balance>,
}

impl StatusSummary {
    pub fn in_shift(&self) -> bool {
        self.shift_started_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    WageSet { previous: Option<f64>, rate: f64 },
    PaymentRecorded { amount: f64, balance: Option<Balance> },
    ShiftBegun { at: f64, wage: f64 },
    ShiftEnded { shift: Shift },
    Status(StatusSummary),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub append: Option<Event>,
    pub output: Output,
}

/// Result of [`execute`]: the outcome plus the wage configured on first run.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub configured_wage: Option<f64>,
    pub outcome: Outcome,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Wage(_) => "wage",
            Operation::Payment(_) => "payment",
            Operation::Begin => "begin",
            Operation::End => "end",
            Operation::Status => "status",
        }
    }

    pub fn expectation(&self) -> Option<Expectation> {
        match self {
            Operation::Wage(_) => Some(Expectation {
                in_shift: false,
                failure_message: "Cannot change the wage while a shift is ongoing.",
            }),
            Operation::Begin => Some(Expectation {
                in_shift: false,
                failure_message: "Cannot begin a shift while one is ongoing.",
            }),
            Operation::End => Some(Expectation {
                in_shift: true,
                failure_message: "Cannot end a shift when none is ongoing.",
            }),
            Operation::Payment(_) | Operation::Status => None,
        }
    }

    /// Decide what to append and what to show, given a report that already
    /// satisfies [`Operation::expectation`].
    pub fn apply(&self, report: &Report, now: f64) -> Result<Outcome, Corruption> {
        let outcome = match *self {
            Operation::Wage(rate) => Outcome {
                append: Some(Event::wage(rate)),
                output: Output::WageSet {
                    previous: report.active_wage,
                    rate,
                },
            },
            Operation::Payment(amount) => {
                let mut after = report.clone();
                after.total_paid += amount;
                Outcome {
                    append: Some(Event::payment(amount)),
                    output: Output::PaymentRecorded {
                        amount,
                        balance: Balance::of(&after),
                    },
                }
            }
            Operation::Begin => Outcome {
                append: Some(Event::begin(now)),
                output: Output::ShiftBegun {
                    at: now,
                    wage: report.active_wage.ok_or(Corruption::NoWageSet)?,
                },
            },
            Operation::End => {
                // Refuses to write an END that precedes its BEGIN.
                report.current_shift_seconds(now)?;
                let shift = Shift {
                    started_at: report.shift_started_at.unwrap_or(now),
                    ended_at: now,
                    wage: report.shift_wage.ok_or(Corruption::NoWageSet)?,
                };
                Outcome {
                    append: Some(Event::end(now)),
                    output: Output::ShiftEnded { shift },
                }
            }
            Operation::Status => Outcome {
                append: None,
                output: Output::Status(status(report, now)?),
            },
        };

        Ok(outcome)
    }
}

pub fn status(report: &Report, now: f64) -> Result<StatusSummary, Corruption> {
    let elapsed_seconds = report.current_shift_seconds(now)?;
    let hours_today = match local_date(now) {
        Some(day) => report.hours_on(day, now)?,
        None => 0.0,
    };

    Ok(StatusSummary {
        wage: report.active_wage,
        shift_started_at: report.shift_started_at,
        elapsed_seconds,
        accruing: report.current_shift_earnings(now)?,
        hours_today,
        balance: Balance::of(report),
    })
}

/// Run one operation against the log: replay and validate (or configure
/// on first run), then append. Nothing is written when a check fails.
pub fn execute(
    log: &EventLog,
    op: &Operation,
    now: f64,
    prompt: &mut dyn WagePrompt,
) -> AppResult<Execution> {
    let (expected, message) = match op.expectation() {
        Some(e) => (Some(e.in_shift), e.failure_message),
        None => (None, ""),
    };

    let (report, configured_wage) = if log.exists() {
        (ReportBuilder::new(log).read_sanitized(expected, message)?, None)
    } else {
        let report = first_run(log, prompt)?;
        check_expectation(&report, expected, message)?;
        let wage = report.active_wage;
        (report, wage)
    };

    let outcome = op
        .apply(&report, now)
        .map_err(|c| AppError::corrupt(log.path(), c))?;

    if let Some(event) = &outcome.append {
        log.append(event)?;
    }

    debug!(operation = op.name(), appended = outcome.append.is_some(), "operation done");

    Ok(Execution {
        configured_wage,
        outcome,
    })
}
