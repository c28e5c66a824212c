//! Replay of the event log into a [`Report`], with integrity checks.

use crate::errors::{AppError, AppResult, Corruption};
use crate::models::{Event, EventKind, Report, Shift};
use crate::store::EventLog;
use std::path::Path;
use tracing::debug;

pub struct ReportBuilder<'a> {
    log: &'a EventLog,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self { log }
    }

    /// Replay the whole log from scratch.
    pub fn build(&self) -> AppResult<Report> {
        fold_events(self.log.read_all()?, self.log.path())
    }

    /// Replay the log, require a wage to be set and, when
    /// `expected_in_shift` is given, require the shift state to match it.
    /// Every mutating operation goes through this before appending.
    pub fn read_sanitized(
        &self,
        expected_in_shift: Option<bool>,
        failure_message: &str,
    ) -> AppResult<Report> {
        let report = self.build()?;
        sanitize(report, self.log.path(), expected_in_shift, failure_message)
    }
}

/// Checks applied on top of a successful replay.
pub fn sanitize(
    report: Report,
    path: &Path,
    expected_in_shift: Option<bool>,
    failure_message: &str,
) -> AppResult<Report> {
    if report.active_wage.is_none() {
        return Err(AppError::corrupt(path, Corruption::NoWageSet));
    }

    check_expectation(&report, expected_in_shift, failure_message)?;
    Ok(report)
}

pub fn check_expectation(
    report: &Report,
    expected_in_shift: Option<bool>,
    failure_message: &str,
) -> AppResult<()> {
    match expected_in_shift {
        Some(expected) if report.in_shift() != expected => {
            Err(AppError::PreconditionFailed(failure_message.to_string()))
        }
        _ => Ok(()),
    }
}

/// Left fold over a sequence of events. `path` only names the log in
/// corruption errors.
pub fn fold_events<I>(events: I, path: &Path) -> AppResult<Report>
where
    I: IntoIterator<Item = AppResult<Event>>,
{
    let mut report = Report::default();
    let mut count = 0usize;

    for event in events {
        apply_event(&mut report, &event?).map_err(|c| AppError::corrupt(path, c))?;
        count += 1;
    }

    debug!(
        events = count,
        in_shift = report.in_shift(),
        earned = report.total_earned,
        paid = report.total_paid,
        "log replayed"
    );

    Ok(report)
}

fn apply_event(report: &mut Report, event: &Event) -> Result<(), Corruption> {
    let line = event.position;

    match event.kind {
        EventKind::WageSet => {
            report.active_wage = Some(event.value);
        }
        EventKind::Payment => {
            report.total_paid += event.value;
        }
        EventKind::Begin => {
            if report.in_shift() {
                return Err(Corruption::DoubleBegin { line });
            }
            let wage = report
                .active_wage
                .ok_or(Corruption::BeginBeforeWage { line })?;

            report.shift_started_at = Some(event.value);
            report.shift_wage = Some(wage);
        }
        EventKind::End => {
            let (Some(started_at), Some(wage)) = (report.shift_started_at, report.shift_wage)
            else {
                return Err(Corruption::DoubleEnd { line });
            };

            let shift = Shift {
                started_at,
                ended_at: event.value,
                wage,
            };
            if shift.seconds() < 0.0 {
                return Err(Corruption::NegativeDuration { line });
            }

            report.total_earned += shift.earned();
            report.shifts.push(shift);
            report.shift_started_at = None;
            report.shift_wage = None;
        }
    }

    Ok(())
}
