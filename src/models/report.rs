//! State derived by replaying the event log. Never persisted: a fresh
//! Report is built on every invocation.

use crate::errors::Corruption;
use crate::utils::time::local_date;
use chrono::NaiveDate;
use serde::Serialize;

/// Differences below this amount are floating-point noise, not money owed.
pub const OUTSTANDING_TOLERANCE: f64 = 0.01;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// A completed BEGIN/END pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Shift {
    pub started_at: f64,
    pub ended_at: f64,
    /// Wage in effect when the BEGIN was replayed.
    pub wage: f64,
}

impl Shift {
    pub fn seconds(&self) -> f64 {
        self.ended_at - self.started_at
    }

    pub fn hours(&self) -> f64 {
        self.seconds() / SECONDS_PER_HOUR
    }

    pub fn earned(&self) -> f64 {
        self.hours() * self.wage
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Report {
    pub active_wage: Option<f64>,
    pub shift_started_at: Option<f64>,
    /// Wage locked in by the BEGIN of the ongoing shift.
    pub shift_wage: Option<f64>,
    pub total_earned: f64,
    pub total_paid: f64,
    pub shifts: Vec<Shift>,
}

impl Report {
    /// Report of a log that holds a single WAGE_SET.
    pub fn seeded(wage: f64) -> Self {
        Self {
            active_wage: Some(wage),
            ..Self::default()
        }
    }

    pub fn in_shift(&self) -> bool {
        self.shift_started_at.is_some()
    }

    /// Positive: owed to the worker. Negative: overpaid.
    pub fn outstanding(&self) -> f64 {
        self.total_earned - self.total_paid
    }

    pub fn has_outstanding(&self) -> bool {
        self.outstanding().abs() > OUTSTANDING_TOLERANCE
    }

    /// Seconds elapsed in the ongoing shift, `None` when not in a shift.
    /// A `now` earlier than the shift start means clock skew or a tampered
    /// log and is reported, never clamped.
    pub fn current_shift_seconds(&self, now: f64) -> Result<Option<f64>, Corruption> {
        match self.shift_started_at {
            None => Ok(None),
            Some(start) if now < start => Err(Corruption::ShiftInFuture),
            Some(start) => Ok(Some(now - start)),
        }
    }

    /// Money accrued so far by the ongoing shift (not part of `total_earned`).
    pub fn current_shift_earnings(&self, now: f64) -> Result<f64, Corruption> {
        let secs = self.current_shift_seconds(now)?.unwrap_or(0.0);
        Ok(secs / SECONDS_PER_HOUR * self.shift_wage.unwrap_or(0.0))
    }

    /// Hours of the completed shifts that ended on `day` (local time),
    /// plus the ongoing shift.
    pub fn hours_on(&self, day: NaiveDate, now: f64) -> Result<f64, Corruption> {
        let completed: f64 = self
            .shifts
            .iter()
            .filter(|s| local_date(s.ended_at) == Some(day))
            .map(Shift::hours)
            .sum();

        let ongoing = self.current_shift_seconds(now)?.unwrap_or(0.0) / SECONDS_PER_HOUR;

        Ok(completed + ongoing)
    }
}
