use super::event_kind::EventKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Event {
    pub kind: EventKind, // ⇔ first field of the record
    pub value: f64,      // wage, payment amount or unix seconds (BEGIN/END)
    pub position: usize, // 1-based line in the log file, 0 = not yet appended
}

impl Event {
    /// Build an event that is about to be appended.
    pub fn new(kind: EventKind, value: f64) -> Self {
        Self {
            kind,
            value,
            position: 0,
        }
    }

    pub fn wage(rate: f64) -> Self {
        Self::new(EventKind::WageSet, rate)
    }

    pub fn payment(amount: f64) -> Self {
        Self::new(EventKind::Payment, amount)
    }

    pub fn begin(at: f64) -> Self {
        Self::new(EventKind::Begin, at)
    }

    pub fn end(at: f64) -> Self {
        Self::new(EventKind::End, at)
    }

    pub fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}
