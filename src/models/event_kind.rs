use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The fixed vocabulary of the event log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    WageSet,
    Payment,
    Begin,
    End,
}

impl EventKind {
    /// Convert enum → log record field
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::WageSet => "WAGE_SET",
            EventKind::Payment => "PAYMENT",
            EventKind::Begin => "BEGIN",
            EventKind::End => "END",
        }
    }
}

impl FromStr for EventKind {
    type Err = ();

    /// Convert log record field → enum. Matching is exact, the log is
    /// machine-written.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAGE_SET" => Ok(EventKind::WageSet),
            "PAYMENT" => Ok(EventKind::Payment),
            "BEGIN" => Ok(EventKind::Begin),
            "END" => Ok(EventKind::End),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
