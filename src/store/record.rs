//! Conversion between log records (`<KIND>,<value>`) and events.

use crate::errors::Corruption;
use crate::models::{Event, EventKind};
use csv::StringRecord;

pub fn to_record(event: &Event) -> [String; 2] {
    [event.kind.as_str().to_string(), event.value.to_string()]
}

/// Parse one record. `line` is the 1-based line it starts on, used both as
/// the event position and in corruption messages.
pub fn from_record(record: &StringRecord, line: usize) -> Result<Event, Corruption> {
    if record.len() != 2 {
        return Err(Corruption::MalformedRecord { line });
    }

    let raw_kind = &record[0];
    let raw_value = &record[1];

    let kind: EventKind = raw_kind.parse().map_err(|_| Corruption::UnknownKind {
        line,
        kind: raw_kind.to_string(),
    })?;

    let value = raw_value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Corruption::BadValue {
            line,
            value: raw_value.to_string(),
        })?;

    Ok(Event::new(kind, value).at_position(line))
}
