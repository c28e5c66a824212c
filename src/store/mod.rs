pub mod event_log;
pub mod record;

pub use event_log::{EventLog, Events};
