pub mod event;
pub mod event_kind;
pub mod report;

pub use event::Event;
pub use event_kind::EventKind;
pub use report::{Report, Shift};
