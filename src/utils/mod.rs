pub mod formatting;
pub mod time;

pub use formatting::{money, secs2readable};
