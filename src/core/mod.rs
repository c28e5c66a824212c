pub mod ops;
pub mod report;
pub mod setup;
