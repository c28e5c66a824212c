pub mod bitbar;
pub mod messages;
pub mod status;
