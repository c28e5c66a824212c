pub mod bitbar;
pub mod clear;
pub mod config;
pub mod shift;
