pub mod anatomy;
pub mod breathe;
pub mod config;
pub mod quiz;
