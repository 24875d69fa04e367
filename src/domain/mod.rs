pub mod dates;
pub mod error;
pub mod schedule;
pub mod show;
