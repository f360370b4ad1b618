pub mod modes;
pub mod schedule;
