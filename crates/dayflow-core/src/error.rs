//! Core error types for dayflow-core.
//!
//! All generation failures are detected before or during placement and are
//! fatal to that single call: no partial schedule is produced and any prior
//! schedule held by the caller stays untouched.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::modes::DayMode;

/// Errors surfaced by schedule generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// More must-do tasks than the day mode allows.
    #[error("Too many Must-Do tasks. Max is {limit} for {mode} mode.")]
    MustDoLimitExceeded { mode: DayMode, limit: u32 },

    /// More tasks overall than the day mode allows.
    #[error("Too many total tasks. Max is {limit} for {mode} mode.")]
    TotalTaskLimitExceeded { mode: DayMode, limit: u32 },

    /// Task placement slid past the end of the scheduling day.
    #[error("Schedule overflow: '{title}' cannot be placed before {day_end}")]
    ScheduleOverflow {
        title: String,
        day_end: NaiveDateTime,
    },

    /// A wall-clock string was not a valid "HH:mm" pair.
    #[error("Invalid wall-clock time '{value}' (expected HH:mm)")]
    InvalidTime { value: String },

    /// A fixed event whose end does not come after its start.
    #[error("Fixed event '{title}' has an invalid range: {start} >= {end}")]
    InvalidEventRange {
        title: String,
        start: String,
        end: String,
    },
}

/// Result type alias for ScheduleError.
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;
