//! # Dayflow Core Library
//!
//! This library provides the core logic for Dayflow, a personal daily-schedule
//! generator. Given a day setup (intensity mode, kickstart time, tasks, and
//! fixed calendar events) it produces an ordered, non-overlapping sequence of
//! time blocks covering the day. The surrounding application layers (UI,
//! persistence, auth, LLM-based task breakdown) are thin collaborators over
//! this library and exchange plain data with it.
//!
//! ## Architecture
//!
//! - **Mode rules**: A static table mapping each day mode to its task limits,
//!   break cadence, and buffer sizes
//! - **Generator**: A pure, deterministic function that validates limits,
//!   places fixed events with surrounding buffers, packs tasks with a forward
//!   first-fit scan, inserts breaks, and fills gaps with buffer blocks
//! - **Review**: Completion statistics computed over a generated schedule
//!
//! ## Key Components
//!
//! - [`generate`]: The schedule generator
//! - [`DayMode`]: Intensity profile with its [`ModeRules`] lookup
//! - [`TimeBlock`]: The unified output unit, discriminated by [`BlockKind`]
//! - [`ScheduleError`]: Validation failures surfaced to the caller

pub mod error;
pub mod generator;
pub mod modes;
pub mod review;
pub mod schedule;
pub mod timeline;

pub use error::{Result, ScheduleError};
pub use generator::{generate, SESSION_RESET_GAP_MINUTES};
pub use modes::{BufferRules, DayMode, ModeRules, TaskLimits};
pub use review::{DayReview, ScheduleStats};
pub use schedule::{
    toggle_status, BlockKind, BlockStatus, DaySetup, FixedEvent, Priority, Task, TaskDuration,
    TimeBlock,
};
