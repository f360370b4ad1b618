//! Wall-clock parsing and interval bookkeeping for a single day's timeline.
//!
//! Blocks occupy half-open `[start, end)` intervals. The schedule is kept
//! sorted by start time through `insert_sorted` rather than re-sorting the
//! whole collection after every insertion.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, ScheduleError};
use crate::schedule::TimeBlock;

/// Parse a strict "HH:mm" wall-clock string.
pub fn parse_wall_clock(value: &str) -> Result<NaiveTime> {
    let invalid = || ScheduleError::InvalidTime {
        value: value.to_string(),
    };

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Resolve a wall-clock string to an absolute timestamp on the given day.
pub fn resolve_on(date: NaiveDate, value: &str) -> Result<NaiveDateTime> {
    Ok(date.and_time(parse_wall_clock(value)?))
}

/// Midnight at the start of the following day. Task placement never crosses
/// this boundary.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::days(1)
}

/// Strict overlap test between a candidate interval and a placed block.
pub fn interval_overlaps(start: NaiveDateTime, end: NaiveDateTime, block: &TimeBlock) -> bool {
    start < block.end && end > block.start
}

/// First block (in start order) that overlaps the candidate interval.
pub fn first_conflict(
    blocks: &[TimeBlock],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Option<&TimeBlock> {
    blocks.iter().find(|b| interval_overlaps(start, end, b))
}

/// Insert while keeping the list sorted by start time.
pub fn insert_sorted(blocks: &mut Vec<TimeBlock>, block: TimeBlock) {
    let at = blocks.partition_point(|b| b.start <= block.start);
    blocks.insert(at, block);
}
