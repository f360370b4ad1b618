//! Schedule generation for a single day.
//!
//! This module implements the packing procedure that turns a day setup into
//! an ordered, non-overlapping list of time blocks:
//! - Validates task counts against the day mode's limits
//! - Places fixed events at their declared intervals with prep/transition
//!   buffers around them
//! - Places tasks with a forward first-fit scan, must-do tasks first
//! - Inserts breaks once a work session reaches the mode's break interval
//! - Fills every remaining gap from the kickstart time with buffer blocks
//!
//! The generator is a pure function over its inputs: no clock, no I/O, no
//! shared state. Identical setups produce identical output, including the
//! ids of synthesized break and buffer blocks.

use chrono::{Duration, NaiveDateTime};

use crate::error::{Result, ScheduleError};
use crate::modes::ModeRules;
use crate::schedule::{BlockKind, BlockStatus, DaySetup, Priority, Task, TimeBlock};
use crate::timeline;

/// Gap between consecutive task blocks, in minutes, beyond which the work
/// session is treated as naturally interrupted and break accounting restarts.
/// UX heuristic, not a hard requirement.
pub const SESSION_RESET_GAP_MINUTES: i64 = 5;

/// Generate the day's schedule.
///
/// Returns the blocks sorted ascending by start, pairwise non-overlapping,
/// and fully tiled from the kickstart timestamp to the end of the last
/// block. Every task and event block corresponds 1:1 with an input task or
/// fixed event by shared id.
pub fn generate(setup: &DaySetup) -> Result<Vec<TimeBlock>> {
    let rules = setup.day_mode.rules();

    validate_limits(setup, &rules)?;

    let mut schedule = place_events(setup, &rules)?;
    let kickstart = timeline::resolve_on(setup.date, &setup.kickstart_time)?;
    place_tasks(&mut schedule, setup, kickstart)?;
    insert_breaks(&mut schedule, &rules);
    fill_gaps(&mut schedule, kickstart);

    Ok(schedule)
}

fn validate_limits(setup: &DaySetup, rules: &ModeRules) -> Result<()> {
    let must_count = setup
        .tasks
        .iter()
        .filter(|t| t.priority == Priority::Must)
        .count();
    if must_count > rules.task_limits.must as usize {
        return Err(ScheduleError::MustDoLimitExceeded {
            mode: setup.day_mode,
            limit: rules.task_limits.must,
        });
    }
    if setup.tasks.len() > rules.task_limits.total as usize {
        return Err(ScheduleError::TotalTaskLimitExceeded {
            mode: setup.day_mode,
            limit: rules.task_limits.total,
        });
    }
    Ok(())
}

/// Place event blocks at their declared intervals, then surround each with
/// candidate prep/transition buffers. Events are immovable; a buffer that
/// collides with anything already placed is dropped, never relocated.
fn place_events(setup: &DaySetup, rules: &ModeRules) -> Result<Vec<TimeBlock>> {
    let mut resolved = Vec::with_capacity(setup.events.len());
    for event in &setup.events {
        let start = timeline::resolve_on(setup.date, &event.start)?;
        let end = timeline::resolve_on(setup.date, &event.end)?;
        if start >= end {
            return Err(ScheduleError::InvalidEventRange {
                title: event.title.clone(),
                start: event.start.clone(),
                end: event.end.clone(),
            });
        }
        resolved.push((event, start, end));
    }
    resolved.sort_by_key(|&(_, start, _)| start);

    let mut schedule = Vec::new();
    for (event, start, end) in &resolved {
        timeline::insert_sorted(
            &mut schedule,
            TimeBlock {
                id: event.id.clone(),
                title: event.title.clone(),
                start: *start,
                end: *end,
                kind: BlockKind::Event {
                    status: BlockStatus::Pending,
                },
            },
        );
    }

    // All events are in before any buffer is considered, so a later event
    // can never be clobbered by an earlier event's transition buffer.
    for (_, start, end) in &resolved {
        let prep = Duration::minutes(rules.buffers.prep as i64);
        let transition = Duration::minutes(rules.buffers.transition as i64);
        push_buffer_candidate(&mut schedule, *start - prep, *start, "Prep buffer");
        push_buffer_candidate(&mut schedule, *end, *end + transition, "Transition buffer");
    }

    Ok(schedule)
}

fn push_buffer_candidate(
    schedule: &mut Vec<TimeBlock>,
    start: NaiveDateTime,
    end: NaiveDateTime,
    title: &str,
) {
    if start >= end {
        return;
    }
    if timeline::first_conflict(schedule, start, end).is_some() {
        return;
    }
    timeline::insert_sorted(
        schedule,
        TimeBlock {
            id: synthesized_id("buffer", start),
            title: title.to_string(),
            start,
            end,
            kind: BlockKind::Buffer,
        },
    );
}

/// Forward first-fit scan from the kickstart timestamp. On a collision the
/// cursor advances to the end of the earliest blocking interval and retries;
/// every retry strictly advances, and a candidate that would cross midnight
/// aborts the whole generation with `ScheduleOverflow`.
fn place_tasks(
    schedule: &mut Vec<TimeBlock>,
    setup: &DaySetup,
    kickstart: NaiveDateTime,
) -> Result<()> {
    let day_end = timeline::day_end(setup.date);
    let mut cursor = kickstart;

    for task in order_tasks(&setup.tasks) {
        let length = Duration::minutes(task.duration.minutes() as i64);
        loop {
            let start = cursor;
            let end = start + length;
            if end > day_end {
                return Err(ScheduleError::ScheduleOverflow {
                    title: task.title.clone(),
                    day_end,
                });
            }

            let blocking_end = timeline::first_conflict(schedule, start, end).map(|b| b.end);
            match blocking_end {
                None => {
                    timeline::insert_sorted(
                        schedule,
                        TimeBlock {
                            id: task.id.clone(),
                            title: task.title.clone(),
                            start,
                            end,
                            kind: BlockKind::Task {
                                priority: task.priority,
                                status: BlockStatus::Pending,
                            },
                        },
                    );
                    cursor = end;
                    break;
                }
                Some(blocking_end) => cursor = cursor.max(blocking_end),
            }
        }
    }
    Ok(())
}

/// Stable partition: every must-do task before every optional one, input
/// order preserved within each band.
fn order_tasks(tasks: &[Task]) -> Vec<&Task> {
    let (must, optional): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|t| t.priority == Priority::Must);
    must.into_iter().chain(optional).collect()
}

/// Insert a break after any task block that closes out a work session of at
/// least `break_interval` minutes. Only task blocks accumulate work; events
/// do not count in this pass. A break that would collide with an existing
/// block is skipped rather than relocated.
fn insert_breaks(schedule: &mut Vec<TimeBlock>, rules: &ModeRules) {
    let break_interval = Duration::minutes(rules.break_interval as i64);
    let break_length = Duration::minutes(rules.break_duration as i64);

    let mut session_start: Option<NaiveDateTime> = None;
    let mut previous_task_end: Option<NaiveDateTime> = None;

    // Breaks are inserted at positions after the block under inspection, so
    // walking by index stays sound as the schedule grows.
    let mut i = 0;
    while i < schedule.len() {
        let (start, end) = match schedule[i].kind {
            BlockKind::Task { .. } => (schedule[i].start, schedule[i].end),
            _ => {
                i += 1;
                continue;
            }
        };

        // A sizeable idle stretch between tasks is already a natural pause.
        if let Some(previous_end) = previous_task_end {
            if (start - previous_end).num_minutes() > SESSION_RESET_GAP_MINUTES {
                session_start = None;
            }
        }
        let session = *session_start.get_or_insert(start);

        if end - session >= break_interval {
            let break_end = end + break_length;
            if timeline::first_conflict(schedule, end, break_end).is_none() {
                timeline::insert_sorted(
                    schedule,
                    TimeBlock {
                        id: synthesized_id("break", end),
                        title: "Break".to_string(),
                        start: end,
                        end: break_end,
                        kind: BlockKind::Break,
                    },
                );
            }
            // Whether the break fit or not, accounting restarts at the next
            // task block.
            session_start = None;
        }

        previous_task_end = Some(end);
        i += 1;
    }
}

/// Represent every idle span from the kickstart timestamp onward as an
/// explicit buffer block, so the output tiles the day with no implicit gaps.
fn fill_gaps(schedule: &mut Vec<TimeBlock>, kickstart: NaiveDateTime) {
    let mut gaps = Vec::new();
    let mut last_end = kickstart;
    for block in schedule.iter() {
        if block.start > last_end {
            gaps.push((last_end, block.start));
        }
        last_end = last_end.max(block.end);
    }

    for (start, end) in gaps {
        timeline::insert_sorted(
            schedule,
            TimeBlock {
                id: synthesized_id("buffer", start),
                title: "Buffer".to_string(),
                start,
                end,
                kind: BlockKind::Buffer,
            },
        );
    }
}

/// Ids for synthesized blocks derive from the block's start position, never
/// from a wall clock, keeping generation idempotent. The date component
/// matters: a prep buffer for an early event can start on the previous
/// calendar day, at the same wall-clock time as a buffer on the scheduling
/// day.
fn synthesized_id(prefix: &str, start: NaiveDateTime) -> String {
    format!("{prefix}-{}", start.format("%Y%m%d%H%M"))
}
