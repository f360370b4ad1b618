//! Day-setup inputs and the time blocks the generator produces.
//!
//! Tasks and fixed events are user-authored; break and buffer blocks are
//! synthesized during generation with ids derived from their start position,
//! so regenerating the same setup yields byte-identical output.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::modes::DayMode;

/// Allowed task-block lengths, in minutes.
///
/// The setup UI offers these as fixed chips; any other value is rejected at
/// deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TaskDuration {
    M15,
    M30,
    M45,
    M60,
    M90,
    M120,
}

impl TaskDuration {
    pub fn minutes(&self) -> u32 {
        match self {
            TaskDuration::M15 => 15,
            TaskDuration::M30 => 30,
            TaskDuration::M45 => 45,
            TaskDuration::M60 => 60,
            TaskDuration::M90 => 90,
            TaskDuration::M120 => 120,
        }
    }
}

impl TryFrom<u32> for TaskDuration {
    type Error = String;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            15 => Ok(TaskDuration::M15),
            30 => Ok(TaskDuration::M30),
            45 => Ok(TaskDuration::M45),
            60 => Ok(TaskDuration::M60),
            90 => Ok(TaskDuration::M90),
            120 => Ok(TaskDuration::M120),
            other => Err(format!("unsupported task duration: {other} minutes")),
        }
    }
}

impl From<TaskDuration> for u32 {
    fn from(duration: TaskDuration) -> Self {
        duration.minutes()
    }
}

/// Whether a task is mandatory for the day or merely desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Must,
    Optional,
}

/// Completion state of a task or event block.
///
/// The only transition is the reversible user toggle; there is no time-based
/// auto-completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStatus {
    Pending,
    Completed,
}

impl BlockStatus {
    pub fn toggled(&self) -> Self {
        match self {
            BlockStatus::Pending => BlockStatus::Completed,
            BlockStatus::Completed => BlockStatus::Pending,
        }
    }
}

impl Default for BlockStatus {
    fn default() -> Self {
        BlockStatus::Pending
    }
}

/// A user intention to spend time on something.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier, stable for the task's lifetime.
    pub id: String,
    pub title: String,
    pub duration: TaskDuration,
    pub priority: Priority,
    #[serde(default)]
    pub status: BlockStatus,
}

/// An immovable calendar commitment.
///
/// Start and end are wall-clock "HH:mm" strings interpreted against the
/// scheduling day; `start < end` is checked when they are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
}

/// Everything the generator needs for one day.
///
/// The scheduling date is an explicit input: the generator never reads an
/// ambient clock, so identical setups give identical schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySetup {
    pub date: NaiveDate,
    pub day_mode: DayMode,
    /// Earliest wall-clock time task placement may begin ("HH:mm").
    pub kickstart_time: String,
    pub tasks: Vec<Task>,
    pub events: Vec<FixedEvent>,
}

/// What a block on the generated schedule represents.
///
/// Task and event blocks trace back to their source by shared id and carry a
/// toggleable status; break and buffer blocks are synthesized and carry
/// neither status nor priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    Task {
        priority: Priority,
        status: BlockStatus,
    },
    Event {
        status: BlockStatus,
    },
    Break,
    Buffer,
}

/// A single entry on the generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl TimeBlock {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether this block represents user-facing work (task or event).
    pub fn is_work(&self) -> bool {
        matches!(self.kind, BlockKind::Task { .. } | BlockKind::Event { .. })
    }

    /// Completion status, if this block kind carries one.
    pub fn status(&self) -> Option<BlockStatus> {
        match self.kind {
            BlockKind::Task { status, .. } | BlockKind::Event { status } => Some(status),
            BlockKind::Break | BlockKind::Buffer => None,
        }
    }
}

/// Flip a task or event block between pending and completed.
///
/// Plain lookup-and-replace by id, independent of the generator; applying it
/// to generated output never requires re-running placement. Break and buffer
/// blocks and unknown ids are left untouched and report `false`.
pub fn toggle_status(blocks: &mut [TimeBlock], id: &str) -> bool {
    for block in blocks.iter_mut() {
        if block.id != id {
            continue;
        }
        return match &mut block.kind {
            BlockKind::Task { status, .. } | BlockKind::Event { status } => {
                *status = status.toggled();
                true
            }
            BlockKind::Break | BlockKind::Buffer => false,
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: &str, kind: BlockKind) -> TimeBlock {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        TimeBlock {
            id: id.to_string(),
            title: "Block".to_string(),
            start: date.and_hms_opt(9, 0, 0).unwrap(),
            end: date.and_hms_opt(10, 0, 0).unwrap(),
            kind,
        }
    }

    #[test]
    fn duration_accepts_only_the_fixed_chips() {
        for minutes in [15u32, 30, 45, 60, 90, 120] {
            assert_eq!(TaskDuration::try_from(minutes).unwrap().minutes(), minutes);
        }
        assert!(TaskDuration::try_from(20).is_err());
        assert!(serde_json::from_str::<TaskDuration>("75").is_err());
    }

    #[test]
    fn block_kind_serializes_with_type_tag() {
        let task = block(
            "t1",
            BlockKind::Task {
                priority: Priority::Must,
                status: BlockStatus::Pending,
            },
        );
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "task");
        assert_eq!(json["priority"], "must");
        assert_eq!(json["status"], "pending");

        let buffer = block("b1", BlockKind::Buffer);
        let json = serde_json::to_value(&buffer).unwrap();
        assert_eq!(json["type"], "buffer");
        assert!(json.get("status").is_none());
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn time_block_round_trips() {
        let event = block(
            "e1",
            BlockKind::Event {
                status: BlockStatus::Completed,
            },
        );
        let json = serde_json::to_string(&event).unwrap();
        let decoded: TimeBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn toggle_flips_task_and_event_status() {
        let mut blocks = vec![
            block(
                "t1",
                BlockKind::Task {
                    priority: Priority::Optional,
                    status: BlockStatus::Pending,
                },
            ),
            block("e1", BlockKind::Event { status: BlockStatus::Pending }),
        ];

        assert!(toggle_status(&mut blocks, "t1"));
        assert_eq!(blocks[0].status(), Some(BlockStatus::Completed));

        // Reversible
        assert!(toggle_status(&mut blocks, "t1"));
        assert_eq!(blocks[0].status(), Some(BlockStatus::Pending));

        assert!(toggle_status(&mut blocks, "e1"));
        assert_eq!(blocks[1].status(), Some(BlockStatus::Completed));
    }

    #[test]
    fn toggle_ignores_synthesized_blocks_and_unknown_ids() {
        let mut blocks = vec![block("break-0900", BlockKind::Break)];
        assert!(!toggle_status(&mut blocks, "break-0900"));
        assert!(!toggle_status(&mut blocks, "missing"));
    }

    #[test]
    fn day_setup_uses_camel_case_wire_names() {
        let setup = DaySetup {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            day_mode: DayMode::Balanced,
            kickstart_time: "09:00".to_string(),
            tasks: vec![],
            events: vec![],
        };
        let json = serde_json::to_value(&setup).unwrap();
        assert_eq!(json["dayMode"], "Balanced");
        assert_eq!(json["kickstartTime"], "09:00");
    }
}
