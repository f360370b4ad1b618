//! Day-mode intensity profiles and their scheduling rules.
//!
//! Each of the four modes trades off task count, block length, break cadence,
//! and buffer generosity. Intensity decreases from Deep Work to Chill. The
//! table is static configuration: lookup never fails and nothing mutates it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named intensity profile controlling one day's scheduling rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayMode {
    /// A few long, high-focus blocks.
    #[serde(rename = "Deep Work")]
    DeepWork,
    /// Many small, concrete tasks.
    Execution,
    /// A mix of focus and smaller tasks.
    Balanced,
    /// Light work, recovery, creative exploration.
    Chill,
}

impl DayMode {
    /// All modes, in decreasing order of intensity.
    pub const ALL: [DayMode; 4] = [
        DayMode::DeepWork,
        DayMode::Execution,
        DayMode::Balanced,
        DayMode::Chill,
    ];

    /// Look up the scheduling rules for this mode.
    pub fn rules(&self) -> ModeRules {
        match self {
            DayMode::DeepWork => ModeRules {
                task_limits: TaskLimits { total: 4, must: 2 },
                block_duration_range: (90, 120),
                break_interval: 120,
                break_duration: 20,
                buffers: BufferRules {
                    prep: 30,
                    transition: 30,
                },
            },
            DayMode::Execution => ModeRules {
                task_limits: TaskLimits { total: 12, must: 6 },
                block_duration_range: (25, 45),
                break_interval: 60,
                break_duration: 10,
                buffers: BufferRules {
                    prep: 15,
                    transition: 15,
                },
            },
            DayMode::Balanced => ModeRules {
                task_limits: TaskLimits { total: 7, must: 3 },
                block_duration_range: (60, 90),
                break_interval: 90,
                break_duration: 15,
                buffers: BufferRules {
                    prep: 20,
                    transition: 20,
                },
            },
            DayMode::Chill => ModeRules {
                task_limits: TaskLimits { total: 3, must: 1 },
                block_duration_range: (45, 60),
                break_interval: 120,
                break_duration: 30,
                buffers: BufferRules {
                    prep: 30,
                    transition: 30,
                },
            },
        }
    }
}

impl fmt::Display for DayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayMode::DeepWork => "Deep Work",
            DayMode::Execution => "Execution",
            DayMode::Balanced => "Balanced",
            DayMode::Chill => "Chill",
        };
        f.write_str(name)
    }
}

/// Maximum task counts enforced before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLimits {
    /// Maximum number of tasks overall.
    pub total: u32,
    /// Maximum number of must-do tasks.
    pub must: u32,
}

/// Buffer minutes inserted around fixed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferRules {
    /// Minutes immediately before an event.
    pub prep: u32,
    /// Minutes immediately after an event.
    pub transition: u32,
}

/// Per-mode scheduling rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeRules {
    pub task_limits: TaskLimits,
    /// Informational bounds on task-block length, in minutes. Individual
    /// durations are constrained by the duration enum, not by this range.
    pub block_duration_range: (u32, u32),
    /// Minutes of continuous work after which a break is due.
    pub break_interval: u32,
    /// Length of an inserted break, in minutes.
    pub break_duration: u32,
    pub buffers: BufferRules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_decreases_from_deep_work_to_chill() {
        let deep = DayMode::DeepWork.rules();
        let chill = DayMode::Chill.rules();

        assert!(deep.block_duration_range.1 > chill.block_duration_range.1);
        assert!(deep.task_limits.must > chill.task_limits.must);
        assert!(deep.break_duration < chill.break_duration);
    }

    #[test]
    fn chill_limits_match_contract() {
        let rules = DayMode::Chill.rules();
        assert_eq!(rules.task_limits.total, 3);
        assert_eq!(rules.task_limits.must, 1);
    }

    #[test]
    fn execution_buffers_are_fifteen_minutes() {
        let rules = DayMode::Execution.rules();
        assert_eq!(rules.buffers.prep, 15);
        assert_eq!(rules.buffers.transition, 15);
    }

    #[test]
    fn mode_serializes_as_display_string() {
        let json = serde_json::to_string(&DayMode::DeepWork).unwrap();
        assert_eq!(json, "\"Deep Work\"");

        let decoded: DayMode = serde_json::from_str("\"Balanced\"").unwrap();
        assert_eq!(decoded, DayMode::Balanced);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<DayMode>("\"Sprint\"").is_err());
    }
}
