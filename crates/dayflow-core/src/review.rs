//! End-of-day review figures computed over a generated schedule.
//!
//! Pure bookkeeping over the block list; the mode-suggestion collaborator
//! consumes the resulting [`DayReview`] record and stays outside this crate.

use serde::{Deserialize, Serialize};

use crate::modes::DayMode;
use crate::schedule::{BlockStatus, TimeBlock};

/// Completion figures for one day's schedule.
///
/// Only task and event blocks count; breaks and buffers are neither work nor
/// completable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStats {
    pub done_count: usize,
    pub total_count: usize,
    /// Percentage of work blocks marked completed; 0 when there are none.
    pub completion_rate: f64,
    /// Minutes across all task and event blocks, completed or not.
    pub focus_minutes: i64,
}

impl ScheduleStats {
    pub fn for_blocks(blocks: &[TimeBlock]) -> Self {
        let work: Vec<&TimeBlock> = blocks.iter().filter(|b| b.is_work()).collect();
        let done_count = work
            .iter()
            .filter(|b| b.status() == Some(BlockStatus::Completed))
            .count();
        let total_count = work.len();
        let focus_minutes = work.iter().map(|b| b.duration_minutes()).sum();
        let completion_rate = if total_count > 0 {
            done_count as f64 / total_count as f64 * 100.0
        } else {
            0.0
        };

        Self {
            done_count,
            total_count,
            completion_rate,
            focus_minutes,
        }
    }
}

/// Plain-data record handed to the next-day mode suggestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReview {
    pub completion_rate: f64,
    pub day_mode: DayMode,
    /// 1-5 star rating.
    pub day_rating: u8,
    pub what_worked: String,
    pub what_didnt: String,
}

impl DayReview {
    pub fn new(
        stats: &ScheduleStats,
        day_mode: DayMode,
        day_rating: u8,
        what_worked: impl Into<String>,
        what_didnt: impl Into<String>,
    ) -> Self {
        Self {
            completion_rate: stats.completion_rate,
            day_mode,
            day_rating,
            what_worked: what_worked.into(),
            what_didnt: what_didnt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{BlockKind, Priority};
    use chrono::NaiveDate;

    fn block(id: &str, start_h: u32, end_h: u32, kind: BlockKind) -> TimeBlock {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        TimeBlock {
            id: id.to_string(),
            title: id.to_string(),
            start: date.and_hms_opt(start_h, 0, 0).unwrap(),
            end: date.and_hms_opt(end_h, 0, 0).unwrap(),
            kind,
        }
    }

    #[test]
    fn counts_only_work_blocks() {
        let blocks = vec![
            block(
                "t1",
                9,
                10,
                BlockKind::Task {
                    priority: Priority::Must,
                    status: BlockStatus::Completed,
                },
            ),
            block(
                "e1",
                10,
                11,
                BlockKind::Event {
                    status: BlockStatus::Pending,
                },
            ),
            block("break-1100", 11, 12, BlockKind::Break),
            block("buffer-1200", 12, 13, BlockKind::Buffer),
        ];

        let stats = ScheduleStats::for_blocks(&blocks);
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.done_count, 1);
        assert_eq!(stats.completion_rate, 50.0);
        assert_eq!(stats.focus_minutes, 120);
    }

    #[test]
    fn empty_schedule_has_zero_rate() {
        let stats = ScheduleStats::for_blocks(&[]);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.focus_minutes, 0);
    }

    #[test]
    fn review_record_carries_the_rate() {
        let blocks = vec![block(
            "t1",
            9,
            10,
            BlockKind::Task {
                priority: Priority::Must,
                status: BlockStatus::Completed,
            },
        )];
        let stats = ScheduleStats::for_blocks(&blocks);
        let review = DayReview::new(&stats, DayMode::Balanced, 4, "Focused", "Too many pings");
        assert_eq!(review.completion_rate, 100.0);

        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["dayMode"], "Balanced");
        assert_eq!(json["whatWorked"], "Focused");
    }
}
