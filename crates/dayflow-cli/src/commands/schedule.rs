use std::fs;

use chrono::NaiveDate;
use clap::Subcommand;
use dayflow_core::{generate, toggle_status, DaySetup, ScheduleStats, TimeBlock};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Generate a schedule from a day-setup JSON file
    Generate {
        /// Path to the day setup (JSON)
        setup: String,
        /// Override the setup's scheduling date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Toggle a task/event block between pending and completed
    Toggle {
        /// Path to a saved schedule (JSON array of blocks)
        schedule: String,
        /// Id of the block to toggle
        id: String,
    },
    /// Print completion stats for a saved schedule
    Stats {
        /// Path to a saved schedule (JSON array of blocks)
        schedule: String,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Generate { setup, date } => {
            let mut setup: DaySetup = serde_json::from_str(&fs::read_to_string(setup)?)?;
            if let Some(date) = date {
                setup.date = date;
            }
            let blocks = generate(&setup)?;
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        ScheduleAction::Toggle { schedule, id } => {
            let mut blocks: Vec<TimeBlock> = serde_json::from_str(&fs::read_to_string(schedule)?)?;
            if !toggle_status(&mut blocks, &id) {
                return Err(format!("no task or event block with id '{id}'").into());
            }
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
        ScheduleAction::Stats { schedule } => {
            let blocks: Vec<TimeBlock> = serde_json::from_str(&fs::read_to_string(schedule)?)?;
            let stats = ScheduleStats::for_blocks(&blocks);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
