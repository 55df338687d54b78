//! Configuration structures for the computer club simulator
//!
//! This module contains the command line arguments of the binary and the club
//! configuration read from the header of the input file, together with the
//! validation logic for both.

use super::clock::{format_clock, hh_mm};
use super::TableId;
use chrono::NaiveTime;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "computer-club-simulator",
    version = "0.1.0",
    about = "Computer Club Simulator - Replays a club's working day and prints the day report",
    long_about = "Replays one working day of a computer club from an event log and prints every event, every rejected request and the end-of-day profit and usage of each table.

INPUT FORMAT:
    <number of tables>
    <opening time HH:MM> <closing time HH:MM>
    <price per hour>
    <HH:MM> <event code> <client name> [<table number>]
    ...

EXAMPLES:
    # Print the day report
    computer-club-simulator day.txt

    # Validate the input without running the day
    computer-club-simulator day.txt --dry-run

    # Show the parsed club configuration as JSON
    computer-club-simulator day.txt --print-config

    # Print the report and a statistics summary, with verbose logging
    computer-club-simulator day.txt --stats --verbose

If a line of the input is malformed, that line is printed instead of the report."
)]
pub struct CliArgs {
    /// Input file with the club configuration and the event log
    #[arg(value_name = "INPUT", help = "Input file with the club configuration and the event log")]
    pub input: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON instead of human-readable text")]
    pub log_json: bool,

    /// Directory for daily rolling log files
    #[arg(
        long,
        value_name = "DIR",
        help = "Also write logs to daily rolling files in DIR",
        long_help = "Also write logs to daily rolling files in DIR. Console logs still go to stderr; stdout carries only the report."
    )]
    pub log_dir: Option<String>,

    /// Print day statistics to stderr after the report
    #[arg(long, help = "Print day statistics to stderr after the report")]
    pub stats: bool,

    /// Dry run mode - validate the input without running the day
    #[arg(long, help = "Validate the input without running the day")]
    pub dry_run: bool,

    /// Print the parsed club configuration and exit
    #[arg(long, help = "Print the parsed club configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration of the club for one working day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubConfig {
    /// Number of tables, numbered `1..=tables_count`
    pub tables_count: u32,

    /// Opening time
    #[serde(with = "hh_mm")]
    pub opening_time: NaiveTime,

    /// Closing time, same day, not earlier than the opening time
    #[serde(with = "hh_mm")]
    pub closing_time: NaiveTime,

    /// Price of one started hour at a table
    pub price_per_hour: u64,
}

/// Validation errors for the club configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Tables count is invalid
    #[error("Tables count must be greater than 0, got {0}")]
    InvalidTablesCount(u32),

    /// Closing time precedes opening time
    #[error("Invalid opening hours: closing time ({closing}) must not be earlier than opening time ({opening})")]
    InvalidOpeningHours {
        /// Opening time as `HH:MM`
        opening: String,
        /// Closing time as `HH:MM`
        closing: String,
    },
}

impl ClubConfig {
    /// Create a club configuration
    pub fn new(
        tables_count: u32,
        opening_time: NaiveTime,
        closing_time: NaiveTime,
        price_per_hour: u64,
    ) -> Self {
        Self { tables_count, opening_time, closing_time, price_per_hour }
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.tables_count == 0 {
            return Err(ConfigValidationError::InvalidTablesCount(self.tables_count));
        }

        if self.closing_time < self.opening_time {
            return Err(ConfigValidationError::InvalidOpeningHours {
                opening: format_clock(self.opening_time),
                closing: format_clock(self.closing_time),
            });
        }

        Ok(())
    }

    /// Whether clients may be let in at the given time (bounds inclusive)
    pub fn is_working_hours(&self, time: NaiveTime) -> bool {
        time >= self.opening_time && time <= self.closing_time
    }

    /// Capacity of the waiting queue: one more than the number of tables
    pub fn queue_capacity(&self) -> usize {
        self.tables_count as usize + 1
    }

    /// Whether a table number exists in this club
    pub fn has_table(&self, table: TableId) -> bool {
        (1..=self.tables_count).contains(&table.get())
    }

    /// All table identifiers in ascending order
    pub fn table_ids(&self) -> impl Iterator<Item = TableId> {
        (1..=self.tables_count).map(TableId::new)
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
