//! Working day report
//!
//! The report is the only observable output of a club day. Lines are appended
//! in the order things happen and are never edited afterwards.

use chrono::{Duration, NaiveTime};
use std::fmt;

use crate::types::{format_clock, format_duration, ClientName, OutgoingEventKind, TableId};

use super::ClubError;

/// Append-only builder for the day report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// `HH:MM <code> <name>`
    pub fn write_event(&mut self, time: NaiveTime, code: u8, client: &ClientName) {
        self.lines.push(format!("{} {} {}", format_clock(time), code, client));
    }

    /// `HH:MM <code> <name> <table>`
    pub fn write_event_with_table(
        &mut self,
        time: NaiveTime,
        code: u8,
        client: &ClientName,
        table: TableId,
    ) {
        self.lines.push(format!("{} {} {} {}", format_clock(time), code, client, table));
    }

    /// `HH:MM 13 <error>`
    pub fn write_error(&mut self, time: NaiveTime, error: ClubError) {
        self.lines.push(format!(
            "{} {} {}",
            format_clock(time),
            OutgoingEventKind::Error.code(),
            error
        ));
    }

    /// `HH:MM`
    pub fn write_time(&mut self, time: NaiveTime) {
        self.lines.push(format_clock(time));
    }

    /// `<table> <profit> HH:MM`
    pub fn write_table_summary(&mut self, table: TableId, profit: u64, usage_time: Duration) {
        self.lines.push(format!("{} {} {}", table, profit, format_duration(usage_time)));
    }

    /// Lines written so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines written so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing was written yet
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the report, one newline-terminated line per entry
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ReportBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
