//! Statistics collection and reporting
//!
//! Counters gathered while replaying a club day. They are a side channel for
//! operators; the day report itself never includes them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::club::{ClubError, ClubResult};
use crate::types::{format_duration, IncomingEventKind};

/// Counters for one club day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatistics {
    /// Incoming events processed
    pub total_events: usize,
    /// Arrival events
    pub arrivals: usize,
    /// Sit-down events
    pub took_place_events: usize,
    /// Wait requests
    pub waiting_events: usize,
    /// Departure events
    pub left_events: usize,
    /// Rejections by reason
    pub rejections: BTreeMap<ClubError, usize>,
    /// Queued clients seated automatically when a table freed up
    pub promotions: usize,
    /// Clients still inside when the club closed
    pub clients_at_close: usize,
    /// Revenue over all tables
    pub total_profit: u64,
    /// Sum of table occupancy in minutes
    pub total_usage_minutes: i64,
}

impl DayStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one incoming event
    pub fn record(&mut self, kind: IncomingEventKind, outcome: &ClubResult<()>) {
        self.total_events += 1;
        match kind {
            IncomingEventKind::Arrived => self.arrivals += 1,
            IncomingEventKind::TookPlace => self.took_place_events += 1,
            IncomingEventKind::Waiting => self.waiting_events += 1,
            IncomingEventKind::Left => self.left_events += 1,
        }
        if let Err(error) = outcome {
            *self.rejections.entry(*error).or_insert(0) += 1;
        }
    }

    /// Number of events of a kind
    pub fn count(&self, kind: IncomingEventKind) -> usize {
        match kind {
            IncomingEventKind::Arrived => self.arrivals,
            IncomingEventKind::TookPlace => self.took_place_events,
            IncomingEventKind::Waiting => self.waiting_events,
            IncomingEventKind::Left => self.left_events,
        }
    }

    /// Rejections for one reason
    pub fn rejections_of(&self, error: ClubError) -> usize {
        self.rejections.get(&error).copied().unwrap_or(0)
    }

    /// All rejections, evictions included
    pub fn total_rejections(&self) -> usize {
        self.rejections.values().sum()
    }

    /// Clients turned away because the queue was full
    pub fn evictions(&self) -> usize {
        self.rejections_of(ClubError::QueueFull)
    }

    /// Percentage of events that were rejected
    pub fn rejection_rate(&self) -> f64 {
        if self.total_events == 0 {
            0.0
        } else {
            (self.total_rejections() as f64 / self.total_events as f64) * 100.0
        }
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "Day Summary: {} events | {} rejected ({:.1}%) | {} promoted | {} evicted | revenue {} | occupancy {}",
            self.total_events,
            self.total_rejections(),
            self.rejection_rate(),
            self.promotions,
            self.evictions(),
            self.total_profit,
            format_duration(chrono::Duration::minutes(self.total_usage_minutes)),
        )
    }
}

impl fmt::Display for DayStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for kind in IncomingEventKind::ALL {
            writeln!(f, "  {:<10} {}", kind.to_string(), self.count(kind))?;
        }
        for (error, count) in &self.rejections {
            writeln!(f, "  {:<10} {}", error.kind_name(), count)?;
        }
        write!(f, "  {:<10} {}", "AtClose", self.clients_at_close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_kinds_and_rejections() {
        let mut stats = DayStatistics::new();
        stats.record(IncomingEventKind::Arrived, &Ok(()));
        stats.record(IncomingEventKind::Arrived, &Err(ClubError::NotOpenYet));
        stats.record(IncomingEventKind::TookPlace, &Err(ClubError::TableBusy));
        stats.record(IncomingEventKind::Waiting, &Err(ClubError::QueueFull));

        assert_eq!(stats.total_events, 4);
        assert_eq!(stats.count(IncomingEventKind::Arrived), 2);
        assert_eq!(stats.count(IncomingEventKind::Left), 0);
        assert_eq!(stats.total_rejections(), 3);
        assert_eq!(stats.rejections_of(ClubError::TableBusy), 1);
        assert_eq!(stats.evictions(), 1);
        assert_eq!(stats.rejection_rate(), 75.0);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = DayStatistics::new();
        assert_eq!(stats.total_rejections(), 0);
        assert_eq!(stats.rejection_rate(), 0.0);
        assert!(stats.summary().starts_with("Day Summary: 0 events"));
    }

    #[test]
    fn test_summary_formats_occupancy() {
        let stats = DayStatistics { total_profit: 190, total_usage_minutes: 977, ..Default::default() };
        let summary = stats.summary();
        assert!(summary.contains("revenue 190"));
        assert!(summary.contains("occupancy 16:17"));
    }
}
