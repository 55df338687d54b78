//! Day runner
//!
//! Replays a validated [`ClubDay`] through a fresh [`ClubEngine`] and collects
//! the report together with [`DayStatistics`].

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::club::ClubEngine;
use crate::input::ClubDay;

use super::{DayStatistics, SimulationResult};

/// Result of replaying one club day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOutcome {
    /// Full report text, each line newline-terminated
    pub report: String,
    /// Counters collected during the day
    pub statistics: DayStatistics,
}

/// Run a club day from opening to closing
#[instrument(skip_all, fields(tables = day.config.tables_count, events = day.events.len()))]
pub fn run_club_day(day: &ClubDay) -> SimulationResult<DayOutcome> {
    day.config.validate()?;

    let mut engine = ClubEngine::new(day.config.clone());
    let mut statistics = DayStatistics::new();

    engine.open();
    for event in &day.events {
        let outcome = engine.process(event);
        statistics.record(event.kind(), &outcome);
    }

    statistics.clients_at_close = engine.client_count();
    engine.close();

    statistics.promotions = engine.promotion_count();
    statistics.total_profit = engine.total_profit();
    statistics.total_usage_minutes =
        engine.tables().iter().map(|table| table.usage_time().num_minutes()).sum();

    info!(
        rejections = statistics.total_rejections(),
        promotions = statistics.promotions,
        revenue = statistics.total_profit,
        "Club day finished"
    );

    Ok(DayOutcome { report: engine.report(), statistics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{ClubError, IncomingEvent};
    use crate::types::{ClubConfig, TableId};
    use chrono::NaiveTime;

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_run_single_table_day() {
        let day = ClubDay {
            config: ClubConfig::new(1, clock(9, 0), clock(19, 0), 10),
            events: vec![
                IncomingEvent::arrived(clock(9, 0), "alice"),
                IncomingEvent::took_place(clock(9, 5), "alice", TableId::new(1)),
            ],
        };

        let outcome = run_club_day(&day).unwrap();
        assert_eq!(
            outcome.report,
            "09:00\n09:00 1 alice\n09:05 2 alice 1\n19:00 11 alice\n19:00\n1 100 09:55\n"
        );
        assert_eq!(outcome.statistics.total_events, 2);
        assert_eq!(outcome.statistics.total_rejections(), 0);
        assert_eq!(outcome.statistics.clients_at_close, 1);
        assert_eq!(outcome.statistics.total_profit, 100);
        assert_eq!(outcome.statistics.total_usage_minutes, 595);
    }

    #[test]
    fn test_run_records_rejections() {
        let day = ClubDay {
            config: ClubConfig::new(1, clock(9, 0), clock(19, 0), 10),
            events: vec![
                IncomingEvent::arrived(clock(8, 0), "early"),
                IncomingEvent::left(clock(9, 30), "ghost"),
            ],
        };

        let outcome = run_club_day(&day).unwrap();
        assert_eq!(outcome.statistics.rejections_of(ClubError::NotOpenYet), 1);
        assert_eq!(outcome.statistics.rejections_of(ClubError::UnknownClient), 1);
        assert_eq!(outcome.statistics.clients_at_close, 0);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let day = ClubDay {
            config: ClubConfig::new(0, clock(9, 0), clock(19, 0), 10),
            events: Vec::new(),
        };
        assert!(matches!(
            run_club_day(&day),
            Err(crate::simulation::SimulationError::Configuration(_))
        ));
    }
}
