//! Tests for running whole club days through the public API

use computer_club_simulator::club::ClubError;
use computer_club_simulator::input::parse_club_day;
use computer_club_simulator::simulation::{run_club_day, DayStatistics};
use computer_club_simulator::types::IncomingEventKind;

use crate::input_parsing_tests::{CLASSIC_DAY, CLASSIC_REPORT};

#[test]
fn test_classic_day_statistics() {
    let day = parse_club_day(CLASSIC_DAY).unwrap();
    let outcome = run_club_day(&day).unwrap();

    assert_eq!(outcome.report, CLASSIC_REPORT);

    let stats = &outcome.statistics;
    assert_eq!(stats.total_events, 14);
    assert_eq!(stats.count(IncomingEventKind::Arrived), 5);
    assert_eq!(stats.count(IncomingEventKind::TookPlace), 4);
    assert_eq!(stats.count(IncomingEventKind::Waiting), 2);
    assert_eq!(stats.count(IncomingEventKind::Left), 3);
    assert_eq!(stats.rejections_of(ClubError::NotOpenYet), 1);
    assert_eq!(stats.rejections_of(ClubError::CannotWaitNow), 1);
    assert_eq!(stats.rejections_of(ClubError::TableBusy), 1);
    assert_eq!(stats.total_rejections(), 3);
    assert_eq!(stats.promotions, 1);
    assert_eq!(stats.evictions(), 0);
    assert_eq!(stats.clients_at_close, 1);
    assert_eq!(stats.total_profit, 190);
    assert_eq!(stats.total_usage_minutes, 358 + 138 + 481);
}

#[test]
fn test_empty_day_reports_idle_tables() {
    let day = parse_club_day("2\n10:00 22:00\n50\n").unwrap();
    let outcome = run_club_day(&day).unwrap();

    assert_eq!(outcome.report, "10:00\n22:00\n1 0 00:00\n2 0 00:00\n");
    assert_eq!(outcome.statistics, DayStatistics::default());
}

#[test]
fn test_eviction_is_counted() {
    let input = "\
1
09:00 19:00
10
09:00 1 a
09:00 1 b
09:00 1 c
09:00 1 d
09:01 2 a 1
09:02 3 b
09:03 3 c
09:04 3 d
";
    let outcome = run_club_day(&parse_club_day(input).unwrap()).unwrap();

    assert_eq!(outcome.statistics.evictions(), 1);
    assert_eq!(outcome.statistics.clients_at_close, 3);
    assert!(outcome.report.contains("09:04 3 d\n09:04 11 d\n"));
    assert!(!outcome.report.contains("19:00 11 d"));
}

#[test]
fn test_statistics_serialize_to_json() {
    let day = parse_club_day(CLASSIC_DAY).unwrap();
    let outcome = run_club_day(&day).unwrap();

    let json = serde_json::to_value(&outcome.statistics).unwrap();
    assert_eq!(json["total_profit"], 190);
    assert_eq!(json["rejections"]["TableBusy"], 1);
}
