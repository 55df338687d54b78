//! Tests for CLI argument parsing functionality

use clap::Parser;
use computer_club_simulator::types::config::CliArgs;
use std::path::PathBuf;

#[test]
fn test_input_argument_is_required() {
    assert!(CliArgs::try_parse_from(["computer-club-simulator"]).is_err());

    let args = CliArgs::try_parse_from(["computer-club-simulator", "day.txt"]).unwrap();
    assert_eq!(args.input, PathBuf::from("day.txt"));
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.log_json);
    assert!(args.log_dir.is_none());
    assert!(!args.stats);
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

#[test]
fn test_logging_flags() {
    let args = CliArgs::try_parse_from([
        "computer-club-simulator",
        "day.txt",
        "-v",
        "--debug",
        "--log-json",
        "--log-dir",
        "logs",
    ])
    .unwrap();

    assert!(args.verbose);
    assert!(args.debug);
    assert!(args.log_json);
    assert_eq!(args.log_dir.as_deref(), Some("logs"));
}

#[test]
fn test_mode_flags() {
    let args = CliArgs::try_parse_from([
        "computer-club-simulator",
        "--stats",
        "--dry-run",
        "--print-config",
        "day.txt",
    ])
    .unwrap();

    assert!(args.stats);
    assert!(args.dry_run);
    assert!(args.print_config);
    assert_eq!(args.input, PathBuf::from("day.txt"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let result = CliArgs::try_parse_from(["computer-club-simulator", "day.txt", "--days", "3"]);
    assert!(result.is_err());
}

#[test]
fn test_log_dir_requires_value() {
    let result = CliArgs::try_parse_from(["computer-club-simulator", "day.txt", "--log-dir"]);
    assert!(result.is_err());
}
