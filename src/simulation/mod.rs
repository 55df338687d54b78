//! Simulation driver, statistics, logging and error handling
//!
//! # Overview
//!
//! - **run_club_day**: replays a validated day and returns the report
//! - **DayStatistics**: counters collected alongside the report
//! - **LoggingConfig**: tracing subscriber setup for the binary
//! - **SimulationError**: top-level error with a category per layer
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::input::parse_club_day;
//! use computer_club_simulator::simulation::*;
//!
//! let day = parse_club_day("1\n09:00 19:00\n10\n09:00 1 alice\n09:05 2 alice 1\n").unwrap();
//! let outcome = run_club_day(&day).unwrap();
//!
//! assert!(outcome.report.ends_with("1 100 09:55\n"));
//! assert_eq!(outcome.statistics.total_profit, 100);
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use statistics::*;
