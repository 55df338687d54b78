//! Computer Club Simulator
//!
//! Replays one working day of a computer club from an event log and produces
//! the day report: every incoming event, every derived event and error, and
//! per-table revenue and occupancy at closing.
//!
//! # Overview
//!
//! A club has a fixed number of tables, opening hours and an hourly price.
//! Clients arrive, sit down, ask to wait, and leave. The engine enforces the
//! club rules, keeps a bounded waiting queue, seats the longest-waiting client
//! whenever a table frees up, and bills every started hour at closing.
//!
//! ## Key Features
//!
//! - **Strict Input Validation**: the first malformed line is reported verbatim
//! - **Deterministic Report**: byte-exact output for a given input file
//! - **Queue Promotion**: freed tables go to the head of the waiting queue
//! - **Midnight Rollover**: sessions crossing midnight are billed correctly
//! - **Day Statistics**: rejection, promotion and revenue counters
//!
//! ## Quick Start
//!
//! ```rust
//! use computer_club_simulator::*;
//!
//! let input = "\
//! 1
//! 09:00 19:00
//! 10
//! 09:00 1 alice
//! 09:05 2 alice 1
//! ";
//!
//! let day = parse_club_day(input)?;
//! let outcome = run_club_day(&day)?;
//!
//! print!("{}", outcome.report);
//! assert!(outcome.report.ends_with("1 100 09:55\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Clock helpers, identifiers, event codes and configuration
//! - [`club`]: The club engine, tables, waiting queue and report
//! - [`input`]: Input file loading and validation
//! - [`simulation`]: Day runner, statistics, logging and errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Input     │    │ Simulation  │    │    Club     │
//! │             │    │             │    │             │
//! │ Parser      │───►│ Runner      │───►│ Engine      │
//! │ Validation  │    │ Statistics  │    │ Tables      │
//! │             │    │ Logging     │    │ Queue       │
//! └─────────────┘    └─────────────┘    │ Report      │
//!        │                   │          └─────────────┘
//!        ▼                   ▼                 │
//! ┌───────────────────────────────────────────────────┐
//! │                      Types                        │
//! │  Clock · Identifiers · Event codes · ClubConfig   │
//! └───────────────────────────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod club;
pub mod input;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    // Identifiers
    ClientName,
    // Enums
    ClientState,
    // Configuration
    ClubConfig,
    ConfigValidationError,
    IncomingEventKind,
    OutgoingEventKind,
    TableId,
    TableState,
};

// Club engine and records
pub use club::{
    Client, ClientAction, ClientQueue, ClubEngine, ClubError, ClubResult, IncomingEvent,
    ReportBuilder, Table,
};

// Input loading
pub use input::{load_club_day, parse_club_day, ClubDay, InputError, LineError};

// Simulation types and functionality
pub use simulation::{
    run_club_day, DayOutcome, DayStatistics, LoggingConfig, SimulationError, SimulationResult,
};
