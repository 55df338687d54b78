//! Club simulation core
//!
//! This module contains the state machine that replays one working day of the
//! club and the records it manages.
//!
//! # Overview
//!
//! - **ClubEngine**: owns clients, tables and the queue; applies the club rules
//! - **Table**: per-table occupancy, profit and usage bookkeeping
//! - **ClientQueue**: bounded first-come-first-served waiting queue
//! - **ReportBuilder**: append-only day report
//! - **ClubError**: rejections written to the report as error lines
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::club::*;
//! use computer_club_simulator::types::*;
//! use chrono::NaiveTime;
//!
//! let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
//! let config = ClubConfig::new(1, at(9, 0), at(19, 0), 10);
//!
//! let mut engine = ClubEngine::new(config);
//! engine.open();
//! engine.process(&IncomingEvent::arrived(at(9, 0), "alice")).unwrap();
//! engine.process(&IncomingEvent::took_place(at(9, 5), "alice", TableId::new(1))).unwrap();
//! engine.close();
//!
//! assert!(engine.report().ends_with("1 100 09:55\n"));
//! ```

pub mod client;
pub mod engine;
pub mod error;
pub mod event;
pub mod queue;
pub mod report;
pub mod table;

// Re-export all public types for convenience
pub use client::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use queue::*;
pub use report::*;
pub use table::*;
