//! Core types and identifiers for the computer club simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulator.
//!
//! # Overview
//!
//! - **Identifiers**: client names and table numbers
//! - **Enums**: event kind codes, client and table states
//! - **Clock**: strict `HH:MM` parsing and report formatting
//! - **Configuration**: club configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::types::*;
//! use chrono::NaiveTime;
//!
//! let config = ClubConfig::new(
//!     3,
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
//!     10,
//! );
//! config.validate().unwrap();
//!
//! assert_eq!(config.queue_capacity(), 4);
//! assert_eq!(IncomingEventKind::TookPlace.code(), 2);
//! assert!(ClientName::is_valid("client1"));
//! ```

pub mod clock;
pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use clock::*;
pub use config::*;
pub use enums::*;
pub use identifiers::*;
