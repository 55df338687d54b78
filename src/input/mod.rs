//! Input file loading and validation
//!
//! Turns the text of an input file into a [`ClubDay`]: the validated club
//! configuration plus the ordered event log. Any line that fails validation
//! aborts loading with [`InputError::InvalidLine`], carrying the line exactly
//! as it appeared in the file.
//!
//! # Usage Example
//!
//! ```rust
//! use computer_club_simulator::input::*;
//!
//! let day = parse_club_day("3\n09:00 19:00\n10\n08:48 1 client1\n").unwrap();
//! assert_eq!(day.config.tables_count, 3);
//! assert_eq!(day.events.len(), 1);
//!
//! let err = parse_club_day("3\n09:00 19:00\n10\n08:48 1 Client1\n").unwrap_err();
//! assert_eq!(err.offending_line(), Some("08:48 1 Client1"));
//! ```

use serde::{Deserialize, Serialize};

use crate::club::IncomingEvent;
use crate::types::ClubConfig;

pub mod error;
pub mod parser;

pub use error::*;
pub use parser::*;

/// A validated working day: configuration and the events to replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDay {
    /// Club configuration from the header lines
    pub config: ClubConfig,
    /// Events in non-decreasing time order
    pub events: Vec<IncomingEvent>,
}
