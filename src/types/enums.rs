//! Enumeration types for the computer club simulator
//!
//! This module contains the event kind codes used in the input log and the
//! report, plus the lifecycle states of clients and tables.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TableId;

/// Kinds of events read from the input log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomingEventKind {
    /// Client walked into the club
    Arrived,
    /// Client sat down at a table
    TookPlace,
    /// Client asked to wait for a free table
    Waiting,
    /// Client went home
    Left,
}

impl IncomingEventKind {
    /// All incoming kinds in code order
    pub const ALL: [IncomingEventKind; 4] = [
        IncomingEventKind::Arrived,
        IncomingEventKind::TookPlace,
        IncomingEventKind::Waiting,
        IncomingEventKind::Left,
    ];

    /// Numeric code used in the input log and the report
    pub fn code(self) -> u8 {
        match self {
            IncomingEventKind::Arrived => 1,
            IncomingEventKind::TookPlace => 2,
            IncomingEventKind::Waiting => 3,
            IncomingEventKind::Left => 4,
        }
    }

    /// Look up a kind by its numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Whether events of this kind carry a table number
    pub fn has_table(self) -> bool {
        self == IncomingEventKind::TookPlace
    }
}

impl fmt::Display for IncomingEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomingEventKind::Arrived => write!(f, "Arrived"),
            IncomingEventKind::TookPlace => write!(f, "Took Place"),
            IncomingEventKind::Waiting => write!(f, "Waiting"),
            IncomingEventKind::Left => write!(f, "Left"),
        }
    }
}

impl FromStr for IncomingEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| format!("Unknown incoming event code: {}", s))
    }
}

/// Kinds of events the club itself writes to the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutgoingEventKind {
    /// Client was sent home (queue overflow or closing time)
    Left,
    /// Waiting client was seated at a freed table
    TookPlace,
    /// An incoming event was rejected
    Error,
}

impl OutgoingEventKind {
    /// Numeric code used in the report
    pub fn code(self) -> u8 {
        match self {
            OutgoingEventKind::Left => 11,
            OutgoingEventKind::TookPlace => 12,
            OutgoingEventKind::Error => 13,
        }
    }
}

impl fmt::Display for OutgoingEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutgoingEventKind::Left => write!(f, "Left"),
            OutgoingEventKind::TookPlace => write!(f, "Took Place"),
            OutgoingEventKind::Error => write!(f, "Error"),
        }
    }
}

/// Where a client currently is inside the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientState {
    /// Inside the club, not at a table and not queued
    Arrived,
    /// Occupying the given table
    Seated(TableId),
    /// Standing in the waiting queue
    Waiting,
}

impl ClientState {
    /// Table the client occupies, if seated
    pub fn busy_table(self) -> Option<TableId> {
        match self {
            ClientState::Seated(table) => Some(table),
            ClientState::Arrived | ClientState::Waiting => None,
        }
    }
}

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientState::Arrived => write!(f, "Arrived"),
            ClientState::Seated(table) => write!(f, "Seated at {}", table),
            ClientState::Waiting => write!(f, "Waiting"),
        }
    }
}

/// Occupancy of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableState {
    /// Nobody sits at the table
    Free,
    /// Occupied since the given time
    Busy {
        /// When the current client sat down
        since: NaiveTime,
    },
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableState::Free => write!(f, "Free"),
            TableState::Busy { since } => write!(f, "Busy since {}", since.format("%H:%M")),
        }
    }
}
