//! Business rejections
//!
//! Every variant is an expected outcome of replaying a day, never a fatal
//! condition. The `Display` text of a variant is exactly what the report shows
//! after the `13` error code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons the club refuses an incoming event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Error)]
pub enum ClubError {
    /// Client arrived while already inside
    #[error("YouShallNotPass")]
    AlreadyInClub,

    /// Client arrived outside opening hours
    #[error("NotOpenYet")]
    NotOpenYet,

    /// Requested table is occupied
    #[error("PlaceIsBusy")]
    TableBusy,

    /// Event names a client who is not in the club
    #[error("ClientUnknown")]
    UnknownClient,

    /// Requested table number does not exist
    #[error("TableUnknown")]
    UnknownTable,

    /// Client asked to wait although a table is free
    #[error("ICanWaitNoLonger!")]
    CannotWaitNow,

    /// Queue was full, the client was sent home
    #[error("QueueIsFull")]
    QueueFull,
}

impl ClubError {
    /// All rejection kinds
    pub const ALL: [ClubError; 7] = [
        ClubError::AlreadyInClub,
        ClubError::NotOpenYet,
        ClubError::TableBusy,
        ClubError::UnknownClient,
        ClubError::UnknownTable,
        ClubError::CannotWaitNow,
        ClubError::QueueFull,
    ];

    /// Short name used in logs and statistics
    pub fn kind_name(self) -> &'static str {
        match self {
            ClubError::AlreadyInClub => "AlreadyInClub",
            ClubError::NotOpenYet => "NotOpenYet",
            ClubError::TableBusy => "TableBusy",
            ClubError::UnknownClient => "UnknownClient",
            ClubError::UnknownTable => "UnknownTable",
            ClubError::CannotWaitNow => "CannotWaitNow",
            ClubError::QueueFull => "QueueFull",
        }
    }
}

/// Result type for club event processing
pub type ClubResult<T> = Result<T, ClubError>;
