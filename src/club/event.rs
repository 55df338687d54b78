//! Incoming events fed to the club engine

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::types::{ClientName, IncomingEventKind, TableId};

/// What a client did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientAction {
    /// Walked into the club
    Arrived,
    /// Sat down at a table
    TookPlace(TableId),
    /// Asked to wait for a table
    Waiting,
    /// Went home
    Left,
}

impl ClientAction {
    /// Event kind of this action
    pub fn kind(self) -> IncomingEventKind {
        match self {
            ClientAction::Arrived => IncomingEventKind::Arrived,
            ClientAction::TookPlace(_) => IncomingEventKind::TookPlace,
            ClientAction::Waiting => IncomingEventKind::Waiting,
            ClientAction::Left => IncomingEventKind::Left,
        }
    }
}

/// A validated line of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingEvent {
    /// When it happened
    pub time: NaiveTime,
    /// Who did it
    pub client: ClientName,
    /// What happened
    pub action: ClientAction,
}

impl IncomingEvent {
    /// Create an event
    pub fn new(time: NaiveTime, client: impl Into<ClientName>, action: ClientAction) -> Self {
        Self { time, client: client.into(), action }
    }

    /// Client arrival
    pub fn arrived(time: NaiveTime, client: impl Into<ClientName>) -> Self {
        Self::new(time, client, ClientAction::Arrived)
    }

    /// Client sitting down at `table`
    pub fn took_place(time: NaiveTime, client: impl Into<ClientName>, table: TableId) -> Self {
        Self::new(time, client, ClientAction::TookPlace(table))
    }

    /// Client asking to wait
    pub fn waiting(time: NaiveTime, client: impl Into<ClientName>) -> Self {
        Self::new(time, client, ClientAction::Waiting)
    }

    /// Client leaving
    pub fn left(time: NaiveTime, client: impl Into<ClientName>) -> Self {
        Self::new(time, client, ClientAction::Left)
    }

    /// Event kind
    pub fn kind(&self) -> IncomingEventKind {
        self.action.kind()
    }
}
