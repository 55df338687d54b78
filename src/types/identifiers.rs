//! Identifier types for the computer club simulator
//!
//! Clients are identified by the name they give at the door, tables by their
//! 1-based number on the club floor.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of a club client
///
/// Names are case-sensitive and restricted to lowercase latin letters, digits,
/// `_` and `-`. The restriction is enforced where names enter the system
/// (see [`ClientName::is_valid`]); the engine treats them as opaque keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientName(String);

impl ClientName {
    /// Wrap a client name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that a raw name is non-empty and uses only `[a-z0-9_-]`
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-')
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for ClientName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Number of a table in the club, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(u32);

impl TableId {
    /// Create a table identifier
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// The table number as printed in the report
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position of the table in a dense table list
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
