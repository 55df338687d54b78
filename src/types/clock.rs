//! Wall-clock helpers for the club day
//!
//! All club times are same-day `HH:MM` clock readings without a date or time
//! zone. This module owns the strict parser, the report formatters and the
//! midnight-aware elapsed time calculation used for billing.

use chrono::{Duration, NaiveTime, Timelike};

/// Length of a well-formed `HH:MM` token
const CLOCK_TOKEN_LEN: usize = 5;

/// Parse a strict `HH:MM` token (two digits, colon, two digits)
///
/// Returns `None` for anything else, including single-digit hours such as
/// `9:00` that a lenient parser would accept.
pub fn parse_clock(token: &str) -> Option<NaiveTime> {
    // chrono's %H also takes one digit or leading spaces, so pin the shape first
    let well_formed = token.len() == CLOCK_TOKEN_LEN
        && token
            .bytes()
            .enumerate()
            .all(|(i, byte)| if i == 2 { byte == b':' } else { byte.is_ascii_digit() });
    if !well_formed {
        return None;
    }
    NaiveTime::parse_from_str(token, "%H:%M").ok()
}

/// Format a clock reading as `HH:MM`
pub fn format_clock(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Format an accumulated duration as `HH:MM`
///
/// Hours are not wrapped at 24, so a table that was busy across midnight for
/// a long stretch still reports its full usage.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Time elapsed between two clock readings of the same club day
///
/// An `end` earlier than `start` means the stay crossed midnight, so a full
/// day is added to `end` before subtracting.
pub fn elapsed_between(start: NaiveTime, end: NaiveTime) -> Duration {
    let elapsed = end - start;
    if elapsed < Duration::zero() {
        elapsed + Duration::hours(24)
    } else {
        elapsed
    }
}

/// Serde adapter that renders a [`NaiveTime`] as `HH:MM`
pub mod hh_mm {
    use super::{format_clock, parse_clock};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize a clock reading as `HH:MM`
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_clock(*time))
    }

    /// Deserialize a clock reading from a strict `HH:MM` string
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_clock(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid HH:MM time: {}", s)))
    }
}
