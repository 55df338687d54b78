//! Input file parsing
//!
//! The input is a three-line header followed by the event log:
//!
//! ```text
//! 3
//! 09:00 19:00
//! 10
//! 08:48 1 client1
//! 09:54 2 client1 1
//! ```
//!
//! Tokens are separated by exactly one space. Validation stops at the first
//! bad line, which is returned verbatim so it can be shown to the user.

use chrono::NaiveTime;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::club::{ClientAction, IncomingEvent};
use crate::types::{parse_clock, ClientName, ClubConfig, IncomingEventKind, TableId};

use super::{ClubDay, InputError, LineError};

/// Load and validate a club day from a file
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_club_day<P: AsRef<Path>>(path: P) -> Result<ClubDay, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|source| InputError::Io { path: path.display().to_string(), source })?;

    let day = parse_club_day(&content)?;
    info!(
        tables = day.config.tables_count,
        events = day.events.len(),
        "Loaded club day from {}",
        path.display()
    );
    Ok(day)
}

/// Parse and validate a club day from the text of an input file
pub fn parse_club_day(content: &str) -> Result<ClubDay, InputError> {
    let mut lines = content.lines().enumerate().map(|(i, line)| (i + 1, line));

    let tables_count = parse_header(&mut lines, parse_tables_count)?;
    let (opening_time, closing_time) = parse_header(&mut lines, parse_opening_hours)?;
    let price_per_hour = parse_header(&mut lines, parse_price_per_hour)?;

    let config = ClubConfig::new(tables_count, opening_time, closing_time, price_per_hour);

    let mut events = Vec::new();
    let mut last_time: Option<NaiveTime> = None;
    for (line_number, line) in lines {
        let event = parse_event_line(line, &config, last_time)
            .map_err(|reason| InputError::invalid_line(line_number, line, reason))?;
        last_time = Some(event.time);
        events.push(event);
    }

    debug!(events = events.len(), "Input validated");
    Ok(ClubDay { config, events })
}

fn parse_header<'a, T>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    parse: fn(&str) -> Result<T, LineError>,
) -> Result<T, InputError> {
    let (line_number, line) = lines
        .next()
        .ok_or_else(|| InputError::invalid_line(0, "", LineError::MissingLine))?;
    parse(line).map_err(|reason| InputError::invalid_line(line_number, line, reason))
}

/// Parse the tables count line: an integer of at least 1
pub fn parse_tables_count(line: &str) -> Result<u32, LineError> {
    match line.parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(LineError::TablesCount),
    }
}

/// Parse the opening hours line: `HH:MM HH:MM`, closing not before opening
pub fn parse_opening_hours(line: &str) -> Result<(NaiveTime, NaiveTime), LineError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    let [opening, closing] = tokens.as_slice() else {
        return Err(LineError::OpeningHours);
    };

    let opening = parse_clock(opening).ok_or(LineError::OpeningHours)?;
    let closing = parse_clock(closing).ok_or(LineError::OpeningHours)?;
    if closing < opening {
        return Err(LineError::OpeningHours);
    }

    Ok((opening, closing))
}

/// Parse the price line: a non-negative integer
pub fn parse_price_per_hour(line: &str) -> Result<u64, LineError> {
    line.parse::<u64>().map_err(|_| LineError::PricePerHour)
}

/// Parse one event line against the club configuration
///
/// `last_time` is the time of the previous event, `None` for the first one.
pub fn parse_event_line(
    line: &str,
    config: &ClubConfig,
    last_time: Option<NaiveTime>,
) -> Result<IncomingEvent, LineError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if !(3..=4).contains(&tokens.len()) {
        return Err(LineError::Event);
    }

    let kind: IncomingEventKind = tokens[1].parse().map_err(|_| LineError::Event)?;
    let expected_tokens = if kind.has_table() { 4 } else { 3 };
    if tokens.len() != expected_tokens {
        return Err(LineError::Event);
    }

    let time = parse_clock(tokens[0]).ok_or(LineError::Event)?;
    if last_time.is_some_and(|last| time < last) {
        return Err(LineError::EventSequence);
    }

    let name = tokens[2];
    if !ClientName::is_valid(name) {
        return Err(LineError::ClientName);
    }

    let action = match kind {
        IncomingEventKind::Arrived => ClientAction::Arrived,
        IncomingEventKind::TookPlace => ClientAction::TookPlace(parse_table(tokens[3], config)?),
        IncomingEventKind::Waiting => ClientAction::Waiting,
        IncomingEventKind::Left => ClientAction::Left,
    };

    Ok(IncomingEvent::new(time, name, action))
}

fn parse_table(token: &str, config: &ClubConfig) -> Result<TableId, LineError> {
    let table = token.parse::<u32>().map(TableId::new).map_err(|_| LineError::TableNumber)?;
    if !config.has_table(table) {
        return Err(LineError::TableNumber);
    }
    Ok(table)
}
