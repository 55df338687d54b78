//! Input loading errors

use thiserror::Error;

/// Why a line of the input file was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LineError {
    /// First line is not a positive integer
    #[error("invalid format of tables count")]
    TablesCount,

    /// Second line is not `HH:MM HH:MM` with closing not before opening
    #[error("invalid format of opening hours")]
    OpeningHours,

    /// Third line is not a non-negative integer
    #[error("invalid format of price per hour")]
    PricePerHour,

    /// Event line has the wrong shape, time or code
    #[error("invalid format of event")]
    Event,

    /// Event time is earlier than the previous event
    #[error("invalid format of event sequence")]
    EventSequence,

    /// Client name uses characters outside `[a-z0-9_-]` or is empty
    #[error("invalid format of client name")]
    ClientName,

    /// Table number is not an integer in `1..=tables_count`
    #[error("invalid format of table number")]
    TableNumber,

    /// A configuration line is missing
    #[error("missing configuration line")]
    MissingLine,
}

/// Errors raised while loading a club day from disk or text
#[derive(Debug, Error)]
pub enum InputError {
    /// A line failed validation; it is reported to the user verbatim
    #[error("Invalid line {line_number} ({reason}): {line:?}")]
    InvalidLine {
        /// 1-based line number
        line_number: usize,
        /// The offending line, without its line terminator
        line: String,
        /// What was wrong with it
        reason: LineError,
    },

    /// The input file could not be read
    #[error("Failed to read input file {path}: {source}")]
    Io {
        /// Path of the input file
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Create an invalid line error
    pub fn invalid_line(line_number: usize, line: impl Into<String>, reason: LineError) -> Self {
        Self::InvalidLine { line_number, line: line.into(), reason }
    }

    /// The offending line, if this is a validation error
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            InputError::InvalidLine { line, .. } => Some(line),
            InputError::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_line_message() {
        let error = InputError::invalid_line(5, "09:00 7 bob", LineError::Event);
        assert_eq!(error.offending_line(), Some("09:00 7 bob"));
        assert_eq!(
            error.to_string(),
            "Invalid line 5 (invalid format of event): \"09:00 7 bob\""
        );
    }

    #[test]
    fn test_io_error_has_no_offending_line() {
        let error = InputError::Io {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.offending_line(), None);
        assert!(error.to_string().contains("missing.txt"));
    }
}
