//! Error types and handling
//!
//! Top-level error for running a club day. Business rejections are not errors
//! at this level: they are written into the report and the day goes on.

use thiserror::Error;

use crate::input::InputError;
use crate::types::ConfigValidationError;

/// Errors that can occur while loading or running a club day
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Input file could not be loaded or failed validation
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),
}

impl SimulationError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::Input(InputError::InvalidLine { .. }) => "Input Validation",
            SimulationError::Input(InputError::Io { .. }) => "Input",
            SimulationError::Configuration(_) => "Configuration",
        }
    }

    /// The input line that caused this error, if any
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            SimulationError::Input(error) => error.offending_line(),
            _ => None,
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineError;

    #[test]
    fn test_error_from_input_error() {
        let error: SimulationError =
            InputError::invalid_line(4, "09:00 9 bob", LineError::Event).into();
        assert!(matches!(error, SimulationError::Input(_)));
        assert_eq!(error.category(), "Input Validation");
        assert_eq!(error.offending_line(), Some("09:00 9 bob"));
        assert_eq!(error.to_string(), "Invalid line 4 (invalid format of event): \"09:00 9 bob\"");
    }

    #[test]
    fn test_error_from_config_error() {
        let error: SimulationError = ConfigValidationError::InvalidTablesCount(0).into();
        assert_eq!(error.category(), "Configuration");
        assert!(error.to_string().starts_with("Configuration validation failed"));
        assert_eq!(error.offending_line(), None);
    }

    #[test]
    fn test_error_from_unreadable_input() {
        let error: SimulationError = InputError::Io {
            path: "missing.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "File not found"),
        }
        .into();
        assert_eq!(error.category(), "Input");
        assert_eq!(error.offending_line(), None);
    }
}
