//! Custom error types for tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. No component terminates the process on
//! error; everything propagates a `TallyError` up to the binary's top-level
//! handler, which decides the exit code.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A record or category file could not be parsed
    #[error("Couldn't parse {file}: {message}")]
    Parse { file: String, message: String },

    /// A `--date` value with the wrong shape or an invalid calendar value
    #[error("Invalid date filter '{0}': expected YYYY or YYYY-MM")]
    DateFilter(String),

    /// A spending counterparty missing from the category map
    #[error("Couldn't find category for '{0}'")]
    UnknownCounterparty(String),
}

impl TallyError {
    /// Create a parse error naming the offending file
    pub fn parse(file: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file() {
        let err = TallyError::parse("december-20.yml", "bad indentation");
        assert_eq!(
            err.to_string(),
            "Couldn't parse december-20.yml: bad indentation"
        );
    }

    #[test]
    fn test_date_filter_error_carries_input() {
        let err = TallyError::DateFilter("20-12".into());
        assert!(err.to_string().contains("'20-12'"));
    }

    #[test]
    fn test_unknown_counterparty() {
        let err = TallyError::UnknownCounterparty("cat food shop".into());
        assert_eq!(err.to_string(), "Couldn't find category for 'cat food shop'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TallyError = io_err.into();
        assert!(matches!(err, TallyError::Io(_)));
    }
}
