//! Error types for building entry loss evaluation

use std::fmt;

/// Main error type for all entry loss operations
#[derive(Debug)]
pub enum EntryLossError {
    /// An input lies outside the domain the model is defined on
    ///
    /// Raised before any computation takes place. Frequency never produces
    /// this error; only elevation and probability are checked.
    Domain {
        /// Name of the offending input
        parameter: &'static str,
        /// Provided value that failed validation
        value: f64,
        /// Human readable description of the accepted range
        valid_range: &'static str,
    },

    /// Writing the result to standard output failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EntryLossError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain {
                parameter,
                value,
                valid_range,
            } => {
                write!(f, "{parameter} outside {valid_range}: got {value}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write result: {source}")
            }
        }
    }
}

impl std::error::Error for EntryLossError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            Self::Domain { .. } => None,
        }
    }
}

/// Convenience type alias for entry loss results
pub type Result<T> = std::result::Result<T, EntryLossError>;

impl From<std::io::Error> for EntryLossError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

impl EntryLossError {
    /// Check whether this error reports an out-of-domain input
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

/// Create a domain error
pub const fn domain_error(
    parameter: &'static str,
    value: f64,
    valid_range: &'static str,
) -> EntryLossError {
    EntryLossError::Domain {
        parameter,
        value,
        valid_range,
    }
}
