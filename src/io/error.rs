//! Error types for grid construction, configuration, and coordinate parsing

use std::fmt;

use crate::spatial::coords::GridCoord;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Attachment factory could not produce an attachment for a cell
    Attachment {
        /// Cell the attachment was requested for
        coordinate: GridCoord,
        /// Description of the failure
        reason: String,
    },

    /// Cell key could not be parsed back into a coordinate
    InvalidHash {
        /// The malformed key
        key: String,
        /// Description of what's wrong with the key
        reason: String,
    },

    /// Coordinate lies outside the grid
    ///
    /// Grid queries report absence with `Option`; this variant is for
    /// callers that require the cell to exist.
    UnknownCell {
        /// The requested coordinate
        coordinate: GridCoord,
    },

    /// Configuration source could not be read or deserialized
    Configuration {
        /// Underlying configuration error
        source: config::ConfigError,
    },

    /// Writing command output failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Attachment { coordinate, reason } => {
                write!(f, "Failed to attach cell {coordinate}: {reason}")
            }
            Self::InvalidHash { key, reason } => {
                write!(f, "Invalid cell key '{key}': {reason}")
            }
            Self::UnknownCell { coordinate } => {
                write!(f, "No cell at {coordinate}")
            }
            Self::Configuration { source } => {
                write!(f, "Failed to load configuration: {source}")
            }
            Self::Output { source } => {
                write!(f, "Failed to write output: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration { source } => Some(source),
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for GridError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration { source: err }
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an attachment failure error
pub fn attachment_error(coordinate: GridCoord, reason: &impl ToString) -> GridError {
    GridError::Attachment {
        coordinate,
        reason: reason.to_string(),
    }
}
