//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a machine configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not a configured state")]
    UnknownInitial { initial: String },

    #[error("Transition '{from}' --{event}--> '{to}' targets an unknown state")]
    UnknownTarget {
        from: String,
        event: String,
        to: String,
    },
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a configuration
    #[error("Failed to parse machine configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but violates one or more invariants
    #[error("Invalid machine configuration: {}", list(.0))]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// All violations carried by an `Invalid` error, empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::Parse(_) => &[],
        }
    }
}

fn list(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
