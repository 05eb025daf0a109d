//! Configuration errors and validation findings.

use thiserror::Error;

/// A single problem found while validating a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("transition table has no states")]
    NoStates,

    #[error("initial state not specified")]
    MissingInitialState,

    #[error("initial state '{initial}' is not in the transition table")]
    UnknownInitialState { initial: String },

    #[error("transition '{state}' --{event}--> '{target}' points to an unknown state")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Errors that can occur when supplying a machine configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// No configuration was supplied at all
    #[error("configuration not supplied")]
    Missing,

    /// The configuration could not be decoded
    #[error("configuration could not be parsed: {0}")]
    Parse(String),

    /// The configuration failed validation; carries every violation found
    #[error("configuration is invalid: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// Violations carried by an [`Invalid`](Self::Invalid) error, empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
