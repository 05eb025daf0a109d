//! Errors raised by state machine operations.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when constructing or driving a [`StateMachine`](super::StateMachine).
///
/// Only construction, `change_state` and `trigger` fail with an error.
/// `undo` and `redo` at an empty stack are not errors; they return `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MachineError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("State '{state}' doesn't exist")]
    StateNotFound { state: String },

    #[error("Event '{event}' is not allowed in state '{state}'")]
    EventNotAllowed { event: String, state: String },
}
