//! Machine configuration: the declarative input a machine is built from.
//!
//! A configuration pairs a [`TransitionTable`] with the name of the initial
//! state. It can be assembled in code, with the
//! [`machine_config!`](crate::machine_config) macro, or decoded from JSON:
//!
//! ```json
//! {
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   },
//!   "initial": "idle"
//! }
//! ```
//!
//! Validation uses Stillwater's `Validation` so that every problem in a
//! table is reported at once instead of one per attempt.

pub mod error;
mod validate;

pub use error::{ConfigError, ConfigViolation};
pub use validate::ValidationResult;

use crate::core::TransitionTable;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Declarative machine definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub states: TransitionTable,
    pub initial: String,
}

impl MachineConfig {
    pub fn new(states: TransitionTable, initial: impl Into<String>) -> Self {
        Self {
            states,
            initial: initial.into(),
        }
    }

    /// Decode a configuration from JSON.
    ///
    /// A JSON `null` means no configuration was supplied and yields
    /// [`ConfigError::Missing`]. The result is not validated; that happens
    /// when a machine is constructed from it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::config::{ConfigError, MachineConfig};
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{"states": {"on": {"transitions": {"flip": "on"}}}, "initial": "on"}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.initial, "on");
    ///
    /// assert_eq!(MachineConfig::from_json("null"), Err(ConfigError::Missing));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Option<Self> = serde_json::from_str(json)?;
        config.ok_or(ConfigError::Missing)
    }

    /// Check table integrity, accumulating ALL violations.
    pub fn validate(&self) -> ValidationResult {
        validate::validate(self)
    }

    /// Validate and convert the outcome into a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDef;

    #[test]
    fn from_json_decodes_states_and_initial() {
        let config = MachineConfig::from_json(
            r#"{
                "states": {
                    "idle": {"transitions": {"start": "running"}},
                    "running": {"transitions": {"stop": "idle"}}
                },
                "initial": "idle"
            }"#,
        )
        .unwrap();

        assert_eq!(config.initial, "idle");
        assert_eq!(config.states.resolve("idle", "start"), Some("running"));
        assert!(config.check().is_ok());
    }

    #[test]
    fn from_json_null_is_missing_configuration() {
        assert_eq!(MachineConfig::from_json("null"), Err(ConfigError::Missing));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let result = MachineConfig::from_json(r#"{"states": 3}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn check_collects_violations_into_error() {
        let config = MachineConfig::new(
            TransitionTable::new().with_state("a", StateDef::new().on("go", "b")),
            "z",
        );

        let err = config.check().unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert!(err.to_string().contains("'z'"));
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn config_serializes_to_construction_shape() {
        let config = MachineConfig::new(
            TransitionTable::new().with_state("a", StateDef::new().on("go", "a")),
            "a",
        );
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"states": {"a": {"transitions": {"go": "a"}}}, "initial": "a"})
        );
    }
}
