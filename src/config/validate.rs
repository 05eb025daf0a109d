//! Table integrity checks using Validation.

use super::error::ConfigViolation;
use super::MachineConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a configuration.
pub type ValidationResult = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Validate a configuration, accumulating ALL violations.
/// Returns Validation::Success(()) if the table is well formed.
pub(crate) fn validate(config: &MachineConfig) -> ValidationResult {
    let mut checks: Vec<ValidationResult> = vec![check_has_states(config), check_initial(config)];

    checks.extend(config.states.edges().map(|(state, event, target)| {
        if config.states.contains(target) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownTarget {
                state: state.to_string(),
                event: event.to_string(),
                target: target.to_string(),
            })
        }
    }));

    Validation::all_vec(checks).map(|_| ())
}

fn check_has_states(config: &MachineConfig) -> ValidationResult {
    if config.states.is_empty() {
        Validation::fail(ConfigViolation::NoStates)
    } else {
        Validation::success(())
    }
}

fn check_initial(config: &MachineConfig) -> ValidationResult {
    if config.initial.is_empty() {
        Validation::fail(ConfigViolation::MissingInitialState)
    } else if !config.states.contains(&config.initial) {
        Validation::fail(ConfigViolation::UnknownInitialState {
            initial: config.initial.clone(),
        })
    } else {
        Validation::success(())
    }
}
