//! Builder for constructing state machines.

use crate::config::MachineConfig;
use crate::core::{StateDef, TransitionTable};
use crate::machine::{MachineError, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use retrace::builder::StateMachineBuilder;
///
/// let machine = StateMachineBuilder::new()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .state("published")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.get_state(), "draft");
/// assert_eq!(machine.get_states(Some("approve")), vec!["review"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<String>,
    states: TransitionTable,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring a state twice is harmless.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name);
        self
    }

    /// Declare a state with its full definition, replacing any earlier one.
    pub fn state_def(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.states.insert(name, def);
        self
    }

    /// Add a transition `from --event--> to`, declaring `from` if needed.
    ///
    /// The target still has to be declared, either with [`state`](Self::state)
    /// or as the source of another transition.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Produce the configuration without validating it.
    pub fn into_config(self) -> MachineConfig {
        MachineConfig::new(self.states, self.initial.unwrap_or_default())
    }

    /// Build the state machine.
    /// Returns an error if the resulting configuration is invalid.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        StateMachine::new(self.into_config())
    }
}
