//! State machine over a string-keyed transition table.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{TransitionTable, UndoHistory};
use crate::machine::error::MachineError;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Finite state machine with linear undo/redo.
///
/// The machine owns an immutable transition table, the name of its initial
/// state, the current state and an [`UndoHistory`].
///
/// # Contract
///
/// - [`change_state`](Self::change_state) and [`trigger`](Self::trigger)
///   return an error on misuse and leave the machine untouched.
/// - [`undo`](Self::undo) and [`redo`](Self::redo) never fail; they return
///   `false` when there is nothing to undo or redo.
/// - Every direct transition discards the redo branch.
/// - [`reset`](Self::reset) jumps to the initial state without recording
///   anything in the history.
///
/// # Example
///
/// ```rust
/// use retrace::machine_config;
/// use retrace::StateMachine;
///
/// let config = machine_config! {
///     initial: "idle",
///     "idle" => { "start" => "running" },
///     "running" => { "stop" => "idle" },
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.get_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.get_state(), "idle");
/// assert!(!machine.undo());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    states: Arc<TransitionTable>,
    initial: String,
    current: String,
    history: UndoHistory,
}

impl StateMachine {
    /// Create a machine in its initial state.
    ///
    /// Passing `None` fails with a configuration error, as does a
    /// configuration whose initial state or transition targets are not in
    /// the table. All integrity problems are reported together.
    pub fn new(config: impl Into<Option<MachineConfig>>) -> Result<Self, MachineError> {
        let Some(config) = config.into() else {
            warn!("State machine rejected: no configuration supplied");
            return Err(ConfigError::Missing.into());
        };

        if let Err(err) = config.check() {
            warn!(error = %err, "State machine rejected: invalid configuration");
            return Err(err.into());
        }

        let MachineConfig { states, initial } = config;
        debug!(initial = %initial, states = states.len(), "State machine created");

        Ok(Self {
            states: Arc::new(states),
            current: initial.clone(),
            initial,
            history: UndoHistory::new(),
        })
    }

    /// Decode a JSON configuration and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// Get the active state.
    pub fn get_state(&self) -> &str {
        &self.current
    }

    /// Get the state `reset` returns to.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Get the transition table.
    pub fn states(&self) -> &TransitionTable {
        &self.states
    }

    /// Go directly to `state`.
    ///
    /// Records the current state in the history and discards the redo
    /// branch. Fails with [`MachineError::StateNotFound`] if `state` is not
    /// in the table.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.states.contains(state) {
            return Err(MachineError::StateNotFound {
                state: state.to_string(),
            });
        }

        let previous = std::mem::replace(&mut self.current, state.to_string());
        debug!(from = %previous, to = %self.current, "State changed");
        self.history.record(previous);
        Ok(())
    }

    /// Change state along the current state's transition for `event`.
    ///
    /// Fails with [`MachineError::EventNotAllowed`] if the current state has
    /// no transition for `event`.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let Some(target) = self
            .states
            .resolve(&self.current, event)
            .map(str::to_owned)
        else {
            return Err(MachineError::EventNotAllowed {
                event: event.to_string(),
                state: self.current.clone(),
            });
        };

        debug!(event = %event, from = %self.current, to = %target, "Event triggered");
        self.change_state(&target)
    }

    /// Jump back to the initial state.
    ///
    /// Not a recorded transition: history and redo branch stay as they are.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.initial, "State reset");
        self.current.clone_from(&self.initial);
    }

    /// List state names.
    ///
    /// With no event, every state in the table. With an event, only the
    /// states from which that event is a legal trigger.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.states.state_names(),
            Some(event) => self.states.states_handling(event),
        }
    }

    /// Events that can be triggered from the current state.
    pub fn events(&self) -> Vec<&str> {
        self.states
            .get(&self.current)
            .map(|def| def.events().collect())
            .unwrap_or_default()
    }

    /// Check whether `event` can be triggered from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.states.resolve(&self.current, event).is_some()
    }

    /// Go back to the previous state.
    ///
    /// Returns `false` and does nothing if there is no history.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back(self.current.as_str()) else {
            trace!(state = %self.current, "Nothing to undo");
            return false;
        };

        debug!(from = %self.current, to = %previous, "Undo");
        self.current = previous;
        true
    }

    /// Go forward to the state most recently undone from.
    ///
    /// Returns `false` and does nothing if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward(self.current.as_str()) else {
            trace!(state = %self.current, "Nothing to redo");
            return false;
        };

        debug!(from = %self.current, to = %next, "Redo");
        self.current = next;
        true
    }

    /// Forget the undo and redo stacks. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(
            past = self.history.past().len(),
            future = self.history.future().len(),
            "History cleared"
        );
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Previously visited states, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.past()
    }

    /// States available for redo, the next redo target last.
    pub fn future(&self) -> &[String] {
        self.history.future()
    }
}
