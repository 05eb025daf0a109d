//! Transition table: the static graph of states and event-driven edges.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outgoing transitions of a single state.
///
/// Maps an event name to the name of the state that event leads to.
/// A state deserialized without a `transitions` key has no outgoing edges.
///
/// # Example
///
/// ```rust
/// use retrace::core::StateDef;
///
/// let running = StateDef::new()
///     .on("stop", "idle")
///     .on("pause", "paused");
///
/// assert_eq!(running.target("pause"), Some("paused"));
/// assert_eq!(running.target("start"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    #[serde(default)]
    pub transitions: BTreeMap<String, String>,
}

impl StateDef {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition `event -> target`, replacing any previous target
    /// registered for the same event.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Resolve the target of `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether `event` is a legal trigger from this state.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Event names handled by this state, in sorted order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

/// Mapping from state name to its definition.
///
/// Ordered by state name so that every listing the machine produces is
/// deterministic.
///
/// # Example
///
/// ```rust
/// use retrace::core::{StateDef, TransitionTable};
///
/// let table = TransitionTable::new()
///     .with_state("idle", StateDef::new().on("start", "running"))
///     .with_state("running", StateDef::new().on("stop", "idle"));
///
/// assert!(table.contains("idle"));
/// assert_eq!(table.states_handling("stop"), vec!["running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    states: BTreeMap<String, StateDef>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a state definition.
    pub fn with_state(mut self, name: impl Into<String>, def: StateDef) -> Self {
        self.states.insert(name.into(), def);
        self
    }

    /// Insert a state definition in place, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, def: StateDef) -> Option<StateDef> {
        self.states.insert(name.into(), def)
    }

    /// Get the mutable definition of `name`, creating an empty one if absent.
    pub(crate) fn entry(&mut self, name: impl Into<String>) -> &mut StateDef {
        self.states.entry(name.into()).or_default()
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    pub fn get(&self, state: &str) -> Option<&StateDef> {
        self.states.get(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Resolve the transition `(state, event) -> target`.
    pub fn resolve(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|def| def.target(event))
    }

    /// All state names, sorted.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Names of every state from which `event` is a legal trigger.
    ///
    /// Linear in the number of states. Returns an empty list when no state
    /// handles the event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, def)| def.handles(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterate over `(state, definition)` pairs in state-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDef)> {
        self.states.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Iterate over every transition as `(state, event, target)`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.iter().flat_map(|(state, def)| {
            def.transitions
                .iter()
                .map(move |(event, target)| (state, event.as_str(), target.as_str()))
        })
    }
}

impl<K, const N: usize> From<[(K, StateDef); N]> for TransitionTable
where
    K: Into<String>,
{
    fn from(entries: [(K, StateDef); N]) -> Self {
        entries
            .into_iter()
            .fold(Self::new(), |table, (name, def)| table.with_state(name, def))
    }
}
