//! Linear undo/redo bookkeeping.
//!
//! Tracks the states a machine has left behind (`past`) and the states it
//! has undone away from (`future`). Both are stacks, most recent last.

/// Pair of stacks implementing linear undo/redo.
///
/// Any direct transition is a branch point: recording it discards the
/// redo branch. Both stacks grow without bound, keeping a trace of every
/// transition since construction or the last [`clear`](Self::clear).
///
/// # Example
///
/// ```rust
/// use retrace::core::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// history.record("idle");
///
/// // Undo from "running" lands back on "idle"
/// assert_eq!(history.step_back("running").as_deref(), Some("idle"));
/// assert!(history.can_redo());
///
/// // Redo from "idle" returns to "running"
/// assert_eq!(history.step_forward("idle").as_deref(), Some("running"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoHistory {
    past: Vec<String>,
    future: Vec<String>,
}

impl UndoHistory {
    /// Create empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the machine left `previous` through a direct transition.
    ///
    /// Clears the future stack.
    pub fn record(&mut self, previous: impl Into<String>) {
        self.past.push(previous.into());
        self.future.clear();
    }

    /// Undo one step away from `current`.
    ///
    /// Returns the state to move to, or `None` if there is nothing to undo,
    /// in which case nothing changes.
    pub fn step_back(&mut self, current: impl Into<String>) -> Option<String> {
        let previous = self.past.pop()?;
        self.future.push(current.into());
        Some(previous)
    }

    /// Redo one step away from `current`.
    ///
    /// Returns the state to move to, or `None` if there is nothing to redo.
    pub fn step_forward(&mut self, current: impl Into<String>) -> Option<String> {
        let next = self.future.pop()?;
        self.past.push(current.into());
        Some(next)
    }

    /// Forget both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Previously visited states, oldest first.
    pub fn past(&self) -> &[String] {
        &self.past
    }

    /// States available for redo, the next redo target last.
    pub fn future(&self) -> &[String] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.future.is_empty()
    }
}
