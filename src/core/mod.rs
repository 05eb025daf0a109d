//! Core data model of the state machine.
//!
//! This module contains the pure building blocks the machine is made of:
//! - The transition table describing states and their event edges
//! - Undo/redo bookkeeping
//!
//! Neither type knows about the other; `StateMachine` ties them together.

mod history;
mod table;

pub use history::UndoHistory;
pub use table::{StateDef, TransitionTable};
