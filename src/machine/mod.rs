//! The string-keyed state machine with undo/redo.

pub mod error;
mod state_machine;

pub use error::MachineError;
pub use state_machine::StateMachine;
