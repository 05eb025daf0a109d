//! Retrace: a minimal finite state machine with undo/redo
//!
//! A machine is built from a declarative transition table mapping each
//! state name to the events it accepts and the states those events lead
//! to. It tracks the current state, applies transitions triggered by named
//! events, and keeps a linear undo/redo history of every state change.
//!
//! # Core Concepts
//!
//! - **Transition table**: Immutable `state -> event -> target` map, validated up front
//! - **History**: Two stacks of visited and undone states; any new transition drops the redo branch
//! - **Reset**: Returns to the initial state without touching the history
//!
//! `change_state` and `trigger` report misuse through [`MachineError`];
//! `undo` and `redo` return `false` when there is nothing to do.
//!
//! # Example
//!
//! ```rust
//! use retrace::{machine_config, StateMachine};
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     "idle" => { "start" => "running" },
//!     "running" => { "stop" => "idle", "pause" => "paused" },
//!     "paused" => { "resume" => "running" },
//! };
//!
//! let mut machine = StateMachine::new(config)?;
//! machine.trigger("start")?;
//! machine.trigger("pause")?;
//!
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "running");
//!
//! machine.trigger("stop")?;
//! assert!(!machine.redo());
//! # Ok::<(), retrace::MachineError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use config::{ConfigError, ConfigViolation, MachineConfig};
pub use self::core::{StateDef, TransitionTable, UndoHistory};
pub use machine::{MachineError, StateMachine};
