//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and the `machine_config!` macro
//! for declaring transition tables with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
