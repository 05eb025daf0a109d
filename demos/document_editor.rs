//! Document Editor
//!
//! This example builds a review workflow with the fluent builder and uses
//! graph introspection to show which actions apply where.
//!
//! Key concepts:
//! - `StateMachineBuilder` for assembling tables in code
//! - `get_states` to find the states an event applies to
//! - `reset` as an unrecorded jump back to the initial state
//!
//! Run with: cargo run --example document_editor

use retrace::{MachineError, StateMachineBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Document Editor Example ===\n");

    let mut doc = StateMachineBuilder::new()
        .initial("draft")
        .transition("draft", "submit", "review")
        .transition("review", "approve", "published")
        .transition("review", "reject", "draft")
        .transition("published", "archive", "archived")
        .state("archived")
        .build()?;

    println!("States: {:?}", doc.get_states(None));
    for event in ["submit", "approve", "reject", "archive"] {
        println!("  '{event}' applies in {:?}", doc.get_states(Some(event)));
    }

    doc.trigger("submit")?;
    doc.trigger("approve")?;
    println!("\nCurrent: {} (available: {:?})", doc.get_state(), doc.events());
    println!("History: {:?}", doc.history());

    doc.reset();
    println!("\nAfter reset: {}", doc.get_state());
    println!("History kept: {:?}", doc.history());

    doc.clear_history();
    println!("After clear_history, can undo: {}", doc.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
