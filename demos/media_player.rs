//! Media Player
//!
//! This example walks a media player through start, pause and resume,
//! then steps back and forth through its history.
//!
//! Key concepts:
//! - Declaring a transition table with `machine_config!`
//! - Event-driven transitions with `trigger`
//! - Linear undo/redo, and how a new transition drops the redo branch
//!
//! Run with: RUST_LOG=debug cargo run --example media_player

use retrace::{machine_config, MachineError, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Media Player Example ===\n");

    let mut player = StateMachine::new(machine_config! {
        initial: "idle",
        "idle" => { "start" => "running" },
        "running" => { "stop" => "idle", "pause" => "paused" },
        "paused" => { "resume" => "running" },
    })?;

    println!("Initial state: {}", player.get_state());

    player.trigger("start")?;
    player.trigger("pause")?;
    println!("After start, pause: {}", player.get_state());

    while player.undo() {
        println!("  undo -> {}", player.get_state());
    }
    println!("  undo -> nothing left to undo");

    player.redo();
    player.redo();
    println!("After two redos: {}", player.get_state());

    player.trigger("resume")?;
    println!("After resume: {}", player.get_state());
    println!("Redo available: {}", player.redo());

    if let Err(err) = player.trigger("start") {
        println!("\nRejected: {err}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
