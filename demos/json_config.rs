//! JSON Configuration
//!
//! This example loads a machine from JSON and shows how invalid tables
//! are rejected with every problem reported at once.
//!
//! Run with: cargo run --example json_config

use retrace::{MachineConfig, MachineError, StateMachine};
use tracing_subscriber::EnvFilter;

const TURNSTILE: &str = r#"{
    "states": {
        "locked":   { "transitions": { "coin": "unlocked", "push": "locked" } },
        "unlocked": { "transitions": { "push": "locked", "coin": "unlocked" } }
    },
    "initial": "locked"
}"#;

const BROKEN: &str = r#"{
    "states": {
        "locked": { "transitions": { "coin": "open" } }
    },
    "initial": "closed"
}"#;

fn main() -> Result<(), MachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== JSON Configuration Example ===\n");

    let mut turnstile = StateMachine::from_json(TURNSTILE)?;
    turnstile.trigger("coin")?;
    turnstile.trigger("push")?;
    println!("Turnstile path: {:?} -> {}", turnstile.history(), turnstile.get_state());

    match StateMachine::from_json(BROKEN) {
        Ok(_) => println!("Unexpectedly accepted broken table"),
        Err(MachineError::Configuration(err)) => {
            println!("\nBroken table rejected:");
            for violation in err.violations() {
                println!("  - {violation}");
            }
        }
        Err(err) => return Err(err),
    }

    match MachineConfig::from_json("null") {
        Ok(_) => println!("Unexpectedly accepted null"),
        Err(err) => println!("\nNull configuration: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
