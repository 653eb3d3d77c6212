//! Phase Change
//!
//! This example loads a string-keyed machine from JSON and walks it forward
//! and backward.
//!
//! Key concepts:
//! - JSON configuration with declaration-ordered states
//! - Event-driven transitions with `trigger`
//! - Undo/redo over visited states
//! - Usage errors vs. empty-history `false` results
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example phase_change

use rewind::StateMachine;

const MATTER: &str = r#"{
    "initial": "solid",
    "states": {
        "solid":  { "transitions": { "melt": "liquid" } },
        "liquid": { "transitions": { "freeze": "solid", "evaporate": "gas" } },
        "gas":    { "transitions": { "condense": "liquid" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "rewind=info".to_string()))
        .init();

    println!("=== Phase Change Example ===\n");

    let mut machine: StateMachine = StateMachine::from_json(MATTER)?;
    println!("States: {:?}", machine.states());
    println!("States that can melt: {:?}", machine.states_for("melt"));
    println!("Initial state: {}", machine.current_state());

    for event in ["melt", "evaporate"] {
        let state = machine.trigger(event)?;
        println!("  {event} -> {state}");
    }

    match machine.trigger("melt") {
        Ok(state) => println!("  melt -> {state}"),
        Err(e) => println!("  rejected: {e}"),
    }

    println!("\nUndoing:");
    while machine.undo() {
        println!("  back to {}", machine.current_state());
    }
    println!("  nothing left to undo at {}", machine.current_state());

    println!("\nRedoing once:");
    if machine.redo() {
        println!("  forward to {}", machine.current_state());
    }

    println!("\nPath: {:?}", machine.history().path());
    println!("Redo path: {:?}", machine.history().redo_path());

    println!("\n=== Example Complete ===");
    Ok(())
}
