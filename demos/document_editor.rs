//! Document Editor
//!
//! This example models a document's editing mode with enum states and
//! shows how `reset` and `clear_history` treat redo history differently.
//!
//! Key concepts:
//! - `state_enum!` / `event_enum!` declarations
//! - Fluent builder with validated configuration
//! - Direct jumps with `change_state`
//! - `reset` keeps redo history, `clear_history` drops it
//!
//! Run with: RUST_LOG=rewind=debug cargo run --example document_editor

use rewind::{event_enum, state_enum, StateMachineBuilder};

state_enum! {
    enum Mode {
        Viewing,
        Editing,
        Reviewing,
        Published,
    }
}

event_enum! {
    enum Action {
        Edit,
        Submit,
        Reject,
        Approve,
        Revise,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "rewind=info".to_string()))
        .init();

    println!("=== Document Editor Example ===\n");

    let mut editor = StateMachineBuilder::new()
        .initial(Mode::Viewing)
        .transition(Mode::Viewing, Action::Edit, Mode::Editing)
        .transition(Mode::Editing, Action::Submit, Mode::Reviewing)
        .transition(Mode::Reviewing, Action::Reject, Mode::Editing)
        .transition(Mode::Reviewing, Action::Approve, Mode::Published)
        .transition(Mode::Published, Action::Revise, Mode::Editing)
        .build()?;

    for action in [Action::Edit, Action::Submit, Action::Approve] {
        let mode = editor.trigger(&action)?;
        println!("{action} -> {mode}");
    }

    println!("\nAvailable from {}: {:?}", editor.current_state(), editor.events());

    editor.undo();
    editor.undo();
    println!("\nAfter two undos: {}", editor.current_state());

    editor.reset();
    println!("After reset: {} (can redo: {})", editor.current_state(), editor.can_redo());
    editor.redo();
    println!("Redo lands on: {}", editor.current_state());

    editor.change_state(&Mode::Published)?;
    editor.undo();
    editor.clear_history();
    println!(
        "After clear_history: {} (can undo: {}, can redo: {})",
        editor.current_state(),
        editor.can_undo(),
        editor.can_redo()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
