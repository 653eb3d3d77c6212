//! Core state machine types.
//!
//! This module contains the building blocks the machine is made of:
//! - State and event identifiers via the `State` and `Event` traits
//! - An index-based `Stack`
//! - The two-stack undo/redo `History`

mod history;
mod stack;
mod state;

pub use history::History;
pub use stack::{Stack, StackError};
pub use state::{Event, State};
