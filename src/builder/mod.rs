//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and declaration macros for
//! creating state machines with minimal boilerplate while keeping states
//! and events type-checked.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
