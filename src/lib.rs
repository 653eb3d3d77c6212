//! Rewind: a finite-state machine with linear undo/redo
//!
//! A machine is a fixed table of states, each with event-driven transitions
//! to other states. Every move the machine makes is recorded, so callers can
//! step backward and forward through the states it has visited.
//!
//! # Core Concepts
//!
//! - **State / Event**: Identifier types via the `State` and `Event` traits
//!   (`String` works for fully dynamic machines)
//! - **Configuration**: Initial state plus transition table, built in code
//!   or parsed from JSON, validated before use
//! - **History**: Two stacks of visited and undone states
//!
//! # Example
//!
//! ```rust
//! use rewind::{event_enum, state_enum, StateMachineBuilder};
//!
//! state_enum! {
//!     enum Matter {
//!         Solid,
//!         Liquid,
//!         Gas,
//!     }
//! }
//!
//! event_enum! {
//!     enum Heat {
//!         Melt,
//!         Freeze,
//!         Evaporate,
//!         Condense,
//!     }
//! }
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial(Matter::Solid)
//!     .transition(Matter::Solid, Heat::Melt, Matter::Liquid)
//!     .transition(Matter::Liquid, Heat::Freeze, Matter::Solid)
//!     .transition(Matter::Liquid, Heat::Evaporate, Matter::Gas)
//!     .transition(Matter::Gas, Heat::Condense, Matter::Liquid)
//!     .build()
//!     .unwrap();
//!
//! machine.trigger(&Heat::Melt).unwrap();
//! machine.trigger(&Heat::Evaporate).unwrap();
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), &Matter::Liquid);
//!
//! // A new move discards what could have been redone.
//! machine.trigger(&Heat::Freeze).unwrap();
//! assert!(!machine.redo());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::config::{ConfigError, ConfigViolation, MachineConfig, StateDescriptor};
pub use crate::core::{Event, History, Stack, StackError, State};
pub use crate::machine::{MachineError, StateMachine};
