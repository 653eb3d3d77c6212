//! Errors returned by state machine operations.

use thiserror::Error;

/// Usage errors raised by [`StateMachine`](super::StateMachine).
///
/// Running out of undo or redo history is not an error; those operations
/// report it through their `bool` result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Such state doesn't exist: {state}")]
    UnknownState { state: String },

    #[error("Event {event} can't be performed from state '{state}'")]
    InvalidEvent { event: String, state: String },
}
