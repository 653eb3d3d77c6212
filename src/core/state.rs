//! Identifier traits for machine states and events.
//!
//! States and events are plain values used as keys in the transition table,
//! so both traits require `Eq + Hash` in addition to the usual clone/debug/
//! serde bounds.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the done/undone history stacks
/// - `Eq` + `Hash`: States key the transition table
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States are read from JSON configurations
///
/// `String` implements this trait, which gives fully dynamic machines.
///
/// # Example
///
/// ```rust
/// use rewind::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("Closed".to_string().name(), "Closed");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for events that drive transitions.
///
/// Same bounds as [`State`]; an event only ever appears as a key in a
/// state's transition table.
pub trait Event: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Stopped,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Stopped => "Stopped",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Stopped.name(), "Stopped");
    }

    #[test]
    fn string_state_name_is_itself() {
        let state = String::from("liquid");
        assert_eq!(State::name(&state), "liquid");
    }

    #[test]
    fn string_event_name_is_itself() {
        let event = String::from("melt");
        assert_eq!(Event::name(&event), "melt");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Running;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_hashable() {
        let mut set = std::collections::HashSet::new();
        set.insert(TestState::Idle);
        set.insert(TestState::Idle);
        set.insert(TestState::Stopped);
        assert_eq!(set.len(), 2);
    }
}
