//! Event-driven state machine with linear undo/redo.
//!
//! The machine owns a validated [`MachineConfig`] and a [`History`]. Every
//! forward move (`change_state` or `trigger`) is recorded on the history and
//! discards the redo branch; `undo`/`redo` walk the history without
//! consulting the transition table.
//!
//! All mutating operations take `&mut self`, so a machine has exactly one
//! writer at a time. Share one across threads behind a lock.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{Event, History, State};
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

pub mod error;

pub use error::MachineError;

/// Finite-state machine over a fixed state table.
///
/// # Example
///
/// ```rust
/// use rewind::StateMachine;
///
/// let mut machine: StateMachine = StateMachine::from_json(r#"{
///     "initial": "solid",
///     "states": {
///         "solid":  { "transitions": { "melt": "liquid" } },
///         "liquid": { "transitions": { "freeze": "solid", "evaporate": "gas" } },
///         "gas":    { "transitions": { "condense": "liquid" } }
///     }
/// }"#).unwrap();
///
/// machine.trigger("melt").unwrap();
/// machine.trigger("evaporate").unwrap();
/// assert_eq!(machine.current_state(), "gas");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "liquid");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "gas");
///
/// assert!(machine.trigger("melt").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State = String, E: Event = String> {
    config: MachineConfig<S, E>,
    history: History<S>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is validated first; an unknown initial state or a
    /// transition into an unknown state fails construction.
    pub fn new(config: MachineConfig<S, E>) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            initial = config.initial.name(),
            states = config.states.len(),
            "state machine created"
        );
        let history = History::new(config.initial.clone());
        Ok(Self { config, history })
    }

    /// Parse, validate and build a machine from a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        self.history.current()
    }

    pub fn initial_state(&self) -> &S {
        self.config.initial()
    }

    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    pub fn history(&self) -> &History<S> {
        &self.history
    }

    /// Jump straight to `state`, ignoring the transition table.
    ///
    /// Fails with [`MachineError::UnknownState`] and leaves the machine
    /// untouched when `state` is not configured. On success the redo
    /// history is discarded.
    pub fn change_state<Q>(&mut self, state: &Q) -> Result<(), MachineError>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some((target, _)) = self.config.states.get_key_value(state) else {
            debug!(
                current = self.current_state().name(),
                requested = ?state,
                "rejected change to unknown state"
            );
            return Err(MachineError::UnknownState {
                state: format!("{state:?}"),
            });
        };

        let target = target.clone();
        debug!(
            from = self.current_state().name(),
            to = target.name(),
            "state changed"
        );
        self.history.record(target);
        Ok(())
    }

    /// Fire `event` from the current state and return the new state.
    ///
    /// Fails with [`MachineError::InvalidEvent`] and leaves the machine
    /// untouched when the current state has no rule for `event`.
    pub fn trigger<P>(&mut self, event: &P) -> Result<&S, MachineError>
    where
        E: Borrow<P>,
        P: Hash + Eq + Debug + ?Sized,
    {
        let current = self.history.current();
        let Some(target) = self.config.target(current, event).cloned() else {
            debug!(
                current = current.name(),
                event = ?event,
                "rejected event without transition"
            );
            return Err(MachineError::InvalidEvent {
                event: format!("{event:?}"),
                state: current.name().to_string(),
            });
        };

        debug!(
            from = current.name(),
            to = target.name(),
            event = ?event,
            "transition triggered"
        );
        self.history.record(target);
        Ok(self.history.current())
    }

    /// Whether `event` has a rule from the current state.
    pub fn can_trigger<P>(&self, event: &P) -> bool
    where
        E: Borrow<P>,
        P: Hash + Eq + ?Sized,
    {
        self.config.target(self.current_state(), event).is_some()
    }

    /// Events with a rule from the current state, in declaration order.
    pub fn events(&self) -> Vec<&E> {
        self.config
            .states
            .get(self.current_state())
            .map(|descriptor| descriptor.transitions.keys().collect())
            .unwrap_or_default()
    }

    /// Every configured state, in declaration order.
    pub fn states(&self) -> Vec<&S> {
        self.config.states.keys().collect()
    }

    /// States that have a rule for `event`, in declaration order.
    pub fn states_for<P>(&self, event: &P) -> Vec<&S>
    where
        E: Borrow<P>,
        P: Hash + Eq + ?Sized,
    {
        self.config
            .states
            .iter()
            .filter(|(_, descriptor)| descriptor.transitions.contains_key(event))
            .map(|(state, _)| state)
            .collect()
    }

    /// Return to the initial state, dropping visited-state history.
    ///
    /// Redo history survives: states undone before the reset can still be
    /// redone afterwards. Use [`clear_history`](Self::clear_history) to
    /// drop both.
    pub fn reset(&mut self) {
        debug!(
            from = self.current_state().name(),
            to = self.initial_state().name(),
            "state machine reset"
        );
        self.history.rewind();
    }

    /// Step back to the previous state. Returns `false` at the initial entry.
    pub fn undo(&mut self) -> bool {
        let from = self.history.current().clone();
        if !self.history.undo() {
            trace!(current = from.name(), "nothing to undo");
            return false;
        }
        debug!(
            from = from.name(),
            to = self.current_state().name(),
            depth = self.history.depth(),
            "transition undone"
        );
        true
    }

    /// Re-apply the last undone state. Returns `false` when there is none.
    pub fn redo(&mut self) -> bool {
        let from = self.history.current().clone();
        if !self.history.redo() {
            trace!(current = from.name(), "nothing to redo");
            return false;
        }
        debug!(
            from = from.name(),
            to = self.current_state().name(),
            depth = self.history.depth(),
            "transition redone"
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all history, undone states included, and return to the initial state.
    pub fn clear_history(&mut self) {
        debug!(depth = self.history.depth(), "history cleared");
        self.history.clear();
    }
}
