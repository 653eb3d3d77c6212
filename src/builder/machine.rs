//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::config::{MachineConfig, StateDescriptor};
use crate::core::{Event, State};
use crate::machine::StateMachine;
use indexmap::IndexMap;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```
/// use rewind::builder::StateMachineBuilder;
/// use rewind::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///         Yellow,
///     }
/// }
///
/// event_enum! {
///     enum Signal {
///         Next,
///     }
/// }
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(Light::Red)
///     .transition(Light::Red, Signal::Next, Light::Green)
///     .transition(Light::Green, Signal::Next, Light::Yellow)
///     .transition(Light::Yellow, Signal::Next, Light::Red)
///     .build()
///     .unwrap();
///
/// machine.trigger(&Signal::Next).unwrap();
/// assert_eq!(machine.current_state(), &Light::Green);
/// ```
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    states: IndexMap<S, StateDescriptor<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state. States named as a transition source are declared
    /// implicitly; pure targets and isolated states need this call.
    pub fn state(mut self, state: S) -> Self {
        self.states.entry(state).or_default();
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        for state in states {
            self.states.entry(state).or_default();
        }
        self
    }

    /// Add the rule `from --event--> to`.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.states
            .entry(from)
            .or_default()
            .transitions
            .insert(event, to);
        self
    }

    /// Assemble the configuration without validating it.
    pub fn config(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or the
    /// configuration does not validate.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        Ok(StateMachine::new(self.config()?)?)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
