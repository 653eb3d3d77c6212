//! Machine configuration: the initial state plus the transition table.
//!
//! Configurations are plain serde values. The state table is an
//! [`IndexMap`] so declaration order is kept, both when built in code and
//! when parsed from JSON:
//!
//! ```json
//! {
//!   "initial": "solid",
//!   "states": {
//!     "solid":  { "transitions": { "melt": "liquid" } },
//!     "liquid": { "transitions": { "freeze": "solid", "evaporate": "gas" } },
//!     "gas":    { "transitions": { "condense": "liquid" } }
//!   }
//! }
//! ```
//!
//! Validation accumulates every violation instead of stopping at the first
//! one, so a broken table is reported in a single pass.

use crate::core::{Event, State};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDescriptor<S: State, E: Event> {
    /// Event -> target state
    #[serde(default)]
    pub transitions: IndexMap<E, S>,
}

impl<S: State, E: Event> Default for StateDescriptor<S, E> {
    fn default() -> Self {
        Self {
            transitions: IndexMap::new(),
        }
    }
}

/// Initial state and state table of a machine.
///
/// # Example
///
/// ```rust
/// use rewind::config::MachineConfig;
///
/// let config: MachineConfig = MachineConfig::new("locked".to_string())
///     .with_transition("locked".to_string(), "coin".to_string(), "unlocked".to_string())
///     .with_transition("unlocked".to_string(), "push".to_string(), "locked".to_string());
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.target("locked", "coin").map(String::as_str), Some("unlocked"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MachineConfig<S: State = String, E: Event = String> {
    /// State the machine starts in and resets to
    pub initial: S,

    /// Configured states, in declaration order
    #[serde(default)]
    pub states: IndexMap<S, StateDescriptor<S, E>>,
}

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Start a configuration with no states declared yet.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            states: IndexMap::new(),
        }
    }

    /// Parse a configuration from JSON. The result is not validated yet.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Declare `state`, keeping its transitions if it already exists.
    pub fn with_state(mut self, state: S) -> Self {
        self.states.entry(state).or_default();
        self
    }

    /// Add the rule `from --event--> to`, declaring `from` if needed.
    ///
    /// `to` is not declared; a target that never gets its own entry is
    /// reported by [`validate`](Self::validate).
    pub fn with_transition(mut self, from: S, event: E, to: S) -> Self {
        self.states
            .entry(from)
            .or_default()
            .transitions
            .insert(event, to);
        self
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn contains_state<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.states.contains_key(state)
    }

    /// Target of the rule for `event` out of `from`, if any.
    pub fn target<Q, P>(&self, from: &Q, event: &P) -> Option<&S>
    where
        S: Borrow<Q>,
        E: Borrow<P>,
        Q: Hash + Eq + ?Sized,
        P: Hash + Eq + ?Sized,
    {
        self.states.get(from)?.transitions.get(event)
    }

    /// Check that the initial state and every transition target are
    /// configured states, collecting all violations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks: Vec<Check> = Vec::new();

        checks.push(if self.states.contains_key(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownInitial {
                initial: self.initial.name().to_string(),
            })
        });

        for (from, descriptor) in &self.states {
            for (event, to) in &descriptor.transitions {
                checks.push(if self.states.contains_key(to) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigViolation::UnknownTarget {
                        from: from.name().to_string(),
                        event: event.name().to_string(),
                        to: to.name().to_string(),
                    })
                });
            }
        }

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATTER: &str = r#"{
        "initial": "solid",
        "states": {
            "solid": { "transitions": { "melt": "liquid" } },
            "liquid": { "transitions": { "freeze": "solid", "evaporate": "gas" } },
            "gas": { "transitions": { "condense": "liquid" } }
        }
    }"#;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn parses_json_in_declaration_order() {
        let config: MachineConfig = MachineConfig::from_json(MATTER).unwrap();

        assert_eq!(config.initial(), "solid");
        let names: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["solid", "liquid", "gas"]);
        assert_eq!(
            config.target("liquid", "evaporate").map(String::as_str),
            Some("gas")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_transitions_default_to_empty() {
        let config: MachineConfig =
            MachineConfig::from_json(r#"{ "initial": "idle", "states": { "idle": {} } }"#)
                .unwrap();

        assert!(config.states["idle"].transitions.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = MachineConfig::<String, String>::from_json(r#"{ "states": {} }"#);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_initial_is_reported() {
        let config: MachineConfig = MachineConfig::new(s("nowhere")).with_state(s("idle"));

        let err = config.validate().unwrap_err();
        assert_eq!(
            err.violations(),
            &[ConfigViolation::UnknownInitial {
                initial: s("nowhere")
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config: MachineConfig = MachineConfig::new(s("missing"))
            .with_transition(s("a"), s("go"), s("b"))
            .with_transition(s("a"), s("jump"), s("c"));

        let err = config.validate().unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 3);
        assert!(violations
            .iter()
            .any(|v| matches!(v, ConfigViolation::UnknownInitial { .. })));
        assert!(violations.contains(&ConfigViolation::UnknownTarget {
            from: s("a"),
            event: s("go"),
            to: s("b"),
        }));
        assert!(violations.contains(&ConfigViolation::UnknownTarget {
            from: s("a"),
            event: s("jump"),
            to: s("c"),
        }));
    }

    #[test]
    fn invalid_error_lists_violations_in_message() {
        let config: MachineConfig =
            MachineConfig::new(s("a")).with_transition(s("a"), s("go"), s("b"));

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("'a' --go--> 'b'"));
    }

    #[test]
    fn with_state_keeps_existing_transitions() {
        let config: MachineConfig = MachineConfig::new(s("a"))
            .with_transition(s("a"), s("go"), s("a"))
            .with_state(s("a"));

        assert_eq!(config.states.len(), 1);
        assert_eq!(config.target("a", "go").map(String::as_str), Some("a"));
    }

    #[test]
    fn contains_state_checks_keys() {
        let config: MachineConfig = MachineConfig::from_json(MATTER).unwrap();

        assert!(config.contains_state("gas"));
        assert!(!config.contains_state("plasma"));
    }

    #[test]
    fn config_serializes_back_to_same_shape() {
        let config: MachineConfig = MachineConfig::from_json(MATTER).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let reparsed: MachineConfig = MachineConfig::from_json(&json).unwrap();

        assert_eq!(config, reparsed);
    }
}
