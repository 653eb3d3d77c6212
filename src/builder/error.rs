//! Build errors for the state machine builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
