//! Signal-subsystem error type.

use thiserror::Error;

use rn_core::JunctionId;
use rn_graph::GraphError;

/// Fatal signal-stage errors.  Skipped signals are diagnostics, not errors.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("signal record parse error: {0}")]
    Parse(String),

    #[error("junction {junction} has {count} controllers, only 1 to 4 phases are supported")]
    UnsupportedPhaseCount { junction: JunctionId, count: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type SignalResult<T> = Result<T, SignalError>;
