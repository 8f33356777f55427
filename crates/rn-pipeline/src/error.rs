use rn_core::CoreError;
use rn_graph::GraphError;
use rn_road::RoadError;
use rn_signal::SignalError;
use rn_zone::ZoneError;
use thiserror::Error;

/// Any fatal error of a pipeline run.  The run produced no output.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("snapshot source: {0}")]
    Source(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Road(#[from] RoadError),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Zone(#[from] ZoneError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
