//! Road-subsystem error type.

use thiserror::Error;

use rn_core::RoadKey;
use rn_graph::GraphError;

#[derive(Debug, Error)]
pub enum RoadError {
    #[error("{0} was not reconstructed")]
    UnknownRoad(RoadKey),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RoadResult<T> = Result<T, RoadError>;
