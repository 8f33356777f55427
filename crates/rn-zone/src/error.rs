//! Zone-subsystem error type.

use thiserror::Error;

use rn_core::SegmentId;
use rn_graph::GraphError;

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("a boundary needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("{points} points but {widths} widths")]
    WidthCountMismatch { points: usize, widths: usize },

    #[error("points {index} and {} coincide", .index + 1)]
    DegenerateSegment { index: usize },

    #[error("{a} and {b} are not joined by a connector")]
    NotAdjacent { a: SegmentId, b: SegmentId },

    #[error("no connector path from {origin} to {target}, stuck at {at}")]
    ChainBroken { origin: SegmentId, target: SegmentId, at: SegmentId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
