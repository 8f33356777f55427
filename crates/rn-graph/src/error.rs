//! Graph-subsystem error type.

use thiserror::Error;

use rn_core::SegmentId;

/// Errors produced by `rn-graph`.  All of them mean the snapshot is
/// malformed and the whole pipeline invocation must be discarded.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("segment {0} added twice")]
    DuplicateSegment(SegmentId),

    #[error("segment {0} not found in network")]
    NotFound(SegmentId),

    #[error("segment {segment} is invalid: {reason}")]
    InvalidSegment { segment: SegmentId, reason: String },

    #[error("connector {connector} references missing segment {missing}")]
    DanglingConnector { connector: SegmentId, missing: SegmentId },

    #[error("connector {0} connects a segment to itself")]
    SelfLoop(SegmentId),

    #[error("cycle detected walking upstream from {start}: {at} visited twice")]
    CycleDetected { start: SegmentId, at: SegmentId },

    #[error("snapshot parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
