//! Where a pipeline run gets its input.
//!
//! A [`Snapshot`] is the link/connector table plus the signal records of one
//! network state.  Fetching it is the only step that touches the outside
//! world; everything after is pure computation.

use std::path::PathBuf;

use rn_graph::{load_segments_csv, LinkGraphStore};
use rn_signal::SignalRecords;

use crate::{PipelineError, PipelineResult};

/// One network state, ready for the pipeline.
pub struct Snapshot {
    pub store: LinkGraphStore,
    pub records: SignalRecords,
}

/// Supplies a [`Snapshot`] to [`Pipeline::run`](crate::Pipeline::run).
///
/// Retrying a failed fetch is the implementor's business; the pipeline calls
/// `fetch` exactly once per run.
pub trait SnapshotSource {
    fn fetch(&mut self) -> PipelineResult<Snapshot>;
}

/// A snapshot already in memory.  Can be fetched once.
pub struct MemorySource {
    snapshot: Option<Snapshot>,
}

impl MemorySource {
    pub fn new(store: LinkGraphStore, records: SignalRecords) -> Self {
        Self { snapshot: Some(Snapshot { store, records }) }
    }
}

impl SnapshotSource for MemorySource {
    fn fetch(&mut self) -> PipelineResult<Snapshot> {
        self.snapshot
            .take()
            .ok_or_else(|| PipelineError::Source("in-memory snapshot already consumed".into()))
    }
}

/// Segments from a CSV export, signal records supplied by the caller.
///
/// The file is re-read on every fetch.
pub struct CsvSource {
    segments: PathBuf,
    records: SignalRecords,
}

impl CsvSource {
    pub fn new(segments: impl Into<PathBuf>, records: SignalRecords) -> Self {
        Self { segments: segments.into(), records }
    }
}

impl SnapshotSource for CsvSource {
    fn fetch(&mut self) -> PipelineResult<Snapshot> {
        let store = load_segments_csv(&self.segments)?;
        Ok(Snapshot { store, records: self.records.clone() })
    }
}
