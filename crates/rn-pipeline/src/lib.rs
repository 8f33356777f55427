//! `rn-pipeline` — runs the whole derivation for one network snapshot.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`source`]   | `SnapshotSource`, `Snapshot`, `MemorySource`, `CsvSource` |
//! | [`observer`] | `PipelineObserver`, `Stage`, `NoopObserver`, `LogObserver`|
//! | [`pipeline`] | `Pipeline`, `PipelineOutput`                              |
//! | [`error`]    | `PipelineError`, `PipelineResult<T>`                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rn_core::EngineConfig;
//! use rn_pipeline::{CsvSource, LogObserver, Pipeline};
//!
//! let mut source = CsvSource::new("segments.csv", records);
//! let output = Pipeline::new(EngineConfig::default()).run(&mut source, &mut LogObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod pipeline;
pub mod source;


pub use error::{PipelineError, PipelineResult};
pub use observer::{LogObserver, NoopObserver, PipelineObserver, Stage};
pub use pipeline::{Pipeline, PipelineOutput};
pub use source::{CsvSource, MemorySource, Snapshot, SnapshotSource};
