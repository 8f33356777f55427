//! `rn-core` — foundational types for the `rust_rn` network engine.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`ids`]        | typed ids, `RoadDirection`, `RoadKey`                    |
//! | [`geo`]        | `Point2`, planar distance and heading                    |
//! | [`diagnostic`] | `Diagnostic`, non-fatal skips reported by every stage    |
//! | [`config`]     | `EngineConfig`                                           |
//! | [`error`]      | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use diagnostic::Diagnostic;
pub use error::{CoreError, CoreResult};
pub use geo::Point2;
pub use ids::{
    ControllerId, JunctionId, RoadDirection, RoadId, RoadKey, SegmentId, SignalHeadId, SignalId,
};
