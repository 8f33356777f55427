//! `rn-signal` — maps road-relative signal descriptors onto segments.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`records`]   | `SignalDescriptor`, `ControllerDescriptor`, `SignalRecords` |
//! | [`sequence`]  | `normalize_sequences`                                     |
//! | [`placement`] | `resolve_placement` (one descriptor → one candidate)      |
//! | [`vote`]      | `tally_voters`, `decide` (the tiered placement vote)      |
//! | [`phase`]     | `PhaseType`, `PhasePlan`, `PhaseTiming`, head labels      |
//! | [`resolver`]  | `resolve_signals`, `SignalPlan`, `SignalPlacement`        |
//! | [`error`]     | `SignalError`, `SignalResult<T>`                          |
//!
//! # Pipeline position
//!
//! ```text
//! LinkGraphStore ─┐
//! RoadMap ────────┼─► resolve_signals ─► SignalPlan ─► rn-zone
//! SignalRecords ──┘
//! ```

pub mod error;
pub mod phase;
pub mod placement;
pub mod records;
pub mod resolver;
pub mod sequence;
pub mod vote;


pub use error::{SignalError, SignalResult};
pub use phase::{head_label, PhasePlan, PhaseTiming, PhaseType};
pub use placement::{resolve_placement, Candidate};
pub use records::{ControllerDescriptor, SignalDescriptor, SignalRecords, SignalVariant};
pub use resolver::{resolve_signals, PhaseGroups, SignalPlacement, SignalPlan};
pub use sequence::normalize_sequences;
pub use vote::{decide, tally_voters, Vote, VoteTier};
