//! Non-fatal conditions reported by the pipeline stages.
//!
//! A diagnostic means one entity (a segment, a road, a signal, a zone) was
//! skipped; everything else in the stage output is still valid.  Stages
//! collect diagnostics in their output and also log them at `warn` level.

use std::fmt;

use crate::{ControllerId, RoadId, RoadKey, SegmentId, SignalId};

/// A skipped entity and the reason it was skipped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// The segment name does not follow `<road>-<position>-<direction>`.
    UnparsableName { segment: SegmentId, name: String, reason: String },

    /// The name parsed but its direction token is neither `Left` nor `Right`.
    UnclassifiedDirection { segment: SegmentId, road: RoadId },

    /// Segments were grouped under `key` but none of them marks the start.
    MissingRoadStart { key: RoadKey },

    /// A single-segment road has no connector leaving its start segment.
    NoOutgoingConnector { key: RoadKey, start: SegmentId },

    /// No connector joins two consecutive segments of a road; the chain stops
    /// at `from`.
    UnstitchedRoad { key: RoadKey, from: SegmentId, to: SegmentId },

    /// A signal descriptor refers to a road that was not reconstructed.
    UnknownRoad { signal: SignalId, key: RoadKey },

    /// No voting tier produced a segment for the signal.
    UnmappedSignal { signal: SignalId },

    /// A controller governs a signal id that has no descriptors.
    UnknownSignal { controller: ControllerId, signal: SignalId },

    /// A controller has no controller→signal membership entries.
    ControllerWithoutSignals { controller: ControllerId },

    /// A second placement group targets a segment that already has a zone.
    DuplicateZone { segment: SegmentId },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnparsableName { segment, name, reason } => {
                write!(f, "{segment}: cannot parse name {name:?}: {reason}")
            }
            Diagnostic::UnclassifiedDirection { segment, road } => {
                write!(f, "{segment}: direction of {road} is unclassified, segment left out of road grouping")
            }
            Diagnostic::MissingRoadStart { key } => {
                write!(f, "{key}: no segment marks the road start")
            }
            Diagnostic::NoOutgoingConnector { key, start } => {
                write!(f, "{key}: no connector leaves start segment {start}")
            }
            Diagnostic::UnstitchedRoad { key, from, to } => {
                write!(f, "{key}: no connector joins {from} and {to}, chain stops at {from}")
            }
            Diagnostic::UnknownRoad { signal, key } => {
                write!(f, "{signal}: {key} does not exist in the network")
            }
            Diagnostic::UnmappedSignal { signal } => {
                write!(f, "{signal}: no placement candidate could be mapped")
            }
            Diagnostic::UnknownSignal { controller, signal } => {
                write!(f, "{controller}: governs {signal} which has no descriptors")
            }
            Diagnostic::ControllerWithoutSignals { controller } => {
                write!(f, "{controller}: governs no signals")
            }
            Diagnostic::DuplicateZone { segment } => {
                write!(f, "{segment}: already has an intersection zone")
            }
        }
    }
}
