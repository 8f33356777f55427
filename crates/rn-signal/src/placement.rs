//! One descriptor → one candidate placement.

use rn_core::SegmentId;
use rn_graph::LinkGraphStore;
use rn_road::{RoadMap, RoadResult};

use crate::{SignalDescriptor, SignalVariant};

/// Where a single descriptor would put its signal.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub variant: SignalVariant,
    /// Never a connector.
    pub segment: SegmentId,
    pub position: f64,
}

/// Walk the descriptor's road to its `s` offset.
///
/// Fails with `RoadError::UnknownRoad` when `(road, direction)` was not
/// reconstructed; callers treat that as a skipped descriptor.
pub fn resolve_placement(
    roads: &RoadMap,
    store: &LinkGraphStore,
    descriptor: &SignalDescriptor,
) -> RoadResult<Candidate> {
    let at = roads.walk(store, descriptor.road_key(), descriptor.s)?;
    Ok(Candidate { variant: descriptor.variant, segment: at.segment, position: at.position })
}
