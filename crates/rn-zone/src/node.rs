//! Intersection zones ("nodes") and travel-time sections.
//!
//! Every segment carrying a signal head gets one zone:
//!
//! * name `"{junction}_{sequence}"` from the first head placed on it;
//! * boundary polygon around its approach chain;
//! * members: the segment, the connectors leaving it and their targets;
//! * one travel-time section per outgoing movement, from the approach
//!   origin to the movement target, tagged with a turn class.

use log::{debug, warn};

use rn_core::{Diagnostic, EngineConfig, JunctionId, SegmentId};
use rn_graph::LinkGraphStore;
use rn_signal::SignalPlacement;

use crate::{approach_chain, build_boundary, ZonePolygon, ZoneResult};

// ── Turn classes ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnClass {
    Straight,
    Left,
    Right,
    UTurn,
}

impl TurnClass {
    pub fn suffix(self) -> &'static str {
        match self {
            TurnClass::Straight => "(S)",
            TurnClass::Left => "(L)",
            TurnClass::Right => "(R)",
            TurnClass::UTurn => "(U)",
        }
    }
}

/// Classify the heading change from `from_deg` to `to_deg`.
///
/// The change is normalised to `[0, 360)`; within `tolerance` of 0 is
/// straight, up to 180 is left, past 180 is right, and exactly 180 is a
/// U-turn.
pub fn classify_turn(from_deg: f64, to_deg: f64, tolerance: f64) -> TurnClass {
    let delta = (to_deg - from_deg).rem_euclid(360.0);
    if delta <= tolerance || delta >= 360.0 - tolerance {
        TurnClass::Straight
    } else if delta < 180.0 {
        TurnClass::Left
    } else if delta > 180.0 {
        TurnClass::Right
    } else {
        TurnClass::UTurn
    }
}

// ── Zones ─────────────────────────────────────────────────────────────────────

/// A travel-time measurement through one movement of a zone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelSection {
    /// Zone name plus turn suffix, e.g. `"3_1(L)"`.
    pub name: String,
    pub start: SegmentId,
    pub start_position: f64,
    pub end: SegmentId,
    pub end_position: f64,
    pub signal_segment: SegmentId,
    pub turn: TurnClass,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionZone {
    pub name: String,
    pub segment: SegmentId,
    pub junction: JunctionId,
    pub sequence: u32,
    pub origin: SegmentId,
    pub members: Vec<SegmentId>,
    pub polygon: ZonePolygon,
    pub sections: Vec<TravelSection>,
}

impl IntersectionZone {
    pub fn wkt(&self) -> String {
        self.polygon.to_wkt()
    }
}

/// Output of the zone stage.
#[derive(Clone, Debug, Default)]
pub struct ZoneSet {
    zones: Vec<IntersectionZone>,
    diagnostics: Vec<Diagnostic>,
}

impl ZoneSet {
    /// Zones in order of their segment's first signal head.
    pub fn zones(&self) -> &[IntersectionZone] {
        &self.zones
    }

    pub fn get(&self, segment: SegmentId) -> Option<&IntersectionZone> {
        self.zones.iter().find(|z| z.segment == segment)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Build one zone per distinct signal segment in `placements`.
///
/// A later placement on an already zoned segment with a different
/// `(junction, sequence)` is reported and ignored.
pub fn build_zones(
    store: &LinkGraphStore,
    placements: &[SignalPlacement],
    config: &EngineConfig,
) -> ZoneResult<ZoneSet> {
    let mut set = ZoneSet::default();

    for p in placements {
        if let Some(existing) = set.get(p.segment) {
            if (existing.junction, existing.sequence) != (p.junction, p.sequence)
                && !set.diagnostics.contains(&Diagnostic::DuplicateZone { segment: p.segment })
            {
                let diag = Diagnostic::DuplicateZone { segment: p.segment };
                warn!("{diag}");
                set.diagnostics.push(diag);
            }
            continue;
        }
        let zone = build_zone(store, p, config)?;
        debug!("zone {} on {}: {} vertices", zone.name, zone.segment, zone.polygon.len());
        set.zones.push(zone);
    }

    Ok(set)
}

fn build_zone(
    store: &LinkGraphStore,
    head: &SignalPlacement,
    config: &EngineConfig,
) -> ZoneResult<IntersectionZone> {
    let name = format!("{}_{}", head.junction.get(), head.sequence);
    let chain = approach_chain(store, head.segment)?;
    let polygon = build_boundary(&chain.points, &chain.widths, config)?;

    let seg = store.get(head.segment)?;
    let mut members = vec![seg.id];
    for &conn in store.connectors_from(seg.id) {
        members.push(conn);
        if let Some(ends) = store.get(conn)?.connector {
            members.push(ends.to);
        }
    }

    let from_heading = seg.final_heading_deg();
    let start_position = section_position(store.get(chain.origin)?.length);
    let mut sections = Vec::new();
    for &end in store.successors(seg.id) {
        let target = store.get(end)?;
        let turn = classify_turn(from_heading, target.final_heading_deg(), config.straight_tolerance_deg);
        sections.push(TravelSection {
            name:           format!("{name}{}", turn.suffix()),
            start:          chain.origin,
            start_position,
            end,
            end_position:   section_position(target.length),
            signal_segment: seg.id,
            turn,
        });
    }

    Ok(IntersectionZone {
        name,
        segment: seg.id,
        junction: head.junction,
        sequence: head.sequence,
        origin: chain.origin,
        members,
        polygon,
        sections,
    })
}

/// Sections start and end 1 m into a segment, or halfway on shorter ones.
fn section_position(length: f64) -> f64 {
    if length >= 1.0 { 1.0 } else { length / 2.0 }
}
