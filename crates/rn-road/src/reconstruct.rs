//! Road reconstruction.
//!
//! # Algorithm
//!
//! 1. Parse the name of every ordinary segment (ascending id).  Segments
//!    whose name does not parse, or whose direction is unclassified, are left
//!    out and reported.
//! 2. Group the remaining segment ids per `(road, direction)` key in the
//!    order they were found, and remember the start segments of each key.
//! 3. For every key with a start segment:
//!    * one grouped segment: the chain is `[start, c]` where `c` is the
//!      lowest-numbered connector leaving `start`;
//!    * several: for each consecutive pair `(a, b)` of the group, append the
//!      connector joining them and `b` (and `a` for the first pair).
//!
//! ```text
//! group [101, 102, 103]     chain [101, c(101→102), 102, c(102→103), 103]
//! ```
//!
//! A road's length is the sum of the lengths of everything in its chain.

use std::collections::BTreeMap;

use log::{debug, warn};

use rn_core::{Diagnostic, RoadDirection, RoadKey, SegmentId};
use rn_graph::{GraphResult, LinkGraphStore};

use crate::{parse_segment_name, RoadError, RoadResult};

// ── Road ──────────────────────────────────────────────────────────────────────

/// One reconstructed road.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub key: RoadKey,
    /// Sum of the lengths of every segment in `chain`, connectors included.
    pub length: f64,
    /// Ordinary segments interleaved with the connectors joining them.
    pub chain: Vec<SegmentId>,
}

// ── RoadMap ───────────────────────────────────────────────────────────────────

/// All roads of one snapshot, plus whatever was skipped building them.
#[derive(Clone, Debug, Default)]
pub struct RoadMap {
    roads: BTreeMap<RoadKey, Road>,
    diagnostics: Vec<Diagnostic>,
}

impl RoadMap {
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn get(&self, key: RoadKey) -> Option<&Road> {
        self.roads.get(&key)
    }

    /// Like [`get`](Self::get) but fails with [`RoadError::UnknownRoad`].
    pub fn road(&self, key: RoadKey) -> RoadResult<&Road> {
        self.roads.get(&key).ok_or(RoadError::UnknownRoad(key))
    }

    /// Roads in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Road> + '_ {
        self.roads.values()
    }

    /// Segments and roads left out during reconstruction.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn report(&mut self, diag: Diagnostic) {
        warn!("{diag}");
        self.diagnostics.push(diag);
    }
}

// ── Reconstruction ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Group {
    members: Vec<SegmentId>,
    starts: Vec<SegmentId>,
}

/// Rebuild every road encoded in the segment names of `store`.
///
/// Only malformed-store conditions are errors; anything that merely prevents
/// one road from being built is recorded in [`RoadMap::diagnostics`].
pub fn reconstruct(store: &LinkGraphStore) -> GraphResult<RoadMap> {
    let mut map = RoadMap::default();

    // ── Steps 1–2: parse and group ────────────────────────────────────────
    let mut groups: BTreeMap<RoadKey, Group> = BTreeMap::new();
    let mut order: Vec<RoadKey> = Vec::new();

    for seg in store.iter().filter(|s| !s.is_connector() && !s.name.is_empty()) {
        let parsed = match parse_segment_name(&seg.name) {
            Ok(p) => p,
            Err(e) => {
                map.report(Diagnostic::UnparsableName {
                    segment: seg.id,
                    name:    seg.name.clone(),
                    reason:  e.to_string(),
                });
                continue;
            }
        };
        if parsed.direction == RoadDirection::Default {
            map.report(Diagnostic::UnclassifiedDirection { segment: seg.id, road: parsed.road });
            continue;
        }

        let key = RoadKey::new(parsed.road, parsed.direction);
        let group = groups.entry(key).or_insert_with(|| {
            order.push(key);
            Group::default()
        });
        group.members.push(seg.id);
        if parsed.is_start {
            group.starts.push(seg.id);
        }
    }

    // ── Step 3: stitch ────────────────────────────────────────────────────
    for key in order {
        let Some(group) = groups.get(&key) else { continue };
        if group.starts.is_empty() {
            map.report(Diagnostic::MissingRoadStart { key });
            continue;
        }

        // Starts are also members, so a one-member group has exactly one.
        let start = group.starts[0];
        let chain = if group.members.len() == 1 {
            match store.connectors_from(start).first() {
                Some(&conn) => vec![start, conn],
                None => {
                    map.report(Diagnostic::NoOutgoingConnector { key, start });
                    continue;
                }
            }
        } else {
            stitch(store, &mut map, key, &group.members)
        };
        if chain.is_empty() {
            continue;
        }

        let mut length = 0.0;
        for &id in &chain {
            length += store.get(id)?.length;
        }
        debug!("{key}: {} segments, {length:.2} m", chain.len());
        map.roads.entry(key).or_insert(Road { key, length, chain });
    }

    Ok(map)
}

/// Join consecutive group members through their connectors.  Stops at the
/// first pair with no connector between them.
fn stitch(
    store: &LinkGraphStore,
    map: &mut RoadMap,
    key: RoadKey,
    members: &[SegmentId],
) -> Vec<SegmentId> {
    let mut chain = Vec::with_capacity(members.len() * 2);
    for pair in members.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let Some(conn) = store.connector_between(from, to) else {
            map.report(Diagnostic::UnstitchedRoad { key, from, to });
            break;
        };
        if chain.is_empty() {
            chain.push(from);
        }
        chain.push(conn.id);
        chain.push(to);
    }
    chain
}
