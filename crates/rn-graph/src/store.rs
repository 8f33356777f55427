//! Segment store and its connector adjacency index.
//!
//! # Data layout
//!
//! Segments live in a `BTreeMap` keyed by `SegmentId`, so iteration is in
//! ascending id order.  Every "first match" rule downstream (first connector
//! leaving a segment, first start segment of a road) relies on that order
//! being deterministic.
//!
//! Adjacency is derived once in [`LinkGraphBuilder::build`].  For every
//! connector `c` with `c.from = a`, `c.to = b`:
//!
//! ```text
//! successors[a]   += b        outgoing[a] += c
//! predecessors[b] += a        incoming[b] += c
//! ```
//!
//! Parallel connectors between the same pair produce repeated entries, so
//! `predecessors(b).len()` counts connectors, not distinct segments.

use std::collections::BTreeMap;

use log::debug;
use rustc_hash::FxHashMap;

use rn_core::SegmentId;

use crate::{GraphError, GraphResult, Segment};

// ── Adjacency index ───────────────────────────────────────────────────────────

#[derive(Default)]
struct AdjacencyIndex {
    successors:   FxHashMap<SegmentId, Vec<SegmentId>>,
    predecessors: FxHashMap<SegmentId, Vec<SegmentId>>,
    /// Connector ids leaving each segment.
    outgoing:     FxHashMap<SegmentId, Vec<SegmentId>>,
    /// Connector ids arriving at each segment.
    incoming:     FxHashMap<SegmentId, Vec<SegmentId>>,
}

#[inline]
fn slice_of(map: &FxHashMap<SegmentId, Vec<SegmentId>>, id: SegmentId) -> &[SegmentId] {
    map.get(&id).map(Vec::as_slice).unwrap_or(&[])
}

// ── LinkGraphStore ────────────────────────────────────────────────────────────

/// Immutable table of segments plus the predecessor/successor index.
///
/// Do not construct directly; use [`LinkGraphBuilder`].
pub struct LinkGraphStore {
    segments: BTreeMap<SegmentId, Segment>,
    index:    AdjacencyIndex,
}

impl LinkGraphStore {
    /// A store with no segments.
    pub fn empty() -> Self {
        Self { segments: BTreeMap::new(), index: AdjacencyIndex::default() }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, id: SegmentId) -> bool {
        self.segments.contains_key(&id)
    }

    /// Look up a segment.
    pub fn get(&self, id: SegmentId) -> GraphResult<&Segment> {
        self.segments.get(&id).ok_or(GraphError::NotFound(id))
    }

    /// All segments in ascending id order.  Call again to restart.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.values()
    }

    /// All connectors in ascending id order.
    pub fn connectors(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.values().filter(|s| s.is_connector())
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Segments reachable from `id` through one connector.
    #[inline]
    pub fn successors(&self, id: SegmentId) -> &[SegmentId] {
        slice_of(&self.index.successors, id)
    }

    /// Segments feeding `id` through one connector.
    #[inline]
    pub fn predecessors(&self, id: SegmentId) -> &[SegmentId] {
        slice_of(&self.index.predecessors, id)
    }

    /// Connectors leaving `id`, ascending by connector id.
    #[inline]
    pub fn connectors_from(&self, id: SegmentId) -> &[SegmentId] {
        slice_of(&self.index.outgoing, id)
    }

    /// Connectors arriving at `id`, ascending by connector id.
    #[inline]
    pub fn connectors_into(&self, id: SegmentId) -> &[SegmentId] {
        slice_of(&self.index.incoming, id)
    }

    /// The lowest-numbered connector joining `from` to `to`.
    pub fn connector_between(&self, from: SegmentId, to: SegmentId) -> Option<&Segment> {
        self.connectors_from(from)
            .iter()
            .filter_map(|c| self.segments.get(c))
            .find(|c| c.connector.is_some_and(|ends| ends.to == to))
    }
}

// ── LinkGraphBuilder ──────────────────────────────────────────────────────────

/// Collect segments, then call [`build`](Self::build) to validate connector
/// references and derive the adjacency index.
///
/// # Example
///
/// ```
/// use rn_core::{Point2, SegmentId};
/// use rn_graph::{ConnectorEnds, LinkGraphBuilder, Segment};
///
/// let line = |x0: f64, x1: f64| vec![Point2::new(x0, 0.0), Point2::new(x1, 0.0)];
/// let mut b = LinkGraphBuilder::new();
/// b.add_segment(Segment::link(SegmentId(1), "1-0-Right", 40.0, vec![3.5], line(0.0, 40.0))).unwrap();
/// b.add_segment(Segment::link(SegmentId(2), "", 60.0, vec![3.5], line(45.0, 105.0))).unwrap();
/// let ends = ConnectorEnds { from: SegmentId(1), to: SegmentId(2), from_offset: 40.0, to_offset: 0.0 };
/// b.add_segment(Segment::connector(SegmentId(10000), 5.0, ends, vec![3.5], line(40.0, 45.0))).unwrap();
/// let store = b.build().unwrap();
/// assert_eq!(store.successors(SegmentId(1)), &[SegmentId(2)]);
/// assert_eq!(store.predecessors(SegmentId(2)), &[SegmentId(1)]);
/// ```
pub struct LinkGraphBuilder {
    segments: BTreeMap<SegmentId, Segment>,
}

impl LinkGraphBuilder {
    pub fn new() -> Self {
        Self { segments: BTreeMap::new() }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Add one segment record.
    ///
    /// Fails on a repeated id or a record with no lanes, a non-positive lane
    /// width, a negative length or fewer than two polyline points.
    pub fn add_segment(&mut self, segment: Segment) -> GraphResult<()> {
        if self.segments.contains_key(&segment.id) {
            return Err(GraphError::DuplicateSegment(segment.id));
        }
        if let Some(reason) = segment.defect() {
            return Err(GraphError::InvalidSegment { segment: segment.id, reason });
        }
        self.segments.insert(segment.id, segment);
        Ok(())
    }

    /// Consume the builder and produce a [`LinkGraphStore`].
    ///
    /// Every connector must reference two existing, distinct segments other
    /// than itself.
    pub fn build(self) -> GraphResult<LinkGraphStore> {
        let mut index = AdjacencyIndex::default();

        for seg in self.segments.values() {
            let Some(ends) = seg.connector else { continue };

            for end in [ends.from, ends.to] {
                if !self.segments.contains_key(&end) {
                    return Err(GraphError::DanglingConnector { connector: seg.id, missing: end });
                }
            }
            if ends.from == ends.to || ends.from == seg.id || ends.to == seg.id {
                return Err(GraphError::SelfLoop(seg.id));
            }

            index.successors.entry(ends.from).or_default().push(ends.to);
            index.predecessors.entry(ends.to).or_default().push(ends.from);
            index.outgoing.entry(ends.from).or_default().push(seg.id);
            index.incoming.entry(ends.to).or_default().push(seg.id);
        }

        debug!(
            "link graph built: {} segments, {} connectors",
            self.segments.len(),
            index.outgoing.values().map(Vec::len).sum::<usize>()
        );

        Ok(LinkGraphStore { segments: self.segments, index })
    }
}

impl Default for LinkGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
