//! Approach chains: the stitched centre line from a segment's origin,
//! through every connector, to the segment itself.
//!
//! A connector overlaps the segments it joins: it leaves `from` at
//! `from_offset` and lands on `to` at `to_offset`.  Stitching keeps each
//! piece only up to where the next one takes over.
//!
//! ```text
//!  from  ●────●────●────●───○○○          keep points before from_offset
//!  conn                  ●──●──●──○      keep points before len - to_offset
//!  seg                         ○──●────●    skip the first point
//! ```

use rustc_hash::FxHashSet;

use rn_core::{Point2, SegmentId};
use rn_graph::{LinkGraphStore, Segment};

use crate::{ZoneError, ZoneResult};

/// Index of the last point of `a` lying before the overlap with `b`.
///
/// Walks `a`'s polyline accumulating run lengths and returns the last point
/// whose accumulated distance is below `a.length - overlap`: 0 when even the
/// first run reaches the limit, the last index when no run does.  `a` and `b`
/// must be joined directly, one of them being the connector between the two.
pub fn clip_overlap(a: &Segment, b: &Segment, overlap: f64) -> ZoneResult<usize> {
    let a_feeds_b = a.connector.is_some_and(|e| e.to == b.id);
    let b_leaves_a = b.connector.is_some_and(|e| e.from == a.id);
    if !a_feeds_b && !b_leaves_a {
        return Err(ZoneError::NotAdjacent { a: a.id, b: b.id });
    }

    let limit = a.length - overlap;
    let mut travelled = 0.0;
    for (j, w) in a.polyline.windows(2).enumerate() {
        travelled += w[0].distance(w[1]);
        if limit <= travelled {
            return Ok(j);
        }
    }
    Ok(a.polyline.len() - 1)
}

/// The stitched centre line leading into one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct ApproachChain {
    pub origin: SegmentId,
    pub target: SegmentId,
    /// Connectors crossed, origin side first.
    pub connectors: Vec<SegmentId>,
    pub points: Vec<Point2>,
    /// Full carriageway width at each point.
    pub widths: Vec<f64>,
}

/// Assemble the approach chain of `target`.
///
/// When `target` is its own origin the chain is just its polyline.
/// Coincident consecutive points from neighbouring pieces are merged.
pub fn approach_chain(store: &LinkGraphStore, target: SegmentId) -> ZoneResult<ApproachChain> {
    let origin = store.origin_of(target)?;
    let seg = store.get(target)?;

    let mut points = Vec::new();
    let mut widths = Vec::new();
    let mut push = |p: Point2, width: f64| {
        if points.last() != Some(&p) {
            points.push(p);
            widths.push(width);
        }
    };

    if origin == target {
        let width = seg.total_width();
        for &p in &seg.polyline {
            push(p, width);
        }
        return Ok(ApproachChain { origin, target, connectors: Vec::new(), points, widths });
    }

    // ── Connectors from origin to target ──────────────────────────────────
    let mut connectors = Vec::new();
    let mut visited = FxHashSet::default();
    let mut current = origin;
    while current != target {
        let broken = ZoneError::ChainBroken { origin, target, at: current };
        if !visited.insert(current) {
            return Err(broken);
        }
        let Some(&conn) = store.connectors_from(current).first() else {
            return Err(broken);
        };
        let Some(ends) = store.get(conn)?.connector else {
            return Err(broken);
        };
        connectors.push(conn);
        current = ends.to;
    }

    // ── Stitch ────────────────────────────────────────────────────────────
    for &conn_id in &connectors {
        let conn = store.get(conn_id)?;
        let Some(ends) = conn.connector else { continue };
        let from = store.get(ends.from)?;
        let to = store.get(ends.to)?;

        let keep = clip_overlap(from, conn, from.length - ends.from_offset)?;
        let width = from.total_width();
        for &p in &from.polyline[..=keep] {
            push(p, width);
        }

        let keep = clip_overlap(conn, to, ends.to_offset)?;
        let width = conn.total_width();
        for &p in &conn.polyline[..=keep] {
            push(p, width);
        }
    }

    let width = seg.total_width();
    for &p in &seg.polyline[1..] {
        push(p, width);
    }

    Ok(ApproachChain { origin, target, connectors, points, widths })
}
