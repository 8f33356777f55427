//! World-position snapping.
//!
//! An R-tree (via `rstar`) holds every polyline run of every segment.  A
//! query point is projected onto the nearest run within the snap radius and
//! converted to a segment-relative `(position, lateral, lane)` triple.
//!
//! Lateral offsets are positive to the left of the direction of travel.
//! Lanes are counted from the right edge: lane 1 covers lateral offsets
//! `[-W/2, -W/2 + w1)`, where `W` is the segment's total width.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rn_core::{Point2, SegmentId};

use crate::LinkGraphStore;

// ── R-tree run entry ──────────────────────────────────────────────────────────

/// One straight polyline run `a → b` of a segment.
#[derive(Clone)]
struct RunEntry {
    a: [f64; 2],
    b: [f64; 2],
    segment: SegmentId,
    is_connector: bool,
    /// Distance along the segment polyline at `a`.
    start: f64,
}

impl RunEntry {
    /// Parameter in `[0, 1]` of the point on the run closest to `p`.
    fn project(&self, p: &[f64; 2]) -> f64 {
        let (dx, dy) = (self.b[0] - self.a[0], self.b[1] - self.a[1]);
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            return 0.0;
        }
        (((p[0] - self.a[0]) * dx + (p[1] - self.a[1]) * dy) / len2).clamp(0.0, 1.0)
    }

    fn run_length(&self) -> f64 {
        (self.b[0] - self.a[0]).hypot(self.b[1] - self.a[1])
    }
}

impl RTreeObject for RunEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.a, self.b)
    }
}

impl PointDistance for RunEntry {
    /// Squared distance from `point` to the closest point on the run.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let t = self.project(point);
        let qx = self.a[0] + t * (self.b[0] - self.a[0]);
        let qy = self.a[1] + t * (self.b[1] - self.a[1]);
        let (ex, ey) = (point[0] - qx, point[1] - qy);
        ex * ex + ey * ey
    }
}

// ── Public types ──────────────────────────────────────────────────────────────

/// A world point resolved onto a segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldHit {
    pub segment: SegmentId,
    /// 1-based, lane 1 rightmost.
    pub lane: usize,
    /// Metres along the segment polyline.
    pub position: f64,
    /// Signed perpendicular offset from the polyline, positive to the left.
    pub lateral: f64,
}

/// Spatial index over all segment polylines of one store.
pub struct SegmentLocator {
    tree: RTree<RunEntry>,
}

impl SegmentLocator {
    /// Bulk-load the index from `store`.
    pub fn new(store: &LinkGraphStore) -> Self {
        let mut entries = Vec::new();
        for seg in store.iter() {
            let mut start = 0.0;
            for w in seg.polyline.windows(2) {
                let entry = RunEntry {
                    a: [w[0].x, w[0].y],
                    b: [w[1].x, w[1].y],
                    segment: seg.id,
                    is_connector: seg.is_connector(),
                    start,
                };
                start += entry.run_length();
                entries.push(entry);
            }
        }
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn run_count(&self) -> usize {
        self.tree.size()
    }

    /// Resolve `point` onto the closest segment within `radius` metres.
    ///
    /// Ties on distance prefer ordinary segments over connectors, then the
    /// lower segment id.  Returns `None` when nothing lies within `radius`.
    pub fn snap(&self, store: &LinkGraphStore, point: Point2, radius: f64) -> Option<WorldHit> {
        let q = [point.x, point.y];
        let best = self
            .tree
            .locate_within_distance(q, radius * radius)
            .map(|e| (e.distance_2(&q), e))
            .min_by(|(da, a), (db, b)| {
                da.total_cmp(db)
                    .then(a.is_connector.cmp(&b.is_connector))
                    .then(a.segment.cmp(&b.segment))
                    .then(a.start.total_cmp(&b.start))
            })?
            .1;

        let seg = store.get(best.segment).ok()?;
        let t = best.project(&q);
        let run = best.run_length();
        let position = best.start + t * run;

        let (dx, dy) = (best.b[0] - best.a[0], best.b[1] - best.a[1]);
        let lateral = if run == 0.0 {
            0.0
        } else {
            (dx * (q[1] - best.a[1]) - dy * (q[0] - best.a[0])) / run
        };

        let from_right = seg.total_width() / 2.0 + lateral;
        let mut edge = 0.0;
        let mut lane = seg.lane_count();
        for (i, w) in seg.lane_widths.iter().enumerate() {
            edge += w;
            if from_right < edge {
                lane = i + 1;
                break;
            }
        }

        Some(WorldHit { segment: seg.id, lane: lane.max(1), position, lateral })
    }
}
