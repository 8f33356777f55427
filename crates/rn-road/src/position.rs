//! Road-relative positions: `(road, s, t)` → segment, position, lane.
//!
//! The chain walk here is shared by signal placement and vehicle-spawn
//! placement.  It never leaves the result on a connector: an offset that
//! falls inside a connector is pushed back onto the tail of the segment
//! feeding it.
//!
//! Left-direction segments are drawn against the road's reference line, so
//! positions on them are mirrored (`segment length - position`).

use rn_core::{RoadDirection, RoadId, RoadKey, SegmentId};
use rn_graph::LinkGraphStore;

use crate::{RoadError, RoadMap, RoadResult};

/// A point on one segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadPosition {
    pub segment: SegmentId,
    /// Metres from the segment start, within `[0, segment length]`.
    pub position: f64,
}

/// A [`RoadPosition`] plus the lane it falls in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneLocation {
    pub segment: SegmentId,
    /// 1-based, lane 1 rightmost.
    pub lane: usize,
    pub position: f64,
}

impl RoadMap {
    /// Resolve offset `s` along the road `key` to a segment and position.
    ///
    /// `s` is clamped to `[0, road length]`.
    pub fn walk(&self, store: &LinkGraphStore, key: RoadKey, s: f64) -> RoadResult<RoadPosition> {
        let road = self.road(key)?;
        let s = s.clamp(0.0, road.length);

        let mut consumed = 0.0;
        let mut hit = None;
        for &id in &road.chain {
            let seg = store.get(id)?;
            if consumed + seg.length >= s {
                hit = Some((seg, consumed));
                break;
            }
            consumed += seg.length;
        }
        // Only reachable through rounding in the length sum.
        let (seg, consumed) = match hit {
            Some(h) => h,
            None => {
                let Some(&last) = road.chain.last() else {
                    return Err(RoadError::UnknownRoad(key));
                };
                let seg = store.get(last)?;
                (seg, road.length - seg.length)
            }
        };

        let (target, mut position) = match seg.connector {
            Some(ends) => {
                let from = store.get(ends.from)?;
                (from, from.length - seg.length)
            }
            None => (seg, s - consumed),
        };

        if key.direction == RoadDirection::Left {
            position = target.length - position;
        }

        Ok(RoadPosition {
            segment:  target.id,
            position: position.clamp(0.0, target.length),
        })
    }

    /// Resolve `(road, s, t)` to a segment, lane and position.
    ///
    /// The sign of `t` picks the direction (negative is Right).  `|t|` is
    /// measured from the road's centre line, so lanes are counted outward
    /// from the innermost one; anything beyond the total width lands in the
    /// outermost lane.
    pub fn locate(
        &self,
        store: &LinkGraphStore,
        road: RoadId,
        s: f64,
        t: f64,
    ) -> RoadResult<LaneLocation> {
        let key = RoadKey::new(road, RoadDirection::from_lateral(t));
        let at = self.walk(store, key, s)?;
        let seg = store.get(at.segment)?;

        let lane_count = seg.lane_count();
        let mut from_centre = lane_count;
        let mut edge = 0.0;
        for (i, w) in seg.lane_widths.iter().rev().enumerate() {
            edge += w;
            if t.abs() < edge {
                from_centre = i + 1;
                break;
            }
        }

        Ok(LaneLocation {
            segment:  seg.id,
            lane:     lane_count + 1 - from_centre,
            position: at.position,
        })
    }
}
