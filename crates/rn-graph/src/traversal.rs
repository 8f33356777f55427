//! Upstream origin resolution.
//!
//! Starting from a segment, walk backwards while the chain is unambiguous:
//! the current segment has exactly one predecessor, and that predecessor has
//! exactly one successor.  The last segment reached is the origin.
//!
//! ```text
//!   o ──► a ──► b ──► s        origin_of(s) = o
//!               ▲
//!   x ──────────┘              origin_of(b) = b   (two predecessors)
//! ```
//!
//! The walk is iterative with a visited set, so a malformed snapshot with a
//! connector cycle fails with [`GraphError::CycleDetected`] instead of looping.

use rustc_hash::FxHashSet;

use rn_core::SegmentId;

use crate::{GraphError, GraphResult, LinkGraphStore};

impl LinkGraphStore {
    /// The farthest unambiguous upstream segment of `segment`.
    ///
    /// Returns `Ok(None)` when `segment` is already its own origin: it has
    /// zero or several predecessors, or its single predecessor forks.
    pub fn resolve_origin(&self, segment: SegmentId) -> GraphResult<Option<SegmentId>> {
        self.get(segment)?;

        let mut visited = FxHashSet::default();
        visited.insert(segment);

        let mut current = segment;
        let mut origin = None;

        loop {
            let [pred] = self.predecessors(current) else { break };
            if self.successors(*pred).len() != 1 {
                break;
            }
            if !visited.insert(*pred) {
                return Err(GraphError::CycleDetected { start: segment, at: *pred });
            }
            origin = Some(*pred);
            current = *pred;
        }

        Ok(origin)
    }

    /// Like [`resolve_origin`](Self::resolve_origin) but returns `segment`
    /// itself when it is already the origin.
    pub fn origin_of(&self, segment: SegmentId) -> GraphResult<SegmentId> {
        Ok(self.resolve_origin(segment)?.unwrap_or(segment))
    }
}
