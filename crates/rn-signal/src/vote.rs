//! The placement vote.
//!
//! Descriptors for the same signal often disagree about which segment the
//! signal belongs on.  Each candidate segment "votes" for the segments
//! feeding it through a connector, and the segment the signal finally sits
//! on is picked by the first tier that matches:
//!
//! | Tier                 | Condition                                        | Segment        |
//! |----------------------|--------------------------------------------------|----------------|
//! | `Majority`           | `ceil(total / 2) <= top count`                   | top voter      |
//! | `PrimaryMatchesTop`  | primary candidate segment is the top voter       | primary        |
//! | `Repeated`           | top count >= 2                                   | top voter      |
//! | `Primary`            | there is a primary candidate                     | primary        |
//!
//! The top voter is the first segment, in first-seen order, with the highest
//! count.  Everything here is a pure function of its inputs.

use rn_core::SegmentId;
use rn_graph::LinkGraphStore;

use crate::{Candidate, SignalVariant};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoteTier {
    Majority,
    PrimaryMatchesTop,
    Repeated,
    Primary,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Vote {
    pub segment: SegmentId,
    pub tier: VoteTier,
}

/// Count, over all candidates, the segments feeding each candidate segment.
///
/// One entry per connector, so parallel connectors vote twice.  The result
/// keeps first-seen order.
pub fn tally_voters(store: &LinkGraphStore, candidates: &[Candidate]) -> Vec<(SegmentId, usize)> {
    let mut tally: Vec<(SegmentId, usize)> = Vec::new();
    for c in candidates {
        for &pred in store.predecessors(c.segment) {
            match tally.iter_mut().find(|(s, _)| *s == pred) {
                Some((_, n)) => *n += 1,
                None => tally.push((pred, 1)),
            }
        }
    }
    tally
}

/// Pick the final segment, or `None` when no tier applies.
pub fn decide(tally: &[(SegmentId, usize)], candidates: &[Candidate]) -> Option<Vote> {
    let primary = candidates
        .iter()
        .find(|c| c.variant == SignalVariant::Primary)
        .map(|c| c.segment);

    let total: usize = tally.iter().map(|(_, n)| n).sum();
    let top = tally.iter().fold(None, |best: Option<(SegmentId, usize)>, &(s, n)| match best {
        Some((_, m)) if m >= n => best,
        _ => Some((s, n)),
    });

    if let Some((segment, max)) = top {
        if total.div_ceil(2) <= max {
            return Some(Vote { segment, tier: VoteTier::Majority });
        }
        if primary == Some(segment) {
            return Some(Vote { segment, tier: VoteTier::PrimaryMatchesTop });
        }
        if max >= 2 {
            return Some(Vote { segment, tier: VoteTier::Repeated });
        }
    }
    primary.map(|segment| Vote { segment, tier: VoteTier::Primary })
}
