//! Synthetic four-leg signalised junction.
//!
//! Legs are numbered counter-clockwise from the west.  Every leg has a
//! two-lane approach (`100 + leg`) heading into the junction and a one-lane
//! exit (`200 + leg`) heading away, driving on the right.  Each approach
//! connects straight on, left and right.
//!
//! ```text
//!                  3
//!                 ║ ║
//!          0  ════╬═╬════  2
//!                 ║ ║
//!                  1
//! ```
//!
//! Roads: legs 0/2 form road 1, legs 1/3 road 2; approaches 0 and 1 run in
//! the Right direction, 2 and 3 in the Left direction.  Junction 7 has two
//! phases: road 1 first, then road 2.

use anyhow::Result;

use rn_core::{ControllerId, JunctionId, Point2, RoadId, SegmentId, SignalId};
use rn_graph::{ConnectorEnds, LinkGraphBuilder, LinkGraphStore, Segment};
use rn_signal::{ControllerDescriptor, SignalDescriptor, SignalRecords, SignalVariant};

const HALF_LANE: f64 = 1.75;
const APPROACH_LEN: f64 = 190.0;

/// Leg-local `(x, y)` rotated into world coordinates.  In leg-local
/// coordinates the approach comes from the west, heading east.
fn world(leg: u32, x: f64, y: f64) -> Point2 {
    let (c, s) = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)][leg as usize % 4];
    Point2::new(c * x - s * y, s * x + c * y)
}

fn road_of(leg: u32) -> u32 {
    if leg % 2 == 0 { 1 } else { 2 }
}

fn direction_of(leg: u32) -> &'static str {
    if leg < 2 { "Right" } else { "Left" }
}

pub fn build_store() -> Result<LinkGraphStore> {
    let mut b = LinkGraphBuilder::new();

    for leg in 0..4 {
        let approach = Segment::link(
            SegmentId(100 + leg),
            format!("{}-0-{} Start", road_of(leg), direction_of(leg)),
            APPROACH_LEN,
            vec![3.5, 3.5],
            vec![
                world(leg, -200.0, -HALF_LANE),
                world(leg, -100.0, -HALF_LANE),
                world(leg, -10.0, -HALF_LANE),
            ],
        );
        b.add_segment(approach)?;

        // The straight-on approach is on the opposite leg.
        let through = (leg + 2) % 4;
        let exit = Segment::link(
            SegmentId(200 + leg),
            format!("{}-1-{}", road_of(through), direction_of(through)),
            APPROACH_LEN,
            vec![3.5],
            vec![world(leg, -10.0, HALF_LANE), world(leg, -200.0, HALF_LANE)],
        );
        b.add_segment(exit)?;
    }

    // Straight on, left, right.
    for leg in 0..4 {
        for turn in [2, 3, 1] {
            let to = (leg + turn) % 4;
            let start = world(leg, -10.0, -HALF_LANE);
            let end = world(to, -10.0, HALF_LANE);
            let ends = ConnectorEnds {
                from:        SegmentId(100 + leg),
                to:          SegmentId(200 + to),
                from_offset: APPROACH_LEN,
                to_offset:   0.0,
            };
            let id = SegmentId(1000 + 10 * leg + to);
            b.add_segment(Segment::connector(id, start.distance(end), ends, vec![3.5], vec![start, end]))?;
        }
    }

    Ok(b.build()?)
}

pub fn signal_records() -> Result<SignalRecords> {
    let descriptors = (0..4)
        .map(|leg| SignalDescriptor {
            signal:      SignalId(leg + 1),
            road:        RoadId(road_of(leg)),
            s:           150.0,
            t:           if leg < 2 { -3.0 } else { 3.0 },
            orientation: if leg < 2 { "-".into() } else { "+".into() },
            variant:     SignalVariant::Primary,
        })
        .collect();

    let controllers = vec![
        ControllerDescriptor::new(ControllerId(70), JunctionId(7), 0),
        ControllerDescriptor::new(ControllerId(71), JunctionId(7), 1),
    ];

    // Signal n sits on leg n - 1.
    let membership = vec![
        (ControllerId(70), SignalId(1)),
        (ControllerId(70), SignalId(3)),
        (ControllerId(71), SignalId(2)),
        (ControllerId(71), SignalId(4)),
    ];

    Ok(SignalRecords::new(descriptors, controllers, membership)?)
}
