//! Unit tests for rn-graph.
//!
//! All tests use hand-built stores; the loader tests feed CSV through a
//! `Cursor` or a temporary file.

#[cfg(test)]
mod helpers {
    use rn_core::{Point2, SegmentId};
    use crate::{ConnectorEnds, LinkGraphBuilder, Segment};

    pub fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point2> {
        vec![Point2::new(x0, y0), Point2::new(x1, y1)]
    }

    pub fn link(b: &mut LinkGraphBuilder, id: u32, len: f64, pts: Vec<Point2>) {
        b.add_segment(Segment::link(SegmentId(id), "", len, vec![3.5], pts)).unwrap();
    }

    pub fn conn(b: &mut LinkGraphBuilder, id: u32, from: u32, to: u32, len: f64) {
        let ends = ConnectorEnds {
            from:        SegmentId(from),
            to:          SegmentId(to),
            from_offset: 0.0,
            to_offset:   0.0,
        };
        b.add_segment(Segment::connector(SegmentId(id), len, ends, vec![3.5], line(0.0, 0.0, len, 0.0)))
            .unwrap();
    }

    /// 1 ──10000──► 2
    pub fn scenario_a() -> LinkGraphBuilder {
        let mut b = LinkGraphBuilder::new();
        link(&mut b, 1, 40.0, line(0.0, 0.0, 40.0, 0.0));
        link(&mut b, 2, 60.0, line(45.0, 0.0, 105.0, 0.0));
        conn(&mut b, 10000, 1, 2, 5.0);
        b
    }
}

// ── Builder & store ───────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use rn_core::SegmentId;
    use crate::{GraphError, LinkGraphBuilder, Segment};
    use super::helpers::*;

    #[test]
    fn empty_build() {
        let store = LinkGraphBuilder::new().build().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.successors(SegmentId(1)).is_empty());
    }

    #[test]
    fn adjacency_index() {
        let store = scenario_a().build().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.successors(SegmentId(1)), &[SegmentId(2)]);
        assert_eq!(store.predecessors(SegmentId(2)), &[SegmentId(1)]);
        assert_eq!(store.connectors_from(SegmentId(1)), &[SegmentId(10000)]);
        assert_eq!(store.connectors_into(SegmentId(2)), &[SegmentId(10000)]);
        assert!(store.predecessors(SegmentId(1)).is_empty());
        assert_eq!(store.connector_between(SegmentId(1), SegmentId(2)).map(|c| c.id), Some(SegmentId(10000)));
        assert!(store.connector_between(SegmentId(2), SegmentId(1)).is_none());
    }

    #[test]
    fn iteration_is_ascending_and_restartable() {
        let store = scenario_a().build().unwrap();
        let first: Vec<_> = store.iter().map(|s| s.id.0).collect();
        let again: Vec<_> = store.iter().map(|s| s.id.0).collect();
        assert_eq!(first, vec![1, 2, 10000]);
        assert_eq!(first, again);
        assert_eq!(store.connectors().count(), 1);
    }

    #[test]
    fn parallel_connectors_count_twice() {
        let mut b = scenario_a();
        conn(&mut b, 10001, 1, 2, 5.0);
        let store = b.build().unwrap();
        assert_eq!(store.predecessors(SegmentId(2)).len(), 2);
        assert_eq!(store.connectors_into(SegmentId(2)), &[SegmentId(10000), SegmentId(10001)]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut b = scenario_a();
        let err = b
            .add_segment(Segment::link(SegmentId(1), "", 1.0, vec![3.0], line(0.0, 0.0, 1.0, 0.0)))
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateSegment(SegmentId(1))));
    }

    #[test]
    fn invalid_segments_rejected() {
        let mut b = LinkGraphBuilder::new();
        let no_lanes = Segment::link(SegmentId(1), "", 1.0, vec![], line(0.0, 0.0, 1.0, 0.0));
        assert!(matches!(b.add_segment(no_lanes), Err(GraphError::InvalidSegment { .. })));
        let short = Segment::link(SegmentId(2), "", 1.0, vec![3.0], line(0.0, 0.0, 1.0, 0.0)[..1].to_vec());
        assert!(matches!(b.add_segment(short), Err(GraphError::InvalidSegment { .. })));
        let negative = Segment::link(SegmentId(3), "", -1.0, vec![3.0], line(0.0, 0.0, 1.0, 0.0));
        assert!(matches!(b.add_segment(negative), Err(GraphError::InvalidSegment { .. })));
        let point = Segment::link(SegmentId(4), "", 1.0, vec![3.0], line(230.0, 0.0, 230.0, 0.0));
        assert!(matches!(b.add_segment(point), Err(GraphError::InvalidSegment { .. })));
        assert_eq!(b.segment_count(), 0);
    }

    #[test]
    fn repeated_points_with_some_length_are_accepted() {
        let mut b = LinkGraphBuilder::new();
        let mut pts = line(0.0, 0.0, 10.0, 0.0);
        let first = pts[0];
        pts.insert(1, first);
        let seg = Segment::link(SegmentId(1), "", 10.0, vec![3.0], pts);
        assert_eq!(seg.polyline_length(), 10.0);
        b.add_segment(seg).unwrap();
    }

    #[test]
    fn dangling_connector_rejected() {
        let mut b = LinkGraphBuilder::new();
        link(&mut b, 1, 10.0, line(0.0, 0.0, 10.0, 0.0));
        conn(&mut b, 10000, 1, 99, 5.0);
        let err = b.build().err().unwrap();
        assert!(matches!(
            err,
            GraphError::DanglingConnector { connector: SegmentId(10000), missing: SegmentId(99) }
        ));
    }

    #[test]
    fn self_loop_rejected() {
        let mut b = LinkGraphBuilder::new();
        link(&mut b, 1, 10.0, line(0.0, 0.0, 10.0, 0.0));
        conn(&mut b, 10000, 1, 1, 5.0);
        assert!(matches!(b.build().err(), Some(GraphError::SelfLoop(SegmentId(10000)))));
    }

    #[test]
    fn get_unknown_is_not_found() {
        let store = scenario_a().build().unwrap();
        assert!(matches!(store.get(SegmentId(7)), Err(GraphError::NotFound(SegmentId(7)))));
        assert!(!store.contains(SegmentId(7)));
    }
}

// ── Origin traversal ──────────────────────────────────────────────────────────

#[cfg(test)]
mod traversal {
    use rn_core::SegmentId;
    use crate::{GraphError, LinkGraphBuilder};
    use super::helpers::*;

    #[test]
    fn single_predecessor_resolves_upstream() {
        let store = scenario_a().build().unwrap();
        assert_eq!(store.resolve_origin(SegmentId(2)).unwrap(), Some(SegmentId(1)));
        assert_eq!(store.origin_of(SegmentId(2)).unwrap(), SegmentId(1));
    }

    #[test]
    fn merge_stops_the_walk() {
        let mut b = scenario_a();
        link(&mut b, 3, 20.0, line(40.0, -20.0, 45.0, 0.0));
        conn(&mut b, 10001, 3, 2, 5.0);
        let store = b.build().unwrap();
        assert_eq!(store.resolve_origin(SegmentId(2)).unwrap(), None);
        assert_eq!(store.origin_of(SegmentId(2)).unwrap(), SegmentId(2));
    }

    #[test]
    fn fork_stops_the_walk() {
        // 1 → 2 and 1 → 3: the predecessor forks, so 2 is its own origin.
        let mut b = scenario_a();
        link(&mut b, 3, 20.0, line(40.0, 0.0, 40.0, 20.0));
        conn(&mut b, 10001, 1, 3, 5.0);
        let store = b.build().unwrap();
        assert_eq!(store.resolve_origin(SegmentId(2)).unwrap(), None);
    }

    #[test]
    fn long_chain_reaches_the_head() {
        let mut b = LinkGraphBuilder::new();
        for id in 1..=5 {
            let x = f64::from(id) * 10.0;
            link(&mut b, id, 10.0, line(x, 0.0, x + 10.0, 0.0));
        }
        for id in 1..5 {
            conn(&mut b, 10000 + id, id, id + 1, 1.0);
        }
        let store = b.build().unwrap();
        assert_eq!(store.origin_of(SegmentId(5)).unwrap(), SegmentId(1));
        assert_eq!(store.origin_of(SegmentId(3)).unwrap(), SegmentId(1));
    }

    #[test]
    fn resolve_is_idempotent_on_its_result() {
        let store = scenario_a().build().unwrap();
        let y = store.resolve_origin(SegmentId(2)).unwrap().unwrap();
        assert_eq!(store.resolve_origin(y).unwrap(), None);
    }

    #[test]
    fn cycle_is_detected() {
        let mut b = LinkGraphBuilder::new();
        link(&mut b, 1, 10.0, line(0.0, 0.0, 10.0, 0.0));
        link(&mut b, 2, 10.0, line(10.0, 0.0, 0.0, 0.0));
        conn(&mut b, 10000, 1, 2, 1.0);
        conn(&mut b, 10001, 2, 1, 1.0);
        let store = b.build().unwrap();
        assert!(matches!(
            store.resolve_origin(SegmentId(2)),
            Err(GraphError::CycleDetected { start: SegmentId(2), .. })
        ));
    }

    #[test]
    fn unknown_segment_is_not_found() {
        let store = scenario_a().build().unwrap();
        assert!(matches!(store.resolve_origin(SegmentId(42)), Err(GraphError::NotFound(_))));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use rn_core::{Point2, SegmentId};
    use crate::{load_segments_csv, load_segments_reader, GraphError};

    const CSV: &str = "\
id,name,length,is_connector,from_segment,to_segment,from_offset,to_offset,lane_count,lane_widths,polyline
101,12-0-Right Start,40,false,,,,,2,3.5;3.25,0 0;40 0
102,12-0-Right,60,false,,,,,1,3.5,45 0;105 0
10005,,5,true,101,102,40,0,1,3.5,40 0;45 0
";

    #[test]
    fn parse_snapshot() {
        let store = load_segments_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(store.len(), 3);

        let s = store.get(SegmentId(101)).unwrap();
        assert_eq!(s.name, "12-0-Right Start");
        assert_eq!(s.lane_widths, vec![3.5, 3.25]);
        assert_eq!(s.polyline[1], Point2::new(40.0, 0.0));

        let c = store.get(SegmentId(10005)).unwrap();
        let ends = c.connector.unwrap();
        assert_eq!((ends.from, ends.to), (SegmentId(101), SegmentId(102)));
        assert_eq!(ends.from_offset, 40.0);
        assert_eq!(store.successors(SegmentId(101)), &[SegmentId(102)]);
    }

    #[test]
    fn lane_count_mismatch_is_parse_error() {
        let bad = CSV.replace("2,3.5;3.25", "3,3.5;3.25");
        assert!(matches!(load_segments_reader(Cursor::new(bad)), Err(GraphError::Parse(_))));
    }

    #[test]
    fn connector_without_ends_is_parse_error() {
        let bad = CSV.replace("true,101,102", "true,,102");
        assert!(matches!(load_segments_reader(Cursor::new(bad)), Err(GraphError::Parse(_))));
    }

    #[test]
    fn collapsed_polyline_fails_the_load() {
        let bad = CSV.replace("45 0;105 0", "230 0;230 0");
        assert!(matches!(
            load_segments_reader(Cursor::new(bad)),
            Err(GraphError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn bad_polyline_is_parse_error() {
        let bad = CSV.replace("45 0;105 0", "45 0;105");
        assert!(matches!(load_segments_reader(Cursor::new(bad)), Err(GraphError::Parse(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let store = load_segments_csv(file.path()).unwrap();
        assert_eq!(store.connectors().count(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_segments_csv(&dir.path().join("absent.csv")).err().unwrap();
        assert!(matches!(err, GraphError::Io(_)));
    }
}

// ── Spatial snapping ──────────────────────────────────────────────────────────

#[cfg(test)]
mod locate {
    use rn_core::{Point2, SegmentId};
    use crate::{LinkGraphBuilder, Segment, SegmentLocator};
    use super::helpers::line;

    fn two_lane_store() -> crate::LinkGraphStore {
        let mut b = LinkGraphBuilder::new();
        b.add_segment(Segment::link(SegmentId(1), "", 100.0, vec![3.0, 3.0], line(0.0, 0.0, 100.0, 0.0)))
            .unwrap();
        b.add_segment(Segment::link(SegmentId(2), "", 50.0, vec![3.0], line(0.0, 50.0, 50.0, 50.0)))
            .unwrap();
        b.build().unwrap()
    }

    #[test]
    fn snaps_to_right_lane() {
        let store = two_lane_store();
        let loc = SegmentLocator::new(&store);
        assert_eq!(loc.run_count(), 2);

        let hit = loc.snap(&store, Point2::new(30.0, -1.5), 3.0).unwrap();
        assert_eq!(hit.segment, SegmentId(1));
        assert_eq!(hit.lane, 1);
        assert!((hit.position - 30.0).abs() < 1e-9);
        assert!((hit.lateral + 1.5).abs() < 1e-9);
    }

    #[test]
    fn snaps_to_left_lane() {
        let store = two_lane_store();
        let loc = SegmentLocator::new(&store);
        let hit = loc.snap(&store, Point2::new(70.0, 1.5), 3.0).unwrap();
        assert_eq!(hit.lane, 2);
        assert!((hit.position - 70.0).abs() < 1e-9);
    }

    #[test]
    fn outside_radius_is_none() {
        let store = two_lane_store();
        let loc = SegmentLocator::new(&store);
        assert!(loc.snap(&store, Point2::new(30.0, 25.0), 3.0).is_none());
    }
}
