//! Unit tests for rn-zone.

#[cfg(test)]
mod helpers {
    use rn_core::{Point2, SegmentId};
    use rn_graph::{ConnectorEnds, LinkGraphBuilder, LinkGraphStore, Segment};

    pub fn pts(xy: &[(f64, f64)]) -> Vec<Point2> {
        xy.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    pub fn close(a: Point2, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    fn link(b: &mut LinkGraphBuilder, id: u32, len: f64, widths: Vec<f64>, xy: &[(f64, f64)]) {
        b.add_segment(Segment::link(SegmentId(id), "", len, widths, pts(xy))).unwrap();
    }

    #[allow(clippy::too_many_arguments)]
    fn conn(
        b: &mut LinkGraphBuilder,
        id: u32,
        from: u32,
        to: u32,
        from_offset: f64,
        to_offset: f64,
        len: f64,
        xy: &[(f64, f64)],
    ) {
        let ends = ConnectorEnds { from: SegmentId(from), to: SegmentId(to), from_offset, to_offset };
        b.add_segment(Segment::connector(SegmentId(id), len, ends, vec![3.0], pts(xy))).unwrap();
    }

    /// ```text
    ///                                  4 (north)
    ///  1 ═══════════ 10000 ═══ 2 ═══►  3 (east)
    ///                                  5 (south)
    /// ```
    ///
    /// 1 keeps points up to 45 m, ending on (40, 0), which the connector
    /// repeats as its first point.
    pub fn junction() -> LinkGraphStore {
        let mut b = LinkGraphBuilder::new();
        link(&mut b, 1, 50.0, vec![3.5], &[(0.0, 0.0), (20.0, 0.0), (40.0, 0.0), (50.0, 0.0)]);
        link(&mut b, 2, 30.0, vec![3.5, 3.5], &[(50.0, 0.0), (55.0, 0.0), (80.0, 0.0)]);
        link(&mut b, 3, 30.0, vec![3.5], &[(90.0, 0.0), (120.0, 0.0)]);
        link(&mut b, 4, 35.0, vec![3.5], &[(85.0, 5.0), (85.0, 40.0)]);
        link(&mut b, 5, 0.5, vec![3.5], &[(85.0, -5.0), (85.0, -5.5)]);
        conn(&mut b, 10000, 1, 2, 45.0, 5.0, 15.0, &[(40.0, 0.0), (45.0, 0.0), (50.0, 0.0), (55.0, 0.0)]);
        conn(&mut b, 10001, 2, 3, 30.0, 0.0, 10.0, &[(80.0, 0.0), (90.0, 0.0)]);
        conn(&mut b, 10002, 2, 4, 30.0, 0.0, 7.0, &[(80.0, 0.0), (85.0, 5.0)]);
        conn(&mut b, 10003, 2, 5, 30.0, 0.0, 7.0, &[(80.0, 0.0), (85.0, -5.0)]);
        b.build().unwrap()
    }
}

// ── Boundary ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use rn_core::EngineConfig;
    use crate::{build_boundary, ZoneError};
    use super::helpers::*;

    #[test]
    fn scenario_e_right_angle_corner() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let poly = build_boundary(&points, &[4.0; 3], &EngineConfig::default()).unwrap();
        let v = poly.vertices();
        assert_eq!(v.len(), 3);

        // A: perpendicular to (1, 0); left scaled by 0.99.
        assert!(close(v[0].left, 0.0, 1.98));
        assert!(close(v[0].right, 0.0, -2.0));

        // B: mitred corner, not the midpoint of the neighbouring offsets.
        assert!(close(v[1].left, 8.02, 1.98));
        assert!(close(v[1].right, 12.0, -2.0));
        assert!(!close(v[1].right, 6.0, 4.0));

        // C: perpendicular to the last run (0, 1).
        assert!(close(v[2].left, 8.02, 10.0));
        assert!(close(v[2].right, 12.0, 10.0));
    }

    #[test]
    fn miter_distance_on_a_45_degree_bend() {
        let config = EngineConfig { left_margin: 1.0, ..EngineConfig::default() };
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0)]);
        let poly = build_boundary(&points, &[2.0; 3], &config).unwrap();
        let corner = poly.vertices()[1];
        let expected = 1.0 / 22.5_f64.to_radians().cos();
        assert!((corner.right.distance(points[1]) - expected).abs() < 1e-9);
        assert!((corner.left.distance(points[1]) - expected).abs() < 1e-9);
    }

    #[test]
    fn collinear_points_keep_vertex_count() {
        let points = pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (15.0, 0.0)]);
        let poly = build_boundary(&points, &[2.0, 2.0, 4.0, 4.0], &EngineConfig::default()).unwrap();
        assert_eq!(poly.len(), points.len());
        assert!(close(poly.vertices()[2].right, 10.0, -2.0));
        assert!(close(poly.vertices()[1].right, 5.0, -1.0));
    }

    #[test]
    fn vertical_collinear_run() {
        let points = pts(&[(0.0, 0.0), (0.0, 5.0), (0.0, 10.0)]);
        let poly = build_boundary(&points, &[2.0; 3], &EngineConfig::default()).unwrap();
        assert!(close(poly.vertices()[1].right, 1.0, 5.0));
        assert!(close(poly.vertices()[1].left, -0.99, 5.0));
    }

    #[test]
    fn vertical_then_horizontal() {
        let points = pts(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);
        let poly = build_boundary(&points, &[2.0; 3], &EngineConfig::default()).unwrap();
        // Turning right: the right side is the inner corner.
        assert!(close(poly.vertices()[1].right, 1.0, 9.0));
        assert!(close(poly.vertices()[1].left, -0.99, 10.99));
    }

    #[test]
    fn bad_input() {
        let c = EngineConfig::default();
        assert!(matches!(build_boundary(&pts(&[(0.0, 0.0)]), &[1.0], &c), Err(ZoneError::TooFewPoints(1))));
        assert!(matches!(
            build_boundary(&pts(&[(0.0, 0.0), (1.0, 0.0)]), &[1.0], &c),
            Err(ZoneError::WidthCountMismatch { points: 2, widths: 1 })
        ));
        assert!(matches!(
            build_boundary(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)]), &[1.0; 3], &c),
            Err(ZoneError::DegenerateSegment { index: 1 })
        ));
    }
}

// ── WKT ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wkt {
    use rn_core::EngineConfig;
    use crate::build_boundary;
    use super::helpers::pts;

    #[test]
    fn right_forward_left_backward_closed() {
        let poly = build_boundary(&pts(&[(0.0, 0.0), (10.0, 0.0)]), &[2.0, 2.0], &EngineConfig::default())
            .unwrap();
        assert_eq!(poly.to_wkt(), "MULTIPOLYGON(((0 -1, 10 -1, 10 0.99, 0 0.99, 0 -1)))");
    }

    #[test]
    fn ring_has_two_entries_per_vertex_plus_closure() {
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let poly = build_boundary(&points, &[3.0; 4], &EngineConfig::default()).unwrap();
        let wkt = poly.to_wkt();
        assert!(wkt.starts_with("MULTIPOLYGON((("));
        assert!(wkt.ends_with(")))"));
        assert_eq!(wkt.matches(", ").count(), 2 * points.len());
    }
}

// ── Chains ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod chain {
    use rn_core::SegmentId;
    use crate::{approach_chain, clip_overlap, ZoneError};
    use super::helpers::*;

    #[test]
    fn clip_index() {
        let store = junction();
        let a = store.get(SegmentId(1)).unwrap();
        let c = store.get(SegmentId(10000)).unwrap();
        // limit 45: runs end at 20, 40, 50.
        assert_eq!(clip_overlap(a, c, 5.0).unwrap(), 2);
        // limit 40 is reached exactly at the end of the second run.
        assert_eq!(clip_overlap(a, c, 10.0).unwrap(), 1);
        assert_eq!(clip_overlap(a, c, 60.0).unwrap(), 0);
        assert_eq!(clip_overlap(a, c, -100.0).unwrap(), 3);
    }

    #[test]
    fn clip_requires_adjacency() {
        let store = junction();
        let a = store.get(SegmentId(1)).unwrap();
        let b = store.get(SegmentId(3)).unwrap();
        assert!(matches!(clip_overlap(a, b, 0.0), Err(ZoneError::NotAdjacent { .. })));
    }

    #[test]
    fn stitched_through_connector() {
        let store = junction();
        let chain = approach_chain(&store, SegmentId(2)).unwrap();
        assert_eq!(chain.origin, SegmentId(1));
        assert_eq!(chain.connectors, vec![SegmentId(10000)]);

        let xs: Vec<f64> = chain.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 20.0, 40.0, 45.0, 55.0, 80.0]);
        assert_eq!(chain.widths, vec![3.5, 3.5, 3.5, 3.0, 7.0, 7.0]);
    }

    #[test]
    fn own_origin_is_plain_polyline() {
        let store = junction();
        let chain = approach_chain(&store, SegmentId(1)).unwrap();
        assert_eq!(chain.origin, SegmentId(1));
        assert!(chain.connectors.is_empty());
        assert_eq!(chain.points.len(), 4);
        assert!(chain.widths.iter().all(|&w| w == 3.5));
    }
}

// ── Zones ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod node {
    use rn_core::{Diagnostic, EngineConfig, JunctionId, SegmentId, SignalHeadId, SignalId};
    use rn_signal::{head_label, PhaseType, SignalPlacement};
    use crate::{build_zones, classify_turn, TurnClass};
    use super::helpers::junction;

    fn head(n: u32, segment: u32, sequence: u32, lane: usize) -> SignalPlacement {
        SignalPlacement {
            head: SignalHeadId(n),
            label: head_label(JunctionId(3), PhaseType::Two, sequence),
            signal: SignalId(1),
            junction: JunctionId(3),
            sequence,
            segment: SegmentId(segment),
            lane,
            position: 27.0,
        }
    }

    #[test]
    fn turn_classes() {
        assert_eq!(classify_turn(0.0, 0.0, 30.0), TurnClass::Straight);
        assert_eq!(classify_turn(0.0, 30.0, 30.0), TurnClass::Straight);
        assert_eq!(classify_turn(0.0, 45.0, 30.0), TurnClass::Left);
        assert_eq!(classify_turn(0.0, -90.0, 30.0), TurnClass::Right);
        assert_eq!(classify_turn(0.0, 180.0, 30.0), TurnClass::UTurn);
        assert_eq!(classify_turn(170.0, -170.0, 30.0), TurnClass::Straight);
        assert_eq!(classify_turn(0.0, 330.0, 30.0), TurnClass::Straight);
    }

    #[test]
    fn one_zone_per_signal_segment() {
        let store = junction();
        let set = build_zones(&store, &[head(1, 2, 1, 1), head(2, 2, 1, 2)], &EngineConfig::default())
            .unwrap();
        assert_eq!(set.zones().len(), 1);
        assert!(set.diagnostics().is_empty());

        let zone = &set.zones()[0];
        assert_eq!(zone.name, "3_1");
        assert_eq!(zone.origin, SegmentId(1));
        assert_eq!(zone.polygon.len(), 6);
        assert!(zone.wkt().starts_with("MULTIPOLYGON((("));
        assert_eq!(
            zone.members,
            [2, 10001, 3, 10002, 4, 10003, 5].map(SegmentId).to_vec()
        );
    }

    #[test]
    fn travel_sections_per_movement() {
        let store = junction();
        let set = build_zones(&store, &[head(1, 2, 1, 1)], &EngineConfig::default()).unwrap();
        let sections = &set.get(SegmentId(2)).unwrap().sections;

        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["3_1(S)", "3_1(L)", "3_1(R)"]);
        assert!(sections.iter().all(|s| s.start == SegmentId(1) && s.start_position == 1.0));
        assert!(sections.iter().all(|s| s.signal_segment == SegmentId(2)));
        // Segment 5 is shorter than 1 m.
        assert_eq!(sections[2].end, SegmentId(5));
        assert_eq!(sections[2].end_position, 0.25);
    }

    #[test]
    fn conflicting_zone_is_reported_once() {
        let store = junction();
        let heads = [head(1, 2, 1, 1), head(2, 2, 2, 1), head(3, 2, 2, 2)];
        let set = build_zones(&store, &heads, &EngineConfig::default()).unwrap();
        assert_eq!(set.zones().len(), 1);
        assert_eq!(set.zones()[0].sequence, 1);
        assert_eq!(set.diagnostics(), &[Diagnostic::DuplicateZone { segment: SegmentId(2) }]);
    }
}
