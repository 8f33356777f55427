//! Offset boundary of a point chain.
//!
//! Every chain point becomes one [`BoundaryVertex`]: a left and a right point
//! `width / 2` away from the centre line.  The left offset is additionally
//! scaled by `EngineConfig::left_margin` so adjacent zones never share an
//! edge.
//!
//! * End points are offset perpendicular to their only run.
//! * Interior points get a mitred corner: the offset line of the incoming
//!   run (through the offset of the previous point) is intersected with the
//!   offset line of the outgoing run (through the offset of the next point).
//!   Both lines use the same width, the one at the corner point.
//! * When the two runs have the same slope (rounded to
//!   `EngineConfig::slope_precision` decimals) there is no corner and the
//!   point is offset perpendicular to the incoming run.
//!
//! ```text
//!            left ───────────┐
//!    ●───────────────────●   │          ● chain point
//!            right ──────┐   │
//!                        │ ● │
//! ```

use rn_core::{EngineConfig, Point2};

use crate::{ZoneError, ZoneResult};

/// Left and right boundary points for one chain point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryVertex {
    pub left: Point2,
    pub right: Point2,
}

/// One boundary vertex per input point, in chain order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZonePolygon {
    vertices: Vec<BoundaryVertex>,
}

impl ZonePolygon {
    pub fn vertices(&self) -> &[BoundaryVertex] {
        &self.vertices
    }

    /// Never zero; a polygon is built from at least two points.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Build the boundary of `points`, with `widths[i]` the full width at
/// `points[i]`.
pub fn build_boundary(
    points: &[Point2],
    widths: &[f64],
    config: &EngineConfig,
) -> ZoneResult<ZonePolygon> {
    let n = points.len();
    if n < 2 {
        return Err(ZoneError::TooFewPoints(n));
    }
    if widths.len() != n {
        return Err(ZoneError::WidthCountMismatch { points: n, widths: widths.len() });
    }
    if let Some(index) = points.windows(2).position(|w| w[0] == w[1]) {
        return Err(ZoneError::DegenerateSegment { index });
    }

    let margin = config.left_margin;
    let mut vertices = Vec::with_capacity(n);

    vertices.push(offset(points[0], direction(points[0], points[1]), widths[0] / 2.0, margin));

    for i in 1..n - 1 {
        let (a, b, c) = (points[i - 1], points[i], points[i + 1]);
        let half = widths[i] / 2.0;
        let (d_in, d_out) = (direction(a, b), direction(b, c));

        let m_in = config.round_slope(slope(a, b));
        let m_out = config.round_slope(slope(b, c));

        if parallel(m_in, m_out) {
            vertices.push(offset(b, d_in, half, margin));
            continue;
        }

        let before = offset(a, d_in, half, margin);
        let after = offset(c, d_out, half, margin);
        vertices.push(BoundaryVertex {
            left:  intersect(m_in, before.left, m_out, after.left),
            right: intersect(m_in, before.right, m_out, after.right),
        });
    }

    vertices.push(offset(points[n - 1], direction(points[n - 2], points[n - 1]), widths[n - 1] / 2.0, margin));

    Ok(ZonePolygon { vertices })
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Unit vector from `a` to `b`.  Callers guarantee `a != b`.
fn direction(a: Point2, b: Point2) -> (f64, f64) {
    let len = a.distance(b);
    ((b.x - a.x) / len, (b.y - a.y) / len)
}

/// Raw slope `dy / dx`; infinite for vertical runs.
fn slope(a: Point2, b: Point2) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

fn parallel(m1: f64, m2: f64) -> bool {
    m1 == m2 || (m1.is_infinite() && m2.is_infinite())
}

fn offset(p: Point2, (dx, dy): (f64, f64), half: f64, margin: f64) -> BoundaryVertex {
    BoundaryVertex {
        left:  Point2::new(p.x - dy * half * margin, p.y + dx * half * margin),
        right: Point2::new(p.x + dy * half, p.y - dx * half),
    }
}

/// Intersection of the line through `p1` with slope `m1` and the line
/// through `p2` with slope `m2`.  The slopes must differ.
fn intersect(m1: f64, p1: Point2, m2: f64, p2: Point2) -> Point2 {
    if m1.is_infinite() {
        return Point2::new(p1.x, m2 * (p1.x - p2.x) + p2.y);
    }
    if m2.is_infinite() {
        return Point2::new(p2.x, m1 * (p2.x - p1.x) + p1.y);
    }
    let x = (m1 * p1.x - m2 * p2.x - p1.y + p2.y) / (m1 - m2);
    Point2::new(x, m1 * (x - p1.x) + p1.y)
}
