//! Planar coordinate type.
//!
//! Network polylines are in the simulation's local metric frame, so `Point2`
//! uses `f64` Cartesian coordinates rather than lat/lon.  Zone polygons are
//! built from offsets of a few metres on coordinates that can reach tens of
//! kilometres, which is why single precision is not enough here.

/// A point in the network's local Cartesian frame, in metres.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance(self, other: Point2) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading from `self` towards `other` in degrees, in `(-180, 180]`.
    #[inline]
    pub fn heading_deg(self, other: Point2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
