//! WKT serialisation of zone polygons.
//!
//! The consuming engine expects a single-ring multipolygon: right-side
//! vertices forward, left-side vertices backward, closed on the first
//! right-side vertex.
//!
//! ```text
//! MULTIPOLYGON(((xr1 yr1, ..., xrN yrN, xlN ylN, ..., xl1 yl1, xr1 yr1)))
//! ```
//!
//! Coordinates use Rust's shortest round-trip `f64` formatting.

use std::fmt::Write;

use crate::ZonePolygon;

impl ZonePolygon {
    pub fn to_wkt(&self) -> String {
        let v = self.vertices();
        let mut out = String::with_capacity(32 + v.len() * 48);
        out.push_str("MULTIPOLYGON(((");
        for p in v.iter().map(|v| v.right).chain(v.iter().rev().map(|v| v.left)) {
            // Writing to a String cannot fail.
            let _ = write!(out, "{} {}, ", p.x, p.y);
        }
        if let Some(first) = v.first() {
            let _ = write!(out, "{} {}", first.right.x, first.right.y);
        }
        out.push_str(")))");
        out
    }
}
