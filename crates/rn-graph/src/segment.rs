//! Segment records: ordinary links and the short connectors joining them.

use rn_core::{Point2, SegmentId};

/// Endpoints of a connector segment.
///
/// `from_offset` is the position on `from` where the connector leaves;
/// `to_offset` is the position on `to` where it lands.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectorEnds {
    pub from: SegmentId,
    pub to: SegmentId,
    pub from_offset: f64,
    pub to_offset: f64,
}

/// One directed piece of road geometry.
///
/// `lane_widths[i]` is the width of lane `i + 1`, lane 1 being the rightmost
/// in the direction of travel.  The lane count is `lane_widths.len()`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id: SegmentId,
    /// Free text.  Ordinary segments imported from a road description carry
    /// `<road>-<position>-<direction>` here; connectors usually have none.
    pub name: String,
    /// Length in metres as reported by the simulation engine.
    pub length: f64,
    /// `Some` for connectors.
    pub connector: Option<ConnectorEnds>,
    pub lane_widths: Vec<f64>,
    /// At least two points, in the direction of travel.
    pub polyline: Vec<Point2>,
}

impl Segment {
    /// An ordinary (non-connector) segment.
    pub fn link(
        id: SegmentId,
        name: impl Into<String>,
        length: f64,
        lane_widths: Vec<f64>,
        polyline: Vec<Point2>,
    ) -> Self {
        Self { id, name: name.into(), length, connector: None, lane_widths, polyline }
    }

    /// A connector from `ends.from` to `ends.to`.
    pub fn connector(
        id: SegmentId,
        length: f64,
        ends: ConnectorEnds,
        lane_widths: Vec<f64>,
        polyline: Vec<Point2>,
    ) -> Self {
        Self { id, name: String::new(), length, connector: Some(ends), lane_widths, polyline }
    }

    #[inline]
    pub fn is_connector(&self) -> bool {
        self.connector.is_some()
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_widths.len()
    }

    /// Sum of all lane widths.
    pub fn total_width(&self) -> f64 {
        self.lane_widths.iter().sum()
    }

    /// Length of the polyline itself, which can differ slightly from
    /// [`length`](Self::length).
    pub fn polyline_length(&self) -> f64 {
        self.polyline.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Heading in degrees of the final polyline run.
    pub fn final_heading_deg(&self) -> f64 {
        let n = self.polyline.len();
        self.polyline[n - 2].heading_deg(self.polyline[n - 1])
    }

    /// Reason this record is unusable, if any.
    pub(crate) fn defect(&self) -> Option<String> {
        if !self.length.is_finite() || self.length < 0.0 {
            return Some(format!("length {} is not a non-negative number", self.length));
        }
        if self.lane_widths.is_empty() {
            return Some("no lanes".into());
        }
        if self.lane_widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Some("lane widths must be positive".into());
        }
        if self.polyline.len() < 2 {
            return Some(format!("polyline has {} points, need at least 2", self.polyline.len()));
        }
        if self.polyline.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Some("polyline contains a non-finite coordinate".into());
        }
        if self.polyline_length() == 0.0 {
            return Some("polyline points all coincide".into());
        }
        None
    }
}
