//! Segment naming convention.
//!
//! When the simulation engine imports a road description it names every
//! ordinary segment `<road>-<position>-<direction>`:
//!
//! ```text
//! "Road 12-0-Right Start"   road 12, start segment, Right
//! "12-0-Right"              road 12, start segment, Right
//! "12-3-Right End"          road 12, Right
//! "7-0-Left"                road 7, start segment, Left
//! ```
//!
//! * `road` keeps only the digits of the first field (`"Road 12"` → 12).
//! * `direction` is `Right` if the third field contains `"Right"`, `Left` if
//!   it contains `"Left"`, `Default` otherwise.
//! * A segment is the road's start when `position` is exactly `"0"` and the
//!   third field is exactly `Right`, `Right Start`, `Left` or `Left Start`.
//!
//! Everything convention-specific lives in this module.

use thiserror::Error;

use rn_core::{RoadDirection, RoadId};

/// The metadata encoded in a segment name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SegmentName {
    pub road: RoadId,
    pub direction: RoadDirection,
    pub is_start: bool,
}

/// Why a name does not follow the convention.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("expected 3 '-'-separated fields, found {0}")]
    FieldCount(usize),

    #[error("no road number in {0:?}")]
    NoRoadNumber(String),

    #[error("road number {0:?} out of range")]
    RoadNumberRange(String),
}

/// Parse `<road>-<position>-<direction>`.
///
/// An unrecognised direction token is not an error; it yields
/// [`RoadDirection::Default`] and the caller decides what to do with it.
pub fn parse_segment_name(name: &str) -> Result<SegmentName, NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Empty);
    }

    let fields: Vec<&str> = name.split('-').collect();
    let [road, position, token, ..] = fields.as_slice() else {
        return Err(NameError::FieldCount(fields.len()));
    };

    let digits: String = road.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(NameError::NoRoadNumber(road.to_string()));
    }
    let road = digits
        .parse::<u32>()
        .map(RoadId)
        .map_err(|_| NameError::RoadNumberRange(digits.clone()))?;

    let direction = if token.contains("Right") {
        RoadDirection::Right
    } else if token.contains("Left") {
        RoadDirection::Left
    } else {
        RoadDirection::Default
    };

    let is_start = *position == "0"
        && matches!(*token, "Right" | "Right Start" | "Left" | "Left Start");

    Ok(SegmentName { road, direction, is_start })
}
