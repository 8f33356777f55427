//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; ids
//! come from the simulation snapshot and the road description, so they are
//! never allocated here.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer as handed over by the external collaborator.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Number of a link or connector in the simulation network.
    pub struct SegmentId(u32);
}

typed_id! {
    /// Road id from the road description, recovered from segment names.
    pub struct RoadId(u32);
}

typed_id! {
    /// Signal id shared by a signal and all of its references.
    pub struct SignalId(u32);
}

typed_id! {
    /// Signal controller id from the road description.
    pub struct ControllerId(u32);
}

typed_id! {
    /// Junction id from the road description.
    pub struct JunctionId(u32);
}

typed_id! {
    /// Sequential signal head number assigned by the placement resolver,
    /// starting at 1.
    pub struct SignalHeadId(u32);
}

// ── Road identity ─────────────────────────────────────────────────────────────

/// Travel direction of a reconstructed road.
///
/// Segment names carry `Left`/`Right` tokens; `Default` marks a name whose
/// direction token could not be classified.  `Default` never keys a road.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoadDirection {
    Left,
    Right,
    Default,
}

impl RoadDirection {
    /// Direction implied by a signed lateral offset: `t < 0` lies right of the
    /// reference line, everything else left.
    #[inline]
    pub fn from_lateral(t: f64) -> Self {
        if t < 0.0 { RoadDirection::Right } else { RoadDirection::Left }
    }
}

impl fmt::Display for RoadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RoadDirection::Left    => "Left",
            RoadDirection::Right   => "Right",
            RoadDirection::Default => "Default",
        };
        f.write_str(s)
    }
}

/// Map key of a reconstructed road: at most one road per `(road, direction)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadKey {
    pub road: RoadId,
    pub direction: RoadDirection,
}

impl RoadKey {
    #[inline]
    pub fn new(road: RoadId, direction: RoadDirection) -> Self {
        Self { road, direction }
    }
}

impl fmt::Display for RoadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "road {} {}", self.road.0, self.direction)
    }
}
