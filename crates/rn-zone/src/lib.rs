//! `rn-zone` — boundary polygons around chains of segments.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`boundary`] | `build_boundary`, `ZonePolygon`, `BoundaryVertex`        |
//! | [`wkt`]      | `ZonePolygon::to_wkt`                                    |
//! | [`chain`]    | `clip_overlap`, `approach_chain`, `ApproachChain`        |
//! | [`node`]     | `build_zones`, `IntersectionZone`, `TravelSection`, `TurnClass` |
//! | [`error`]    | `ZoneError`, `ZoneResult<T>`                             |

pub mod boundary;
pub mod chain;
pub mod error;
pub mod node;
pub mod wkt;

#[cfg(test)]
mod tests;

pub use boundary::{build_boundary, BoundaryVertex, ZonePolygon};
pub use chain::{approach_chain, clip_overlap, ApproachChain};
pub use error::{ZoneError, ZoneResult};
pub use node::{build_zones, classify_turn, IntersectionZone, TravelSection, TurnClass, ZoneSet};
