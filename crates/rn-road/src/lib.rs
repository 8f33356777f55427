//! `rn-road` — logical roads rebuilt from segment names.
//!
//! A road is a `(road id, direction)` key plus the ordered chain of segments
//! (ordinary segments interleaved with the connectors joining them) that the
//! simulation engine created when it imported the road description.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`naming`]      | `parse_segment_name`, `SegmentName`, `NameError`      |
//! | [`reconstruct`] | `reconstruct`, `RoadMap`, `Road`                      |
//! | [`position`]    | `RoadMap::walk`, `RoadMap::locate`                    |
//! | [`error`]       | `RoadError`, `RoadResult<T>`                          |

pub mod error;
pub mod naming;
pub mod position;
pub mod reconstruct;


pub use error::{RoadError, RoadResult};
pub use naming::{parse_segment_name, NameError, SegmentName};
pub use position::{LaneLocation, RoadPosition};
pub use reconstruct::{reconstruct, Road, RoadMap};
