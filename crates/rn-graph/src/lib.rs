//! `rn-graph` — the link/connector store and everything that reads its
//! adjacency directly.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`segment`]   | `Segment`, `ConnectorEnds`                                 |
//! | [`store`]     | `LinkGraphStore` (segments + adjacency index), `LinkGraphBuilder` |
//! | [`traversal`] | `resolve_origin`, `origin_of` on `LinkGraphStore`          |
//! | [`loader`]    | `load_segments_csv`, `load_segments_reader`                |
//! | [`locate`]    | `SegmentLocator` (R-tree world-position snapping)          |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod loader;
pub mod locate;
pub mod segment;
pub mod store;
pub mod traversal;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use loader::{load_segments_csv, load_segments_reader};
pub use locate::{SegmentLocator, WorldHit};
pub use segment::{ConnectorEnds, Segment};
pub use store::{LinkGraphBuilder, LinkGraphStore};
