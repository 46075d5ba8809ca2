//! Queries over the metro line.
//!
//! Two independent ways of answering "how far from A to B":
//! a Dijkstra search over the registered route graph, and a forward
//! ride along line order summing each station's segment weights.

mod path;
mod summary;

pub use path::{PathFinder, ShortestPath};
pub use summary::{RouteSummary, summarize_range};
