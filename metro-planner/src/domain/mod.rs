//! Domain types for the metro line planner.
//!
//! Stations, their line-order indices, the weighting selector shared by
//! the graph and the path finder, and the error taxonomy of the core.

mod error;
mod station;
mod weighting;

pub use error::MetroError;
pub use station::{Station, StationIndex, name_key};
pub use weighting::Weighting;
