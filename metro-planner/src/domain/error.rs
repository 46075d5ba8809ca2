//! Domain error types.
//!
//! Every failure of the metro core is a deterministic function of the
//! input and the current state, reported as one of these values.

use super::{StationIndex, Weighting};

/// Errors returned by registry, graph and query operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetroError {
    /// Name did not resolve to a station
    #[error("station not found: {0}")]
    NotFound(String),

    /// Index does not name a station currently on the line
    #[error("invalid station index: {0}")]
    InvalidIndex(StationIndex),

    /// Route summary requested against line order
    #[error("invalid order of stations: {start} must come before {end}")]
    InvalidOrder {
        start: StationIndex,
        end: StationIndex,
    },

    /// No directed route connects the two stations
    #[error("no path from {from} to {to} by {weighting}")]
    NoPath {
        from: String,
        to: String,
        weighting: Weighting,
    },

    /// Another station already uses this name (case-insensitive)
    #[error("duplicate station name: {0}")]
    DuplicateName(String),
}
