//! Edge weighting selector.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Station;

/// Which of the two weights a query runs against.
///
/// Selects both the adjacency structure searched by the path finder and
/// the per-station line-order field summed into the path total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Physical distance in km.
    #[default]
    Distance,
    /// Travel time in minutes.
    Time,
}

impl Weighting {
    /// The line-order weight of `station` under this weighting.
    pub fn segment_of(self, station: &Station) -> u32 {
        match self {
            Weighting::Distance => station.distance_from_previous,
            Weighting::Time => station.time_from_previous,
        }
    }

    /// Unit label for rendering totals.
    pub fn unit(self) -> &'static str {
        match self {
            Weighting::Distance => "km",
            Weighting::Time => "minutes",
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Distance => f.write_str("distance"),
            Weighting::Time => f.write_str("time"),
        }
    }
}
