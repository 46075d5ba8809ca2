//! Line-order route summaries.
//!
//! Models boarding at one station and riding forward to another without
//! changing. Only the per-station segment weights are used; the route
//! graph is never consulted.

use std::fmt;

use chrono::Duration;

use crate::domain::{MetroError, StationIndex};
use crate::stations::StationRegistry;

/// Stations passed and cumulative totals for a forward ride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Names of the stations after the boarding station, up to and
    /// including the alighting station.
    pub stations: Vec<String>,
    /// Total distance in km.
    pub total_distance: u64,
    /// Total ride time.
    pub travel_time: Duration,
}

impl RouteSummary {
    /// Total ride time in whole minutes.
    pub fn total_time_mins(&self) -> i64 {
        self.travel_time.num_minutes()
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route Information:")?;
        for name in &self.stations {
            writeln!(f, " - {name}")?;
        }
        writeln!(f)?;
        writeln!(f, "Total Distance: {} km", self.total_distance)?;
        write!(f, "Total Time: {} minutes", self.total_time_mins())
    }
}

/// Sum segment weights over `stations[start+1..=end]`.
///
/// `start` must be strictly before `end` in line order.
pub fn summarize_range(
    registry: &StationRegistry,
    start: StationIndex,
    end: StationIndex,
) -> Result<RouteSummary, MetroError> {
    if start >= end {
        return Err(MetroError::InvalidOrder { start, end });
    }
    if !registry.contains_index(end) {
        return Err(MetroError::InvalidIndex(end));
    }

    let ridden = &registry.stations()[start.next().0..=end.0];
    Ok(RouteSummary {
        stations: ridden.iter().map(|s| s.name.clone()).collect(),
        total_distance: ridden
            .iter()
            .map(|s| u64::from(s.distance_from_previous))
            .sum(),
        travel_time: ridden
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.time_from_previous_duration()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StationRegistry {
        let mut registry = StationRegistry::new();
        registry.register("S0", 0, 0).unwrap();
        registry.register("S1", 2, 5).unwrap();
        registry.register("S2", 3, 7).unwrap();
        registry
    }

    #[test]
    fn sums_forward_range() {
        let summary = summarize_range(&registry(), StationIndex(0), StationIndex(2)).unwrap();
        assert_eq!(summary.stations, vec!["S1", "S2"]);
        assert_eq!(summary.total_distance, 5);
        assert_eq!(summary.travel_time, Duration::minutes(12));
        assert_eq!(summary.total_time_mins(), 12);
    }

    #[test]
    fn adjacent_stations() {
        let summary = summarize_range(&registry(), StationIndex(1), StationIndex(2)).unwrap();
        assert_eq!(summary.stations, vec!["S2"]);
        assert_eq!(summary.total_distance, 3);
        assert_eq!(summary.total_time_mins(), 7);
    }

    #[test]
    fn equal_indices_rejected() {
        assert_eq!(
            summarize_range(&registry(), StationIndex(1), StationIndex(1)),
            Err(MetroError::InvalidOrder {
                start: StationIndex(1),
                end: StationIndex(1),
            })
        );
    }

    #[test]
    fn backwards_rejected() {
        assert!(matches!(
            summarize_range(&registry(), StationIndex(2), StationIndex(0)),
            Err(MetroError::InvalidOrder { .. })
        ));
    }

    #[test]
    fn end_past_line_rejected() {
        assert_eq!(
            summarize_range(&registry(), StationIndex(1), StationIndex(3)),
            Err(MetroError::InvalidIndex(StationIndex(3)))
        );
    }

    #[test]
    fn display_format() {
        let summary = summarize_range(&registry(), StationIndex(0), StationIndex(2)).unwrap();
        assert_eq!(
            summary.to_string(),
            "Route Information:\n - S1\n - S2\n\nTotal Distance: 5 km\nTotal Time: 12 minutes"
        );
    }
}
