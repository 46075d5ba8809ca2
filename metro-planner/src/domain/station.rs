//! Station record and index types.

use std::fmt;

use chrono::Duration;

/// Position of a station in line order.
///
/// Indices are not stable: removing a station renumbers every station
/// after it. Hold on to names, not indices, across removals.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::StationIndex;
///
/// let idx = StationIndex(2);
/// assert_eq!(idx.next(), StationIndex(3));
/// assert_eq!(idx.prev(), Some(StationIndex(1)));
/// assert_eq!(StationIndex(0).prev(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIndex(pub usize);

impl StationIndex {
    /// Returns the next index.
    pub fn next(self) -> Self {
        StationIndex(self.0 + 1)
    }

    /// Returns the previous index, if any.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(StationIndex)
    }
}

impl fmt::Display for StationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StationIndex {
    fn from(value: usize) -> Self {
        StationIndex(value)
    }
}

/// A station on the line.
///
/// The two segment fields describe the stretch of track between this
/// station and the one before it in line order. They are unrelated to
/// the weights of any route registered in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Display name, original casing preserved.
    pub name: String,
    /// Distance (km) from the previous station in line order.
    pub distance_from_previous: u32,
    /// Travel time (minutes) from the previous station in line order.
    pub time_from_previous: u32,
}

impl Station {
    /// Creates a new station record.
    pub fn new(
        name: impl Into<String>,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Self {
        Self {
            name: name.into(),
            distance_from_previous,
            time_from_previous,
        }
    }

    /// Lookup key used by the registry.
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    /// Travel time from the previous station as a `Duration`.
    pub fn time_from_previous_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.time_from_previous))
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Distance: {} km | Time: {} mins",
            self.name, self.distance_from_previous, self.time_from_previous
        )
    }
}

/// Normalise a station name for case-insensitive lookup.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let station = Station::new("Malir Halt", 2, 5);
        assert_eq!(
            station.to_string(),
            "Malir Halt | Distance: 2 km | Time: 5 mins"
        );
    }

    #[test]
    fn key_is_lowercase() {
        let station = Station::new("Jinnah Square", 4, 8);
        assert_eq!(station.key(), "jinnah square");
        assert_eq!(name_key("JINNAH square"), station.key());
    }

    #[test]
    fn duration_conversion() {
        let station = Station::new("Tower", 5, 12);
        assert_eq!(station.time_from_previous_duration(), Duration::minutes(12));
    }

    #[test]
    fn index_ordering() {
        assert!(StationIndex(1) < StationIndex(2));
        assert_eq!(StationIndex::from(4), StationIndex(4));
        assert_eq!(format!("{}", StationIndex(7)), "7");
    }
}
