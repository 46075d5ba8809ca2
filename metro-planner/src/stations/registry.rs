//! Ordered station registry with case-insensitive lookup.

use std::collections::HashMap;

use crate::domain::{MetroError, Station, StationIndex, name_key};

/// Stations in line order plus a lowercase name → index map.
///
/// The map is kept exactly inverse to the sequence: every station appears
/// once and its mapped index is its position in line order.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    index_by_key: HashMap<String, StationIndex>,
}

impl StationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Append a station to the end of the line.
    ///
    /// Names are compared case-insensitively; a clash is rejected rather
    /// than shadowing the existing entry.
    pub fn register(
        &mut self,
        name: &str,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Result<StationIndex, MetroError> {
        let key = name_key(name);
        if self.index_by_key.contains_key(&key) {
            return Err(MetroError::DuplicateName(name.to_string()));
        }

        let index = StationIndex(self.stations.len());
        self.stations
            .push(Station::new(name, distance_from_previous, time_from_previous));
        self.index_by_key.insert(key, index);
        Ok(index)
    }

    /// Resolve a name (any casing) to its current index.
    pub fn resolve(&self, name: &str) -> Result<StationIndex, MetroError> {
        self.index_by_key
            .get(&name_key(name))
            .copied()
            .ok_or_else(|| MetroError::NotFound(name.to_string()))
    }

    /// Look up a station by index.
    pub fn get(&self, index: StationIndex) -> Option<&Station> {
        self.stations.get(index.0)
    }

    /// Look up a station by index, failing with `InvalidIndex`.
    pub fn station(&self, index: StationIndex) -> Result<&Station, MetroError> {
        self.get(index).ok_or(MetroError::InvalidIndex(index))
    }

    /// Returns true if `index` names a registered station.
    pub fn contains_index(&self, index: StationIndex) -> bool {
        index.0 < self.stations.len()
    }

    /// Stations in line order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// 1-based enumeration of the line, for display.
    pub fn all(&self) -> impl Iterator<Item = (usize, &Station)> {
        self.stations.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Remove a station by name.
    ///
    /// Returns the index it occupied so the caller can cascade the same
    /// renumbering into the graph.
    pub fn remove(&mut self, name: &str) -> Result<(StationIndex, Station), MetroError> {
        let index = self.resolve(name)?;
        let station = self.remove_at(index)?;
        Ok((index, station))
    }

    /// Remove the station at `index`, shifting every later station down.
    pub fn remove_at(&mut self, index: StationIndex) -> Result<Station, MetroError> {
        if !self.contains_index(index) {
            return Err(MetroError::InvalidIndex(index));
        }

        let station = self.stations.remove(index.0);
        self.index_by_key.remove(&station.key());
        self.reindex_from(index.0);
        Ok(station)
    }

    /// Change the line-order weights of an existing station.
    pub fn update(
        &mut self,
        name: &str,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Result<&Station, MetroError> {
        let index = self.resolve(name)?;
        let station = &mut self.stations[index.0];
        station.distance_from_previous = distance_from_previous;
        station.time_from_previous = time_from_previous;
        Ok(&*station)
    }

    /// Rewrite map entries for every position from `start` onwards.
    ///
    /// Walks positions in ascending order exactly once.
    fn reindex_from(&mut self, start: usize) {
        for (pos, station) in self.stations.iter().enumerate().skip(start) {
            if let Some(slot) = self.index_by_key.get_mut(&station.key()) {
                *slot = StationIndex(pos);
            }
        }
    }

    /// Check that the name map is the exact inverse of line order.
    pub fn is_consistent(&self) -> bool {
        self.index_by_key.len() == self.stations.len()
            && self
                .stations
                .iter()
                .enumerate()
                .all(|(pos, s)| self.index_by_key.get(&s.key()) == Some(&StationIndex(pos)))
    }
}
