//! Dual-weighted directed route graph.
//!
//! Routes between stations carry two independent weights, distance and
//! time. Each weighting gets its own adjacency structure; the two are
//! always mutated together so they share exactly the same edge set.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::{MetroError, StationIndex, Weighting};

/// Neighbour map of a single station: destination → weight.
pub type Neighbors = BTreeMap<StationIndex, u32>;

/// A directed edge under one weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: StationIndex,
    pub to: StationIndex,
    pub weight: u32,
}

/// Adjacency for a single weighting, one slot per station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Adjacency {
    nodes: Vec<Neighbors>,
}

impl Adjacency {
    fn push_node(&mut self) {
        self.nodes.push(Neighbors::new());
    }

    fn insert(&mut self, from: StationIndex, to: StationIndex, weight: u32) {
        self.nodes[from.0].insert(to, weight);
    }

    /// Drop `index` as a source and destination, then shift every later
    /// index down by one.
    fn remove_node(&mut self, index: StationIndex) {
        self.nodes.remove(index.0);
        for neighbors in &mut self.nodes {
            *neighbors = std::mem::take(neighbors)
                .into_iter()
                .filter_map(|(to, weight)| match to.cmp(&index) {
                    Ordering::Less => Some((to, weight)),
                    Ordering::Equal => None,
                    Ordering::Greater => to.prev().map(|to| (to, weight)),
                })
                .collect();
        }
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.iter().enumerate().flat_map(|(from, neighbors)| {
            neighbors.iter().map(move |(&to, &weight)| Edge {
                from: StationIndex(from),
                to,
                weight,
            })
        })
    }
}

/// Directed graph over station indices with distance and time weights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    distance: Adjacency,
    time: Adjacency,
}

impl WeightedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `count` stations and no edges.
    pub fn with_stations(count: usize) -> Self {
        let mut graph = Self::new();
        for _ in 0..count {
            graph.insert_station();
        }
        graph
    }

    /// Number of station slots.
    pub fn station_count(&self) -> usize {
        self.distance.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.distance.nodes.iter().map(BTreeMap::len).sum()
    }

    /// Returns true if `index` has a slot in the graph.
    pub fn contains(&self, index: StationIndex) -> bool {
        index.0 < self.station_count()
    }

    fn check(&self, index: StationIndex) -> Result<(), MetroError> {
        if self.contains(index) {
            Ok(())
        } else {
            Err(MetroError::InvalidIndex(index))
        }
    }

    /// Append an empty slot for a newly registered station.
    pub fn insert_station(&mut self) -> StationIndex {
        let index = StationIndex(self.station_count());
        self.distance.push_node();
        self.time.push_node();
        index
    }

    /// Add or overwrite the route `from → to` in both weightings.
    pub fn add_edge(
        &mut self,
        from: StationIndex,
        to: StationIndex,
        distance: u32,
        time: u32,
    ) -> Result<(), MetroError> {
        self.check(from)?;
        self.check(to)?;
        self.distance.insert(from, to, distance);
        self.time.insert(from, to, time);
        Ok(())
    }

    /// Remove a station and every edge touching it, renumbering the rest.
    ///
    /// Validation happens before either adjacency is touched, so a failed
    /// call leaves the graph unchanged.
    pub fn remove_station(&mut self, index: StationIndex) -> Result<(), MetroError> {
        self.check(index)?;
        self.distance.remove_node(index);
        self.time.remove_node(index);
        Ok(())
    }

    fn adjacency(&self, weighting: Weighting) -> &Adjacency {
        match weighting {
            Weighting::Distance => &self.distance,
            Weighting::Time => &self.time,
        }
    }

    /// Outgoing edges of `index` under the chosen weighting.
    pub fn neighbors(
        &self,
        index: StationIndex,
        weighting: Weighting,
    ) -> Result<&Neighbors, MetroError> {
        self.adjacency(weighting)
            .nodes
            .get(index.0)
            .ok_or(MetroError::InvalidIndex(index))
    }

    /// All edges under `weighting`, ordered by source then destination.
    pub fn edges(&self, weighting: Weighting) -> Vec<Edge> {
        self.adjacency(weighting).edges().collect()
    }

    /// Returns true if both weightings hold the same edge set and every
    /// endpoint is below `station_count`.
    pub fn is_consistent(&self, station_count: usize) -> bool {
        let same_shape = self.distance.nodes.len() == self.time.nodes.len()
            && self
                .distance
                .nodes
                .iter()
                .zip(&self.time.nodes)
                .all(|(d, t)| d.keys().eq(t.keys()));

        same_shape
            && self.station_count() == station_count
            && self
                .distance
                .edges()
                .all(|e| e.from.0 < station_count && e.to.0 < station_count)
    }
}
