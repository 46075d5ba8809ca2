//! The metro line as a single value.
//!
//! `MetroMap` owns the station registry and the route graph together.
//! Every mutation touches both or neither, so index renumbering after a
//! removal is never observable half-applied.

mod shared;

pub use shared::SharedMetroMap;

use tracing::{debug, info};

use crate::domain::{MetroError, Station, StationIndex, Weighting};
use crate::graph::{Edge, WeightedGraph};
use crate::planner::{PathFinder, RouteSummary, ShortestPath, summarize_range};
use crate::stations::{StationRegistry, find_by_name_contains};

/// Registry and route graph, kept in lockstep.
#[derive(Debug, Clone, Default)]
pub struct MetroMap {
    registry: StationRegistry,
    graph: WeightedGraph,
}

impl MetroMap {
    /// Create an empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Read-only view of the route graph.
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Number of stations on the line.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if the line has no stations.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Append a station to the end of the line.
    pub fn register_station(
        &mut self,
        name: &str,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Result<StationIndex, MetroError> {
        let index = self
            .registry
            .register(name, distance_from_previous, time_from_previous)?;
        let slot = self.graph.insert_station();
        debug_assert_eq!(index, slot);

        info!(
            station = name,
            %index,
            distance = distance_from_previous,
            time = time_from_previous,
            "registered station"
        );
        Ok(index)
    }

    /// Register a directed route between two stations by index.
    pub fn add_route(
        &mut self,
        from: StationIndex,
        to: StationIndex,
        distance: u32,
        time: u32,
    ) -> Result<(), MetroError> {
        for index in [from, to] {
            if !self.registry.contains_index(index) {
                return Err(MetroError::InvalidIndex(index));
            }
        }
        self.graph.add_edge(from, to, distance, time)?;

        debug!(
            %from,
            %to,
            distance,
            time,
            routes = self.graph.edge_count(),
            "added route"
        );
        Ok(())
    }

    /// Remove a station and every route touching it.
    ///
    /// Later stations shift down one index in both the registry and the
    /// graph. The name is resolved and the index checked against the graph
    /// before anything is mutated.
    pub fn remove_station(&mut self, name: &str) -> Result<Station, MetroError> {
        let index = self.registry.resolve(name)?;
        if !self.graph.contains(index) {
            return Err(MetroError::InvalidIndex(index));
        }

        let station = self.registry.remove_at(index)?;
        self.graph.remove_station(index)?;

        info!(
            station = %station.name,
            %index,
            remaining = self.registry.len(),
            routes = self.graph.edge_count(),
            "removed station"
        );
        Ok(station)
    }

    /// Change a station's line-order segment weights.
    pub fn update_station(
        &mut self,
        name: &str,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Result<Station, MetroError> {
        let station = self
            .registry
            .update(name, distance_from_previous, time_from_previous)?
            .clone();

        info!(
            station = %station.name,
            distance = distance_from_previous,
            time = time_from_previous,
            "updated station"
        );
        Ok(station)
    }

    /// Stations in line order, numbered from 1.
    pub fn list_stations(&self) -> impl Iterator<Item = (usize, &Station)> {
        self.registry.all()
    }

    /// Shortest route between two named stations.
    pub fn shortest_path(
        &self,
        start: &str,
        end: &str,
        weighting: Weighting,
    ) -> Result<ShortestPath, MetroError> {
        let start = self.registry.resolve(start)?;
        let end = self.registry.resolve(end)?;
        PathFinder::new(&self.registry, &self.graph).shortest_path(start, end, weighting)
    }

    /// Forward ride summary between two named stations.
    pub fn route_summary(&self, start: &str, end: &str) -> Result<RouteSummary, MetroError> {
        let start = self.registry.resolve(start)?;
        let end = self.registry.resolve(end)?;
        summarize_range(&self.registry, start, end)
    }

    /// First station in line order whose name contains `fragment`.
    pub fn find_station(&self, fragment: &str) -> Result<&Station, MetroError> {
        find_by_name_contains(&self.registry, fragment)
    }

    /// Registered routes under `weighting`.
    pub fn routes(&self, weighting: Weighting) -> Vec<Edge> {
        self.graph.edges(weighting)
    }

    /// Returns true if registry and graph agree and no edge dangles.
    pub fn is_consistent(&self) -> bool {
        self.registry.is_consistent() && self.graph.is_consistent(self.registry.len())
    }
}
