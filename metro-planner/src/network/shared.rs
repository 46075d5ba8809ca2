//! Lock-guarded metro line for concurrent callers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::domain::{MetroError, Station, StationIndex, Weighting};
use crate::graph::Edge;
use crate::planner::{RouteSummary, ShortestPath};

use super::MetroMap;

/// Thread-safe handle to a `MetroMap`.
///
/// The registry and graph sit behind one lock: commands take it
/// exclusively, queries share it. A removal therefore never interleaves
/// with a query.
#[derive(Clone, Default)]
pub struct SharedMetroMap {
    inner: Arc<RwLock<MetroMap>>,
}

impl SharedMetroMap {
    /// Wrap an existing line.
    pub fn new(map: MetroMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// Hold the shared lock for several queries against one snapshot.
    pub async fn read(&self) -> RwLockReadGuard<'_, MetroMap> {
        self.inner.read().await
    }

    /// Append a station.
    pub async fn register_station(
        &self,
        name: &str,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Result<StationIndex, MetroError> {
        let mut guard = self.inner.write().await;
        guard.register_station(name, distance_from_previous, time_from_previous)
    }

    /// Register a directed route by index.
    pub async fn add_route(
        &self,
        from: StationIndex,
        to: StationIndex,
        distance: u32,
        time: u32,
    ) -> Result<(), MetroError> {
        let mut guard = self.inner.write().await;
        guard.add_route(from, to, distance, time)
    }

    /// Remove a station and its routes.
    pub async fn remove_station(&self, name: &str) -> Result<Station, MetroError> {
        let mut guard = self.inner.write().await;
        guard.remove_station(name)
    }

    /// Change a station's segment weights.
    pub async fn update_station(
        &self,
        name: &str,
        distance_from_previous: u32,
        time_from_previous: u32,
    ) -> Result<Station, MetroError> {
        let mut guard = self.inner.write().await;
        guard.update_station(name, distance_from_previous, time_from_previous)
    }

    /// Numbered station listing.
    pub async fn list_stations(&self) -> Vec<(usize, Station)> {
        let guard = self.inner.read().await;
        guard.list_stations().map(|(n, s)| (n, s.clone())).collect()
    }

    /// Shortest route between two named stations.
    pub async fn shortest_path(
        &self,
        start: &str,
        end: &str,
        weighting: Weighting,
    ) -> Result<ShortestPath, MetroError> {
        let guard = self.inner.read().await;
        guard.shortest_path(start, end, weighting)
    }

    /// Forward ride summary between two named stations.
    pub async fn route_summary(&self, start: &str, end: &str) -> Result<RouteSummary, MetroError> {
        let guard = self.inner.read().await;
        guard.route_summary(start, end)
    }

    /// First station whose name contains `fragment`.
    pub async fn find_station(&self, fragment: &str) -> Result<Station, MetroError> {
        let guard = self.inner.read().await;
        guard.find_station(fragment).cloned()
    }

    /// Registered routes under `weighting`.
    pub async fn routes(&self, weighting: Weighting) -> Vec<Edge> {
        let guard = self.inner.read().await;
        guard.routes(weighting)
    }
}
