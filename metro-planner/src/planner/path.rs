//! Dijkstra shortest-path search over the route graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::debug;

use crate::domain::{MetroError, Station, StationIndex, Weighting};
use crate::graph::WeightedGraph;
use crate::stations::StationRegistry;

/// Result of a shortest-path query.
///
/// Two totals are reported because two weight sources exist: `total` sums
/// the line-order segment field of each station after the first, while
/// `route_weight` is the sum of graph edge weights the search minimised.
/// Only the path finder builds these, so the station list is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    stations: Vec<Station>,
    total: u64,
    route_weight: u64,
    weighting: Weighting,
}

impl ShortestPath {
    /// Stations visited, origin first.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Sum of line-order segment weights along the path.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Sum of route-graph edge weights along the path.
    pub fn route_weight(&self) -> u64 {
        self.route_weight
    }

    /// Weighting used for both totals.
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Origin station.
    pub fn origin(&self) -> Option<&Station> {
        self.stations.first()
    }

    /// Destination station.
    pub fn destination(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Station names in travel order.
    pub fn names(&self) -> Vec<&str> {
        self.stations.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn name(s: Option<&Station>) -> &str {
            s.map_or("?", |s| s.name.as_str())
        }
        write!(
            f,
            "Shortest {} from {} to {}: {} {}",
            self.weighting,
            name(self.origin()),
            name(self.destination()),
            self.total,
            self.weighting.unit()
        )
    }
}

/// Shortest-path search over a registry and its route graph.
pub struct PathFinder<'a> {
    registry: &'a StationRegistry,
    graph: &'a WeightedGraph,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder over the given state.
    pub fn new(registry: &'a StationRegistry, graph: &'a WeightedGraph) -> Self {
        Self { registry, graph }
    }

    fn check(&self, index: StationIndex) -> Result<(), MetroError> {
        if self.registry.contains_index(index) && self.graph.contains(index) {
            Ok(())
        } else {
            Err(MetroError::InvalidIndex(index))
        }
    }

    /// Find the cheapest directed route from `start` to `end`.
    ///
    /// Fails with `NoPath` when `end` is unreachable under `weighting`.
    pub fn shortest_path(
        &self,
        start: StationIndex,
        end: StationIndex,
        weighting: Weighting,
    ) -> Result<ShortestPath, MetroError> {
        self.check(start)?;
        self.check(end)?;

        let n = self.graph.station_count();
        let mut dist = vec![u64::MAX; n];
        let mut prev: Vec<Option<StationIndex>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut frontier: BinaryHeap<Reverse<(u64, StationIndex)>> = BinaryHeap::new();

        dist[start.0] = 0;
        frontier.push(Reverse((0, start)));

        // Stale duplicates in the frontier are skipped by the visited check.
        while let Some(Reverse((d, u))) = frontier.pop() {
            if visited[u.0] {
                continue;
            }
            visited[u.0] = true;

            for (&v, &weight) in self.graph.neighbors(u, weighting)? {
                if visited[v.0] {
                    continue;
                }
                let candidate = d + u64::from(weight);
                if candidate < dist[v.0] {
                    dist[v.0] = candidate;
                    prev[v.0] = Some(u);
                    frontier.push(Reverse((candidate, v)));
                }
            }
        }

        let no_path = || MetroError::NoPath {
            from: self.name_of(start),
            to: self.name_of(end),
            weighting,
        };

        if !visited[end.0] {
            debug!(from = %start, to = %end, %weighting, "destination unreachable");
            return Err(no_path());
        }

        let mut indices = vec![end];
        let mut current = end;
        while current != start {
            current = prev[current.0].ok_or_else(no_path)?;
            indices.push(current);
        }
        indices.reverse();

        let stations: Vec<Station> = indices
            .iter()
            .map(|&i| self.registry.station(i).cloned())
            .collect::<Result<_, _>>()?;

        let total = stations
            .iter()
            .skip(1)
            .map(|s| u64::from(weighting.segment_of(s)))
            .sum();

        debug!(
            from = %start,
            to = %end,
            %weighting,
            hops = stations.len() - 1,
            total,
            "shortest path found"
        );

        Ok(ShortestPath {
            stations,
            total,
            route_weight: dist[end.0],
            weighting,
        })
    }

    fn name_of(&self, index: StationIndex) -> String {
        self.registry
            .get(index)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| index.to_string())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (1usize..8).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0u32..20);
            (Just(n), prop::collection::vec(edge, 0..20))
        })
    }

    /// Plain Bellman-Ford distances for cross-checking.
    fn reference_distances(n: usize, edges: &[(usize, usize, u32)], start: usize) -> Vec<Option<u64>> {
        let mut best: Vec<Option<u64>> = vec![None; n];
        best[start] = Some(0);
        for _ in 0..n {
            for &(from, to, w) in edges {
                if let Some(d) = best[from] {
                    let candidate = d + u64::from(w);
                    if best[to].is_none_or(|cur| candidate < cur) {
                        best[to] = Some(candidate);
                    }
                }
            }
        }
        best
    }

    proptest! {
        /// Dijkstra agrees with an exhaustive relaxation on reachability and
        /// on the minimised edge-weight sum.
        #[test]
        fn matches_reference((n, edges) in network(), s in any::<prop::sample::Index>(), e in any::<prop::sample::Index>()) {
            let (start, end) = (s.index(n), e.index(n));

            let mut registry = StationRegistry::new();
            let mut graph = WeightedGraph::with_stations(n);
            for i in 0..n {
                registry.register(&format!("S{i}"), 1, 1).unwrap();
            }
            // Last write wins, as in the graph.
            let mut dedup = std::collections::BTreeMap::new();
            for &(from, to, w) in &edges {
                graph.add_edge(StationIndex(from), StationIndex(to), w, w).unwrap();
                dedup.insert((from, to), w);
            }
            let flat: Vec<_> = dedup.into_iter().map(|((f, t), w)| (f, t, w)).collect();
            let expected = reference_distances(n, &flat, start)[end];

            let result = PathFinder::new(&registry, &graph)
                .shortest_path(StationIndex(start), StationIndex(end), Weighting::Distance);

            match expected {
                Some(d) => {
                    let path = result.unwrap();
                    prop_assert_eq!(path.route_weight(), d);
                    prop_assert_eq!(path.origin().map(|s| s.name.clone()), Some(format!("S{start}")));
                    prop_assert_eq!(path.destination().map(|s| s.name.clone()), Some(format!("S{end}")));
                }
                None => {
                    let unreachable = matches!(result, Err(MetroError::NoPath { .. }));
                    prop_assert!(unreachable);
                }
            }
        }
    }
}
