//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Station, Weighting};
use crate::graph::Edge;
use crate::planner::{RouteSummary, ShortestPath};

/// A station as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResult {
    /// Display name
    pub name: String,

    /// Distance from the previous station (km)
    pub distance_from_previous: u32,

    /// Time from the previous station (minutes)
    pub time_from_previous: u32,

    /// One-line rendering, e.g. "Nipa | Distance: 3 km | Time: 7 mins"
    pub summary: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            distance_from_previous: station.distance_from_previous,
            time_from_previous: station.time_from_previous,
            summary: station.to_string(),
        }
    }
}

/// One entry of the station listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationListEntry {
    /// 1-based position in line order
    pub position: usize,

    #[serde(flatten)]
    pub station: StationResult,
}

/// Response for `GET /stations`.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationListEntry>,
}

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct RegisterStationRequest {
    pub name: String,

    /// Distance from the previous station (km)
    pub distance: u32,

    /// Time from the previous station (minutes)
    pub time: u32,
}

/// Response after registering a station.
#[derive(Debug, Serialize)]
pub struct RegisterStationResponse {
    /// Index assigned to the new station
    pub index: usize,
}

/// Request to change a station's segment weights.
#[derive(Debug, Deserialize)]
pub struct UpdateStationRequest {
    pub distance: u32,
    pub time: u32,
}

/// Query for `GET /stations/search`.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Name fragment, matched case-insensitively
    pub q: String,
}

/// Query for `GET /routes`.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    /// Weighting to report (defaults to distance)
    pub by: Option<Weighting>,
}

/// A route in the edge listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteResult {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

impl From<Edge> for RouteResult {
    fn from(edge: Edge) -> Self {
        Self {
            from: edge.from.0,
            to: edge.to.0,
            weight: edge.weight,
        }
    }
}

/// Response for `GET /routes`.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub weighting: Weighting,
    pub routes: Vec<RouteResult>,
}

/// Request to register a directed route.
#[derive(Debug, Deserialize)]
pub struct AddRouteRequest {
    /// Source station index
    pub from: usize,

    /// Destination station index
    pub to: usize,

    pub distance: u32,
    pub time: u32,
}

/// Query for `GET /path`.
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub from: String,
    pub to: String,

    /// Weighting to minimise (defaults to distance)
    pub by: Option<Weighting>,
}

/// Response for `GET /path`.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    /// Station names, origin first
    pub stations: Vec<String>,

    /// Sum of line-order segment weights along the path
    pub total: u64,

    /// Sum of route weights the search minimised
    pub route_weight: u64,

    pub weighting: Weighting,

    /// "km" or "minutes"
    pub unit: &'static str,

    /// Human-readable one-liner
    pub message: String,
}

impl PathResponse {
    pub fn from_path(path: &ShortestPath) -> Self {
        Self {
            stations: path.names().into_iter().map(str::to_string).collect(),
            total: path.total(),
            route_weight: path.route_weight(),
            weighting: path.weighting(),
            unit: path.weighting().unit(),
            message: path.to_string(),
        }
    }
}

/// Query for `GET /summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub from: String,
    pub to: String,
}

/// Response for `GET /summary`.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Stations passed after boarding, alighting station last
    pub stations: Vec<String>,

    /// Total distance (km)
    pub total_distance: u64,

    /// Total ride duration in minutes
    pub duration_mins: i64,

    /// Multi-line rendering
    pub message: String,
}

impl SummaryResponse {
    pub fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            stations: summary.stations.clone(),
            total_distance: summary.total_distance,
            duration_mins: summary.travel_time.num_minutes(),
            message: summary.to_string(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationIndex;

    #[test]
    fn station_result_serialization() {
        let result = StationResult::from_station(&Station::new("Nipa", 3, 7));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "Nipa");
        assert_eq!(json["distance_from_previous"], 3);
        assert_eq!(json["summary"], "Nipa | Distance: 3 km | Time: 7 mins");
    }

    #[test]
    fn list_entry_flattens_station() {
        let entry = StationListEntry {
            position: 2,
            station: StationResult::from_station(&Station::new("Tower", 5, 12)),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["position"], 2);
        assert_eq!(json["time_from_previous"], 12);
    }

    #[test]
    fn path_request_weighting_is_optional() {
        let req: PathRequest = serde_json::from_str(r#"{"from":"A","to":"B"}"#).unwrap();
        assert_eq!(req.by, None);

        let req: PathRequest =
            serde_json::from_str(r#"{"from":"A","to":"B","by":"time"}"#).unwrap();
        assert_eq!(req.by, Some(Weighting::Time));
    }

    #[test]
    fn summary_reports_duration_minutes() {
        let summary = RouteSummary {
            stations: vec!["Kala Board".into(), "Star Gate".into()],
            total_distance: 5,
            travel_time: chrono::Duration::minutes(10),
        };
        let json = serde_json::to_value(SummaryResponse::from_summary(&summary)).unwrap();
        assert_eq!(json["duration_mins"], 10);
        assert_eq!(json["total_distance"], 5);
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse {
            error: "station not found: Nowhere".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "error": "station not found: Nowhere" }));
    }

    #[test]
    fn route_from_edge() {
        let edge = Edge {
            from: StationIndex(1),
            to: StationIndex(2),
            weight: 7,
        };
        assert_eq!(
            RouteResult::from(edge),
            RouteResult {
                from: 1,
                to: 2,
                weight: 7
            }
        );
    }
}
