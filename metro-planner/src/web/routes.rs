//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use tracing::warn;

use crate::domain::{MetroError, StationIndex};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(register_station))
        .route("/stations/search", get(search_station))
        .route("/stations/:name", put(update_station).delete(remove_station))
        .route("/routes", get(list_routes).post(add_route))
        .route("/path", get(shortest_path))
        .route("/summary", get(route_summary))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations in line order.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .metro
        .list_stations()
        .await
        .iter()
        .map(|(position, station)| StationListEntry {
            position: *position,
            station: StationResult::from_station(station),
        })
        .collect();

    Json(StationListResponse { stations })
}

/// Append a station to the line.
async fn register_station(
    State(state): State<AppState>,
    Json(req): Json<RegisterStationRequest>,
) -> Result<(StatusCode, Json<RegisterStationResponse>), AppError> {
    let index = state
        .metro
        .register_station(&req.name, req.distance, req.time)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterStationResponse { index: index.0 }),
    ))
}

/// Edit a station's segment weights.
async fn update_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<UpdateStationRequest>,
) -> Result<Json<StationResult>, AppError> {
    let station = state
        .metro
        .update_station(&name, req.distance, req.time)
        .await?;
    Ok(Json(StationResult::from_station(&station)))
}

/// Remove a station and its routes.
async fn remove_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    state.metro.remove_station(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// First station whose name contains the query.
async fn search_station(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Result<Json<StationResult>, AppError> {
    let station = state.metro.find_station(&req.q).await?;
    Ok(Json(StationResult::from_station(&station)))
}

/// List registered routes under one weighting.
async fn list_routes(
    State(state): State<AppState>,
    Query(req): Query<RoutesRequest>,
) -> Json<RoutesResponse> {
    let weighting = req.by.unwrap_or_default();
    let routes = state
        .metro
        .routes(weighting)
        .await
        .into_iter()
        .map(RouteResult::from)
        .collect();

    Json(RoutesResponse { weighting, routes })
}

/// Register a directed route between two station indices.
async fn add_route(
    State(state): State<AppState>,
    Json(req): Json<AddRouteRequest>,
) -> Result<StatusCode, AppError> {
    state
        .metro
        .add_route(
            StationIndex(req.from),
            StationIndex(req.to),
            req.distance,
            req.time,
        )
        .await?;
    Ok(StatusCode::CREATED)
}

/// Shortest path between two named stations.
async fn shortest_path(
    State(state): State<AppState>,
    Query(req): Query<PathRequest>,
) -> Result<Json<PathResponse>, AppError> {
    let weighting = req.by.unwrap_or_default();
    let path = state
        .metro
        .shortest_path(&req.from, &req.to, weighting)
        .await?;
    Ok(Json(PathResponse::from_path(&path)))
}

/// Forward ride summary between two named stations.
async fn route_summary(
    State(state): State<AppState>,
    Query(req): Query<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary = state.metro.route_summary(&req.from, &req.to).await?;
    Ok(Json(SummaryResponse::from_summary(&summary)))
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
}

impl From<MetroError> for AppError {
    fn from(e: MetroError) -> Self {
        let message = e.to_string();
        match e {
            MetroError::NotFound(_) => AppError::NotFound { message },
            MetroError::NoPath { .. } => AppError::Unprocessable { message },
            MetroError::InvalidIndex(_)
            | MetroError::InvalidOrder { .. }
            | MetroError::DuplicateName(_) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };
        warn!(status = status.as_u16(), %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Weighting;
    use crate::network::MetroMap;

    fn state() -> AppState {
        let mut map = MetroMap::new();
        map.register_station("S0", 0, 0).unwrap();
        map.register_station("S1", 2, 5).unwrap();
        map.register_station("S2", 3, 7).unwrap();
        map.add_route(StationIndex(0), StationIndex(1), 2, 5).unwrap();
        map.add_route(StationIndex(1), StationIndex(2), 3, 7).unwrap();
        AppState::new(map)
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_stations_one_based() {
        let Json(resp) = list_stations(State(state())).await;
        let names: Vec<_> = resp
            .stations
            .iter()
            .map(|e| (e.position, e.station.name.as_str()))
            .collect();
        assert_eq!(names, vec![(1, "S0"), (2, "S1"), (3, "S2")]);
    }

    #[tokio::test]
    async fn path_endpoint() {
        let req = PathRequest {
            from: "s0".into(),
            to: "s2".into(),
            by: Some(Weighting::Time),
        };
        let Json(resp) = shortest_path(State(state()), Query(req)).await.unwrap();
        assert_eq!(resp.stations, vec!["S0", "S1", "S2"]);
        assert_eq!(resp.total, 12);
        assert_eq!(resp.unit, "minutes");
    }

    #[tokio::test]
    async fn summary_endpoint_rejects_reverse_order() {
        let req = SummaryRequest {
            from: "S2".into(),
            to: "S0".into(),
        };
        let err = route_summary(State(state()), Query(req)).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn remove_then_path_is_unprocessable() {
        let state = state();
        let status = remove_station(State(state.clone()), Path("S1".into()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let req = PathRequest {
            from: "S0".into(),
            to: "S2".into(),
            by: None,
        };
        let err = shortest_path(State(state), Query(req)).await.unwrap_err();
        assert!(matches!(err, AppError::Unprocessable { .. }));
    }

    #[tokio::test]
    async fn register_and_route() {
        let state = state();
        let (status, Json(resp)) = register_station(
            State(state.clone()),
            Json(RegisterStationRequest {
                name: "S3".into(),
                distance: 1,
                time: 2,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(resp.index, 3);

        let status = add_route(
            State(state.clone()),
            Json(AddRouteRequest {
                from: 2,
                to: 3,
                distance: 1,
                time: 2,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(routes) = list_routes(State(state), Query(RoutesRequest { by: None })).await;
        assert_eq!(routes.weighting, Weighting::Distance);
        assert_eq!(routes.routes.len(), 3);
    }

    #[tokio::test]
    async fn search_and_update() {
        let state = state();
        let Json(found) = search_station(
            State(state.clone()),
            Query(StationSearchRequest { q: "1".into() }),
        )
        .await
        .unwrap();
        assert_eq!(found.name, "S1");

        let Json(updated) = update_station(
            State(state),
            Path("s1".into()),
            Json(UpdateStationRequest {
                distance: 8,
                time: 9,
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated.summary, "S1 | Distance: 8 km | Time: 9 mins");
    }

    #[tokio::test]
    async fn error_body_is_typed_json() {
        let response = AppError::from(MetroError::NotFound("Nowhere".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "station not found: Nowhere");
    }

    #[test]
    fn error_status_mapping() {
        let cases = [
            (MetroError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                MetroError::DuplicateName("x".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                MetroError::InvalidIndex(StationIndex(4)),
                StatusCode::BAD_REQUEST,
            ),
            (
                MetroError::NoPath {
                    from: "a".into(),
                    to: "b".into(),
                    weighting: Weighting::Distance,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).into_response().status(), status);
        }
    }
}
