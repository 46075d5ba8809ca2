use metro_planner::config::ServerConfig;
use metro_planner::network::MetroMap;
use metro_planner::seed::karachi_line;
use metro_planner::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_planner=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    // Load the demo line unless disabled
    let map = if config.seed_demo_line {
        match karachi_line() {
            Ok(map) => map,
            Err(e) => {
                error!(error = %e, "failed to build demo line");
                std::process::exit(1);
            }
        }
    } else {
        MetroMap::new()
    };
    info!(stations = map.len(), "metro line loaded");

    let app = create_router(AppState::new(map));

    let addr = config.bind_addr;
    info!("Metro planner listening on http://{addr}");
    info!("  GET    /stations             - List stations");
    info!("  POST   /stations             - Register a station");
    info!("  PUT    /stations/{{name}}      - Edit a station");
    info!("  DELETE /stations/{{name}}      - Remove a station");
    info!("  GET    /stations/search?q=   - Find a station");
    info!("  GET    /routes?by=           - List routes");
    info!("  POST   /routes               - Add a route");
    info!("  GET    /path?from=&to=&by=   - Shortest path");
    info!("  GET    /summary?from=&to=    - Route summary");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
