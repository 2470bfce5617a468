use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use restaurant_server::config::ServerConfig;
use restaurant_server::places::{CachedPlaces, StaticPlaces};
use restaurant_server::stations::sound_transit_link;
use restaurant_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env()?;

    let restaurants = match &config.restaurants_file {
        Some(path) => {
            info!(path = %path.display(), "loading restaurants");
            StaticPlaces::from_json_file(path)?
        }
        None => StaticPlaces::seattle(),
    };
    let stations = sound_transit_link()?;
    info!(
        restaurants = restaurants.len(),
        stations = stations.len(),
        "loaded data"
    );

    let places = CachedPlaces::new(restaurants, &config.cache);
    let state = AppState::new(stations, places);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Restaurant finder listening on http://{}", config.bind_addr);
    info!("  GET  /                                  - Station picker");
    info!("  GET  /api/stations                      - List stations");
    info!("  GET  /api/stations/:id/restaurants      - Restaurants near a station");
    info!("  GET  /api/restaurants?lat&lng&distance  - Restaurants near a point");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal, starting graceful shutdown");
}
