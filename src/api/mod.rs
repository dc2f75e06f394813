//! # HTTP API
//!
//! JSON endpoints over the chart store, the position engine and geocoding.
//!
//! ```text
//! POST /api/birth-charts            create (400 on bad data)
//! GET  /api/birth-charts/:id        fetch  (404 when absent)
//! GET  /api/birth-charts/:id/chart  chart + snapshot + wheel at birth
//! GET  /api/snapshot                positions for a place and instant
//! GET  /api/geocode?q=              place name to location
//! ```

pub mod routes;
pub mod types;

use std::io;

use log::info;
use tokio::net::TcpListener;

use crate::core::config::ResolvedConfig;
use crate::core::store::open_store;
use crate::geocoding::build_geocoder;

pub use routes::{AppState, router};

/// Binds `host:port` and serves until the process stops.
pub async fn serve(config: &ResolvedConfig) -> io::Result<()> {
    let store = open_store(config.storage_backend, &config.storage_path)
        .map_err(|e| io::Error::other(e.to_string()))?;
    let state = AppState {
        store,
        geocoder: build_geocoder(config),
        strategy: config.nakshatra_strategy,
    };

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Serving on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
