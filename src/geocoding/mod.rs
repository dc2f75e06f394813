pub mod provider;
pub mod providers;

use std::sync::Arc;

use log::warn;

use crate::core::config::ResolvedConfig;

pub use provider::{Coordinates, GeocodeError, Geocoder, locate};
pub use providers::OpenCageGeocoder;

pub fn build_geocoder(config: &ResolvedConfig) -> Arc<dyn Geocoder> {
    if config.geocoding_api_key.is_none() {
        // Still usable: every lookup falls back to the default location.
        warn!("GEOCODING_API_KEY not set, place lookups will use the default location");
    }
    Arc::new(OpenCageGeocoder::new(
        config.geocoding_api_key.clone(),
        Some(config.geocoding_base_url.clone()),
    ))
}
