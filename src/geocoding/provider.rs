use std::fmt;

use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::location::Location;

/// Errors that can occur while geocoding a place name.
/// All of them degrade to the default location in [`locate`].
#[derive(Debug)]
pub enum GeocodeError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
    /// The provider answered but found nothing.
    NoResults,
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Config(msg) => write!(f, "config error: {msg}"),
            GeocodeError::Network(msg) => write!(f, "network error: {msg}"),
            GeocodeError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            GeocodeError::Parse(msg) => write!(f, "parse error: {msg}"),
            GeocodeError::NoResults => write!(f, "no results"),
        }
    }
}

impl std::error::Error for GeocodeError {}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Resolves a free-text place name to coordinates.
    async fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError>;
}

/// Looks up `place`, falling back to the default location on any failure.
///
/// The returned location carries `place` as its name. Coordinates are taken
/// as the provider gives them.
pub async fn locate(geocoder: &dyn Geocoder, place: &str) -> Location {
    let place = place.trim();
    if place.is_empty() {
        warn!("Empty place name, using default location");
        return Location::default();
    }

    match geocoder.geocode(place).await {
        Ok(coords) => {
            info!(
                "Geocoded '{}' via {}: ({}, {})",
                place,
                geocoder.name(),
                coords.latitude,
                coords.longitude
            );
            Location::new(coords.latitude, coords.longitude, place)
        }
        Err(e) => {
            warn!("Geocoding '{}' via {} failed: {}", place, geocoder.name(), e);
            Location::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingGeocoder, FixedGeocoder};

    #[tokio::test]
    async fn test_locate_uses_provider_result() {
        let geocoder = FixedGeocoder::new(19.0760, 72.8777);
        let loc = locate(&geocoder, "Mumbai").await;
        assert_eq!(loc, Location::new(19.0760, 72.8777, "Mumbai"));
    }

    #[tokio::test]
    async fn test_locate_falls_back_on_error() {
        let loc = locate(&FailingGeocoder, "Atlantis").await;
        assert!(loc.is_default());
    }

    #[tokio::test]
    async fn test_locate_blank_place_skips_provider() {
        // FixedGeocoder would answer; a blank name never reaches it.
        let geocoder = FixedGeocoder::new(1.0, 2.0);
        let loc = locate(&geocoder, "   ").await;
        assert!(loc.is_default());
        assert_eq!(geocoder.calls(), 0);
    }

    #[test]
    fn test_error_display() {
        let err = GeocodeError::Api {
            status: 402,
            message: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 402): quota exceeded");
        assert_eq!(GeocodeError::NoResults.to_string(), "no results");
    }
}
