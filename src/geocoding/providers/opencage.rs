//! OpenCage forward geocoding.
//!
//! `GET {base_url}/json?q=<place>&key=<key>&limit=1`, first result's
//! `geometry.lat` / `geometry.lng`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::config::DEFAULT_GEOCODING_BASE_URL;
use crate::geocoding::{Coordinates, GeocodeError, Geocoder};

// ============================================================================
// OpenCage API Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize, Debug)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize, Debug)]
struct Geometry {
    lat: f64,
    lng: f64,
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct OpenCageGeocoder {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl OpenCageGeocoder {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_GEOCODING_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    fn name(&self) -> &str {
        "opencage"
    }

    async fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GeocodeError::Config("no geocoding API key configured".into()))?;

        info!("OpenCage request: q={}", place);

        let response = self
            .client
            .get(format!("{}/json", self.base_url))
            .query(&[("q", place), ("key", api_key), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        debug!("OpenCage response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("OpenCage API error: {} - {}", status, err_body);
            return Err(GeocodeError::Api {
                status,
                message: err_body,
            });
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        let first = body.results.into_iter().next().ok_or(GeocodeError::NoResults)?;
        Ok(Coordinates {
            latitude: first.geometry.lat,
            longitude: first.geometry.lng,
        })
    }
}
