//! # HTTP Payloads
//!
//! Request bodies, query strings and response shapes for the HTTP boundary,
//! plus the translation from core types into their wire form.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::core::chart::{BirthChart, NewBirthChart};
use crate::core::engine::{
    ChoghadiyaInfo, DayHalf, NakshatraInfo, NakshatraStrategy, PlanetPosition, Snapshot,
};
use crate::core::location::Location;
use crate::core::tables::Planet;
use crate::core::wheel::WheelLayout;

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /api/birth-charts`.
///
/// Coordinates may arrive as numbers or numeric strings. Missing or empty
/// coordinates are filled in by geocoding `birthPlace`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBirthChartRequest {
    pub name: String,
    #[serde(deserialize_with = "birth_date")]
    pub birth_date: NaiveDate,
    pub birth_time: String,
    pub birth_place: String,
    #[serde(default, deserialize_with = "coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "coordinate")]
    pub longitude: Option<f64>,
}

impl CreateBirthChartRequest {
    /// Both coordinates, if the client sent both.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn into_new_chart(self, latitude: f64, longitude: f64) -> NewBirthChart {
        NewBirthChart {
            name: self.name,
            birth_date: self.birth_date,
            birth_time: self.birth_time,
            birth_place: self.birth_place,
            latitude,
            longitude,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("'{s}' is not a coordinate"))),
    }
}

/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM:SS`.
fn birth_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .ok_or_else(|| de::Error::custom(format!("'{raw}' is not a date")))
}

/// Query string of `GET /api/snapshot`.
#[derive(Debug, Default, Deserialize)]
pub struct SnapshotQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
    /// Geocoded when explicit coordinates are absent.
    pub place: Option<String>,
    pub at: Option<NaiveDateTime>,
    pub strategy: Option<NakshatraStrategy>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    pub q: String,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetView {
    pub planet: Planet,
    pub name: &'static str,
    pub hindi_name: &'static str,
    pub symbol: &'static str,
    pub angle: f64,
    pub house: u8,
    pub rashi: &'static str,
    pub rashi_western: &'static str,
    pub rashi_glyph: &'static str,
    pub chart_house: u8,
}

impl From<&PlanetPosition> for PlanetView {
    fn from(p: &PlanetPosition) -> Self {
        Self {
            planet: p.planet,
            name: p.planet.name(),
            hindi_name: p.planet.hindi_name(),
            symbol: p.planet.symbol(),
            angle: p.angle,
            house: p.house,
            rashi: p.rashi.name(),
            rashi_western: p.rashi.western_name(),
            rashi_glyph: p.rashi.glyph(),
            chart_house: p.chart_house,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraView {
    pub index: u8,
    pub name: &'static str,
    pub hindi_name: &'static str,
    pub rashi: &'static str,
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub companions: Vec<&'static str>,
}

impl From<&NakshatraInfo> for NakshatraView {
    fn from(n: &NakshatraInfo) -> Self {
        Self {
            index: n.index,
            name: n.nakshatra.name(),
            hindi_name: n.nakshatra.hindi_name(),
            rashi: n.rashi.name(),
            start_degrees: n.start_degrees,
            end_degrees: n.end_degrees,
            companions: n.companions.iter().map(|p| p.name()).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoghadiyaView {
    pub index: u8,
    pub name: &'static str,
    pub hindi_name: &'static str,
    pub auspicious: bool,
    pub half: DayHalf,
    pub start_time: String,
    pub end_time: String,
}

impl From<&ChoghadiyaInfo> for ChoghadiyaView {
    fn from(c: &ChoghadiyaInfo) -> Self {
        Self {
            index: c.index,
            name: c.period.name(),
            hindi_name: c.period.hindi_name(),
            auspicious: c.is_auspicious(),
            half: c.half,
            start_time: c.start_label(),
            end_time: c.end_label(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub location: Location,
    pub at: NaiveDateTime,
    pub strategy: NakshatraStrategy,
    pub planets: Vec<PlanetView>,
    pub nakshatra: NakshatraView,
    pub choghadiya: ChoghadiyaView,
}

impl SnapshotResponse {
    pub fn new(snapshot: &Snapshot, strategy: NakshatraStrategy) -> Self {
        Self {
            location: snapshot.location.clone(),
            at: snapshot.at,
            strategy,
            planets: snapshot.planets.iter().map(PlanetView::from).collect(),
            nakshatra: NakshatraView::from(&snapshot.nakshatra),
            choghadiya: ChoghadiyaView::from(&snapshot.choghadiya),
        }
    }
}

/// Body of `GET /api/birth-charts/:id/chart`.
#[derive(Debug, Serialize)]
pub struct ChartViewResponse {
    pub chart: BirthChart,
    pub snapshot: SnapshotResponse,
    pub wheel: WheelLayout,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// Create request failed to parse or validate. 400.
    InvalidChart(String),
    /// Snapshot coordinates were non-finite or out of range. 400.
    InvalidLocation(String),
    /// No chart with that id. 404.
    NotFound,
    /// Storage or other server-side failure. 500.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidChart(detail) => (
                StatusCode::BAD_REQUEST,
                MessageResponse {
                    message: "Invalid birth chart data".into(),
                    detail: Some(detail),
                },
            ),
            ApiError::InvalidLocation(detail) => (
                StatusCode::BAD_REQUEST,
                MessageResponse {
                    message: "Invalid location".into(),
                    detail: Some(detail),
                },
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                MessageResponse {
                    message: "Birth chart not found".into(),
                    detail: None,
                },
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                MessageResponse {
                    message,
                    detail: None,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
