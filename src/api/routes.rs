use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use log::{debug, error, info, warn};

use crate::api::types::{
    ApiError, ChartViewResponse, CreateBirthChartRequest, GeocodeQuery, SnapshotQuery,
    SnapshotResponse,
};
use crate::core::chart::BirthChart;
use crate::core::engine::{NakshatraStrategy, compute_angles, snapshot};
use crate::core::location::{CUSTOM_LOCATION_NAME, Location};
use crate::core::store::{ChartStore, StoreError};
use crate::core::wheel::{WheelSpec, layout};
use crate::geocoding::{Geocoder, locate};

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ChartStore>,
    pub geocoder: Arc<dyn Geocoder>,
    /// Strategy for requests that don't name one.
    pub strategy: NakshatraStrategy,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/birth-charts", post(create_birth_chart))
        .route("/api/birth-charts/:id", get(get_birth_chart))
        .route("/api/birth-charts/:id/chart", get(get_chart_view))
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/geocode", get(get_geocode))
        .with_state(state)
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        error!("Chart store failure: {}", e);
        ApiError::Internal(e.to_string())
    }
}

async fn create_birth_chart(
    State(state): State<AppState>,
    payload: Result<Json<CreateBirthChartRequest>, JsonRejection>,
) -> Result<Json<BirthChart>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected birth chart body: {}", rejection.body_text());
        ApiError::InvalidChart(rejection.body_text())
    })?;

    let (latitude, longitude) = match request.coordinates() {
        Some(coords) => coords,
        None => {
            let loc = locate(state.geocoder.as_ref(), &request.birth_place).await;
            (loc.latitude, loc.longitude)
        }
    };

    let new_chart = request.into_new_chart(latitude, longitude);
    new_chart
        .validate()
        .map_err(|e| ApiError::InvalidChart(e.to_string()))?;

    let chart = state.store.create(new_chart).await?;
    info!("Created birth chart {} via {}", chart.id, state.store.name());
    Ok(Json(chart))
}

/// Non-numeric ids can never exist, so they are 404 too.
async fn find_chart(store: &dyn ChartStore, raw_id: &str) -> Result<BirthChart, ApiError> {
    let Ok(id) = raw_id.parse::<i64>() else {
        debug!("Non-numeric chart id '{}'", raw_id);
        return Err(ApiError::NotFound);
    };
    store.get(id).await?.ok_or(ApiError::NotFound)
}

async fn get_birth_chart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BirthChart>, ApiError> {
    find_chart(state.store.as_ref(), &id).await.map(Json)
}

async fn get_chart_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ChartViewResponse>, ApiError> {
    let chart = find_chart(state.store.as_ref(), &id).await?;
    let born_at = chart.born_at().ok_or_else(|| {
        ApiError::Internal(format!("chart {} has an unreadable birth time", chart.id))
    })?;

    let location = chart.location();
    let snap = snapshot(&location, born_at, state.strategy);
    let wheel = layout(&WheelSpec::default(), &compute_angles(&location, born_at));

    Ok(Json(ChartViewResponse {
        snapshot: SnapshotResponse::new(&snap, state.strategy),
        wheel,
        chart,
    }))
}

async fn get_snapshot(
    State(state): State<AppState>,
    Query(query): Query<SnapshotQuery>,
) -> Result<Json<SnapshotResponse>, ApiError> {
    let location = match (query.latitude, query.longitude) {
        (Some(latitude), Some(longitude)) => {
            let name = query
                .name
                .or(query.place)
                .unwrap_or_else(|| CUSTOM_LOCATION_NAME.to_string());
            Location::checked(latitude, longitude, name).map_err(|e| {
                warn!("Rejected snapshot coordinates: {}", e);
                ApiError::InvalidLocation(e.to_string())
            })?
        }
        _ => match query.place.as_deref() {
            Some(place) => locate(state.geocoder.as_ref(), place).await,
            None => Location::default(),
        },
    };

    let strategy = query.strategy.unwrap_or(state.strategy);
    let at = query.at.unwrap_or_else(|| Local::now().naive_local());
    let snap = snapshot(&location, at, strategy);
    Ok(Json(SnapshotResponse::new(&snap, strategy)))
}

async fn get_geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Json<Location> {
    Json(locate(state.geocoder.as_ref(), &query.q).await)
}
