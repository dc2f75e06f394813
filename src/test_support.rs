//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::core::chart::NewBirthChart;
use crate::core::location::Location;
use crate::geocoding::{Coordinates, GeocodeError, Geocoder};

/// A geocoder that always answers with the same coordinates.
pub struct FixedGeocoder {
    coords: Coordinates,
    calls: AtomicUsize,
}

impl FixedGeocoder {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates {
                latitude,
                longitude,
            },
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn geocode(&self, _place: &str) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.coords)
    }
}

/// A geocoder that never finds anything.
pub struct FailingGeocoder;

#[async_trait]
impl Geocoder for FailingGeocoder {
    fn name(&self) -> &str {
        "failing"
    }

    async fn geocode(&self, _place: &str) -> Result<Coordinates, GeocodeError> {
        Err(GeocodeError::NoResults)
    }
}

/// Local wall-clock instant, seconds fixed at zero.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid test timestamp")
}

pub fn new_delhi() -> Location {
    Location::default()
}

/// A valid chart born at 06:30 in New Delhi.
pub fn sample_new_chart() -> NewBirthChart {
    NewBirthChart {
        name: "Asha".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 8, 15).expect("valid test date"),
        birth_time: "06:30".to_string(),
        birth_place: "New Delhi".to_string(),
        latitude: 28.6139,
        longitude: 77.2090,
    }
}
