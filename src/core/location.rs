use std::fmt;

use serde::{Deserialize, Serialize};

/// A place on Earth, in decimal degrees.
///
/// Immutable once built. Geocoding and device lookups replace it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;
pub const DEFAULT_LOCATION_NAME: &str = "New Delhi";
/// Label for explicit coordinates that came without a place name.
pub const CUSTOM_LOCATION_NAME: &str = "Custom location";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationError {
    NonFinite { latitude: f64, longitude: f64 },
    LatitudeOutOfRange(f64),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::NonFinite {
                latitude,
                longitude,
            } => write!(f, "coordinates ({latitude}, {longitude}) must be finite numbers"),
            LocationError::LatitudeOutOfRange(latitude) => {
                write!(f, "latitude {latitude} is outside [-90, 90]")
            }
        }
    }
}

impl std::error::Error for LocationError {}

/// Accepts finite coordinates with latitude in [-90, 90]. Longitude may be
/// any finite value; the engine wraps it.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<(), LocationError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(LocationError::NonFinite {
            latitude,
            longitude,
        });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(LocationError::LatitudeOutOfRange(latitude));
    }
    Ok(())
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
        }
    }

    /// [`Location::new`] for user-supplied coordinates, rejecting any that
    /// [`check_coordinates`] refuses.
    pub fn checked(
        latitude: f64,
        longitude: f64,
        name: impl Into<String>,
    ) -> Result<Self, LocationError> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude, name))
    }

    /// True when this is the New Delhi fallback.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_LOCATION_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_new_delhi() {
        let loc = Location::default();
        assert_eq!(loc.name, "New Delhi");
        assert_eq!(loc.latitude, 28.6139);
        assert_eq!(loc.longitude, 77.2090);
        assert!(loc.is_default());
    }

    #[test]
    fn test_named_location_is_not_default() {
        let loc = Location::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE, "Delhi NCR");
        assert!(!loc.is_default());
    }

    #[test]
    fn test_check_coordinates_rejects_non_finite() {
        assert!(matches!(
            check_coordinates(0.0, f64::NAN),
            Err(LocationError::NonFinite { .. })
        ));
        assert!(matches!(
            check_coordinates(f64::INFINITY, 77.2),
            Err(LocationError::NonFinite { .. })
        ));
        assert!(check_coordinates(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_check_coordinates_latitude_range() {
        assert_eq!(
            check_coordinates(999.0, 0.0),
            Err(LocationError::LatitudeOutOfRange(999.0))
        );
        assert!(check_coordinates(-90.5, 0.0).is_err());
        assert_eq!(check_coordinates(90.0, -180.0), Ok(()));
        assert_eq!(check_coordinates(-90.0, 540.0), Ok(()));
    }

    #[test]
    fn test_checked_builds_location() {
        let loc = Location::checked(51.5, -0.12, CUSTOM_LOCATION_NAME).unwrap();
        assert_eq!(loc, Location::new(51.5, -0.12, "Custom location"));
        assert!(Location::checked(51.5, f64::NAN, "London").is_err());
    }
}
