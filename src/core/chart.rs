//! # Birth Chart Records
//!
//! The persisted record (`BirthChart`) and its insertable form
//! (`NewBirthChart`). Field names serialize in camelCase to match the HTTP
//! payloads.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::location::{Location, check_coordinates};

/// A stored birth chart. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub id: i64,
    pub name: String,
    pub birth_date: NaiveDate,
    pub birth_time: String,
    pub birth_place: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A birth chart that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBirthChart {
    pub name: String,
    pub birth_date: NaiveDate,
    pub birth_time: String,
    pub birth_place: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A field failed validation. Carries a human-readable reason.
    Invalid(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Invalid(reason) => write!(f, "invalid birth chart: {reason}"),
        }
    }
}

impl std::error::Error for ChartError {}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_birth_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

impl NewBirthChart {
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.name.trim().is_empty() {
            return Err(ChartError::Invalid("name is required".into()));
        }
        if self.birth_place.trim().is_empty() {
            return Err(ChartError::Invalid("birthPlace is required".into()));
        }
        if parse_birth_time(&self.birth_time).is_none() {
            return Err(ChartError::Invalid(format!(
                "birthTime '{}' is not HH:MM",
                self.birth_time
            )));
        }
        check_coordinates(self.latitude, self.longitude)
            .map_err(|e| ChartError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> BirthChart {
        BirthChart {
            id,
            name: self.name,
            birth_date: self.birth_date,
            birth_time: self.birth_time,
            birth_place: self.birth_place,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl BirthChart {
    /// Local wall-clock instant of birth. `None` only for records that
    /// bypassed validation.
    pub fn born_at(&self) -> Option<NaiveDateTime> {
        parse_birth_time(&self.birth_time).map(|t| self.birth_date.and_time(t))
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude, self.birth_place.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_new_chart;

    #[test]
    fn test_valid_chart_passes() {
        assert_eq!(sample_new_chart().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let chart = NewBirthChart {
            name: "   ".into(),
            ..sample_new_chart()
        };
        assert!(matches!(chart.validate(), Err(ChartError::Invalid(msg)) if msg.contains("name")));
    }

    #[test]
    fn test_bad_time_rejected() {
        let chart = NewBirthChart {
            birth_time: "25:99".into(),
            ..sample_new_chart()
        };
        assert!(chart.validate().is_err());
    }

    #[test]
    fn test_latitude_range_enforced() {
        let chart = NewBirthChart {
            latitude: 91.0,
            ..sample_new_chart()
        };
        assert!(chart.validate().is_err());

        let chart = NewBirthChart {
            longitude: f64::NAN,
            ..sample_new_chart()
        };
        assert!(matches!(chart.validate(), Err(ChartError::Invalid(msg)) if msg.contains("finite")));
    }

    #[test]
    fn test_parse_birth_time_accepts_seconds() {
        assert_eq!(parse_birth_time("06:30"), NaiveTime::from_hms_opt(6, 30, 0));
        assert_eq!(parse_birth_time("23:05:09"), NaiveTime::from_hms_opt(23, 5, 9));
        assert_eq!(parse_birth_time("6pm"), None);
    }

    #[test]
    fn test_born_at_and_location() {
        let chart = sample_new_chart().with_id(7);
        assert_eq!(chart.id, 7);
        let born = chart.born_at().unwrap();
        assert_eq!(born.to_string(), "1990-08-15 06:30:00");
        let loc = chart.location();
        assert_eq!(loc.name, "New Delhi");
        assert_eq!(loc.longitude, 77.2090);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample_new_chart().with_id(1)).unwrap();
        assert_eq!(json["birthDate"], "1990-08-15");
        assert_eq!(json["birthTime"], "06:30");
        assert_eq!(json["birthPlace"], "New Delhi");
        assert_eq!(json["id"], 1);
    }
}
