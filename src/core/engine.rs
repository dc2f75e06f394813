//! # Position Engine
//!
//! Maps a (location, wall-clock instant) pair to an angle for each of the nine
//! planet slots, and derives the rashi, house, nakshatra and choghadiya views
//! from those angles.
//!
//! None of this is ephemeris data. Angles come from the clock hour and the
//! longitude with modular arithmetic:
//!
//! ```text
//! angle(i) = normalize((hour + i) * 30 + longitude)     i = 0..8
//! house(i) = floor(angle(i) / 30) + 1
//! ```
//!
//! Every function here is pure: no I/O, no shared state, identical inputs give
//! bit-identical outputs. Callers re-run [`snapshot`] on whatever cadence they
//! like (see `tui::run`).

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::location::Location;
use crate::core::tables::{
    ALL_PLANETS, CHOGHADIYA_COUNT, CHOGHADIYA_MINUTES, Choghadiya, NAKSHATRA_COUNT, Nakshatra,
    PLANET_COUNT, Planet, Rashi,
};

/// Width of one rashi (and one house) in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// Width of one nakshatra band: 360/27 = 13.333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / NAKSHATRA_COUNT as f64;

const MINUTES_PER_DAY: f64 = 1440.0;
const DAY_START_HOUR: u32 = 6;
const NIGHT_START_HOUR: u32 = 18;

// ============================================================================
// Types
// ============================================================================

/// One planet slot's position for a given (location, instant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleSample {
    /// 1..=12
    pub house: u8,
    /// Degrees in [0, 360).
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RashiHouse {
    pub rashi: Rashi,
    /// 1..=12, counted from the point opposite the angle.
    pub house: u8,
}

/// How the current nakshatra index is chosen.
///
/// The two formulas disagree in general; one is picked explicitly per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NakshatraStrategy {
    /// `floor(moon_angle * 27 / 360) mod 27`
    #[default]
    Moon,
    /// `floor(minute_of_day / 1440 * 27 + longitude / 360 * 27) mod 27`
    Clock,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0..27
    pub index: u8,
    /// The Moon's rashi.
    pub rashi: Rashi,
    pub start_degrees: f64,
    pub end_degrees: f64,
    /// Planets other than the Moon whose angle lies inside this band.
    pub companions: Vec<Planet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayHalf {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoghadiyaInfo {
    pub period: Choghadiya,
    /// 0..8 within the current half-day.
    pub index: u8,
    pub half: DayHalf,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ChoghadiyaInfo {
    pub fn is_auspicious(&self) -> bool {
        self.period.is_auspicious()
    }

    /// Period start on the 12-hour clock, e.g. `6:00 AM`.
    pub fn start_label(&self) -> String {
        twelve_hour(self.start)
    }

    pub fn end_label(&self) -> String {
        twelve_hour(self.end)
    }
}

/// A planet slot with every derived view attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    pub angle: f64,
    pub house: u8,
    pub rashi: Rashi,
    pub chart_house: u8,
}

/// Everything the real-time widgets show for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub location: Location,
    pub at: NaiveDateTime,
    pub planets: Vec<PlanetPosition>,
    pub nakshatra: NakshatraInfo,
    pub choghadiya: ChoghadiyaInfo,
}

// ============================================================================
// Operations
// ============================================================================

/// Reduces any finite angle into [0, 360), including negative inputs.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

fn sign_index(angle: f64) -> i64 {
    (angle / SIGN_SPAN).floor() as i64
}

/// Computes the nine slot angles for `location` at `at`.
///
/// The result is positionally aligned with [`ALL_PLANETS`].
pub fn compute_angles(location: &Location, at: NaiveDateTime) -> [AngleSample; PLANET_COUNT] {
    let hour = f64::from(at.hour());
    std::array::from_fn(|slot| {
        let angle = normalize_degrees((hour + slot as f64) * SIGN_SPAN + location.longitude);
        AngleSample {
            house: (sign_index(angle).rem_euclid(12) + 1) as u8,
            angle,
        }
    })
}

/// [`compute_angles`] at the local wall-clock time.
pub fn compute_angles_now(location: &Location) -> [AngleSample; PLANET_COUNT] {
    compute_angles(location, Local::now().naive_local())
}

pub fn rashi_and_house(angle: f64) -> RashiHouse {
    let angle = normalize_degrees(angle);
    let house_index = sign_index(angle + 180.0).rem_euclid(12);
    RashiHouse {
        rashi: Rashi::from_index(sign_index(angle)),
        house: (house_index + 1) as u8,
    }
}

fn nakshatra_index(
    moon_angle: f64,
    at: NaiveDateTime,
    location: &Location,
    strategy: NakshatraStrategy,
) -> i64 {
    let raw = match strategy {
        NakshatraStrategy::Moon => moon_angle * NAKSHATRA_COUNT as f64 / 360.0,
        NakshatraStrategy::Clock => {
            let minute_of_day = f64::from(at.hour() * 60 + at.minute());
            minute_of_day / MINUTES_PER_DAY * NAKSHATRA_COUNT as f64
                + location.longitude / 360.0 * NAKSHATRA_COUNT as f64
        }
    };
    (raw.floor() as i64).rem_euclid(NAKSHATRA_COUNT as i64)
}

pub fn current_nakshatra(
    angles: &[AngleSample; PLANET_COUNT],
    at: NaiveDateTime,
    location: &Location,
    strategy: NakshatraStrategy,
) -> NakshatraInfo {
    let moon_angle = normalize_degrees(angles[Planet::Moon.slot()].angle);
    let index = nakshatra_index(moon_angle, at, location, strategy);

    let start_degrees = index as f64 * NAKSHATRA_SPAN;
    let end_degrees = (index + 1) as f64 * NAKSHATRA_SPAN;

    let companions = ALL_PLANETS
        .iter()
        .zip(angles.iter())
        .filter(|(planet, _)| **planet != Planet::Moon)
        .filter(|(_, sample)| sample.angle >= start_degrees && sample.angle < end_degrees)
        .map(|(planet, _)| *planet)
        .collect();

    NakshatraInfo {
        nakshatra: Nakshatra::from_index(index),
        index: index as u8,
        rashi: Rashi::from_index(sign_index(moon_angle)),
        start_degrees,
        end_degrees,
        companions,
    }
}

pub fn current_choghadiya(at: NaiveDateTime) -> ChoghadiyaInfo {
    let hour = at.hour();
    let (day_start, half) = if (DAY_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
        (DAY_START_HOUR, DayHalf::Day)
    } else {
        (NIGHT_START_HOUR, DayHalf::Night)
    };

    // Always < 720: a half-day is twelve hours.
    let minutes_since_start = ((hour + 24 - day_start) % 24) * 60 + at.minute();
    let index = (minutes_since_start / CHOGHADIYA_MINUTES) % CHOGHADIYA_COUNT as u32;

    let boundary = NaiveTime::from_hms_opt(day_start, 0, 0).unwrap_or_default();
    let start = boundary + TimeDelta::minutes(i64::from(index * CHOGHADIYA_MINUTES));
    let end = start + TimeDelta::minutes(i64::from(CHOGHADIYA_MINUTES));

    ChoghadiyaInfo {
        period: Choghadiya::from_index(i64::from(index)),
        index: index as u8,
        half,
        start,
        end,
    }
}

/// Computes every view for one tick.
pub fn snapshot(location: &Location, at: NaiveDateTime, strategy: NakshatraStrategy) -> Snapshot {
    let angles = compute_angles(location, at);

    let planets = ALL_PLANETS
        .iter()
        .zip(angles.iter())
        .map(|(planet, sample)| {
            let RashiHouse { rashi, house } = rashi_and_house(sample.angle);
            PlanetPosition {
                planet: *planet,
                angle: sample.angle,
                house: sample.house,
                rashi,
                chart_house: house,
            }
        })
        .collect();

    Snapshot {
        location: location.clone(),
        at,
        planets,
        nakshatra: current_nakshatra(&angles, at, location, strategy),
        choghadiya: current_choghadiya(at),
    }
}

/// [`snapshot`] at the local wall-clock time.
pub fn snapshot_now(location: &Location, strategy: NakshatraStrategy) -> Snapshot {
    snapshot(location, Local::now().naive_local(), strategy)
}

fn twelve_hour(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
