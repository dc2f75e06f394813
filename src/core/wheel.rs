//! # Chart Wheel Geometry
//!
//! Point generation for the 2D birth-chart wheel: twelve house spokes from the
//! centre, a zodiac glyph anchored at the end of each spoke, and planets placed
//! on an inner ring at their computed angle.
//!
//! Coordinates are in SVG user space (y grows downward). House 1 starts at the
//! top of the wheel, hence the -90° offset on every angle.

use serde::Serialize;

use crate::core::engine::AngleSample;
use crate::core::tables::{ALL_PLANETS, ALL_RASHIS, PLANET_COUNT, Planet, Rashi};

/// Fraction of the viewbox the outer circle occupies.
const RADIUS_RATIO: f64 = 0.4;
/// Planet ring, as a fraction of the outer radius.
const PLANET_RING_RATIO: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSpec {
    /// Width and height of the square viewbox.
    pub size: f64,
}

impl Default for WheelSpec {
    fn default() -> Self {
        Self { size: 600.0 }
    }
}

impl WheelSpec {
    pub fn center(&self) -> Point {
        Point {
            x: self.size / 2.0,
            y: self.size / 2.0,
        }
    }

    pub fn radius(&self) -> f64 {
        self.size * RADIUS_RATIO
    }

    /// Point at `radius` from the centre along `degrees` (0° = top).
    fn polar(&self, degrees: f64, radius: f64) -> Point {
        let theta = (degrees - 90.0).to_radians();
        let c = self.center();
        Point {
            x: c.x + radius * theta.cos(),
            y: c.y + radius * theta.sin(),
        }
    }

    /// Outer end of house spoke `index` (0-based, any integer wraps).
    pub fn house_point(&self, index: i64) -> Point {
        self.polar(index.rem_euclid(12) as f64 * 30.0, self.radius())
    }

    pub fn planet_point(&self, angle: f64) -> Point {
        self.polar(angle, self.radius() * PLANET_RING_RATIO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignAnchor {
    pub rashi: Rashi,
    pub glyph: &'static str,
    pub at: Point,
    /// Rotation applied to the glyph group before it is counter-rotated upright.
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetMarker {
    pub planet: Planet,
    pub symbol: &'static str,
    pub at: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelLayout {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub spokes: Vec<Spoke>,
    pub signs: Vec<SignAnchor>,
    pub planets: Vec<PlanetMarker>,
}

pub fn layout(spec: &WheelSpec, samples: &[AngleSample; PLANET_COUNT]) -> WheelLayout {
    let center = spec.center();

    let spokes = (0..12)
        .map(|i| Spoke {
            from: center,
            to: spec.house_point(i),
        })
        .collect();

    let signs = ALL_RASHIS
        .iter()
        .enumerate()
        .map(|(i, rashi)| SignAnchor {
            rashi: *rashi,
            glyph: rashi.glyph(),
            at: spec.house_point(i as i64),
            rotation: i as f64 * 30.0 - 90.0,
        })
        .collect();

    let planets = ALL_PLANETS
        .iter()
        .zip(samples.iter())
        .map(|(planet, sample)| PlanetMarker {
            planet: *planet,
            symbol: planet.symbol(),
            at: spec.planet_point(sample.angle),
        })
        .collect();

    WheelLayout {
        size: spec.size,
        center,
        radius: spec.radius(),
        spokes,
        signs,
        planets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::compute_angles;
    use crate::test_support::{at, new_delhi};

    fn close(a: Point, x: f64, y: f64) -> bool {
        (a.x - x).abs() < 1e-9 && (a.y - y).abs() < 1e-9
    }

    #[test]
    fn test_default_spec_dimensions() {
        let spec = WheelSpec::default();
        assert!(close(spec.center(), 300.0, 300.0));
        assert!((spec.radius() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_house_points_start_at_top_and_go_clockwise() {
        let spec = WheelSpec::default();
        assert!(close(spec.house_point(0), 300.0, 60.0));
        assert!(close(spec.house_point(3), 540.0, 300.0));
        assert!(close(spec.house_point(6), 300.0, 540.0));
        assert!(close(spec.house_point(9), 60.0, 300.0));
        assert_eq!(spec.house_point(12), spec.house_point(0));
        assert_eq!(spec.house_point(-1), spec.house_point(11));
    }

    #[test]
    fn test_layout_counts_and_alignment() {
        let spec = WheelSpec::default();
        let samples = compute_angles(&new_delhi(), at(2024, 1, 1, 6, 0));
        let wheel = layout(&spec, &samples);
        assert_eq!(wheel.spokes.len(), 12);
        assert_eq!(wheel.signs.len(), 12);
        assert_eq!(wheel.planets.len(), 9);
        assert_eq!(wheel.signs[0].glyph, "♈");
        assert_eq!(wheel.planets[1].planet, Planet::Moon);
        assert!(wheel.spokes.iter().all(|s| s.from == wheel.center));
    }

    #[test]
    fn test_planets_sit_on_inner_ring() {
        let spec = WheelSpec { size: 200.0 };
        let samples = compute_angles(&new_delhi(), at(2024, 1, 1, 19, 0));
        let wheel = layout(&spec, &samples);
        let ring = spec.radius() * 0.75;
        for marker in &wheel.planets {
            let dx = marker.at.x - wheel.center.x;
            let dy = marker.at.y - wheel.center.y;
            assert!(((dx * dx + dy * dy).sqrt() - ring).abs() < 1e-9);
        }
    }
}
