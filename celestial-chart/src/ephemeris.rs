//! Solar-system positions supplied by an external ephemeris.
//!
//! The chart never computes planetary positions itself. Callers plug in an
//! [`Ephemeris`] (a JPL kernel reader, a VSOP series, a fixed table in tests)
//! and the planet and Moon models derive apparent sizes from the returned
//! distance.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::PlanetName;

/// Body whose apparent place is requested from an [`Ephemeris`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Moon,
    Planet(PlanetName),
}

/// Apparent geocentric place of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPlace {
    /// Right ascension, in hours.
    pub ra: f64,
    /// Declination, in degrees.
    pub dec: f64,
    /// Distance from the observer, in kilometres.
    pub distance_km: f64,
}

pub trait Ephemeris {
    fn observe(&self, body: Body, at: DateTime<Utc>) -> Result<ApparentPlace>;
}

/// Angular diameter, in degrees, of a sphere of `radius_km` seen from
/// `distance_km`.
pub fn apparent_diameter_deg(radius_km: f64, distance_km: f64) -> f64 {
    let ratio = (radius_km / distance_km).clamp(-1.0, 1.0);
    (libm::asin(ratio) * 2.0).to_degrees()
}
