use std::fmt;

use chrono::{DateTime, Utc};

use crate::ephemeris::{apparent_diameter_deg, Body, Ephemeris};
use crate::error::{Error, Result};
use crate::select::{Selectable, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanetName {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetName {
    pub const ALL: [PlanetName; 7] = [
        PlanetName::Mercury,
        PlanetName::Venus,
        PlanetName::Mars,
        PlanetName::Jupiter,
        PlanetName::Saturn,
        PlanetName::Uranus,
        PlanetName::Neptune,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetName::Mercury => "mercury",
            PlanetName::Venus => "venus",
            PlanetName::Mars => "mars",
            PlanetName::Jupiter => "jupiter",
            PlanetName::Saturn => "saturn",
            PlanetName::Uranus => "uranus",
            PlanetName::Neptune => "neptune",
        }
    }

    pub fn from_name(name: &str) -> Option<PlanetName> {
        let name = name.trim().to_ascii_lowercase();
        PlanetName::ALL.iter().copied().find(|p| p.as_str() == name)
    }

    /// Mean radius in kilometres (NASA solar system sizes, January 2024).
    pub fn radius_km(&self) -> f64 {
        match self {
            PlanetName::Mercury => 2_440.0,
            PlanetName::Venus => 6_052.0,
            PlanetName::Mars => 3_390.0,
            PlanetName::Jupiter => 69_911.0,
            PlanetName::Saturn => 58_232.0,
            PlanetName::Uranus => 25_362.0,
            PlanetName::Neptune => 24_622.0,
        }
    }

    /// Label used on charts unless overridden.
    pub fn default_label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for PlanetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: PlanetName,
    /// Right ascension, in hours.
    pub ra: f64,
    /// Declination, in degrees.
    pub dec: f64,
    /// Apparent diameter, in degrees.
    pub apparent_size: f64,
}

impl Planet {
    pub fn observe(ephemeris: &dyn Ephemeris, name: PlanetName, at: DateTime<Utc>) -> Result<Planet> {
        let place = ephemeris.observe(Body::Planet(name), at)?;
        Ok(Planet {
            name,
            ra: place.ra,
            dec: place.dec,
            apparent_size: apparent_diameter_deg(name.radius_km(), place.distance_km),
        })
    }

    /// All seven planets at `at`, in order from the Sun.
    pub fn all(ephemeris: &dyn Ephemeris, at: DateTime<Utc>) -> Result<Vec<Planet>> {
        PlanetName::ALL
            .iter()
            .map(|&name| Planet::observe(ephemeris, name, at))
            .collect()
    }

    /// Looks a planet up by (case-insensitive) name. Unknown names yield
    /// `Ok(None)`.
    pub fn get(ephemeris: &dyn Ephemeris, name: &str, at: DateTime<Utc>) -> Result<Option<Planet>> {
        match PlanetName::from_name(name) {
            Some(planet) => Planet::observe(ephemeris, planet, at).map(Some),
            None => Ok(None),
        }
    }
}

impl Selectable for Planet {
    const KIND: &'static str = "Planet";

    fn value(&self, attribute: &str) -> Result<Option<Value>> {
        let value = match attribute {
            "name" => Value::from(self.name.as_str()),
            "ra" => Value::Float(self.ra),
            "dec" => Value::Float(self.dec),
            "apparent_size" => Value::Float(self.apparent_size),
            _ => return Err(Error::unknown_attribute(Self::KIND, attribute)),
        };
        Ok(Some(value))
    }
}
