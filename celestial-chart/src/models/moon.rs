use chrono::{DateTime, Utc};

use crate::ephemeris::{apparent_diameter_deg, Body, Ephemeris};
use crate::error::{Error, Result};
use crate::select::{Selectable, Value};

/// Mean radius of the Moon, in kilometres.
pub const MOON_RADIUS_KM: f64 = 1_740.0;

/// Earth's Moon at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    pub name: String,
    /// Right ascension, in hours.
    pub ra: f64,
    /// Declination, in degrees.
    pub dec: f64,
    /// Apparent diameter, in degrees.
    pub apparent_size: f64,
}

impl Moon {
    pub fn get(ephemeris: &dyn Ephemeris, at: DateTime<Utc>) -> Result<Moon> {
        let place = ephemeris.observe(Body::Moon, at)?;
        Ok(Moon {
            name: "Moon".to_string(),
            ra: place.ra,
            dec: place.dec,
            apparent_size: apparent_diameter_deg(MOON_RADIUS_KM, place.distance_km),
        })
    }
}

impl Selectable for Moon {
    const KIND: &'static str = "Moon";

    fn value(&self, attribute: &str) -> Result<Option<Value>> {
        let value = match attribute {
            "name" => Value::from(&self.name),
            "ra" => Value::Float(self.ra),
            "dec" => Value::Float(self.dec),
            "apparent_size" => Value::Float(self.apparent_size),
            _ => return Err(Error::unknown_attribute(Self::KIND, attribute)),
        };
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::ApparentPlace;
    use chrono::TimeZone;

    struct Perigee;

    impl Ephemeris for Perigee {
        fn observe(&self, _body: Body, _at: DateTime<Utc>) -> Result<ApparentPlace> {
            Ok(ApparentPlace {
                ra: 19.5024,
                dec: -26.9649,
                distance_km: 363_300.0,
            })
        }
    }

    #[test]
    fn moon_size_at_perigee() {
        let at = Utc.with_ymd_and_hms(2023, 8, 27, 23, 0, 0).unwrap();
        let moon = Moon::get(&Perigee, at).unwrap();
        assert_eq!(moon.name, "Moon");
        assert!((moon.apparent_size - 0.5488).abs() < 1e-3);
        assert!(Moon::attr("apparent_size").gt(0.5).evaluate(&moon).unwrap());
    }
}
