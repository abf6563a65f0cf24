use super::dso::finite;
use crate::catalog::{StarCatalog, StarRow};
use crate::error::{Error, Result};
use crate::select::{find, Selectable, Value};
use crate::surface::SkyRegion;

/// A star built from one catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: Option<String>,
    /// Hipparcos catalog number.
    pub hip: Option<u32>,
    /// Right ascension, in hours.
    pub ra: f64,
    /// Declination, in degrees.
    pub dec: f64,
    pub magnitude: f64,
    /// B-V color index.
    pub bv: Option<f64>,
}

impl Star {
    pub fn new(name: &str, magnitude: f64, ra: f64, dec: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            hip: None,
            ra,
            dec,
            magnitude,
            bv: None,
        }
    }

    /// Returns `None` when the row has no position.
    pub fn from_row(row: &StarRow) -> Option<Star> {
        Some(Star {
            name: row.name.clone(),
            hip: row.hip,
            ra: row.ra_degrees? / 15.0,
            dec: row.dec_degrees?,
            magnitude: row.magnitude,
            bv: finite(row.bv),
        })
    }

    /// First star in `catalog` named `name`, anywhere on the sky.
    pub fn get<C: StarCatalog + ?Sized>(catalog: &C, name: &str) -> Result<Option<Star>> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "a star name is required".to_string(),
            ));
        }
        let rows = catalog.query(&SkyRegion::full())?;
        let stars = rows
            .iter()
            .filter_map(Star::from_row);
        let found = find(stars, &[Star::attr("name").equals(name)])?;
        Ok(found.into_iter().next())
    }
}

impl Selectable for Star {
    const KIND: &'static str = "Star";

    fn value(&self, attribute: &str) -> Result<Option<Value>> {
        let value = match attribute {
            "name" => self.name.as_ref().map(Value::from),
            "hip" => self.hip.map(Value::from),
            "ra" => Some(Value::Float(self.ra)),
            "dec" => Some(Value::Float(self.dec)),
            "magnitude" => Some(Value::Float(self.magnitude)),
            "bv" => self.bv.map(Value::Float),
            _ => return Err(Error::unknown_attribute(Self::KIND, attribute)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarTable;

    #[test]
    fn from_row_requires_position() {
        let row = StarRow {
            name: Some("Sirius".to_string()),
            hip: Some(32349),
            ra_degrees: Some(101.287),
            dec_degrees: Some(-16.716),
            magnitude: -1.44,
            bv: Some(0.009),
        };
        let star = Star::from_row(&row).unwrap();
        assert_eq!(star.hip, Some(32349));
        assert!((star.ra - 6.7525).abs() < 1e-3);

        let unplaced = StarRow {
            dec_degrees: None,
            ..row
        };
        assert!(Star::from_row(&unplaced).is_none());
    }

    #[test]
    fn nan_color_index_is_null() {
        let row = StarRow {
            name: Some("Rigel".to_string()),
            hip: Some(24436),
            ra_degrees: Some(78.63),
            dec_degrees: Some(-8.2),
            magnitude: 0.13,
            bv: Some(f64::NAN),
        };
        let star = Star::from_row(&row).unwrap();
        assert_eq!(star.bv, None);
        assert_eq!(star.value("bv").unwrap(), None);
    }

    fn catalog() -> StarTable {
        let row = |name: &str, hip, ra_degrees, dec_degrees, magnitude| StarRow {
            name: Some(name.to_string()),
            hip: Some(hip),
            ra_degrees: Some(ra_degrees),
            dec_degrees: Some(dec_degrees),
            magnitude,
            bv: None,
        };
        StarTable::new(vec![
            row("Betelgeuse", 27989, 88.79, 7.41, 0.45),
            row("Vega", 91262, 279.23, 38.78, 0.03),
            StarRow {
                name: None,
                ..row("", 1, 10.0, 10.0, 9.0)
            },
        ])
    }

    #[test]
    fn get_finds_star_by_name() {
        let vega = Star::get(&catalog(), "Vega").unwrap().unwrap();
        assert_eq!(vega.hip, Some(91262));
        assert!(Star::get(&catalog(), "Polaris").unwrap().is_none());
    }

    #[test]
    fn get_requires_a_name() {
        let err = Star::get(&catalog(), " ").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn hip_is_an_integer_attribute() {
        let mut star = Star::new("Sirius", -1.44, 6.75, -16.7);
        assert_eq!(star.value("hip").unwrap(), None);
        star.hip = Some(32349);
        assert_eq!(star.value("hip").unwrap(), Some(Value::Int(32349)));
    }
}
