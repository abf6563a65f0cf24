use super::{DsoType, Geometry};
use crate::catalog::DsoRow;
use crate::error::{Error, Result};
use crate::select::{Selectable, Value};

/// A deep-sky object built from one catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dso {
    /// Catalog designation, e.g. `NGC1976`.
    pub name: String,
    pub dso_type: DsoType,
    /// Right ascension, in hours.
    pub ra: f64,
    /// Declination, in degrees.
    pub dec: f64,
    /// V magnitude, or B magnitude when V is missing.
    pub magnitude: Option<f64>,
    /// Major axis, in arcminutes.
    pub maj_ax: Option<f64>,
    /// Minor axis, in arcminutes.
    pub min_ax: Option<f64>,
    /// Position angle of the major axis, in degrees.
    pub angle: Option<f64>,
    /// Area on the sky, in square degrees.
    pub size: Option<f64>,
    pub geometry: Option<Geometry>,
}

impl Dso {
    /// Builds an object from a catalog row.
    ///
    /// Returns `None` when the row has no position or its type code does not
    /// map to a [`DsoType`]. Non-finite catalog values are treated as null.
    pub fn from_row(row: &DsoRow) -> Option<Dso> {
        let ra_degrees = row.ra_degrees?;
        let dec = row.dec_degrees?;
        let dso_type = DsoType::from_code(&row.type_code)?;
        Some(Dso {
            name: row.name.clone(),
            dso_type,
            ra: ra_degrees / 15.0,
            dec,
            magnitude: finite(row.v_mag).or(finite(row.b_mag)),
            maj_ax: finite(row.maj_ax),
            min_ax: finite(row.min_ax),
            angle: finite(row.pos_ang),
            size: finite(row.size_deg2),
            geometry: row.geometry.clone(),
        })
    }
}

/// Catalog backends mark missing values with NaN.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl Selectable for Dso {
    const KIND: &'static str = "DSO";

    fn value(&self, attribute: &str) -> Result<Option<Value>> {
        let value = match attribute {
            "name" => Some(Value::from(&self.name)),
            "type" => Some(Value::from(self.dso_type.code())),
            "ra" => Some(Value::Float(self.ra)),
            "dec" => Some(Value::Float(self.dec)),
            "magnitude" => self.magnitude.map(Value::Float),
            "maj_ax" => self.maj_ax.map(Value::Float),
            "min_ax" => self.min_ax.map(Value::Float),
            "angle" => self.angle.map(Value::Float),
            "size" => self.size.map(Value::Float),
            _ => return Err(Error::unknown_attribute(Self::KIND, attribute)),
        };
        Ok(value)
    }
}
