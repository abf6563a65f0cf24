//! Catalog rows and the query seam the plot layer reads them through.
//!
//! Parsing of the on-disk catalogs lives outside this crate. Anything that
//! can answer a region query with rows in the column layout below can back
//! a chart: implement [`DsoCatalog`] / [`StarCatalog`], or load rows into
//! the in-memory [`DsoTable`] / [`StarTable`].

mod table;

pub use table::{DsoTable, StarTable};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DsoType, Geometry, Ring};
use crate::surface::SkyRegion;

/// One deep-sky catalog record, column names as in OpenNGC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DsoRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub type_code: String,
    #[serde(default)]
    pub ra_degrees: Option<f64>,
    #[serde(default)]
    pub dec_degrees: Option<f64>,
    #[serde(rename = "MajAx", default)]
    pub maj_ax: Option<f64>,
    #[serde(rename = "MinAx", default)]
    pub min_ax: Option<f64>,
    #[serde(rename = "PosAng", default)]
    pub pos_ang: Option<f64>,
    #[serde(rename = "V-Mag", default)]
    pub v_mag: Option<f64>,
    #[serde(rename = "B-Mag", default)]
    pub b_mag: Option<f64>,
    #[serde(default)]
    pub size_deg2: Option<f64>,
    #[serde(default, with = "geometry_serde")]
    pub geometry: Option<Geometry>,
}

impl DsoRow {
    /// A row with only identity and position set.
    pub fn new(name: &str, dso_type: DsoType, ra_degrees: f64, dec_degrees: f64) -> Self {
        Self {
            name: name.to_string(),
            type_code: dso_type.code().to_string(),
            ra_degrees: Some(ra_degrees),
            dec_degrees: Some(dec_degrees),
            maj_ax: None,
            min_ax: None,
            pos_ang: None,
            v_mag: None,
            b_mag: None,
            size_deg2: None,
            geometry: None,
        }
    }
}

/// One star catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hip: Option<u32>,
    #[serde(default)]
    pub ra_degrees: Option<f64>,
    #[serde(default)]
    pub dec_degrees: Option<f64>,
    pub magnitude: f64,
    #[serde(default)]
    pub bv: Option<f64>,
}

pub trait DsoCatalog {
    /// Rows whose position falls in `region` and whose type code belongs to
    /// one of `types`, in catalog order. Rows without a position may be
    /// returned; the caller drops them.
    fn query(&self, region: &SkyRegion, types: &[DsoType]) -> Result<Vec<DsoRow>>;
}

pub trait StarCatalog {
    /// Rows whose position falls in `region`, in catalog order.
    fn query(&self, region: &SkyRegion) -> Result<Vec<StarRow>>;
}

/// Serde shape for outline geometry: `{ type = "Polygon", coordinates = [...] }`,
/// loosely following GeoJSON.
mod geometry_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Geometry, Ring};

    #[derive(Serialize, Deserialize)]
    #[serde(tag = "type", content = "coordinates")]
    enum Shape {
        Point([f64; 2]),
        Polygon(Vec<[f64; 2]>),
        MultiPolygon(Vec<Vec<[f64; 2]>>),
    }

    fn ring(points: Vec<[f64; 2]>) -> Ring {
        Ring::new(points.into_iter().map(|[x, y]| (x, y)).collect())
    }

    fn points(ring: &Ring) -> Vec<[f64; 2]> {
        ring.0.iter().map(|&(x, y)| [x, y]).collect()
    }

    pub fn serialize<S: Serializer>(value: &Option<Geometry>, serializer: S) -> Result<S::Ok, S::Error> {
        let shape = value.as_ref().map(|g| match g {
            Geometry::Point { ra, dec } => Shape::Point([*ra, *dec]),
            Geometry::Polygon(r) => Shape::Polygon(points(r)),
            Geometry::MultiPolygon(rs) => Shape::MultiPolygon(rs.iter().map(points).collect()),
        });
        shape.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Geometry>, D::Error> {
        let shape = Option::<Shape>::deserialize(deserializer)?;
        Ok(shape.map(|s| match s {
            Shape::Point([ra, dec]) => Geometry::Point { ra, dec },
            Shape::Polygon(p) => Geometry::Polygon(ring(p)),
            Shape::MultiPolygon(ps) => Geometry::MultiPolygon(ps.into_iter().map(ring).collect()),
        }))
    }
}
