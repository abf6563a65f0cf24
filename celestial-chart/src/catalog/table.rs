use serde::Deserialize;

use super::{DsoCatalog, DsoRow, StarCatalog, StarRow};
use crate::error::{Error, Result};
use crate::models::DsoType;
use crate::surface::SkyRegion;

/// Deep-sky rows held in memory, queried by linear scan.
#[derive(Debug, Clone, Default)]
pub struct DsoTable {
    rows: Vec<DsoRow>,
}

#[derive(Deserialize)]
struct DsoRows {
    #[serde(default)]
    dso: Vec<DsoRow>,
}

impl DsoTable {
    pub fn new(rows: Vec<DsoRow>) -> Self {
        Self { rows }
    }

    /// Reads rows from a TOML document made of `[[dso]]` tables.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let parsed: DsoRows = toml::from_str(text)?;
        Ok(Self::new(parsed.dso))
    }

    pub fn rows(&self) -> &[DsoRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl DsoCatalog for DsoTable {
    fn query(&self, region: &SkyRegion, types: &[DsoType]) -> Result<Vec<DsoRow>> {
        if !region.is_valid() {
            return Err(Error::Catalog(format!("invalid query region {region:?}")));
        }
        let rows = self
            .rows
            .iter()
            .filter(|row| {
                DsoType::from_code(&row.type_code).is_some_and(|t| types.contains(&t))
            })
            .filter(|row| match (row.ra_degrees, row.dec_degrees) {
                (Some(ra), Some(dec)) => region.contains(ra / 15.0, dec),
                _ => false,
            })
            .cloned()
            .collect();
        Ok(rows)
    }
}

/// Star rows held in memory, queried by linear scan.
#[derive(Debug, Clone, Default)]
pub struct StarTable {
    rows: Vec<StarRow>,
}

impl StarTable {
    pub fn new(rows: Vec<StarRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[StarRow] {
        &self.rows
    }
}

impl StarCatalog for StarTable {
    fn query(&self, region: &SkyRegion) -> Result<Vec<StarRow>> {
        if !region.is_valid() {
            return Err(Error::Catalog(format!("invalid query region {region:?}")));
        }
        let rows = self
            .rows
            .iter()
            .filter(|row| match (row.ra_degrees, row.dec_degrees) {
                (Some(ra), Some(dec)) => region.contains(ra / 15.0, dec),
                _ => false,
            })
            .cloned()
            .collect();
        Ok(rows)
    }
}
