use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toml::Table;

use super::{merge_tables, Color, FillStyle, LabelStyle, MarkerStyle, MarkerSymbol, ObjectStyle};
use crate::error::{Error, Result};
use crate::models::DsoType;

/// Styles for deep-sky objects, keyed by type.
///
/// A type without an entry is not plotted. In style files the table is keyed
/// by [`DsoType::style_key`]; unknown keys are rejected when the file is
/// loaded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ObjectStyle>",
    into = "BTreeMap<String, ObjectStyle>"
)]
pub struct DsoStyles(BTreeMap<DsoType, ObjectStyle>);

impl DsoStyles {
    pub fn get(&self, dso_type: DsoType) -> Option<&ObjectStyle> {
        self.0.get(&dso_type)
    }

    pub fn insert(&mut self, dso_type: DsoType, style: ObjectStyle) -> Option<ObjectStyle> {
        self.0.insert(dso_type, style)
    }

    pub fn remove(&mut self, dso_type: DsoType) -> Option<ObjectStyle> {
        self.0.remove(&dso_type)
    }

    /// Types that have no style and will therefore never be drawn.
    pub fn unstyled(&self) -> Vec<DsoType> {
        DsoType::ALL
            .iter()
            .copied()
            .filter(|t| !self.0.contains_key(t))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, ObjectStyle>> for DsoStyles {
    type Error = Error;

    fn try_from(raw: BTreeMap<String, ObjectStyle>) -> Result<Self> {
        let mut styles = BTreeMap::new();
        for (key, style) in raw {
            let dso_type = DsoType::from_style_key(&key)
                .ok_or_else(|| Error::Style(format!("unknown DSO style key `{key}`")))?;
            styles.insert(dso_type, style);
        }
        Ok(Self(styles))
    }
}

impl From<DsoStyles> for BTreeMap<String, ObjectStyle> {
    fn from(styles: DsoStyles) -> Self {
        styles
            .0
            .into_iter()
            .map(|(t, s)| (t.style_key().to_string(), s))
            .collect()
    }
}

/// Complete style for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub background_color: Color,
    pub star: ObjectStyle,
    pub planets: ObjectStyle,
    pub moon: ObjectStyle,
    pub dso: DsoStyles,
}

impl PlotStyle {
    /// Style registry lookup for a deep-sky type.
    pub fn dso_style(&self, dso_type: DsoType) -> Option<&ObjectStyle> {
        self.dso.get(dso_type)
    }

    /// Parses a complete style. Top-level sections that are missing take
    /// their defaults; a `[dso]` section replaces the default DSO styles
    /// entirely.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Returns a copy of this style with `overlay` (TOML text) deep-merged
    /// over it.
    pub fn extend(&self, overlay: &str) -> Result<Self> {
        let overlay: Table = overlay.parse()?;
        self.extend_table(&overlay)
    }

    pub fn extend_table(&self, overlay: &Table) -> Result<Self> {
        let mut base: Table = self.to_toml_string()?.parse()?;
        merge_tables(&mut base, overlay);
        let merged = toml::to_string(&base)?;
        Self::from_toml_str(&merged)
    }
}

impl Default for PlotStyle {
    fn default() -> Self {
        let mut dso = DsoStyles::default();
        let galaxy = dso_style(Color::rgb(0xd8, 0x2c, 0x2c), MarkerSymbol::Circle);
        for t in [DsoType::Galaxy, DsoType::GalaxyPair, DsoType::GalaxyTriplet] {
            dso.insert(t, galaxy.clone());
        }
        dso.insert(
            DsoType::GroupOfGalaxies,
            dso_style(Color::rgb(0xd8, 0x2c, 0x2c), MarkerSymbol::CircleCross),
        );
        dso.insert(
            DsoType::OpenCluster,
            hollow(dso_style(Color::rgb(0xd4, 0x8f, 0x2b), MarkerSymbol::Circle)),
        );
        dso.insert(
            DsoType::GlobularCluster,
            dso_style(Color::rgb(0xd4, 0x8f, 0x2b), MarkerSymbol::CircleCross),
        );
        let nebula = dso_style(Color::rgb(0x37, 0x8f, 0x5a), MarkerSymbol::Square);
        for t in [
            DsoType::Nebula,
            DsoType::EmissionNebula,
            DsoType::StarClusterNebula,
            DsoType::ReflectionNebula,
            DsoType::HiiIonizedRegion,
            DsoType::SupernovaRemnant,
        ] {
            dso.insert(t, nebula.clone());
        }
        dso.insert(
            DsoType::PlanetaryNebula,
            dso_style(Color::rgb(0x37, 0x8f, 0x5a), MarkerSymbol::CircleCross),
        );
        dso.insert(
            DsoType::DarkNebula,
            hollow(dso_style(Color::rgb(0x5a, 0x5a, 0x5a), MarkerSymbol::Square)),
        );

        Self {
            background_color: Color::WHITE,
            star: ObjectStyle {
                marker: MarkerStyle {
                    color: Color::rgb(0x0a, 0x0a, 0x0a),
                    symbol: MarkerSymbol::Point,
                    size: 6.0,
                    zorder: 5,
                    ..Default::default()
                },
                label: label(Color::rgb(0x0a, 0x0a, 0x0a), 9.0),
            },
            planets: ObjectStyle {
                marker: MarkerStyle {
                    color: Color::rgb(0x27, 0x5d, 0xa8),
                    symbol: MarkerSymbol::Circle,
                    size: 8.0,
                    zorder: 6,
                    ..Default::default()
                },
                label: label(Color::rgb(0x27, 0x5d, 0xa8), 10.0),
            },
            moon: ObjectStyle {
                marker: MarkerStyle {
                    color: Color::rgb(0xc8, 0xc8, 0xc8),
                    symbol: MarkerSymbol::Circle,
                    size: 14.0,
                    edge_color: Some(Color::rgb(0x5a, 0x5a, 0x5a)),
                    zorder: 6,
                    ..Default::default()
                },
                label: label(Color::rgb(0x5a, 0x5a, 0x5a), 10.0),
            },
            dso,
        }
    }
}

fn dso_style(color: Color, symbol: MarkerSymbol) -> ObjectStyle {
    ObjectStyle {
        marker: MarkerStyle {
            color,
            symbol,
            size: 5.0,
            alpha: 0.8,
            zorder: 3,
            ..Default::default()
        },
        label: label(color, 8.0),
    }
}

fn hollow(mut style: ObjectStyle) -> ObjectStyle {
    style.marker.fill = FillStyle::None;
    style
}

fn label(color: Color, font_size: f64) -> LabelStyle {
    LabelStyle {
        font_color: color,
        font_size,
        offset_x: 4.0,
        offset_y: 4.0,
        zorder: 7,
        ..Default::default()
    }
}
