//! Visual styles for markers, polygons and labels.
//!
//! Styles are plain `serde` values so whole themes can be stored as TOML
//! (see [`PlotStyle`]). Every field has a default, which lets a style file
//! set only what it changes.

mod color;
mod merge;
mod plot_style;

pub use color::Color;
pub use merge::merge_tables;
pub use plot_style::{DsoStyles, PlotStyle};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    Point,
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
    Star,
    Plus,
    CircleCross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStyle {
    #[default]
    Full,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    pub color: Color,
    pub symbol: MarkerSymbol,
    /// Marker size, in points.
    pub size: f64,
    pub fill: FillStyle,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f64,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub zorder: i32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            symbol: MarkerSymbol::Circle,
            size: 4.0,
            fill: FillStyle::Full,
            alpha: 1.0,
            edge_color: None,
            edge_width: 1.0,
            zorder: 1,
        }
    }
}

impl MarkerStyle {
    /// Equivalent polygon style, used when an object is drawn at its true
    /// size instead of as a glyph.
    pub fn to_polygon_style(&self) -> PolygonStyle {
        PolygonStyle {
            fill_color: match self.fill {
                FillStyle::Full => Some(self.color),
                FillStyle::None => None,
            },
            edge_color: Some(self.edge_color.unwrap_or(self.color)),
            edge_width: self.edge_width,
            alpha: self.alpha,
            zorder: self.zorder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonStyle {
    pub fill_color: Option<Color>,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub alpha: f64,
    pub zorder: i32,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            fill_color: None,
            edge_color: Some(Color::BLACK),
            edge_width: 1.0,
            alpha: 1.0,
            zorder: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font_size: f64,
    pub font_color: Color,
    pub font_alpha: f64,
    pub bold: bool,
    /// Offset from the anchor, in points.
    pub offset_x: f64,
    pub offset_y: f64,
    pub zorder: i32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            font_color: Color::BLACK,
            font_alpha: 1.0,
            bold: false,
            offset_x: 0.0,
            offset_y: 0.0,
            zorder: 1,
        }
    }
}

/// Marker plus label style for one kind of object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStyle {
    pub marker: MarkerStyle,
    pub label: LabelStyle,
}
