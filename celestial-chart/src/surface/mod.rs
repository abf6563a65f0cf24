//! Drawing surfaces.
//!
//! Plot code talks to a [`DrawingSurface`] in sky coordinates: right
//! ascension in hours, declination in degrees, sizes in degrees of sky.
//! Projection to pixels is the surface's business.

mod recording;
mod svg;

pub use recording::RecordingSurface;
pub use svg::SvgSurface;

use crate::error::Result;
use crate::style::{LabelStyle, ObjectStyle, PolygonStyle};

/// A rectangle of sky. RA bounds are hours, Dec bounds degrees.
///
/// When `ra_min > ra_max` the region wraps through 0h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyRegion {
    pub ra_min: f64,
    pub ra_max: f64,
    pub dec_min: f64,
    pub dec_max: f64,
}

impl SkyRegion {
    pub fn new(ra_min: f64, ra_max: f64, dec_min: f64, dec_max: f64) -> Self {
        Self {
            ra_min,
            ra_max,
            dec_min,
            dec_max,
        }
    }

    /// The whole sky.
    pub fn full() -> Self {
        Self::new(0.0, 24.0, -90.0, 90.0)
    }

    pub fn is_valid(&self) -> bool {
        let finite = [self.ra_min, self.ra_max, self.dec_min, self.dec_max]
            .iter()
            .all(|v| v.is_finite());
        finite
            && (0.0..=24.0).contains(&self.ra_min)
            && (0.0..=24.0).contains(&self.ra_max)
            && self.dec_min <= self.dec_max
            && self.dec_min >= -90.0
            && self.dec_max <= 90.0
    }

    pub fn wraps(&self) -> bool {
        self.ra_min > self.ra_max
    }

    /// RA width in hours, accounting for wrap.
    pub fn ra_span(&self) -> f64 {
        if self.wraps() {
            self.ra_max + 24.0 - self.ra_min
        } else {
            self.ra_max - self.ra_min
        }
    }

    pub fn dec_span(&self) -> f64 {
        self.dec_max - self.dec_min
    }

    pub fn center(&self) -> (f64, f64) {
        let ra = (self.ra_min + self.ra_span() / 2.0).rem_euclid(24.0);
        (ra, (self.dec_min + self.dec_max) / 2.0)
    }

    pub fn contains(&self, ra: f64, dec: f64) -> bool {
        if !ra.is_finite() || !dec.is_finite() {
            return false;
        }
        if dec < self.dec_min || dec > self.dec_max {
            return false;
        }
        if self.ra_min == 0.0 && self.ra_max == 24.0 {
            return true;
        }
        let ra = ra.rem_euclid(24.0);
        if self.wraps() {
            ra >= self.ra_min || ra <= self.ra_max
        } else {
            ra >= self.ra_min && ra <= self.ra_max
        }
    }
}

/// The primitives a chart is drawn with.
pub trait DrawingSurface {
    /// Draws a glyph marker, with its label if one is given.
    fn marker(&mut self, ra: f64, dec: f64, label: Option<&str>, style: &ObjectStyle)
        -> Result<()>;

    fn polygon(&mut self, points: &[(f64, f64)], style: &PolygonStyle, closed: bool) -> Result<()>;

    /// `width` and `height` are full extents in degrees; `angle` is a
    /// position angle in degrees, north through east.
    fn ellipse(
        &mut self,
        center: (f64, f64),
        width: f64,
        height: f64,
        style: &PolygonStyle,
        angle: f64,
    ) -> Result<()>;

    fn rectangle(
        &mut self,
        center: (f64, f64),
        width: f64,
        height: f64,
        style: &PolygonStyle,
        angle: f64,
    ) -> Result<()>;

    fn text(&mut self, ra: f64, dec: f64, text: &str, style: &LabelStyle) -> Result<()>;

    /// Precise visibility test for a position.
    fn in_bounds(&self, ra: f64, dec: f64) -> bool;

    /// Region used to restrict catalog queries.
    fn extent_mask(&self) -> SkyRegion;
}

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Marker {
        ra: f64,
        dec: f64,
        label: Option<String>,
        style: ObjectStyle,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        style: PolygonStyle,
        closed: bool,
    },
    Ellipse {
        center: (f64, f64),
        width: f64,
        height: f64,
        style: PolygonStyle,
        angle: f64,
    },
    Rectangle {
        center: (f64, f64),
        width: f64,
        height: f64,
        style: PolygonStyle,
        angle: f64,
    },
    Text {
        ra: f64,
        dec: f64,
        text: String,
        style: LabelStyle,
    },
}

impl DrawCall {
    pub fn zorder(&self) -> i32 {
        match self {
            DrawCall::Marker { style, .. } => style.marker.zorder,
            DrawCall::Polygon { style, .. }
            | DrawCall::Ellipse { style, .. }
            | DrawCall::Rectangle { style, .. } => style.zorder,
            DrawCall::Text { style, .. } => style.zorder,
        }
    }

    /// Label text carried by a marker or text call.
    pub fn label(&self) -> Option<&str> {
        match self {
            DrawCall::Marker { label, .. } => label.as_deref(),
            DrawCall::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Outline of an ellipse, in sky coordinates.
///
/// The major extent (`height`) lies along the position angle, measured from
/// north toward east.
pub fn ellipse_outline(
    center: (f64, f64),
    width: f64,
    height: f64,
    angle: f64,
    segments: usize,
) -> Vec<(f64, f64)> {
    let segments = segments.max(8);
    (0..segments)
        .map(|i| {
            let t = 2.0 * std::f64::consts::PI * i as f64 / segments as f64;
            let east = width / 2.0 * libm::cos(t);
            let north = height / 2.0 * libm::sin(t);
            offset(center, east, north, angle)
        })
        .collect()
}

/// Corners of a rectangle, in sky coordinates, rotated like
/// [`ellipse_outline`].
pub fn rectangle_outline(center: (f64, f64), width: f64, height: f64, angle: f64) -> Vec<(f64, f64)> {
    let (w, h) = (width / 2.0, height / 2.0);
    [(-w, -h), (w, -h), (w, h), (-w, h)]
        .into_iter()
        .map(|(east, north)| offset(center, east, north, angle))
        .collect()
}

/// Moves `center` by a local east/north offset in degrees, after rotating
/// the offset by `angle`.
fn offset(center: (f64, f64), east: f64, north: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = libm::sincos(angle.to_radians());
    let e = east * cos + north * sin;
    let n = -east * sin + north * cos;
    let (ra, dec) = center;
    let cos_dec = libm::cos(dec.to_radians()).abs().max(1e-6);
    (ra + e / 15.0 / cos_dec, dec + n)
}
