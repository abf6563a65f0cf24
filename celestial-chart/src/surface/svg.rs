use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{Color as _, FontStyle};

use super::{ellipse_outline, rectangle_outline, DrawCall, DrawingSurface, RecordingSurface, SkyRegion};
use crate::error::{Error, Result};
use crate::style::{Color, FillStyle, LabelStyle, MarkerSymbol, ObjectStyle, PolygonStyle};

const ELLIPSE_SEGMENTS: usize = 72;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// SVG chart in a plate carrée projection, RA increasing to the left.
///
/// Draw calls are buffered and rendered in z-order when the SVG is produced,
/// so equal z-orders keep their call order.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    recording: RecordingSurface,
    size: (u32, u32),
    background: Color,
}

impl SvgSurface {
    pub fn new(extent: SkyRegion, size: (u32, u32)) -> Self {
        Self {
            recording: RecordingSurface::new(extent),
            size,
            background: Color::WHITE,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        self.recording.calls()
    }

    pub fn to_svg_string(&self) -> Result<String> {
        let extent = self.recording.extent_mask();
        if !extent.is_valid() || extent.ra_span() <= 0.0 || extent.dec_span() <= 0.0 {
            return Err(Error::Render(format!("cannot project region {extent:?}")));
        }
        let projection = Projection::new(extent, self.size);

        let mut calls: Vec<&DrawCall> = self.calls().iter().collect();
        calls.sort_by_key(|c| c.zorder());

        let mut buf = String::new();
        {
            let root = SVGBackend::with_string(&mut buf, self.size).into_drawing_area();
            root.fill(&rgb(self.background)).map_err(render_error)?;
            for call in calls {
                draw_call(&root, &projection, call)?;
            }
            root.present().map_err(render_error)?;
        }
        Ok(buf)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let svg = self.to_svg_string()?;
        std::fs::write(path.as_ref(), svg)?;
        tracing::debug!(path = %path.as_ref().display(), "wrote svg chart");
        Ok(())
    }
}

impl DrawingSurface for SvgSurface {
    fn marker(&mut self, ra: f64, dec: f64, label: Option<&str>, style: &ObjectStyle) -> Result<()> {
        self.recording.marker(ra, dec, label, style)
    }

    fn polygon(&mut self, points: &[(f64, f64)], style: &PolygonStyle, closed: bool) -> Result<()> {
        self.recording.polygon(points, style, closed)
    }

    fn ellipse(
        &mut self,
        center: (f64, f64),
        width: f64,
        height: f64,
        style: &PolygonStyle,
        angle: f64,
    ) -> Result<()> {
        self.recording.ellipse(center, width, height, style, angle)
    }

    fn rectangle(
        &mut self,
        center: (f64, f64),
        width: f64,
        height: f64,
        style: &PolygonStyle,
        angle: f64,
    ) -> Result<()> {
        self.recording.rectangle(center, width, height, style, angle)
    }

    fn text(&mut self, ra: f64, dec: f64, text: &str, style: &LabelStyle) -> Result<()> {
        self.recording.text(ra, dec, text, style)
    }

    fn in_bounds(&self, ra: f64, dec: f64) -> bool {
        self.recording.in_bounds(ra, dec)
    }

    fn extent_mask(&self) -> SkyRegion {
        self.recording.extent_mask()
    }
}

struct Projection {
    extent: SkyRegion,
    width: f64,
    height: f64,
}

impl Projection {
    fn new(extent: SkyRegion, size: (u32, u32)) -> Self {
        Self {
            extent,
            width: size.0 as f64,
            height: size.1 as f64,
        }
    }

    fn to_pixel(&self, ra: f64, dec: f64) -> (i32, i32) {
        let d_ra = if self.extent.wraps() {
            (self.extent.ra_max - ra).rem_euclid(24.0)
        } else {
            self.extent.ra_max - ra
        };
        let x = d_ra / self.extent.ra_span() * self.width;
        let y = (self.extent.dec_max - dec) / self.extent.dec_span() * self.height;
        (x.round() as i32, y.round() as i32)
    }

    fn path(&self, points: &[(f64, f64)]) -> Vec<(i32, i32)> {
        points.iter().map(|&(ra, dec)| self.to_pixel(ra, dec)).collect()
    }
}

fn render_error(err: impl std::fmt::Display) -> Error {
    Error::Render(err.to_string())
}

fn rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn shape(color: Color, alpha: f64, filled: bool, width: f64) -> ShapeStyle {
    ShapeStyle {
        color: rgb(color).mix(alpha.clamp(0.0, 1.0)),
        filled,
        stroke_width: width.round().max(1.0) as u32,
    }
}

fn draw_call(area: &Area, projection: &Projection, call: &DrawCall) -> Result<()> {
    match call {
        DrawCall::Marker {
            ra,
            dec,
            label,
            style,
        } => {
            let at = projection.to_pixel(*ra, *dec);
            draw_marker(area, at, style)?;
            if let Some(text) = label {
                let label = &style.label;
                let offset = (label.offset_x.round() as i32, -(label.offset_y.round() as i32));
                draw_text(area, (at.0 + offset.0, at.1 + offset.1), text, label)?;
            }
            Ok(())
        }
        DrawCall::Polygon {
            points,
            style,
            closed,
        } => draw_outline(area, projection.path(points), style, *closed),
        DrawCall::Ellipse {
            center,
            width,
            height,
            style,
            angle,
        } => {
            let points = ellipse_outline(*center, *width, *height, *angle, ELLIPSE_SEGMENTS);
            draw_outline(area, projection.path(&points), style, true)
        }
        DrawCall::Rectangle {
            center,
            width,
            height,
            style,
            angle,
        } => {
            let points = rectangle_outline(*center, *width, *height, *angle);
            draw_outline(area, projection.path(&points), style, true)
        }
        DrawCall::Text {
            ra,
            dec,
            text,
            style,
        } => {
            let (x, y) = projection.to_pixel(*ra, *dec);
            let at = (x + style.offset_x.round() as i32, y - style.offset_y.round() as i32);
            draw_text(area, at, text, style)
        }
    }
}

fn draw_outline(area: &Area, mut pixels: Vec<(i32, i32)>, style: &PolygonStyle, closed: bool) -> Result<()> {
    if pixels.len() < 2 {
        return Ok(());
    }
    if let Some(fill) = style.fill_color {
        if closed {
            area.draw(&Polygon::new(pixels.clone(), shape(fill, style.alpha, true, 1.0)))
                .map_err(render_error)?;
        }
    }
    if let Some(edge) = style.edge_color {
        if closed && pixels.first() != pixels.last() {
            pixels.push(pixels[0]);
        }
        area.draw(&PathElement::new(
            pixels,
            shape(edge, style.alpha, false, style.edge_width),
        ))
        .map_err(render_error)?;
    }
    Ok(())
}

fn draw_marker(area: &Area, (x, y): (i32, i32), style: &ObjectStyle) -> Result<()> {
    let marker = &style.marker;
    let r = (marker.size / 2.0).round().max(1.0) as i32;
    let filled = marker.fill == FillStyle::Full;
    let body = shape(marker.color, marker.alpha, filled, marker.edge_width);
    let edge = marker
        .edge_color
        .map(|c| shape(c, marker.alpha, false, marker.edge_width));

    match marker.symbol {
        MarkerSymbol::Point => {
            let r = (r / 2).max(1);
            area.draw(&Circle::new((x, y), r, shape(marker.color, marker.alpha, true, 1.0)))
                .map_err(render_error)?;
        }
        MarkerSymbol::Circle => {
            area.draw(&Circle::new((x, y), r, body)).map_err(render_error)?;
            if let Some(edge) = edge {
                area.draw(&Circle::new((x, y), r, edge)).map_err(render_error)?;
            }
        }
        MarkerSymbol::Square => {
            let corners = vec![(x - r, y - r), (x + r, y - r), (x + r, y + r), (x - r, y + r)];
            draw_glyph(area, corners, body, edge)?;
        }
        MarkerSymbol::Diamond => {
            let corners = vec![(x, y - r), (x + r, y), (x, y + r), (x - r, y)];
            draw_glyph(area, corners, body, edge)?;
        }
        MarkerSymbol::Triangle => {
            let half = (r as f64 * 0.866).round() as i32;
            let corners = vec![(x, y - r), (x + half, y + r / 2), (x - half, y + r / 2)];
            draw_glyph(area, corners, body, edge)?;
        }
        MarkerSymbol::Star => {
            let points = (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { r as f64 } else { r as f64 * 0.45 };
                    let t = std::f64::consts::PI * i as f64 / 5.0;
                    let (sin, cos) = libm::sincos(t);
                    (x + (radius * sin).round() as i32, y - (radius * cos).round() as i32)
                })
                .collect();
            draw_glyph(area, points, body, edge)?;
        }
        MarkerSymbol::Plus => draw_plus(area, (x, y), r, edge.unwrap_or(body))?,
        MarkerSymbol::CircleCross => {
            let ring = shape(marker.color, marker.alpha, false, marker.edge_width);
            if filled {
                area.draw(&Circle::new((x, y), r, body)).map_err(render_error)?;
            }
            area.draw(&Circle::new((x, y), r, edge.unwrap_or(ring)))
                .map_err(render_error)?;
            draw_plus(area, (x, y), r, edge.unwrap_or(ring))?;
        }
    }
    Ok(())
}

fn draw_glyph(area: &Area, mut corners: Vec<(i32, i32)>, body: ShapeStyle, edge: Option<ShapeStyle>) -> Result<()> {
    if body.filled {
        area.draw(&Polygon::new(corners.clone(), body)).map_err(render_error)?;
    }
    let outline = match (body.filled, edge) {
        (_, Some(edge)) => edge,
        (false, None) => body,
        (true, None) => return Ok(()),
    };
    corners.push(corners[0]);
    area.draw(&PathElement::new(corners, outline)).map_err(render_error)?;
    Ok(())
}

fn draw_plus(area: &Area, (x, y): (i32, i32), r: i32, style: ShapeStyle) -> Result<()> {
    let style = ShapeStyle { filled: false, ..style };
    area.draw(&PathElement::new(vec![(x - r, y), (x + r, y)], style))
        .map_err(render_error)?;
    area.draw(&PathElement::new(vec![(x, y - r), (x, y + r)], style))
        .map_err(render_error)?;
    Ok(())
}

fn draw_text(area: &Area, at: (i32, i32), text: &str, style: &LabelStyle) -> Result<()> {
    let mut font = ("sans-serif", style.font_size.max(1.0)).into_font();
    if style.bold {
        font = font.style(FontStyle::Bold);
    }
    let color = rgb(style.font_color).mix(style.font_alpha.clamp(0.0, 1.0));
    area.draw(&Text::new(text.to_string(), at, font.color(&color)))
        .map_err(render_error)?;
    Ok(())
}
