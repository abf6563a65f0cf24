use crate::error::Result;
use crate::models::Dso;
use crate::style::{MarkerSymbol, ObjectStyle};
use crate::surface::DrawingSurface;

/// How a deep-sky object is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum DsoShape {
    /// Glyph marker at the object's position.
    Marker,
    /// Catalog outline rings, in plot coordinates and closed.
    Outline(Vec<Vec<(f64, f64)>>),
    /// Rotated ellipse; `width` and `height` are full extents in degrees.
    Ellipse {
        center: (f64, f64),
        width: f64,
        height: f64,
        angle: f64,
    },
    Rectangle {
        center: (f64, f64),
        width: f64,
        height: f64,
        angle: f64,
    },
}

impl DsoShape {
    /// True for shapes drawn at the object's true extent.
    pub fn is_true_size(&self) -> bool {
        !matches!(self, DsoShape::Marker)
    }
}

/// Chooses how to draw `dso`.
///
/// Objects without size data, or any object when `true_size` is off, get a
/// marker. Otherwise the catalog outline wins, then the axis extent, then
/// the marker again.
pub fn resolve_shape(dso: &Dso, symbol: MarkerSymbol, true_size: bool) -> DsoShape {
    if !true_size || dso.size.is_none() {
        return DsoShape::Marker;
    }

    if let Some(geometry) = dso.geometry.as_ref().filter(|g| g.is_outline()) {
        let rings: Vec<_> = geometry
            .rings()
            .iter()
            .filter(|ring| {
                let drawable = ring.is_drawable();
                if !drawable {
                    tracing::warn!(name = %dso.name, vertices = ring.0.len(), "dropping malformed outline ring");
                }
                drawable
            })
            .map(|ring| ring.to_plot_coords())
            .collect();
        if !rings.is_empty() {
            return DsoShape::Outline(rings);
        }
    }

    let Some(half_major) = positive(dso.maj_ax).map(half_extent) else {
        return DsoShape::Marker;
    };
    let half_minor = positive(dso.min_ax).map(half_extent).unwrap_or(half_major);
    let center = (dso.ra, dso.dec);
    let width = half_minor * 2.0;
    let height = half_major * 2.0;
    let angle = dso.angle.filter(|a| a.is_finite()).unwrap_or(0.0);

    if symbol == MarkerSymbol::Square {
        DsoShape::Rectangle {
            center,
            width,
            height,
            angle,
        }
    } else {
        DsoShape::Ellipse {
            center,
            width,
            height,
            angle,
        }
    }
}

/// Half of an axis given in arcminutes, in degrees.
fn half_extent(arcmin: f64) -> f64 {
    (arcmin / 60.0) / 2.0
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Draws a resolved shape. Markers carry their label; true-size shapes get a
/// separate text call at the object's position.
pub fn draw_shape<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    dso: &Dso,
    shape: &DsoShape,
    style: &ObjectStyle,
    label: Option<&str>,
) -> Result<()> {
    let polygon_style = style.marker.to_polygon_style();
    match shape {
        DsoShape::Marker => surface.marker(dso.ra, dso.dec, label, style)?,
        DsoShape::Outline(rings) => {
            for ring in rings {
                surface.polygon(ring, &polygon_style, true)?;
            }
        }
        DsoShape::Ellipse {
            center,
            width,
            height,
            angle,
        } => surface.ellipse(*center, *width, *height, &polygon_style, *angle)?,
        DsoShape::Rectangle {
            center,
            width,
            height,
            angle,
        } => surface.rectangle(*center, *width, *height, &polygon_style, *angle)?,
    }
    if let Some(text) = label.filter(|_| shape.is_true_size()) {
        surface.text(dso.ra, dso.dec, text, &style.label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DsoType, Geometry, Ring};
    use crate::surface::{DrawCall, RecordingSurface, SkyRegion};

    fn dso() -> Dso {
        Dso {
            name: "NGC2244".to_string(),
            dso_type: DsoType::OpenCluster,
            ra: 6.53,
            dec: 4.94,
            magnitude: Some(4.8),
            maj_ax: Some(10.0),
            min_ax: None,
            angle: None,
            size: Some(0.02),
            geometry: None,
        }
    }

    fn triangle() -> Ring {
        Ring::new(vec![(97.0, 4.0), (98.0, 4.0), (97.5, 5.0)])
    }

    #[test]
    fn major_axis_only_square_gives_rectangle() {
        match resolve_shape(&dso(), MarkerSymbol::Square, true) {
            DsoShape::Rectangle {
                width,
                height,
                angle,
                center,
            } => {
                assert!((width / 2.0 - 0.0833).abs() < 1e-4);
                assert!((height / 2.0 - 0.0833).abs() < 1e-4);
                assert_eq!(angle, 0.0);
                assert_eq!(center, (6.53, 4.94));
            }
            other => panic!("expected rectangle, got {other:?}"),
        }
    }

    #[test]
    fn round_symbol_gives_rotated_ellipse() {
        let mut d = dso();
        d.min_ax = Some(6.0);
        d.angle = Some(35.0);
        match resolve_shape(&d, MarkerSymbol::Circle, true) {
            DsoShape::Ellipse {
                width,
                height,
                angle,
                ..
            } => {
                assert!((width - 0.1).abs() < 1e-12);
                assert!((height - 10.0 / 60.0).abs() < 1e-12);
                assert_eq!(angle, 35.0);
            }
            other => panic!("expected ellipse, got {other:?}"),
        }
    }

    #[test]
    fn true_size_off_or_no_size_gives_marker() {
        assert_eq!(resolve_shape(&dso(), MarkerSymbol::Circle, false), DsoShape::Marker);
        let mut d = dso();
        d.size = None;
        assert_eq!(resolve_shape(&d, MarkerSymbol::Circle, true), DsoShape::Marker);
    }

    #[test]
    fn size_without_axes_falls_back_to_marker() {
        let mut d = dso();
        d.maj_ax = None;
        assert_eq!(resolve_shape(&d, MarkerSymbol::Circle, true), DsoShape::Marker);
        d.maj_ax = Some(f64::NAN);
        assert_eq!(resolve_shape(&d, MarkerSymbol::Circle, true), DsoShape::Marker);
        d.maj_ax = Some(-3.0);
        assert_eq!(resolve_shape(&d, MarkerSymbol::Circle, true), DsoShape::Marker);
    }

    #[test]
    fn outline_beats_axes() {
        let mut d = dso();
        d.geometry = Some(Geometry::MultiPolygon(vec![triangle(), triangle()]));
        match resolve_shape(&d, MarkerSymbol::Square, true) {
            DsoShape::Outline(rings) => {
                assert_eq!(rings.len(), 2);
                assert_eq!(rings[0].len(), 4);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("expected outline, got {other:?}"),
        }
    }

    #[test]
    fn malformed_rings_fall_back_to_axes() {
        let mut d = dso();
        d.geometry = Some(Geometry::Polygon(Ring::new(vec![(97.0, 4.0), (98.0, 4.0)])));
        assert!(matches!(
            resolve_shape(&d, MarkerSymbol::Circle, true),
            DsoShape::Ellipse { .. }
        ));

        d.geometry = Some(Geometry::MultiPolygon(vec![
            Ring::new(vec![(f64::NAN, 4.0), (98.0, 4.0), (97.5, 5.0)]),
            triangle(),
        ]));
        match resolve_shape(&d, MarkerSymbol::Circle, true) {
            DsoShape::Outline(rings) => assert_eq!(rings.len(), 1),
            other => panic!("expected outline, got {other:?}"),
        }
    }

    #[test]
    fn point_geometry_is_not_an_outline() {
        let mut d = dso();
        d.geometry = Some(Geometry::Point { ra: 97.98, dec: 4.94 });
        assert!(matches!(
            resolve_shape(&d, MarkerSymbol::Circle, true),
            DsoShape::Ellipse { .. }
        ));
    }

    #[test]
    fn marker_carries_label_and_outline_gets_text() {
        let style = ObjectStyle::default();
        let mut surface = RecordingSurface::new(SkyRegion::full());
        draw_shape(&mut surface, &dso(), &DsoShape::Marker, &style, Some("NGC2244")).unwrap();
        assert_eq!(surface.calls().len(), 1);
        assert_eq!(surface.calls()[0].label(), Some("NGC2244"));

        let mut surface = RecordingSurface::new(SkyRegion::full());
        let shape = resolve_shape(&dso(), MarkerSymbol::Circle, true);
        draw_shape(&mut surface, &dso(), &shape, &style, Some("NGC2244")).unwrap();
        assert!(matches!(surface.calls()[0], DrawCall::Ellipse { .. }));
        assert!(matches!(surface.calls()[1], DrawCall::Text { .. }));
    }

    #[test]
    fn only_true_size_shapes_get_text() {
        assert!(!DsoShape::Marker.is_true_size());
        let style = ObjectStyle::default();
        let shapes = [
            DsoShape::Marker,
            resolve_shape(&dso(), MarkerSymbol::Square, true),
        ];
        let text_calls: Vec<usize> = shapes
            .iter()
            .map(|shape| {
                let mut surface = RecordingSurface::new(SkyRegion::full());
                draw_shape(&mut surface, &dso(), shape, &style, Some("NGC2244")).unwrap();
                surface
                    .calls()
                    .iter()
                    .filter(|c| matches!(c, DrawCall::Text { .. }))
                    .count()
            })
            .collect();
        assert_eq!(text_calls, vec![0, 1]);
    }

    #[test]
    fn outline_polygons_are_closed() {
        let mut d = dso();
        d.geometry = Some(Geometry::Polygon(triangle()));
        let shape = resolve_shape(&d, MarkerSymbol::Circle, true);
        let mut surface = RecordingSurface::new(SkyRegion::full());
        draw_shape(&mut surface, &d, &shape, &ObjectStyle::default(), None).unwrap();
        match &surface.calls()[0] {
            DrawCall::Polygon { points, closed, .. } => {
                assert!(*closed);
                assert_eq!(points.first(), points.last());
                assert_eq!(points[0], (97.0 / 15.0, 4.0));
            }
            other => panic!("expected polygon, got {other:?}"),
        }
        assert_eq!(surface.calls().len(), 1);
    }
}
