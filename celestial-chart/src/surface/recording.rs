use super::{DrawCall, DrawingSurface, SkyRegion};
use crate::error::Result;
use crate::style::{LabelStyle, ObjectStyle, PolygonStyle};

/// Surface that keeps every draw call in order instead of rendering.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    extent: SkyRegion,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(extent: SkyRegion) -> Self {
        Self {
            extent,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// All label text drawn so far, either attached to markers or as
    /// standalone text.
    pub fn labels(&self) -> Vec<&str> {
        self.calls.iter().filter_map(DrawCall::label).collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn marker(
        &mut self,
        ra: f64,
        dec: f64,
        label: Option<&str>,
        style: &ObjectStyle,
    ) -> Result<()> {
        self.calls.push(DrawCall::Marker {
            ra,
            dec,
            label: label.map(str::to_string),
            style: style.clone(),
        });
        Ok(())
    }

    fn polygon(&mut self, points: &[(f64, f64)], style: &PolygonStyle, closed: bool) -> Result<()> {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            style: style.clone(),
            closed,
        });
        Ok(())
    }

    fn ellipse(
        &mut self,
        center: (f64, f64),
        width: f64,
        height: f64,
        style: &PolygonStyle,
        angle: f64,
    ) -> Result<()> {
        self.calls.push(DrawCall::Ellipse {
            center,
            width,
            height,
            style: style.clone(),
            angle,
        });
        Ok(())
    }

    fn rectangle(
        &mut self,
        center: (f64, f64),
        width: f64,
        height: f64,
        style: &PolygonStyle,
        angle: f64,
    ) -> Result<()> {
        self.calls.push(DrawCall::Rectangle {
            center,
            width,
            height,
            style: style.clone(),
            angle,
        });
        Ok(())
    }

    fn text(&mut self, ra: f64, dec: f64, text: &str, style: &LabelStyle) -> Result<()> {
        self.calls.push(DrawCall::Text {
            ra,
            dec,
            text: text.to_string(),
            style: style.clone(),
        });
        Ok(())
    }

    fn in_bounds(&self, ra: f64, dec: f64) -> bool {
        self.extent.contains(ra, dec)
    }

    fn extent_mask(&self) -> SkyRegion {
        self.extent
    }
}
