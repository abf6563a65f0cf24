//! Map plotting.
//!
//! A [`MapPlot`] owns a drawing surface and a [`PlotStyle`]. Each plotting
//! call (`dsos`, `stars`, `planets`, `moon`) fetches candidates, filters
//! them, draws the survivors and records them in [`PlottedObjects`] and the
//! [`Legend`].

mod dsos;
mod geometry;
mod labels;
mod legend;
mod planets;
mod stars;

pub use dsos::DsoOptions;
pub use geometry::{draw_shape, resolve_shape, DsoShape};
pub use labels::{Labels, LegendLabels};
pub use legend::{Legend, LegendEntry};
pub use planets::BodyOptions;
pub use stars::StarOptions;

use crate::error::BoxError;
use crate::models::{Dso, Moon, Planet, Star};
use crate::style::PlotStyle;
use crate::surface::DrawingSurface;

/// Caller-supplied per-object opacity.
pub type AlphaFn<T> = Box<dyn Fn(&T) -> Result<f64, BoxError>>;

/// Caller-supplied per-object marker size, in points.
pub type SizeFn<T> = Box<dyn Fn(&T) -> Result<f64, BoxError>>;

/// Everything drawn so far, in plotting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlottedObjects {
    pub dsos: Vec<Dso>,
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
    pub moon: Option<Moon>,
}

pub struct MapPlot<S> {
    surface: S,
    style: PlotStyle,
    objects: PlottedObjects,
    legend: Legend,
}

impl<S: DrawingSurface> MapPlot<S> {
    pub fn new(surface: S, style: PlotStyle) -> Self {
        Self {
            surface,
            style,
            objects: PlottedObjects::default(),
            legend: Legend::default(),
        }
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    pub fn objects(&self) -> &PlottedObjects {
        &self.objects
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
