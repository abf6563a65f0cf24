use chrono::{DateTime, Utc};

use super::{Labels, MapPlot};
use crate::ephemeris::Ephemeris;
use crate::error::Result;
use crate::models::{Moon, Planet};
use crate::style::ObjectStyle;
use crate::surface::DrawingSurface;

/// Options for [`MapPlot::planets`] and [`MapPlot::moon`].
#[derive(Debug, Clone, PartialEq)]
pub struct BodyOptions {
    /// Draw the body as a disc of its apparent diameter.
    pub true_size: bool,
    /// Overrides are keyed by lower-case body name (`"mars"`, `"moon"`).
    pub labels: Labels,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            true_size: false,
            labels: Labels::default(),
        }
    }
}

impl BodyOptions {
    pub fn true_size(mut self, true_size: bool) -> Self {
        self.true_size = true_size;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

impl<S: DrawingSurface> MapPlot<S> {
    /// Plots the planets visible on this map at `at`.
    pub fn planets(&mut self, ephemeris: &dyn Ephemeris, at: DateTime<Utc>, options: BodyOptions) -> Result<()> {
        let planets = Planet::all(ephemeris, at)?;
        tracing::debug!(%at, "plotting planets");
        for planet in planets {
            if !self.surface.in_bounds(planet.ra, planet.dec) {
                tracing::trace!(planet = %planet.name, "out of bounds");
                continue;
            }
            let label = options
                .labels
                .resolve(planet.name.as_str(), &planet.name.default_label());
            let style = self.style.planets.clone();
            self.draw_body(
                (planet.ra, planet.dec),
                planet.apparent_size,
                &style,
                label.as_deref(),
                options.true_size,
            )?;
            self.legend.register("Planet", &style.marker);
            self.objects.planets.push(planet);
        }
        Ok(())
    }

    /// Plots the Moon at `at` if it is on this map.
    pub fn moon(&mut self, ephemeris: &dyn Ephemeris, at: DateTime<Utc>, options: BodyOptions) -> Result<()> {
        let moon = Moon::get(ephemeris, at)?;
        if !self.surface.in_bounds(moon.ra, moon.dec) {
            tracing::debug!(%at, "moon is off the map");
            return Ok(());
        }
        let label = options.labels.resolve("moon", &moon.name);
        let style = self.style.moon.clone();
        self.draw_body(
            (moon.ra, moon.dec),
            moon.apparent_size,
            &style,
            label.as_deref(),
            options.true_size,
        )?;
        self.legend.register("Moon", &style.marker);
        self.objects.moon = Some(moon);
        Ok(())
    }

    fn draw_body(
        &mut self,
        (ra, dec): (f64, f64),
        diameter: f64,
        style: &ObjectStyle,
        label: Option<&str>,
        true_size: bool,
    ) -> Result<()> {
        if !true_size {
            return self.surface.marker(ra, dec, label, style);
        }
        let polygon = style.marker.to_polygon_style();
        self.surface
            .ellipse((ra, dec), diameter, diameter, &polygon, 0.0)?;
        if let Some(text) = label {
            self.surface.text(ra, dec, text, &style.label)?;
        }
        Ok(())
    }
}
