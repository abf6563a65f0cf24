use super::{AlphaFn, Labels, MapPlot, SizeFn};
use crate::catalog::StarCatalog;
use crate::error::{BoxError, Error, Result};
use crate::models::Star;
use crate::select::{evaluate_all, Expr, Selectable};
use crate::surface::DrawingSurface;

const LEGEND_LABEL: &str = "Star";

/// Options for [`MapPlot::stars`].
pub struct StarOptions {
    /// Limiting magnitude. Ignored when `filters` is non-empty.
    pub mag: f64,
    pub labels: Labels,
    pub alpha_fn: Option<AlphaFn<Star>>,
    pub size_fn: Option<SizeFn<Star>>,
    pub filters: Vec<Expr<Star>>,
    pub label_filters: Vec<Expr<Star>>,
}

impl Default for StarOptions {
    fn default() -> Self {
        Self {
            mag: 6.0,
            labels: Labels::default(),
            alpha_fn: None,
            size_fn: None,
            filters: Vec::new(),
            label_filters: Vec::new(),
        }
    }
}

impl StarOptions {
    pub fn mag(mut self, mag: f64) -> Self {
        self.mag = mag;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn alpha_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Star) -> std::result::Result<f64, BoxError> + 'static,
    {
        self.alpha_fn = Some(Box::new(f));
        self
    }

    pub fn size_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Star) -> std::result::Result<f64, BoxError> + 'static,
    {
        self.size_fn = Some(Box::new(f));
        self
    }

    pub fn filter(mut self, expr: Expr<Star>) -> Self {
        self.filters.push(expr);
        self
    }

    pub fn label_filter(mut self, expr: Expr<Star>) -> Self {
        self.label_filters.push(expr);
        self
    }
}

impl<S: DrawingSurface> MapPlot<S> {
    /// Plots stars from `catalog` as markers.
    pub fn stars<C: StarCatalog + ?Sized>(&mut self, catalog: &C, options: StarOptions) -> Result<()> {
        let filters = if options.filters.is_empty() {
            vec![Star::attr("magnitude").le(options.mag)]
        } else {
            options.filters
        };
        let rows = catalog.query(&self.surface.extent_mask())?;
        tracing::debug!(candidates = rows.len(), "plotting stars");
        let before = self.objects.stars.len();

        for row in &rows {
            let Some(star) = Star::from_row(row) else {
                tracing::trace!(hip = ?row.hip, "skipping star without position");
                continue;
            };
            if !evaluate_all(&filters, &star)? {
                continue;
            }
            if !self.surface.in_bounds(star.ra, star.dec) {
                tracing::trace!(hip = ?star.hip, "out of bounds");
                continue;
            }

            let mut style = self.style.star.clone();
            if let Some(alpha_fn) = &options.alpha_fn {
                style.marker.alpha = alpha_fn(&star).map_err(Error::Callback)?;
            }
            if let Some(size_fn) = &options.size_fn {
                style.marker.size = size_fn(&star).map_err(Error::Callback)?;
            }

            let mut label = star
                .name
                .as_deref()
                .and_then(|name| options.labels.resolve(name, name));
            if !options.label_filters.is_empty() && !evaluate_all(&options.label_filters, &star)? {
                label = None;
            }

            self.surface
                .marker(star.ra, star.dec, label.as_deref(), &style)?;
            self.legend.register(LEGEND_LABEL, &style.marker);
            self.objects.stars.push(star);
        }

        tracing::debug!(plotted = self.objects.stars.len() - before, "plotted stars");
        Ok(())
    }
}
