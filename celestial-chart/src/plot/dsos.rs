use super::geometry::{draw_shape, resolve_shape};
use super::{AlphaFn, Labels, LegendLabels, MapPlot};
use crate::catalog::DsoCatalog;
use crate::error::{BoxError, Error, Result};
use crate::models::{Dso, DsoType, DEFAULT_DSO_TYPES, GALAXY_TYPES, NEBULA_TYPES};
use crate::select::{evaluate_all, Expr, Selectable};
use crate::surface::DrawingSurface;

/// Options for [`MapPlot::dsos`].
pub struct DsoOptions {
    /// Limiting magnitude. Ignored when `filters` is non-empty.
    pub mag: f64,
    pub types: Vec<DsoType>,
    /// Draw objects at their apparent extent when the catalog has one.
    pub true_size: bool,
    pub labels: Labels,
    pub legend_labels: LegendLabels,
    pub alpha_fn: Option<AlphaFn<Dso>>,
    /// Objects are plotted only when all of these hold.
    pub filters: Vec<Expr<Dso>>,
    /// Objects are labeled only when all of these hold.
    pub label_filters: Vec<Expr<Dso>>,
}

impl Default for DsoOptions {
    fn default() -> Self {
        Self {
            mag: 8.0,
            types: DEFAULT_DSO_TYPES.to_vec(),
            true_size: true,
            labels: Labels::default(),
            legend_labels: LegendLabels::default(),
            alpha_fn: None,
            filters: Vec::new(),
            label_filters: Vec::new(),
        }
    }
}

impl DsoOptions {
    pub fn mag(mut self, mag: f64) -> Self {
        self.mag = mag;
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = DsoType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn true_size(mut self, true_size: bool) -> Self {
        self.true_size = true_size;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn legend_labels(mut self, legend_labels: LegendLabels) -> Self {
        self.legend_labels = legend_labels;
        self
    }

    pub fn alpha_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Dso) -> std::result::Result<f64, BoxError> + 'static,
    {
        self.alpha_fn = Some(Box::new(f));
        self
    }

    pub fn filter(mut self, expr: Expr<Dso>) -> Self {
        self.filters.push(expr);
        self
    }

    pub fn label_filter(mut self, expr: Expr<Dso>) -> Self {
        self.label_filters.push(expr);
        self
    }
}

impl<S: DrawingSurface> MapPlot<S> {
    /// Plots deep-sky objects from `catalog` that fall on this map.
    pub fn dsos<C: DsoCatalog + ?Sized>(&mut self, catalog: &C, options: DsoOptions) -> Result<()> {
        if options.types.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one DSO type is required".to_string(),
            ));
        }
        let filters = if options.filters.is_empty() {
            vec![Dso::attr("magnitude").is_null() | Dso::attr("magnitude").le(options.mag)]
        } else {
            options.filters
        };
        tracing::debug!(types = options.types.len(), filters = %describe(&filters), "plotting DSOs");

        let rows = catalog.query(&self.surface.extent_mask(), &options.types)?;
        let before = self.objects.dsos.len();

        for row in &rows {
            let Some(dso) = Dso::from_row(row) else {
                tracing::trace!(name = %row.name, "skipping row without position or known type");
                continue;
            };
            let style = self.style.dso_style(dso.dso_type);
            let selected = evaluate_all(&filters, &dso)?;
            let Some(style) = style else {
                tracing::trace!(name = %dso.name, dso_type = %dso.dso_type, "no style for type");
                continue;
            };
            if !selected {
                tracing::trace!(name = %dso.name, "filtered out");
                continue;
            }
            if !self.surface.in_bounds(dso.ra, dso.dec) {
                tracing::trace!(name = %dso.name, "out of bounds");
                continue;
            }

            let mut style = style.clone();
            if let Some(alpha_fn) = &options.alpha_fn {
                style.marker.alpha = alpha_fn(&dso).map_err(Error::Callback)?;
            }

            let mut label = options.labels.resolve(&dso.name, &dso.name);
            if !options.label_filters.is_empty() && !evaluate_all(&options.label_filters, &dso)? {
                label = None;
            }

            let shape = resolve_shape(&dso, style.marker.symbol, options.true_size);
            draw_shape(&mut self.surface, &dso, &shape, &style, label.as_deref())?;

            if let Some(legend_label) = options.legend_labels.resolve(dso.dso_type) {
                self.legend.register(&legend_label, &style.marker);
            }
            self.objects.dsos.push(dso);
        }

        tracing::debug!(
            candidates = rows.len(),
            plotted = self.objects.dsos.len() - before,
            "plotted DSOs"
        );
        Ok(())
    }

    pub fn open_clusters<C: DsoCatalog + ?Sized>(&mut self, catalog: &C, options: DsoOptions) -> Result<()> {
        self.dsos(catalog, options.types([DsoType::OpenCluster]))
    }

    pub fn globular_clusters<C: DsoCatalog + ?Sized>(&mut self, catalog: &C, options: DsoOptions) -> Result<()> {
        self.dsos(catalog, options.types([DsoType::GlobularCluster]))
    }

    /// Galaxies, galaxy pairs and galaxy triplets.
    pub fn galaxies<C: DsoCatalog + ?Sized>(&mut self, catalog: &C, options: DsoOptions) -> Result<()> {
        self.dsos(catalog, options.types(GALAXY_TYPES.iter().copied()))
    }

    /// Nebula types, excluding dark nebulae and HII regions.
    pub fn nebula<C: DsoCatalog + ?Sized>(&mut self, catalog: &C, options: DsoOptions) -> Result<()> {
        self.dsos(catalog, options.types(NEBULA_TYPES.iter().copied()))
    }
}

fn describe(exprs: &[Expr<Dso>]) -> String {
    exprs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
