use std::collections::HashMap;

use crate::models::DsoType;

/// Label policy for plotted objects.
///
/// By default an object is labeled with its own name, unless an override is
/// registered for that name.
#[derive(Debug, Clone, PartialEq)]
pub enum Labels {
    Defaults(HashMap<String, String>),
    Disabled,
}

impl Default for Labels {
    fn default() -> Self {
        Labels::Defaults(HashMap::new())
    }
}

impl Labels {
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Labels::Defaults(
            overrides
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Label for the object named `name`, falling back to `default`.
    pub fn resolve(&self, name: &str, default: &str) -> Option<String> {
        match self {
            Labels::Disabled => None,
            Labels::Defaults(overrides) => Some(
                overrides
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| default.to_string()),
            ),
        }
    }
}

/// Legend label policy for deep-sky types.
///
/// Overrides are merged over [`DsoType::legend_label`]; an override of
/// `None` hides that type from the legend.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendLabels {
    Defaults(HashMap<DsoType, Option<String>>),
    Disabled,
}

impl Default for LegendLabels {
    fn default() -> Self {
        LegendLabels::Defaults(HashMap::new())
    }
}

impl LegendLabels {
    pub fn with(mut self, dso_type: DsoType, label: impl Into<String>) -> Self {
        if let LegendLabels::Defaults(overrides) = &mut self {
            overrides.insert(dso_type, Some(label.into()));
        }
        self
    }

    pub fn without(mut self, dso_type: DsoType) -> Self {
        if let LegendLabels::Defaults(overrides) = &mut self {
            overrides.insert(dso_type, None);
        }
        self
    }

    pub fn resolve(&self, dso_type: DsoType) -> Option<String> {
        match self {
            LegendLabels::Disabled => None,
            LegendLabels::Defaults(overrides) => match overrides.get(&dso_type) {
                Some(label) => label.clone(),
                None => dso_type.legend_label().map(str::to_string),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_use_name_unless_overridden() {
        let labels = Labels::with_overrides([("NGC1976", "M42")]);
        assert_eq!(labels.resolve("NGC1976", "NGC1976").as_deref(), Some("M42"));
        assert_eq!(labels.resolve("NGC2244", "NGC2244").as_deref(), Some("NGC2244"));
    }

    #[test]
    fn disabled_labels_resolve_to_none() {
        assert_eq!(Labels::Disabled.resolve("NGC1976", "NGC1976"), None);
    }

    #[test]
    fn legend_overrides_merge_over_defaults() {
        let legend = LegendLabels::default()
            .with(DsoType::OpenCluster, "Cluster")
            .without(DsoType::Galaxy);
        assert_eq!(legend.resolve(DsoType::OpenCluster).as_deref(), Some("Cluster"));
        assert_eq!(legend.resolve(DsoType::Galaxy), None);
        assert_eq!(
            legend.resolve(DsoType::GlobularCluster).as_deref(),
            DsoType::GlobularCluster.legend_label()
        );
    }

    #[test]
    fn disabled_legend_ignores_overrides() {
        let legend = LegendLabels::Disabled.with(DsoType::Galaxy, "Galaxies");
        assert_eq!(legend.resolve(DsoType::Galaxy), None);
    }
}
