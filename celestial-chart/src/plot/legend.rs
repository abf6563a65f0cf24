use crate::style::MarkerStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub marker: MarkerStyle,
}

/// Legend handles, one per label, in the order they were first registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// Registers a handle for `label`. The first marker registered under a
    /// label is kept; returns `false` when the label was already present.
    pub fn register(&mut self, label: &str, marker: &MarkerStyle) -> bool {
        if self.get(label).is_some() {
            return false;
        }
        self.entries.push(LegendEntry {
            label: label.to_string(),
            marker: marker.clone(),
        });
        true
    }

    pub fn get(&self, label: &str) -> Option<&LegendEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_wins() {
        let mut legend = Legend::default();
        let first = MarkerStyle {
            alpha: 0.2,
            ..Default::default()
        };
        assert!(legend.register("Galaxy", &first));
        assert!(legend.register("Open Cluster", &MarkerStyle::default()));
        assert!(!legend.register("Galaxy", &MarkerStyle::default()));

        assert_eq!(legend.labels(), vec!["Galaxy", "Open Cluster"]);
        assert_eq!(legend.get("Galaxy").map(|e| e.marker.alpha), Some(0.2));
    }
}
