//! Deep-sky object categories and their fixed mappings.
//!
//! Each [`DsoType`] has exactly one catalog code, one style key and an
//! optional default legend label. The mappings are exhaustive `match`es so a
//! new variant cannot be added without deciding all three. Catalog codes
//! that do not map to a variant ([`EXCLUDED_CODES`]) are never plotted.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DsoType {
    Star,
    DoubleStar,
    AssociationOfStars,
    OpenCluster,
    GlobularCluster,
    Galaxy,
    GalaxyPair,
    GalaxyTriplet,
    GroupOfGalaxies,
    Nebula,
    PlanetaryNebula,
    EmissionNebula,
    StarClusterNebula,
    ReflectionNebula,
    DarkNebula,
    HiiIonizedRegion,
    SupernovaRemnant,
    NovaStar,
    Unknown,
}

/// Catalog codes that identify records which are not real objects.
pub const EXCLUDED_CODES: &[&str] = &["NonEx", "Dup"];

/// Types plotted by `dsos()` when the caller does not choose.
pub const DEFAULT_DSO_TYPES: &[DsoType] = &[
    DsoType::Galaxy,
    DsoType::GalaxyPair,
    DsoType::GalaxyTriplet,
    DsoType::GroupOfGalaxies,
    DsoType::OpenCluster,
    DsoType::GlobularCluster,
    DsoType::Nebula,
    DsoType::PlanetaryNebula,
    DsoType::EmissionNebula,
    DsoType::StarClusterNebula,
    DsoType::ReflectionNebula,
];

pub const GALAXY_TYPES: &[DsoType] = &[DsoType::Galaxy, DsoType::GalaxyPair, DsoType::GalaxyTriplet];

pub const NEBULA_TYPES: &[DsoType] = &[
    DsoType::Nebula,
    DsoType::PlanetaryNebula,
    DsoType::EmissionNebula,
    DsoType::StarClusterNebula,
    DsoType::ReflectionNebula,
];

impl DsoType {
    pub const ALL: [DsoType; 19] = [
        DsoType::Star,
        DsoType::DoubleStar,
        DsoType::AssociationOfStars,
        DsoType::OpenCluster,
        DsoType::GlobularCluster,
        DsoType::Galaxy,
        DsoType::GalaxyPair,
        DsoType::GalaxyTriplet,
        DsoType::GroupOfGalaxies,
        DsoType::Nebula,
        DsoType::PlanetaryNebula,
        DsoType::EmissionNebula,
        DsoType::StarClusterNebula,
        DsoType::ReflectionNebula,
        DsoType::DarkNebula,
        DsoType::HiiIonizedRegion,
        DsoType::SupernovaRemnant,
        DsoType::NovaStar,
        DsoType::Unknown,
    ];

    /// Resolves a raw catalog type code. Surrounding whitespace is ignored.
    /// Returns `None` for excluded and unrecognised codes.
    pub fn from_code(code: &str) -> Option<DsoType> {
        let code = code.trim();
        DsoType::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// The catalog code this type is stored under.
    pub fn code(&self) -> &'static str {
        match self {
            DsoType::Star => "*",
            DsoType::DoubleStar => "**",
            DsoType::AssociationOfStars => "*Ass",
            DsoType::OpenCluster => "OCl",
            DsoType::GlobularCluster => "GCl",
            DsoType::Galaxy => "G",
            DsoType::GalaxyPair => "GPair",
            DsoType::GalaxyTriplet => "GTrpl",
            DsoType::GroupOfGalaxies => "GGroup",
            DsoType::Nebula => "Neb",
            DsoType::PlanetaryNebula => "PN",
            DsoType::EmissionNebula => "EmN",
            DsoType::StarClusterNebula => "Cl+N",
            DsoType::ReflectionNebula => "RfN",
            DsoType::DarkNebula => "DrkN",
            DsoType::HiiIonizedRegion => "HII",
            DsoType::SupernovaRemnant => "SNR",
            DsoType::NovaStar => "Nova",
            DsoType::Unknown => "Other",
        }
    }

    /// Default legend label. Several galaxy types share one label so they
    /// collapse into a single legend entry.
    pub fn legend_label(&self) -> Option<&'static str> {
        let label = match self {
            DsoType::Galaxy | DsoType::GalaxyPair | DsoType::GalaxyTriplet => "Galaxy",
            DsoType::GroupOfGalaxies => "Group of Galaxies",
            DsoType::OpenCluster => "Open Cluster",
            DsoType::GlobularCluster => "Globular Cluster",
            DsoType::Nebula => "Nebula",
            DsoType::PlanetaryNebula => "Planetary Nebula",
            DsoType::EmissionNebula => "Emission Nebula",
            DsoType::StarClusterNebula => "Star Cluster",
            DsoType::ReflectionNebula => "Reflection Nebula",
            DsoType::AssociationOfStars => "Association of stars",
            DsoType::DoubleStar => "Double star",
            DsoType::Star => "Star",
            DsoType::DarkNebula => "Dark Nebula",
            DsoType::HiiIonizedRegion => "HII Ionized Region",
            DsoType::SupernovaRemnant => "Supernova Remnant",
            DsoType::NovaStar => "Nova Star",
            DsoType::Unknown => "Unknown",
        };
        Some(label)
    }

    /// Key of this type's entry in the `[dso]` table of a style file.
    pub fn style_key(&self) -> &'static str {
        match self {
            DsoType::Star => "star",
            DsoType::DoubleStar => "double_star",
            DsoType::AssociationOfStars => "association_of_stars",
            DsoType::OpenCluster => "open_cluster",
            DsoType::GlobularCluster => "globular_cluster",
            DsoType::Galaxy => "galaxy",
            DsoType::GalaxyPair => "galaxy_pair",
            DsoType::GalaxyTriplet => "galaxy_triplet",
            DsoType::GroupOfGalaxies => "group_of_galaxies",
            DsoType::Nebula => "nebula",
            DsoType::PlanetaryNebula => "planetary_nebula",
            DsoType::EmissionNebula => "emission_nebula",
            DsoType::StarClusterNebula => "star_cluster_nebula",
            DsoType::ReflectionNebula => "reflection_nebula",
            DsoType::DarkNebula => "dark_nebula",
            DsoType::HiiIonizedRegion => "hii_ionized_region",
            DsoType::SupernovaRemnant => "supernova_remnant",
            DsoType::NovaStar => "nova_star",
            DsoType::Unknown => "unknown",
        }
    }

    pub fn from_style_key(key: &str) -> Option<DsoType> {
        DsoType::ALL.iter().copied().find(|t| t.style_key() == key)
    }
}

impl fmt::Display for DsoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_type_round_trips_through_its_code() {
        for t in DsoType::ALL {
            assert_eq!(DsoType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn codes_and_style_keys_are_unique() {
        let codes: HashSet<_> = DsoType::ALL.iter().map(|t| t.code()).collect();
        let keys: HashSet<_> = DsoType::ALL.iter().map(|t| t.style_key()).collect();
        assert_eq!(codes.len(), DsoType::ALL.len());
        assert_eq!(keys.len(), DsoType::ALL.len());
    }

    #[test]
    fn excluded_codes_map_to_nothing() {
        for code in EXCLUDED_CODES {
            assert_eq!(DsoType::from_code(code), None);
        }
        assert_eq!(DsoType::from_code("Xyz"), None);
    }

    #[test]
    fn code_lookup_trims_whitespace() {
        assert_eq!(DsoType::from_code(" OCl "), Some(DsoType::OpenCluster));
        assert_eq!(DsoType::from_code("Cl+N\n"), Some(DsoType::StarClusterNebula));
    }

    #[test]
    fn galaxy_subtypes_share_a_legend_label() {
        for t in GALAXY_TYPES {
            assert_eq!(t.legend_label(), Some("Galaxy"));
        }
    }

    #[test]
    fn style_key_lookup() {
        assert_eq!(DsoType::from_style_key("galaxy_pair"), Some(DsoType::GalaxyPair));
        assert_eq!(DsoType::from_style_key("GalaxyPair"), None);
    }
}
