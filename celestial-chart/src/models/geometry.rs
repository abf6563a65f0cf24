//! Outline geometry attached to catalog records.
//!
//! Coordinates are `(ra_degrees, dec_degrees)` pairs exactly as stored in the
//! catalog. Conversion to plot coordinates (RA in hours) happens in
//! [`Ring::to_plot_coords`].

/// A single outline ring in catalog coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(pub Vec<(f64, f64)>);

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point { ra: f64, dec: f64 },
    Polygon(Ring),
    MultiPolygon(Vec<Ring>),
}

impl Geometry {
    /// Outline rings, if this geometry has any.
    pub fn rings(&self) -> &[Ring] {
        match self {
            Geometry::Point { .. } => &[],
            Geometry::Polygon(ring) => std::slice::from_ref(ring),
            Geometry::MultiPolygon(rings) => rings,
        }
    }

    pub fn is_outline(&self) -> bool {
        !matches!(self, Geometry::Point { .. })
    }
}

impl Ring {
    pub fn new(coords: Vec<(f64, f64)>) -> Self {
        Self(coords)
    }

    /// A ring is drawable when all vertices are finite and it has at least
    /// three distinct vertices.
    pub fn is_drawable(&self) -> bool {
        if self.0.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return false;
        }
        let mut distinct: Vec<(f64, f64)> = Vec::with_capacity(self.0.len());
        for &p in &self.0 {
            if !distinct.contains(&p) {
                distinct.push(p);
                if distinct.len() >= 3 {
                    return true;
                }
            }
        }
        false
    }

    /// Vertices in plot coordinates (RA hours, Dec degrees), explicitly
    /// closed: the first vertex is repeated at the end unless it is already
    /// there.
    pub fn to_plot_coords(&self) -> Vec<(f64, f64)> {
        let mut coords: Vec<(f64, f64)> =
            self.0.iter().map(|&(ra, dec)| (ra / 15.0, dec)).collect();
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last {
                coords.push(first);
            }
        }
        coords
    }
}
