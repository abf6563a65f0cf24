//! Object records the chart plots and selects on.
//!
//! All positions are right ascension in hours and declination in degrees.
//! Records are plain values built per plot call; the attribute names each
//! type exposes to selection expressions are listed on its
//! [`Selectable`](crate::select::Selectable) implementation.

mod dso;
mod dso_type;
mod geometry;
mod moon;
mod planet;
mod star;

pub use dso::Dso;
pub use dso_type::{DsoType, DEFAULT_DSO_TYPES, EXCLUDED_CODES, GALAXY_TYPES, NEBULA_TYPES};
pub use geometry::{Geometry, Ring};
pub use moon::{Moon, MOON_RADIUS_KM};
pub use planet::{Planet, PlanetName};
pub use star::Star;
