pub mod catalog;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod plot;
pub mod select;
pub mod style;
pub mod surface;

pub use catalog::{DsoCatalog, DsoRow, DsoTable, StarCatalog, StarRow, StarTable};
pub use ephemeris::{ApparentPlace, Body, Ephemeris};
pub use error::{BoxError, Error, Result};
pub use models::{Dso, DsoType, Geometry, Moon, Planet, PlanetName, Ring, Star};
pub use plot::{BodyOptions, DsoOptions, Labels, Legend, LegendLabels, MapPlot, PlottedObjects, StarOptions};
pub use select::{Expr, Selectable, Value};
pub use style::{Color, ObjectStyle, PlotStyle};
pub use surface::{DrawCall, DrawingSurface, RecordingSurface, SkyRegion, SvgSurface};
