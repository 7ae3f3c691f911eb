//! amp-core: units and measurements for ampere.
//!
//! Contains:
//! - dimension (closed set of physical quantity kinds)
//! - unit + catalog (concrete units, scale factors, conversion)
//! - measurement (value + unit pairs)
//! - units (uom SI interop)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod catalog;
pub mod dimension;
pub mod error;
pub mod measurement;
pub mod numeric;
pub mod unit;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use catalog::{
    StandardCatalog, UnitCatalog, UnitCatalogEntry, catalog_entries, find_unit, parse_unit,
    units_of,
};
pub use dimension::Dimension;
pub use error::{CoreError, CoreResult};
pub use measurement::Measurement;
pub use numeric::*;
pub use unit::Unit;
