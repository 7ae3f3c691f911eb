//! amp-relations: unit-relation registry and exact arithmetic for ampere.
//!
//! Provides:
//! - Relation data model (dimension triples with default and preferred unit mappings)
//! - Registry builder with one-time exactness validation
//! - Immutable registry with factor and product lookups
//! - Arithmetic engine choosing between exact and canonical paths
//! - Standard relation declarations
//!
//! # Example
//!
//! ```
//! use amp_core::{Measurement, Unit};
//! use amp_relations::{Engine, RelationRegistry};
//!
//! let registry = RelationRegistry::standard().unwrap();
//! let engine = Engine::new(&registry);
//!
//! let distance = engine
//!     .multiply(
//!         Measurement::new(60.0, Unit::KilometersPerHour),
//!         Measurement::new(2.0, Unit::Hours),
//!     )
//!     .unwrap();
//! assert_eq!(distance, Measurement::new(120.0, Unit::Kilometers));
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod registry;
pub mod relation;
pub mod standard;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::RegistryBuilder;
pub use engine::{ArithmeticPath, Engine, divide, multiply};
pub use error::{RelationError, RelationResult};
pub use registry::RelationRegistry;
pub use relation::{FactorRole, Relation, RelationKey, UnitMapping};
pub use standard::standard_relations;
pub use validate::exactness_error;
