//! Relation registry and arithmetic errors.

use amp_core::{CoreError, Dimension, Unit};
use thiserror::Error;

use crate::relation::{RelationKey, UnitMapping};

/// Result type for registry and arithmetic operations.
pub type RelationResult<T> = Result<T, RelationError>;

/// Errors raised while validating the registry or doing arithmetic with it.
///
/// The validation variants (see [`RelationError::is_configuration`]) mean the
/// static declarations are wrong; everything else is a property of the
/// caller's request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelationError {
    /// No relation links the two dimensions, in either order.
    #[error("No relation registered for {first} and {second}")]
    NoRelationRegistered { first: Dimension, second: Dimension },

    /// The unit catalog cannot convert between these units.
    #[error("Cannot convert {} ({}) to {} ({})", .from, .from.dimension(), .to, .to.dimension())]
    IncompatibleDimension { from: Unit, to: Unit },

    /// Divisor has zero magnitude.
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic produced NaN or an infinity.
    #[error("Non-finite result for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// A preferred mapping's scale factors do not multiply out.
    #[error("Inexact preferred mapping {mapping} for {key} (relative error {relative_error:e})")]
    InexactPreferredMapping {
        key: RelationKey,
        mapping: UnitMapping,
        relative_error: f64,
    },

    /// The same key was declared twice without an explicit replace.
    #[error("Duplicate relation key {key}")]
    DuplicateRelationKey { key: RelationKey },

    /// A relation was declared without a default mapping.
    #[error("Missing default mapping for {key}")]
    MissingDefaultMapping { key: RelationKey },

    /// A mapping's unit does not belong to the dimension of its slot.
    #[error("Mapping {mapping} does not fit {key}")]
    MappingDimensionMismatch {
        key: RelationKey,
        mapping: UnitMapping,
    },

    /// Two relations share the same ordered factor pair.
    #[error("Factors {factor1} × {factor2} are declared for more than one product")]
    AmbiguousFactorPair {
        factor1: Dimension,
        factor2: Dimension,
    },

    /// Any other unit-layer failure.
    #[error("Unit error: {0}")]
    Core(CoreError),
}

impl RelationError {
    /// True for errors that can only come out of registry validation.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InexactPreferredMapping { .. }
                | Self::DuplicateRelationKey { .. }
                | Self::MissingDefaultMapping { .. }
                | Self::MappingDimensionMismatch { .. }
                | Self::AmbiguousFactorPair { .. }
        )
    }
}

impl From<CoreError> for RelationError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IncompatibleDimension { from, to } => {
                RelationError::IncompatibleDimension { from, to }
            }
            CoreError::NonFinite { what, value } => RelationError::NonFinite { what, value },
            other => RelationError::Core(other),
        }
    }
}
