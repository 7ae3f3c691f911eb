use thiserror::Error;

use crate::{Dimension, Unit};

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Cannot convert {} ({}) to {} ({})", .from, .from.dimension(), .to, .to.dimension())]
    IncompatibleDimension { from: Unit, to: Unit },

    #[error("Unknown unit '{query}'")]
    UnknownUnit { query: String },

    #[error("Expected a {expected} measurement, got {actual}")]
    WrongDimension {
        expected: Dimension,
        actual: Dimension,
    },
}
