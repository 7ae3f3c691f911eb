//! Value + unit pairs.

use std::fmt;

use crate::{CoreResult, Dimension, Real, StandardCatalog, Unit, UnitCatalog, ensure_finite};

/// A numeric value expressed in a concrete unit.
///
/// The value is always interpreted in `unit`; nothing is normalized to base
/// units behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub value: Real,
    pub unit: Unit,
}

impl Measurement {
    #[inline]
    pub const fn new(value: Real, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Like [`Measurement::new`], rejecting NaN and infinities.
    pub fn checked(value: Real, unit: Unit) -> CoreResult<Self> {
        Ok(Self::new(ensure_finite(value, "measurement value")?, unit))
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Re-express in another unit of the same dimension.
    pub fn convert_to<C: UnitCatalog>(&self, catalog: &C, unit: Unit) -> CoreResult<Self> {
        let value = catalog.convert(self.value, self.unit, unit)?;
        Ok(Self::new(value, unit))
    }

    /// Value in the dimension's base unit, using the standard catalog.
    pub fn to_si(&self) -> Real {
        self.value * StandardCatalog.scale_factor(self.unit)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
