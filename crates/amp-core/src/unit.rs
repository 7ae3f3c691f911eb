//! Concrete units of measure.

use std::fmt;

use crate::catalog::{self, UnitCatalogEntry};
use crate::Dimension;

/// A concrete unit within a [`Dimension`].
///
/// Units are plain identifiers; their scale factors live in the catalog
/// (see [`crate::UnitCatalog`]). Variant order matches the standard catalog
/// table, grouped by dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Unit {
    // Length
    Meters,
    Kilometers,
    Centimeters,
    Millimeters,
    Inches,
    Feet,
    Yards,
    Miles,
    NauticalMiles,
    // Duration
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    // Speed
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
    Knots,
    // Acceleration
    MetersPerSecondSquared,
    StandardGravity,
    // Mass
    Milligrams,
    Grams,
    Kilograms,
    Pounds,
    // Volume
    Milliliters,
    CubicCentimeters,
    Liters,
    CubicMeters,
    CubicFeet,
    // Area
    SquareCentimeters,
    SquareMeters,
    Hectares,
    SquareKilometers,
    SquareFeet,
    // Mass concentration
    GramsPerLiter,
    MilligramsPerDeciliter,
    KilogramsPerCubicMeter,
    // Energy
    Joules,
    Kilojoules,
    WattHours,
    KilowattHours,
    Calories,
    Kilocalories,
    // Power
    Milliwatts,
    Watts,
    Kilowatts,
    Megawatts,
    Horsepower,
    // Electric charge
    Coulombs,
    MilliampereHours,
    AmpereHours,
    // Electric current
    Milliamperes,
    Amperes,
    Kiloamperes,
    // Electric potential
    Millivolts,
    Volts,
    Kilovolts,
    // Electric resistance
    Milliohms,
    Ohms,
    Kiloohms,
    Megaohms,
}

impl Unit {
    /// Standard catalog entry describing this unit.
    #[inline]
    pub fn entry(self) -> &'static UnitCatalogEntry {
        catalog::entry(self)
    }

    #[inline]
    pub fn dimension(self) -> Dimension {
        self.entry().dimension
    }

    /// Short symbol, e.g. `km/h`.
    #[inline]
    pub fn symbol(self) -> &'static str {
        self.entry().symbol
    }

    /// Plural display name, e.g. `kilometers per hour`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn is_base(self) -> bool {
        self.dimension().base_unit() == self
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Unit::KilometersPerHour.to_string(), "km/h");
        assert_eq!(Unit::NauticalMiles.to_string(), "NM");
        assert_eq!(Unit::Ohms.to_string(), "Ω");
    }

    #[test]
    fn dimensions() {
        assert_eq!(Unit::Knots.dimension(), Dimension::Speed);
        assert_eq!(Unit::Hours.dimension(), Dimension::Duration);
        assert_eq!(Unit::GramsPerLiter.dimension(), Dimension::ConcentrationMass);
        assert_eq!(Unit::AmpereHours.dimension(), Dimension::ElectricCharge);
    }

    #[test]
    fn base_units() {
        assert!(Unit::Meters.is_base());
        assert!(Unit::Watts.is_base());
        assert!(!Unit::Kilowatts.is_base());
    }
}
