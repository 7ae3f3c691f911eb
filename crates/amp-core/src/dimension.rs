//! Physical quantity kinds.

use std::fmt;

use crate::Unit;

/// Kind of physical quantity a unit measures.
///
/// Every [`Unit`] belongs to exactly one dimension, and every dimension has a
/// base unit whose scale factor is `1.0` in the standard catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Dimension {
    /// Base: meter
    Length,
    /// Base: second
    Duration,
    /// Base: meter per second
    Speed,
    /// Base: kilogram
    Mass,
    /// Base: cubic meter
    Volume,
    /// Base: joule
    Energy,
    /// Base: coulomb
    ElectricCharge,
    /// Base: volt
    ElectricPotential,
    /// Base: ohm
    ElectricResistance,
    /// Base: ampere
    ElectricCurrent,
    /// Base: meter per second squared
    Acceleration,
    /// Mass per volume. Base: gram per liter
    ConcentrationMass,
    /// Base: watt
    Power,
    /// Base: square meter
    Area,
}

impl Dimension {
    pub const ALL: [Dimension; 14] = [
        Dimension::Length,
        Dimension::Duration,
        Dimension::Speed,
        Dimension::Mass,
        Dimension::Volume,
        Dimension::Energy,
        Dimension::ElectricCharge,
        Dimension::ElectricPotential,
        Dimension::ElectricResistance,
        Dimension::ElectricCurrent,
        Dimension::Acceleration,
        Dimension::ConcentrationMass,
        Dimension::Power,
        Dimension::Area,
    ];

    /// Unit that values of this dimension are normalized to.
    pub fn base_unit(self) -> Unit {
        match self {
            Self::Length => Unit::Meters,
            Self::Duration => Unit::Seconds,
            Self::Speed => Unit::MetersPerSecond,
            Self::Mass => Unit::Kilograms,
            Self::Volume => Unit::CubicMeters,
            Self::Energy => Unit::Joules,
            Self::ElectricCharge => Unit::Coulombs,
            Self::ElectricPotential => Unit::Volts,
            Self::ElectricResistance => Unit::Ohms,
            Self::ElectricCurrent => Unit::Amperes,
            Self::Acceleration => Unit::MetersPerSecondSquared,
            Self::ConcentrationMass => Unit::GramsPerLiter,
            Self::Power => Unit::Watts,
            Self::Area => Unit::SquareMeters,
        }
    }

    /// Lowercase identifier, as accepted by [`Dimension::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Duration => "duration",
            Self::Speed => "speed",
            Self::Mass => "mass",
            Self::Volume => "volume",
            Self::Energy => "energy",
            Self::ElectricCharge => "electric_charge",
            Self::ElectricPotential => "electric_potential",
            Self::ElectricResistance => "electric_resistance",
            Self::ElectricCurrent => "electric_current",
            Self::Acceleration => "acceleration",
            Self::ConcentrationMass => "concentration_mass",
            Self::Power => "power",
            Self::Area => "area",
        }
    }

    /// Case-insensitive lookup by identifier; `-` and spaces count as `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|d| d.name() == normalized)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "Length"),
            Self::Duration => write!(f, "Duration"),
            Self::Speed => write!(f, "Speed"),
            Self::Mass => write!(f, "Mass"),
            Self::Volume => write!(f, "Volume"),
            Self::Energy => write!(f, "Energy"),
            Self::ElectricCharge => write!(f, "Electric Charge"),
            Self::ElectricPotential => write!(f, "Electric Potential"),
            Self::ElectricResistance => write!(f, "Electric Resistance"),
            Self::ElectricCurrent => write!(f, "Electric Current"),
            Self::Acceleration => write!(f, "Acceleration"),
            Self::ConcentrationMass => write!(f, "Mass Concentration"),
            Self::Power => write!(f, "Power"),
            Self::Area => write!(f, "Area"),
        }
    }
}
