//! Unit catalog: scale factors and same-dimension conversion.

use crate::Dimension as D;
use crate::{CoreError, CoreResult, Dimension, Real, Unit};

/// One row of the standard unit table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCatalogEntry {
    pub unit: Unit,
    pub dimension: Dimension,
    pub symbol: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Multiplier converting a value in `unit` to the dimension's base unit.
    pub scale: Real,
}

impl UnitCatalogEntry {
    /// Case-insensitive match against name and aliases.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(query))
    }
}

const FOOT: Real = 0.3048;
const MILE: Real = 1_609.344;
const NAUTICAL_MILE: Real = 1_852.0;
const HOUR: Real = 3_600.0;

const fn row(
    unit: Unit,
    dimension: Dimension,
    symbol: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    scale: Real,
) -> UnitCatalogEntry {
    UnitCatalogEntry {
        unit,
        dimension,
        symbol,
        name,
        aliases,
        scale,
    }
}

// Indexed by `Unit as usize`; see `entry`.
static STANDARD_CATALOG: [UnitCatalogEntry; 60] = [
    row(Unit::Meters, D::Length, "m", "meters", &["meter", "metre", "metres"], 1.0),
    row(Unit::Kilometers, D::Length, "km", "kilometers", &["kilometer", "kilometre"], 1e3),
    row(Unit::Centimeters, D::Length, "cm", "centimeters", &["centimeter"], 1e-2),
    row(Unit::Millimeters, D::Length, "mm", "millimeters", &["millimeter"], 1e-3),
    row(Unit::Inches, D::Length, "in", "inches", &["inch"], 0.0254),
    row(Unit::Feet, D::Length, "ft", "feet", &["foot"], FOOT),
    row(Unit::Yards, D::Length, "yd", "yards", &["yard"], 0.9144),
    row(Unit::Miles, D::Length, "mi", "miles", &["mile"], MILE),
    row(Unit::NauticalMiles, D::Length, "NM", "nautical miles", &["nmi", "nautical mile"], NAUTICAL_MILE),
    row(Unit::Milliseconds, D::Duration, "ms", "milliseconds", &["millisecond"], 1e-3),
    row(Unit::Seconds, D::Duration, "s", "seconds", &["second", "sec"], 1.0),
    row(Unit::Minutes, D::Duration, "min", "minutes", &["minute"], 60.0),
    row(Unit::Hours, D::Duration, "h", "hours", &["hour", "hr"], HOUR),
    row(Unit::MetersPerSecond, D::Speed, "m/s", "meters per second", &["mps"], 1.0),
    row(Unit::KilometersPerHour, D::Speed, "km/h", "kilometers per hour", &["kph", "kmh"], 1e3 / HOUR),
    row(Unit::MilesPerHour, D::Speed, "mph", "miles per hour", &["mi/h"], MILE / HOUR),
    row(Unit::Knots, D::Speed, "kn", "knots", &["knot", "kt", "kts"], NAUTICAL_MILE / HOUR),
    row(Unit::MetersPerSecondSquared, D::Acceleration, "m/s²", "meters per second squared", &["m/s^2", "m/s2"], 1.0),
    row(Unit::StandardGravity, D::Acceleration, "g₀", "standard gravities", &["g0", "gravity"], 9.806_65),
    row(Unit::Milligrams, D::Mass, "mg", "milligrams", &["milligram"], 1e-6),
    row(Unit::Grams, D::Mass, "g", "grams", &["gram"], 1e-3),
    row(Unit::Kilograms, D::Mass, "kg", "kilograms", &["kilogram"], 1.0),
    row(Unit::Pounds, D::Mass, "lb", "pounds", &["pound", "lbm"], 0.453_592_37),
    row(Unit::Milliliters, D::Volume, "mL", "milliliters", &["ml", "milliliter"], 1e-6),
    row(Unit::CubicCentimeters, D::Volume, "cm³", "cubic centimeters", &["cm^3", "cm3", "cc"], 1e-6),
    row(Unit::Liters, D::Volume, "L", "liters", &["l", "liter", "litre"], 1e-3),
    row(Unit::CubicMeters, D::Volume, "m³", "cubic meters", &["m^3", "m3"], 1.0),
    row(Unit::CubicFeet, D::Volume, "ft³", "cubic feet", &["ft^3", "ft3"], FOOT * FOOT * FOOT),
    row(Unit::SquareCentimeters, D::Area, "cm²", "square centimeters", &["cm^2", "cm2"], 1e-4),
    row(Unit::SquareMeters, D::Area, "m²", "square meters", &["m^2", "m2"], 1.0),
    row(Unit::Hectares, D::Area, "ha", "hectares", &["hectare"], 1e4),
    row(Unit::SquareKilometers, D::Area, "km²", "square kilometers", &["km^2", "km2"], 1e6),
    row(Unit::SquareFeet, D::Area, "ft²", "square feet", &["ft^2", "ft2"], FOOT * FOOT),
    row(Unit::GramsPerLiter, D::ConcentrationMass, "g/L", "grams per liter", &["g/l"], 1.0),
    row(Unit::MilligramsPerDeciliter, D::ConcentrationMass, "mg/dL", "milligrams per deciliter", &["mg/dl"], 1e-2),
    row(Unit::KilogramsPerCubicMeter, D::ConcentrationMass, "kg/m³", "kilograms per cubic meter", &["kg/m^3", "kg/m3"], 1.0),
    row(Unit::Joules, D::Energy, "J", "joules", &["joule"], 1.0),
    row(Unit::Kilojoules, D::Energy, "kJ", "kilojoules", &["kilojoule"], 1e3),
    row(Unit::WattHours, D::Energy, "Wh", "watt hours", &["watt hour"], HOUR),
    row(Unit::KilowattHours, D::Energy, "kWh", "kilowatt hours", &["kilowatt hour"], 1e3 * HOUR),
    row(Unit::Calories, D::Energy, "cal", "calories", &["calorie"], 4.184),
    row(Unit::Kilocalories, D::Energy, "kcal", "kilocalories", &["kilocalorie"], 4_184.0),
    row(Unit::Milliwatts, D::Power, "mW", "milliwatts", &["milliwatt"], 1e-3),
    row(Unit::Watts, D::Power, "W", "watts", &["watt"], 1.0),
    row(Unit::Kilowatts, D::Power, "kW", "kilowatts", &["kilowatt"], 1e3),
    row(Unit::Megawatts, D::Power, "MW", "megawatts", &["megawatt"], 1e6),
    row(Unit::Horsepower, D::Power, "hp", "horsepower", &[], 745.699_871_582_270_2),
    row(Unit::Coulombs, D::ElectricCharge, "C", "coulombs", &["coulomb"], 1.0),
    row(Unit::MilliampereHours, D::ElectricCharge, "mAh", "milliampere hours", &["milliampere hour"], 1e-3 * HOUR),
    row(Unit::AmpereHours, D::ElectricCharge, "Ah", "ampere hours", &["ampere hour"], HOUR),
    row(Unit::Milliamperes, D::ElectricCurrent, "mA", "milliamperes", &["milliampere"], 1e-3),
    row(Unit::Amperes, D::ElectricCurrent, "A", "amperes", &["ampere", "amp", "amps"], 1.0),
    row(Unit::Kiloamperes, D::ElectricCurrent, "kA", "kiloamperes", &["kiloampere"], 1e3),
    row(Unit::Millivolts, D::ElectricPotential, "mV", "millivolts", &["millivolt"], 1e-3),
    row(Unit::Volts, D::ElectricPotential, "V", "volts", &["volt"], 1.0),
    row(Unit::Kilovolts, D::ElectricPotential, "kV", "kilovolts", &["kilovolt"], 1e3),
    row(Unit::Milliohms, D::ElectricResistance, "mΩ", "milliohms", &["milliohm"], 1e-3),
    row(Unit::Ohms, D::ElectricResistance, "Ω", "ohms", &["ohm"], 1.0),
    row(Unit::Kiloohms, D::ElectricResistance, "kΩ", "kiloohms", &["kiloohm", "kohm"], 1e3),
    row(Unit::Megaohms, D::ElectricResistance, "MΩ", "megaohms", &["megaohm"], 1e6),
];

#[inline]
pub(crate) fn entry(unit: Unit) -> &'static UnitCatalogEntry {
    &STANDARD_CATALOG[unit as usize]
}

/// All standard catalog rows, grouped by dimension.
pub fn catalog_entries() -> &'static [UnitCatalogEntry] {
    &STANDARD_CATALOG
}

/// Units of one dimension, in catalog order.
pub fn units_of(dimension: Dimension) -> impl Iterator<Item = Unit> {
    STANDARD_CATALOG
        .iter()
        .filter(move |e| e.dimension == dimension)
        .map(|e| e.unit)
}

/// Look a unit up by symbol (exact, case-sensitive), then by name or alias
/// (case-insensitive).
///
/// Symbols are tried first because some only differ by case (`mW`/`MW`,
/// `mΩ`/`MΩ`); `g` resolves to grams, not standard gravity.
pub fn find_unit(query: &str) -> Option<Unit> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    STANDARD_CATALOG
        .iter()
        .find(|e| e.symbol == query)
        .or_else(|| STANDARD_CATALOG.iter().find(|e| e.matches_name(query)))
        .map(|e| e.unit)
}

/// Like [`find_unit`], as a `Result`.
pub fn parse_unit(query: &str) -> CoreResult<Unit> {
    find_unit(query).ok_or_else(|| CoreError::UnknownUnit {
        query: query.to_string(),
    })
}

/// Source of unit scale factors.
///
/// Implementations must return a positive, finite scale for every unit and
/// must be pure: the arithmetic engine calls them concurrently.
pub trait UnitCatalog {
    /// Multiplier converting a value in `unit` to its dimension's base unit.
    fn scale_factor(&self, unit: Unit) -> Real;

    /// Convert `value` from one unit to another of the same dimension.
    ///
    /// Identity conversions return `value` untouched.
    fn convert(&self, value: Real, from: Unit, to: Unit) -> CoreResult<Real> {
        if from.dimension() != to.dimension() {
            return Err(CoreError::IncompatibleDimension { from, to });
        }
        if from == to {
            return Ok(value);
        }
        Ok(value * self.scale_factor(from) / self.scale_factor(to))
    }
}

impl<C: UnitCatalog + ?Sized> UnitCatalog for &C {
    fn scale_factor(&self, unit: Unit) -> Real {
        (**self).scale_factor(unit)
    }

    fn convert(&self, value: Real, from: Unit, to: Unit) -> CoreResult<Real> {
        (**self).convert(value, from, to)
    }
}

/// Catalog backed by the built-in unit table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardCatalog;

impl UnitCatalog for StandardCatalog {
    #[inline]
    fn scale_factor(&self, unit: Unit) -> Real {
        entry(unit).scale
    }
}
