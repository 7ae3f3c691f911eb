//! Built-in relation declarations.

use amp_core::Unit;

use crate::relation::{Relation, UnitMapping};

const fn map(factor1: Unit, factor2: Unit, product: Unit) -> UnitMapping {
    UnitMapping::new(factor1, factor2, product)
}

/// The standard relations, in declaration order.
///
/// Defaults use base units where the catalog has them (grams and liters for
/// concentration); preferred mappings cover everyday exact combinations.
pub fn standard_relations() -> Vec<Relation> {
    vec![
        // Length = Speed × Duration
        Relation::new(map(Unit::MetersPerSecond, Unit::Seconds, Unit::Meters)).with_preferred([
            map(Unit::KilometersPerHour, Unit::Hours, Unit::Kilometers),
            map(Unit::MilesPerHour, Unit::Hours, Unit::Miles),
            map(Unit::Knots, Unit::Hours, Unit::NauticalMiles),
        ]),
        // Volume = Area × Length
        Relation::new(map(Unit::SquareMeters, Unit::Meters, Unit::CubicMeters)).with_preferred([
            map(Unit::SquareCentimeters, Unit::Centimeters, Unit::CubicCentimeters),
        ]),
        // Speed = Acceleration × Duration
        Relation::new(map(
            Unit::MetersPerSecondSquared,
            Unit::Seconds,
            Unit::MetersPerSecond,
        )),
        // Mass = Concentration × Volume
        Relation::new(map(Unit::GramsPerLiter, Unit::Liters, Unit::Grams)).with_preferred([map(
            Unit::KilogramsPerCubicMeter,
            Unit::CubicMeters,
            Unit::Kilograms,
        )]),
        // Voltage = Resistance × Current
        Relation::new(map(Unit::Ohms, Unit::Amperes, Unit::Volts)).with_preferred([map(
            Unit::Kiloohms,
            Unit::Milliamperes,
            Unit::Volts,
        )]),
        // Energy = Power × Duration
        Relation::new(map(Unit::Watts, Unit::Seconds, Unit::Joules)).with_preferred([
            map(Unit::Kilowatts, Unit::Hours, Unit::KilowattHours),
            map(Unit::Watts, Unit::Hours, Unit::WattHours),
        ]),
        // Charge = Current × Duration
        Relation::new(map(Unit::Amperes, Unit::Seconds, Unit::Coulombs)).with_preferred([
            map(Unit::Amperes, Unit::Hours, Unit::AmpereHours),
            map(Unit::Milliamperes, Unit::Hours, Unit::MilliampereHours),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exactness_error;
    use amp_core::{Dimension, StandardCatalog};
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let relations = standard_relations();
        let keys: HashSet<_> = relations.iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), relations.len());
    }

    #[test]
    fn distance_prefers_metric_then_imperial_then_nautical() {
        let relations = standard_relations();
        let distance = relations
            .iter()
            .find(|r| r.key().product == Dimension::Length)
            .unwrap();
        let products: Vec<_> = distance
            .preferred_mappings()
            .iter()
            .map(|m| m.product)
            .collect();
        assert_eq!(
            products,
            vec![Unit::Kilometers, Unit::Miles, Unit::NauticalMiles]
        );
    }

    #[test]
    fn every_default_is_exact() {
        for relation in standard_relations() {
            let d = relation.default_mapping().unwrap();
            assert!(exactness_error(d, &StandardCatalog) < 1e-12, "{d}");
        }
    }
}
