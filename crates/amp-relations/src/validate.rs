//! Registry validation logic.

use std::collections::HashSet;

use amp_core::{Real, Tolerances, UnitCatalog, relative_difference};
use tracing::warn;

use crate::error::RelationError;
use crate::relation::{Relation, RelationKey, UnitMapping};
use crate::RelationResult;

/// Relative difference between `scale(factor1) * scale(factor2)` and
/// `scale(product)`. Zero for an exact mapping.
pub fn exactness_error<C: UnitCatalog + ?Sized>(mapping: &UnitMapping, catalog: &C) -> Real {
    let combined = catalog.scale_factor(mapping.factor1) * catalog.scale_factor(mapping.factor2);
    relative_difference(combined, catalog.scale_factor(mapping.product))
}

/// Validate every relation and mapping before the registry is frozen.
pub(crate) fn validate_relations<C: UnitCatalog + ?Sized>(
    relations: &[Relation],
    collisions: &[RelationKey],
    catalog: &C,
    tol: Tolerances,
) -> RelationResult<()> {
    // Keys declared twice without an explicit replace
    if let Some(&key) = collisions.first() {
        return Err(RelationError::DuplicateRelationKey { key });
    }

    let mut factor_pairs = HashSet::new();
    for relation in relations {
        let key = relation.key();

        let default = relation
            .default_mapping()
            .ok_or(RelationError::MissingDefaultMapping { key })?;

        for mapping in std::iter::once(default).chain(relation.preferred_mappings()) {
            if mapping.key() != key {
                return Err(RelationError::MappingDimensionMismatch {
                    key,
                    mapping: *mapping,
                });
            }
        }

        for mapping in relation.preferred_mappings() {
            let relative_error = exactness_error(mapping, catalog);
            if relative_error > tol.rel {
                return Err(RelationError::InexactPreferredMapping {
                    key,
                    mapping: *mapping,
                    relative_error,
                });
            }
        }

        // Defaults may be inexact; the canonical path rescales them.
        let default_error = exactness_error(default, catalog);
        if default_error > tol.rel {
            warn!(
                relation = %key,
                mapping = %default,
                relative_error = default_error,
                "default mapping is not exact"
            );
        }

        if !factor_pairs.insert((key.factor1, key.factor2)) {
            return Err(RelationError::AmbiguousFactorPair {
                factor1: key.factor1,
                factor2: key.factor2,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use amp_core::{Dimension, StandardCatalog, Unit};

    fn speed_time() -> Relation {
        Relation::new(UnitMapping::new(
            Unit::MetersPerSecond,
            Unit::Seconds,
            Unit::Meters,
        ))
    }

    fn check(relations: &[Relation]) -> RelationResult<()> {
        validate_relations(relations, &[], &StandardCatalog, Tolerances::default())
    }

    #[test]
    fn validate_empty() {
        assert!(check(&[]).is_ok());
    }

    #[test]
    fn exactness_error_of_exact_mapping_is_tiny() {
        let km = UnitMapping::new(Unit::KilometersPerHour, Unit::Hours, Unit::Kilometers);
        assert!(exactness_error(&km, &StandardCatalog) < 1e-15);
        let wrong = UnitMapping::new(Unit::KilometersPerHour, Unit::Minutes, Unit::Kilometers);
        assert!(exactness_error(&wrong, &StandardCatalog) > 0.9);
    }

    #[test]
    fn rejects_inexact_preferred() {
        let bad = UnitMapping::new(Unit::MilesPerHour, Unit::Hours, Unit::Kilometers);
        let result = check(&[speed_time().preferring(bad)]);
        match result {
            Err(RelationError::InexactPreferredMapping {
                mapping,
                relative_error,
                ..
            }) => {
                assert_eq!(mapping, bad);
                assert!(relative_error > 0.3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_default() {
        let key = RelationKey::new(Dimension::Area, Dimension::Length, Dimension::Volume);
        let result = check(&[Relation::with_key(key)]);
        assert_eq!(result, Err(RelationError::MissingDefaultMapping { key }));
    }

    #[test]
    fn rejects_collisions() {
        let key = speed_time().key();
        let result = validate_relations(
            &[speed_time()],
            &[key],
            &StandardCatalog,
            Tolerances::default(),
        );
        assert_eq!(result, Err(RelationError::DuplicateRelationKey { key }));
    }

    #[test]
    fn rejects_mapping_in_wrong_dimensions() {
        let stray = UnitMapping::new(Unit::Watts, Unit::Hours, Unit::WattHours);
        let result = check(&[speed_time().preferring(stray)]);
        assert!(matches!(
            result,
            Err(RelationError::MappingDimensionMismatch { mapping, .. }) if mapping == stray
        ));
    }

    #[test]
    fn rejects_ambiguous_factor_pair() {
        // Same factors, different product: lookup by factors would be ambiguous.
        let mut odd = Relation::with_key(RelationKey::new(
            Dimension::Speed,
            Dimension::Duration,
            Dimension::Area,
        ));
        odd.set_default(UnitMapping::new(
            Unit::MetersPerSecond,
            Unit::Seconds,
            Unit::SquareMeters,
        ));
        let result = check(&[speed_time(), odd]);
        assert!(matches!(
            result,
            Err(RelationError::AmbiguousFactorPair { .. })
        ));
    }

    #[test]
    fn inexact_default_is_allowed() {
        let relation = Relation::new(UnitMapping::new(
            Unit::KilometersPerHour,
            Unit::Seconds,
            Unit::Meters,
        ));
        assert!(check(&[relation]).is_ok());
    }

    #[test]
    fn tolerance_is_configurable() {
        // mg/dL × L = 1e-5 kg but mg = 1e-6 kg: relative error 0.9.
        let relation = Relation::new(UnitMapping::new(
            Unit::GramsPerLiter,
            Unit::Liters,
            Unit::Grams,
        ))
        .preferring(UnitMapping::new(
            Unit::MilligramsPerDeciliter,
            Unit::Liters,
            Unit::Milligrams,
        ));
        assert!(check(std::slice::from_ref(&relation)).is_err());
        assert!(
            validate_relations(&[relation], &[], &StandardCatalog, Tolerances::with_rel(0.95))
                .is_ok()
        );
    }
}
