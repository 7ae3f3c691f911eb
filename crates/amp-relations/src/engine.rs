//! Multiplication and division of measurements through the registry.
//!
//! Both operations first try the relation's preferred mappings in
//! declaration order. A match means the raw values are combined directly and
//! the result takes the mapping's unit, with no catalog conversion. Otherwise
//! the inputs are converted to the default mapping's units (the canonical
//! path) and the result is expressed in the default's units.

use amp_core::{Measurement, Real, StandardCatalog, UnitCatalog, ensure_finite, relative_difference};
use tracing::trace;

use crate::error::RelationError;
use crate::registry::RelationRegistry;
use crate::relation::{FactorRole, Relation, UnitMapping};
use crate::RelationResult;

/// How an operation is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticPath {
    /// Raw values are combined directly; units come from this preferred mapping.
    Exact(UnitMapping),
    /// Inputs are converted into this default mapping's units first.
    Canonical(UnitMapping),
}

impl ArithmeticPath {
    pub fn mapping(&self) -> &UnitMapping {
        match self {
            Self::Exact(m) | Self::Canonical(m) => m,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// Stateless arithmetic over a validated registry.
///
/// Cheap to create; holds only a borrow of the registry and a catalog.
#[derive(Debug, Clone)]
pub struct Engine<'r, C = StandardCatalog> {
    registry: &'r RelationRegistry,
    catalog: C,
}

impl<'r> Engine<'r> {
    /// Engine using the standard unit catalog, for registries from `build`.
    pub fn new(registry: &'r RelationRegistry) -> Self {
        Self {
            registry,
            catalog: StandardCatalog,
        }
    }
}

impl Engine<'static> {
    /// Engine over the process-wide standard registry.
    pub fn shared() -> RelationResult<Self> {
        Ok(Self::new(RelationRegistry::shared()?))
    }
}

impl<'r, C: UnitCatalog> Engine<'r, C> {
    /// Engine converting through `catalog` on the canonical path.
    ///
    /// The registry's preferred mappings were checked for exactness against
    /// the catalog given to [`RegistryBuilder::build_with`]
    /// (`StandardCatalog` for `build`). Pass that same catalog here, or exact
    /// results may disagree with canonical ones.
    ///
    /// [`RegistryBuilder::build_with`]: crate::RegistryBuilder::build_with
    pub fn with_catalog(registry: &'r RelationRegistry, catalog: C) -> Self {
        Self { registry, catalog }
    }

    pub fn registry(&self) -> &'r RelationRegistry {
        self.registry
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Multiply two measurements.
    ///
    /// The factors may be given in either order; `b × a` is tried when no
    /// relation is declared for `a × b`.
    pub fn multiply(&self, a: Measurement, b: Measurement) -> RelationResult<Measurement> {
        let (relation, f1, f2) = self.resolve_factors(a, b)?;
        let path = multiply_path(relation, f1, f2)?;
        trace!(relation = %relation.key(), ?path, "multiply");

        let result = match path {
            ArithmeticPath::Exact(mapping) => {
                Measurement::new(f1.value * f2.value, mapping.product)
            }
            ArithmeticPath::Canonical(default) => {
                let v1 = self.catalog.convert(f1.value, f1.unit, default.factor1)?;
                let v2 = self.catalog.convert(f2.value, f2.unit, default.factor2)?;
                let mut value = v1 * v2;
                if let Some(correction) = self.default_correction(&default) {
                    value *= correction;
                }
                Measurement::new(value, default.product)
            }
        };
        Ok(Measurement::new(
            ensure_finite(result.value, "product")?,
            result.unit,
        ))
    }

    /// Divide a product measurement by one of its factors, recovering the
    /// other factor.
    pub fn divide(&self, product: Measurement, factor: Measurement) -> RelationResult<Measurement> {
        if factor.value == 0.0 {
            return Err(RelationError::DivisionByZero);
        }
        let (relation, role) = self.resolve_divisor(product, factor)?;
        let path = divide_path(relation, role, product, factor)?;
        trace!(relation = %relation.key(), ?role, ?path, "divide");

        let result = match path {
            ArithmeticPath::Exact(mapping) => {
                Measurement::new(product.value / factor.value, mapping.factor(role.other()))
            }
            ArithmeticPath::Canonical(default) => {
                let pv = self.catalog.convert(product.value, product.unit, default.product)?;
                let fv = self.catalog.convert(factor.value, factor.unit, default.factor(role))?;
                let mut value = pv / fv;
                if let Some(correction) = self.default_correction(&default) {
                    value /= correction;
                }
                Measurement::new(value, default.factor(role.other()))
            }
        };
        Ok(Measurement::new(
            ensure_finite(result.value, "quotient")?,
            result.unit,
        ))
    }

    /// Which path `multiply(a, b)` takes, without computing it.
    pub fn path_for_multiply(
        &self,
        a: Measurement,
        b: Measurement,
    ) -> RelationResult<ArithmeticPath> {
        let (relation, f1, f2) = self.resolve_factors(a, b)?;
        multiply_path(relation, f1, f2)
    }

    /// Which path `divide(product, factor)` takes, without computing it.
    pub fn path_for_divide(
        &self,
        product: Measurement,
        factor: Measurement,
    ) -> RelationResult<ArithmeticPath> {
        let (relation, role) = self.resolve_divisor(product, factor)?;
        divide_path(relation, role, product, factor)
    }

    /// Find the relation for `a × b`, swapping the operands if only `b × a`
    /// is declared.
    fn resolve_factors(
        &self,
        a: Measurement,
        b: Measurement,
    ) -> RelationResult<(&'r Relation, Measurement, Measurement)> {
        let (da, db) = (a.dimension(), b.dimension());
        if let Some(relation) = self.registry.lookup(da, db) {
            return Ok((relation, a, b));
        }
        if let Some(relation) = self.registry.lookup(db, da) {
            return Ok((relation, b, a));
        }
        Err(RelationError::NoRelationRegistered {
            first: da,
            second: db,
        })
    }

    fn resolve_divisor(
        &self,
        product: Measurement,
        factor: Measurement,
    ) -> RelationResult<(&'r Relation, FactorRole)> {
        let (dp, df) = (product.dimension(), factor.dimension());
        self.registry
            .lookup_divisor(dp, df)
            .ok_or(RelationError::NoRelationRegistered {
                first: dp,
                second: df,
            })
    }

    /// Scale correction `s1 * s2 / sp` for a default mapping that is not
    /// exact under this engine's catalog; `None` when it is.
    fn default_correction(&self, default: &UnitMapping) -> Option<Real> {
        let combined =
            self.catalog.scale_factor(default.factor1) * self.catalog.scale_factor(default.factor2);
        let product = self.catalog.scale_factor(default.product);
        if relative_difference(combined, product) <= self.registry.tolerances().rel {
            None
        } else {
            Some(combined / product)
        }
    }
}

fn default_of(relation: &Relation) -> RelationResult<UnitMapping> {
    relation
        .default_mapping()
        .copied()
        .ok_or(RelationError::MissingDefaultMapping {
            key: relation.key(),
        })
}

fn multiply_path(
    relation: &Relation,
    f1: Measurement,
    f2: Measurement,
) -> RelationResult<ArithmeticPath> {
    match relation.find_preferred(f1.unit, f2.unit) {
        Some(mapping) => Ok(ArithmeticPath::Exact(*mapping)),
        None => default_of(relation).map(ArithmeticPath::Canonical),
    }
}

fn divide_path(
    relation: &Relation,
    role: FactorRole,
    product: Measurement,
    factor: Measurement,
) -> RelationResult<ArithmeticPath> {
    match relation.find_preferred_divisor(product.unit, role, factor.unit) {
        Some(mapping) => Ok(ArithmeticPath::Exact(*mapping)),
        None => default_of(relation).map(ArithmeticPath::Canonical),
    }
}

/// Multiply with the shared standard registry.
pub fn multiply(a: Measurement, b: Measurement) -> RelationResult<Measurement> {
    Engine::shared()?.multiply(a, b)
}

/// Divide with the shared standard registry.
pub fn divide(product: Measurement, factor: Measurement) -> RelationResult<Measurement> {
    Engine::shared()?.divide(product, factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistryBuilder;
    use amp_core::{Dimension, Tolerances, Unit, nearly_equal};

    fn registry() -> RelationRegistry {
        RelationRegistry::standard().unwrap()
    }

    fn meas(value: Real, unit: Unit) -> Measurement {
        Measurement::new(value, unit)
    }

    #[test]
    fn exact_path_multiply() {
        let r = registry();
        let engine = Engine::new(&r);
        let d = engine
            .multiply(meas(60.0, Unit::KilometersPerHour), meas(2.0, Unit::Hours))
            .unwrap();
        assert_eq!(d, meas(120.0, Unit::Kilometers));
    }

    #[test]
    fn swapped_operands_use_same_relation() {
        let r = registry();
        let engine = Engine::new(&r);
        let d = engine
            .multiply(meas(2.0, Unit::Hours), meas(60.0, Unit::KilometersPerHour))
            .unwrap();
        assert_eq!(d, meas(120.0, Unit::Kilometers));
    }

    #[test]
    fn mixed_units_fall_back_to_default() {
        let r = registry();
        let engine = Engine::new(&r);
        let a = meas(36.0, Unit::KilometersPerHour);
        let b = meas(30.0, Unit::Minutes);
        assert!(!engine.path_for_multiply(a, b).unwrap().is_exact());

        let d = engine.multiply(a, b).unwrap();
        assert_eq!(d.unit, Unit::Meters);
        assert!(nearly_equal(d.value, 18_000.0, Tolerances::default()));
    }

    #[test]
    fn exact_path_divide_by_either_factor() {
        let r = registry();
        let engine = Engine::new(&r);
        let product = meas(120.0, Unit::Kilometers);

        let speed = engine.divide(product, meas(2.0, Unit::Hours)).unwrap();
        assert_eq!(speed, meas(60.0, Unit::KilometersPerHour));

        let time = engine
            .divide(product, meas(60.0, Unit::KilometersPerHour))
            .unwrap();
        assert_eq!(time, meas(2.0, Unit::Hours));
    }

    #[test]
    fn canonical_divide() {
        let r = registry();
        let engine = Engine::new(&r);
        // 1 kWh / 30 min: no preferred mapping takes minutes.
        let p = engine
            .divide(meas(1.0, Unit::KilowattHours), meas(30.0, Unit::Minutes))
            .unwrap();
        assert_eq!(p.unit, Unit::Watts);
        assert!(nearly_equal(p.value, 2_000.0, Tolerances::default()));
    }

    #[test]
    fn division_by_zero() {
        let r = registry();
        let engine = Engine::new(&r);
        for zero in [0.0, -0.0] {
            assert_eq!(
                engine.divide(meas(1.0, Unit::Kilometers), meas(zero, Unit::Hours)),
                Err(RelationError::DivisionByZero)
            );
        }
    }

    #[test]
    fn unregistered_pairs_fail() {
        let r = registry();
        let engine = Engine::new(&r);
        assert_eq!(
            engine.multiply(meas(1.0, Unit::Kilograms), meas(1.0, Unit::Knots)),
            Err(RelationError::NoRelationRegistered {
                first: Dimension::Mass,
                second: Dimension::Speed
            })
        );
        assert_eq!(
            engine.divide(meas(1.0, Unit::Kilometers), meas(1.0, Unit::Kilograms)),
            Err(RelationError::NoRelationRegistered {
                first: Dimension::Length,
                second: Dimension::Mass
            })
        );
    }

    #[test]
    fn overflow_is_reported() {
        let r = registry();
        let engine = Engine::new(&r);
        let result = engine.multiply(meas(1e200, Unit::Watts), meas(1e200, Unit::Seconds));
        assert!(matches!(result, Err(RelationError::NonFinite { .. })));
    }

    #[test]
    fn inexact_default_is_rescaled() {
        // Default km/h × s = m is off by 1/3.6; the canonical path corrects it.
        let mut builder = RegistryBuilder::new();
        builder.declare(crate::Relation::new(UnitMapping::new(
            Unit::KilometersPerHour,
            Unit::Seconds,
            Unit::Meters,
        )));
        let r = builder.build().unwrap();
        let engine = Engine::new(&r);

        let d = engine
            .multiply(meas(10.0, Unit::MetersPerSecond), meas(1.0, Unit::Minutes))
            .unwrap();
        assert_eq!(d.unit, Unit::Meters);
        assert!(nearly_equal(d.value, 600.0, Tolerances::default()), "{d}");

        let v = engine.divide(d, meas(60.0, Unit::Seconds)).unwrap();
        assert_eq!(v.unit, Unit::KilometersPerHour);
        assert!(nearly_equal(v.value, 36.0, Tolerances::default()), "{v}");
    }

    #[test]
    fn shared_free_functions() {
        let e = multiply(meas(2.0, Unit::Kilowatts), meas(3.0, Unit::Hours)).unwrap();
        assert_eq!(e, meas(6.0, Unit::KilowattHours));
        let p = divide(e, meas(3.0, Unit::Hours)).unwrap();
        assert_eq!(p, meas(2.0, Unit::Kilowatts));
    }
}
