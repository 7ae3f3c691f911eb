//! Relation data model: dimension triples and their unit mappings.

use std::fmt;

use amp_core::{Dimension, Unit};

/// Identifies a relation: `factor1 × factor2 = product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationKey {
    pub factor1: Dimension,
    pub factor2: Dimension,
    pub product: Dimension,
}

impl RelationKey {
    pub const fn new(factor1: Dimension, factor2: Dimension, product: Dimension) -> Self {
        Self {
            factor1,
            factor2,
            product,
        }
    }

    /// Dimension of the given factor slot.
    pub fn factor(&self, role: FactorRole) -> Dimension {
        match role {
            FactorRole::Factor1 => self.factor1,
            FactorRole::Factor2 => self.factor2,
        }
    }
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = {}", self.factor1, self.factor2, self.product)
    }
}

/// Which factor slot of a relation a measurement fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorRole {
    Factor1,
    Factor2,
}

impl FactorRole {
    pub fn other(self) -> Self {
        match self {
            Self::Factor1 => Self::Factor2,
            Self::Factor2 => Self::Factor1,
        }
    }
}

/// Concrete units for one way of evaluating a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitMapping {
    pub factor1: Unit,
    pub factor2: Unit,
    pub product: Unit,
}

impl UnitMapping {
    pub const fn new(factor1: Unit, factor2: Unit, product: Unit) -> Self {
        Self {
            factor1,
            factor2,
            product,
        }
    }

    /// Dimension triple implied by the mapping's units.
    pub fn key(&self) -> RelationKey {
        RelationKey::new(
            self.factor1.dimension(),
            self.factor2.dimension(),
            self.product.dimension(),
        )
    }

    pub fn factor(&self, role: FactorRole) -> Unit {
        match role {
            FactorRole::Factor1 => self.factor1,
            FactorRole::Factor2 => self.factor2,
        }
    }
}

impl fmt::Display for UnitMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} = {}", self.factor1, self.factor2, self.product)
    }
}

/// A declared multiplicative link between two factor dimensions and a product.
///
/// Holds one default mapping, which anchors the canonical path, and an
/// ordered list of preferred mappings. Preferred order is declaration order
/// and decides which mapping wins when several match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    key: RelationKey,
    #[cfg_attr(feature = "serde", serde(default))]
    default: Option<UnitMapping>,
    #[cfg_attr(feature = "serde", serde(default))]
    preferred: Vec<UnitMapping>,
}

impl Relation {
    /// New relation whose key is taken from the default mapping's units.
    pub fn new(default: UnitMapping) -> Self {
        Self {
            key: default.key(),
            default: Some(default),
            preferred: Vec::new(),
        }
    }

    /// New relation with no mappings at all. It will not pass validation
    /// until a default is set.
    pub fn with_key(key: RelationKey) -> Self {
        Self {
            key,
            default: None,
            preferred: Vec::new(),
        }
    }

    /// Append a preferred mapping (builder style).
    pub fn preferring(mut self, mapping: UnitMapping) -> Self {
        self.preferred.push(mapping);
        self
    }

    /// Append several preferred mappings, keeping their order.
    pub fn with_preferred(mut self, mappings: impl IntoIterator<Item = UnitMapping>) -> Self {
        self.preferred.extend(mappings);
        self
    }

    /// Replace the default mapping.
    pub fn set_default(&mut self, mapping: UnitMapping) {
        self.default = Some(mapping);
    }

    pub fn key(&self) -> RelationKey {
        self.key
    }

    pub fn default_mapping(&self) -> Option<&UnitMapping> {
        self.default.as_ref()
    }

    pub fn preferred_mappings(&self) -> &[UnitMapping] {
        &self.preferred
    }

    /// First preferred mapping taking exactly these factor units.
    pub fn find_preferred(&self, factor1: Unit, factor2: Unit) -> Option<&UnitMapping> {
        self.preferred
            .iter()
            .find(|m| m.factor1 == factor1 && m.factor2 == factor2)
    }

    /// First preferred mapping with this product unit whose `role` factor is
    /// `factor`.
    pub fn find_preferred_divisor(
        &self,
        product: Unit,
        role: FactorRole,
        factor: Unit,
    ) -> Option<&UnitMapping> {
        self.preferred
            .iter()
            .find(|m| m.product == product && m.factor(role) == factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance() -> Relation {
        Relation::new(UnitMapping::new(
            Unit::MetersPerSecond,
            Unit::Seconds,
            Unit::Meters,
        ))
        .preferring(UnitMapping::new(
            Unit::KilometersPerHour,
            Unit::Hours,
            Unit::Kilometers,
        ))
        .preferring(UnitMapping::new(Unit::MilesPerHour, Unit::Hours, Unit::Miles))
    }

    #[test]
    fn key_comes_from_default_units() {
        assert_eq!(
            distance().key(),
            RelationKey::new(Dimension::Speed, Dimension::Duration, Dimension::Length)
        );
    }

    #[test]
    fn preferred_order_is_kept() {
        let r = distance();
        assert_eq!(r.preferred_mappings().len(), 2);
        assert_eq!(r.preferred_mappings()[0].product, Unit::Kilometers);
        assert_eq!(r.preferred_mappings()[1].product, Unit::Miles);
    }

    #[test]
    fn find_preferred_matches_both_factors() {
        let r = distance();
        assert_eq!(
            r.find_preferred(Unit::MilesPerHour, Unit::Hours).map(|m| m.product),
            Some(Unit::Miles)
        );
        assert!(r.find_preferred(Unit::MilesPerHour, Unit::Minutes).is_none());
        assert!(r.find_preferred(Unit::MetersPerSecond, Unit::Seconds).is_none());
    }

    #[test]
    fn find_preferred_divisor_by_role() {
        let r = distance();
        let by_speed = r.find_preferred_divisor(
            Unit::Kilometers,
            FactorRole::Factor1,
            Unit::KilometersPerHour,
        );
        assert_eq!(by_speed.map(|m| m.factor2), Some(Unit::Hours));

        let by_time = r.find_preferred_divisor(Unit::Miles, FactorRole::Factor2, Unit::Hours);
        assert_eq!(by_time.map(|m| m.factor1), Some(Unit::MilesPerHour));

        assert!(
            r.find_preferred_divisor(Unit::Miles, FactorRole::Factor1, Unit::KilometersPerHour)
                .is_none()
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            distance().key().to_string(),
            "Speed × Duration = Length"
        );
        assert_eq!(
            UnitMapping::new(Unit::Knots, Unit::Hours, Unit::NauticalMiles).to_string(),
            "kn × h = NM"
        );
    }

    #[test]
    fn role_other() {
        assert_eq!(FactorRole::Factor1.other(), FactorRole::Factor2);
        assert_eq!(FactorRole::Factor2.other(), FactorRole::Factor1);
    }
}
