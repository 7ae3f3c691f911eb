//! Validated, immutable relation registry.

use std::collections::HashMap;
use std::sync::OnceLock;

use amp_core::{Dimension, Tolerances};

use crate::relation::{FactorRole, Relation};
use crate::{RegistryBuilder, RelationResult};

/// The registry: a validated, read-only set of relations.
///
/// Only obtainable from [`RegistryBuilder::build`], so every relation in it
/// has a default mapping and exact preferred mappings. Safe to share across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct RelationRegistry {
    relations: Vec<Relation>,
    /// (factor1, factor2) -> index into `relations`.
    by_factors: HashMap<(Dimension, Dimension), usize>,
    tolerances: Tolerances,
}

impl RelationRegistry {
    pub(crate) fn from_validated(relations: Vec<Relation>, tolerances: Tolerances) -> Self {
        let by_factors = relations
            .iter()
            .enumerate()
            .map(|(i, r)| ((r.key().factor1, r.key().factor2), i))
            .collect();
        Self {
            relations,
            by_factors,
            tolerances,
        }
    }

    /// Build and validate the standard declarations.
    pub fn standard() -> RelationResult<Self> {
        RegistryBuilder::standard().build()
    }

    /// Process-wide standard registry, built and validated on first use.
    pub fn shared() -> RelationResult<&'static Self> {
        static SHARED: OnceLock<RelationResult<RelationRegistry>> = OnceLock::new();
        SHARED.get_or_init(Self::standard).as_ref().map_err(Clone::clone)
    }

    /// Relation whose factors are exactly `(factor1, factor2)`, in that order.
    pub fn lookup(&self, factor1: Dimension, factor2: Dimension) -> Option<&Relation> {
        self.by_factors
            .get(&(factor1, factor2))
            .map(|&i| &self.relations[i])
    }

    /// First registered relation producing `product`.
    pub fn lookup_by_product(&self, product: Dimension) -> Option<&Relation> {
        self.relations.iter().find(|r| r.key().product == product)
    }

    /// First registered relation producing `product` with a factor of
    /// dimension `factor`, and which slot that factor fills. Factor1 is
    /// tried before Factor2.
    pub fn lookup_divisor(
        &self,
        product: Dimension,
        factor: Dimension,
    ) -> Option<(&Relation, FactorRole)> {
        self.relations
            .iter()
            .filter(|r| r.key().product == product)
            .find_map(|r| {
                let key = r.key();
                if key.factor1 == factor {
                    Some((r, FactorRole::Factor1))
                } else if key.factor2 == factor {
                    Some((r, FactorRole::Factor2))
                } else {
                    None
                }
            })
    }

    /// All relations, in registration order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Tolerances the registry was validated with.
    pub fn tolerances(&self) -> Tolerances {
        self.tolerances
    }

    /// Turn back into a builder, e.g. to add project-specific relations on
    /// top of the standard set.
    pub fn into_builder(self) -> RegistryBuilder {
        let mut builder = RegistryBuilder::new().with_tolerances(self.tolerances);
        builder.declare_all(self.relations);
        builder
    }
}
