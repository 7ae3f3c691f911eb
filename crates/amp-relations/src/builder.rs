//! Incremental registry builder.

use std::collections::HashMap;

use amp_core::{StandardCatalog, Tolerances, UnitCatalog};
use tracing::debug;

use crate::registry::RelationRegistry;
use crate::relation::{Relation, RelationKey};
use crate::{RelationResult, standard, validate};

/// Builder for constructing a relation registry.
///
/// Use `register` and `declare` to add relations, then call `build()` to
/// validate and freeze them into an immutable `RelationRegistry`.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    relations: Vec<Relation>,
    index: HashMap<RelationKey, usize>,
    collisions: Vec<RelationKey>,
    tolerances: Tolerances,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-loaded with the standard declarations.
    pub fn standard() -> Self {
        let mut builder = Self::new();
        builder.declare_all(standard::standard_relations());
        builder
    }

    /// Set the tolerances used by validation (and kept by the registry).
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Add a relation, replacing any relation with the same key.
    ///
    /// The replacement takes over the earlier relation's position and drops
    /// its mappings entirely. It also settles any `declare` collisions on the
    /// same key. Returns the replaced relation.
    pub fn register(&mut self, relation: Relation) -> Option<Relation> {
        let key = relation.key();
        self.collisions.retain(|k| *k != key);
        match self.index.get(&key) {
            Some(&i) => {
                debug!(relation = %key, "replacing registered relation");
                Some(std::mem::replace(&mut self.relations[i], relation))
            }
            None => {
                self.insert(relation);
                None
            }
        }
    }

    /// Add a relation that must not collide with an existing key.
    ///
    /// A collision keeps the first relation and is reported by `build()` as
    /// `DuplicateRelationKey`.
    pub fn declare(&mut self, relation: Relation) -> &mut Self {
        let key = relation.key();
        if self.index.contains_key(&key) {
            self.collisions.push(key);
        } else {
            self.insert(relation);
        }
        self
    }

    /// Declare every relation in order.
    pub fn declare_all(&mut self, relations: impl IntoIterator<Item = Relation>) -> &mut Self {
        for relation in relations {
            self.declare(relation);
        }
        self
    }

    pub fn get(&self, key: &RelationKey) -> Option<&Relation> {
        self.index.get(key).map(|&i| &self.relations[i])
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Validate against the standard catalog and freeze.
    pub fn build(self) -> RelationResult<RelationRegistry> {
        self.build_with(&StandardCatalog)
    }

    /// Validate against `catalog` and freeze.
    ///
    /// Exactness is only checked under `catalog`; engines over the result
    /// should be created with [`crate::Engine::with_catalog`] and the same
    /// catalog.
    pub fn build_with<C: UnitCatalog + ?Sized>(
        self,
        catalog: &C,
    ) -> RelationResult<RelationRegistry> {
        validate::validate_relations(&self.relations, &self.collisions, catalog, self.tolerances)?;

        let registry = RelationRegistry::from_validated(self.relations, self.tolerances);
        debug!(relations = registry.len(), "relation registry built");
        Ok(registry)
    }

    fn insert(&mut self, relation: Relation) {
        self.index.insert(relation.key(), self.relations.len());
        self.relations.push(relation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RelationError;
    use crate::relation::UnitMapping;
    use amp_core::Unit;

    fn charge() -> Relation {
        Relation::new(UnitMapping::new(Unit::Amperes, Unit::Seconds, Unit::Coulombs))
    }

    #[test]
    fn register_replaces_whole_relation() {
        let mut builder = RegistryBuilder::new();
        let first = charge().preferring(UnitMapping::new(
            Unit::Amperes,
            Unit::Hours,
            Unit::AmpereHours,
        ));
        assert!(builder.register(first.clone()).is_none());

        let replaced = builder.register(charge());
        assert_eq!(replaced, Some(first));
        assert_eq!(builder.len(), 1);

        let kept = builder.get(&charge().key()).unwrap();
        assert!(kept.preferred_mappings().is_empty());
    }

    #[test]
    fn declare_records_collision() {
        let mut builder = RegistryBuilder::new();
        builder.declare(charge()).declare(charge());
        assert_eq!(builder.len(), 1);
        assert_eq!(
            builder.build().unwrap_err(),
            RelationError::DuplicateRelationKey { key: charge().key() }
        );
    }

    #[test]
    fn register_after_declare_is_explicit_replace() {
        let mut builder = RegistryBuilder::new();
        builder.declare(charge());
        builder.register(charge());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn register_settles_declare_collision() {
        let mut builder = RegistryBuilder::new();
        builder.declare(charge()).declare(charge());
        let hours = charge().preferring(UnitMapping::new(
            Unit::Amperes,
            Unit::Hours,
            Unit::AmpereHours,
        ));
        builder.register(hours.clone());

        let registry = builder.build().unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.relations()[0], hours);
    }

    #[test]
    fn tolerances_reach_registry() {
        let tol = Tolerances::with_rel(1e-6);
        let registry = RegistryBuilder::new().with_tolerances(tol).build().unwrap();
        assert_eq!(registry.tolerances(), tol);
        assert!(registry.is_empty());
    }
}
