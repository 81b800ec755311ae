//! Round-based simulation of many identical entities.
//!
//! Entities with equal values always evolve identically, so instead of
//! tracking each one the working set maps every distinct value to how many
//! entities currently hold it. The transform runs once per distinct value
//! per round and the multiplicity is carried over to each successor.

use std::collections::HashMap;
use std::hash::Hash;

use num::{BigUint, One, Zero};

/// Rounds between progress log lines
const PROGRESS_INTERVAL: usize = 5;

/// Distinct entity values with their multiplicities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMultiset<K: Eq + Hash> {
    counts: HashMap<K, BigUint>,
}

impl<K: Eq + Hash> Default for EntityMultiset<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> EntityMultiset<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse a sequence of entities, counting repeats
    pub fn from_entities(entities: impl IntoIterator<Item = K>) -> Self {
        let mut multiset = Self::new();
        let one = BigUint::one();
        for entity in entities {
            multiset.add(entity, &one);
        }
        multiset
    }

    /// Add `count` more entities holding `value`
    pub fn add(&mut self, value: K, count: &BigUint) {
        if count.is_zero() {
            return;
        }
        *self.counts.entry(value).or_insert_with(BigUint::zero) += count;
    }

    /// Multiplicity of `value`, if any entity holds it
    pub fn count(&self, value: &K) -> Option<&BigUint> {
        self.counts.get(value)
    }

    /// Total number of entities
    pub fn total(&self) -> BigUint {
        self.counts.values().sum()
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &BigUint)> {
        self.counts.iter()
    }
}

/// Run `rounds` rounds of `transform` over a collapsed working set.
///
/// Each round builds a fresh multiset: every distinct value is transformed
/// once and each successor receives the value's full multiplicity.
pub fn simulate_multiset<K, F, I>(
    initial: EntityMultiset<K>,
    rounds: usize,
    mut transform: F,
) -> EntityMultiset<K>
where
    K: Eq + Hash,
    F: FnMut(&K) -> I,
    I: IntoIterator<Item = K>,
{
    let mut current = initial;
    for round in 1..=rounds {
        let mut next = EntityMultiset::new();
        for (value, count) in &current.counts {
            for successor in transform(value) {
                next.add(successor, count);
            }
        }
        current = next;

        if round % PROGRESS_INTERVAL == 0 || round == rounds {
            log::debug!(
                "round {}/{}: {} entities across {} distinct values",
                round,
                rounds,
                current.total(),
                current.len()
            );
        }
    }
    current
}

/// Total number of entities after `rounds` rounds starting from `initial`
pub fn simulate<K, F, I>(initial: impl IntoIterator<Item = K>, rounds: usize, transform: F) -> BigUint
where
    K: Eq + Hash,
    F: FnMut(&K) -> I,
    I: IntoIterator<Item = K>,
{
    simulate_multiset(EntityMultiset::from_entities(initial), rounds, transform).total()
}
