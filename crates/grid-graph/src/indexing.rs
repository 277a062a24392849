//! Back-reference index from sources to the consumers drawing on them.
//!
//! The index is non-owning bookkeeping kept in step with the consumers'
//! source edges. It answers "who depends on this source?" for introspection
//! and reporting; reachability decisions never consult it.

use std::collections::BTreeSet;

use grid_core::{ConsumerId, SourceId};

/// Per-source set of dependant consumers, indexed by source slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyIndex {
    dependants: Vec<BTreeSet<ConsumerId>>,
}

impl SupplyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an empty slot for a newly created source.
    pub(crate) fn push_source(&mut self) {
        self.dependants.push(BTreeSet::new());
    }

    /// Record that `consumer` draws from `source`.
    ///
    /// Repeated links collapse; the consumer's edge list keeps the count.
    pub(crate) fn link(&mut self, source: SourceId, consumer: ConsumerId) {
        if let Some(set) = self.dependants.get_mut(source.index() as usize) {
            set.insert(consumer);
        }
    }

    /// Forget `consumer` as a dependant of `source`. Returns whether it was present.
    pub(crate) fn unlink(&mut self, source: SourceId, consumer: ConsumerId) -> bool {
        self.dependants
            .get_mut(source.index() as usize)
            .is_some_and(|set| set.remove(&consumer))
    }

    /// Number of source slots in the index.
    pub fn source_count(&self) -> usize {
        self.dependants.len()
    }

    /// Number of distinct consumers drawing from `source`.
    pub fn dependant_count(&self, source: SourceId) -> usize {
        self.dependants
            .get(source.index() as usize)
            .map_or(0, BTreeSet::len)
    }

    pub fn contains(&self, source: SourceId, consumer: ConsumerId) -> bool {
        self.dependants
            .get(source.index() as usize)
            .is_some_and(|set| set.contains(&consumer))
    }

    /// Iterate dependants of `source` in handle order.
    pub fn dependants(&self, source: SourceId) -> impl Iterator<Item = ConsumerId> + '_ {
        self.dependants
            .get(source.index() as usize)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
