//! Core grid data structures.

use grid_core::{ConsumerId, Namespace, SourceId};

use crate::error::{GraphError, GraphResult};
use crate::indexing::SupplyIndex;

/// A power source (e.g., a power plant).
///
/// Sources hold only their activity flag. Which consumers draw from a
/// source is tracked by the grid's [`SupplyIndex`], not by the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub(crate) id: SourceId,
    pub(crate) key: String,
    pub(crate) active: bool,
}

impl Source {
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Unique string identifier, `<namespace>/source/<n>`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// A consumer (e.g., a household).
///
/// A consumer draws from sources directly and may charge from other
/// consumers. Both edge lists keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumer {
    pub(crate) id: ConsumerId,
    pub(crate) key: String,
    /// Direct source edges. May hold the same source more than once.
    pub(crate) sources: Vec<SourceId>,
    /// Consumers this one charges from. Never contains `id`, never repeats.
    pub(crate) charging_from: Vec<ConsumerId>,
}

impl Consumer {
    pub fn id(&self) -> ConsumerId {
        self.id
    }

    /// Unique string identifier, `<namespace>/consumer/<n>`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn sources(&self) -> &[SourceId] {
        &self.sources
    }

    pub fn charging_from(&self) -> &[ConsumerId] {
        &self.charging_from
    }

    /// True when the consumer has no edges of either kind.
    pub fn is_isolated(&self) -> bool {
        self.sources.is_empty() && self.charging_from.is_empty()
    }
}

/// The grid: every source and consumer ever created, plus their edges.
///
/// Entities are never removed, so a handle's index stays valid for the
/// lifetime of the grid that issued it. Handles from another grid are a
/// caller error; lookups return `None` when they fall out of range but may
/// silently alias an unrelated entity otherwise.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) namespace: Namespace,
    pub(crate) sources: Vec<Source>,
    pub(crate) consumers: Vec<Consumer>,
    pub(crate) supply: SupplyIndex,
}

impl Grid {
    /// Namespace prefixing every key issued by this grid.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Return all sources in creation order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Return all consumers in creation order.
    pub fn consumers(&self) -> &[Consumer] {
        &self.consumers
    }

    /// Get a source by handle (returns None if out of bounds).
    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.get(id.index() as usize)
    }

    /// Get a consumer by handle (returns None if out of bounds).
    pub fn consumer(&self, id: ConsumerId) -> Option<&Consumer> {
        self.consumers.get(id.index() as usize)
    }

    pub(crate) fn source_mut(&mut self, id: SourceId) -> Option<&mut Source> {
        self.sources.get_mut(id.index() as usize)
    }

    pub(crate) fn consumer_mut(&mut self, id: ConsumerId) -> Option<&mut Consumer> {
        self.consumers.get_mut(id.index() as usize)
    }

    /// Resolve a source key back to its handle.
    pub fn source_by_key(&self, key: &str) -> GraphResult<SourceId> {
        self.sources
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.id)
            .ok_or_else(|| GraphError::UnknownKey {
                key: key.to_string(),
            })
    }

    /// Resolve a consumer key back to its handle.
    pub fn consumer_by_key(&self, key: &str) -> GraphResult<ConsumerId> {
        self.consumers
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.id)
            .ok_or_else(|| GraphError::UnknownKey {
                key: key.to_string(),
            })
    }

    /// Consumers holding at least one direct edge to `source`.
    ///
    /// Introspection only; reachability never walks this index.
    pub fn consumers_of(&self, source: SourceId) -> impl Iterator<Item = ConsumerId> + '_ {
        self.supply.dependants(source)
    }

    /// Back-reference index (source -> dependant consumers).
    pub fn supply_index(&self) -> &SupplyIndex {
        &self.supply
    }
}
