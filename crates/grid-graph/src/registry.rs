//! Entity creation.

use grid_core::{ConsumerId, EntityKind, Namespace, SourceId};
use tracing::trace;

use crate::graph::{Consumer, Grid, Source};
use crate::indexing::SupplyIndex;

impl Grid {
    /// Create an empty grid whose keys use `namespace`.
    pub fn new(namespace: Namespace) -> Self {
        Self {
            namespace,
            sources: Vec::new(),
            consumers: Vec::new(),
            supply: SupplyIndex::new(),
        }
    }

    /// Create an empty grid under a fresh random namespace.
    pub fn with_random_namespace() -> Self {
        Self::new(Namespace::random())
    }

    /// Register a new source. It starts active with no dependants.
    pub fn create_source(&mut self) -> SourceId {
        let index = self.sources.len() as u32;
        let id = SourceId::from_index(index);
        let key = self.namespace.key(EntityKind::Source, index);
        trace!(source = %key, "create source");

        self.sources.push(Source {
            id,
            key,
            active: true,
        });
        self.supply.push_source();
        id
    }

    /// Register a new consumer with empty edge lists.
    pub fn create_consumer(&mut self) -> ConsumerId {
        let index = self.consumers.len() as u32;
        let id = ConsumerId::from_index(index);
        let key = self.namespace.key(EntityKind::Consumer, index);
        trace!(consumer = %key, "create consumer");

        self.consumers.push(Consumer {
            id,
            key,
            sources: Vec::new(),
            charging_from: Vec::new(),
        });
        id
    }
}
