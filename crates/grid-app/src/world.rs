//! The world facade.

use grid_core::{ConsumerId, SourceId};
use grid_graph::{Grid, SupplyPath, TraversalOrder, find_supply, is_energized};
use tracing::debug;

use crate::config::WorldConfig;
use crate::error::AppResult;
use crate::report::GridReport;

/// A grid of power sources and consumers plus the query settings.
///
/// Every method delegates to the graph layer without extra validation.
/// Handles must come from this world's own `create_*` calls; handles from
/// another world are not detected and may address an unrelated entity.
///
/// Mutators return `true` when the grid changed. Redundant requests
/// (duplicate charging edge, self-charging, disconnecting a pair that was
/// never connected, setting a source to its current state) return `false`.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    traversal: TraversalOrder,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Empty world with a random key namespace and depth-first queries.
    pub fn new() -> Self {
        Self {
            grid: Grid::with_random_namespace(),
            traversal: TraversalOrder::default(),
        }
    }

    pub fn with_config(config: &WorldConfig) -> AppResult<Self> {
        let namespace = config.namespace()?;
        debug!(%namespace, traversal = ?config.traversal, "creating world");
        Ok(Self {
            grid: Grid::new(namespace),
            traversal: config.traversal,
        })
    }

    /// Create a power source. New sources are active.
    pub fn create_source(&mut self) -> SourceId {
        self.grid.create_source()
    }

    /// Create a consumer with no connections.
    pub fn create_consumer(&mut self) -> ConsumerId {
        self.grid.create_consumer()
    }

    /// Attach `consumer` to `source`. Repeating the call adds another edge.
    pub fn connect_consumer_to_source(&mut self, consumer: ConsumerId, source: SourceId) -> bool {
        self.grid.connect_consumer_to_source(consumer, source)
    }

    /// Let `target` draw electricity from `origin`.
    pub fn connect_consumer_to_consumer(&mut self, target: ConsumerId, origin: ConsumerId) -> bool {
        self.grid.connect_consumer_to_consumer(target, origin)
    }

    /// Remove every edge between `consumer` and `source`.
    pub fn disconnect_consumer_from_source(
        &mut self,
        consumer: ConsumerId,
        source: SourceId,
    ) -> bool {
        self.grid.disconnect_consumer_from_source(consumer, source)
    }

    /// Bring a source back online (a repaired plant).
    pub fn activate_source(&mut self, source: SourceId) -> bool {
        self.grid.set_source_active(source, true)
    }

    /// Take a source offline (a failed plant).
    pub fn deactivate_source(&mut self, source: SourceId) -> bool {
        self.grid.set_source_active(source, false)
    }

    /// Does the consumer receive electricity, directly or through other consumers?
    pub fn is_energized(&self, consumer: ConsumerId) -> bool {
        is_energized(&self.grid, consumer, self.traversal)
    }

    /// The path electricity takes to `consumer`, if it has any.
    pub fn supply_path(&self, consumer: ConsumerId) -> Option<SupplyPath> {
        find_supply(&self.grid, consumer, self.traversal)
    }

    pub fn traversal(&self) -> TraversalOrder {
        self.traversal
    }

    /// Read access to the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snapshot of every source and consumer.
    pub fn report(&self) -> GridReport {
        GridReport::build(&self.grid, self.traversal)
    }
}
