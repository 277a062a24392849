//! Edge mutation on a live grid.
//!
//! Every operation is total: duplicate, redundant, or self-referencing
//! requests are silent no-ops, reported through the returned `bool`
//! (`true` when the grid changed).

use grid_core::{ConsumerId, SourceId};
use tracing::{debug, trace, warn};

use crate::graph::Grid;

impl Grid {
    /// Append `source` to the consumer's direct source edges.
    ///
    /// No dedup: connecting the same pair twice stores two edges. Reachability
    /// only checks existence, so duplicates are harmless; disconnecting removes
    /// them all.
    pub fn connect_consumer_to_source(&mut self, consumer: ConsumerId, source: SourceId) -> bool {
        if self.source(source).is_none() {
            warn!(%consumer, %source, "connect: unknown source handle");
            return false;
        }
        let Some(entry) = self.consumer_mut(consumer) else {
            warn!(%consumer, %source, "connect: unknown consumer handle");
            return false;
        };

        entry.sources.push(source);
        let edges = entry.sources.iter().filter(|&&s| s == source).count();
        self.supply.link(source, consumer);

        trace!(%consumer, %source, edges, "connected consumer to source");
        true
    }

    /// Remove every edge between `consumer` and `source`, in both directions.
    pub fn disconnect_consumer_from_source(
        &mut self,
        consumer: ConsumerId,
        source: SourceId,
    ) -> bool {
        let Some(entry) = self.consumer_mut(consumer) else {
            warn!(%consumer, %source, "disconnect: unknown consumer handle");
            return false;
        };

        let before = entry.sources.len();
        entry.sources.retain(|&s| s != source);
        let removed = before - entry.sources.len();
        let unlinked = self.supply.unlink(source, consumer);

        if removed == 0 && !unlinked {
            trace!(%consumer, %source, "disconnect: pair was not connected");
            return false;
        }
        debug!(%consumer, %source, removed, "disconnected consumer from source");
        true
    }

    /// Let `target` charge from `origin`.
    ///
    /// Ignored when `target == origin` or when `origin` is already listed.
    pub fn connect_consumer_to_consumer(&mut self, target: ConsumerId, origin: ConsumerId) -> bool {
        if target == origin {
            trace!(%target, "connect: self-charging ignored");
            return false;
        }
        if self.consumer(origin).is_none() {
            warn!(%target, %origin, "connect: unknown origin handle");
            return false;
        }
        let Some(entry) = self.consumer_mut(target) else {
            warn!(%target, %origin, "connect: unknown target handle");
            return false;
        };

        if entry.charging_from.contains(&origin) {
            trace!(%target, %origin, "connect: already charging");
            return false;
        }
        entry.charging_from.push(origin);
        trace!(%target, %origin, "connected consumer to consumer");
        true
    }

    /// Set the source's active flag. Edges are untouched.
    pub fn set_source_active(&mut self, source: SourceId, active: bool) -> bool {
        let Some(entry) = self.source_mut(source) else {
            warn!(%source, active, "set active: unknown source handle");
            return false;
        };

        if entry.active == active {
            return false;
        }
        entry.active = active;
        debug!(source = %entry.key, active, "source state changed");
        true
    }
}
