//! Reachability: does a consumer receive electricity?
//!
//! A consumer is energized when it is attached to an active source, or when
//! one of the consumers it charges from is, transitively. The walk uses an
//! explicit worklist instead of recursion and a visited map indexed by
//! consumer slot, so cycles terminate and each consumer is expanded at most
//! once per query. Nothing is cached between queries.

use std::collections::VecDeque;

use grid_core::{ConsumerId, SourceId};
use tracing::{debug, warn};

use crate::graph::{Consumer, Grid};

/// Worklist discipline for the transitive walk.
///
/// Both orders return the same answer; they differ only in which supply
/// path is found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TraversalOrder {
    /// Explore charging lists in insertion order, deepest first.
    #[default]
    DepthFirst,
    /// Explore all consumers one hop away before going further.
    BreadthFirst,
}

/// Witness for an energized consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyPath {
    /// The active source at the end of the path.
    pub source: SourceId,
    /// Consumers from the queried one (first) to the one attached to
    /// `source` (last). Length 1 for a direct connection.
    pub through: Vec<ConsumerId>,
}

impl SupplyPath {
    /// Number of consumer-to-consumer hops.
    pub fn hops(&self) -> usize {
        self.through.len().saturating_sub(1)
    }

    pub fn is_direct(&self) -> bool {
        self.through.len() == 1
    }
}

/// True iff `consumer` reaches an active source.
///
/// Unknown handles are reported as not energized.
pub fn is_energized(grid: &Grid, consumer: ConsumerId, order: TraversalOrder) -> bool {
    find_supply(grid, consumer, order).is_some()
}

/// Find a path from `consumer` to an active source, if any.
pub fn find_supply(grid: &Grid, consumer: ConsumerId, order: TraversalOrder) -> Option<SupplyPath> {
    let Some(start) = grid.consumer(consumer) else {
        warn!(%consumer, "reachability query on unknown consumer handle");
        return None;
    };

    // Direct connection short-circuits the walk.
    if let Some(source) = active_source(grid, start) {
        debug!(consumer = %start.key, energized = true, visited = 1, "reachability query");
        return Some(SupplyPath {
            source,
            through: vec![consumer],
        });
    }

    let mut walk = Walk::new(grid, consumer, order);
    let found = walk.run(start);
    debug!(
        consumer = %start.key,
        energized = found.is_some(),
        visited = walk.visited_count,
        "reachability query"
    );
    found
}

/// First active source in the consumer's direct edge list.
fn active_source(grid: &Grid, consumer: &Consumer) -> Option<SourceId> {
    consumer
        .sources
        .iter()
        .copied()
        .find(|&s| grid.source(s).is_some_and(|src| src.active))
}

/// State of one transitive walk.
struct Walk<'g> {
    grid: &'g Grid,
    order: TraversalOrder,
    /// Pending (consumer, reached-from) pairs.
    pending: VecDeque<(ConsumerId, ConsumerId)>,
    /// `parent[i]` is set once consumer `i` has been expanded.
    parent: Vec<Option<ConsumerId>>,
    visited: Vec<bool>,
    visited_count: usize,
    start: ConsumerId,
}

impl<'g> Walk<'g> {
    fn new(grid: &'g Grid, start: ConsumerId, order: TraversalOrder) -> Self {
        let n = grid.consumers.len();
        let mut visited = vec![false; n];
        visited[start.index() as usize] = true;
        Self {
            grid,
            order,
            pending: VecDeque::new(),
            parent: vec![None; n],
            visited,
            visited_count: 1,
            start,
        }
    }

    fn run(&mut self, start: &Consumer) -> Option<SupplyPath> {
        let grid = self.grid;
        self.schedule(start);

        while let Some((id, from)) = self.next() {
            let Some(node) = grid.consumer(id) else {
                continue;
            };
            let slot = id.index() as usize;
            // Already expanded: a cycle or a shared ancestor.
            if self.visited[slot] {
                continue;
            }
            self.visited[slot] = true;
            self.visited_count += 1;
            self.parent[slot] = Some(from);

            if let Some(source) = active_source(grid, node) {
                return Some(self.path_to(id, source));
            }
            self.schedule(node);
        }
        None
    }

    /// Queue the consumer's charging origins so they come out in list order.
    fn schedule(&mut self, node: &Consumer) {
        let from = node.id;
        match self.order {
            TraversalOrder::DepthFirst => {
                for &origin in node.charging_from.iter().rev() {
                    self.pending.push_back((origin, from));
                }
            }
            TraversalOrder::BreadthFirst => {
                for &origin in &node.charging_from {
                    self.pending.push_back((origin, from));
                }
            }
        }
    }

    fn next(&mut self) -> Option<(ConsumerId, ConsumerId)> {
        match self.order {
            TraversalOrder::DepthFirst => self.pending.pop_back(),
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
        }
    }

    fn path_to(&self, end: ConsumerId, source: SourceId) -> SupplyPath {
        let mut through = vec![end];
        let mut cursor = end;
        while cursor != self.start {
            match self.parent[cursor.index() as usize] {
                Some(prev) => {
                    through.push(prev);
                    cursor = prev;
                }
                None => break,
            }
        }
        through.reverse();
        SupplyPath { source, through }
    }
}
