//! Status snapshots of a whole grid.

use grid_graph::{Grid, TraversalOrder, find_supply};
use serde::Serialize;

use crate::error::AppResult;

/// Status of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    pub key: String,
    pub active: bool,
    /// Distinct consumers holding a direct edge to this source.
    pub dependants: usize,
}

/// Status of one consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumerStatus {
    pub key: String,
    pub energized: bool,
    /// Key of the active source found by the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplied_by: Option<String>,
    /// Consumer-to-consumer hops to that source (0 = direct).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
}

/// Snapshot of every entity in a grid, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridReport {
    pub namespace: String,
    pub sources: Vec<SourceStatus>,
    pub consumers: Vec<ConsumerStatus>,
}

impl GridReport {
    /// Run one energized query per consumer.
    pub fn build(grid: &Grid, order: TraversalOrder) -> Self {
        let sources = grid
            .sources()
            .iter()
            .map(|s| SourceStatus {
                key: s.key().to_string(),
                active: s.is_active(),
                dependants: grid.supply_index().dependant_count(s.id()),
            })
            .collect();

        let consumers = grid
            .consumers()
            .iter()
            .map(|c| {
                let path = find_supply(grid, c.id(), order);
                ConsumerStatus {
                    key: c.key().to_string(),
                    energized: path.is_some(),
                    supplied_by: path
                        .as_ref()
                        .and_then(|p| grid.source(p.source))
                        .map(|s| s.key().to_string()),
                    hops: path.as_ref().map(|p| p.hops()),
                }
            })
            .collect();

        Self {
            namespace: grid.namespace().to_string(),
            sources,
            consumers,
        }
    }

    pub fn energized_count(&self) -> usize {
        self.consumers.iter().filter(|c| c.energized).count()
    }

    /// Keys of consumers without electricity.
    pub fn dark_consumers(&self) -> Vec<&str> {
        self.consumers
            .iter()
            .filter(|c| !c.energized)
            .map(|c| c.key.as_str())
            .collect()
    }

    pub fn consumer(&self, key: &str) -> Option<&ConsumerStatus> {
        self.consumers.iter().find(|c| c.key == key)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
