//! Grid validation logic.
//!
//! The mutator keeps these invariants by construction; validation exists to
//! check grids assembled from external descriptions and to pin the
//! invariants down in tests.

use std::collections::{BTreeSet, HashSet};

use grid_core::SourceId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Grid;

/// Check handles, edge lists, and the back-reference index for consistency.
pub fn validate_grid(grid: &Grid) -> GraphResult<()> {
    validate_slots(grid)?;
    validate_edges(grid)?;
    validate_supply_index(grid)
}

/// Every entity sits at the slot its handle names.
fn validate_slots(grid: &Grid) -> GraphResult<()> {
    for (slot, source) in grid.sources.iter().enumerate() {
        if source.id.index() as usize != slot {
            return Err(GraphError::MisplacedEntity {
                what: source.id.to_string(),
                slot,
            });
        }
    }
    for (slot, consumer) in grid.consumers.iter().enumerate() {
        if consumer.id.index() as usize != slot {
            return Err(GraphError::MisplacedEntity {
                what: consumer.id.to_string(),
                slot,
            });
        }
    }
    Ok(())
}

fn validate_edges(grid: &Grid) -> GraphResult<()> {
    for consumer in &grid.consumers {
        for &source_id in &consumer.sources {
            if grid.source(source_id).is_none() {
                return Err(GraphError::DanglingSource {
                    consumer: consumer.id,
                    source_id,
                });
            }
        }

        let mut seen = HashSet::new();
        for &origin in &consumer.charging_from {
            if origin == consumer.id {
                return Err(GraphError::SelfCharging {
                    consumer: consumer.id,
                });
            }
            if grid.consumer(origin).is_none() {
                return Err(GraphError::DanglingConsumer {
                    consumer: consumer.id,
                    origin,
                });
            }
            if !seen.insert(origin) {
                return Err(GraphError::DuplicateCharging {
                    consumer: consumer.id,
                    origin,
                });
            }
        }
    }
    Ok(())
}

/// The index lists exactly the consumers holding an edge to each source.
fn validate_supply_index(grid: &Grid) -> GraphResult<()> {
    if grid.supply.source_count() != grid.sources.len() {
        return Err(GraphError::BackReferenceMismatch {
            source_id: SourceId::from_index(grid.supply.source_count() as u32),
            detail: format!(
                "index has {} slots for {} sources",
                grid.supply.source_count(),
                grid.sources.len()
            ),
        });
    }

    for source in &grid.sources {
        let expected: BTreeSet<_> = grid
            .consumers
            .iter()
            .filter(|c| c.sources.contains(&source.id))
            .map(|c| c.id)
            .collect();
        let indexed: BTreeSet<_> = grid.supply.dependants(source.id).collect();

        if let Some(missing) = expected.difference(&indexed).next() {
            return Err(GraphError::BackReferenceMismatch {
                source_id: source.id,
                detail: format!("{missing} draws from it but is not indexed"),
            });
        }
        if let Some(stale) = indexed.difference(&expected).next() {
            return Err(GraphError::BackReferenceMismatch {
                source_id: source.id,
                detail: format!("{stale} is indexed but holds no edge"),
            });
        }
    }
    Ok(())
}
