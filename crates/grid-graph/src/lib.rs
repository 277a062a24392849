//! grid-graph: graph/model layer for gridreach.
//!
//! Provides:
//! - Core data structures (Source, Consumer, Grid)
//! - Registry and mutation operations on a live grid
//! - Reachability queries with a cycle guard
//! - Structural validation of grid invariants
//!
//! # Example
//!
//! ```
//! use grid_graph::{Grid, TraversalOrder, is_energized};
//!
//! let mut grid = Grid::with_random_namespace();
//! let plant = grid.create_source();
//! let h1 = grid.create_consumer();
//! let h2 = grid.create_consumer();
//! grid.connect_consumer_to_source(h1, plant);
//! grid.connect_consumer_to_consumer(h2, h1);
//!
//! assert!(is_energized(&grid, h2, TraversalOrder::DepthFirst));
//! grid.set_source_active(plant, false);
//! assert!(!is_energized(&grid, h2, TraversalOrder::DepthFirst));
//! ```

pub mod error;
pub mod graph;
pub mod indexing;
pub mod mutate;
pub mod reach;
pub mod registry;
pub mod validate;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use graph::{Consumer, Grid, Source};
pub use indexing::SupplyIndex;
pub use reach::{SupplyPath, TraversalOrder, find_supply, is_energized};
pub use validate::validate_grid;
