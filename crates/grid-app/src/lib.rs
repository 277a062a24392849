//! Application layer for gridreach.
//!
//! [`World`] is the facade host applications embed: it creates entities,
//! wires them, toggles sources, and answers energized-status queries.
//! The scenario service replays declarative scenario files against a world.

pub mod config;
pub mod error;
pub mod report;
pub mod scenario_service;
pub mod world;

// Re-export key types for convenience
pub use config::WorldConfig;
pub use error::{AppError, AppResult};
pub use grid_core::{ConsumerId, SourceId};
pub use grid_graph::{SupplyPath, TraversalOrder};
pub use report::{ConsumerStatus, GridReport, SourceStatus};
pub use scenario_service::{
    CheckResult, CompiledScenario, ScenarioOutcome, build_world, run_scenario, run_scenario_file,
};
pub use world::World;
