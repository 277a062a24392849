//! grid-core: stable foundation for gridreach.
//!
//! Contains:
//! - ids (compact typed handles, key namespaces)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
