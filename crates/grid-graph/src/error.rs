//! Graph-specific error types.

use grid_core::{ConsumerId, SourceId};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Structural validation and lookup errors.
///
/// Mutation and reachability never produce these; they are total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A consumer lists itself as a charging origin.
    #[error("Consumer {consumer} charges from itself")]
    SelfCharging { consumer: ConsumerId },

    /// A consumer lists the same charging origin twice.
    #[error("Consumer {consumer} charges from {origin} more than once")]
    DuplicateCharging {
        consumer: ConsumerId,
        origin: ConsumerId,
    },

    /// A consumer refers to a source that doesn't exist.
    #[error("Consumer {consumer} refers to non-existent {source_id}")]
    DanglingSource {
        consumer: ConsumerId,
        source_id: SourceId,
    },

    /// A consumer refers to a charging origin that doesn't exist.
    #[error("Consumer {consumer} refers to non-existent {origin}")]
    DanglingConsumer {
        consumer: ConsumerId,
        origin: ConsumerId,
    },

    /// An entity is stored at a slot that doesn't match its handle.
    #[error("Entity {what} stored at slot {slot}")]
    MisplacedEntity { what: String, slot: usize },

    /// The back-reference index disagrees with the consumers' source edges.
    #[error("Back-reference index out of sync for {source_id}: {detail}")]
    BackReferenceMismatch {
        source_id: SourceId,
        detail: String,
    },

    /// Key not issued by this grid.
    #[error("Unknown key: {key}")]
    UnknownKey { key: String },
}
