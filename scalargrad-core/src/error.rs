use crate::value::ValueId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("node {id} does not belong to this graph (operation {operation})")]
    UnknownNode { id: ValueId, operation: String },

    #[error("node {id} was released from the arena (operation {operation})")]
    NodeReleased { id: ValueId, operation: String },

    #[error("length mismatch: expected {expected}, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },
}
