use thiserror::Error;

use crate::store::EntityKind;

/// Top-level error type for the femview core.
#[derive(Debug, Error)]
pub enum FemViewError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Errors raised while translating a parsed model into a geometry store.
///
/// Any of these aborts the current build. The store is left partially
/// populated and must be reset before reuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("element {element} references node {node}, which is not in the model")]
    MalformedReference { element: i64, node: i64 },

    #[error("element {element} ({card}) needs {expected} nodes, found {found}")]
    MissingNodes {
        element: i64,
        card: String,
        expected: usize,
        found: usize,
    },

    #[error("point index {index} is out of range for a buffer of {len} points")]
    PointOutOfRange { index: usize, len: usize },
}

/// Errors raised by visibility mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{kind} index {index} is out of range [0, {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        len: usize,
    },

    #[error("no {kind} with original id {id}")]
    UnknownOriginalId { kind: EntityKind, id: i64 },
}

/// Convenience type alias for results using [`FemViewError`].
pub type Result<T> = std::result::Result<T, FemViewError>;
