use thiserror::Error;

use crate::element::ShapeKind;

/// Errors raised by the scene store and the selection engine.
///
/// These indicate a caller bug (a stale or invalid index), not a user-facing
/// condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("{kind} index {index} out of range (count: {count})")]
    IndexOutOfRange {
        kind: ShapeKind,
        index: usize,
        count: usize,
    },

    #[error("cannot select {kind} {index}: only {count} present")]
    InvalidSelection {
        kind: ShapeKind,
        index: usize,
        count: usize,
    },
}

pub type SceneResult<T> = Result<T, SceneError>;
