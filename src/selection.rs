use crate::element::ShapeKind;
use crate::error::{SceneError, SceneResult};
use crate::scene::Scene;

/// The single selected object, addressed by kind and index.
///
/// A selection is only meaningful against the scene it was made on: removing
/// an earlier object of the same kind shifts indices, and the selection is
/// not re-resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Shape {
        kind: ShapeKind,
        index: usize,
    },
}

impl Selection {
    /// Select `index` of `kind`, checking it exists in `scene`.
    pub fn select(scene: &Scene, kind: ShapeKind, index: usize) -> SceneResult<Self> {
        let count = scene.count(kind);
        if index >= count {
            return Err(SceneError::InvalidSelection { kind, index, count });
        }
        Ok(Selection::Shape { kind, index })
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Selection::None => None,
            Selection::Shape { kind, .. } => Some(*kind),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Shape { index, .. } => Some(*index),
        }
    }

    /// Whether the selection still addresses an existing object
    pub fn is_valid_for(&self, scene: &Scene) -> bool {
        match self {
            Selection::None => true,
            Selection::Shape { kind, index } => *index < scene.count(*kind),
        }
    }
}
