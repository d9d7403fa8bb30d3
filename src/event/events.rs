use crate::command::Command;
use crate::selection::Selection;
use crate::state::SaveOutcome;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SelectionChanged {
        old: Selection,
        new: Selection,
    },
    /// Objects were added, transformed or removed
    SceneChanged,
    CommandApplied {
        command: Command,
    },
    StrokeStarted {
        index: usize,
    },
    StrokeCompleted {
        index: usize,
    },
    SceneCleared,
    DrawingSaved {
        key: String,
        outcome: SaveOutcome,
    },
    DrawingOpened {
        key: String,
    },
    DrawingClosed,
    DrawingDeleted {
        key: String,
    },
    NothingToSave,
    PersistenceFailed {
        message: String,
    },
}
