use log::info;

use super::Direction;
use crate::config::TransformConfig;
use crate::error::SceneResult;
use crate::scene::Scene;
use crate::selection::Selection;

/// Operations applied to the selected object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Enlarge,
    Shrink,
    Move(Direction),
    Delete,
}

impl Command {
    /// Apply the command to whatever `selection` names in `scene`.
    ///
    /// Returns the selection that holds afterwards: unchanged for transforms,
    /// `Selection::None` after a delete. With nothing selected this is a
    /// no-op. A selection that no longer fits the scene yields
    /// `IndexOutOfRange` and leaves the scene untouched.
    pub fn execute(
        &self,
        scene: &mut Scene,
        selection: Selection,
        config: &TransformConfig,
    ) -> SceneResult<Selection> {
        let Selection::Shape { kind, index } = selection else {
            return Ok(Selection::None);
        };

        match self {
            Command::Enlarge => {
                scene.drawable_mut(kind, index)?.scale(config.enlarge_factor);
                Ok(selection)
            }
            Command::Shrink => {
                scene.drawable_mut(kind, index)?.scale(config.shrink_factor);
                Ok(selection)
            }
            Command::Move(direction) => {
                scene
                    .drawable_mut(kind, index)?
                    .translate(direction.delta(config.move_step));
                Ok(selection)
            }
            Command::Delete => {
                scene.remove(kind, index)?;
                info!("Deleted {} {}", kind, index);
                Ok(Selection::None)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Enlarge => "Enlarge",
            Command::Shrink => "Shrink",
            Command::Move(Direction::Up) => "Up",
            Command::Move(Direction::Down) => "Down",
            Command::Move(Direction::Left) => "Left",
            Command::Move(Direction::Right) => "Right",
            Command::Delete => "Delete",
        }
    }
}
