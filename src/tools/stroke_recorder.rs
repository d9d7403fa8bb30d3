use egui::Pos2;
use log::{debug, info};

use crate::element::{ColorRef, Stroke};
use crate::scene::Scene;
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    /// Appending to the stroke at this index of the scene's stroke list
    Recording { stroke_index: usize },
}

/// Turns a drag into a freehand stroke.
///
/// Drawing is only possible while nothing is selected; with a selection
/// active, drags are ignored. Points are appended straight into the scene's
/// last stroke, so the scene is always the single source of truth.
#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    state: RecorderState,
    color: ColorRef,
}

impl StrokeRecorder {
    pub fn new(color: impl Into<ColorRef>) -> Self {
        Self {
            state: RecorderState::Idle,
            color: color.into(),
        }
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    pub fn set_color(&mut self, color: impl Into<ColorRef>) {
        self.color = color.into();
    }

    /// Begin a stroke at `point`. Returns whether recording started.
    pub fn drag_start(&mut self, scene: &mut Scene, selection: Selection, point: Pos2) -> bool {
        if selection.is_some() {
            debug!("Drag ignored: {:?} is selected", selection);
            return false;
        }

        let stroke_index = scene.begin_stroke(Stroke::new(point, self.color.clone()));
        self.state = RecorderState::Recording { stroke_index };
        info!("Stroke {} started at {:?}", stroke_index, point);
        true
    }

    /// Extend the stroke being recorded. Returns whether a point was added.
    pub fn drag_update(&mut self, scene: &mut Scene, selection: Selection, point: Pos2) -> bool {
        if !self.is_recording() || selection.is_some() {
            return false;
        }

        match scene.last_stroke_mut() {
            Some(stroke) => {
                stroke.line_to(point);
                true
            }
            None => {
                // The scene was cleared mid-drag.
                self.state = RecorderState::Idle;
                false
            }
        }
    }

    /// Finish the current stroke; it receives no further points.
    pub fn drag_end(&mut self, scene: &Scene) {
        if let RecorderState::Recording { stroke_index } = self.state {
            let points = scene.strokes().get(stroke_index).map_or(0, Stroke::len);
            info!("Stroke {} finished: {} points", stroke_index, points);
        }
        self.state = RecorderState::Idle;
    }

    /// Drop back to idle without touching the scene
    pub fn reset(&mut self) {
        self.state = RecorderState::Idle;
    }
}
