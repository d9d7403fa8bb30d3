//! The editing session: one scene, one selection, one stroke recorder.
//!
//! `EditorContext` is the only thing the UI talks to. It turns input events
//! and toolbar actions into scene mutations, keeps the selection consistent
//! with the scene, and broadcasts an [`EditorEvent`] for every change so the
//! shell can refresh and report.
//!
//! ```text
//!   tap ──► hit test ──► selection ──► command ──► scene
//!   drag ─────────────────► stroke recorder ─────► scene
//!   save ──► new name: write, scene cleared
//!        └─► opened name: rewrite, scene kept
//! ```

use std::collections::HashSet;

use egui::Pos2;

use super::naming::NamePool;
use super::persistence::{DrawingRepository, PersistenceResult, SaveOutcome};
use crate::command::{Command, Direction};
use crate::config::EditorConfig;
use crate::element::{Circle, Line, Rectangle, ShapeKind, Star, TextLabel};
use crate::error::SceneResult;
use crate::event::{EditorEvent, EventBus};
use crate::geometry::hit_testing;
use crate::input::InputEvent;
use crate::scene::Scene;
use crate::selection::Selection;
use crate::storage::KeyValueStore;
use crate::tools::StrokeRecorder;

/// Result of [`EditorContext::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReport {
    /// The scene was empty; nothing was written
    NothingToSave,
    Saved { key: String, outcome: SaveOutcome },
}

#[derive(Debug)]
pub struct EditorContext {
    scene: Scene,
    selection: Selection,
    recorder: StrokeRecorder,
    config: EditorConfig,
    /// Key the scene was loaded from; the next save rewrites it
    target: Option<String>,
    names: NamePool,
    event_bus: EventBus,
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        let names = NamePool::generate(&config.naming, &mut rand::thread_rng());
        Self::with_name_pool(config, names)
    }

    pub fn with_name_pool(config: EditorConfig, names: NamePool) -> Self {
        Self {
            scene: Scene::new(),
            selection: Selection::None,
            recorder: StrokeRecorder::new(config.stroke_color.as_str()),
            config,
            target: None,
            names,
            event_bus: EventBus::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        self.recorder.set_color(config.stroke_color.as_str());
        self.config = config;
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn recorder(&self) -> &StrokeRecorder {
        &self.recorder
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    fn set_selection(&mut self, new: Selection) {
        if new != self.selection {
            let old = std::mem::replace(&mut self.selection, new);
            log::debug!("Selection {:?} -> {:?}", old, new);
            self.event_bus.emit(EditorEvent::SelectionChanged { old, new });
        }
    }

    fn scene_changed(&self) {
        self.event_bus.emit(EditorEvent::SceneChanged);
    }

    pub fn add_circle(&mut self, center: Pos2, radius: f32, color: &str) -> usize {
        let index = self.scene.add(Circle::new(center, radius, color));
        self.scene_changed();
        index
    }

    pub fn add_rectangle(
        &mut self,
        origin: Pos2,
        width: f32,
        height: f32,
        corner_radius: f32,
        color: &str,
    ) -> usize {
        let index = self
            .scene
            .add(Rectangle::new(origin, width, height, corner_radius, color));
        self.scene_changed();
        index
    }

    pub fn add_line(&mut self, p1: Pos2, p2: Pos2, color: &str, stroke_width: f32) -> usize {
        let index = self.scene.add(Line::new(p1, p2, color, stroke_width));
        self.scene_changed();
        index
    }

    pub fn add_star(&mut self, origin: Pos2, width: f32, height: f32) -> usize {
        let index = self.scene.add(Star::new(origin, width, height));
        self.scene_changed();
        index
    }

    pub fn add_text(
        &mut self,
        text: &str,
        origin: Pos2,
        font: &str,
        color: &str,
        font_size: f32,
    ) -> usize {
        let index = self
            .scene
            .add(TextLabel::new(text, origin, font, color, font_size));
        self.scene_changed();
        index
    }

    /// Add a shape of `kind` near `tap` using the configured placement defaults.
    pub fn place(&mut self, kind: ShapeKind, tap: Pos2) -> usize {
        let defaults = self.config.placement.clone();
        let at = Pos2::new(tap.x + defaults.tap_offset, tap.y + defaults.tap_offset);

        match kind {
            ShapeKind::Circle => {
                self.add_circle(at, defaults.circle_radius, &defaults.circle_color)
            }
            ShapeKind::Rectangle => {
                let [width, height] = defaults.rectangle_size;
                self.add_rectangle(
                    at,
                    width,
                    height,
                    defaults.rectangle_corner_radius,
                    &defaults.rectangle_color,
                )
            }
            ShapeKind::Line => {
                let [ax, ay] = defaults.line_anchor;
                self.add_line(
                    Pos2::new(ax, ay),
                    at,
                    &defaults.line_color,
                    defaults.line_width,
                )
            }
            ShapeKind::Star => {
                let [width, height] = defaults.star_size;
                self.add_star(at, width, height)
            }
            ShapeKind::Text => self.add_text(
                &defaults.text,
                at,
                &defaults.text_font,
                &defaults.text_color,
                defaults.text_size,
            ),
        }
    }

    /// Route one gesture event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Tap(point) => {
                self.tap(point);
            }
            InputEvent::DragStart(point) => {
                if self.recorder.drag_start(&mut self.scene, self.selection, point) {
                    let index = self.scene.strokes().len() - 1;
                    self.event_bus.emit(EditorEvent::StrokeStarted { index });
                }
            }
            InputEvent::DragUpdate(point) => {
                self.recorder
                    .drag_update(&mut self.scene, self.selection, point);
            }
            InputEvent::DragEnd => {
                let was_recording = self.recorder.is_recording();
                self.recorder.drag_end(&self.scene);
                if was_recording {
                    let index = self.scene.strokes().len().saturating_sub(1);
                    self.event_bus.emit(EditorEvent::StrokeCompleted { index });
                }
            }
        }
    }

    /// Select whatever lies under `point`.
    ///
    /// A tap on empty canvas leaves the current selection as it is.
    pub fn tap(&mut self, point: Pos2) -> Selection {
        let hit = hit_testing::resolve(&self.scene, point, self.config.touch_threshold);
        if hit.is_some() {
            self.set_selection(hit);
        }
        hit
    }

    pub fn select(&mut self, kind: ShapeKind, index: usize) -> SceneResult<()> {
        let selection = Selection::select(&self.scene, kind, index)?;
        self.set_selection(selection);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(Selection::None);
    }

    /// Apply `command` to the selected object. No-op when nothing is selected.
    pub fn apply(&mut self, command: Command) -> SceneResult<()> {
        if self.selection.is_none() {
            return Ok(());
        }

        match command.execute(&mut self.scene, self.selection, &self.config.transform) {
            Ok(selection) => {
                log::debug!("Applied {:?} to {:?}", command, self.selection);
                self.set_selection(selection);
                self.event_bus.emit(EditorEvent::CommandApplied { command });
                self.scene_changed();
                Ok(())
            }
            Err(err) => {
                log::error!("{:?} failed: {}", command, err);
                Err(err)
            }
        }
    }

    pub fn enlarge(&mut self) -> SceneResult<()> {
        self.apply(Command::Enlarge)
    }

    pub fn shrink(&mut self) -> SceneResult<()> {
        self.apply(Command::Shrink)
    }

    pub fn move_selected(&mut self, direction: Direction) -> SceneResult<()> {
        self.apply(Command::Move(direction))
    }

    pub fn delete_selected(&mut self) -> SceneResult<()> {
        self.apply(Command::Delete)
    }

    /// Remove every object of `kind`. A selection into that kind is dropped.
    pub fn clear_kind(&mut self, kind: ShapeKind) {
        self.scene.clear(kind);
        if self.selection.kind() == Some(kind) {
            self.set_selection(Selection::None);
        }
        self.scene_changed();
    }

    /// Empty the editable scene and drop the selection.
    pub fn clear_all(&mut self) {
        self.scene.clear_all();
        self.recorder.reset();
        self.set_selection(Selection::None);
        self.event_bus.emit(EditorEvent::SceneCleared);
    }

    fn report_failure<T>(&self, action: &str, result: PersistenceResult<T>) -> PersistenceResult<T> {
        if let Err(err) = &result {
            log::error!("Failed to {}: {}", action, err);
            self.event_bus.emit(EditorEvent::PersistenceFailed {
                message: err.to_string(),
            });
        }
        result
    }

    /// Save the scene.
    ///
    /// A scene loaded with [`open`](Self::open) is written back over its
    /// drawing and stays on the canvas. Anything else goes to a freshly picked
    /// name, after which the session starts over with an empty scene. On
    /// failure the scene is left exactly as it was.
    pub fn save<S: KeyValueStore>(
        &mut self,
        repo: &mut DrawingRepository<S>,
    ) -> PersistenceResult<SaveReport> {
        if self.scene.is_empty() {
            log::info!("Canvas is empty, nothing to save");
            self.event_bus.emit(EditorEvent::NothingToSave);
            return Ok(SaveReport::NothingToSave);
        }

        let (key, outcome) = match self.target.clone() {
            Some(key) => {
                let outcome =
                    self.report_failure("save drawing", repo.replace(&key, &self.scene))?;
                (key, outcome)
            }
            None => {
                let taken: HashSet<String> =
                    self.report_failure("list drawings", repo.list())?.into_iter().collect();
                let key = self
                    .names
                    .choose(&mut rand::thread_rng(), |name| taken.contains(name));
                let outcome = self.report_failure("save drawing", repo.save(&key, &self.scene))?;

                self.scene.clear_all();
                self.recorder.reset();
                self.set_selection(Selection::None);
                (key, outcome)
            }
        };

        self.event_bus.emit(EditorEvent::DrawingSaved {
            key: key.clone(),
            outcome,
        });
        Ok(SaveReport::Saved { key, outcome })
    }

    /// Load a stored drawing into the scene, replacing everything on the
    /// canvas in one step. The next save writes back to `key`. Nothing
    /// changes if the drawing cannot be loaded.
    pub fn open<S: KeyValueStore>(
        &mut self,
        repo: &DrawingRepository<S>,
        key: &str,
    ) -> PersistenceResult<()> {
        let loaded = self.report_failure("open drawing", repo.load(key))?;

        self.scene = loaded;
        self.target = Some(key.to_owned());
        self.recorder.reset();
        self.set_selection(Selection::None);

        log::info!("Opened drawing {}", key);
        self.event_bus.emit(EditorEvent::DrawingOpened {
            key: key.to_owned(),
        });
        Ok(())
    }

    /// Put the opened drawing away and start over with an empty scene;
    /// the next save picks a new name.
    pub fn close_drawing(&mut self) {
        if self.target.take().is_some() {
            self.scene.clear_all();
            self.recorder.reset();
            self.set_selection(Selection::None);
            self.event_bus.emit(EditorEvent::DrawingClosed);
        }
    }

    pub fn delete_drawing<S: KeyValueStore>(
        &mut self,
        repo: &mut DrawingRepository<S>,
        key: &str,
    ) -> PersistenceResult<()> {
        self.report_failure("delete drawing", repo.delete(key))?;
        if self.target.as_deref() == Some(key) {
            self.close_drawing();
        }
        self.event_bus.emit(EditorEvent::DrawingDeleted {
            key: key.to_owned(),
        });
        Ok(())
    }
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
