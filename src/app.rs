use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use egui::{Button, Pos2, Sense};
use thiserror::Error;

use crate::command::Direction;
use crate::config::EditorConfig;
use crate::element::ShapeKind;
use crate::error::SceneError;
use crate::event::{EditorEvent, EventHandler};
use crate::input::InputHandler;
use crate::renderer::CanvasRenderer;
use crate::state::{DrawingRepository, EditorContext, PersistenceError};
use crate::storage::{DirectoryStore, KeyValueStore, MemoryStore};

const STATUS_LINES: usize = 6;

/// Settings restored between runs.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct AppSettings {
    /// Directory holding one JSON file per drawing
    pub store_dir: PathBuf,
    /// Editor config file; overrides `config` when present
    pub config_file: PathBuf,
    pub config: EditorConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from("drawings"),
            config_file: PathBuf::from("touch_canvas.json"),
            config: EditorConfig::default(),
        }
    }
}

impl AppSettings {
    /// The editor config for this run.
    ///
    /// A readable `config_file` wins. Otherwise the stored `config` is used,
    /// or the defaults if it does not validate. A missing file is written out
    /// from the result so there is something to edit next time.
    pub fn editor_config(&self) -> EditorConfig {
        let stored = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                log::warn!("Ignoring stored config: {}", err);
                EditorConfig::default()
            }
        };

        if !self.config_file.exists() {
            if let Err(err) = stored.save(&self.config_file) {
                log::warn!("Cannot write {}: {}", self.config_file.display(), err);
            }
            return stored;
        }

        match EditorConfig::load(&self.config_file) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring {}: {}", self.config_file.display(), err);
                stored
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Recent editor events, newest last
#[derive(Debug, Clone, Default)]
struct StatusFeed(Rc<RefCell<VecDeque<String>>>);

impl StatusFeed {
    fn lines(&self) -> Vec<String> {
        self.0.borrow().iter().cloned().collect()
    }
}

impl EventHandler for StatusFeed {
    fn handle_event(&mut self, event: &EditorEvent) {
        let line = match event {
            EditorEvent::DrawingSaved { key, outcome } => format!("Saved {key} ({outcome:?})"),
            EditorEvent::DrawingOpened { key } => format!("Opened {key}"),
            EditorEvent::DrawingClosed => "Closed drawing".to_owned(),
            EditorEvent::DrawingDeleted { key } => format!("Deleted {key}"),
            EditorEvent::NothingToSave => "Nothing to save".to_owned(),
            EditorEvent::PersistenceFailed { message } => format!("Error: {message}"),
            EditorEvent::CommandApplied { command } => command.label().to_owned(),
            EditorEvent::SceneCleared => "Cleared".to_owned(),
            _ => return,
        };

        let mut lines = self.0.borrow_mut();
        lines.push_back(line);
        while lines.len() > STATUS_LINES {
            lines.pop_front();
        }
    }
}

/// Toolbar and list actions gathered during layout, applied afterwards.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    Place(ShapeKind),
    Enlarge,
    Shrink,
    Move(Direction),
    Delete,
    Save,
    ClearAll,
    Open(String),
    CloseDrawing,
    DeleteDrawing(String),
}

pub struct PaintApp {
    settings: AppSettings,
    editor: EditorContext,
    repository: DrawingRepository<Box<dyn KeyValueStore>>,
    drawings: Vec<String>,
    input: InputHandler,
    renderer: CanvasRenderer,
    status: StatusFeed,
    /// Last tapped canvas point; toolbar shapes are placed relative to it
    last_tap: Pos2,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: AppSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let config = settings.editor_config();

        let store: Box<dyn KeyValueStore> = match DirectoryStore::open(settings.store_dir.clone()) {
            Ok(store) => Box::new(store),
            Err(err) => {
                log::error!(
                    "Cannot open {}: {}; drawings will not outlive this session",
                    settings.store_dir.display(),
                    err
                );
                Box::new(MemoryStore::new())
            }
        };
        let repository = DrawingRepository::with_prefix(store, config.naming.prefix.clone());

        let editor = EditorContext::new(config);
        let status = StatusFeed::default();
        editor.event_bus().subscribe(Box::new(status.clone()));

        let mut app = Self {
            settings,
            editor,
            repository,
            drawings: Vec::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            renderer: CanvasRenderer::new(),
            status,
            last_tap: Pos2::new(50.0, 50.0),
        };
        app.refresh_drawings();
        app
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    fn refresh_drawings(&mut self) {
        match self.repository.list() {
            Ok(keys) => self.drawings = keys,
            Err(err) => log::error!("Failed to list drawings: {}", err),
        }
    }

    fn apply(&mut self, action: Action) {
        log::debug!("Toolbar action {:?}", action);
        if let Err(err) = self.run(action) {
            log::error!("Action failed: {}", err);
        }
    }

    fn run(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Place(kind) => {
                self.editor.place(kind, self.last_tap);
            }
            Action::Enlarge => self.editor.enlarge()?,
            Action::Shrink => self.editor.shrink()?,
            Action::Move(direction) => self.editor.move_selected(direction)?,
            Action::Delete => self.editor.delete_selected()?,
            Action::ClearAll => self.editor.clear_all(),
            Action::CloseDrawing => self.editor.close_drawing(),
            Action::Save => {
                let saved = self.editor.save(&mut self.repository);
                self.refresh_drawings();
                saved?;
            }
            Action::Open(key) => self.editor.open(&self.repository, &key)?,
            Action::DeleteDrawing(key) => {
                let deleted = self.editor.delete_drawing(&mut self.repository, &key);
                self.refresh_drawings();
                deleted?;
            }
        }
        Ok(())
    }

    fn toolbar(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.horizontal_wrapped(|ui| {
            for (label, kind) in [
                ("Circle", ShapeKind::Circle),
                ("Rectangle", ShapeKind::Rectangle),
                ("Line", ShapeKind::Line),
                ("Star", ShapeKind::Star),
                ("Text", ShapeKind::Text),
            ] {
                if ui.button(label).clicked() {
                    actions.push(Action::Place(kind));
                }
            }

            ui.separator();

            let selected = self.editor.selection().is_some();
            let buttons = [
                ("Enlarge", Action::Enlarge),
                ("Shrink", Action::Shrink),
                ("Up", Action::Move(Direction::Up)),
                ("Down", Action::Move(Direction::Down)),
                ("Left", Action::Move(Direction::Left)),
                ("Right", Action::Move(Direction::Right)),
                ("Delete", Action::Delete),
            ];
            for (label, action) in buttons {
                if ui.add_enabled(selected, Button::new(label)).clicked() {
                    actions.push(action);
                }
            }

            ui.separator();

            if ui.button("Save").clicked() {
                actions.push(Action::Save);
            }
            if ui.button("Clear All").clicked() {
                actions.push(Action::ClearAll);
            }
        });
    }

    fn drawing_list(&self, ui: &mut egui::Ui, actions: &mut Vec<Action>) {
        ui.heading("Drawings");

        if let Some(target) = self.editor.target() {
            ui.horizontal(|ui| {
                ui.label(format!("Editing {target}"));
                if ui.small_button("Close").clicked() {
                    actions.push(Action::CloseDrawing);
                }
            });
        }

        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            if self.drawings.is_empty() {
                ui.weak("No saved drawings");
            }
            for key in &self.drawings {
                ui.horizontal(|ui| {
                    ui.label(key);
                    if ui.small_button("Open").clicked() {
                        actions.push(Action::Open(key.clone()));
                    }
                    if ui.small_button("Delete").clicked() {
                        actions.push(Action::DeleteDrawing(key.clone()));
                    }
                });
            }
        });

        ui.separator();
        for line in self.status.lines() {
            ui.small(line);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.config = self.editor.config().clone();
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ui, &mut actions);
        });

        egui::SidePanel::right("drawings")
            .resizable(true)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.drawing_list(ui, &mut actions);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

            for event in self.input.process_response(&response) {
                if let crate::input::InputEvent::Tap(point) = event {
                    self.last_tap = point;
                }
                self.editor.handle_input(event);
            }

            self.renderer.render(
                &painter,
                response.rect,
                self.editor.scene(),
                self.editor.selection(),
            );
        });

        for action in actions {
            self.apply(action);
        }
    }
}
