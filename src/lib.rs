#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod image;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod selection;
pub mod state;
pub mod storage;
pub mod tools;

pub use app::{ActionError, AppSettings, PaintApp};
pub use command::{Command, Direction};
pub use config::EditorConfig;
pub use element::{Drawable, ShapeKind};
pub use error::{SceneError, SceneResult};
pub use input::{InputEvent, InputHandler};
pub use renderer::CanvasRenderer;
pub use scene::Scene;
pub use selection::Selection;
pub use state::{DrawingRepository, EditorContext, PersistenceError, SaveOutcome, SaveReport};
pub use storage::{DirectoryStore, KeyValueStore, MemoryStore};
pub use tools::StrokeRecorder;
