use egui::{Pos2, Vec2};

mod circle;
mod common;
mod line;
mod rectangle;
mod star;
pub(crate) mod stroke;
mod text;

pub use circle::Circle;
pub use common::{ColorRef, FontRef};
pub use line::Line;
pub use rectangle::Rectangle;
pub use star::Star;
pub use stroke::{ParsePathCommandError, PathCommand, Stroke};
pub use text::TextLabel;

/// The closed set of selectable object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
    Star,
    Text,
}

/// Order in which kinds are tried when resolving a touch.
pub const HIT_TEST_PRIORITY: [ShapeKind; 5] = [
    ShapeKind::Circle,
    ShapeKind::Rectangle,
    ShapeKind::Line,
    ShapeKind::Star,
    ShapeKind::Text,
];

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Line => "line",
            ShapeKind::Star => "star",
            ShapeKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability shared by every selectable object on the canvas.
///
/// The hit-test resolver and the transform engine only talk to objects
/// through this trait, so adding a kind means implementing it once.
pub trait Drawable {
    /// Which collection this object lives in
    fn kind(&self) -> ShapeKind;

    /// Whether a touch at `point` lands on the object.
    ///
    /// `touch_threshold` is the tolerance for zero-area objects (lines);
    /// area objects ignore it.
    fn hit_test(&self, point: Pos2, touch_threshold: f32) -> bool;

    /// Multiply the kind's magnitude fields by `factor`
    fn scale(&mut self, factor: f32);

    /// Rigidly move the object by `delta`
    fn translate(&mut self, delta: Vec2);
}
