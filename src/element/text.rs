use egui::{Pos2, Vec2};

use super::{ColorRef, Drawable, FontRef, ShapeKind};
use crate::geometry;

/// Single-line text label anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub origin: Pos2,
    pub font: FontRef,
    pub color: ColorRef,
    pub font_size: f32,
}

impl TextLabel {
    pub fn new(
        text: impl Into<String>,
        origin: Pos2,
        font: impl Into<FontRef>,
        color: impl Into<ColorRef>,
        font_size: f32,
    ) -> Self {
        Self {
            text: text.into(),
            origin,
            font: font.into(),
            color: color.into(),
            font_size,
        }
    }

    /// Approximate extent used for hit testing
    pub fn approximate_size(&self) -> Vec2 {
        let (width, height) = geometry::text_box_size(&self.text, self.font_size);
        Vec2::new(width, height)
    }
}

impl Drawable for TextLabel {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn hit_test(&self, point: Pos2, _touch_threshold: f32) -> bool {
        geometry::point_in_text_box(point, self.origin, &self.text, self.font_size)
    }

    fn scale(&mut self, factor: f32) {
        self.font_size *= factor;
    }

    fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }
}
