use egui::{Pos2, Rect, Vec2};

use super::{ColorRef, Drawable, ShapeKind};
use crate::geometry;

/// Rounded rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub origin: Pos2,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub color: ColorRef,
}

impl Rectangle {
    pub fn new(
        origin: Pos2,
        width: f32,
        height: f32,
        corner_radius: f32,
        color: impl Into<ColorRef>,
    ) -> Self {
        Self {
            origin,
            width,
            height,
            corner_radius,
            color: color.into(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(self.width, self.height))
    }
}

impl Drawable for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    // The rounded corners are not carved out of the hit area.
    fn hit_test(&self, point: Pos2, _touch_threshold: f32) -> bool {
        geometry::point_in_box(point, self.origin, self.width, self.height)
    }

    fn scale(&mut self, factor: f32) {
        self.width *= factor;
        self.height *= factor;
    }

    fn translate(&mut self, delta: Vec2) {
        self.origin += delta;
    }
}
