use egui::{Pos2, Vec2};

use super::{ColorRef, Drawable, ShapeKind};
use crate::geometry;

/// Filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
    pub color: ColorRef,
}

impl Circle {
    pub fn new(center: Pos2, radius: f32, color: impl Into<ColorRef>) -> Self {
        Self {
            center,
            radius,
            color: color.into(),
        }
    }
}

impl Drawable for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn hit_test(&self, point: Pos2, _touch_threshold: f32) -> bool {
        geometry::point_in_circle(point, self.center, self.radius)
    }

    fn scale(&mut self, factor: f32) {
        self.radius *= factor;
    }

    fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }
}
