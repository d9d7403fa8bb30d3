use egui::{Pos2, Vec2};

use super::{ColorRef, Drawable, ShapeKind};
use crate::geometry;

/// Straight line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub p1: Pos2,
    pub p2: Pos2,
    pub color: ColorRef,
    pub stroke_width: f32,
}

impl Line {
    pub fn new(p1: Pos2, p2: Pos2, color: impl Into<ColorRef>, stroke_width: f32) -> Self {
        Self {
            p1,
            p2,
            color: color.into(),
            stroke_width,
        }
    }

    pub fn length(&self) -> f32 {
        self.p1.distance(self.p2)
    }
}

impl Drawable for Line {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn hit_test(&self, point: Pos2, touch_threshold: f32) -> bool {
        geometry::point_to_segment_distance(point, self.p1, self.p2) <= touch_threshold
    }

    /// Endpoints scale about the canvas origin, not the segment midpoint,
    /// so the line drifts toward (0, 0) as it shrinks.
    fn scale(&mut self, factor: f32) {
        self.stroke_width *= factor;
        self.p1 = Pos2::new(self.p1.x * factor, self.p1.y * factor);
        self.p2 = Pos2::new(self.p2.x * factor, self.p2.y * factor);
    }

    fn translate(&mut self, delta: Vec2) {
        self.p1 += delta;
        self.p2 += delta;
    }
}
