use egui::{Pos2, Rect, Vec2};

use super::{Drawable, ShapeKind};
use crate::geometry;
use crate::image::ImageRef;

/// Star icon: a shared vector image stretched into a box
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub origin: Pos2,
    pub width: f32,
    pub height: f32,
    pub image: ImageRef,
}

impl Star {
    pub fn new(origin: Pos2, width: f32, height: f32) -> Self {
        Self::with_image(origin, width, height, ImageRef::star())
    }

    pub fn with_image(origin: Pos2, width: f32, height: f32, image: ImageRef) -> Self {
        Self {
            origin,
            width,
            height,
            image,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(self.width, self.height))
    }
}

impl Drawable for Star {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Star
    }

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
