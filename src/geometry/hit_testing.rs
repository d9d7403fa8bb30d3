use egui::Pos2;
use log::debug;

use crate::element::HIT_TEST_PRIORITY;
use crate::scene::Scene;
use crate::selection::Selection;

/// Default tolerance around lines, in canvas units
pub const LINE_TOUCH_THRESHOLD: f32 = 5.0;

/// Find the object under `point`.
///
/// Kinds are tried in [`HIT_TEST_PRIORITY`] order, and within a kind the
/// first match in insertion order wins. That is the bottom-most object of the
/// kind, not the one drawn on top.
pub fn resolve(scene: &Scene, point: Pos2, touch_threshold: f32) -> Selection {
    for kind in HIT_TEST_PRIORITY {
        let hit = scene
            .drawables(kind)
            .position(|drawable| drawable.hit_test(point, touch_threshold));

        if let Some(index) = hit {
            debug!("Touch at {:?} hit {} {}", point, kind, index);
            return Selection::Shape { kind, index };
        }
    }

    Selection::None
}
