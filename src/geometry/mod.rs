//! Pure geometric predicates used by hit testing.

pub mod hit_testing;

use egui::Pos2;

/// Distance from `point` to the finite segment `[a, b]`.
///
/// The projection is clamped to the segment, so points beyond either end
/// measure to the nearest endpoint. A degenerate segment (`a == b`) is a
/// plain point-to-point distance.
pub fn point_to_segment_distance(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let segment = b - a;
    let to_point = point - a;

    let len_sq = segment.length_sq();
    if len_sq == 0.0 {
        return to_point.length();
    }

    let t = (to_point.dot(segment) / len_sq).clamp(0.0, 1.0);
    let projection = a + segment * t;
    (point - projection).length()
}

/// Inclusive circle containment.
pub fn point_in_circle(point: Pos2, center: Pos2, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// Inclusive axis-aligned box containment.
pub fn point_in_box(point: Pos2, origin: Pos2, width: f32, height: f32) -> bool {
    point.x >= origin.x
        && point.x <= origin.x + width
        && point.y >= origin.y
        && point.y <= origin.y + height
}

/// Approximate text extent: half an em per character, one em tall.
pub fn text_box_size(text: &str, font_size: f32) -> (f32, f32) {
    let width = text.chars().count() as f32 * font_size / 2.0;
    (width, font_size)
}

/// Containment test against the approximate box from [`text_box_size`].
/// Glyph metrics are not consulted.
pub fn point_in_text_box(point: Pos2, origin: Pos2, text: &str, font_size: f32) -> bool {
    let (width, height) = text_box_size(text, font_size);
    point_in_box(point, origin, width, height)
}
