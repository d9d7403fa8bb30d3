use egui::{Align2, Color32, FontFamily, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::element::{Circle, ColorRef, Line, Rectangle, ShapeKind, Star, TextLabel};
use crate::scene::{DrawList, Scene};
use crate::selection::Selection;

/// Width of freehand ink on screen
pub const INK_WIDTH: f32 = 5.0;
const HIGHLIGHT_MARGIN: f32 = 3.0;

/// Resolve a stored colour string. Unknown names fall back to gray.
pub fn parse_color(color: &ColorRef) -> Color32 {
    let value = color.as_str().trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color32::GRAY);
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::RED,
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::BLUE,
        "lightblue" => Color32::from_rgb(173, 216, 230),
        "yellow" => Color32::YELLOW,
        "gold" => Color32::GOLD,
        "orange" => Color32::from_rgb(255, 165, 0),
        "purple" => Color32::from_rgb(128, 0, 128),
        "pink" => Color32::from_rgb(255, 192, 203),
        "gray" | "grey" => Color32::GRAY,
        "transparent" => Color32::TRANSPARENT,
        other => {
            log::debug!("Unknown colour {:?}", other);
            Color32::GRAY
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Color32::from_rgb(rgb.next()??, rgb.next()??, rgb.next()??))
        }
        6 => Some(Color32::from_rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        8 => Some(Color32::from_rgba_unmultiplied(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
            channel(hex.get(6..8)?)?,
        )),
        _ => None,
    }
}

/// Paints draw lists onto an egui canvas.
///
/// Scene coordinates are canvas-local; `canvas.min` is added to every point.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
    pub background: Color32,
    pub highlight: Stroke,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            highlight: Stroke::new(2.0, Color32::from_rgb(255, 140, 0)),
        }
    }
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one frame: background, scene, selection outline.
    pub fn render(&self, painter: &Painter, canvas: Rect, scene: &Scene, selection: Selection) {
        painter.rect_filled(canvas, 0.0, self.background);
        painter.rect_stroke(canvas, 0.0, Stroke::new(1.0, Color32::BLACK));

        self.paint(painter, canvas, &scene.draw_list());
        self.paint_selection(painter, canvas, scene, selection);
    }

    pub fn paint(&self, painter: &Painter, canvas: Rect, list: &DrawList<'_>) {
        let offset = canvas.min.to_vec2();
        let color = parse_color;

        for circle in list.circles {
            painter.circle_filled(circle.center + offset, circle.radius, color(&circle.color));
        }

        for rect in list.rectangles {
            painter.rect_filled(
                rect.rect().translate(offset),
                rect.corner_radius,
                color(&rect.color),
            );
        }

        for line in list.lines {
            painter.line_segment(
                [line.p1 + offset, line.p2 + offset],
                Stroke::new(line.stroke_width, color(&line.color)),
            );
        }

        for star in list.stars {
            let target = star.rect().translate(offset);
            match star.image.resolve() {
                Some(image) => {
                    paint_star_shaped(painter, target.center(), image.fit_to(target), Color32::GOLD);
                }
                None => {
                    painter.rect_stroke(target, 0.0, Stroke::new(1.0, Color32::GRAY));
                }
            }
        }

        for text in list.texts {
            let family = if text.font.is_monospace() {
                FontFamily::Monospace
            } else {
                FontFamily::Proportional
            };
            painter.text(
                text.origin + offset,
                Align2::LEFT_TOP,
                &text.text,
                FontId::new(text.font_size, family),
                color(&text.color),
            );
        }

        for stroke in list.strokes {
            let ink = Stroke::new(INK_WIDTH, color(stroke.color()));
            for polyline in stroke.polylines() {
                if polyline.len() < 2 {
                    continue;
                }
                let points = polyline.into_iter().map(|p| p + offset).collect();
                painter.add(Shape::line(points, ink));
            }
        }
    }

    fn paint_selection(&self, painter: &Painter, canvas: Rect, scene: &Scene, selection: Selection) {
        let Selection::Shape { kind, index } = selection else {
            return;
        };
        let offset = canvas.min.to_vec2();
        let margin = Vec2::splat(HIGHLIGHT_MARGIN);

        let found = match kind {
            ShapeKind::Circle => {
                if let Ok(c) = scene.get::<Circle>(index) {
                    let radius = c.radius + HIGHLIGHT_MARGIN;
                    painter.circle_stroke(c.center + offset, radius, self.highlight);
                    true
                } else {
                    false
                }
            }
            ShapeKind::Rectangle => {
                if let Ok(r) = scene.get::<Rectangle>(index) {
                    let rect = r.rect().translate(offset).expand2(margin);
                    painter.rect_stroke(rect, 0.0, self.highlight);
                    true
                } else {
                    false
                }
            }
            ShapeKind::Line => {
                if let Ok(l) = scene.get::<Line>(index) {
                    let width = l.stroke_width + 2.0 * HIGHLIGHT_MARGIN;
                    painter.line_segment(
                        [l.p1 + offset, l.p2 + offset],
                        Stroke::new(width, self.highlight.color),
                    );
                    true
                } else {
                    false
                }
            }
            ShapeKind::Star => {
                if let Ok(s) = scene.get::<Star>(index) {
                    let rect = s.rect().translate(offset).expand2(margin);
                    painter.rect_stroke(rect, 0.0, self.highlight);
                    true
                } else {
                    false
                }
            }
            ShapeKind::Text => {
                if let Ok(t) = scene.get::<TextLabel>(index) {
                    let rect = Rect::from_min_size(t.origin + offset, t.approximate_size());
                    painter.rect_stroke(rect.expand2(margin), 0.0, self.highlight);
                    true
                } else {
                    false
                }
            }
        };

        if !found {
            log::warn!("Selection {:?} does not match the scene", selection);
        }
    }
}

/// Fill a polygon that is star-shaped around `center` as a triangle fan.
fn paint_star_shaped(painter: &Painter, center: Pos2, outline: Vec<Pos2>, fill: Color32) {
    let n = outline.len();
    for i in 0..n {
        let triangle = vec![center, outline[i], outline[(i + 1) % n]];
        painter.add(Shape::convex_polygon(triangle, fill, Stroke::NONE));
    }
}
