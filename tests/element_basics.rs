use egui::{Pos2, Vec2};
use touch_canvas::element::{
    Circle, Drawable, Line, PathCommand, Rectangle, ShapeKind, Star, Stroke, TextLabel,
};
use touch_canvas::image::{ImageRef, STAR_IMAGE_KEY};

const THRESHOLD: f32 = 5.0;

#[test]
fn test_kinds() {
    let items: Vec<Box<dyn Drawable>> = vec![
        Box::new(Circle::new(Pos2::ZERO, 1.0, "red")),
        Box::new(Rectangle::new(Pos2::ZERO, 1.0, 1.0, 0.0, "red")),
        Box::new(Line::new(Pos2::ZERO, Pos2::new(1.0, 1.0), "red", 1.0)),
        Box::new(Star::new(Pos2::ZERO, 1.0, 1.0)),
        Box::new(TextLabel::new("a", Pos2::ZERO, "serif", "red", 12.0)),
    ];
    let kinds: Vec<ShapeKind> = items.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::Circle,
            ShapeKind::Rectangle,
            ShapeKind::Line,
            ShapeKind::Star,
            ShapeKind::Text
        ]
    );
    assert_eq!(ShapeKind::Text.to_string(), "text");
}

#[test]
fn test_rectangle_hit_ignores_corner_radius() {
    let rect = Rectangle::new(Pos2::new(0.0, 0.0), 50.0, 30.0, 10.0, "green");

    // The rounded-off corner still counts
    assert!(rect.hit_test(Pos2::new(0.5, 0.5), THRESHOLD));
    assert!(rect.hit_test(Pos2::new(50.0, 30.0), THRESHOLD));
    assert!(!rect.hit_test(Pos2::new(51.0, 15.0), THRESHOLD));
}

#[test]
fn test_line_hit_uses_threshold() {
    let line = Line::new(Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0), "black", 2.0);

    assert!(line.hit_test(Pos2::new(50.0, 5.0), THRESHOLD));
    assert!(!line.hit_test(Pos2::new(50.0, 5.5), THRESHOLD));
    assert!(line.hit_test(Pos2::new(50.0, 5.5), 6.0));
}

#[test]
fn test_circle_scale_and_translate() {
    let mut circle = Circle::new(Pos2::new(10.0, 10.0), 5.0, "red");

    circle.scale(2.0);
    assert_eq!(circle.radius, 10.0);
    assert_eq!(circle.center, Pos2::new(10.0, 10.0));

    circle.translate(Vec2::new(10.0, -10.0));
    assert_eq!(circle.center, Pos2::new(20.0, 0.0));
    assert_eq!(circle.radius, 10.0);
}

#[test]
fn test_rectangle_scale_keeps_origin() {
    let mut rect = Rectangle::new(Pos2::new(5.0, 5.0), 50.0, 30.0, 10.0, "green");
    rect.scale(0.5);

    assert_eq!(rect.origin, Pos2::new(5.0, 5.0));
    assert_eq!(rect.width, 25.0);
    assert_eq!(rect.height, 15.0);
    // Corner radius is not a scaled field
    assert_eq!(rect.corner_radius, 10.0);
}

#[test]
fn test_line_scale_about_canvas_origin() {
    let mut line = Line::new(Pos2::new(10.0, 20.0), Pos2::new(30.0, 40.0), "blue", 4.0);
    line.scale(0.5);

    // Both endpoints move toward (0, 0)
    assert_eq!(line.p1, Pos2::new(5.0, 10.0));
    assert_eq!(line.p2, Pos2::new(15.0, 20.0));
    assert_eq!(line.stroke_width, 2.0);
}

#[test]
fn test_line_translate_is_rigid() {
    let mut line = Line::new(Pos2::new(10.0, 20.0), Pos2::new(30.0, 40.0), "blue", 4.0);
    let length = line.length();

    line.translate(Vec2::new(0.0, 10.0));
    assert_eq!(line.p1, Pos2::new(10.0, 30.0));
    assert_eq!(line.p2, Pos2::new(30.0, 50.0));
    assert_eq!(line.stroke_width, 4.0);
    assert!((line.length() - length).abs() < 1e-5);
}

#[test]
fn test_star_and_text_scale() {
    let mut star = Star::new(Pos2::new(0.0, 0.0), 100.0, 50.0);
    star.scale(2.0);
    assert_eq!((star.width, star.height), (200.0, 100.0));
    assert_eq!(star.image.key(), STAR_IMAGE_KEY);

    let mut text = TextLabel::new("Text", Pos2::new(1.0, 1.0), "serif", "black", 14.0);
    text.scale(2.0);
    assert_eq!(text.font_size, 28.0);
    assert_eq!(text.approximate_size(), Vec2::new(56.0, 28.0));
}

#[test]
fn test_star_image_is_shared() {
    let a = ImageRef::star().resolve().unwrap();
    let b = ImageRef::star().resolve().unwrap();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.outline().len(), 10);

    assert!(ImageRef::from_key("unknown").resolve().is_none());
}

#[test]
fn test_path_command_text_form() {
    let cmd: PathCommand = "M 1.5 2".parse().unwrap();
    assert_eq!(cmd, PathCommand::MoveTo(Pos2::new(1.5, 2.0)));
    assert_eq!(PathCommand::LineTo(Pos2::new(3.0, 4.25)).to_string(), "L 3 4.25");

    assert!("Q 1 2".parse::<PathCommand>().is_err());
    assert!("M 1".parse::<PathCommand>().is_err());
    assert!("L 1 2 3".parse::<PathCommand>().is_err());
}

#[test]
fn test_stroke_polylines() {
    let stroke = Stroke::from_segments(
        vec![
            PathCommand::MoveTo(Pos2::new(0.0, 0.0)),
            PathCommand::LineTo(Pos2::new(1.0, 0.0)),
            PathCommand::MoveTo(Pos2::new(5.0, 5.0)),
            PathCommand::LineTo(Pos2::new(6.0, 5.0)),
            PathCommand::LineTo(Pos2::new(7.0, 5.0)),
        ],
        "red",
    );

    let lines = stroke.polylines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 2);
    assert_eq!(lines[1].len(), 3);
    assert_eq!(stroke.color().as_str(), "red");
}
