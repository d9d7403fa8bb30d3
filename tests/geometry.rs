use egui::Pos2;
use touch_canvas::geometry::{
    point_in_box, point_in_circle, point_in_text_box, point_to_segment_distance, text_box_size,
};

#[test]
fn test_point_in_circle_boundary() {
    let center = Pos2::new(10.0, 10.0);

    // The centre and the rim are inside
    assert!(point_in_circle(center, center, 5.0));
    assert!(point_in_circle(Pos2::new(15.0, 10.0), center, 5.0));

    // Just past the rim is outside
    assert!(!point_in_circle(Pos2::new(15.01, 10.0), center, 5.0));
    assert!(!point_in_circle(Pos2::new(10.0, 20.0), center, 5.0));
}

#[test]
fn test_segment_distance_perpendicular() {
    let a = Pos2::new(0.0, 0.0);
    let b = Pos2::new(100.0, 0.0);

    let d = point_to_segment_distance(Pos2::new(50.0, 3.0), a, b);
    assert!((d - 3.0).abs() < 1e-5);

    let d = point_to_segment_distance(Pos2::new(20.0, 0.0), a, b);
    assert!(d.abs() < 1e-5);
}

#[test]
fn test_segment_distance_clamps_to_endpoints() {
    let a = Pos2::new(0.0, 0.0);
    let b = Pos2::new(10.0, 0.0);

    // Beyond b: measured to b, not to the infinite line
    let d = point_to_segment_distance(Pos2::new(13.0, 4.0), a, b);
    assert!((d - 5.0).abs() < 1e-5);

    // Before a
    let d = point_to_segment_distance(Pos2::new(-6.0, 8.0), a, b);
    assert!((d - 10.0).abs() < 1e-5);
}

#[test]
fn test_segment_distance_degenerate() {
    let a = Pos2::new(4.0, 4.0);
    let p = Pos2::new(7.0, 8.0);

    let d = point_to_segment_distance(p, a, a);
    assert!((d - p.distance(a)).abs() < 1e-6);
    assert!((d - 5.0).abs() < 1e-5);
}

#[test]
fn test_point_in_box_inclusive() {
    let origin = Pos2::new(10.0, 20.0);

    assert!(point_in_box(origin, origin, 50.0, 30.0));
    assert!(point_in_box(Pos2::new(60.0, 50.0), origin, 50.0, 30.0));
    assert!(point_in_box(Pos2::new(35.0, 35.0), origin, 50.0, 30.0));

    assert!(!point_in_box(Pos2::new(60.5, 50.0), origin, 50.0, 30.0));
    assert!(!point_in_box(Pos2::new(9.5, 25.0), origin, 50.0, 30.0));
}

#[test]
fn test_text_box_approximation() {
    let (w, h) = text_box_size("Text", 14.0);
    assert_eq!(w, 28.0);
    assert_eq!(h, 14.0);

    // Characters, not bytes
    let (w, _) = text_box_size("héllo", 10.0);
    assert_eq!(w, 25.0);

    let origin = Pos2::new(100.0, 100.0);
    assert!(point_in_text_box(Pos2::new(128.0, 114.0), origin, "Text", 14.0));
    assert!(!point_in_text_box(Pos2::new(129.0, 105.0), origin, "Text", 14.0));
    assert!(!point_in_text_box(Pos2::new(110.0, 115.0), origin, "Text", 14.0));

    // Empty text has zero width: only the left edge is inside
    assert!(point_in_text_box(Pos2::new(100.0, 105.0), origin, "", 14.0));
    assert!(!point_in_text_box(Pos2::new(101.0, 105.0), origin, "", 14.0));
}
