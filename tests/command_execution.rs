use egui::Pos2;
use touch_canvas::config::TransformConfig;
use touch_canvas::element::{Circle, Line, Rectangle, ShapeKind, Star, TextLabel};
use touch_canvas::{Command, Direction, Scene, SceneError, Selection};

// Helper to create a scene with one object of every kind
fn create_test_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Circle::new(Pos2::new(10.0, 10.0), 5.0, "red"));
    scene.add(Rectangle::new(Pos2::new(20.0, 20.0), 50.0, 30.0, 10.0, "green"));
    scene.add(Line::new(Pos2::new(80.0, 80.0), Pos2::new(120.0, 100.0), "lightblue", 4.0));
    scene.add(Star::new(Pos2::new(200.0, 200.0), 100.0, 100.0));
    scene.add(TextLabel::new("Text", Pos2::new(300.0, 20.0), "serif", "black", 14.0));
    scene
}

fn selected(kind: ShapeKind) -> Selection {
    Selection::Shape { kind, index: 0 }
}

#[test]
fn test_enlarge_each_kind() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();

    for kind in [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Line,
        ShapeKind::Star,
        ShapeKind::Text,
    ] {
        let after = Command::Enlarge
            .execute(&mut scene, selected(kind), &config)
            .unwrap();
        assert_eq!(after, selected(kind));
    }

    assert!((scene.get::<Circle>(0).unwrap().radius - 6.0).abs() < 1e-5);

    let rect = scene.get::<Rectangle>(0).unwrap();
    assert!((rect.width - 60.0).abs() < 1e-4);
    assert!((rect.height - 36.0).abs() < 1e-4);
    assert_eq!(rect.origin, Pos2::new(20.0, 20.0));

    let line = scene.get::<Line>(0).unwrap();
    assert!((line.p1.x - 96.0).abs() < 1e-4);
    assert!((line.p2.y - 120.0).abs() < 1e-4);
    assert!((line.stroke_width - 4.8).abs() < 1e-5);

    let star = scene.get::<Star>(0).unwrap();
    assert!((star.width - 120.0).abs() < 1e-4);

    let text = scene.get::<TextLabel>(0).unwrap();
    assert!((text.font_size - 16.8).abs() < 1e-4);
}

#[test]
fn test_shrink_after_enlarge_is_096() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();
    let selection = selected(ShapeKind::Circle);
    let r = scene.get::<Circle>(0).unwrap().radius;

    Command::Enlarge.execute(&mut scene, selection, &config).unwrap();
    Command::Shrink.execute(&mut scene, selection, &config).unwrap();

    // 1.2 * 0.8 is not an exact inverse
    let composed = scene.get::<Circle>(0).unwrap().radius;
    assert!((composed / r - 0.96).abs() < 1e-5);
    assert!((composed - r).abs() > 0.1);
}

#[test]
fn test_move_round_trip_is_exact() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();
    let selection = selected(ShapeKind::Circle);
    let original = scene.get::<Circle>(0).unwrap().center;

    Command::Move(Direction::Right)
        .execute(&mut scene, selection, &config)
        .unwrap();
    assert_eq!(scene.get::<Circle>(0).unwrap().center, Pos2::new(20.0, 10.0));

    Command::Move(Direction::Left)
        .execute(&mut scene, selection, &config)
        .unwrap();
    assert_eq!(scene.get::<Circle>(0).unwrap().center, original);
}

#[test]
fn test_move_up_decreases_y() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();

    Command::Move(Direction::Up)
        .execute(&mut scene, selected(ShapeKind::Text), &config)
        .unwrap();
    assert_eq!(scene.get::<TextLabel>(0).unwrap().origin, Pos2::new(300.0, 10.0));

    Command::Move(Direction::Down)
        .execute(&mut scene, selected(ShapeKind::Line), &config)
        .unwrap();
    let line = scene.get::<Line>(0).unwrap();
    assert_eq!(line.p1, Pos2::new(80.0, 90.0));
    assert_eq!(line.p2, Pos2::new(120.0, 110.0));
}

#[test]
fn test_delete_resets_selection() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();

    let after = Command::Delete
        .execute(&mut scene, selected(ShapeKind::Star), &config)
        .unwrap();
    assert_eq!(after, Selection::None);
    assert_eq!(scene.count(ShapeKind::Star), 0);
    assert_eq!(scene.count(ShapeKind::Circle), 1);
}

#[test]
fn test_commands_without_selection_are_noops() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();
    let before = scene.clone();

    for command in [
        Command::Enlarge,
        Command::Shrink,
        Command::Move(Direction::Left),
        Command::Delete,
    ] {
        let after = command.execute(&mut scene, Selection::None, &config).unwrap();
        assert_eq!(after, Selection::None);
    }
    assert_eq!(scene, before);
}

#[test]
fn test_stale_selection_fails_without_mutation() {
    let config = TransformConfig::default();
    let mut scene = create_test_scene();
    let before = scene.clone();
    let stale = Selection::Shape {
        kind: ShapeKind::Circle,
        index: 3,
    };

    let err = Command::Enlarge.execute(&mut scene, stale, &config).unwrap_err();
    assert!(matches!(err, SceneError::IndexOutOfRange { index: 3, .. }));
    assert!(Command::Delete.execute(&mut scene, stale, &config).is_err());
    assert_eq!(scene, before);
}

#[test]
fn test_custom_step_and_factors() {
    let config = TransformConfig {
        enlarge_factor: 2.0,
        shrink_factor: 0.5,
        move_step: 1.0,
    };
    let mut scene = create_test_scene();
    let selection = selected(ShapeKind::Circle);

    Command::Enlarge.execute(&mut scene, selection, &config).unwrap();
    Command::Move(Direction::Down)
        .execute(&mut scene, selection, &config)
        .unwrap();

    let circle = scene.get::<Circle>(0).unwrap();
    assert_eq!(circle.radius, 10.0);
    assert_eq!(circle.center, Pos2::new(10.0, 11.0));
}

#[test]
fn test_labels() {
    assert_eq!(Command::Enlarge.label(), "Enlarge");
    assert_eq!(Command::Move(Direction::Up).label(), "Up");
    assert_eq!(Command::Delete.label(), "Delete");
}
