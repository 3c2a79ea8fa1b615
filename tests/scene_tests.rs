use gpui::Point;
use riemann_chart::rendering::build_riemann_scene;
use riemann_chart::scene::{dash_segments, StrokeStyle};
use riemann_chart::{
    compute_geometry, ChartConfig, ChartTheme, DrawCommand, GeometryCache, RiemannParams, Scene,
    Selection,
};
use std::sync::Arc;

fn scene_with(n: usize, width: f64, selected: Option<usize>) -> Scene {
    let config = ChartConfig::default();
    let geometry = compute_geometry(RiemannParams::new(n, width).unwrap(), &config);
    let mut selection = Selection::none();
    if let Some(index) = selected {
        selection.select(index);
    }
    build_riemann_scene(&geometry, &selection, &config, &ChartTheme::default())
}

fn texts(commands: &[DrawCommand]) -> Vec<String> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_scene_layers() {
    let scene = scene_with(4, 3.0, None);
    assert_eq!(scene.width, 600.0);
    assert_eq!(scene.height, 400.0);

    let rects = scene.find_group("rectangles").unwrap();
    assert_eq!(rects.len(), 4);
    assert!(rects.iter().all(|c| matches!(c, DrawCommand::Rect { hit_id: Some(_), .. })));

    let curve = scene.find_group("curve").unwrap();
    match &curve[0] {
        DrawCommand::Path { points, .. } => assert_eq!(points.len(), 201),
        other => panic!("expected a path, got {:?}", other),
    }

    let x_labels = texts(scene.find_group("x-axis").unwrap());
    assert_eq!(x_labels, vec!["0.0", "0.5", "1.0", "1.5", "2.0", "2.5", "3.0"]);
    let y_labels = texts(scene.find_group("y-axis").unwrap());
    assert_eq!(y_labels.len(), 11);
    assert_eq!(y_labels[3], "2.7");
    assert_eq!(y_labels[10], "9.0");

    assert!(scene.find_group("selection").is_none());
}

#[test]
fn test_hit_test_by_index() {
    let scene = scene_with(4, 3.0, None);
    assert_eq!(scene.hit_test(Point::new(495.0, 300.0)), Some(3));
    assert_eq!(scene.hit_test(Point::new(350.0, 300.0)), Some(2));
    // The first rectangle has zero height and cannot be clicked.
    assert_eq!(scene.hit_test(Point::new(100.0, 359.0)), None);
    assert_eq!(scene.hit_test(Point::new(10.0, 10.0)), None);
}

#[test]
fn test_selection_overlay() {
    let scene = scene_with(4, 3.0, Some(2));

    let overlay = scene.find_group("selection").unwrap();
    let lines = overlay
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 2);
    assert_eq!(
        texts(overlay),
        vec!["Width: 0.7500", "Height: 2.2500", "Area: 1.6875"]
    );

    // Width guide runs along the bottom edge of the selected rectangle.
    match &overlay[0] {
        DrawCommand::Line { from, to, .. } => {
            assert!((from.x - 300.0).abs() < 1e-9);
            assert!((to.x - 430.0).abs() < 1e-9);
            assert!((from.y - 360.0).abs() < 1e-9);
        }
        other => panic!("expected the width guide, got {:?}", other),
    }

    let rects = scene.find_group("rectangles").unwrap();
    let stroke_width = |c: &DrawCommand| match c {
        DrawCommand::Rect { stroke: Some(s), .. } => s.width,
        _ => 0.0,
    };
    assert_eq!(stroke_width(&rects[2]), 2.0);
    assert_eq!(stroke_width(&rects[1]), 1.0);

    // The label box is not a click target.
    assert_eq!(scene.hit_test(Point::new(350.0, 240.0)), None);
}

#[test]
fn test_stale_selection_draws_no_overlay() {
    let scene = scene_with(4, 3.0, Some(9));
    assert!(scene.find_group("selection").is_none());
}

#[test]
fn test_geometry_is_deterministic() {
    let config = ChartConfig::default();
    let params = RiemannParams::new(37, 6.0).unwrap();
    assert_eq!(compute_geometry(params, &config), compute_geometry(params, &config));
}

#[test]
fn test_geometry_cache_reuses_last_result() {
    let config = ChartConfig::default();
    let cache = GeometryCache::new();
    let params = RiemannParams::new(10, 3.0).unwrap();

    let first = cache.get_or_compute(params, &config);
    let second = cache.get_or_compute(params, &config);
    assert!(Arc::ptr_eq(&first, &second));

    let other = cache.get_or_compute(RiemannParams::new(11, 3.0).unwrap(), &config);
    assert_eq!(other.sum.rectangles.len(), 11);
    assert!(!Arc::ptr_eq(&first, &other));

    let mut wide = config.clone();
    wide.canvas.width = 800.0;
    let resized = cache.get_or_compute(RiemannParams::new(11, 3.0).unwrap(), &wide);
    assert!(!Arc::ptr_eq(&other, &resized));

    cache.invalidate();
    let again = cache.get_or_compute(RiemannParams::new(11, 3.0).unwrap(), &wide);
    assert!(!Arc::ptr_eq(&resized, &again));
    assert_eq!(*resized, *again);
}

#[test]
fn test_dash_segments() {
    let pieces = dash_segments(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 3.0, 3.0);
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0], (Point::new(0.0, 0.0), Point::new(3.0, 0.0)));
    assert_eq!(pieces[1], (Point::new(6.0, 0.0), Point::new(9.0, 0.0)));

    let solid = dash_segments(Point::new(0.0, 0.0), Point::new(0.0, 5.0), 0.0, 3.0);
    assert_eq!(solid.len(), 1);
}

#[test]
fn test_flatten_preserves_paint_order() {
    let theme = ChartTheme::default();
    let mut scene = Scene::new(100.0, 100.0);
    scene.push(DrawCommand::line(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        StrokeStyle::solid(theme.axis_line, 1.0),
    ));
    scene.push(DrawCommand::group(
        "outer",
        vec![DrawCommand::group(
            "inner",
            vec![DrawCommand::text(
                Point::new(5.0, 5.0),
                "label",
                Default::default(),
                theme.text,
                12.0,
            )],
        )],
    ));

    let flat = scene.flatten();
    assert_eq!(flat.len(), 2);
    assert!(matches!(flat[0], DrawCommand::Line { .. }));
    assert!(matches!(flat[1], DrawCommand::Text { .. }));
    assert_eq!(scene.find_group("inner").map(|c| c.len()), Some(1));
}

#[test]
fn test_fine_tick_steps_keep_their_precision() {
    let scene = scene_with(4, 1.5, None);

    let x_labels = texts(scene.find_group("x-axis").unwrap());
    assert_eq!(x_labels, vec!["0.0", "0.5", "1.0", "1.5"]);

    let y_labels = texts(scene.find_group("y-axis").unwrap());
    assert_eq!(y_labels.len(), 11);
    assert_eq!(y_labels[1], "0.225");
    assert_eq!(y_labels[2], "0.450");
    assert_eq!(y_labels[10], "2.250");
}
