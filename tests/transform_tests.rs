use gpui::Point;
use riemann_chart::data_types::AxisFormat;
use riemann_chart::scales::ChartScale;
use riemann_chart::transform::{Axis, PixelRect, PlotTransform};

fn riemann_area() -> PlotTransform {
    PlotTransform::new(PixelRect::new(40.0, 40.0, 520.0, 320.0), (0.0, 3.0), (0.0, 9.0))
}

#[test]
fn test_plot_transform() {
    let transform = riemann_area();

    assert_eq!(transform.map_x(0.0), 40.0);
    assert!((transform.map_x(3.0) - 560.0).abs() < 1e-9);
    assert_eq!(transform.map_y(0.0), 360.0);
    assert!((transform.map_y(9.0) - 40.0).abs() < 1e-9);
    assert_eq!(transform.map(0.0, Axis::Y), transform.map_y(0.0));

    // Screen -> Data
    let center = transform.data_to_screen(Point::new(1.5, 4.5));
    assert!((center.x - 300.0).abs() < 1e-9);
    assert!((center.y - 200.0).abs() < 1e-9);
    let restored = transform.screen_to_data(center);
    assert!((restored.x - 1.5).abs() < 1e-9);
    assert!((restored.y - 4.5).abs() < 1e-9);
}

#[test]
fn test_transform_lengths() {
    let transform = riemann_area();
    assert!((transform.length(0.75, Axis::X) - 130.0).abs() < 1e-9);
    assert!((transform.length(2.25, Axis::Y) - 80.0).abs() < 1e-9);
}

#[test]
fn test_values_outside_domain_are_not_clamped() {
    let transform = riemann_area();
    assert!(transform.map_x(4.0) > 560.0);
    assert!(transform.map_y(-1.0) > 360.0);
}

#[test]
fn test_degenerate_domain() {
    let transform = PlotTransform::new(PixelRect::new(0.0, 0.0, 100.0, 100.0), (5.0, 5.0), (0.0, 1.0));
    assert_eq!(transform.x_scale, 0.0);
    assert_eq!(transform.map_x(123.0), 0.0);
    assert_eq!(transform.invert_x(50.0), 5.0);
}

#[test]
fn test_pixel_rect_contains_shares_edges_once() {
    let left = PixelRect::new(0.0, 0.0, 10.0, 10.0);
    let right = PixelRect::new(10.0, 0.0, 10.0, 10.0);
    let edge = Point::new(10.0, 5.0);
    assert!(!left.contains(edge));
    assert!(right.contains(edge));
    assert!(left.contains(Point::new(0.0, 0.0)));
    assert!(!left.contains(Point::new(5.0, 10.0)));
}

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));
    assert!((scale.map(0.0) - 0.0).abs() < 1e-9);
    assert!((scale.map(50.0) - 250.0).abs() < 1e-9);
    assert!((scale.map(100.0) - 500.0).abs() < 1e-9);
    assert!(!scale.ticks(5).is_empty());
}

#[test]
fn test_scale_zero_domain() {
    let scale = ChartScale::new_linear((10.0, 10.0), (0.0, 100.0));
    let mapped = scale.map(10.0);
    assert!(mapped.is_finite());
    assert!((0.0..=100.0).contains(&mapped));
    assert_eq!(scale.domain(), (9.5, 10.5));
}

#[test]
fn test_nice_max_covers_domain() {
    let scale = ChartScale::new_linear((0.0, 15.9), (320.0, 0.0));
    let max = scale.nice_max(5);
    assert!(max >= 15.9);
    assert!(max < 2.0 * 15.9);
}

#[test]
fn test_axis_format() {
    assert_eq!(AxisFormat::Fixed(1).format(0.5), "0.5");
    assert_eq!(AxisFormat::Fixed(3).format(1.4), "1.400");
    assert_eq!(AxisFormat::Auto.format(5.0), "5");
    assert_eq!(AxisFormat::Auto.format(2.25), "2.25");
    assert_eq!(AxisFormat::Auto.format(12345.6), "12346");
    assert_eq!(AxisFormat::Auto.format(0.0005), "0.0005");
}

#[test]
fn test_axis_format_follows_tick_step() {
    use riemann_chart::data_types::Tick;
    let ticks = |step: f64| -> Vec<Tick> {
        (0..3)
            .map(|i| Tick {
                value: step * i as f64,
                pixel_x: 0.0,
                pixel_y: 0.0,
            })
            .collect()
    };
    assert_eq!(AxisFormat::for_ticks(&ticks(0.5)), AxisFormat::Fixed(1));
    assert_eq!(AxisFormat::for_ticks(&ticks(2.0)), AxisFormat::Fixed(1));
    assert_eq!(AxisFormat::for_ticks(&ticks(0.25)), AxisFormat::Fixed(2));
    assert_eq!(AxisFormat::for_ticks(&ticks(2.25 / 10.0)), AxisFormat::Fixed(3));
    assert_eq!(AxisFormat::for_ticks(&ticks(1.7 / 3.0)), AxisFormat::Fixed(4));
    assert_eq!(AxisFormat::for_ticks(&[]), AxisFormat::Fixed(1));
}
