// Scene composition for the Riemann chart

use crate::axis_renderer::AxisRenderer;
use crate::config::ChartConfig;
use crate::data_types::{AxisEdge, AxisFormat};
use crate::geometry::RiemannGeometry;
use crate::riemann::Rectangle;
use crate::scene::{DrawCommand, Scene, StrokeStyle, TextAnchor};
use crate::selection::{label_position, Selection};
use crate::theme::ChartTheme;
use crate::transform::PixelRect;
use gpui::Point;

/// Composes axes, rectangles, the curve and the selection overlay.
///
/// Paint order matters for hit-testing: rectangles are the only click targets,
/// and the overlay drawn on top of them carries no hit ids.
pub fn build_riemann_scene(
    geometry: &RiemannGeometry,
    selection: &Selection,
    config: &ChartConfig,
    theme: &ChartTheme,
) -> Scene {
    let canvas = &config.canvas;
    let transform = &geometry.transform;
    let mut scene = Scene::new(canvas.width, canvas.height);

    scene.push(DrawCommand::filled_rect(
        PixelRect::new(0.0, 0.0, canvas.width, canvas.height),
        theme.background,
    ));

    scene.push(AxisRenderer::axis(
        AxisEdge::Bottom,
        transform.map_y(0.0),
        &transform.plot_area,
        &geometry.x_ticks,
        &AxisFormat::for_ticks(&geometry.x_ticks),
        theme,
    ));
    scene.push(AxisRenderer::axis(
        AxisEdge::Left,
        transform.map_x(0.0),
        &transform.plot_area,
        &geometry.y_ticks,
        &AxisFormat::for_ticks(&geometry.y_ticks),
        theme,
    ));

    let selected = selection.resolve(&geometry.sum.rectangles);
    let rects = geometry
        .sum
        .rectangles
        .iter()
        .map(|rect| rectangle_command(rect, selected.map(|s| s.index) == Some(rect.index), theme))
        .collect();
    scene.push(DrawCommand::group("rectangles", rects));

    scene.push(DrawCommand::group(
        "curve",
        vec![DrawCommand::Path {
            points: geometry.curve.clone(),
            stroke: StrokeStyle::solid(theme.curve, theme.curve_width),
        }],
    ));

    if let Some(rect) = selected {
        scene.push(selection_overlay(rect, config, theme));
    }

    scene
}

fn rectangle_command(rect: &Rectangle, selected: bool, theme: &ChartTheme) -> DrawCommand {
    let (fill, stroke) = if selected {
        (theme.selected_fill, theme.selected_stroke)
    } else {
        (theme.rectangle_fill, theme.rectangle_stroke)
    };
    DrawCommand::Rect {
        bounds: PixelRect::new(rect.pixel_x, rect.pixel_y, rect.pixel_width, rect.pixel_height),
        fill: Some(fill),
        stroke: Some(StrokeStyle::solid(stroke, if selected { 2.0 } else { 1.0 })),
        corner_radius: 0.0,
        hit_id: Some(rect.index),
    }
}

/// Width guide along the bottom edge, height guide along the left edge, and the
/// read-out box.
fn selection_overlay(rect: &Rectangle, config: &ChartConfig, theme: &ChartTheme) -> DrawCommand {
    let bottom = rect.pixel_y + rect.pixel_height;
    let mut children = vec![
        DrawCommand::line(
            Point::new(rect.pixel_x, bottom),
            Point::new(rect.pixel_x + rect.pixel_width, bottom),
            StrokeStyle::solid(theme.width_guide, 3.0),
        ),
        DrawCommand::line(
            Point::new(rect.pixel_x, rect.pixel_y),
            Point::new(rect.pixel_x, bottom),
            StrokeStyle::solid(theme.height_guide, 3.0),
        ),
    ];

    let label = label_position(rect, config);
    children.push(DrawCommand::Rect {
        bounds: label.bounds,
        fill: Some(theme.label_background),
        stroke: Some(StrokeStyle::solid(theme.label_border, 1.0)),
        corner_radius: 4.0,
        hit_id: None,
    });
    let line_height = label.bounds.height / label.lines.len() as f64;
    for (i, line) in label.lines.iter().enumerate() {
        children.push(DrawCommand::text(
            Point::new(
                label.bounds.center().x,
                label.bounds.y + line_height * (i as f64 + 0.5),
            ),
            line.clone(),
            TextAnchor::Middle,
            theme.label_text,
            theme.label_text_size,
        ));
    }

    DrawCommand::group("selection", children)
}
