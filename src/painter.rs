//! GPUI backend for [`Scene`].

use crate::scene::{dash_segments, DrawCommand, Scene, StrokeStyle, TextAnchor};
use crate::transform::PixelRect;
use crate::utils::to_window;
use gpui::{
    font, point, px, quad, transparent_black, App, BorderStyle, Bounds, Corners, Edges, Hsla,
    PathBuilder, Pixels, Point, TextRun, Window,
};

/// Paints `scene` with its top-left corner at `origin`.
pub fn paint_scene(scene: &Scene, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    for command in &scene.commands {
        paint_command(command, origin, window, cx);
    }
}

fn paint_command(command: &DrawCommand, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    match command {
        DrawCommand::Line { from, to, stroke } => {
            paint_segments(window, origin, &[(*from, *to)], *stroke);
        }
        DrawCommand::Path { points, stroke } => {
            if points.len() < 2 {
                return;
            }
            if stroke.dash.is_some() {
                let segments: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
                paint_segments(window, origin, &segments, *stroke);
                return;
            }
            let mut builder = PathBuilder::stroke(px(stroke.width));
            builder.move_to(to_window(origin, points[0]));
            for p in &points[1..] {
                builder.line_to(to_window(origin, *p));
            }
            if let Ok(path) = builder.build() {
                window.paint_path(path, stroke.color);
            }
        }
        DrawCommand::Rect {
            bounds,
            fill,
            stroke,
            corner_radius,
            ..
        } => {
            let (border_width, border_color) = match stroke {
                Some(s) => (s.width, s.color),
                None => (0.0, transparent_black()),
            };
            window.paint_quad(quad(
                to_bounds(origin, bounds),
                Corners::all(px(*corner_radius as f32)),
                fill.unwrap_or(transparent_black()),
                Edges::all(px(border_width)),
                border_color,
                BorderStyle::default(),
            ));
        }
        DrawCommand::Text {
            position,
            text,
            anchor,
            color,
            size,
        } => paint_text(window, cx, origin, *position, text, *anchor, *color, *size),
        DrawCommand::Group { children, .. } => {
            for child in children {
                paint_command(child, origin, window, cx);
            }
        }
    }
}

fn paint_segments(
    window: &mut Window,
    origin: Point<Pixels>,
    segments: &[(Point<f64>, Point<f64>)],
    stroke: StrokeStyle,
) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(stroke.width.max(0.5)));
    for (from, to) in segments {
        let pieces = match stroke.dash {
            Some((dash, gap)) => dash_segments(*from, *to, dash, gap),
            None => vec![(*from, *to)],
        };
        for (a, b) in pieces {
            builder.move_to(to_window(origin, a));
            builder.line_to(to_window(origin, b));
        }
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, stroke.color);
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: Point<Pixels>,
    position: Point<f64>,
    text: &str,
    anchor: TextAnchor,
    color: Hsla,
    size: f32,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let width = f32::from(shaped.width);
    let x_offset = match anchor {
        TextAnchor::Start => 0.0,
        TextAnchor::Middle => width / 2.0,
        TextAnchor::End => width,
    };
    let top_left = to_window(origin, position) - point(px(x_offset), line_height / 2.0);
    let _ = shaped.paint(top_left, line_height, window, cx);
}

fn to_bounds(origin: Point<Pixels>, rect: &PixelRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        to_window(origin, Point::new(rect.x, rect.y)),
        to_window(origin, Point::new(rect.right(), rect.bottom())),
    )
}
