//! Backend-independent drawing commands.
//!
//! Every chart in this crate is first built as a [`Scene`], a list of commands in
//! canvas pixel space. Rectangle commands double as click targets through
//! [`Scene::hit_test`].

use crate::transform::PixelRect;
use gpui::{Hsla, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Hsla,
    pub width: f32,
    /// `(dash, gap)` lengths in pixels, solid when `None`.
    pub dash: Option<(f64, f64)>,
}

impl StrokeStyle {
    pub fn solid(color: Hsla, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Hsla, width: f32, dash: f64, gap: f64) -> Self {
        Self {
            color,
            width,
            dash: Some((dash, gap)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point<f64>,
        to: Point<f64>,
        stroke: StrokeStyle,
    },
    Path {
        points: Vec<Point<f64>>,
        stroke: StrokeStyle,
    },
    Rect {
        bounds: PixelRect,
        fill: Option<Hsla>,
        stroke: Option<StrokeStyle>,
        corner_radius: f64,
        /// Click target id, reported by [`Scene::hit_test`].
        hit_id: Option<usize>,
    },
    /// `position` is the anchor point on the vertical centre of the line.
    Text {
        position: Point<f64>,
        text: String,
        anchor: TextAnchor,
        color: Hsla,
        size: f32,
    },
    Group {
        name: &'static str,
        children: Vec<DrawCommand>,
    },
}

impl DrawCommand {
    pub fn line(from: Point<f64>, to: Point<f64>, stroke: StrokeStyle) -> Self {
        Self::Line { from, to, stroke }
    }

    pub fn text(
        position: Point<f64>,
        text: impl Into<String>,
        anchor: TextAnchor,
        color: Hsla,
        size: f32,
    ) -> Self {
        Self::Text {
            position,
            text: text.into(),
            anchor,
            color,
            size,
        }
    }

    pub fn filled_rect(bounds: PixelRect, fill: Hsla) -> Self {
        Self::Rect {
            bounds,
            fill: Some(fill),
            stroke: None,
            corner_radius: 0.0,
            hit_id: None,
        }
    }

    pub fn group(name: &'static str, children: Vec<DrawCommand>) -> Self {
        Self::Group { name, children }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn find_group(&self, name: &str) -> Option<&[DrawCommand]> {
        fn find<'a>(commands: &'a [DrawCommand], name: &str) -> Option<&'a [DrawCommand]> {
            for command in commands {
                if let DrawCommand::Group {
                    name: group,
                    children,
                } = command
                {
                    if *group == name {
                        return Some(children);
                    }
                    if let Some(found) = find(children, name) {
                        return Some(found);
                    }
                }
            }
            None
        }
        find(&self.commands, name)
    }

    /// All non-group commands in paint order.
    pub fn flatten(&self) -> Vec<&DrawCommand> {
        fn walk<'a>(commands: &'a [DrawCommand], out: &mut Vec<&'a DrawCommand>) {
            for command in commands {
                match command {
                    DrawCommand::Group { children, .. } => walk(children, out),
                    other => out.push(other),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.commands, &mut out);
        out
    }

    /// Id of the topmost clickable rectangle under `point`.
    pub fn hit_test(&self, point: Point<f64>) -> Option<usize> {
        self.flatten().into_iter().rev().find_map(|command| match command {
            DrawCommand::Rect {
                bounds,
                hit_id: Some(id),
                ..
            } if bounds.contains(point) => Some(*id),
            _ => None,
        })
    }
}

/// Splits a segment into `(start, end)` dash pieces.
pub fn dash_segments(
    from: Point<f64>,
    to: Point<f64>,
    dash: f64,
    gap: f64,
) -> Vec<(Point<f64>, Point<f64>)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 || dash <= 0.0 {
        return vec![(from, to)];
    }
    let (ux, uy) = (dx / length, dy / length);
    let at = |d: f64| Point::new(from.x + ux * d, from.y + uy * d);

    let mut pieces = Vec::new();
    let mut start = 0.0;
    while start < length {
        let end = (start + dash).min(length);
        pieces.push((at(start), at(end)));
        start = end + gap.max(0.0);
    }
    pieces
}
