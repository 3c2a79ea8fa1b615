use crate::data_types::{AxisEdge, AxisFormat, Tick};
use crate::scene::{DrawCommand, StrokeStyle, TextAnchor};
use crate::theme::ChartTheme;
use crate::transform::PixelRect;
use gpui::Point;

const TICK_LENGTH: f64 = 5.0;
const LABEL_GAP: f64 = 4.0;

/// Builds axis lines, tick marks and tick labels as scene commands.
pub struct AxisRenderer;

impl AxisRenderer {
    /// `line_at` is the pixel y of a bottom axis or the pixel x of a left axis;
    /// the axis line spans the matching side of `plot_area`.
    pub fn axis(
        edge: AxisEdge,
        line_at: f64,
        plot_area: &PixelRect,
        ticks: &[Tick],
        format: &AxisFormat,
        theme: &ChartTheme,
    ) -> DrawCommand {
        let stroke = StrokeStyle::solid(theme.axis_line, 1.0);
        let mut children = Vec::with_capacity(ticks.len() * 2 + 1);

        // 1. Axis line
        children.push(match edge {
            AxisEdge::Bottom => DrawCommand::line(
                Point::new(plot_area.x, line_at),
                Point::new(plot_area.right(), line_at),
                stroke,
            ),
            AxisEdge::Left => DrawCommand::line(
                Point::new(line_at, plot_area.y),
                Point::new(line_at, plot_area.bottom()),
                stroke,
            ),
        });

        // 2. Tick marks and labels
        for tick in ticks {
            let text = format.format(tick.value);
            match edge {
                AxisEdge::Bottom => {
                    children.push(DrawCommand::line(
                        Point::new(tick.pixel_x, line_at),
                        Point::new(tick.pixel_x, line_at + TICK_LENGTH),
                        stroke,
                    ));
                    children.push(DrawCommand::text(
                        Point::new(
                            tick.pixel_x,
                            line_at + TICK_LENGTH + LABEL_GAP + theme.axis_label_size as f64 / 2.0,
                        ),
                        text,
                        TextAnchor::Middle,
                        theme.axis_label,
                        theme.axis_label_size,
                    ));
                }
                AxisEdge::Left => {
                    children.push(DrawCommand::line(
                        Point::new(line_at - TICK_LENGTH, tick.pixel_y),
                        Point::new(line_at, tick.pixel_y),
                        stroke,
                    ));
                    children.push(DrawCommand::text(
                        Point::new(line_at - TICK_LENGTH - LABEL_GAP, tick.pixel_y),
                        text,
                        TextAnchor::End,
                        theme.axis_label,
                        theme.axis_label_size,
                    ));
                }
            }
        }

        DrawCommand::group(
            match edge {
                AxisEdge::Bottom => "x-axis",
                AxisEdge::Left => "y-axis",
            },
            children,
        )
    }

    /// Tick labels only, for a secondary axis sharing the line of another one.
    pub fn labels(
        ticks: &[Tick],
        row_y: f64,
        format: &AxisFormat,
        theme: &ChartTheme,
    ) -> DrawCommand {
        let children = ticks
            .iter()
            .map(|tick| {
                DrawCommand::text(
                    Point::new(tick.pixel_x, row_y),
                    format.format(tick.value),
                    TextAnchor::Middle,
                    theme.axis_label,
                    theme.axis_label_size,
                )
            })
            .collect();
        DrawCommand::group("axis-labels", children)
    }

    /// Light grid lines through the ticks of both axes.
    pub fn grid(
        plot_area: &PixelRect,
        x_ticks: &[Tick],
        y_ticks: &[Tick],
        theme: &ChartTheme,
    ) -> DrawCommand {
        let stroke = StrokeStyle::dashed(theme.grid_line, 1.0, 3.0, 3.0);
        let vertical = x_ticks.iter().map(|t| {
            DrawCommand::line(
                Point::new(t.pixel_x, plot_area.y),
                Point::new(t.pixel_x, plot_area.bottom()),
                stroke,
            )
        });
        let horizontal = y_ticks.iter().map(|t| {
            DrawCommand::line(
                Point::new(plot_area.x, t.pixel_y),
                Point::new(plot_area.right(), t.pixel_y),
                stroke,
            )
        });
        DrawCommand::group("grid", vertical.chain(horizontal).collect())
    }
}
