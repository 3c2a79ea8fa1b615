//! Material test chart
//!
//! Load against length for a tensile test. Interpolated samples take part in the
//! smoothed line but only original measurements get markers, labels and table rows.
//! A dashed reference line marks the limit of proportionality.

use crate::axis_renderer::AxisRenderer;
use crate::data_types::{AxisEdge, AxisFormat, CurveKind, LinePlotConfig, PlotPoint};
use crate::plot_types::{Annotation, AnnotationPlot, LinePlot, PlotRenderer};
use crate::scales::ChartScale;
use crate::scene::{DrawCommand, Scene, StrokeStyle, TextAnchor};
use crate::theme::ChartTheme;
use crate::transform::{PixelRect, PlotTransform};
use eyre::{ensure, Result, WrapErr};
use gpui::Point;
use serde::{Deserialize, Serialize};

/// Load at the limit of proportionality, in newtons.
pub const PROPORTIONALITY_LIMIT: f64 = 10.6;

const EMBEDDED_DATASET: &str = include_str!("../data/material_test.json");
const X_TICK_COUNT: usize = 6;
const Y_TICK_COUNT: usize = 5;

// Rows below the length axis line, top to bottom.
const EXTENSION_LABEL_ROW: f64 = 27.0;
const LENGTH_TITLE_ROW: f64 = 40.0;
const EXTENSION_TITLE_ROW: f64 = 53.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPoint {
    /// Specimen length, m
    pub length: f64,
    /// Applied load, N
    pub load: f64,
    /// Extension from the unloaded length, m
    pub extension: f64,
    /// `false` for interpolated samples.
    pub is_original: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDataset {
    pub points: Vec<MaterialPoint>,
}

impl MaterialDataset {
    /// The fixed measurement series shipped with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_DATASET).wrap_err("embedded material dataset is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let points: Vec<MaterialPoint> =
            serde_json::from_str(json).wrap_err("failed to parse material dataset")?;
        ensure!(!points.is_empty(), "material dataset is empty");
        ensure!(
            points
                .iter()
                .all(|p| p.length.is_finite() && p.load.is_finite() && p.extension.is_finite()),
            "material dataset contains non-finite values"
        );
        Ok(Self { points })
    }

    pub fn original_points(&self) -> impl Iterator<Item = &MaterialPoint> {
        self.points.iter().filter(|p| p.is_original)
    }

    fn range_of(&self, f: impl Fn(&MaterialPoint) -> f64) -> (f64, f64) {
        self.points
            .iter()
            .map(f)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    pub fn length_range(&self) -> (f64, f64) {
        self.range_of(|p| p.length)
    }

    pub fn extension_range(&self) -> (f64, f64) {
        self.range_of(|p| p.extension)
    }

    pub fn max_load(&self) -> f64 {
        self.range_of(|p| p.load).1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 60.0,
            left: 40.0,
        }
    }
}

/// One row of the measurement table, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub length: String,
    pub extension: String,
    pub load: String,
    /// Odd rows get the alternate background.
    pub shaded: bool,
}

pub struct MaterialChart {
    pub dataset: MaterialDataset,
    pub width: f64,
    pub height: f64,
    pub transform: PlotTransform,
    length_scale: ChartScale,
    extension_scale: ChartScale,
    load_scale: ChartScale,
}

impl MaterialChart {
    pub fn new(dataset: MaterialDataset, width: f64, height: f64, margins: ChartMargins) -> Result<Self> {
        let plot_area = PixelRect::new(
            margins.left,
            margins.top,
            width - margins.left - margins.right,
            height - margins.top - margins.bottom,
        );
        ensure!(
            plot_area.width > 0.0 && plot_area.height > 0.0,
            "margins leave no plotting area in a {}x{} chart",
            width,
            height
        );
        ensure!(!dataset.points.is_empty(), "material dataset is empty");

        let x_range = (plot_area.x, plot_area.right());
        let y_range = (plot_area.bottom(), plot_area.y);

        // Y axis starts at zero and ends on a round tick above the peak load.
        let load_max = ChartScale::new_linear((0.0, dataset.max_load()), y_range).nice_max(Y_TICK_COUNT);
        let load_scale = ChartScale::new_linear((0.0, load_max), y_range);
        let length_scale = ChartScale::new_linear(dataset.length_range(), x_range);
        let extension_scale = ChartScale::new_linear(dataset.extension_range(), x_range);

        let transform = PlotTransform::new(plot_area, length_scale.domain(), load_scale.domain());

        Ok(Self {
            dataset,
            width,
            height,
            transform,
            length_scale,
            extension_scale,
            load_scale,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(MaterialDataset::embedded()?, 600.0, 400.0, ChartMargins::default())
    }

    pub fn line_plot(&self, theme: &ChartTheme) -> LinePlot {
        let data = self
            .dataset
            .points
            .iter()
            .map(|p| {
                let point = PlotPoint::new(p.length, p.load);
                if p.is_original {
                    point.with_marker(format!("{}N", p.load))
                } else {
                    point
                }
            })
            .collect();
        LinePlot::new(data).with_config(LinePlotConfig {
            color: theme.series_line,
            curve: CurveKind::Basis,
            marker_label_color: theme.point_label,
            ..LinePlotConfig::default()
        })
    }

    pub fn reference_line(&self, theme: &ChartTheme) -> AnnotationPlot {
        AnnotationPlot::new(vec![Annotation::HLine {
            y: PROPORTIONALITY_LIMIT,
            stroke: StrokeStyle::dashed(theme.reference_line, 1.0, 3.0, 3.0),
            label: Some(format!(
                "Limit of Proportionality ({} N)",
                PROPORTIONALITY_LIMIT
            )),
        }])
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        self.dataset
            .original_points()
            .enumerate()
            .map(|(idx, p)| TableRow {
                length: format!("{}", p.length),
                extension: format!("{:.3}", p.extension),
                load: format!("{}", p.load),
                shaded: idx % 2 == 1,
            })
            .collect()
    }

    /// Index of the data point closest in x to a canvas-local pixel column, if
    /// the column lies inside the plot area.
    pub fn nearest_index(&self, pixel_x: f64) -> Option<usize> {
        let area = &self.transform.plot_area;
        if pixel_x < area.x || pixel_x > area.right() {
            return None;
        }
        let length = self.transform.invert_x(pixel_x);
        self.dataset
            .points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (a.length - length)
                    .abs()
                    .total_cmp(&(b.length - length).abs())
            })
            .map(|(i, _)| i)
    }

    pub fn build_scene(&self, theme: &ChartTheme, hover: Option<usize>) -> Scene {
        let area = self.transform.plot_area;
        let mut scene = Scene::new(self.width, self.height);
        scene.push(DrawCommand::filled_rect(
            PixelRect::new(0.0, 0.0, self.width, self.height),
            theme.background,
        ));

        let baseline = area.bottom();
        let length_ticks = self.length_scale.horizontal_ticks(X_TICK_COUNT, baseline);
        let load_ticks = self.load_scale.vertical_ticks(Y_TICK_COUNT, area.x);
        let extension_ticks = self.extension_scale.horizontal_ticks(X_TICK_COUNT, baseline);

        scene.push(AxisRenderer::grid(&area, &length_ticks, &load_ticks, theme));
        scene.push(AxisRenderer::axis(
            AxisEdge::Bottom,
            baseline,
            &area,
            &length_ticks,
            &AxisFormat::Fixed(3),
            theme,
        ));
        scene.push(AxisRenderer::labels(
            &extension_ticks,
            baseline + EXTENSION_LABEL_ROW,
            &AxisFormat::Fixed(3),
            theme,
        ));
        scene.push(AxisRenderer::axis(
            AxisEdge::Left,
            area.x,
            &area,
            &load_ticks,
            &AxisFormat::Auto,
            theme,
        ));

        let title = |position: Point<f64>, text: &str, anchor: TextAnchor| {
            DrawCommand::text(position, text, anchor, theme.text, theme.axis_title_size)
        };
        scene.push(DrawCommand::group(
            "titles",
            vec![
                title(
                    Point::new(area.center().x, baseline + LENGTH_TITLE_ROW),
                    "Length (m)",
                    TextAnchor::Middle,
                ),
                title(
                    Point::new(area.center().x, baseline + EXTENSION_TITLE_ROW),
                    "Extension (m)",
                    TextAnchor::Middle,
                ),
                title(Point::new(4.0, area.y - 10.0), "Load (N)", TextAnchor::Start),
            ],
        ));

        self.line_plot(theme).render(&mut scene, &self.transform);
        self.reference_line(theme).render(&mut scene, &self.transform);

        if let Some(point) = hover.and_then(|i| self.dataset.points.get(i)) {
            scene.push(self.tooltip(point, theme));
        }

        scene
    }

    fn tooltip(&self, point: &MaterialPoint, theme: &ChartTheme) -> DrawCommand {
        let area = self.transform.plot_area;
        let anchor = self
            .transform
            .data_to_screen(Point::new(point.length, point.load));
        let (box_w, box_h) = (130.0, 54.0);
        // Flip to the left of the point near the right edge.
        let x = if anchor.x + 10.0 + box_w > area.right() {
            anchor.x - 10.0 - box_w
        } else {
            anchor.x + 10.0
        };
        let y = (anchor.y - box_h / 2.0).clamp(area.y, (area.bottom() - box_h).max(area.y));
        let bounds = PixelRect::new(x, y, box_w, box_h);

        let lines = [
            format!("Length: {} m", point.length),
            format!("Load: {} N", point.load),
            format!("Extension: {:.3} m", point.extension),
        ];
        let mut children = vec![
            DrawCommand::line(
                Point::new(anchor.x, area.y),
                Point::new(anchor.x, area.bottom()),
                StrokeStyle::solid(theme.crosshair_line, 1.0),
            ),
            DrawCommand::Rect {
                bounds,
                fill: Some(theme.tooltip_background),
                stroke: Some(StrokeStyle::solid(theme.table_border, 1.0)),
                corner_radius: 4.0,
                hit_id: None,
            },
        ];
        let line_height = box_h / lines.len() as f64;
        for (i, line) in lines.into_iter().enumerate() {
            children.push(DrawCommand::text(
                Point::new(x + 8.0, y + line_height * (i as f64 + 0.5)),
                line,
                TextAnchor::Start,
                theme.tooltip_text,
                theme.axis_label_size,
            ));
        }
        DrawCommand::group("tooltip", children)
    }
}
