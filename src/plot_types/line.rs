use super::PlotRenderer;
use crate::curve::basis_spline;
use crate::data_types::{CurveKind, LinePlotConfig, PlotPoint};
use crate::scene::{DrawCommand, Scene, StrokeStyle, TextAnchor};
use crate::transform::{PixelRect, PlotTransform};
use gpui::Point;

const BASIS_SAMPLES: usize = 12;

/// Line plot type
pub struct LinePlot {
    pub data: Vec<PlotPoint>,
    pub config: LinePlotConfig,
}

impl LinePlot {
    pub fn new(data: Vec<PlotPoint>) -> Self {
        Self {
            data,
            config: LinePlotConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LinePlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Pixel polyline of the series, smoothed according to the configured curve.
    pub fn screen_path(&self, transform: &PlotTransform) -> Vec<Point<f64>> {
        let points: Vec<Point<f64>> = self
            .data
            .iter()
            .map(|p| transform.data_to_screen(Point::new(p.x, p.y)))
            .collect();
        match self.config.curve {
            CurveKind::Linear => points,
            CurveKind::Basis => basis_spline(&points, BASIS_SAMPLES),
        }
    }
}

impl PlotRenderer for LinePlot {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform) {
        if self.data.is_empty() {
            return;
        }

        scene.push(DrawCommand::Path {
            points: self.screen_path(transform),
            stroke: StrokeStyle::solid(self.config.color, self.config.line_width),
        });

        let r = self.config.marker_radius;
        let mut markers = Vec::new();
        for point in &self.data {
            let Some(label) = &point.marker else {
                continue;
            };
            let center = transform.data_to_screen(Point::new(point.x, point.y));
            markers.push(DrawCommand::Rect {
                bounds: PixelRect::new(center.x - r, center.y - r, 2.0 * r, 2.0 * r),
                fill: Some(self.config.color),
                stroke: None,
                corner_radius: r,
                hit_id: None,
            });
            if !label.is_empty() {
                markers.push(DrawCommand::text(
                    Point::new(center.x, center.y - self.config.marker_label_offset),
                    label.clone(),
                    TextAnchor::Middle,
                    self.config.marker_label_color,
                    self.config.marker_label_size,
                ));
            }
        }
        scene.push(DrawCommand::group("markers", markers));
    }
}
