//! Riemann geometry: everything the scene needs, derived from `(n, width)`.

use crate::config::ChartConfig;
use crate::curve::sample_parabola;
use crate::data_types::{RiemannParams, Tick};
use crate::riemann::{build_rectangles, RiemannSum};
use crate::ticks::{x_ticks, y_ticks};
use crate::transform::{PixelRect, PlotTransform};
use gpui::Point;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct RiemannGeometry {
    pub params: RiemannParams,
    pub transform: PlotTransform,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub sum: RiemannSum,
    pub curve: Vec<Point<f64>>,
}

/// The Riemann scaler: x over `[0, width]`, y over `[0, width²]`, inside the padded canvas.
pub fn riemann_transform(params: RiemannParams, config: &ChartConfig) -> PlotTransform {
    let canvas = &config.canvas;
    let plot_area = PixelRect::new(
        canvas.padding,
        canvas.padding,
        canvas.graph_width(),
        canvas.graph_height(),
    );
    PlotTransform::new(plot_area, (0.0, params.width()), (0.0, params.y_max()))
}

/// Pure and deterministic: identical inputs give bit-identical output.
pub fn compute_geometry(params: RiemannParams, config: &ChartConfig) -> RiemannGeometry {
    let transform = riemann_transform(params, config);
    RiemannGeometry {
        params,
        x_ticks: x_ticks(params, config.max_x_ticks, &transform),
        y_ticks: y_ticks(params, config.y_tick_count, &transform),
        sum: build_rectangles(params, &transform),
        curve: sample_parabola(params.width(), config.curve_segments, &transform),
        transform,
    }
}

struct CacheEntry {
    key: (usize, u64),
    config: ChartConfig,
    geometry: Arc<RiemannGeometry>,
}

/// Memoizes the most recent geometry. Re-rendering with unchanged parameters
/// (selection clicks, hover) reuses it.
#[derive(Default)]
pub struct GeometryCache {
    last: Mutex<Option<CacheEntry>>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &self,
        params: RiemannParams,
        config: &ChartConfig,
    ) -> Arc<RiemannGeometry> {
        let mut last = self.last.lock();
        if let Some(entry) = last.as_ref() {
            if entry.key == params.key() && entry.config == *config {
                return entry.geometry.clone();
            }
        }
        let geometry = Arc::new(compute_geometry(params, config));
        *last = Some(CacheEntry {
            key: params.key(),
            config: config.clone(),
            geometry: geometry.clone(),
        });
        geometry
    }

    pub fn invalidate(&self) {
        *self.last.lock() = None;
    }
}
