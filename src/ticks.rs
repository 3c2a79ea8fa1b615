//! Evenly spaced axis ticks for the Riemann chart.

use crate::data_types::{RiemannParams, Tick};
use crate::transform::PlotTransform;

/// Interval count on the x axis: `min(2 * width, cap)`, floored to a whole
/// number and never below one. Small widths get fewer ticks, wide ones are capped.
pub fn x_tick_count(width: f64, cap: usize) -> usize {
    let count = (2.0 * width).min(cap as f64).floor();
    if count.is_nan() || count < 1.0 {
        1
    } else {
        count as usize
    }
}

/// `count + 1` values from 0 to `axis_max` inclusive, `axis_max / count` apart.
pub fn tick_values(axis_max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count)
        .map(|i| axis_max * i as f64 / count as f64)
        .collect()
}

/// Ticks along the x axis, sitting on the `y = 0` baseline.
pub fn x_ticks(params: RiemannParams, cap: usize, transform: &PlotTransform) -> Vec<Tick> {
    let baseline = transform.map_y(0.0);
    tick_values(params.width(), x_tick_count(params.width(), cap))
        .into_iter()
        .map(|value| Tick {
            value,
            pixel_x: transform.map_x(value),
            pixel_y: baseline,
        })
        .collect()
}

/// Ticks along the y axis over `[0, width²]`, sitting on the `x = 0` line.
pub fn y_ticks(params: RiemannParams, count: usize, transform: &PlotTransform) -> Vec<Tick> {
    let baseline = transform.map_x(0.0);
    tick_values(params.y_max(), count)
        .into_iter()
        .map(|value| Tick {
            value,
            pixel_x: baseline,
            pixel_y: transform.map_y(value),
        })
        .collect()
}
