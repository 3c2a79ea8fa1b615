//! Left-endpoint Riemann rectangles for `y = x²`.

use crate::data_types::RiemannParams;
use crate::transform::{Axis, PlotTransform};

/// One rectangle of the sum, in both domain and pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub index: usize,
    pub domain_x: f64,
    pub domain_height: f64,
    pub domain_width: f64,
    pub area: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub pixel_width: f64,
    pub pixel_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RiemannSum {
    pub rectangles: Vec<Rectangle>,
    pub total_area: f64,
    /// Closed-form integral `width³ / 3`.
    pub exact_area: f64,
    /// `|total_area - exact_area|`, shown to the user rather than hidden.
    pub error: f64,
}

pub fn parabola(x: f64) -> f64 {
    x * x
}

pub fn exact_integral(width: f64) -> f64 {
    width * width * width / 3.0
}

/// Partitions `[0, width)` into `n` intervals of `dx = width / n` and samples the
/// height at the left edge of each.
pub fn build_rectangles(params: RiemannParams, transform: &PlotTransform) -> RiemannSum {
    let dx = params.dx();
    let pixel_width = transform.length(dx, Axis::X);

    let rectangles: Vec<Rectangle> = (0..params.n())
        .map(|index| {
            let x = index as f64 * dx;
            let height = parabola(x);
            Rectangle {
                index,
                domain_x: x,
                domain_height: height,
                domain_width: dx,
                area: height * dx,
                pixel_x: transform.map_x(x),
                pixel_y: transform.map_y(height),
                pixel_width,
                pixel_height: transform.length(height, Axis::Y),
            }
        })
        .collect();

    let total_area = rectangles.iter().map(|r| r.area).sum();
    let exact_area = exact_integral(params.width());

    RiemannSum {
        rectangles,
        total_area,
        exact_area,
        error: (total_area - exact_area).abs(),
    }
}
