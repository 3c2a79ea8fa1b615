//! Polyline sampling of functions and spline smoothing of series.

use crate::transform::PlotTransform;
use gpui::Point;

/// Samples `f` on `[x_min, x_max]` with `segments` equal steps and returns the
/// pixel-space polyline (`segments + 1` points). The last sample is taken at
/// exactly `x_max`.
pub fn sample_function(
    f: impl Fn(f64) -> f64,
    x_min: f64,
    x_max: f64,
    segments: usize,
    transform: &PlotTransform,
) -> Vec<Point<f64>> {
    let segments = segments.max(1);
    let span = x_max - x_min;
    (0..=segments)
        .map(|i| {
            let x = if i == segments {
                x_max
            } else {
                x_min + span * i as f64 / segments as f64
            };
            transform.data_to_screen(Point::new(x, f(x)))
        })
        .collect()
}

/// `y = x²` over `[0, width]`.
pub fn sample_parabola(width: f64, segments: usize, transform: &PlotTransform) -> Vec<Point<f64>> {
    sample_function(crate::riemann::parabola, 0.0, width, segments, transform)
}

fn bspline_point(p: [Point<f64>; 4], t: f64) -> Point<f64> {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let b0 = mt * mt * mt / 6.0;
    let b1 = (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0;
    let b2 = (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0;
    let b3 = t3 / 6.0;
    Point::new(
        b0 * p[0].x + b1 * p[1].x + b2 * p[2].x + b3 * p[3].x,
        b0 * p[0].y + b1 * p[1].y + b2 * p[2].y + b3 * p[3].y,
    )
}

/// Uniform cubic B-spline through `points`, flattened to a polyline.
///
/// The end points are doubled so the curve starts at the first point and ends at
/// the last one; interior points act as control points and are not interpolated.
pub fn basis_spline(points: &[Point<f64>], samples_per_segment: usize) -> Vec<Point<f64>> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let samples = samples_per_segment.max(1);

    let mut control = Vec::with_capacity(points.len() + 2);
    control.push(points[0]);
    control.extend_from_slice(points);
    if let Some(last) = points.last() {
        control.push(*last);
    }

    let mut out = Vec::with_capacity((control.len() - 3) * samples + 2);
    out.push(points[0]);
    for window in control.windows(4) {
        let p = [window[0], window[1], window[2], window[3]];
        for s in 0..samples {
            out.push(bspline_point(p, s as f64 / samples as f64));
        }
    }
    if let Some(window) = control.windows(4).last() {
        out.push(bspline_point([window[0], window[1], window[2], window[3]], 1.0));
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}
