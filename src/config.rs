//! Chart configuration
//!
//! Fixed canvas geometry, parameter bounds and inspection-label metrics. Everything
//! here is plain data with serde support so a host can ship its own JSON.

use eyre::{ensure, Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Pixel viewport of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 40.0,
        }
    }
}

impl CanvasConfig {
    pub fn graph_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    pub fn graph_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.height.is_finite() && self.padding.is_finite(),
            "canvas dimensions must be finite"
        );
        ensure!(self.padding >= 0.0, "padding must not be negative, got {}", self.padding);
        ensure!(
            self.padding < self.width / 2.0 && self.padding < self.height / 2.0,
            "padding {} leaves no plotting area in a {}x{} canvas",
            self.padding,
            self.width,
            self.height
        );
        Ok(())
    }
}

/// Bounds the host UI enforces on the two Riemann parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterLimits {
    pub n_min: usize,
    pub n_max: usize,
    pub width_min: f64,
    pub width_max: f64,
    pub width_step: f64,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            n_min: 1,
            n_max: 200,
            width_min: 1.0,
            width_max: 20.0,
            width_step: 1.0,
        }
    }
}

impl ParameterLimits {
    /// Ordered count bounds, at least 1. Inverted limits are swapped rather than
    /// rejected so clamping never panics.
    fn count_bounds(&self) -> (i64, i64) {
        let lo = i64::try_from(self.n_min.max(1)).unwrap_or(i64::MAX);
        let hi = i64::try_from(self.n_max.max(1)).unwrap_or(i64::MAX);
        (lo.min(hi), lo.max(hi))
    }

    /// Ordered width bounds. A bound that is not a positive finite number falls
    /// back to its default.
    fn width_bounds(&self) -> (f64, f64) {
        let defaults = Self::default();
        let usable = |v: f64, fallback: f64| if v.is_finite() && v > 0.0 { v } else { fallback };
        let lo = usable(self.width_min, defaults.width_min);
        let hi = usable(self.width_max, defaults.width_max);
        (lo.min(hi), lo.max(hi))
    }

    pub fn clamp_count(&self, n: i64) -> usize {
        let (lo, hi) = self.count_bounds();
        n.clamp(lo, hi) as usize
    }

    pub fn clamp_width(&self, width: f64) -> f64 {
        let (lo, hi) = self.width_bounds();
        if width.is_nan() {
            return lo;
        }
        width.clamp(lo, hi)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_min >= 1, "rectangle count lower bound must be at least 1");
        ensure!(
            self.n_min <= self.n_max,
            "rectangle count bounds are inverted: {} > {}",
            self.n_min,
            self.n_max
        );
        ensure!(
            self.width_min > 0.0 && self.width_min.is_finite() && self.width_max.is_finite(),
            "width bounds must be positive and finite"
        );
        ensure!(
            self.width_min <= self.width_max,
            "width bounds are inverted: {} > {}",
            self.width_min,
            self.width_max
        );
        ensure!(self.width_step > 0.0, "width step must be positive");
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: CanvasConfig,
    pub limits: ParameterLimits,
    /// Segments used to approximate the curve, independent of the rectangle count.
    pub curve_segments: usize,
    /// Half width of the inspection label box.
    pub label_margin: f64,
    pub label_height: f64,
    /// Gap between a selected rectangle and its inspection label.
    pub label_offset: f64,
    pub y_tick_count: usize,
    pub max_x_ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            limits: ParameterLimits::default(),
            curve_segments: 200,
            label_margin: 100.0,
            label_height: 60.0,
            label_offset: 10.0,
            y_tick_count: 10,
            max_x_ticks: 10,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse chart configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.canvas.validate().wrap_err("invalid canvas")?;
        self.limits.validate().wrap_err("invalid parameter limits")?;
        ensure!(self.curve_segments >= 1, "curve needs at least one segment");
        ensure!(self.y_tick_count >= 1, "y axis needs at least one tick interval");
        ensure!(self.max_x_ticks >= 1, "x axis needs at least one tick interval");
        ensure!(
            self.label_margin >= 0.0 && self.label_height >= 0.0,
            "label metrics must not be negative"
        );
        Ok(())
    }
}
