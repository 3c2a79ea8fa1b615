use crate::config::ParameterLimits;
use eyre::{ensure, Result};
use serde::{Deserialize, Serialize};

/// The two scalars every Riemann geometry is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiemannParams {
    n: usize,
    width: f64,
}

impl RiemannParams {
    /// Rejects inputs that would make `width / n` or `1 / width²` non-finite.
    pub fn new(n: usize, width: f64) -> Result<Self> {
        ensure!(n >= 1, "rectangle count must be at least 1, got {}", n);
        ensure!(
            width.is_finite() && width > 0.0,
            "domain width must be positive and finite, got {}",
            width
        );
        Ok(Self { n, width })
    }

    /// Builds parameters clamped into `limits`. Never fails.
    pub fn clamped(n: i64, width: f64, limits: &ParameterLimits) -> Self {
        Self {
            n: limits.clamp_count(n),
            width: limits.clamp_width(width),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn dx(&self) -> f64 {
        self.width / self.n as f64
    }

    /// Upper bound of the y domain, `width²`.
    pub fn y_max(&self) -> f64 {
        self.width * self.width
    }

    /// Bit-exact identity used for memoization.
    pub fn key(&self) -> (usize, u64) {
        (self.n, self.width.to_bits())
    }
}

impl Default for RiemannParams {
    fn default() -> Self {
        Self { n: 10, width: 3.0 }
    }
}
