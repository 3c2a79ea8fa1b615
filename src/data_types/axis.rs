use serde::{Deserialize, Serialize};

/// One axis tick: its domain value and where it lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Left,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisFormat {
    /// Precision picked from the magnitude of the value.
    #[default]
    Auto,
    /// Fixed number of decimals, like `toFixed`.
    Fixed(usize),
}

const MAX_STEP_DECIMALS: usize = 4;

impl AxisFormat {
    /// Fixed precision just fine enough to tell evenly spaced ticks apart:
    /// at least one decimal, at most four.
    pub fn for_ticks(ticks: &[Tick]) -> Self {
        let step = match ticks {
            [first, second, ..] => (second.value - first.value).abs(),
            _ => return Self::Fixed(1),
        };
        let decimals = (1..MAX_STEP_DECIMALS)
            .find(|&d| {
                let scaled = step * 10f64.powi(d as i32);
                (scaled - scaled.round()).abs() < 1e-6
            })
            .unwrap_or(MAX_STEP_DECIMALS);
        Self::Fixed(decimals)
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Fixed(decimals) => format!("{:.*}", decimals, value),
            Self::Auto => {
                if value.abs() < 0.001 && value.abs() > 0.0 {
                    format!("{:.4}", value)
                } else if value.abs() > 1000.0 {
                    format!("{:.0}", value)
                } else if value.fract() == 0.0 {
                    format!("{}", value)
                } else {
                    format!("{:.2}", value)
                }
            }
        }
    }
}
