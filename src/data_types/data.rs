/// A data point of a line series. Points with a `marker` get a dot and the
/// marker text drawn above them.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub marker: Option<String>,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, marker: None }
    }

    pub fn with_marker(mut self, label: impl Into<String>) -> Self {
        self.marker = Some(label.into());
        self
    }
}

/// How consecutive points of a series are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurveKind {
    #[default]
    Linear,
    /// Uniform cubic B-spline through the end points.
    Basis,
}
