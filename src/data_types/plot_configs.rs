use super::CurveKind;
use gpui::Hsla;

#[derive(Clone, Debug, PartialEq)]
pub struct LinePlotConfig {
    pub color: Hsla,
    pub line_width: f32,
    pub curve: CurveKind,
    pub marker_radius: f64,
    pub marker_label_color: Hsla,
    pub marker_label_size: f32,
    /// Distance between a marker and the baseline of its label.
    pub marker_label_offset: f64,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            color: gpui::blue(),
            line_width: 2.0,
            curve: CurveKind::Linear,
            marker_radius: 4.0,
            marker_label_color: gpui::black().opacity(0.6),
            marker_label_size: 12.0,
            marker_label_offset: 10.0,
        }
    }
}
