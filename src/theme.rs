use gpui::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    pub background: Hsla,
    pub grid_line: Hsla,
    pub axis_line: Hsla,
    pub axis_label: Hsla,
    pub axis_label_size: f32,
    pub axis_title_size: f32,

    pub rectangle_fill: Hsla,
    pub rectangle_stroke: Hsla,
    pub selected_fill: Hsla,
    pub selected_stroke: Hsla,
    pub curve: Hsla,
    pub curve_width: f32,
    pub width_guide: Hsla,
    pub height_guide: Hsla,

    pub label_background: Hsla,
    pub label_border: Hsla,
    pub label_text: Hsla,
    pub label_text_size: f32,

    pub series_line: Hsla,
    pub point_label: Hsla,
    pub reference_line: Hsla,
    pub crosshair_line: Hsla,
    pub tooltip_background: Hsla,
    pub tooltip_text: Hsla,

    pub table_header_background: Hsla,
    pub table_row_background: Hsla,
    pub table_row_alt_background: Hsla,
    pub table_border: Hsla,
    pub text: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let blue: Hsla = rgb(0x3b82f6).into();
        Self {
            background: gpui::white(),
            grid_line: gpui::black().alpha(0.1),
            axis_line: gpui::black().alpha(0.7),
            axis_label: gpui::black().alpha(0.8),
            axis_label_size: 11.0,
            axis_title_size: 12.0,

            rectangle_fill: blue.alpha(0.3),
            rectangle_stroke: blue,
            selected_fill: rgb(0xf59e0b).into(),
            selected_stroke: rgb(0xb45309).into(),
            curve: gpui::red(),
            curve_width: 2.0,
            width_guide: rgb(0x16a34a).into(),
            height_guide: rgb(0x9333ea).into(),

            label_background: gpui::white().alpha(0.95),
            label_border: gpui::black().alpha(0.4),
            label_text: gpui::black(),
            label_text_size: 12.0,

            series_line: rgb(0x8884d8).into(),
            point_label: rgb(0x666666).into(),
            reference_line: gpui::red(),
            crosshair_line: gpui::black().alpha(0.3),
            tooltip_background: gpui::white().alpha(0.95),
            tooltip_text: gpui::black(),

            table_header_background: rgb(0xf3f4f6).into(),
            table_row_background: gpui::white(),
            table_row_alt_background: rgb(0xf9fafb).into(),
            table_border: rgb(0xd1d5db).into(),
            text: gpui::black(),
        }
    }
}
