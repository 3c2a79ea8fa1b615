use crate::material::{MaterialChart, TableRow};
use crate::painter::paint_scene;
use crate::theme::ChartTheme;
use crate::utils::to_canvas;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Static material test chart with the table of original measurements below it.
/// The only interaction is the hover tooltip.
pub struct MaterialChartView {
    pub chart: MaterialChart,
    pub theme: ChartTheme,
    pub hover: Option<usize>,
    canvas_bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl MaterialChartView {
    pub fn new(chart: MaterialChart, _cx: &mut Context<Self>) -> Self {
        info!(
            points = chart.dataset.points.len(),
            originals = chart.dataset.original_points().count(),
            "MaterialChartView created"
        );
        Self {
            chart,
            theme: ChartTheme::default(),
            hover: None,
            canvas_bounds: Rc::new(RefCell::new(Bounds::default())),
        }
    }

    pub fn set_hover_x(&mut self, local_x: Option<f64>, cx: &mut Context<Self>) {
        let hover = local_x.and_then(|x| self.chart.nearest_index(x));
        if hover != self.hover {
            self.hover = hover;
            cx.notify();
        }
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let bounds = *self.canvas_bounds.borrow();
        let local = bounds
            .contains(&event.position)
            .then(|| to_canvas(bounds.origin, event.position).x);
        self.set_hover_x(local, cx);
    }

    fn render_cell(&self, text: String, header: bool) -> Div {
        div()
            .flex_1()
            .p_2()
            .border_1()
            .border_color(self.theme.table_border)
            .flex()
            .justify_center()
            .when(header, |d| d.font_weight(FontWeight::BOLD))
            .child(text)
    }

    fn render_table(&self, rows: Vec<TableRow>) -> impl IntoElement {
        let header = div()
            .flex()
            .flex_row()
            .bg(self.theme.table_header_background)
            .child(self.render_cell("Length (m)".into(), true))
            .child(self.render_cell("Extension (m)".into(), true))
            .child(self.render_cell("Load (N)".into(), true));

        let body = rows.into_iter().map(|row| {
            div()
                .flex()
                .flex_row()
                .bg(if row.shaded {
                    self.theme.table_row_alt_background
                } else {
                    self.theme.table_row_background
                })
                .child(self.render_cell(row.length, false))
                .child(self.render_cell(row.extension, false))
                .child(self.render_cell(row.load, false))
        });

        div()
            .w(px(448.0))
            .flex()
            .flex_col()
            .text_size(px(12.0))
            .child(header)
            .children(body)
    }
}

impl Render for MaterialChartView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scene = self.chart.build_scene(&self.theme, self.hover);
        let bounds_rc = self.canvas_bounds.clone();

        div()
            .size_full()
            .p_4()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .bg(self.theme.background)
            .text_color(self.theme.text)
            .child(
                div()
                    .w(px(self.chart.width as f32))
                    .h(px(self.chart.height as f32))
                    .on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .child(
                        canvas(
                            |_, _, _| {},
                            move |bounds, (), window, cx| {
                                *bounds_rc.borrow_mut() = bounds;
                                paint_scene(&scene, bounds.origin, window, cx);
                            },
                        )
                        .size_full(),
                    ),
            )
            .child(self.render_table(self.chart.table_rows()))
    }
}
