// RiemannView implementation

use crate::config::ChartConfig;
use crate::data_types::RiemannState;
use crate::geometry::{GeometryCache, RiemannGeometry};
use crate::painter::paint_scene;
use crate::rendering::build_riemann_scene;
use crate::scene::Scene;
use crate::theme::ChartTheme;
use crate::utils::to_canvas;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info, warn};

actions!(
    riemann_chart,
    [
        IncreaseCount,
        DecreaseCount,
        IncreaseWidth,
        DecreaseWidth,
        ClearSelection
    ]
);

/// Interactive Riemann sum demonstration.
///
/// Owns the `(n, width, selected)` state; every render derives geometry and scene
/// from it. Clicking a rectangle toggles its inspection overlay.
pub struct RiemannView {
    pub state: RiemannState,
    pub config: ChartConfig,
    pub theme: ChartTheme,
    cache: GeometryCache,
    canvas_bounds: Rc<RefCell<Bounds<Pixels>>>,
    focus_handle: FocusHandle,
}

impl RiemannView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self::with_config(ChartConfig::default(), cx)
    }

    pub fn with_config(config: ChartConfig, cx: &mut Context<Self>) -> Self {
        info!(
            width = config.canvas.width,
            height = config.canvas.height,
            "RiemannView created"
        );
        if let Err(err) = config.validate() {
            warn!(error = %err, "chart configuration failed validation, clamping to usable bounds");
        }
        let state = RiemannState::new(Default::default(), config.limits);
        Self {
            state,
            config,
            theme: ChartTheme::default(),
            cache: GeometryCache::new(),
            canvas_bounds: Rc::new(RefCell::new(Bounds::default())),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn geometry(&self) -> Arc<RiemannGeometry> {
        self.cache.get_or_compute(self.state.params(), &self.config)
    }

    pub fn scene(&self) -> Scene {
        build_riemann_scene(
            &self.geometry(),
            &self.state.selection(),
            &self.config,
            &self.theme,
        )
    }

    pub fn set_count(&mut self, n: i64, cx: &mut Context<Self>) {
        if self.state.set_count(n) {
            cx.notify();
        }
    }

    pub fn set_width(&mut self, width: f64, cx: &mut Context<Self>) {
        if self.state.set_width(width) {
            cx.notify();
        }
    }

    pub fn select_rectangle(&mut self, index: usize, cx: &mut Context<Self>) {
        self.state.select(index);
        cx.notify();
    }

    /// Hit-tests a canvas-local point and toggles the rectangle under it.
    pub fn click_canvas_point(&mut self, local: Point<f64>, cx: &mut Context<Self>) -> Option<usize> {
        let hit = self.scene().hit_test(local);
        debug!(x = local.x, y = local.y, ?hit, "canvas click");
        if let Some(index) = hit {
            self.select_rectangle(index, cx);
        }
        hit
    }

    pub fn step_count(&mut self, delta: i64, cx: &mut Context<Self>) {
        if self.state.step_count(delta) {
            cx.notify();
        }
    }

    pub fn step_width(&mut self, steps: i32, cx: &mut Context<Self>) {
        if self.state.step_width(steps) {
            cx.notify();
        }
    }

    // --- Action Handlers ---
    fn handle_increase_count(&mut self, _: &IncreaseCount, _win: &mut Window, cx: &mut Context<Self>) {
        self.step_count(1, cx);
    }
    fn handle_decrease_count(&mut self, _: &DecreaseCount, _win: &mut Window, cx: &mut Context<Self>) {
        self.step_count(-1, cx);
    }
    fn handle_increase_width(&mut self, _: &IncreaseWidth, _win: &mut Window, cx: &mut Context<Self>) {
        self.step_width(1, cx);
    }
    fn handle_decrease_width(&mut self, _: &DecreaseWidth, _win: &mut Window, cx: &mut Context<Self>) {
        self.step_width(-1, cx);
    }
    fn handle_clear_selection(&mut self, _: &ClearSelection, _win: &mut Window, cx: &mut Context<Self>) {
        self.state.clear_selection();
        cx.notify();
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        let bounds = *self.canvas_bounds.borrow();
        if !bounds.contains(&event.position) {
            return;
        }
        self.click_canvas_point(to_canvas(bounds.origin, event.position), cx);
    }

    /// `-` and `+` buttons around a label. Clicks focus the view and dispatch
    /// the same actions as the key bindings.
    fn render_stepper(
        &self,
        label: String,
        decrease: Box<dyn Action>,
        increase: Box<dyn Action>,
    ) -> impl IntoElement {
        let border = self.theme.table_border;
        let hover_bg = self.theme.table_header_background;
        let focus = self.focus_handle.clone();
        let button = move |text: &'static str, action: Box<dyn Action>| {
            let focus = focus.clone();
            div()
                .size_6()
                .flex()
                .items_center()
                .justify_center()
                .rounded_sm()
                .border_1()
                .border_color(border)
                .cursor_pointer()
                .hover(move |s| s.bg(hover_bg))
                .on_mouse_down(MouseButton::Left, move |_, window, cx| {
                    window.focus(&focus);
                    window.dispatch_action(action.boxed_clone(), cx);
                })
                .child(text)
        };
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(button("-", decrease))
            .child(div().min_w(px(120.0)).child(label))
            .child(button("+", increase))
    }

    fn render_summary(&self, geometry: &RiemannGeometry) -> impl IntoElement {
        let sum = &geometry.sum;
        div()
            .flex()
            .flex_col()
            .gap_1()
            .text_size(px(12.0))
            .child(format!("Δx = {:.4}", geometry.params.dx()))
            .child(format!("Approximate area = {:.4}", sum.total_area))
            .child(format!("Exact area = {:.4}", sum.exact_area))
            .child(format!("Error = {:.4}", sum.error))
    }
}

impl Focusable for RiemannView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for RiemannView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let geometry = self.geometry();
        let scene = build_riemann_scene(
            &geometry,
            &self.state.selection(),
            &self.config,
            &self.theme,
        );
        let params = self.state.params();
        let bounds_rc = self.canvas_bounds.clone();
        let canvas_size = (
            px(self.config.canvas.width as f32),
            px(self.config.canvas.height as f32),
        );

        div()
            .key_context("RiemannView")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_increase_count))
            .on_action(cx.listener(Self::handle_decrease_count))
            .on_action(cx.listener(Self::handle_increase_width))
            .on_action(cx.listener(Self::handle_decrease_width))
            .on_action(cx.listener(Self::handle_clear_selection))
            .size_full()
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .bg(self.theme.background)
            .text_color(self.theme.text)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .child(self.render_stepper(
                        format!("Rectangles: {}", params.n()),
                        Box::new(DecreaseCount),
                        Box::new(IncreaseCount),
                    ))
                    .child(self.render_stepper(
                        format!("Width: {}", params.width()),
                        Box::new(DecreaseWidth),
                        Box::new(IncreaseWidth),
                    )),
            )
            .child(
                div()
                    .w(canvas_size.0)
                    .h(canvas_size.1)
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
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
            .child(self.render_summary(&geometry))
    }
}
