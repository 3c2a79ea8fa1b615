use gpui::{Focusable, Point, TestAppContext};
use riemann_chart::chart_view::{DecreaseWidth, IncreaseCount};
use riemann_chart::{ChartConfig, MaterialChart, MaterialChartView, RiemannView};

#[gpui::test]
fn test_riemann_view_defaults(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| RiemannView::new(cx));

    window
        .update(cx, |view, _window, _cx| {
            assert_eq!(view.state.params().n(), 10);
            assert_eq!(view.state.params().width(), 3.0);
            assert_eq!(view.state.selected_index(), None);

            let geometry = view.geometry();
            assert_eq!(geometry.sum.rectangles.len(), 10);
            assert_eq!(geometry.x_ticks.len(), 7);
        })
        .unwrap();
}

#[gpui::test]
fn test_parameter_change_clears_selection(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| RiemannView::new(cx));

    window
        .update(cx, |view, _window, cx| {
            view.select_rectangle(3, cx);
            assert_eq!(view.state.selected_index(), Some(3));
            assert!(view.scene().find_group("selection").is_some());

            view.set_count(5, cx);
            assert_eq!(view.state.selected_index(), None);
            assert!(view.scene().find_group("selection").is_none());
            assert_eq!(view.geometry().sum.rectangles.len(), 5);
        })
        .unwrap();
}

#[gpui::test]
fn test_canvas_click_toggles_rectangle(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| RiemannView::new(cx));

    window
        .update(cx, |view, _window, cx| {
            // Last of ten rectangles over [0, 3]: x 508..560, y 100.8..360.
            let inside = Point::new(530.0, 300.0);
            assert_eq!(view.click_canvas_point(inside, cx), Some(9));
            assert_eq!(view.state.selected_index(), Some(9));

            assert_eq!(view.click_canvas_point(inside, cx), Some(9));
            assert_eq!(view.state.selected_index(), None);

            assert_eq!(view.click_canvas_point(Point::new(5.0, 5.0), cx), None);
            assert_eq!(view.state.selected_index(), None);
        })
        .unwrap();
}

#[gpui::test]
fn test_width_is_clamped(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| RiemannView::with_config(ChartConfig::default(), cx));

    window
        .update(cx, |view, _window, cx| {
            view.set_width(50.0, cx);
            assert_eq!(view.state.params().width(), 20.0);
            assert_eq!(view.geometry().transform.y_domain, (0.0, 400.0));
        })
        .unwrap();
}

#[gpui::test]
fn test_material_view_hover(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| {
        MaterialChartView::new(MaterialChart::with_defaults().unwrap(), cx)
    });

    window
        .update(cx, |view, _window, cx| {
            assert_eq!(view.hover, None);

            let x = view.chart.transform.map_x(1.501);
            view.set_hover_x(Some(x), cx);
            assert_eq!(view.hover, Some(4));

            view.set_hover_x(Some(0.0), cx);
            assert_eq!(view.hover, None);

            view.set_hover_x(Some(x), cx);
            view.set_hover_x(None, cx);
            assert_eq!(view.hover, None);
        })
        .unwrap();
}

#[gpui::test]
fn test_step_actions_reach_the_view(cx: &mut TestAppContext) {
    let window = cx.add_window(|_window, cx| RiemannView::new(cx));

    window
        .update(cx, |view, window, cx| {
            view.select_rectangle(2, cx);
            window.focus(&view.focus_handle(cx));
        })
        .unwrap();

    cx.dispatch_action(window.into(), IncreaseCount);
    cx.dispatch_action(window.into(), DecreaseWidth);

    window
        .update(cx, |view, _window, cx| {
            assert_eq!(view.state.params().n(), 11);
            assert_eq!(view.state.params().width(), 2.0);
            assert_eq!(view.state.selected_index(), None);

            // Steps clamp at the lower bounds.
            view.step_width(-5, cx);
            assert_eq!(view.state.params().width(), 1.0);
            view.step_count(-50, cx);
            assert_eq!(view.state.params().n(), 1);
        })
        .unwrap();
}
