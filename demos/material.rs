use gpui::prelude::*;
use gpui::*;
use riemann_chart::{MaterialChart, MaterialChartView};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let chart = MaterialChart::with_defaults().expect("failed to build material chart");

    Application::new().run(move |cx: &mut App| {
        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| MaterialChartView::new(chart, cx))
        })
        .expect("failed to open window");
    });
}
