use gpui::prelude::*;
use gpui::*;
use riemann_chart::chart_view::{
    ClearSelection, DecreaseCount, DecreaseWidth, IncreaseCount, IncreaseWidth,
};
use riemann_chart::{ChartConfig, RiemannView};

struct DemoApp {
    chart: Entity<RiemannView>,
}

impl DemoApp {
    pub fn new(config: ChartConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let chart = cx.new(|cx| RiemannView::with_config(config, cx));
        let focus = chart.read(cx).focus_handle(cx);
        window.focus(&focus);
        Self { chart }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::white())
            .child(self.chart.clone())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional JSON config path as the first argument.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).expect("failed to read config file");
            ChartConfig::from_json(&json).expect("invalid chart config")
        }
        None => ChartConfig::default(),
    };

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("up", IncreaseCount, None),
            KeyBinding::new("down", DecreaseCount, None),
            KeyBinding::new("right", IncreaseWidth, None),
            KeyBinding::new("left", DecreaseWidth, None),
            KeyBinding::new("escape", ClearSelection, None),
        ]);

        cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| DemoApp::new(config, window, cx))
        })
        .expect("failed to open window");
    });
}
