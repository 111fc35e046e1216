use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_orbitplot::{GpuiChartView, demo};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "gpui_orbitplot=debug".into()),
        )
        .init();

    let chart = match demo::demo_chart2d() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to build demo chart: {err}");
            return;
        }
    };

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(800.0), px(600.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_, cx| cx.new(|_| GpuiChartView::new(chart)))
            .unwrap();
    });
}
