use std::thread;
use std::time::Duration;

use gpui::{
    AppContext, Application, AsyncWindowContext, Bounds, Timer, WindowBounds, WindowOptions, px,
    size,
};
use gpui_orbitplot::{Chart3D, GpuiChartView, SharedChart, demo};
use tracing_subscriber::EnvFilter;

/// Azimuth change per worker tick, in degrees.
const ORBIT_STEP: f32 = 5.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "gpui_orbitplot=debug".into()),
        )
        .init();

    let chart = match demo::demo_chart3d() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to build demo chart: {err}");
            return;
        }
    };
    let handle = SharedChart::new(chart);
    spawn_worker(handle.clone());

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(800.0), px(600.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let view = cx.new(|_| GpuiChartView::with_handle(handle));

            // The worker only touches the chart; repaint on a frame timer.
            let view_for_task = view.clone();
            window
                .spawn(cx, move |cx: &mut AsyncWindowContext| {
                    let mut cx = cx.clone();
                    async move {
                        loop {
                            Timer::after(Duration::from_millis(16)).await;
                            cx.update(|_, cx| {
                                view_for_task.update(cx, |_view, view_cx| view_cx.notify());
                            })
                            .ok();
                        }
                    }
                })
                .detach();

            view
        })
        .unwrap();
    });
}

/// Stream a drifting peaks surface into the chart and swing the camera
/// back and forth across the azimuth range.
fn spawn_worker(chart: SharedChart<Chart3D>) {
    thread::spawn(move || {
        let Some(id) = chart.read(|chart| chart.series().first().map(|s| s.id())) else {
            return;
        };
        let mut step = ORBIT_STEP;
        let mut phase = 0.0_f64;
        loop {
            thread::sleep(Duration::from_millis(50));
            phase += 0.05;
            let shift = 0.5 * phase.sin();
            let (x, y, z, _, _) = demo::sample_grid(|x, y| demo::peaks(x - shift, y));

            let result = chart.write(|chart| {
                let azimuth = chart.camera().azimuth() + step;
                if !(-180.0..=180.0).contains(&azimuth) {
                    step = -step;
                }
                chart.orbit(step, 0.0);
                chart.copy_values(id, &x, &y, &z)
            });
            if let Err(err) = result {
                tracing::error!(%err, "surface update rejected, stopping worker");
                return;
            }
        }
    });
}
