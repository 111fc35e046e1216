use gpui::prelude::*;
use gpui::{Context, Window, canvas, div};

use crate::render::Color;
use crate::shared::{Chart, SharedChart};

use super::paint::{GpuiCanvas, to_hsla};

/// GPUI view drawing a shared chart, resized to fill its bounds.
///
/// Data producers mutate the chart through the [`SharedChart`] handle and
/// then call `cx.notify()` on the view entity to repaint.
pub struct GpuiChartView<C: Chart + 'static> {
    chart: SharedChart<C>,
    background: Color,
}

impl<C: Chart + 'static> GpuiChartView<C> {
    /// Create a view over a chart.
    pub fn new(chart: C) -> Self {
        Self::with_handle(SharedChart::new(chart))
    }

    /// Create a view over an existing shared handle.
    pub fn with_handle(chart: SharedChart<C>) -> Self {
        Self {
            chart,
            background: Color::WHITE,
        }
    }

    /// Set the background fill.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Get a handle for reading or mutating the chart.
    pub fn chart_handle(&self) -> SharedChart<C> {
        self.chart.clone()
    }
}

impl<C: Chart + 'static> Render for GpuiChartView<C> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let resize = self.chart.clone();
        let paint = self.chart.clone();

        div().size_full().bg(to_hsla(self.background)).child(
            canvas(
                move |bounds, _, _| {
                    resize.resize(f32::from(bounds.size.width), f32::from(bounds.size.height));
                    bounds.origin
                },
                move |_, origin, window, cx| {
                    let mut target = GpuiCanvas::new(window, cx, origin);
                    paint.draw(&mut target);
                },
            )
            .size_full(),
        )
    }
}
