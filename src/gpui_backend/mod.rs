//! GPUI integration for gpui_orbitplot.
//!
//! [`GpuiCanvas`] implements the chart [`Canvas`](crate::render::Canvas) on a
//! GPUI window; [`GpuiChartView`] is a minimal view that sizes a shared chart
//! to its bounds and paints it.

mod paint;
mod view;

pub use paint::GpuiCanvas;
pub use view::GpuiChartView;
