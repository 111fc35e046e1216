//! gpui_orbitplot turns numeric series into draw-ready chart geometry.
//! 2D charts place lines and points inside a labelled frame; 3D charts orbit a
//! camera around colormapped height-field surfaces. Charts draw through the
//! [`Canvas`] capability, implemented for GPUI behind the `gpui` feature.

#![forbid(unsafe_code)]

pub mod axis;
pub mod bounds;
pub mod camera;
pub mod chart2d;
pub mod chart3d;
pub mod colorbar;
pub mod colormap;
pub mod datasource;
pub mod demo;
pub mod error;
pub mod geom;
pub mod render;
pub mod series;
pub mod shared;
pub mod style;
pub mod transform;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{AxisConfig, AxisFormatter, AxisTitle, Label};
pub use bounds::{Axis, Bounds2D, Bounds3D, DEGENERATE_NORM, Range};
pub use camera::Camera;
pub use chart2d::{Chart2D, Chart2DBuilder};
pub use chart3d::{Chart3D, Chart3DBuilder, SurfaceOrder, tessellate_surface};
pub use colorbar::Colorbar;
pub use colormap::{Colormap, MAP_SIZE};
pub use datasource::{Layout, Samples, Samples2D, Samples3D};
pub use error::{ChartError, Result};
pub use geom::{ScreenPoint, ScreenRect};
pub use render::{
    Canvas, Color, ImageHandle, LineStyle, MarkerShape, MarkerStyle, RenderCommand, RenderList,
    TextStyle, quad_indices,
};
pub use series::{ChartId, Mesh, Series2D, Series3D, SeriesId, SeriesKind, SeriesKind3D};
pub use shared::{Chart, SharedChart};
pub use style::Theme;
pub use transform::{PlotTransform, Projection, to_pixels};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiCanvas, GpuiChartView};
