//! Data series: raw samples, bounds and normalized/draw-ready buffers.
//!
//! A series is created detached. Attaching it to a chart moves it into the
//! chart, which records itself as the series' parent and renormalizes every
//! member against the aggregate bounds. Detaching hands the series back with
//! its parent cleared.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, Vec3};

use crate::bounds::{Bounds2D, Bounds3D};
use crate::colormap::Colormap;
use crate::datasource::{Layout, Samples2D, Samples3D};
use crate::error::{ChartError, Result};
use crate::geom::ScreenPoint;
use crate::render::{Color, LineStyle, MarkerShape, MarkerStyle};

static SERIES_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
static CHART_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Default stroke width and marker size in pixels.
const DEFAULT_WIDTH: f32 = 2.0;

/// Unique identifier for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesId(u64);

impl SeriesId {
    fn next() -> Self {
        Self(SERIES_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unique identifier for a chart, recorded as a series' parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(u64);

impl ChartId {
    pub(crate) fn next() -> Self {
        Self(CHART_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// 2D series rendering kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    /// Polyline drawn as disconnected segments.
    Line(LineStyle),
    /// Point sprites.
    Points(MarkerStyle),
}

/// 3D series rendering kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind3D {
    /// Polyline drawn as disconnected segments.
    Line(LineStyle),
    /// Point sprites.
    Points(MarkerStyle),
    /// Height-field mesh over a `width x height` vertex grid.
    Surface {
        /// Vertices per grid row.
        width: usize,
        /// Number of grid rows.
        height: usize,
        /// Palette keyed on normalized Z.
        colormap: Colormap,
    },
}

impl SeriesKind3D {
    fn layout(&self) -> Layout {
        match self {
            Self::Line(_) => Layout::Segments,
            Self::Points(_) | Self::Surface { .. } => Layout::Points,
        }
    }

    /// Representative color, used by legends.
    pub fn color(&self) -> Color {
        match self {
            Self::Line(style) => style.color,
            Self::Points(style) => style.color,
            Self::Surface { colormap, .. } => colormap.color_norm(0.5),
        }
    }
}

impl SeriesKind {
    fn layout(&self) -> Layout {
        match self {
            Self::Line(_) => Layout::Segments,
            Self::Points(_) => Layout::Points,
        }
    }

    /// Series color, used by legends.
    pub fn color(&self) -> Color {
        match self {
            Self::Line(style) => style.color,
            Self::Points(style) => style.color,
        }
    }
}

fn point_style(color: Color) -> MarkerStyle {
    MarkerStyle {
        color,
        size: DEFAULT_WIDTH,
        shape: MarkerShape::Square,
    }
}

/// A 2D data series.
#[derive(Debug, Clone)]
pub struct Series2D {
    id: SeriesId,
    name: Option<String>,
    kind: SeriesKind,
    data: Samples2D,
    bounds: Bounds2D,
    vertices_norm: Vec<Vec2>,
    points: Vec<ScreenPoint>,
    parent: Option<ChartId>,
}

impl Series2D {
    fn with_data(kind: SeriesKind, data: Samples2D) -> Self {
        let mut series = Self {
            id: SeriesId::next(),
            name: None,
            kind,
            data,
            bounds: Bounds2D::NONE,
            vertices_norm: Vec::new(),
            points: Vec::new(),
            parent: None,
        };
        series.update_bounds();
        series
    }

    /// Create a line series through the given samples.
    pub fn line(x: &[f64], y: &[f64], color: Color) -> Result<Self> {
        let kind = SeriesKind::Line(LineStyle::new(color, DEFAULT_WIDTH));
        Ok(Self::with_data(kind, Samples2D::from_columns(kind.layout(), [x, y])?))
    }

    /// Create an empty line series that accepts up to `capacity` samples.
    pub fn line_with_capacity(capacity: usize, color: Color) -> Self {
        let kind = SeriesKind::Line(LineStyle::new(color, DEFAULT_WIDTH));
        Self::with_data(kind, Samples2D::with_capacity(kind.layout(), capacity))
    }

    /// Create a point series from the given samples.
    pub fn points(x: &[f64], y: &[f64], color: Color) -> Result<Self> {
        let kind = SeriesKind::Points(point_style(color));
        Ok(Self::with_data(kind, Samples2D::from_columns(kind.layout(), [x, y])?))
    }

    /// Create an empty point series that accepts up to `capacity` samples.
    pub fn points_with_capacity(capacity: usize, color: Color) -> Self {
        let kind = SeriesKind::Points(point_style(color));
        Self::with_data(kind, Samples2D::with_capacity(kind.layout(), capacity))
    }

    /// Set the legend name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the line or marker style. The layout of the kind must match.
    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        if kind.layout() == self.kind.layout() {
            self.kind = kind;
        } else {
            tracing::warn!(id = ?self.id, "ignoring series kind with a different layout");
        }
        self
    }

    /// Series identifier.
    pub fn id(&self) -> SeriesId {
        self.id
    }

    /// Legend name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rendering kind.
    pub fn kind(&self) -> &SeriesKind {
        &self.kind
    }

    /// Raw sample storage.
    pub fn data(&self) -> &Samples2D {
        &self.data
    }

    /// Bounds of the series' own samples.
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Slot coordinates rescaled against the last bounds given.
    pub fn vertices_norm(&self) -> &[Vec2] {
        &self.vertices_norm
    }

    /// Pixel positions produced by the last chart update.
    pub fn screen_points(&self) -> &[ScreenPoint] {
        &self.points
    }

    /// Chart this series is attached to.
    pub fn parent(&self) -> Option<ChartId> {
        self.parent
    }

    /// Overwrite the samples and recompute bounds.
    ///
    /// On an attached series, go through the chart so it can refresh.
    pub fn copy_values(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        self.data.copy_from([x, y])?;
        self.update_bounds();
        Ok(())
    }

    /// Recompute bounds from the samples and renormalize against them.
    pub fn update_bounds(&mut self) {
        self.bounds = Bounds2D {
            x: self.data.range(0),
            y: self.data.range(1),
        };
        self.normalize(self.bounds);
    }

    /// Rescale every slot into the unit square of `bounds`.
    pub fn normalize(&mut self, bounds: Bounds2D) {
        self.vertices_norm.clear();
        if self.data.is_empty() {
            return;
        }
        let data = &self.data;
        self.vertices_norm.extend((0..data.slot_count()).map(|i| {
            let [x, y] = data.slot(i);
            bounds.normalize(x, y)
        }));
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ChartId>) {
        self.parent = parent;
    }

    pub(crate) fn project(&mut self, map: impl Fn(Vec2) -> ScreenPoint) {
        self.points.clear();
        self.points.extend(self.vertices_norm.iter().map(|v| map(*v)));
    }
}

/// A 3D data series.
#[derive(Debug, Clone)]
pub struct Series3D {
    id: SeriesId,
    name: Option<String>,
    kind: SeriesKind3D,
    data: Samples3D,
    bounds: Bounds3D,
    vertices_norm: Vec<Vec3>,
    mesh: Mesh,
    parent: Option<ChartId>,
}

/// Draw-ready buffers rebuilt on every chart update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Pixel positions.
    pub points: Vec<ScreenPoint>,
    /// Per-vertex colors (surfaces only).
    pub colors: Vec<Color>,
    /// Triangle list indices (surfaces only).
    pub indices: Vec<u32>,
}

impl Mesh {
    pub(crate) fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
        self.indices.clear();
    }
}

impl Series3D {
    fn with_data(kind: SeriesKind3D, data: Samples3D) -> Self {
        let mut series = Self {
            id: SeriesId::next(),
            name: None,
            kind,
            data,
            bounds: Bounds3D::NONE,
            vertices_norm: Vec::new(),
            mesh: Mesh::default(),
            parent: None,
        };
        series.update_bounds();
        series
    }

    /// Create a line series through the given samples.
    pub fn line(x: &[f64], y: &[f64], z: &[f64], color: Color) -> Result<Self> {
        let kind = SeriesKind3D::Line(LineStyle::new(color, DEFAULT_WIDTH));
        Ok(Self::with_data(kind, Samples3D::from_columns(kind.layout(), [x, y, z])?))
    }

    /// Create an empty line series that accepts up to `capacity` samples.
    pub fn line_with_capacity(capacity: usize, color: Color) -> Self {
        let kind = SeriesKind3D::Line(LineStyle::new(color, DEFAULT_WIDTH));
        Self::with_data(kind, Samples3D::with_capacity(kind.layout(), capacity))
    }

    /// Create a point series from the given samples.
    pub fn points(x: &[f64], y: &[f64], z: &[f64], color: Color) -> Result<Self> {
        let kind = SeriesKind3D::Points(point_style(color));
        Ok(Self::with_data(kind, Samples3D::from_columns(kind.layout(), [x, y, z])?))
    }

    /// Create an empty point series that accepts up to `capacity` samples.
    pub fn points_with_capacity(capacity: usize, color: Color) -> Self {
        let kind = SeriesKind3D::Points(point_style(color));
        Self::with_data(kind, Samples3D::with_capacity(kind.layout(), capacity))
    }

    /// Create a surface from a row-major `width x height` vertex grid.
    ///
    /// Vertex `(i, j)` lives at index `i * height + j`.
    pub fn surface(x: &[f64], y: &[f64], z: &[f64], width: usize, height: usize) -> Result<Self> {
        check_grid(width, height, x.len())?;
        let kind = SeriesKind3D::Surface {
            width,
            height,
            colormap: Colormap::default(),
        };
        Ok(Self::with_data(kind, Samples3D::from_columns(kind.layout(), [x, y, z])?))
    }

    /// Create an empty surface; fill it with [`Series3D::copy_values`].
    pub fn surface_with_capacity(width: usize, height: usize) -> Result<Self> {
        check_grid(width, height, width.saturating_mul(height))?;
        let kind = SeriesKind3D::Surface {
            width,
            height,
            colormap: Colormap::default(),
        };
        Ok(Self::with_data(kind, Samples3D::with_capacity(kind.layout(), width * height)))
    }

    /// Set the legend name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the surface palette. No effect on lines and points.
    pub fn with_colormap(mut self, map: Colormap) -> Self {
        if let SeriesKind3D::Surface { colormap, .. } = &mut self.kind {
            *colormap = map;
        }
        self
    }

    /// Replace the line width of a line series.
    pub fn with_line_width(mut self, width: f32) -> Self {
        if let SeriesKind3D::Line(style) = &mut self.kind {
            style.width = width;
        }
        self
    }

    /// Series identifier.
    pub fn id(&self) -> SeriesId {
        self.id
    }

    /// Legend name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rendering kind.
    pub fn kind(&self) -> &SeriesKind3D {
        &self.kind
    }

    /// Raw sample storage.
    pub fn data(&self) -> &Samples3D {
        &self.data
    }

    /// Bounds of the series' own samples.
    pub fn bounds(&self) -> Bounds3D {
        self.bounds
    }

    /// Slot coordinates rescaled against the last bounds given.
    pub fn vertices_norm(&self) -> &[Vec3] {
        &self.vertices_norm
    }

    /// Draw-ready buffers produced by the last chart update.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Chart this series is attached to.
    pub fn parent(&self) -> Option<ChartId> {
        self.parent
    }

    /// Overwrite the samples and recompute bounds.
    ///
    /// Surfaces only accept a full `width x height` grid.
    pub fn copy_values(&mut self, x: &[f64], y: &[f64], z: &[f64]) -> Result<()> {
        if let SeriesKind3D::Surface { width, height, .. } = self.kind {
            check_grid(width, height, x.len())?;
        }
        self.data.copy_from([x, y, z])?;
        self.update_bounds();
        Ok(())
    }

    /// Recompute bounds from the samples and renormalize against them.
    pub fn update_bounds(&mut self) {
        self.bounds = Bounds3D {
            x: self.data.range(0),
            y: self.data.range(1),
            z: self.data.range(2),
        };
        self.normalize(self.bounds);
    }

    /// Rescale every slot into the unit cube of `bounds`.
    pub fn normalize(&mut self, bounds: Bounds3D) {
        self.vertices_norm.clear();
        if self.data.is_empty() {
            return;
        }
        let data = &self.data;
        self.vertices_norm.extend((0..data.slot_count()).map(|i| {
            let [x, y, z] = data.slot(i);
            bounds.normalize(x, y, z)
        }));
    }

    pub(crate) fn set_parent(&mut self, parent: Option<ChartId>) {
        self.parent = parent;
    }

    /// Split borrow of the normalized vertices and the draw buffers.
    pub(crate) fn geometry_mut(&mut self) -> (&SeriesKind3D, &[Vec3], &mut Mesh) {
        (&self.kind, &self.vertices_norm, &mut self.mesh)
    }
}

fn check_grid(width: usize, height: usize, len: usize) -> Result<()> {
    if width < 2 || height < 2 || width.checked_mul(height) != Some(len) {
        return Err(ChartError::InvalidGrid { width, height, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_normalizes_against_own_bounds() {
        let series = Series2D::line(&[0.0, 1.0, 2.0], &[0.0, 5.0, 0.0], Color::BLUE).expect("valid");
        let ys: Vec<f32> = series.vertices_norm().iter().map(|v| v.y).collect();
        assert_eq!(ys, vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(series.bounds(), Bounds2D::new(0.0, 2.0, 0.0, 5.0));
        assert!(series.parent().is_none());
    }

    #[test]
    fn capacity_series_starts_empty() {
        let mut series = Series2D::line_with_capacity(4, Color::RED);
        assert!(!series.bounds().is_defined());
        assert!(series.vertices_norm().is_empty());
        assert_eq!(series.data().slot_count(), 6);

        series.copy_values(&[1.0, 3.0], &[2.0, 2.0]).expect("fits");
        assert_eq!(series.vertices_norm().len(), 6);
        let last = series.vertices_norm()[5];
        assert_eq!(last, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn failed_copy_leaves_series_unchanged() {
        let mut series = Series2D::points_with_capacity(2, Color::BLACK);
        series.copy_values(&[0.0, 1.0], &[1.0, 2.0]).expect("fits");
        let before = series.bounds();
        assert!(series.copy_values(&[0.0, 1.0, 2.0], &[0.0; 3]).is_err());
        assert!(series.copy_values(&[0.0], &[0.0, 1.0]).is_err());
        assert_eq!(series.bounds(), before);
    }

    #[test]
    fn surface_rejects_bad_grids() {
        let values = [0.0; 6];
        assert!(Series3D::surface(&values, &values, &values, 2, 3).is_ok());
        assert_eq!(
            Series3D::surface(&values, &values, &values, 3, 3).err(),
            Some(ChartError::InvalidGrid {
                width: 3,
                height: 3,
                len: 6
            })
        );
        assert!(Series3D::surface_with_capacity(1, 4).is_err());

        let mut surface = Series3D::surface_with_capacity(2, 2).expect("valid grid");
        assert!(surface.copy_values(&[0.0; 3], &[0.0; 3], &[0.0; 3]).is_err());
        surface
            .copy_values(&[0.0, 0.0, 1.0, 1.0], &[0.0, 1.0, 0.0, 1.0], &[1.0; 4])
            .expect("full grid");
        assert_eq!(surface.bounds().z.min, 1.0);
    }

    #[test]
    fn series_ids_are_unique() {
        let a = Series3D::points_with_capacity(1, Color::RED);
        let b = Series3D::points_with_capacity(1, Color::RED);
        assert_ne!(a.id(), b.id());
    }
}
