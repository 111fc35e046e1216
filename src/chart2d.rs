//! 2D chart: aggregate bounds, frame geometry and per-series buffers.

use glam::Vec2;

use crate::axis::{AxisConfig, AxisTitle, Label};
use crate::bounds::{Axis, Bounds2D};
use crate::error::{ChartError, Result};
use crate::geom::ScreenPoint;
use crate::render::{Canvas, MarkerStyle, RenderList, TextStyle};
use crate::series::{ChartId, Series2D, SeriesId, SeriesKind};
use crate::style::Theme;
use crate::transform::{PlotTransform, to_pixels};

/// Default viewport size in pixels.
pub const DEFAULT_SIZE: (f32, f32) = (800.0, 600.0);

/// Legend anchor in normalized viewport coordinates.
const LEGEND_ANCHOR: Vec2 = Vec2::new(0.8, 0.7);
/// Horizontal gap between a legend marker and its name, in pixels.
const LEGEND_TEXT_GAP: f32 = 10.0;

/// Derived draw buffers, reused across updates.
#[derive(Debug, Clone, Default)]
struct Frame {
    grid: Vec<ScreenPoint>,
    axes: Vec<ScreenPoint>,
    ticks: Vec<ScreenPoint>,
    labels: Vec<Label>,
    titles: [ScreenPoint; 2],
    legend: ScreenPoint,
}

/// A 2D chart owning its series.
///
/// Every membership change, size change, or explicit [`Chart2D::update`]
/// recomputes the aggregate bounds, renormalizes all series, and rebuilds
/// every draw buffer.
#[derive(Debug, Clone)]
pub struct Chart2D {
    id: ChartId,
    theme: Theme,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    width: f32,
    height: f32,
    series: Vec<Series2D>,
    bounds: Bounds2D,
    frame: Frame,
}

impl Chart2D {
    /// Create an empty chart with default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> Chart2DBuilder {
        Chart2DBuilder::default()
    }

    /// Chart identifier, recorded as the parent of attached series.
    pub fn id(&self) -> ChartId {
        self.id
    }

    /// Access the current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme and rebuild.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.update();
    }

    /// Access the X axis configuration.
    pub fn x_axis(&self) -> &AxisConfig {
        &self.x_axis
    }

    /// Access the Y axis configuration.
    pub fn y_axis(&self) -> &AxisConfig {
        &self.y_axis
    }

    /// Set the X axis title (text or image).
    pub fn set_x_title(&mut self, title: impl Into<AxisTitle>) {
        self.x_axis.set_title(title);
    }

    /// Set the Y axis title (text or image).
    pub fn set_y_title(&mut self, title: impl Into<AxisTitle>) {
        self.y_axis.set_title(title);
    }

    /// Viewport size in pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Resize the viewport and rebuild.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.update();
    }

    /// Aggregate bounds of all attached series, or the unit box when empty.
    pub fn bounds(&self) -> Bounds2D {
        self.bounds
    }

    /// Attached series in insertion (draw and legend) order.
    pub fn series(&self) -> &[Series2D] {
        &self.series
    }

    /// Find an attached series.
    pub fn series_by_id(&self, id: SeriesId) -> Option<&Series2D> {
        self.series.iter().find(|s| s.id() == id)
    }

    /// Attach a series and rebuild.
    pub fn attach(&mut self, mut series: Series2D) -> SeriesId {
        let id = series.id();
        series.set_parent(Some(self.id));
        self.series.push(series);
        tracing::debug!(chart = ?self.id, series = ?id, count = self.series.len(), "attached series");
        self.update();
        id
    }

    /// Detach the series at `index`, returning it with its parent cleared.
    pub fn detach_at(&mut self, index: usize) -> Option<Series2D> {
        if index >= self.series.len() {
            return None;
        }
        let mut series = self.series.remove(index);
        series.set_parent(None);
        tracing::debug!(chart = ?self.id, series = ?series.id(), "detached series");
        self.update();
        Some(series)
    }

    /// Detach a series by id.
    pub fn detach(&mut self, id: SeriesId) -> Result<Series2D> {
        let index = self.index_of(id)?;
        self.detach_at(index).ok_or(ChartError::SeriesNotFound(id))
    }

    /// Detach every series, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<Series2D> {
        let mut detached = std::mem::take(&mut self.series);
        for series in &mut detached {
            series.set_parent(None);
        }
        tracing::debug!(chart = ?self.id, count = detached.len(), "cleared series");
        self.update();
        detached
    }

    /// Mutate an attached series, then propagate its new bounds and rebuild.
    pub fn update_series<R>(&mut self, id: SeriesId, f: impl FnOnce(&mut Series2D) -> R) -> Result<R> {
        let index = self.index_of(id)?;
        let series = &mut self.series[index];
        let result = f(series);
        series.update_bounds();
        self.update();
        Ok(result)
    }

    /// Overwrite the samples of an attached series and rebuild.
    /// Rejected writes leave the chart untouched.
    pub fn copy_values(&mut self, id: SeriesId, x: &[f64], y: &[f64]) -> Result<()> {
        let index = self.index_of(id)?;
        self.series[index].copy_values(x, y)?;
        self.update();
        Ok(())
    }

    fn index_of(&self, id: SeriesId) -> Result<usize> {
        self.series
            .iter()
            .position(|s| s.id() == id)
            .ok_or(ChartError::SeriesNotFound(id))
    }

    /// Recompute the aggregate bounds from the attached series.
    ///
    /// Returns whether they changed. Zero-span axes are reported once per change.
    pub fn update_bounds(&mut self) -> bool {
        let merged = self
            .series
            .iter()
            .fold(Bounds2D::NONE, |acc, s| Bounds2D::merge(acc, s.bounds()));
        let bounds = merged.or_unit();
        let changed = bounds != self.bounds;
        if changed && merged.is_defined() {
            for axis in [Axis::X, Axis::Y] {
                if !merged.axis(axis).is_valid() {
                    tracing::warn!(chart = ?self.id, ?axis, "zero-span axis, normalizing to 0.5");
                }
            }
        }
        self.bounds = bounds;
        changed
    }

    /// Renormalize every series against the aggregate bounds.
    pub fn normalize_series(&mut self) {
        for series in &mut self.series {
            series.normalize(self.bounds);
        }
    }

    /// Run the full pipeline: bounds, normalization, and every draw buffer.
    pub fn update(&mut self) {
        self.update_bounds();
        self.normalize_series();

        let transform = PlotTransform::new(self.width, self.height);
        let step = self.theme.grid_step();
        let divisions = self.theme.grid_divisions.max(1);
        let tick = self.theme.tick_length;
        let frame = &mut self.frame;

        frame.grid.clear();
        for k in 1..=divisions {
            let dv = k as f32 * step;
            frame.grid.extend([
                transform.apply_xy(dv, 0.0),
                transform.apply_xy(dv, 1.0),
                transform.apply_xy(0.0, dv),
                transform.apply_xy(1.0, dv),
            ]);
        }

        frame.axes.clear();
        let origin = transform.apply_xy(0.0, 0.0);
        frame.axes.extend([
            origin,
            transform.apply_xy(1.0, 0.0),
            origin,
            transform.apply_xy(0.0, 1.0),
        ]);

        frame.ticks.clear();
        frame.labels.clear();
        for k in 1..divisions {
            let dv = k as f32 * step;
            frame.ticks.extend([
                transform.apply_xy(dv, 0.0),
                transform.apply_xy(dv, -tick),
                transform.apply_xy(0.0, dv),
                transform.apply_xy(-tick, dv),
            ]);

            let x = self.bounds.tx(f64::from(dv));
            let y = self.bounds.ty(f64::from(dv));
            frame.labels.push(Label {
                value: x,
                text: self.x_axis.formatter().format(x),
                position: transform.apply_xy(dv - 0.05, -0.1),
            });
            frame.labels.push(Label {
                value: y,
                text: self.y_axis.formatter().format(y),
                position: transform.apply_xy(-0.15, dv),
            });
        }
        frame.titles = [transform.apply_xy(1.0, -0.1), transform.apply_xy(-0.1, 1.0)];
        frame.legend = to_pixels(LEGEND_ANCHOR, self.width, self.height);

        for series in &mut self.series {
            series.project(|v| transform.apply(v));
        }

        tracing::trace!(
            grid = self.frame.grid.len(),
            ticks = self.frame.ticks.len(),
            labels = self.frame.labels.len(),
            series = self.series.len(),
            "rebuilt 2d buffers"
        );
    }

    /// Grid line endpoints in pixels, one pair per line.
    pub fn grid_lines(&self) -> &[ScreenPoint] {
        &self.frame.grid
    }

    /// Axis line endpoints in pixels.
    pub fn axis_lines(&self) -> &[ScreenPoint] {
        &self.frame.axes
    }

    /// Tick mark endpoints in pixels.
    pub fn tick_marks(&self) -> &[ScreenPoint] {
        &self.frame.ticks
    }

    /// Tick labels, alternating X and Y.
    pub fn labels(&self) -> &[Label] {
        &self.frame.labels
    }

    /// X and Y title anchors in pixels.
    pub fn title_positions(&self) -> [ScreenPoint; 2] {
        self.frame.titles
    }

    /// Top-left legend row anchor in pixels.
    pub fn legend_position(&self) -> ScreenPoint {
        self.frame.legend
    }

    /// Issue the chart to a canvas.
    ///
    /// Order: grid, axes, labels, series, ticks, legend.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.draw_segments(&self.frame.grid, &self.theme.grid);
        canvas.draw_segments(&self.frame.axes, &self.theme.axes);
        self.draw_labels(canvas);
        for series in &self.series {
            draw_series(series, canvas);
        }
        canvas.draw_segments(&self.frame.ticks, &self.theme.ticks);
        self.draw_legend(canvas);
    }

    /// Record the chart into a render list.
    pub fn render(&self) -> RenderList {
        let mut list = RenderList::new();
        self.draw(&mut list);
        list
    }

    fn draw_labels(&self, canvas: &mut impl Canvas) {
        let style = &self.theme.labels;
        for label in &self.frame.labels {
            canvas.draw_text(&label.text, label.position, style);
        }
        for ((axis, fallback), position) in [(&self.x_axis, "X"), (&self.y_axis, "Y")]
            .into_iter()
            .zip(self.frame.titles)
        {
            match axis.title() {
                Some(AxisTitle::Image(image)) => canvas.draw_image(image, position),
                _ => canvas.draw_text(axis.title_text(fallback), position, style),
            }
        }
    }

    fn draw_legend(&self, canvas: &mut impl Canvas) {
        let mut anchor = self.frame.legend;
        for (index, series) in self.series.iter().enumerate() {
            let color = series.kind().color();
            canvas.draw_points(&[anchor], &MarkerStyle::new(color, self.theme.legend_marker_size));
            let name = match series.name() {
                Some(name) => name.to_string(),
                None => format!("series{index}"),
            };
            let style = TextStyle::new(color, self.theme.labels.size);
            canvas.draw_text(&name, anchor.offset(LEGEND_TEXT_GAP, 0.0), &style);
            anchor.y += self.theme.legend_row_spacing;
        }
    }
}

fn draw_series(series: &Series2D, canvas: &mut impl Canvas) {
    let points = series.screen_points();
    if points.is_empty() {
        return;
    }
    match series.kind() {
        SeriesKind::Line(style) => canvas.draw_segments(points, style),
        SeriesKind::Points(style) => canvas.draw_points(points, style),
    }
}

impl Default for Chart2D {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a 2D chart before construction.
#[derive(Debug)]
pub struct Chart2DBuilder {
    theme: Theme,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    size: (f32, f32),
    series: Vec<Series2D>,
}

impl Default for Chart2DBuilder {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            size: DEFAULT_SIZE,
            series: Vec::new(),
        }
    }
}

impl Chart2DBuilder {
    /// Set the theme used by the chart.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the X axis configuration.
    pub fn x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    /// Set the Y axis configuration.
    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    /// Set the viewport size in pixels.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = (width, height);
        self
    }

    /// Add a series to the chart.
    pub fn series(mut self, series: Series2D) -> Self {
        self.series.push(series);
        self
    }

    /// Build the chart and run the first update.
    pub fn build(self) -> Chart2D {
        let id = ChartId::next();
        let mut series = self.series;
        for s in &mut series {
            s.set_parent(Some(id));
        }
        let mut chart = Chart2D {
            id,
            theme: self.theme,
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            width: self.size.0,
            height: self.size.1,
            series,
            bounds: Bounds2D::UNIT,
            frame: Frame::default(),
        };
        chart.update();
        chart
    }
}
