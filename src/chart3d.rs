//! 3D chart: orbit camera, projected frame geometry, and surface meshes.

use glam::Vec3;

use crate::axis::{AxisConfig, AxisTitle, Label};
use crate::bounds::Bounds3D;
use crate::camera::Camera;
use crate::chart2d::DEFAULT_SIZE;
use crate::colorbar::Colorbar;
use crate::colormap::Colormap;
use crate::error::{ChartError, Result};
use crate::geom::ScreenPoint;
use crate::render::{Canvas, RenderList, quad_indices};
use crate::series::{ChartId, Mesh, Series3D, SeriesId, SeriesKind3D};
use crate::style::Theme;
use crate::transform::Projection;

/// Derived draw buffers, reused across updates.
#[derive(Debug, Clone, Default)]
struct Frame {
    grid: Vec<ScreenPoint>,
    axes: Vec<ScreenPoint>,
    ticks: Vec<ScreenPoint>,
    labels: Vec<Label>,
    titles: [ScreenPoint; 3],
}

/// A 3D chart owning its series and orbit camera.
///
/// Membership changes, camera changes made through the chart, and explicit
/// [`Chart3D::update`] calls rebuild every buffer. After mutating the camera
/// through [`Chart3D::camera_mut`], call `update` yourself.
#[derive(Debug, Clone)]
pub struct Chart3D {
    id: ChartId,
    theme: Theme,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    z_axis: AxisConfig,
    width: f32,
    height: f32,
    camera: Camera,
    colorbar: Colorbar,
    series: Vec<Series3D>,
    bounds: Bounds3D,
    frame: Frame,
}

impl Chart3D {
    /// Create an empty chart with default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> Chart3DBuilder {
        Chart3DBuilder::default()
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
        self.colorbar.set_colormap(theme.colormap);
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

    /// Access the Z axis configuration.
    pub fn z_axis(&self) -> &AxisConfig {
        &self.z_axis
    }

    /// Set the X axis title.
    pub fn set_x_title(&mut self, title: impl Into<String>) {
        self.x_axis.set_title(title.into());
    }

    /// Set the Y axis title.
    pub fn set_y_title(&mut self, title: impl Into<String>) {
        self.y_axis.set_title(title.into());
    }

    /// Set the Z axis title.
    pub fn set_z_title(&mut self, title: impl Into<String>) {
        self.z_axis.set_title(title.into());
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

    /// Access the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Access the camera mutably. Buffers are stale until the next update.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Rotate the camera by angle deltas in degrees and rebuild.
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.camera.orbit(d_azimuth, d_elevation);
        self.update();
    }

    /// Whether the camera moved since the last update.
    pub fn needs_redraw(&self) -> bool {
        self.camera.resync()
    }

    /// Access the colorbar.
    pub fn colorbar(&self) -> &Colorbar {
        &self.colorbar
    }

    /// Switch the colorbar palette, rebuilding if it changed.
    pub fn set_colormap(&mut self, colormap: Colormap) {
        self.theme.colormap = colormap;
        if self.colorbar.set_colormap(colormap) {
            self.update();
        }
    }

    /// Aggregate bounds of all attached series, or the unit cube when empty.
    pub fn bounds(&self) -> Bounds3D {
        self.bounds
    }

    /// Attached series in insertion (draw) order.
    pub fn series(&self) -> &[Series3D] {
        &self.series
    }

    /// Find an attached series.
    pub fn series_by_id(&self, id: SeriesId) -> Option<&Series3D> {
        self.series.iter().find(|s| s.id() == id)
    }

    /// Attach a series and rebuild.
    pub fn attach(&mut self, mut series: Series3D) -> SeriesId {
        let id = series.id();
        series.set_parent(Some(self.id));
        self.series.push(series);
        tracing::debug!(chart = ?self.id, series = ?id, count = self.series.len(), "attached series");
        self.update();
        id
    }

    /// Detach the series at `index`, returning it with its parent cleared.
    pub fn detach_at(&mut self, index: usize) -> Option<Series3D> {
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
    pub fn detach(&mut self, id: SeriesId) -> Result<Series3D> {
        let index = self.index_of(id)?;
        self.detach_at(index).ok_or(ChartError::SeriesNotFound(id))
    }

    /// Detach every series, returning them in insertion order.
    pub fn clear(&mut self) -> Vec<Series3D> {
        let mut detached = std::mem::take(&mut self.series);
        for series in &mut detached {
            series.set_parent(None);
        }
        tracing::debug!(chart = ?self.id, count = detached.len(), "cleared series");
        self.update();
        detached
    }

    /// Mutate an attached series, then propagate its new bounds and rebuild.
    pub fn update_series<R>(&mut self, id: SeriesId, f: impl FnOnce(&mut Series3D) -> R) -> Result<R> {
        let index = self.index_of(id)?;
        let series = &mut self.series[index];
        let result = f(series);
        series.update_bounds();
        self.update();
        Ok(result)
    }

    /// Overwrite the samples of an attached series and rebuild.
    /// Rejected writes leave the chart untouched.
    pub fn copy_values(&mut self, id: SeriesId, x: &[f64], y: &[f64], z: &[f64]) -> Result<()> {
        let index = self.index_of(id)?;
        self.series[index].copy_values(x, y, z)?;
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
            .fold(Bounds3D::NONE, |acc, s| Bounds3D::merge(acc, s.bounds()));
        let bounds = merged.or_unit();
        let changed = bounds != self.bounds;
        if changed && merged.is_defined() {
            for axis in merged.degenerate_axes() {
                tracing::warn!(chart = ?self.id, ?axis, "zero-span axis, normalizing to 0.5");
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

    /// Run the full pipeline and clear the camera's resync flag.
    pub fn update(&mut self) {
        self.update_bounds();
        self.normalize_series();

        let projection = Projection::new(self.camera.view(), self.width, self.height);
        self.update_frame(&projection);

        for series in &mut self.series {
            let (kind, vertices, mesh) = series.geometry_mut();
            match *kind {
                SeriesKind3D::Line(_) | SeriesKind3D::Points(_) => {
                    mesh.clear();
                    mesh.points.extend(vertices.iter().map(|v| projection.apply(*v)));
                }
                SeriesKind3D::Surface {
                    width,
                    height,
                    colormap,
                } => tessellate_surface(
                    vertices,
                    width,
                    height,
                    colormap,
                    SurfaceOrder::from_camera(&self.camera),
                    &projection,
                    mesh,
                ),
            }
        }

        self.colorbar
            .update(self.bounds.z, self.width, self.height, self.z_axis.formatter());
        self.camera.clear_resync();

        tracing::trace!(
            grid = self.frame.grid.len(),
            ticks = self.frame.ticks.len(),
            labels = self.frame.labels.len(),
            series = self.series.len(),
            "rebuilt 3d buffers"
        );
    }

    fn update_frame(&mut self, projection: &Projection) {
        let step = self.theme.grid_step();
        let divisions = self.theme.grid_divisions.max(1);
        let tick = self.theme.tick_length;
        let p = |x: f32, y: f32, z: f32| projection.apply_xyz(x, y, z);
        let frame = &mut self.frame;

        frame.grid.clear();
        // xy plane at z = 0
        for k in 1..=divisions {
            let dv = k as f32 * step;
            frame.grid.extend([p(dv, 0.0, 0.0), p(dv, 1.0, 0.0), p(0.0, dv, 0.0), p(1.0, dv, 0.0)]);
        }
        // back walls, stepping along z
        for k in 1..=divisions {
            let dv = k as f32 * step;
            frame.grid.extend([p(0.0, 1.0, dv), p(1.0, 1.0, dv), p(1.0, 0.0, dv), p(1.0, 1.0, dv)]);
        }
        // back walls, stepping along x and y
        for k in 1..=divisions {
            let dv = k as f32 * step;
            frame.grid.extend([p(dv, 1.0, 0.0), p(dv, 1.0, 1.0), p(1.0, dv, 0.0), p(1.0, dv, 1.0)]);
        }

        frame.axes.clear();
        let origin = p(0.0, 0.0, 0.0);
        let y_end = p(0.0, 1.0, 0.0);
        frame.axes.extend([origin, p(1.0, 0.0, 0.0), origin, y_end, y_end, p(0.0, 1.0, 1.0)]);

        frame.ticks.clear();
        frame.labels.clear();
        for k in 1..divisions {
            let dv = k as f32 * step;
            frame.ticks.extend([
                p(dv, 0.0, 0.0),
                p(dv, -tick, 0.0),
                p(0.0, dv, 0.0),
                p(-tick, dv, 0.0),
                p(0.0, 1.0, dv),
                p(-tick, 1.0 + tick, dv),
            ]);

            let t = f64::from(dv);
            let anchors = [p(dv, -0.1, 0.0), p(-0.1, dv, 0.0), p(-0.1, 1.1, dv)];
            let values = [self.bounds.tx(t), self.bounds.ty(t), self.bounds.tz(t)];
            let axes = [&self.x_axis, &self.y_axis, &self.z_axis];
            for ((position, value), axis) in anchors.into_iter().zip(values).zip(axes) {
                frame.labels.push(Label {
                    value,
                    text: axis.formatter().format(value),
                    position,
                });
            }
        }
        frame.titles = [p(1.0, -0.1, 0.0), p(-0.1, 1.0, 0.0), p(-0.1, 1.1, 1.0)];
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

    /// Tick labels, cycling X, Y, Z.
    pub fn labels(&self) -> &[Label] {
        &self.frame.labels
    }

    /// X, Y and Z title anchors in pixels.
    pub fn title_positions(&self) -> [ScreenPoint; 3] {
        self.frame.titles
    }

    /// Issue the chart to a canvas.
    ///
    /// Facing the front (`-90 < azimuth < 90`) the frame is drawn first and
    /// series on top; otherwise series go first so the frame stays visible.
    /// The colorbar is always last.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let azimuth = self.camera.azimuth();
        if azimuth > -90.0 && azimuth < 90.0 {
            self.draw_frame(canvas);
            self.draw_series(canvas);
        } else {
            self.draw_series(canvas);
            self.draw_frame(canvas);
        }
        self.colorbar.draw(canvas, &self.theme.labels);
    }

    /// Record the chart into a render list.
    pub fn render(&self) -> RenderList {
        let mut list = RenderList::new();
        self.draw(&mut list);
        list
    }

    fn draw_frame(&self, canvas: &mut impl Canvas) {
        canvas.draw_segments(&self.frame.grid, &self.theme.grid);
        canvas.draw_segments(&self.frame.axes, &self.theme.axes);
        canvas.draw_segments(&self.frame.ticks, &self.theme.ticks);

        let style = &self.theme.labels;
        for label in &self.frame.labels {
            canvas.draw_text(&label.text, label.position, style);
        }
        let axes = [(&self.x_axis, "X"), (&self.y_axis, "Y"), (&self.z_axis, "Z")];
        for ((axis, fallback), position) in axes.into_iter().zip(self.frame.titles) {
            match axis.title() {
                Some(AxisTitle::Text(text)) => canvas.draw_text(text, position, style),
                _ => canvas.draw_text(fallback, position, style),
            }
        }
    }

    fn draw_series(&self, canvas: &mut impl Canvas) {
        for series in &self.series {
            let mesh = series.mesh();
            if mesh.points.is_empty() {
                continue;
            }
            match series.kind() {
                SeriesKind3D::Line(style) => canvas.draw_segments(&mesh.points, style),
                SeriesKind3D::Points(style) => canvas.draw_points(&mesh.points, style),
                SeriesKind3D::Surface { .. } => {
                    canvas.draw_mesh(&mesh.points, &mesh.colors, &mesh.indices);
                }
            }
        }
    }
}

impl Default for Chart3D {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell emission order for surfaces.
///
/// A coarse painter's approximation: cells are walked so that, for the
/// current camera quadrant, those further away are usually emitted first. It
/// is not a depth sort and can misorder folded surfaces. Cells touching a
/// hole (a non-finite sample) are left out of the mesh entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOrder {
    /// Walk grid columns (`i`) from the far end.
    pub reverse_i: bool,
    /// Walk grid rows (`j`) from the far end.
    pub reverse_j: bool,
}

impl SurfaceOrder {
    /// Order for the camera's azimuth and elevation.
    pub fn from_camera(camera: &Camera) -> Self {
        let western = (-180.0..0.0).contains(&camera.azimuth());
        let above = camera.elevation() >= 0.0;
        Self {
            reverse_i: above == western,
            reverse_j: !above,
        }
    }
}

/// Emit one quad (4 points, 4 colors, 6 indices) per grid cell.
///
/// Vertex `(i, j)` is `vertices[i * height + j]`. An empty vertex slice (an
/// unfilled surface) produces no geometry. Cells with any non-finite corner
/// are skipped, so holes emit no points, colors or indices.
pub fn tessellate_surface(
    vertices: &[Vec3],
    width: usize,
    height: usize,
    colormap: Colormap,
    order: SurfaceOrder,
    projection: &Projection,
    mesh: &mut Mesh,
) {
    mesh.clear();
    if width < 2 || height < 2 || vertices.len() < width * height {
        return;
    }
    let cells = (width - 1) * (height - 1);
    mesh.points.reserve(cells * 4);
    mesh.colors.reserve(cells * 4);
    mesh.indices.reserve(cells * 6);

    for i in 0..width - 1 {
        let ii = if order.reverse_i { width - 2 - i } else { i };
        for j in 0..height - 1 {
            let jj = if order.reverse_j { height - 2 - j } else { j };
            let corners = [
                ii * height + jj,
                ii * height + jj + 1,
                (ii + 1) * height + jj + 1,
                (ii + 1) * height + jj,
            ];
            if corners.iter().any(|&c| !vertices[c].is_finite()) {
                continue;
            }
            let base = mesh.points.len() as u32;
            for corner in corners {
                let v = vertices[corner];
                mesh.points.push(projection.apply(v));
                mesh.colors.push(colormap.color_norm(v.z));
            }
            mesh.indices.extend(quad_indices(base));
        }
    }
}

/// Builder for configuring a 3D chart before construction.
#[derive(Debug)]
pub struct Chart3DBuilder {
    theme: Theme,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    z_axis: AxisConfig,
    size: (f32, f32),
    camera: Camera,
    series: Vec<Series3D>,
}

impl Default for Chart3DBuilder {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            z_axis: AxisConfig::default(),
            size: DEFAULT_SIZE,
            camera: Camera::default(),
            series: Vec::new(),
        }
    }
}

impl Chart3DBuilder {
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

    /// Set the Z axis configuration.
    pub fn z_axis(mut self, axis: AxisConfig) -> Self {
        self.z_axis = axis;
        self
    }

    /// Set the viewport size in pixels.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the initial camera.
    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Add a series to the chart.
    pub fn series(mut self, series: Series3D) -> Self {
        self.series.push(series);
        self
    }

    /// Build the chart and run the first update.
    pub fn build(self) -> Chart3D {
        let id = ChartId::next();
        let mut series = self.series;
        for s in &mut series {
            s.set_parent(Some(id));
        }
        let mut chart = Chart3D {
            id,
            colorbar: Colorbar::new(self.theme.colormap),
            theme: self.theme,
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            z_axis: self.z_axis,
            width: self.size.0,
            height: self.size.1,
            camera: self.camera,
            series,
            bounds: Bounds3D::UNIT,
            frame: Frame::default(),
        };
        chart.update();
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, RenderCommand};

    fn grid(width: usize, height: usize, z: impl Fn(usize, usize) -> f64) -> Series3D {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let mut zs = Vec::new();
        for i in 0..width {
            for j in 0..height {
                xs.push(i as f64);
                ys.push(j as f64);
                zs.push(z(i, j));
            }
        }
        Series3D::surface(&xs, &ys, &zs, width, height).expect("valid grid")
    }

    #[test]
    fn frame_buffer_sizes() {
        let chart = Chart3D::new();
        assert_eq!(chart.grid_lines().len(), 60);
        assert_eq!(chart.axis_lines().len(), 6);
        assert_eq!(chart.tick_marks().len(), 24);
        assert_eq!(chart.labels().len(), 12);
        assert!(!chart.needs_redraw());
    }

    #[test]
    fn surface_order_table() {
        let order = |az: f32, el: f32| {
            let o = SurfaceOrder::from_camera(&Camera::new(az, el));
            (o.reverse_i, o.reverse_j)
        };
        assert_eq!(order(45.0, 30.0), (false, false));
        assert_eq!(order(-37.5, 30.0), (true, false));
        assert_eq!(order(-180.0, 0.0), (true, false));
        assert_eq!(order(180.0, 0.0), (false, false));
        assert_eq!(order(45.0, -30.0), (true, true));
        assert_eq!(order(-45.0, -30.0), (false, true));
    }

    #[test]
    fn surface_mesh_sizes_for_non_square_grid() {
        let mut chart = Chart3D::new();
        let id = chart.attach(grid(4, 3, |i, j| (i * j) as f64));
        let mesh = chart.series_by_id(id).expect("attached").mesh();
        let cells = 3 * 2;
        assert_eq!(mesh.points.len(), cells * 4);
        assert_eq!(mesh.colors.len(), cells * 4);
        assert_eq!(mesh.indices.len(), cells * 6);
        for quad in mesh.indices.chunks(6) {
            let v = quad[0];
            assert_eq!(quad, &[v, v + 1, v + 3, v + 3, v + 1, v + 2]);
        }
    }

    #[test]
    fn forward_order_emits_first_cell_first() {
        let vertices: Vec<Vec3> = (0..9)
            .map(|n| Vec3::new((n / 3) as f32 / 2.0, (n % 3) as f32 / 2.0, n as f32 / 8.0))
            .collect();
        let projection = Projection::new(glam::Mat4::IDENTITY, 1.0, 1.0);
        let mut mesh = Mesh::default();
        let forward = SurfaceOrder {
            reverse_i: false,
            reverse_j: false,
        };
        tessellate_surface(&vertices, 3, 3, Colormap::Gray, forward, &projection, &mut mesh);
        assert_eq!(mesh.points[0], ScreenPoint::new(0.0, 1.0));
        assert_eq!(mesh.points[2], ScreenPoint::new(0.5, 0.5));

        let reversed = SurfaceOrder {
            reverse_i: true,
            reverse_j: true,
        };
        tessellate_surface(&vertices, 3, 3, Colormap::Gray, reversed, &projection, &mut mesh);
        assert_eq!(mesh.points.len(), 16);
        assert_eq!(mesh.points[2], ScreenPoint::new(1.0, 0.0));
        assert_eq!(mesh.colors[2], Colormap::Gray.color_norm(1.0));
    }

    #[test]
    fn holes_drop_their_cells() {
        let mut chart = Chart3D::new();
        let id = chart.attach(grid(4, 3, |i, j| {
            if i == 0 && j == 0 { f64::NAN } else { (i + j) as f64 }
        }));
        let mesh = chart.series_by_id(id).expect("attached").mesh();
        assert_eq!(mesh.indices.len(), 5 * 6);
        assert_eq!(mesh.points.len(), 5 * 4);
        assert!(mesh.points.iter().all(|p| p.is_finite()));

        let centre = chart.attach(grid(3, 3, |i, j| {
            if i == 1 && j == 1 { f64::NAN } else { 0.5 }
        }));
        assert!(chart.series_by_id(centre).expect("attached").mesh().indices.is_empty());

        let list = chart.render();
        for command in list.commands() {
            if let RenderCommand::Mesh { positions, .. } = command {
                assert!(positions.iter().all(|p| p.is_finite()));
            }
        }
    }

    #[test]
    fn rejected_write_skips_rebuild() {
        let mut chart = Chart3D::new();
        let id = chart.attach(grid(3, 3, |i, j| (i * j) as f64));
        let bounds = chart.bounds();
        chart.camera_mut().set_azimuth(10.0);

        let err = chart.copy_values(id, &[0.0], &[0.0], &[0.0]);
        assert!(matches!(err, Err(ChartError::InvalidGrid { .. })));
        assert!(chart.needs_redraw());
        assert_eq!(chart.bounds(), bounds);
    }

    #[test]
    fn flat_surface_bounds_settle_across_orbits() {
        let mut chart = Chart3D::new();
        chart.attach(grid(3, 3, |_, _| 2.0));
        assert!(!chart.update_bounds());
        chart.orbit(5.0, 0.0);
        chart.orbit(-5.0, 0.0);
        assert!(!chart.update_bounds());
    }

    #[test]
    fn orbit_clamps_and_clears_resync() {
        let mut chart = Chart3D::new();
        chart.camera_mut().set_azimuth(200.0);
        assert_eq!(chart.camera().azimuth(), 180.0);
        assert!(chart.needs_redraw());
        chart.update();
        assert!(!chart.needs_redraw());

        chart.orbit(-400.0, 5.0);
        assert_eq!(chart.camera().azimuth(), -180.0);
        assert_eq!(chart.camera().elevation(), 35.0);
        assert!(!chart.needs_redraw());
    }

    #[test]
    fn back_view_draws_series_first() {
        let mut chart = Chart3D::new();
        chart.attach(Series3D::line(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 1.0], Color::RED).expect("valid"));

        let front = chart.render();
        assert!(matches!(
            front.commands()[0],
            RenderCommand::LineSegments { ref style, .. } if *style == chart.theme().grid
        ));

        chart.camera_mut().set_azimuth(135.0);
        chart.update();
        let back = chart.render();
        assert!(matches!(
            back.commands()[0],
            RenderCommand::LineSegments { ref style, .. } if style.color == Color::RED
        ));
        assert!(matches!(back.commands().last(), Some(RenderCommand::Text { .. })));
    }

    #[test]
    fn colormap_switch_rebuilds_colorbar() {
        let mut chart = Chart3D::new();
        chart.set_colormap(Colormap::Hot);
        assert_eq!(chart.colorbar().colormap(), Colormap::Hot);
        assert_eq!(chart.colorbar().colors()[0], Colormap::Hot.table()[0]);
    }
}
