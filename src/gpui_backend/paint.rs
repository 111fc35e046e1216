use std::sync::Arc;

use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, RenderImage, TextRun,
    Window, font, point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{Canvas, Color, ImageHandle, LineStyle, MarkerShape, MarkerStyle, TextStyle};

/// [`Canvas`] painting into a GPUI window during the paint phase.
///
/// Chart coordinates are offset by `origin`, the top-left corner of the
/// element's bounds. Images must be `Arc<gpui::RenderImage>` handles.
pub struct GpuiCanvas<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
    origin: Point<Pixels>,
}

impl<'a> GpuiCanvas<'a> {
    /// Paint into `window` with chart pixel `(0, 0)` at `origin`.
    pub fn new(window: &'a mut Window, cx: &'a mut App, origin: Point<Pixels>) -> Self {
        Self { window, cx, origin }
    }

    fn to_point(&self, p: ScreenPoint) -> Point<Pixels> {
        point(self.origin.x + px(p.x), self.origin.y + px(p.y))
    }
}

impl Canvas for GpuiCanvas<'_> {
    fn draw_segments(&mut self, points: &[ScreenPoint], style: &LineStyle) {
        if points.len() < 2 {
            return;
        }
        let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
        for pair in points.chunks_exact(2) {
            builder.move_to(self.to_point(pair[0]));
            builder.line_to(self.to_point(pair[1]));
        }
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(style.color));
        }
    }

    fn draw_points(&mut self, points: &[ScreenPoint], style: &MarkerStyle) {
        let half = style.size.max(1.0) * 0.5;
        match style.shape {
            MarkerShape::Circle | MarkerShape::Square => {
                let radius = match style.shape {
                    MarkerShape::Circle => half,
                    _ => 0.0,
                };
                for pt in points {
                    let center = self.to_point(*pt);
                    let bounds = Bounds::from_corners(
                        point(center.x - px(half), center.y - px(half)),
                        point(center.x + px(half), center.y + px(half)),
                    );
                    self.window.paint_quad(quad(
                        bounds,
                        Corners::all(px(radius)),
                        to_rgba(style.color),
                        Edges::all(px(0.0)),
                        to_rgba(style.color),
                        BorderStyle::default(),
                    ));
                }
            }
            MarkerShape::Cross => {
                let mut builder = PathBuilder::stroke(px(1.0));
                for pt in points {
                    let c = self.to_point(*pt);
                    builder.move_to(point(c.x - px(half), c.y));
                    builder.line_to(point(c.x + px(half), c.y));
                    builder.move_to(point(c.x, c.y - px(half)));
                    builder.line_to(point(c.x, c.y + px(half)));
                }
                if let Ok(path) = builder.build() {
                    self.window.paint_path(path, to_rgba(style.color));
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let run = TextRun {
            len: text.len(),
            font: font(".SystemUIFont"),
            color: to_hsla(style.color),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let shaped = self.window.text_system().shape_line(
            text.to_string().into(),
            px(style.size),
            &[run],
            None,
        );
        let line_height = shaped.ascent + shaped.descent;
        // Chart anchors are baselines; GPUI lays lines out from their top.
        let anchor = self.to_point(position);
        let origin = point(anchor.x, anchor.y - shaped.ascent);
        let _ = shaped.paint(origin, line_height, self.window, self.cx);
    }

    /// Fills each triangle flat with the mean of its vertex colors; GPUI paths
    /// have no per-vertex color.
    fn draw_mesh(&mut self, positions: &[ScreenPoint], colors: &[Color], indices: &[u32]) {
        for tri in indices.chunks_exact(3) {
            let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if corners.iter().any(|&i| i >= positions.len() || i >= colors.len()) {
                tracing::warn!(?corners, "mesh index out of range");
                continue;
            }
            let mut builder = PathBuilder::fill();
            builder.move_to(self.to_point(positions[corners[0]]));
            builder.line_to(self.to_point(positions[corners[1]]));
            builder.line_to(self.to_point(positions[corners[2]]));
            builder.close();
            if let Ok(path) = builder.build() {
                let fill = mean_color(corners.map(|i| colors[i]));
                self.window.paint_path(path, to_rgba(fill));
            }
        }
    }

    fn draw_image(&mut self, image: &ImageHandle, position: ScreenPoint) {
        let Some(data) = image.downcast_ref::<Arc<RenderImage>>() else {
            tracing::warn!("image handle is not a gpui RenderImage");
            return;
        };
        let size = data.size(0);
        let min = self.to_point(position);
        let bounds = Bounds::from_corners(
            min,
            point(
                min.x + px(size.width.0 as f32),
                min.y + px(size.height.0 as f32),
            ),
        );
        if let Err(err) =
            self.window
                .paint_image(bounds, Corners::default(), Arc::clone(data), 0, false)
        {
            tracing::warn!(%err, "failed to paint axis title image");
        }
    }
}

fn mean_color(colors: [Color; 3]) -> Color {
    let sum = colors.iter().fold([0.0_f32; 4], |acc, c| {
        [acc[0] + c.r, acc[1] + c.g, acc[2] + c.b, acc[3] + c.a]
    });
    Color::new(sum[0] / 3.0, sum[1] / 3.0, sum[2] / 3.0, sum[3] / 3.0)
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
