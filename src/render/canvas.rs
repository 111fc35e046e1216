use crate::geom::ScreenPoint;

use super::{Color, ImageHandle, LineStyle, MarkerStyle, TextStyle};

/// Immediate-mode drawing capability consumed by charts.
///
/// All coordinates are in pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Draw disconnected segments: `points[0]..points[1]`, `points[2]..points[3]`
    /// and so on. A trailing unpaired point is ignored.
    fn draw_segments(&mut self, points: &[ScreenPoint], style: &LineStyle);

    /// Draw one point sprite per entry.
    fn draw_points(&mut self, points: &[ScreenPoint], style: &MarkerStyle);

    /// Draw text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: ScreenPoint, style: &TextStyle);

    /// Draw an indexed triangle list with per-vertex colors and no depth test.
    fn draw_mesh(&mut self, positions: &[ScreenPoint], colors: &[Color], indices: &[u32]);

    /// Draw a host-supplied image.
    fn draw_image(&mut self, image: &ImageHandle, position: ScreenPoint);
}
