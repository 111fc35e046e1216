//! Colorbar strip drawn next to 3D charts.

use glam::Vec2;

use crate::axis::{AxisFormatter, Label};
use crate::bounds::Range;
use crate::colormap::{Colormap, MAP_SIZE};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Canvas, Color, TextStyle, quad_indices};
use crate::transform::to_pixels;

/// Bottom-left corner of the strip in normalized viewport coordinates.
const ANCHOR: Vec2 = Vec2::new(0.85, 0.25);
/// Strip width in normalized viewport units.
const STRIP_WIDTH: f32 = 0.01;
/// Gap between the strip and its labels in normalized viewport units.
const LABEL_GAP: f32 = 0.01;
/// Only every n-th step gets a label.
const LABEL_STRIDE: usize = 4;

/// Vertical strip of [`MAP_SIZE`] colored quads with value labels.
#[derive(Debug, Clone)]
pub struct Colorbar {
    colormap: Colormap,
    positions: Vec<ScreenPoint>,
    colors: Vec<Color>,
    indices: Vec<u32>,
    labels: Vec<Label>,
}

impl Colorbar {
    /// Create an empty colorbar for a palette. Call [`Colorbar::update`] to fill it.
    pub fn new(colormap: Colormap) -> Self {
        Self {
            colormap,
            positions: Vec::with_capacity(MAP_SIZE * 4),
            colors: Vec::with_capacity(MAP_SIZE * 4),
            indices: Vec::with_capacity(MAP_SIZE * 6),
            labels: Vec::with_capacity(MAP_SIZE / LABEL_STRIDE),
        }
    }

    /// Active palette.
    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    /// Switch palette. Returns whether it changed; the owner must update.
    pub fn set_colormap(&mut self, colormap: Colormap) -> bool {
        let changed = self.colormap != colormap;
        self.colormap = colormap;
        changed
    }

    /// Rebuild the strip for a Z range and viewport size.
    pub fn update(&mut self, z: Range, width: f32, height: f32, formatter: &AxisFormatter) {
        self.positions.clear();
        self.colors.clear();
        self.indices.clear();
        self.labels.clear();

        let dx = STRIP_WIDTH;
        let dy = 1.0 / MAP_SIZE as f32;
        let x = ANCHOR.x;
        let mut y = ANCHOR.y;

        for step in 0..MAP_SIZE {
            let value = step as f32 * dy;
            let base = self.positions.len() as u32;
            self.positions.extend([
                to_pixels(Vec2::new(x, y), width, height),
                to_pixels(Vec2::new(x + dx, y), width, height),
                to_pixels(Vec2::new(x + dx, y + dy), width, height),
                to_pixels(Vec2::new(x, y + dy), width, height),
            ]);
            self.colors.extend([self.colormap.color_norm(value); 4]);
            self.indices.extend(quad_indices(base));

            if step % LABEL_STRIDE == 0 {
                let z_value = z.interpolate(f64::from(value));
                self.labels.push(Label {
                    value: z_value,
                    text: formatter.format(z_value),
                    position: to_pixels(Vec2::new(x + dx + LABEL_GAP, y), width, height),
                });
            }
            // Quads overlap by half a step; the strip spans half the colormap height.
            y += dy / 2.0;
        }
    }

    /// Quad corner positions in pixels.
    pub fn positions(&self) -> &[ScreenPoint] {
        &self.positions
    }

    /// Per-vertex colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Triangle list indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Pixel rectangle covered by the strip, excluding labels.
    pub fn extent(&self) -> Option<ScreenRect> {
        ScreenRect::enclosing(&self.positions)
    }

    /// Value labels, bottom to top.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Draw the strip as one mesh, then its labels.
    pub fn draw(&self, canvas: &mut impl Canvas, style: &TextStyle) {
        if self.indices.is_empty() {
            return;
        }
        canvas.draw_mesh(&self.positions, &self.colors, &self.indices);
        for label in &self.labels {
            canvas.draw_text(&label.text, label.position, style);
        }
    }
}

impl Default for Colorbar {
    fn default() -> Self {
        Self::new(Colormap::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RenderCommand, RenderList};

    fn built(colormap: Colormap) -> Colorbar {
        let mut bar = Colorbar::new(colormap);
        bar.update(Range::new(-2.0, 2.0), 800.0, 600.0, &AxisFormatter::default());
        bar
    }

    #[test]
    fn strip_has_one_quad_per_entry() {
        let bar = built(Colormap::Jet);
        assert_eq!(bar.positions().len(), MAP_SIZE * 4);
        assert_eq!(bar.colors().len(), MAP_SIZE * 4);
        assert_eq!(bar.indices().len(), MAP_SIZE * 6);
        assert_eq!(&bar.indices()[6..12], &[4, 5, 7, 7, 5, 6]);
        assert_eq!(bar.colors()[0], Colormap::Jet.table()[0]);

        let extent = bar.extent().expect("built");
        assert!((extent.width() - 0.01 * 800.0).abs() < 1e-3);
        assert!(Colorbar::default().extent().is_none());
    }

    #[test]
    fn labels_every_fourth_step() {
        let bar = built(Colormap::Gray);
        assert_eq!(bar.labels().len(), MAP_SIZE / LABEL_STRIDE);
        assert_eq!(bar.labels()[0].text, "-2.000");
        assert_eq!(bar.labels()[8].text, "0.000");
        let first = bar.labels()[0].position;
        assert!((first.x - 0.87 * 800.0).abs() < 1e-3);
        assert!((first.y - 0.75 * 600.0).abs() < 1e-3);
    }

    #[test]
    fn colormap_change_is_reported() {
        let mut bar = Colorbar::default();
        assert!(!bar.set_colormap(Colormap::Jet));
        assert!(bar.set_colormap(Colormap::Hot));
        assert_eq!(bar.colormap(), Colormap::Hot);
    }

    #[test]
    fn draws_mesh_before_labels() {
        let bar = built(Colormap::Cool);
        let mut list = RenderList::new();
        bar.draw(&mut list, &TextStyle::default());
        assert!(matches!(list.commands()[0], RenderCommand::Mesh { .. }));
        assert_eq!(list.commands().len(), 1 + MAP_SIZE / LABEL_STRIDE);
    }
}
