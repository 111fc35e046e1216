//! Transforms from normalized chart space into pixels.
//!
//! Normalized space is the unit square (2D) or unit cube (3D) that every
//! series is rescaled into. 2D charts fit that square inside margins with a
//! fixed affine transform; 3D charts rotate it with the camera view and drop
//! depth.

use glam::{Affine2, Mat4, Vec2, Vec3};

use crate::geom::ScreenPoint;

/// Offset applied before scaling, leaving room for labels on the left/bottom.
const PLOT_OFFSET: Vec2 = Vec2::new(0.3, 0.4);
/// Scale applied to the offset unit square.
const PLOT_SCALE: f32 = 0.6;

/// Cast a normalized-viewport position into pixels, flipping Y.
pub fn to_pixels(v: Vec2, width: f32, height: f32) -> ScreenPoint {
    ScreenPoint::new(v.x * width, (1.0 - v.y) * height)
}

/// Viewport-fit transform for 2D charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    affine: Affine2,
    width: f32,
    height: f32,
}

impl PlotTransform {
    /// Fit the unit square into a `width x height` pixel viewport.
    pub fn new(width: f32, height: f32) -> Self {
        let affine = Affine2::from_scale(Vec2::splat(PLOT_SCALE))
            * Affine2::from_translation(PLOT_OFFSET);
        Self {
            affine,
            width,
            height,
        }
    }

    /// Apply the affine part only (normalized -> normalized viewport).
    pub fn fit(&self, v: Vec2) -> Vec2 {
        self.affine.transform_point2(v)
    }

    /// Map a normalized chart position to pixels.
    pub fn apply(&self, v: Vec2) -> ScreenPoint {
        to_pixels(self.fit(v), self.width, self.height)
    }

    /// Map a normalized `(x, y)` pair to pixels.
    pub fn apply_xy(&self, x: f32, y: f32) -> ScreenPoint {
        self.apply(Vec2::new(x, y))
    }
}

/// Orthographic projection of normalized 3D points through a view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    view: Mat4,
    width: f32,
    height: f32,
}

impl Projection {
    /// Create a projection for the given view and viewport size.
    pub fn new(view: Mat4, width: f32, height: f32) -> Self {
        Self {
            view,
            width,
            height,
        }
    }

    /// Rotate a normalized point by the view and drop Z.
    pub fn apply(&self, v: Vec3) -> ScreenPoint {
        let p = self.view.transform_point3(v);
        to_pixels(p.truncate(), self.width, self.height)
    }

    /// Project a normalized `(x, y, z)` triple.
    pub fn apply_xyz(&self, x: f32, y: f32, z: f32) -> ScreenPoint {
        self.apply(Vec3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_transform_places_unit_square_inside_margins() {
        let transform = PlotTransform::new(800.0, 600.0);
        let origin = transform.apply_xy(0.0, 0.0);
        let corner = transform.apply_xy(1.0, 1.0);
        assert!((origin.x - 0.18 * 800.0).abs() < 1e-3);
        assert!((origin.y - (1.0 - 0.24) * 600.0).abs() < 1e-3);
        assert!((corner.x - 0.78 * 800.0).abs() < 1e-3);
        assert!((corner.y - (1.0 - 0.84) * 600.0).abs() < 1e-3);
    }

    #[test]
    fn identity_projection_drops_depth() {
        let projection = Projection::new(Mat4::IDENTITY, 100.0, 50.0);
        let a = projection.apply_xyz(0.5, 0.25, 0.0);
        let b = projection.apply_xyz(0.5, 0.25, 0.9);
        assert_eq!(a, b);
        assert_eq!(a, ScreenPoint::new(50.0, 37.5));
    }
}
