//! Pixel-space geometric primitives.
//!
//! Data and normalized coordinates use `glam` vectors; the types here are what
//! charts hand to a canvas.

use glam::Vec2;

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels, growing downwards.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a pixel delta.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vec2> for ScreenPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Smallest rectangle covering all points, or `None` for an empty slice.
    pub fn enclosing(points: &[ScreenPoint]) -> Option<Self> {
        let first = *points.first()?;
        let rect = points.iter().fold(Self::new(first, first), |rect, p| {
            Self::new(
                ScreenPoint::new(rect.min.x.min(p.x), rect.min.y.min(p.y)),
                ScreenPoint::new(rect.max.x.max(p.x), rect.max.y.max(p.y)),
            )
        });
        Some(rect)
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_rect_covers_points() {
        let points = [
            ScreenPoint::new(4.0, 1.0),
            ScreenPoint::new(-2.0, 3.0),
            ScreenPoint::new(1.0, 8.0),
        ];
        let rect = ScreenRect::enclosing(&points).expect("non-empty");
        assert_eq!(rect.min, ScreenPoint::new(-2.0, 1.0));
        assert_eq!(rect.max, ScreenPoint::new(4.0, 8.0));
        assert!(rect.is_valid());
        assert!(ScreenRect::enclosing(&[]).is_none());
    }
}
