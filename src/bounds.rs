//! Axis-aligned bounds over data coordinates.
//!
//! Bounds are plain values. The empty state is the [`Range::NONE`] sentinel
//! (`min = +inf`, `max = -inf`), which is the identity element of
//! [`Range::merge`], so aggregate bounds can be folded from it directly.

use glam::{Vec2, Vec3};

/// Normalized position used for an axis that has no span.
pub const DEGENERATE_NORM: f64 = 0.5;

/// Coordinate axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal data axis.
    X,
    /// Vertical data axis.
    Y,
    /// Depth axis (3D only).
    Z,
}

/// Numeric range of a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Sentinel for "no sample seen yet".
    pub const NONE: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// The unit range `[0, 1]`.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Reduce samples into a range, skipping NaN values.
    pub fn from_samples(values: &[f64]) -> Self {
        values.iter().fold(Self::NONE, |mut range, &value| {
            range.expand_to_include(value);
            range
        })
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether at least one sample defined this range.
    pub fn is_defined(&self) -> bool {
        self.min <= self.max
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Expand the range to include a value. NaN is ignored.
    pub fn expand_to_include(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union of two ranges, ignoring NaN components on either side.
    pub fn merge(a: Self, b: Self) -> Self {
        Self {
            min: select(a.min, b.min, f64::min),
            max: select(a.max, b.max, f64::max),
        }
    }

    /// Map a `[0, 1]` fraction back to data units.
    pub fn interpolate(&self, t: f64) -> f64 {
        t * (self.max - self.min) + self.min
    }

    /// Rescale a value into `[0, 1]` relative to this range.
    ///
    /// A zero-span or undefined range maps every value to
    /// [`DEGENERATE_NORM`]. NaN stays NaN so surface holes survive.
    pub fn normalize(&self, value: f64) -> f64 {
        if !self.is_valid() {
            return if value.is_nan() { value } else { DEGENERATE_NORM };
        }
        (value - self.min) / self.span()
    }

    /// Replace an undefined range with the unit range.
    pub fn or_unit(self) -> Self {
        if self.is_defined() { self } else { Self::UNIT }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::NONE
    }
}

fn select(a: f64, b: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() {
        b
    } else if b.is_nan() {
        a
    } else {
        pick(a, b)
    }
}

/// Bounding box over a 2D coordinate set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds2D {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Bounds2D {
    /// Bounds before any data is attached.
    pub const NONE: Self = Self {
        x: Range::NONE,
        y: Range::NONE,
    };

    /// The unit box used by empty charts.
    pub const UNIT: Self = Self {
        x: Range::UNIT,
        y: Range::UNIT,
    };

    /// Create bounds from explicit limits.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            x: Range::new(xmin, xmax),
            y: Range::new(ymin, ymax),
        }
    }

    /// Compute bounds over structure-of-arrays samples.
    ///
    /// The arrays are reduced independently; equal lengths are the caller's
    /// responsibility.
    pub fn from_samples(x: &[f64], y: &[f64]) -> Self {
        Self {
            x: Range::from_samples(x),
            y: Range::from_samples(y),
        }
    }

    /// Union of two bounds.
    pub fn merge(a: Self, b: Self) -> Self {
        Self {
            x: Range::merge(a.x, b.x),
            y: Range::merge(a.y, b.y),
        }
    }

    /// Access one axis range. `Axis::Z` yields the unit range.
    pub fn axis(&self, axis: Axis) -> Range {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => Range::UNIT,
        }
    }

    /// Map a normalized fraction on `axis` back into data units.
    pub fn interpolate(&self, axis: Axis, t: f64) -> f64 {
        self.axis(axis).interpolate(t)
    }

    /// Map a normalized X fraction into data units.
    pub fn tx(&self, t: f64) -> f64 {
        self.x.interpolate(t)
    }

    /// Map a normalized Y fraction into data units.
    pub fn ty(&self, t: f64) -> f64 {
        self.y.interpolate(t)
    }

    /// Normalize a data point into the unit square.
    pub fn normalize(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(self.x.normalize(x) as f32, self.y.normalize(y) as f32)
    }

    /// Check whether any sample contributed to these bounds.
    pub fn is_defined(&self) -> bool {
        self.x.is_defined() && self.y.is_defined()
    }

    /// Replace undefined axes with the unit range.
    pub fn or_unit(self) -> Self {
        Self {
            x: self.x.or_unit(),
            y: self.y.or_unit(),
        }
    }
}

/// Bounding box over a 3D coordinate set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds3D {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
    /// Z axis range.
    pub z: Range,
}

impl Bounds3D {
    /// Bounds before any data is attached.
    pub const NONE: Self = Self {
        x: Range::NONE,
        y: Range::NONE,
        z: Range::NONE,
    };

    /// The unit cube used by empty charts.
    pub const UNIT: Self = Self {
        x: Range::UNIT,
        y: Range::UNIT,
        z: Range::UNIT,
    };

    /// Create bounds from explicit limits.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64, zmin: f64, zmax: f64) -> Self {
        Self {
            x: Range::new(xmin, xmax),
            y: Range::new(ymin, ymax),
            z: Range::new(zmin, zmax),
        }
    }

    /// Compute bounds over structure-of-arrays samples, skipping NaN per axis.
    pub fn from_samples(x: &[f64], y: &[f64], z: &[f64]) -> Self {
        Self {
            x: Range::from_samples(x),
            y: Range::from_samples(y),
            z: Range::from_samples(z),
        }
    }

    /// Union of two bounds.
    pub fn merge(a: Self, b: Self) -> Self {
        Self {
            x: Range::merge(a.x, b.x),
            y: Range::merge(a.y, b.y),
            z: Range::merge(a.z, b.z),
        }
    }

    /// Access one axis range.
    pub fn axis(&self, axis: Axis) -> Range {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Map a normalized fraction on `axis` back into data units.
    pub fn interpolate(&self, axis: Axis, t: f64) -> f64 {
        self.axis(axis).interpolate(t)
    }

    /// Map a normalized X fraction into data units.
    pub fn tx(&self, t: f64) -> f64 {
        self.x.interpolate(t)
    }

    /// Map a normalized Y fraction into data units.
    pub fn ty(&self, t: f64) -> f64 {
        self.y.interpolate(t)
    }

    /// Map a normalized Z fraction into data units.
    pub fn tz(&self, t: f64) -> f64 {
        self.z.interpolate(t)
    }

    /// Normalize a data point into the unit cube.
    pub fn normalize(&self, x: f64, y: f64, z: f64) -> Vec3 {
        Vec3::new(
            self.x.normalize(x) as f32,
            self.y.normalize(y) as f32,
            self.z.normalize(z) as f32,
        )
    }

    /// Check whether any sample contributed to these bounds.
    pub fn is_defined(&self) -> bool {
        self.x.is_defined() && self.y.is_defined() && self.z.is_defined()
    }

    /// Axes whose span is zero (or undefined).
    pub fn degenerate_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .filter(|axis| !self.axis(*axis).is_valid())
    }

    /// Replace undefined axes with the unit range.
    pub fn or_unit(self) -> Self {
        Self {
            x: self.x.or_unit(),
            y: self.y.or_unit(),
            z: self.z.or_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bounds() -> [Bounds3D; 3] {
        [
            Bounds3D::new(0.0, 1.0, -2.0, 3.0, 5.0, 6.0),
            Bounds3D::new(-4.0, 0.5, 1.0, 9.0, 0.0, 5.5),
            Bounds3D::new(2.0, 7.0, -1.0, 0.0, 3.0, 12.0),
        ]
    }

    #[test]
    fn merge_is_commutative() {
        let [a, b, _] = sample_bounds();
        assert_eq!(Bounds3D::merge(a, b), Bounds3D::merge(b, a));
    }

    #[test]
    fn merge_is_associative() {
        let [a, b, c] = sample_bounds();
        let left = Bounds3D::merge(Bounds3D::merge(a, b), c);
        let right = Bounds3D::merge(a, Bounds3D::merge(b, c));
        assert_eq!(left, right);
    }

    #[test]
    fn none_is_merge_identity() {
        let [a, _, _] = sample_bounds();
        assert_eq!(Bounds3D::merge(Bounds3D::NONE, a), a);
        assert_eq!(Bounds3D::merge(a, Bounds3D::NONE), a);
        let flat = Bounds2D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Bounds2D::merge(Bounds2D::NONE, flat), flat);
    }

    #[test]
    fn from_no_samples_is_none() {
        assert_eq!(Bounds3D::from_samples(&[], &[], &[]), Bounds3D::NONE);
        assert!(!Bounds2D::from_samples(&[], &[]).is_defined());
    }

    #[test]
    fn nan_samples_are_skipped_per_axis() {
        let x = [0.0, 1.0, 2.0];
        let y = [f64::NAN, 4.0, -1.0];
        let z = [3.0, f64::NAN, f64::NAN];
        let bounds = Bounds3D::from_samples(&x, &y, &z);
        assert_eq!(bounds.x, Range::new(0.0, 2.0));
        assert_eq!(bounds.y, Range::new(-1.0, 4.0));
        assert_eq!(bounds.z, Range::new(3.0, 3.0));
    }

    #[test]
    fn merge_ignores_nan_components() {
        let a = Range {
            min: f64::NAN,
            max: 2.0,
        };
        let b = Range {
            min: -1.0,
            max: f64::NAN,
        };
        let merged = Range::merge(a, b);
        assert_eq!(merged.min, -1.0);
        assert_eq!(merged.max, 2.0);
    }

    #[test]
    fn normalize_roundtrip() {
        let bounds = Bounds3D::new(-3.0, 3.0, 10.0, 20.0, -8.0, 8.0);
        let point = [1.25, 17.5, -2.0];
        for (axis, value) in [Axis::X, Axis::Y, Axis::Z].into_iter().zip(point) {
            let norm = bounds.axis(axis).normalize(value);
            let back = bounds.interpolate(axis, norm);
            assert!((back - value).abs() < 1e-9, "{axis:?}: {back} != {value}");
        }
    }

    #[test]
    fn degenerate_axis_normalizes_to_half() {
        let range = Range::new(2.0, 2.0);
        assert_eq!(range.normalize(2.0), DEGENERATE_NORM);
        assert!(range.normalize(f64::NAN).is_nan());
        let bounds = Bounds3D::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(bounds.degenerate_axes().collect::<Vec<_>>(), vec![Axis::Z]);
        assert_eq!(bounds.normalize(0.5, 0.5, 0.0), Vec3::splat(0.5));
    }

    #[test]
    fn interpolate_maps_fraction_to_units() {
        let bounds = Bounds2D::new(10.0, 20.0, -1.0, 1.0);
        assert_eq!(bounds.tx(0.5), 15.0);
        assert_eq!(bounds.ty(1.0), 1.0);
        assert_eq!(bounds.interpolate(Axis::X, 0.0), 10.0);
    }
}
