//! Sample data for demos and smoke tests.

use crate::chart2d::Chart2D;
use crate::chart3d::Chart3D;
use crate::error::Result;
use crate::render::{Color, MarkerShape, MarkerStyle};
use crate::series::{Series2D, Series3D, SeriesKind};

/// Grid spacing of the demo surfaces.
const SPACING: f64 = 0.2;
/// Demo surfaces span `[-EXTENT, EXTENT]` on both axes.
const EXTENT: f64 = 3.0;

/// Sample `f(x, y)` on the square demo grid.
///
/// Returns `(x, y, z, width, height)` with vertex `(i, j)` at `i * height + j`.
pub fn sample_grid(f: impl Fn(f64, f64) -> f64) -> (Vec<f64>, Vec<f64>, Vec<f64>, usize, usize) {
    let n = (2.0 * EXTENT / SPACING).round() as usize + 1;
    let mut xs = Vec::with_capacity(n * n);
    let mut ys = Vec::with_capacity(n * n);
    let mut zs = Vec::with_capacity(n * n);
    for i in 0..n {
        let x = -EXTENT + i as f64 * SPACING;
        for j in 0..n {
            let y = -EXTENT + j as f64 * SPACING;
            xs.push(x);
            ys.push(y);
            zs.push(f(x, y));
        }
    }
    (xs, ys, zs, n, n)
}

/// `sin(r) / r` ripple.
pub fn sinc(x: f64, y: f64) -> f64 {
    let r = x.hypot(y) + 1e-6;
    r.sin() / r
}

/// Two peaks and a pit, the classic test surface.
pub fn peaks(x: f64, y: f64) -> f64 {
    3.0 * (1.0 - x).powi(2) * (-x * x - (y + 1.0).powi(2)).exp()
        - 10.0 * (0.2 * x - x.powi(3) - y.powi(5)) * (-x * x - y * y).exp()
        - (-(x + 1.0).powi(2) - y * y).exp() / 3.0
}

/// Sinc ripple surface on a 31x31 grid.
pub fn sinc_surface() -> Result<Series3D> {
    let (x, y, z, w, h) = sample_grid(sinc);
    Ok(Series3D::surface(&x, &y, &z, w, h)?.with_name("sinc"))
}

/// Peaks surface on a 31x31 grid.
pub fn peaks_surface() -> Result<Series3D> {
    let (x, y, z, w, h) = sample_grid(peaks);
    Ok(Series3D::surface(&x, &y, &z, w, h)?.with_name("peaks"))
}

/// Deterministic jitter in `[0, 1)`.
fn jitter(i: usize) -> f64 {
    let s = (i as f64 * 12.9898).sin() * 43758.5453;
    s - s.floor()
}

/// A noisy line and a sampled sine, 100 samples each.
pub fn demo_chart2d() -> Result<Chart2D> {
    let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let noise: Vec<f64> = (0..100).map(|i| 90.0 * jitter(i)).collect();
    let wave: Vec<f64> = x.iter().map(|v| 90.0 * v.sin()).collect();

    let line = Series2D::line(&x, &noise, Color::GREEN)?;
    let points = Series2D::points(&x, &wave, Color::RED)?
        .with_kind(SeriesKind::Points(MarkerStyle {
            color: Color::RED,
            size: 4.0,
            shape: MarkerShape::Square,
        }))
        .with_name("sin line");

    Ok(Chart2D::builder().series(line).series(points).build())
}

/// The peaks surface under the default camera.
pub fn demo_chart3d() -> Result<Chart3D> {
    Ok(Chart3D::builder().series(peaks_surface()?).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_surfaces_are_31_square() {
        let surface = sinc_surface().expect("valid grid");
        assert_eq!(surface.data().len(), 31 * 31);
        let z = surface.bounds().z;
        assert!(z.max < 1.0 + 1e-6 && z.max > 0.99);
    }

    #[test]
    fn peaks_has_known_extremes() {
        let surface = peaks_surface().expect("valid grid");
        let z = surface.bounds().z;
        assert!(z.max > 7.5 && z.max < 8.5, "max {}", z.max);
        assert!(z.min < -6.0 && z.min > -7.0, "min {}", z.min);
    }

    #[test]
    fn demo_charts_build() {
        let chart = demo_chart2d().expect("demo data");
        assert_eq!(chart.series().len(), 2);
        assert_eq!(chart.series()[1].name(), Some("sin line"));
        let chart = demo_chart3d().expect("demo data");
        assert_eq!(chart.series()[0].mesh().indices.len(), 30 * 30 * 6);
    }
}
