//! Orbit camera for 3D charts.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Azimuth limits in degrees.
pub const AZIMUTH_LIMITS: (f32, f32) = (-180.0, 180.0);
/// Elevation limits in degrees.
pub const ELEVATION_LIMITS: (f32, f32) = (-90.0, 90.0);

/// Orbit camera rotating the unit cube about its center.
///
/// Any angle change raises [`Camera::resync`]; the owning chart clears it once
/// its buffers reflect the new view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    azimuth: f32,
    elevation: f32,
    #[serde(skip, default = "resync_default")]
    resync: bool,
}

fn resync_default() -> bool {
    true
}

impl Camera {
    /// Create a camera at the given angles (degrees, clamped).
    pub fn new(azimuth: f32, elevation: f32) -> Self {
        let mut camera = Self::default();
        camera.set_azimuth(azimuth);
        camera.set_elevation(elevation);
        camera
    }

    /// Azimuth in degrees, within `[-180, 180]`.
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Elevation in degrees, within `[-90, 90]`.
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Set the azimuth, clamping into range.
    pub fn set_azimuth(&mut self, degrees: f32) {
        self.azimuth = clamp(degrees, AZIMUTH_LIMITS);
        self.resync = true;
    }

    /// Set the elevation, clamping into range.
    pub fn set_elevation(&mut self, degrees: f32) {
        self.elevation = clamp(degrees, ELEVATION_LIMITS);
        self.resync = true;
    }

    /// Rotate by angle deltas in degrees.
    pub fn orbit(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.set_azimuth(self.azimuth + d_azimuth);
        self.set_elevation(self.elevation + d_elevation);
    }

    /// Whether the view changed since the last chart update.
    pub fn resync(&self) -> bool {
        self.resync
    }

    pub(crate) fn clear_resync(&mut self) {
        self.resync = false;
    }

    /// View transform for points in the unit cube.
    ///
    /// Centers the cube on the origin, halves it so any rotation stays inside
    /// the viewport, rotates, then moves the center back to `(0.5, 0.5, 0.5)`.
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(Vec3::splat(0.5))
            * azimuth_elevation(self.elevation, self.azimuth)
            * Mat4::from_scale(Vec3::splat(0.5))
            * Mat4::from_translation(Vec3::splat(-0.5))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: -37.5,
            elevation: 30.0,
            resync: true,
        }
    }
}

fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Rotation for the given elevation and azimuth (degrees).
pub fn azimuth_elevation(elevation: f32, azimuth: f32) -> Mat4 {
    let elevation = clamp(elevation, ELEVATION_LIMITS).to_radians();
    let azimuth = clamp(azimuth, AZIMUTH_LIMITS).to_radians();
    let (sne, cne) = elevation.sin_cos();
    let (sna, cna) = azimuth.sin_cos();

    // Columns of the column-vector matrix; each is a row of the row-vector form.
    Mat4::from_cols_array(&[
        cna, -sne * sna, cne * sna, 0.0, //
        sna, sne * cna, -cne * cna, 0.0, //
        0.0, cne, sne, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_and_flag_resync() {
        let mut camera = Camera::default();
        camera.clear_resync();
        camera.set_azimuth(200.0);
        assert_eq!(camera.azimuth(), 180.0);
        assert!(camera.resync());

        camera.clear_resync();
        camera.set_elevation(-120.0);
        assert_eq!(camera.elevation(), -90.0);
        assert!(camera.resync());
    }

    #[test]
    fn deserialized_camera_requests_resync() {
        let mut camera = Camera::new(45.0, 10.0);
        camera.clear_resync();
        let json = serde_json::to_string(&camera).expect("serialize");
        assert!(!json.contains("resync"));

        let back: Camera = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.azimuth(), 45.0);
        assert_eq!(back.elevation(), 10.0);
        assert!(back.resync());
    }

    #[test]
    fn view_keeps_cube_center_fixed() {
        let camera = Camera::new(63.0, -12.0);
        let center = camera.view().transform_point3(Vec3::splat(0.5));
        assert!((center - Vec3::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn top_down_view_is_half_scale_identity() {
        let camera = Camera::new(0.0, 90.0);
        let p = camera.view().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.75, 0.25, 0.25)).length() < 1e-6);
    }

    #[test]
    fn orbit_accumulates() {
        let mut camera = Camera::new(0.0, 0.0);
        camera.orbit(5.0, -5.0);
        camera.orbit(5.0, -5.0);
        assert_eq!(camera.azimuth(), 10.0);
        assert_eq!(camera.elevation(), -10.0);
    }
}
