//! Backdrop sizing and scene placement.
//!
//! A composited shot places a flat backdrop behind the subject. For the
//! backdrop to fill the frame it has to cover the camera frustum's cross
//! section at its standoff distance, and then some: the placement of the
//! plane relative to the camera is never exact, so the computed rectangle
//! is scaled up by an overscan factor to guarantee coverage past the edges.
//!
//! [`fit_backdrop`] is a pure function of the camera, viewport, and
//! [`SceneConfig`]; it never mutates camera state.
//!
//! # Example
//!
//! ```
//! use lenscast::camera::{Camera, Viewport};
//! use lenscast::scene::{fit_backdrop, SceneConfig};
//!
//! let camera = Camera::default();
//! let viewport = Viewport::new(1920, 1080).unwrap();
//! let plane = fit_backdrop(&camera, &viewport, &SceneConfig::default()).unwrap();
//!
//! // Wider than tall, like the viewport.
//! assert!(plane.width() > plane.height());
//! ```

use nalgebra::{Point3, Vector3};

use crate::camera::fov;
use crate::camera::{Camera, Viewport};
use crate::error::{Result, SceneError};

/// Default standoff distance between subject and backdrop, in world units.
pub const DEFAULT_STANDOFF: f64 = 1.5;

/// Default frustum overscan factor.
///
/// The frustum cross section is multiplied by twice this value (it scales
/// the half-extent on each side). The magnitude is an empirical coverage
/// margin, not a derived quantity; tune it per scene.
pub const DEFAULT_OVERSCAN: f64 = 10.0;

/// Placement parameters for backdrop and subject.
///
/// Collects the knobs that position scene content relative to the camera
/// axis, so they travel together as explicit arguments instead of living
/// in per-program constants.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Distance from the subject to the backdrop plane (> 0).
    pub standoff: f64,

    /// Scale-up factor applied to the frustum cross section (> 0).
    pub overscan: f64,

    /// World-space offset applied to the finished plane.
    pub translation: Vector3<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            standoff: DEFAULT_STANDOFF,
            overscan: DEFAULT_OVERSCAN,
            translation: Vector3::zeros(),
        }
    }
}

impl SceneConfig {
    /// Set the standoff distance.
    pub fn with_standoff(mut self, standoff: f64) -> Self {
        self.standoff = standoff;
        self
    }

    /// Set the overscan factor.
    pub fn with_overscan(mut self, overscan: f64) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set the world-space translation.
    pub fn with_translation(mut self, translation: Vector3<f64>) -> Self {
        self.translation = translation;
        self
    }
}

/// A rectangular backdrop described by three generating corners.
///
/// `origin` is the lower-left corner; `point1` and `point2` are the ends of
/// the horizontal and vertical edges adjacent to it. The fourth corner is
/// implied. With a zero translation the rectangle is centered on the
/// optical axis at `z = -standoff`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropPlane {
    /// Lower-left corner.
    pub origin: Point3<f64>,

    /// End of the horizontal edge from `origin`.
    pub point1: Point3<f64>,

    /// End of the vertical edge from `origin`.
    pub point2: Point3<f64>,
}

impl BackdropPlane {
    /// Length of the horizontal edge.
    pub fn width(&self) -> f64 {
        (self.point1 - self.origin).norm()
    }

    /// Length of the vertical edge.
    pub fn height(&self) -> f64 {
        (self.point2 - self.origin).norm()
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point3<f64> {
        self.origin + (self.point1 - self.origin) / 2.0 + (self.point2 - self.origin) / 2.0
    }

    /// All four corners, counter-clockwise starting at `origin`.
    pub fn corners(&self) -> [Point3<f64>; 4] {
        let far = self.point1 + (self.point2 - self.origin);
        [self.origin, self.point1, far, self.point2]
    }

    /// The same plane moved by `offset`.
    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self {
            origin: self.origin + offset,
            point1: self.point1 + offset,
            point2: self.point2 + offset,
        }
    }
}

/// Size a backdrop plane to fill the camera frustum at the standoff
/// distance.
///
/// The plane's height covers the vertical field of view at
/// `config.standoff`, its width the horizontal field of view derived from
/// the viewport's aspect ratio, and both extents carry the overscan
/// factor:
///
/// ```text
/// height = 2 * overscan * standoff * tan(fov_y / 2)
/// width  = 2 * overscan * standoff * tan(fov_x / 2)
/// ```
///
/// The returned corners sit at `z = -standoff`, centered on the optical
/// axis, then shifted by `config.translation`.
///
/// # Errors
///
/// Fails with [`SceneError::InvalidParameter`] when the standoff or
/// overscan is not positive and finite, when the viewport is degenerate,
/// or when the camera's field of view is out of range.
pub fn fit_backdrop(
    camera: &Camera,
    viewport: &Viewport,
    config: &SceneConfig,
) -> Result<BackdropPlane> {
    if !(config.standoff > 0.0 && config.standoff.is_finite()) {
        return Err(SceneError::invalid_param(
            "standoff",
            config.standoff,
            "must be positive and finite",
        ));
    }
    if !(config.overscan > 0.0 && config.overscan.is_finite()) {
        return Err(SceneError::invalid_param(
            "overscan",
            config.overscan,
            "must be positive and finite",
        ));
    }

    let aspect = viewport.aspect_ratio();
    let v_rad = fov::vertical_fov_radians(camera.fov_y_deg)?;
    let h_rad = fov::horizontal_fov(camera.fov_y_deg, aspect)?;

    let half_height = config.overscan * config.standoff * (v_rad / 2.0).tan();
    let half_width = config.overscan * config.standoff * (h_rad / 2.0).tan();
    let z = -config.standoff;

    log::debug!(
        "backdrop fitted: {:.4} x {:.4} at z = {:.4}",
        2.0 * half_width,
        2.0 * half_height,
        z
    );

    let plane = BackdropPlane {
        origin: Point3::new(-half_width, -half_height, z),
        point1: Point3::new(half_width, -half_height, z),
        point2: Point3::new(-half_width, half_height, z),
    };
    Ok(plane.translated(config.translation))
}
