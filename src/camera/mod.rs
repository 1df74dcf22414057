//! Core camera and viewport types.
//!
//! This module provides the [`Camera`] and [`Viewport`] descriptions that the
//! rest of the library consumes. A camera is defined look-at style: a
//! position, a focal point it looks at, an up vector, and a vertical field of
//! view. The aspect ratio is never stored on the camera; it always derives
//! from the viewport in use.
//!
//! Both types are plain data supplied by the caller and read-only to the
//! operations here. Validation happens when a transform is actually built
//! (see [`crate::project::Projector::new`]), not on every field assignment.
//!
//! # Construction
//!
//! ```
//! use lenscast::camera::{Camera, Viewport};
//! use nalgebra::{Point3, Vector3};
//!
//! let camera = Camera::default()
//!     .with_position(Point3::new(0.0, -1.5, 2.0))
//!     .with_focal_point(Point3::origin())
//!     .with_view_up(Vector3::y());
//! let viewport = Viewport::new(1920, 1080).unwrap();
//!
//! assert!(camera.validate().is_ok());
//! assert!((viewport.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
//! ```

pub mod fov;

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

use crate::error::{Result, SceneError};

/// A perspective camera described by pose and vertical field of view.
///
/// Defaults mirror a stock rendering-toolkit camera: positioned at
/// `(0, 0, 1)` looking at the origin with `+Y` up and a 30° vertical field
/// of view.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Point3<f64>,

    /// The point the camera looks at.
    pub focal_point: Point3<f64>,

    /// The up direction; must not be parallel to the view direction.
    pub view_up: Vector3<f64>,

    /// Vertical field of view in degrees, in (0°, 180°).
    pub fov_y_deg: f64,

    /// Near clip distance (> 0).
    pub near: f64,

    /// Far clip distance (> near).
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 1.0),
            focal_point: Point3::origin(),
            view_up: Vector3::y(),
            fov_y_deg: 30.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Set the camera position.
    pub fn with_position(mut self, position: Point3<f64>) -> Self {
        self.position = position;
        self
    }

    /// Set the focal point the camera looks at.
    pub fn with_focal_point(mut self, focal_point: Point3<f64>) -> Self {
        self.focal_point = focal_point;
        self
    }

    /// Set the up vector.
    pub fn with_view_up(mut self, view_up: Vector3<f64>) -> Self {
        self.view_up = view_up;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov_y(mut self, fov_y_deg: f64) -> Self {
        self.fov_y_deg = fov_y_deg;
        self
    }

    /// Set the near and far clip distances.
    pub fn with_clip_range(mut self, near: f64, far: f64) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// The unnormalized vector from the camera position to the focal point.
    pub fn view_direction(&self) -> Vector3<f64> {
        self.focal_point - self.position
    }

    /// Check that this camera can produce a well-defined view transform.
    ///
    /// Rejects a field of view outside (0°, 180°), a position coinciding
    /// with the focal point, a zero or view-parallel up vector, and a clip
    /// range that is not `0 < near < far`.
    pub fn validate(&self) -> Result<()> {
        fov::vertical_fov_radians(self.fov_y_deg)?;

        let dir = self.view_direction();
        if dir.norm() <= f64::EPSILON {
            return Err(SceneError::degenerate_camera(
                "position and focal point coincide",
            ));
        }
        if self.view_up.norm() <= f64::EPSILON {
            return Err(SceneError::degenerate_camera("view-up vector is zero"));
        }
        let cross = dir.cross(&self.view_up);
        if cross.norm() <= 1e-12 * dir.norm() * self.view_up.norm() {
            return Err(SceneError::degenerate_camera(
                "view-up vector is parallel to the view direction",
            ));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(SceneError::invalid_param(
                "clip_range",
                format!("{}..{}", self.near, self.far),
                "need 0 < near < far",
            ));
        }
        Ok(())
    }

    /// The world-to-camera (view) matrix, right-handed.
    ///
    /// The focal point ends up on the negative z axis at its distance from
    /// the camera. Assumes a camera that passes [`Camera::validate`].
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.position, &self.focal_point, &self.view_up)
    }

    /// The perspective projection matrix for the given aspect ratio.
    ///
    /// Assumes a camera that passes [`Camera::validate`] and a positive
    /// aspect ratio.
    pub fn projection_matrix(&self, aspect_ratio: f64) -> Matrix4<f64> {
        Perspective3::new(
            aspect_ratio,
            self.fov_y_deg.to_radians(),
            self.near,
            self.far,
        )
        .into_inner()
    }

    /// The combined view-projection matrix for the given aspect ratio.
    pub fn view_projection_matrix(&self, aspect_ratio: f64) -> Matrix4<f64> {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }
}

/// Pixel dimensions of the output image.
///
/// Defines both the aspect ratio used for projection and the display
/// coordinate range (origin top-left, y growing downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels (positive).
    pub width: u32,

    /// Height in pixels (positive).
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Viewport {
    /// Create a viewport, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(SceneError::invalid_param(
                "width",
                width,
                "must be positive",
            ));
        }
        if height == 0 {
            return Err(SceneError::invalid_param(
                "height",
                height,
                "must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// The center of the viewport in display coordinates.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
