//! World-to-screen projection.
//!
//! A [`Projector`] binds a camera to a viewport and maps world-space points
//! into display coordinates: the homogeneous point is pushed through the
//! combined view-projection matrix, divided down to normalized device
//! coordinates, then stretched to pixels with the y axis flipped so the
//! origin sits at the top-left.
//!
//! Points at or behind the camera plane have no meaningful screen position;
//! [`Projector::project`] returns `None` for them and callers decide what
//! to do. [`Projector::project_all`] drops them and logs how many were
//! dropped.
//!
//! # Example
//!
//! ```
//! use lenscast::camera::{Camera, Viewport};
//! use lenscast::project::Projector;
//! use nalgebra::Point3;
//!
//! let camera = Camera::default().with_position(Point3::new(0.0, -1.5, 2.0));
//! let viewport = Viewport::new(1920, 1080).unwrap();
//! let projector = Projector::new(&camera, &viewport).unwrap();
//!
//! // The focal point lands dead center.
//! let center = projector.project(&camera.focal_point).unwrap();
//! assert!((center.x - 960.0).abs() < 1e-6);
//! assert!((center.y - 540.0).abs() < 1e-6);
//! ```

use nalgebra::{Matrix4, Point3};

use crate::camera::{Camera, Viewport};
use crate::error::{Result, SceneError};

/// A 2D display coordinate produced from one world-space point.
///
/// Origin top-left, x growing right, y growing down, units of pixels.
/// Values may lie outside the viewport when the source point is visible
/// to the math but outside the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Horizontal display coordinate in pixels.
    pub x: f64,

    /// Vertical display coordinate in pixels, growing downward.
    pub y: f64,
}

impl ProjectedPoint {
    /// Create a projected point from display coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps world-space points into a viewport's display coordinates.
///
/// The view-projection matrix is computed once at construction;
/// projection itself is a matrix multiply per point.
#[derive(Debug, Clone)]
pub struct Projector {
    view_proj: Matrix4<f64>,
    width: f64,
    height: f64,
}

impl Projector {
    /// Build a projector for the given camera and viewport.
    ///
    /// # Errors
    ///
    /// Fails when the camera does not pass [`Camera::validate`] or the
    /// viewport has a zero dimension.
    pub fn new(camera: &Camera, viewport: &Viewport) -> Result<Self> {
        camera.validate()?;
        if viewport.width == 0 || viewport.height == 0 {
            return Err(SceneError::invalid_param(
                "viewport",
                format!("{}x{}", viewport.width, viewport.height),
                "dimensions must be positive",
            ));
        }

        Ok(Self {
            view_proj: camera.view_projection_matrix(viewport.aspect_ratio()),
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
        })
    }

    /// Project one world-space point to display coordinates.
    ///
    /// Returns `None` when the point sits at or behind the camera plane
    /// (non-positive homogeneous w), where the perspective divide is
    /// undefined or mirrors the point to a bogus location.
    pub fn project(&self, point: &Point3<f64>) -> Option<ProjectedPoint> {
        let h = self.view_proj * point.to_homogeneous();
        if h.w <= 0.0 {
            return None;
        }

        let ndc_x = h.x / h.w;
        let ndc_y = h.y / h.w;
        let x = (ndc_x * 0.5 + 0.5) * self.width;
        let y = (1.0 - (ndc_y * 0.5 + 0.5)) * self.height;
        Some(ProjectedPoint::new(x, y))
    }

    /// Project a batch of points, preserving input order.
    ///
    /// Points behind the camera are dropped from the output; when any are
    /// dropped a single warning reports the count. Use [`Projector::project`]
    /// directly when output indices must stay aligned with the input.
    pub fn project_all(&self, points: &[Point3<f64>]) -> Vec<ProjectedPoint> {
        let projected: Vec<ProjectedPoint> =
            points.iter().filter_map(|p| self.project(p)).collect();

        let skipped = points.len() - projected.len();
        if skipped > 0 {
            log::warn!(
                "{} of {} points were at or behind the camera and were skipped",
                skipped,
                points.len()
            );
        }
        projected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn scene_projector() -> (Camera, Projector) {
        let camera = Camera::default()
            .with_position(Point3::new(0.0, -1.5, 2.0))
            .with_focal_point(Point3::origin())
            .with_view_up(Vector3::y());
        let viewport = Viewport::new(1920, 1080).unwrap();
        let projector = Projector::new(&camera, &viewport).unwrap();
        (camera, projector)
    }

    #[test]
    fn test_focal_point_hits_viewport_center() {
        let (camera, projector) = scene_projector();
        let p = projector.project(&camera.focal_point).unwrap();
        assert!((p.x - 960.0).abs() < 1e-6, "x = {}", p.x);
        assert!((p.y - 540.0).abs() < 1e-6, "y = {}", p.y);
    }

    #[test]
    fn test_known_offset_point() {
        // Reference value computed with the same look-at/perspective
        // pipeline for camera (0,-1.5,2) -> origin, 30° fov, 1920x1080.
        let (_, projector) = scene_projector();
        let p = projector.project(&Point3::new(0.2, 0.1, 0.0)).unwrap();
        assert!((p.x - 1117.445893444312).abs() < 1e-6, "x = {}", p.x);
        assert!((p.y - 477.021642622275).abs() < 1e-6, "y = {}", p.y);
    }

    #[test]
    fn test_world_up_maps_to_smaller_pixel_y() {
        // Display y grows downward, so a point above the focal point must
        // land above the viewport center.
        let (_, projector) = scene_projector();
        let above = projector.project(&Point3::new(0.0, 0.1, 0.0)).unwrap();
        assert!((above.x - 960.0).abs() < 1e-6);
        assert!(above.y < 540.0, "y = {}", above.y);
    }

    #[test]
    fn test_point_behind_camera_is_none() {
        // One camera-to-focal-point step past the camera position.
        let (_, projector) = scene_projector();
        assert!(projector.project(&Point3::new(0.0, -3.0, 4.0)).is_none());
    }

    #[test]
    fn test_point_at_camera_is_none() {
        let (camera, projector) = scene_projector();
        assert!(projector.project(&camera.position).is_none());
    }

    #[test]
    fn test_project_all_preserves_order_and_filters() {
        let (camera, projector) = scene_projector();
        let behind = Point3::new(0.0, -3.0, 4.0);
        let points = [
            Point3::new(-0.1, 0.0, 0.0),
            behind,
            camera.focal_point,
            Point3::new(0.1, 0.0, 0.0),
        ];
        let projected = projector.project_all(&points);

        assert_eq!(projected.len(), 3);
        // Left of center, center, right of center, in input order.
        assert!(projected[0].x < 960.0);
        assert!((projected[1].x - 960.0).abs() < 1e-6);
        assert!(projected[2].x > 960.0);
    }

    #[test]
    fn test_project_all_empty_input() {
        let (_, projector) = scene_projector();
        assert!(projector.project_all(&[]).is_empty());
    }

    #[test]
    fn test_new_rejects_degenerate_camera() {
        let camera = Camera::default()
            .with_position(Point3::origin())
            .with_focal_point(Point3::new(0.0, 5.0, 0.0))
            .with_view_up(Vector3::y());
        let viewport = Viewport::new(640, 480).unwrap();
        assert!(Projector::new(&camera, &viewport).is_err());
    }

    #[test]
    fn test_projection_symmetric_about_center() {
        // Mirrored offsets around the focal point project to mirrored
        // pixels around the viewport center.
        let (_, projector) = scene_projector();
        let left = projector.project(&Point3::new(-0.25, 0.0, 0.0)).unwrap();
        let right = projector.project(&Point3::new(0.25, 0.0, 0.0)).unwrap();
        assert!(((left.x - 960.0) + (right.x - 960.0)).abs() < 1e-6);
        assert!((left.y - right.y).abs() < 1e-6);
    }
}
