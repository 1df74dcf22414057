//! # Lenscast
//!
//! Camera projection and background-fit toolkit for synthetic dataset
//! generation.
//!
//! Lenscast covers the geometry bookkeeping around a composited camera
//! shot: converting fields of view, sizing a backdrop plane to fill the
//! camera frustum, projecting world-space vertices to pixel coordinates,
//! and recording the projected points as annotation files for training
//! object detectors on rendered images.
//!
//! ## Features
//!
//! - **FOV conversion**: vertical angle + aspect ratio → horizontal angle
//! - **Backdrop fitting**: frustum-filling plane at a standoff distance,
//!   with a configurable overscan margin
//! - **World-to-screen projection**: cached view-projection transform,
//!   top-left pixel convention, explicit handling of behind-camera points
//! - **Annotation recording**: ordered coordinate sets serialized as two
//!   parallel JSON arrays
//!
//! ## Quick Start
//!
//! ```
//! use lenscast::prelude::*;
//! use nalgebra::Point3;
//!
//! // A camera slightly below and in front of the subject.
//! let camera = Camera::default()
//!     .with_position(Point3::new(0.0, -1.5, 2.0))
//!     .with_focal_point(Point3::origin());
//! let viewport = Viewport::new(1920, 1080).unwrap();
//!
//! // Size a backdrop that fills the frame behind the subject.
//! let plane = fit_backdrop(&camera, &viewport, &SceneConfig::default()).unwrap();
//! assert!(plane.width() > plane.height());
//!
//! // Project subject vertices to display coordinates.
//! let projector = Projector::new(&camera, &viewport).unwrap();
//! let vertices = [
//!     Point3::new(-0.2, -0.2, 0.0),
//!     Point3::new(0.2, -0.2, 0.0),
//!     Point3::new(0.0, 0.2, 0.0),
//! ];
//! let set: CoordinateSet = projector.project_all(&vertices).into_iter().collect();
//! assert_eq!(set.len(), 3);
//! ```
//!
//! ## Recording Annotations
//!
//! Coordinate sets serialize to a JSON object of two parallel arrays,
//! `all_points_x` and `all_points_y`:
//!
//! ```no_run
//! use lenscast::annotate::CoordinateSet;
//! use lenscast::io;
//! use lenscast::project::ProjectedPoint;
//!
//! let mut set = CoordinateSet::new();
//! set.push(ProjectedPoint::new(960.0, 540.0));
//! io::save(&set, "annotations.json").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotate;
pub mod camera;
pub mod error;
pub mod io;
pub mod project;
pub mod scene;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use lenscast::prelude::*;
/// ```
pub mod prelude {
    pub use crate::annotate::CoordinateSet;
    pub use crate::camera::{Camera, Viewport};
    pub use crate::error::{Result, SceneError};
    pub use crate::project::{ProjectedPoint, Projector};
    pub use crate::scene::{fit_backdrop, BackdropPlane, SceneConfig};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
