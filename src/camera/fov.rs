//! Field-of-view conversion.
//!
//! Cameras state their field of view as a vertical angle; sizing scene
//! geometry to the visible frustum needs the horizontal angle as well.
//! The conversion depends only on the viewport's aspect ratio:
//!
//! ```text
//! tan(h / 2) = tan(v / 2) * aspect_ratio
//! ```
//!
//! Angles grow with aspect ratio, so a 30° vertical field of view on a
//! 16:9 viewport spans roughly 50.9° horizontally.

use crate::error::{Result, SceneError};

/// Convert a vertical field of view in degrees to radians, validating it.
///
/// The angle must lie strictly between 0° and 180°; at either end the
/// frustum collapses (or flips) and the projection is meaningless.
///
/// # Example
///
/// ```
/// use lenscast::camera::fov::vertical_fov_radians;
///
/// let v = vertical_fov_radians(30.0).unwrap();
/// assert!((v - 0.5235987755982988).abs() < 1e-12);
///
/// assert!(vertical_fov_radians(0.0).is_err());
/// assert!(vertical_fov_radians(180.0).is_err());
/// ```
pub fn vertical_fov_radians(fov_y_deg: f64) -> Result<f64> {
    // Written so that NaN fails the range test as well.
    if !(fov_y_deg > 0.0 && fov_y_deg < 180.0) {
        return Err(SceneError::invalid_param(
            "fov_y_deg",
            fov_y_deg,
            "must lie in (0, 180) degrees",
        ));
    }
    Ok(fov_y_deg.to_radians())
}

/// Compute the horizontal field of view in radians.
///
/// # Arguments
///
/// * `fov_y_deg` - Vertical field of view in degrees, in (0°, 180°)
/// * `aspect_ratio` - Viewport width divided by height, must be positive
///
/// The result is always positive and strictly increases with the aspect
/// ratio. An aspect ratio of 1 returns the vertical angle unchanged
/// (converted to radians).
///
/// # Example
///
/// ```
/// use lenscast::camera::fov::horizontal_fov;
///
/// // Square viewport: horizontal equals vertical.
/// let h = horizontal_fov(45.0, 1.0).unwrap();
/// assert!((h - 45f64.to_radians()).abs() < 1e-12);
///
/// // Widescreen: horizontal is wider.
/// let wide = horizontal_fov(30.0, 1920.0 / 1080.0).unwrap();
/// assert!(wide > 30f64.to_radians());
/// ```
pub fn horizontal_fov(fov_y_deg: f64, aspect_ratio: f64) -> Result<f64> {
    if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
        return Err(SceneError::invalid_param(
            "aspect_ratio",
            aspect_ratio,
            "must be positive and finite",
        ));
    }

    let v = vertical_fov_radians(fov_y_deg)?;
    let half_h = ((v / 2.0).tan() * aspect_ratio).atan();
    Ok(2.0 * half_h)
}
