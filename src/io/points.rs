//! Plain-text point lists.
//!
//! The projection pipeline consumes world-space vertex positions handed
//! over by the rendering side. The file seam for that hand-off is as
//! simple as it gets: one `x y z` triple per line, whitespace separated.
//! Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # subject vertices, world space
//! -0.5 -0.5 0.0
//!  0.5 -0.5 0.0
//!  0.0  0.5 0.0
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::Point3;

use crate::error::{Result, SceneError};

/// Load world-space points from a plain-text point list.
///
/// Errors name the offending line. An empty file yields an empty list.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point3<f64>>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut points = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(SceneError::LoadError {
                path: path.to_path_buf(),
                message: format!(
                    "line {}: expected 3 coordinates, found {}",
                    index + 1,
                    fields.len()
                ),
            });
        }

        let mut coords = [0.0f64; 3];
        for (slot, field) in coords.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| SceneError::LoadError {
                path: path.to_path_buf(),
                message: format!("line {}: '{}' is not a number", index + 1, field),
            })?;
        }
        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_points_with_comments_and_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.txt");
        std::fs::write(
            &path,
            "# header\n\n-0.5 -0.5 0.0\n 0.5 -0.5 0.0\n\n0.0 0.5 1e-3\n",
        )
        .unwrap();

        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point3::new(-0.5, -0.5, 0.0));
        assert_eq!(points[2], Point3::new(0.0, 0.5, 1e-3));
    }

    #[test]
    fn test_empty_file_is_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        assert!(load_points(&path).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_arity_names_the_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "0 0 0\n1 1 1\n2 2\n").unwrap();

        let err = load_points(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 3"), "got: {}", msg);
        assert!(msg.contains("expected 3 coordinates"), "got: {}", msg);
    }

    #[test]
    fn test_non_numeric_field_names_the_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "0 zero 0\n").unwrap();

        let err = load_points(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'zero'"), "got: {}", msg);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_points(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
