//! Annotation JSON format support.
//!
//! Projected coordinates are stored as one JSON object holding two parallel
//! arrays, matching the layout downstream labeling tools consume:
//!
//! ```json
//! {"all_points_x": [960.0, 12.5], "all_points_y": [540.0, 7.25]}
//! ```
//!
//! The arrays always have equal length and follow recording order. Saving
//! overwrites any existing file at the path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::annotate::CoordinateSet;
use crate::error::{Result, SceneError};
use crate::project::ProjectedPoint;

/// On-disk layout: two parallel coordinate arrays.
#[derive(Serialize, Deserialize)]
struct CoordinateFile {
    all_points_x: Vec<f64>,
    all_points_y: Vec<f64>,
}

/// Save a coordinate set to an annotation JSON file.
///
/// Creates the file if missing and overwrites it otherwise. An empty set
/// writes two empty arrays.
///
/// # Example
///
/// ```no_run
/// use lenscast::annotate::CoordinateSet;
/// use lenscast::io::json;
///
/// let set = CoordinateSet::new();
/// json::save(&set, "annotations.json").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(set: &CoordinateSet, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let raw = CoordinateFile {
        all_points_x: set.xs(),
        all_points_y: set.ys(),
    };
    serde_json::to_writer(&mut writer, &raw).map_err(|e| SceneError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    writer.flush()?;

    log::debug!(
        "wrote {} coordinate pairs to {}",
        set.len(),
        path.display()
    );
    Ok(())
}

/// Load a coordinate set from an annotation JSON file.
///
/// # Errors
///
/// Fails with [`SceneError::LoadError`] for malformed JSON and with
/// [`SceneError::MismatchedArrays`] when the two arrays differ in length.
///
/// # Example
///
/// ```no_run
/// use lenscast::io::json;
///
/// let set = json::load("annotations.json").unwrap();
/// println!("{} points", set.len());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<CoordinateSet> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let raw: CoordinateFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| SceneError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if raw.all_points_x.len() != raw.all_points_y.len() {
        return Err(SceneError::MismatchedArrays {
            x_len: raw.all_points_x.len(),
            y_len: raw.all_points_y.len(),
        });
    }

    Ok(raw
        .all_points_x
        .iter()
        .zip(raw.all_points_y.iter())
        .map(|(&x, &y)| ProjectedPoint::new(x, y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> CoordinateSet {
        [
            ProjectedPoint::new(960.0, 540.0),
            ProjectedPoint::new(0.1, 1e-9),
            ProjectedPoint::new(-12.25, 2048.5),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");

        let set = sample_set();
        save(&set, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, set);
    }

    #[test]
    fn test_empty_set_exact_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        save(&CoordinateSet::new(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"all_points_x":[],"all_points_y":[]}"#);
    }

    #[test]
    fn test_arrays_follow_recording_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ordered.json");

        let set = sample_set();
        save(&set, &path).unwrap();
        let loaded = load(&path).unwrap();

        let xs = loaded.xs();
        let ys = loaded.ys();
        assert_eq!(xs.len(), set.len());
        for (i, p) in set.iter().enumerate() {
            assert_eq!(xs[i], p.x, "x[{}] out of order", i);
            assert_eq!(ys[i], p.y, "y[{}] out of order", i);
        }
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coords.json");

        save(&sample_set(), &path).unwrap();
        let second: CoordinateSet = [ProjectedPoint::new(1.0, 2.0)].into_iter().collect();
        save(&second, &path).unwrap();

        assert_eq!(load(&path).unwrap(), second);
    }

    #[test]
    fn test_load_rejects_mismatched_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"all_points_x":[1.0,2.0],"all_points_y":[3.0]}"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(
            err,
            SceneError::MismatchedArrays { x_len: 2, y_len: 1 }
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, "not json at all").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SceneError::LoadError { .. }));
    }

    #[test]
    fn test_save_to_unwritable_path_is_io_error() {
        // The temp directory itself is not a writable file path.
        let dir = tempfile::tempdir().unwrap();
        let err = save(&CoordinateSet::new(), dir.path()).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }
}
