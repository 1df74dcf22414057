//! Unique output names.
//!
//! Batch dataset generation drops many screenshot/annotation pairs into a
//! single directory; a short random suffix keeps repeated runs from
//! clobbering earlier samples.

use std::path::{Path, PathBuf};

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the random suffix appended to stems.
const SUFFIX_LEN: usize = 6;

/// Produce `prefix_XXXXXX` with a random alphanumeric suffix.
///
/// # Example
///
/// ```
/// use lenscast::io::naming::unique_stem;
///
/// let stem = unique_stem("sample");
/// assert!(stem.starts_with("sample_"));
/// assert_eq!(stem.len(), "sample_".len() + 6);
/// ```
pub fn unique_stem(prefix: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}_{}", prefix, suffix)
}

/// Produce `dir/prefix_XXXXXX.extension`.
pub fn unique_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", unique_stem(prefix), extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_shape() {
        let stem = unique_stem("shot");
        assert!(stem.starts_with("shot_"));
        assert_eq!(stem.len(), "shot_".len() + SUFFIX_LEN);

        let suffix = &stem["shot_".len()..];
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_stems_differ_between_calls() {
        // 62^6 possibilities; a collision here means the rng is broken.
        let a = unique_stem("shot");
        let b = unique_stem("shot");
        assert_ne!(a, b);
    }

    #[test]
    fn test_unique_path_layout() {
        let path = unique_path(Path::new("out"), "sample", "json");
        assert_eq!(path.extension().unwrap(), "json");
        assert_eq!(path.parent().unwrap(), Path::new("out"));
        assert!(path
            .file_stem()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("sample_"));
    }
}
