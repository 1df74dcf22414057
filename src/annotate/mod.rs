//! Projected-coordinate recording.
//!
//! Projecting a subject's vertices yields one display coordinate per
//! vertex; a [`CoordinateSet`] collects them in order so they can be
//! written out as an annotation next to the rendered image (see
//! [`crate::io::json`] for the file format).
//!
//! The container is deliberately dumb: insertion order is the only
//! structure, and the x/y sequences it exposes are always parallel and of
//! equal length.

use crate::project::ProjectedPoint;

/// An ordered collection of projected display coordinates.
///
/// # Example
///
/// ```
/// use lenscast::annotate::CoordinateSet;
/// use lenscast::project::ProjectedPoint;
///
/// let mut set = CoordinateSet::new();
/// set.push(ProjectedPoint::new(960.0, 540.0));
/// set.push(ProjectedPoint::new(12.5, 7.25));
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.xs(), vec![960.0, 12.5]);
/// assert_eq!(set.ys(), vec![540.0, 7.25]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateSet {
    points: Vec<ProjectedPoint>,
}

impl CoordinateSet {
    /// Create an empty coordinate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point, keeping insertion order.
    pub fn push(&mut self, point: ProjectedPoint) {
        self.points.push(point);
    }

    /// Number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been recorded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The recorded points in insertion order.
    pub fn points(&self) -> &[ProjectedPoint] {
        &self.points
    }

    /// Iterate over the recorded points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProjectedPoint> {
        self.points.iter()
    }

    /// The x coordinates, in insertion order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y coordinates, in insertion order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl Extend<ProjectedPoint> for CoordinateSet {
    fn extend<T: IntoIterator<Item = ProjectedPoint>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}

impl FromIterator<ProjectedPoint> for CoordinateSet {
    fn from_iter<T: IntoIterator<Item = ProjectedPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CoordinateSet {
    type Item = ProjectedPoint;
    type IntoIter = std::vec::IntoIter<ProjectedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a ProjectedPoint;
    type IntoIter = std::slice::Iter<'a, ProjectedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = CoordinateSet::new();
        for i in 0..5 {
            set.push(ProjectedPoint::new(i as f64, 10.0 * i as f64));
        }

        assert_eq!(set.len(), 5);
        for (i, p) in set.iter().enumerate() {
            assert_eq!(p.x, i as f64);
            assert_eq!(p.y, 10.0 * i as f64);
        }
    }

    #[test]
    fn test_parallel_sequences_stay_aligned() {
        let set: CoordinateSet = [
            ProjectedPoint::new(1.0, 2.0),
            ProjectedPoint::new(3.0, 4.0),
            ProjectedPoint::new(5.0, 6.0),
        ]
        .into_iter()
        .collect();

        let xs = set.xs();
        let ys = set.ys();
        assert_eq!(xs.len(), ys.len());
        for (i, p) in set.iter().enumerate() {
            assert_eq!(xs[i], p.x);
            assert_eq!(ys[i], p.y);
        }
    }

    #[test]
    fn test_empty_set() {
        let set = CoordinateSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.xs().is_empty());
        assert!(set.ys().is_empty());
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut set = CoordinateSet::with_capacity(3);
        set.push(ProjectedPoint::new(0.0, 0.0));
        set.extend([ProjectedPoint::new(1.0, 1.0), ProjectedPoint::new(2.0, 2.0)]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.points()[2], ProjectedPoint::new(2.0, 2.0));
    }
}
