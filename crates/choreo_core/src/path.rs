//! Polyline motion paths
//!
//! A [`MotionPath`] is a measured polyline: it knows its total arc length and
//! can resolve any distance along it to a position. Path-following tracks
//! animate a synthetic value from zero to the path length and reposition the
//! element at every produced frame.

use thiserror::Error;

/// Motion path construction errors
#[derive(Error, Debug)]
pub enum PathError {
    /// A path needs at least a start and an end point
    #[error("motion path needs at least two points, got {0}")]
    TooFewPoints(usize),
}

/// A polyline path with precomputed cumulative arc lengths
#[derive(Clone, Debug)]
pub struct MotionPath {
    points: Vec<(f32, f32)>,
    /// Cumulative arc length up to each point; `lengths[0]` is 0.0
    lengths: Vec<f32>,
}

impl MotionPath {
    /// Build a path from a sequence of points, measuring each segment
    pub fn new(points: Vec<(f32, f32)>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints(points.len()));
        }

        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0_f32;
        lengths.push(0.0);
        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            total += ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            lengths.push(total);
        }

        Ok(Self { points, lengths })
    }

    /// Total arc length of the path
    pub fn length(&self) -> f32 {
        *self.lengths.last().unwrap_or(&0.0)
    }

    /// Position at `distance` along the path, clamped to the ends
    pub fn point_at(&self, distance: f32) -> (f32, f32) {
        if distance <= 0.0 {
            return self.points[0];
        }
        if distance >= self.length() {
            return *self.points.last().unwrap_or(&self.points[0]);
        }

        // Find the segment containing `distance`
        let seg = self
            .lengths
            .windows(2)
            .position(|w| distance >= w[0] && distance <= w[1])
            .unwrap_or(self.points.len() - 2);

        let seg_start = self.lengths[seg];
        let seg_len = self.lengths[seg + 1] - seg_start;
        if seg_len <= f32::EPSILON {
            return self.points[seg];
        }

        let t = (distance - seg_start) / seg_len;
        let (x0, y0) = self.points[seg];
        let (x1, y1) = self.points[seg + 1];
        (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_paths() {
        assert!(matches!(
            MotionPath::new(vec![]),
            Err(PathError::TooFewPoints(0))
        ));
        assert!(matches!(
            MotionPath::new(vec![(1.0, 1.0)]),
            Err(PathError::TooFewPoints(1))
        ));
    }

    #[test]
    fn test_length_of_l_shape() {
        let path = MotionPath::new(vec![(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_eq!(path.length(), 7.0);
    }

    #[test]
    fn test_point_at_interpolates_within_segments() {
        let path = MotionPath::new(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]).unwrap();

        assert_eq!(path.point_at(5.0), (5.0, 0.0));
        assert_eq!(path.point_at(10.0), (10.0, 0.0));
        assert_eq!(path.point_at(15.0), (10.0, 5.0));
    }

    #[test]
    fn test_point_at_clamps_to_ends() {
        let path = MotionPath::new(vec![(1.0, 2.0), (4.0, 6.0)]).unwrap();
        assert_eq!(path.point_at(-10.0), (1.0, 2.0));
        assert_eq!(path.point_at(100.0), (4.0, 6.0));
    }
}
