//! Closest pair of points on the integer grid.

use thiserror::Error;

/// Raised when the input cannot form a pair.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("closest pair needs at least two points (got {count})")]
    TooFewPoints { count: usize },
}

/// Smallest squared Euclidean distance between any two points.
///
/// Quadratic scan.  Returning the squared distance keeps integer-grid inputs
/// exact in `f64`, so isometry relations can compare for equality.
pub fn closest_pair_squared(points: &[(i64, i64)]) -> Result<f64, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::TooFewPoints {
            count: points.len(),
        });
    }
    let mut best = f64::INFINITY;
    for (index, &(x1, y1)) in points.iter().enumerate() {
        for &(x2, y2) in &points[index + 1..] {
            let dx = (x1 - x2) as f64;
            let dy = (y1 - y2) as f64;
            best = best.min(dx * dx + dy * dy);
        }
    }
    Ok(best)
}
