//! Membership tests for the primitive families.
//!
//! Each test answers yes or no; a curve that is too short for a
//! family simply fails that family's test.

use kurbo::Point;

use crate::geom::{centroid, mean, radii, side_lengths, std_dev, Regression};

/// Every point lies within `tolerance` of the y-on-x regression line.
///
/// Nearly vertical strokes have no usable regression and fail.
pub fn is_line(points: &[Point], tolerance: f64) -> bool {
    let Some(reg) = Regression::fit(points) else {
        return false;
    };
    points
        .iter()
        .all(|p| (reg.predict(p.x) - p.y).abs() < tolerance)
}

/// Every point's distance to the centroid is within `tolerance` of
/// the mean distance.
///
/// Centroid-based, so it only holds up when the points are spread
/// evenly around the true center.
pub fn is_circle(points: &[Point], tolerance: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    let Some(center) = centroid(points) else {
        return false;
    };
    let distances = radii(points, center);
    let radius = mean(&distances);
    distances.iter().all(|d| (d - radius).abs() < tolerance)
}

/// Exactly four points whose side lengths have a population standard
/// deviation below `tolerance`. Checks equal sides only: any rhombus passes.
pub fn is_quadrilateral(points: &[Point], tolerance: f64) -> bool {
    if points.len() != 4 {
        return false;
    }
    std_dev(&side_lengths(points)) < tolerance
}
