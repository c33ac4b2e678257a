//! Gap completion for reconstructed curves.
//!
//! An edge longer than `gap_factor` times the curve's mean edge length
//! is bridged with straight-line interpolation between its endpoints.
//! All other points are kept as they are.

use kurbo::Point;

use crate::config::RegularizeConfig;
use crate::drawing::Curve;
use crate::geom;

/// Bridge every gap in `curve`.
///
/// The bridge spans the gap inclusively, so its first point repeats the
/// gap's start point. Curves with fewer than 2 points come back unchanged.
pub fn complete_curve(curve: &Curve, config: &RegularizeConfig) -> Curve {
    let points = &curve.points;
    if points.len() < 2 {
        return curve.clone();
    }
    let distances = geom::edge_lengths(points);
    let spacing = geom::mean(&distances);
    let threshold = spacing * config.gap_factor;

    let mut completed = Vec::with_capacity(points.len());
    completed.push(points[0]);
    for (i, &d) in distances.iter().enumerate() {
        let (start, end) = (points[i], points[i + 1]);
        if d > threshold {
            let count = config.gap_density.points_for(d, spacing);
            completed.extend(bridge(start, end, count));
        } else {
            completed.push(end);
        }
    }
    Curve::new(completed)
}

/// `count` points from `start` to `end`, both included.
fn bridge(start: Point, end: Point, count: usize) -> impl Iterator<Item = Point> {
    let xs = geom::linspace(start.x, end.x, count);
    let ys = geom::linspace(start.y, end.y, count);
    xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y))
}

/// Number of gaps `complete_curve` would bridge.
pub fn count_gaps(curve: &Curve, config: &RegularizeConfig) -> usize {
    if curve.len() < 2 {
        return 0;
    }
    let distances = geom::edge_lengths(&curve.points);
    let threshold = geom::mean(&distances) * config.gap_factor;
    distances.iter().filter(|&&d| d > threshold).count()
}
