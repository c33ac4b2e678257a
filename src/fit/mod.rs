//! Primitive fitters: a curve presumed to belong to a family →
//! the canonical reconstruction of that primitive.
//!
//! Line, circle and spline fits are resampled to `config.samples`
//! points; quadrilaterals come back as their 4 corners.

mod spline;

pub use spline::fit_spline;

use std::f64::consts::TAU;

use kurbo::Point;

use crate::classify::PrimitiveKind;
use crate::config::RegularizeConfig;
use crate::drawing::Curve;
use crate::error::FitError;
use crate::geom::{self, Regression};

/// Smallest length treated as non-zero for radii and side lengths.
const MIN_LENGTH: f64 = 1e-12;

/// Resample the regression line between the input's min and max x.
pub fn fit_line(points: &[Point], config: &RegularizeConfig) -> Result<Curve, FitError> {
    require(points, PrimitiveKind::Line, 2)?;
    let reg = Regression::fit(points).ok_or_else(|| {
        FitError::DegenerateFit("line regression needs spread in x".to_string())
    })?;
    let (x_min, x_max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
    let samples = geom::linspace(x_min, x_max, config.samples)
        .into_iter()
        .map(|x| Point::new(x, reg.predict(x)))
        .collect();
    Ok(Curve::new(samples))
}

/// Resample a circle around the centroid at the mean centroid distance.
///
/// θ runs over [0, 2π] with both ends included, so the first and last
/// samples coincide and the polyline is explicitly closed.
pub fn fit_circle(points: &[Point], config: &RegularizeConfig) -> Result<Curve, FitError> {
    require(points, PrimitiveKind::Circle, 3)?;
    let center = geom::centroid(points)
        .ok_or_else(|| FitError::DegenerateFit("circle has no centroid".to_string()))?;
    let radius = geom::mean(&geom::radii(points, center));
    if radius < MIN_LENGTH {
        return Err(FitError::DegenerateFit(
            "circle points all coincide with the centroid".to_string(),
        ));
    }
    let samples = geom::linspace(0.0, TAU, config.samples)
        .into_iter()
        .map(|theta| {
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect();
    Ok(Curve::new(samples))
}

/// Square or axis-aligned rectangle through 4 corner points.
///
/// Nearly equal sides (`stddev / mean < square_ratio`) give a square of
/// the mean side length centred on the centroid. Anything else becomes
/// the bounding box of the input; a rotated rectangle loses its rotation.
pub fn fit_quadrilateral(points: &[Point], config: &RegularizeConfig) -> Result<Curve, FitError> {
    if points.len() != 4 {
        return Err(FitError::MalformedCurve {
            kind: PrimitiveKind::Quadrilateral,
            required: 4,
            found: points.len(),
        });
    }
    let sides = geom::side_lengths(points);
    if sides.iter().any(|&s| s < MIN_LENGTH) {
        return Err(FitError::DegenerateFit(
            "quadrilateral has coincident corners".to_string(),
        ));
    }
    let average = geom::mean(&sides);

    if geom::std_dev(&sides) / average < config.square_ratio {
        let center = geom::centroid(points)
            .ok_or_else(|| FitError::DegenerateFit("quadrilateral has no centroid".to_string()))?;
        let half = average / 2.0;
        return Ok(Curve::new(vec![
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y - half),
            Point::new(center.x + half, center.y + half),
            Point::new(center.x - half, center.y + half),
        ]));
    }

    let bounds = geom::bounds(points)
        .ok_or_else(|| FitError::DegenerateFit("quadrilateral has no bounds".to_string()))?;
    Ok(Curve::new(vec![
        Point::new(bounds.x0, bounds.y0),
        Point::new(bounds.x1, bounds.y0),
        Point::new(bounds.x1, bounds.y1),
        Point::new(bounds.x0, bounds.y1),
    ]))
}

/// Reject inputs shorter than a fitter's minimum.
fn require(points: &[Point], kind: PrimitiveKind, required: usize) -> Result<(), FitError> {
    if points.len() < required {
        return Err(FitError::MalformedCurve {
            kind,
            required,
            found: points.len(),
        });
    }
    Ok(())
}
