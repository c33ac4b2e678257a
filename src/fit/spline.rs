//! Free-form fallback: interpolating parametric cubic spline.
//!
//! The curve is parametrised by cumulative chord length normalised to
//! [0, 1]. Each coordinate gets a C2 cubic interpolant with not-a-knot end
//! conditions (the first two and last two pieces share one cubic), so the
//! spline passes through every input point with zero smoothing. The pieces
//! are converted to cubic beziers and resampled at evenly spaced parameters.

use kurbo::{CubicBez, ParamCurve, Point, Vec2};

use crate::config::RegularizeConfig;
use crate::drawing::Curve;
use crate::error::FitError;
use crate::geom;

/// Fewest points a not-a-knot cubic can interpolate stably.
pub const MIN_SPLINE_POINTS: usize = 4;

/// Fit an interpolating spline and resample it to `config.samples` points.
pub fn fit_spline(points: &[Point], config: &RegularizeConfig) -> Result<Curve, FitError> {
    if points.len() < MIN_SPLINE_POINTS {
        return Err(FitError::UnsupportedDomain {
            found: points.len(),
        });
    }

    let knots = chord_parameters(points)?;
    let positions: Vec<Vec2> = points.iter().map(|p| p.to_vec2()).collect();
    let tangents = not_a_knot_slopes(&knots, &positions);

    let pieces: Vec<CubicBez> = (0..points.len() - 1)
        .map(|i| {
            let h = knots[i + 1] - knots[i];
            CubicBez::new(
                points[i],
                points[i] + tangents[i] * (h / 3.0),
                points[i + 1] - tangents[i + 1] * (h / 3.0),
                points[i + 1],
            )
        })
        .collect();

    let samples = geom::linspace(0.0, 1.0, config.samples)
        .into_iter()
        .map(|u| {
            // Last knot whose parameter is <= u, clamped to a valid piece.
            let i = knots
                .partition_point(|&k| k <= u)
                .saturating_sub(1)
                .min(pieces.len() - 1);
            let h = knots[i + 1] - knots[i];
            let t = ((u - knots[i]) / h).clamp(0.0, 1.0);
            pieces[i].eval(t)
        })
        .collect();

    Ok(Curve::new(samples))
}

/// Cumulative chord length, scaled so the last knot is exactly 1.
fn chord_parameters(points: &[Point]) -> Result<Vec<f64>, FitError> {
    let edges = geom::edge_lengths(points);
    if edges.iter().any(|&e| e <= 0.0) {
        return Err(FitError::DegenerateFit(
            "spline has repeated consecutive points".to_string(),
        ));
    }
    let total: f64 = edges.iter().sum();
    let mut knots = Vec::with_capacity(points.len());
    let mut acc = 0.0;
    knots.push(0.0);
    for e in &edges {
        acc += e;
        knots.push(acc / total);
    }
    if let Some(last) = knots.last_mut() {
        *last = 1.0;
    }
    Ok(knots)
}

/// First derivatives at each knot of the not-a-knot cubic interpolant.
///
/// Solves the tridiagonal slope system for both coordinates at once.
/// Requires at least 4 strictly increasing knots.
fn not_a_knot_slopes(u: &[f64], y: &[Vec2]) -> Vec<Vec2> {
    let n = u.len();
    let dx: Vec<f64> = u.windows(2).map(|w| w[1] - w[0]).collect();
    let slope: Vec<Vec2> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / dx[i]).collect();

    let mut lower = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut upper = vec![0.0; n];
    let mut rhs = vec![Vec2::ZERO; n];

    for i in 1..n - 1 {
        lower[i] = dx[i];
        diag[i] = 2.0 * (dx[i - 1] + dx[i]);
        upper[i] = dx[i - 1];
        rhs[i] = (slope[i - 1] * dx[i] + slope[i] * dx[i - 1]) * 3.0;
    }

    let d = u[2] - u[0];
    diag[0] = dx[1];
    upper[0] = d;
    rhs[0] = (slope[0] * ((dx[0] + 2.0 * d) * dx[1]) + slope[1] * (dx[0] * dx[0])) / d;

    let d = u[n - 1] - u[n - 3];
    diag[n - 1] = dx[n - 3];
    lower[n - 1] = d;
    rhs[n - 1] = (slope[n - 3] * (dx[n - 2] * dx[n - 2])
        + slope[n - 2] * ((2.0 * d + dx[n - 2]) * dx[n - 3]))
        / d;

    solve_tridiagonal(&lower, &mut diag, &upper, &mut rhs);
    rhs
}

/// Thomas algorithm. Overwrites `diag` and leaves the solution in `rhs`.
fn solve_tridiagonal(lower: &[f64], diag: &mut [f64], upper: &[f64], rhs: &mut [Vec2]) {
    let n = diag.len();
    for i in 1..n {
        let m = lower[i] / diag[i - 1];
        diag[i] -= m * upper[i - 1];
        let prev = rhs[i - 1];
        rhs[i] -= prev * m;
    }
    rhs[n - 1] /= diag[n - 1];
    for i in (0..n - 1).rev() {
        let next = rhs[i + 1];
        rhs[i] = (rhs[i] - next * upper[i]) / diag[i];
    }
}
