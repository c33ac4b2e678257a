//! regularize: hand-drawn 2D curves → clean geometric primitives.
//!
//! Each curve of a [`Drawing`] is classified as a line, circle,
//! quadrilateral or free-form stroke, replaced with a canonical
//! reconstruction of that primitive, and gap-filled into a continuous
//! polyline ready for vector rendering.
//!
//! # Example
//!
//! ```
//! use regularize::{regularize, Curve, Drawing, Path, PrimitiveKind, RegularizeConfig};
//!
//! let stroke: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, 0.5 * i as f64 + 2.0)).collect();
//! let drawing = Drawing::new(vec![Path::new(vec![Curve::from(stroke)])]);
//!
//! let result = regularize(&drawing, &RegularizeConfig::default());
//! assert_eq!(result.kinds[0][0], Some(PrimitiveKind::Line));
//! assert_eq!(result.drawing.paths[0].curves[0].len(), 100);
//! ```

#![forbid(unsafe_code)]

mod classify;
mod complete;
mod config;
mod drawing;
mod fit;
mod geom;
mod predicate;

pub mod error;
pub mod pipeline;

// Re-export kurbo so downstream users get the same Point type.
pub use kurbo;

pub use classify::{classify, detect, PrimitiveKind};
pub use complete::{complete_curve, count_gaps};
pub use config::{FailurePolicy, GapDensity, RegularizeConfig, DEFAULT_PALETTE, MAX_GAP_POINTS};
pub use drawing::{Curve, Drawing, Path};
pub use error::FitError;
pub use fit::{fit_circle, fit_line, fit_quadrilateral, fit_spline};
pub use pipeline::{run, DrawingSink, DrawingSource, PipelineError, RenderStyle};
pub use predicate::{is_circle, is_line, is_quadrilateral};

use rayon::prelude::*;
use std::time::Instant;

/// A curve whose fitter failed, by position in the input drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveFailure {
    pub path: usize,
    pub curve: usize,
    pub error: FitError,
}

/// The result of regularizing a drawing.
#[derive(Debug, Clone)]
pub struct Regularized {
    /// Completed curves, in input path order.
    pub drawing: Drawing,
    /// Detected family of each input curve; `None` where fitting failed.
    pub kinds: Vec<Vec<Option<PrimitiveKind>>>,
    /// Every fitter failure, in input order.
    pub failures: Vec<CurveFailure>,
}

impl Regularized {
    /// How many curves were reconstructed as `kind`.
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.kinds
            .iter()
            .flatten()
            .filter(|k| **k == Some(kind))
            .count()
    }
}

/// Classify → fit → complete a single curve.
pub fn regularize_curve(
    curve: &Curve,
    config: &RegularizeConfig,
) -> Result<(PrimitiveKind, Curve), FitError> {
    let (kind, fitted) = classify(curve, config)?;
    Ok((kind, complete_curve(&fitted, config)))
}

/// Full pipeline over a drawing.
///
/// Paths are processed in parallel; output order matches input order.
/// A curve whose fitter fails is handled per `config.failure_policy` and
/// never stops the rest of the drawing.
pub fn regularize(drawing: &Drawing, config: &RegularizeConfig) -> Regularized {
    let t_start = Instant::now();
    log::info!(
        "  Load        {} paths · {} curves · {} points",
        drawing.paths.len(),
        drawing.curve_count(),
        drawing.point_count(),
    );

    let per_path: Vec<(Path, Vec<Option<PrimitiveKind>>, Vec<CurveFailure>)> = drawing
        .paths
        .par_iter()
        .enumerate()
        .map(|(path_index, path)| regularize_path(path_index, path, config))
        .collect();

    let mut paths = Vec::with_capacity(per_path.len());
    let mut kinds = Vec::with_capacity(per_path.len());
    let mut failures = Vec::new();
    for (path, path_kinds, path_failures) in per_path {
        paths.push(path);
        kinds.push(path_kinds);
        failures.extend(path_failures);
    }

    let result = Regularized {
        drawing: Drawing::new(paths),
        kinds,
        failures,
    };
    log::info!(
        "  Classify    {} lines · {} circles · {} quads · {} free-form · {} failed",
        result.count(PrimitiveKind::Line),
        result.count(PrimitiveKind::Circle),
        result.count(PrimitiveKind::Quadrilateral),
        result.count(PrimitiveKind::FreeForm),
        result.failures.len(),
    );
    log::info!(
        "  Result      {} curves · {} points  ({}ms)",
        result.drawing.curve_count(),
        result.drawing.point_count(),
        t_start.elapsed().as_millis(),
    );
    result
}

fn regularize_path(
    path_index: usize,
    path: &Path,
    config: &RegularizeConfig,
) -> (Path, Vec<Option<PrimitiveKind>>, Vec<CurveFailure>) {
    let mut curves = Vec::with_capacity(path.curves.len());
    let mut kinds = Vec::with_capacity(path.curves.len());
    let mut failures = Vec::new();

    for (curve_index, curve) in path.curves.iter().enumerate() {
        match regularize_curve(curve, config) {
            Ok((kind, completed)) => {
                curves.push(completed);
                kinds.push(Some(kind));
            }
            Err(error) => {
                log::warn!(
                    "  Failed      path {} curve {}: {} ({:?})",
                    path_index,
                    curve_index,
                    error,
                    config.failure_policy,
                );
                if config.failure_policy == FailurePolicy::PassThrough {
                    curves.push(curve.clone());
                }
                kinds.push(None);
                failures.push(CurveFailure {
                    path: path_index,
                    curve: curve_index,
                    error,
                });
            }
        }
    }

    (Path::new(curves), kinds, failures)
}
