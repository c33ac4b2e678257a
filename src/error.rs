use thiserror::Error;

use crate::classify::PrimitiveKind;

/// Errors that can occur while fitting a primitive to a curve.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FitError {
    #[error("malformed curve: {kind} fit needs {required} points, got {found}")]
    MalformedCurve {
        kind: PrimitiveKind,
        required: usize,
        found: usize,
    },

    #[error("degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("spline fit needs at least 4 points, got {found}")]
    UnsupportedDomain { found: usize },
}
