//! Curve classification: ordered (predicate, fitter) strategy table.
//!
//! Families are tried in precedence order and the first whose test
//! accepts the curve wins. Free-form always accepts, so exactly one
//! fitter runs per curve.

use std::fmt;

use kurbo::Point;

use crate::config::RegularizeConfig;
use crate::drawing::Curve;
use crate::error::FitError;
use crate::fit;
use crate::predicate;

/// The primitive families a curve can be reconstructed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Line,
    Circle,
    Quadrilateral,
    FreeForm,
}

type Predicate = fn(&[Point], f64) -> bool;
type Fitter = fn(&[Point], &RegularizeConfig) -> Result<Curve, FitError>;

/// One row of the strategy table.
struct Strategy {
    kind: PrimitiveKind,
    test: Predicate,
    fit: Fitter,
}

/// Precedence order. A near-straight 4-point stroke is claimed by
/// `Line` before `Quadrilateral` is considered.
static STRATEGIES: [Strategy; 4] = [
    Strategy {
        kind: PrimitiveKind::Line,
        test: predicate::is_line,
        fit: fit::fit_line,
    },
    Strategy {
        kind: PrimitiveKind::Circle,
        test: predicate::is_circle,
        fit: fit::fit_circle,
    },
    Strategy {
        kind: PrimitiveKind::Quadrilateral,
        test: predicate::is_quadrilateral,
        fit: fit::fit_quadrilateral,
    },
    Strategy {
        kind: PrimitiveKind::FreeForm,
        test: accept_any,
        fit: fit::fit_spline,
    },
];

fn accept_any(_: &[Point], _: f64) -> bool {
    true
}

impl PrimitiveKind {
    /// All families in precedence order.
    pub const PRECEDENCE: [PrimitiveKind; 4] = [
        PrimitiveKind::Line,
        PrimitiveKind::Circle,
        PrimitiveKind::Quadrilateral,
        PrimitiveKind::FreeForm,
    ];

    fn strategy(self) -> &'static Strategy {
        // Every kind has a row; the free-form row closes the table.
        STRATEGIES
            .iter()
            .find(|s| s.kind == self)
            .unwrap_or(&STRATEGIES[STRATEGIES.len() - 1])
    }

    /// Whether `points` belong to this family.
    pub fn matches(self, points: &[Point], tolerance: f64) -> bool {
        (self.strategy().test)(points, tolerance)
    }

    /// Reconstruct `points` as this family's canonical primitive.
    pub fn fit(self, points: &[Point], config: &RegularizeConfig) -> Result<Curve, FitError> {
        (self.strategy().fit)(points, config)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveKind::Line => "line",
            PrimitiveKind::Circle => "circle",
            PrimitiveKind::Quadrilateral => "quadrilateral",
            PrimitiveKind::FreeForm => "free-form",
        };
        f.write_str(name)
    }
}

/// The first family in precedence order whose test accepts the curve.
pub fn detect(curve: &Curve, tolerance: f64) -> PrimitiveKind {
    PrimitiveKind::PRECEDENCE
        .into_iter()
        .find(|kind| kind.matches(&curve.points, tolerance))
        .unwrap_or(PrimitiveKind::FreeForm)
}

/// Detect the curve's family and run that family's fitter.
///
/// A fitter failure is returned as-is; no other family is tried.
pub fn classify(
    curve: &Curve,
    config: &RegularizeConfig,
) -> Result<(PrimitiveKind, Curve), FitError> {
    if curve.is_empty() {
        return Err(FitError::MalformedCurve {
            kind: PrimitiveKind::FreeForm,
            required: 1,
            found: 0,
        });
    }
    let kind = detect(curve, config.tolerance);
    log::debug!("  Detect      {} ({} points)", kind, curve.len());
    let fitted = kind.fit(&curve.points, config)?;
    Ok((kind, fitted))
}
