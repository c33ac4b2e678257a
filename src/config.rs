/// All regularization parameters in one struct.
/// Passed explicitly into classification and completion so nothing
/// depends on global state; the defaults reproduce the reference behavior.
#[derive(Debug, Clone)]
pub struct RegularizeConfig {
    // -- Classification --
    /// Maximum deviation for a predicate to accept a curve (input units).
    pub tolerance: f64,

    // -- Fitting --
    /// Number of samples emitted by the line, circle and spline fitters.
    pub samples: usize,
    /// `stddev / mean` of the side lengths below which a quadrilateral
    /// is reconstructed as a square instead of a bounding rectangle.
    pub square_ratio: f64,

    // -- Completion --
    /// An edge longer than `gap_factor` times the mean edge is a gap.
    pub gap_factor: f64,
    /// How many points to insert across each detected gap.
    pub gap_density: GapDensity,

    // -- Failure handling --
    /// What happens to a curve whose fitter fails.
    pub failure_policy: FailurePolicy,

    // -- Rendering hand-off --
    /// Stroke colors, cycled by path index.
    pub palette: Vec<&'static str>,
    /// Canvas margin as a fraction of the drawing extent.
    pub padding: f64,
}

/// Interpolation density used when bridging a gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GapDensity {
    /// Always insert this many points, whatever the gap length.
    Fixed(usize),
    /// Insert points so that the bridged spacing is roughly
    /// `spacing` times the curve's mean spacing.
    Proportional { spacing: f64 },
}

/// Recovery action for a curve whose fitter failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Drop the curve from its path and log a warning.
    Skip,
    /// Keep the raw input points unchanged.
    PassThrough,
}

/// Palette of the reference renderer.
pub const DEFAULT_PALETTE: [&str; 7] =
    ["blue", "green", "red", "cyan", "magenta", "yellow", "black"];

/// Most points a proportional bridge may hold, endpoints included.
pub const MAX_GAP_POINTS: usize = 10_000;

impl Default for RegularizeConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            samples: 100,
            square_ratio: 0.05,
            gap_factor: 2.0,
            gap_density: GapDensity::Fixed(100),
            failure_policy: FailurePolicy::Skip,
            palette: DEFAULT_PALETTE.to_vec(),
            padding: 0.1,
        }
    }
}

impl GapDensity {
    /// Number of points spanning a gap of length `gap`, endpoints included.
    ///
    /// Proportional bridges are capped at [`MAX_GAP_POINTS`].
    pub fn points_for(&self, gap: f64, mean_spacing: f64) -> usize {
        match *self {
            GapDensity::Fixed(n) => n.max(2),
            GapDensity::Proportional { spacing } => {
                let step = mean_spacing * spacing;
                if step <= 0.0 || !step.is_finite() || !gap.is_finite() {
                    return 2;
                }
                let steps = (gap / step).ceil();
                if !steps.is_finite() || steps >= MAX_GAP_POINTS as f64 {
                    return MAX_GAP_POINTS;
                }
                (steps as usize).saturating_add(1).clamp(2, MAX_GAP_POINTS)
            }
        }
    }
}
