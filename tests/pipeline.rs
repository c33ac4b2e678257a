use std::f64::consts::TAU;
use std::fmt;

use regularize::kurbo::Point;
use regularize::{
    regularize, regularize_curve, run, Curve, Drawing, DrawingSink, DrawingSource, FailurePolicy,
    FitError, GapDensity, Path, PipelineError, PrimitiveKind, RegularizeConfig, RenderStyle,
};

fn noisy_line(n: usize) -> Curve {
    // Deterministic jitter well under the default tolerance.
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.2;
            (x, 1.5 * x - 3.0 + 0.003 * (i as f64 * 1.7).sin())
        })
        .collect::<Vec<_>>()
        .into()
}

fn circle(center: (f64, f64), radius: f64, n: usize) -> Curve {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            (center.0 + radius * t.cos(), center.1 + radius * t.sin())
        })
        .collect::<Vec<_>>()
        .into()
}

fn scribble() -> Curve {
    Curve::from(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.5), (4.0, 4.0), (5.0, 0.0), (7.0, 3.0)])
}

fn too_short() -> Curve {
    Curve::from(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 0.5)])
}

#[test]
fn noisy_line_becomes_straight_hundred_point_line() {
    let drawing = Drawing::new(vec![Path::new(vec![noisy_line(50)])]);
    let result = regularize(&drawing, &RegularizeConfig::default());

    assert!(result.failures.is_empty());
    assert_eq!(result.kinds, vec![vec![Some(PrimitiveKind::Line)]]);
    assert_eq!(result.drawing.paths.len(), 1);
    assert_eq!(result.drawing.paths[0].curves.len(), 1);

    let line = &result.drawing.paths[0].curves[0];
    assert_eq!(line.len(), 100);
    let a = line.points[0];
    let b = line.points[99];
    for p in &line.points {
        // Collinear with the two ends.
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        assert!(cross.abs() < 1e-9, "{:?} is off the fitted line", p);
    }
}

#[test]
fn mixed_drawing_keeps_path_and_curve_order() {
    let paths: Vec<Path> = (0..12)
        .map(|i| {
            let offset = i as f64 * 20.0;
            Path::new(vec![
                circle((offset, 10.0), 3.0 + i as f64, 40),
                noisy_line(30),
                scribble(),
            ])
        })
        .collect();
    let drawing = Drawing::new(paths);
    let result = regularize(&drawing, &RegularizeConfig::default());

    assert!(result.failures.is_empty());
    assert_eq!(result.count(PrimitiveKind::Circle), 12);
    assert_eq!(result.count(PrimitiveKind::Line), 12);
    assert_eq!(result.count(PrimitiveKind::FreeForm), 12);

    for (i, path) in result.drawing.paths.iter().enumerate() {
        assert_eq!(
            result.kinds[i],
            vec![
                Some(PrimitiveKind::Circle),
                Some(PrimitiveKind::Line),
                Some(PrimitiveKind::FreeForm),
            ]
        );
        // Circle radius identifies the path it came from.
        let center = Point::new(i as f64 * 20.0, 10.0);
        let r = path.curves[0].points[0].distance(center);
        assert!((r - (3.0 + i as f64)).abs() < 1e-6, "path {} radius {}", i, r);
    }
}

#[test]
fn skip_policy_drops_failed_curves_but_keeps_paths() {
    let drawing = Drawing::new(vec![
        Path::new(vec![too_short(), noisy_line(20)]),
        Path::new(vec![Curve::default()]),
        Path::new(vec![scribble()]),
    ]);
    let config = RegularizeConfig::default();
    assert_eq!(config.failure_policy, FailurePolicy::Skip);
    let result = regularize(&drawing, &config);

    assert_eq!(result.drawing.paths.len(), 3);
    assert_eq!(result.drawing.paths[0].curves.len(), 1);
    assert_eq!(result.drawing.paths[0].curves[0].len(), 100);
    assert!(result.drawing.paths[1].curves.is_empty());
    assert_eq!(result.drawing.paths[2].curves.len(), 1);

    assert_eq!(result.kinds[0], vec![None, Some(PrimitiveKind::Line)]);
    assert_eq!(result.kinds[1], vec![None]);

    assert_eq!(result.failures.len(), 2);
    assert_eq!((result.failures[0].path, result.failures[0].curve), (0, 0));
    assert_eq!(result.failures[0].error, FitError::UnsupportedDomain { found: 3 });
    assert_eq!((result.failures[1].path, result.failures[1].curve), (1, 0));
    assert!(matches!(result.failures[1].error, FitError::MalformedCurve { .. }));
}

#[test]
fn pass_through_policy_keeps_raw_points() {
    let drawing = Drawing::new(vec![
        Path::new(vec![too_short(), noisy_line(20)]),
        Path::new(vec![Curve::default()]),
    ]);
    let config = RegularizeConfig {
        failure_policy: FailurePolicy::PassThrough,
        ..RegularizeConfig::default()
    };
    let result = regularize(&drawing, &config);

    assert_eq!(result.drawing.paths[0].curves.len(), 2);
    assert_eq!(result.drawing.paths[0].curves[0], too_short());
    assert_eq!(result.drawing.paths[0].curves[1].len(), 100);
    assert_eq!(result.drawing.paths[1].curves, vec![Curve::default()]);
    assert_eq!(result.failures.len(), 2);
}

fn rhombus() -> Curve {
    let s = 3.0f64.sqrt();
    Curve::from(vec![(0.0, 0.0), (2.0, 0.0), (3.0, s), (1.0, s)])
}

#[test]
fn fitted_curves_are_gap_filled() {
    // The rhombus fits to a 4-corner square with three equal edges. Below
    // a factor of 1 every edge counts as a gap and gets bridged.
    let config = RegularizeConfig {
        gap_factor: 0.5,
        ..RegularizeConfig::default()
    };
    let drawing = Drawing::new(vec![Path::new(vec![rhombus()])]);
    let result = regularize(&drawing, &config);

    assert_eq!(result.kinds, vec![vec![Some(PrimitiveKind::Quadrilateral)]]);
    let completed = &result.drawing.paths[0].curves[0];
    assert_eq!(completed.len(), 1 + 3 * 100);

    let corners = regularize::fit_quadrilateral(&rhombus().points, &config).unwrap();
    for (edge, pair) in corners.points.windows(2).enumerate() {
        let bridge = &completed.points[1 + edge * 100..1 + (edge + 1) * 100];
        assert_eq!(bridge[0], pair[0]);
        assert_eq!(bridge[99], pair[1]);
        let mid = pair[0].midpoint(pair[1]);
        assert!(
            bridge.iter().any(|p| p.distance(mid) < 0.02),
            "edge {} is not bridged along its chord",
            edge
        );
    }

    let (kind, single) = regularize_curve(&rhombus(), &config).unwrap();
    assert_eq!(kind, PrimitiveKind::Quadrilateral);
    assert_eq!(&single, completed);
}

#[test]
fn gap_density_reaches_the_drawing() {
    let config = RegularizeConfig {
        gap_factor: 0.5,
        gap_density: GapDensity::Proportional { spacing: 0.3 },
        ..RegularizeConfig::default()
    };
    let drawing = Drawing::new(vec![Path::new(vec![rhombus()])]);
    let result = regularize(&drawing, &config);
    // Each edge equals the mean spacing: ceil(1 / 0.3) + 1 = 5 points per bridge.
    assert_eq!(result.drawing.paths[0].curves[0].len(), 1 + 3 * 5);
}

#[test]
fn empty_drawing_is_fine() {
    let result = regularize(&Drawing::default(), &RegularizeConfig::default());
    assert!(result.drawing.paths.is_empty());
    assert!(result.kinds.is_empty());
    assert!(result.failures.is_empty());
}

#[derive(Default)]
struct Recorder {
    written: Vec<(Drawing, RenderStyle)>,
}

impl DrawingSink for Recorder {
    type Error = std::convert::Infallible;

    fn write(&mut self, drawing: &Drawing, style: &RenderStyle) -> Result<(), Self::Error> {
        self.written.push((drawing.clone(), style.clone()));
        Ok(())
    }
}

#[derive(Debug)]
struct Unreadable;

impl fmt::Display for Unreadable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unreadable input")
    }
}

impl std::error::Error for Unreadable {}

struct BrokenSource;

impl DrawingSource for BrokenSource {
    type Error = Unreadable;

    fn read(&mut self) -> Result<Drawing, Self::Error> {
        Err(Unreadable)
    }
}

#[test]
fn run_hands_regularized_drawing_to_sink() {
    let mut source = Drawing::new(vec![
        Path::new(vec![circle((50.0, 50.0), 10.0, 24)]),
        Path::new(vec![noisy_line(40)]),
    ]);
    let mut sink = Recorder::default();
    let result = run(&mut source, &mut sink, &RegularizeConfig::default()).unwrap();

    assert_eq!(sink.written.len(), 1);
    let (drawing, style) = &sink.written[0];
    assert_eq!(drawing, &result.drawing);
    assert_eq!(style.color_for(0), Some("blue"));
    assert_eq!(style.color_for(1), Some("green"));

    // Circle reaches about x = 60, y = 60; canvas is padded by 10%.
    let canvas = style.canvas.unwrap();
    assert_eq!(style.canvas, result.drawing.canvas(0.1));
    assert_eq!((canvas.x0, canvas.y0), (0.0, 0.0));
    assert!(canvas.x1 >= 65.0 && canvas.x1 <= 66.0, "canvas width {}", canvas.x1);
    assert!(canvas.y1 >= 65.0 && canvas.y1 <= 66.0, "canvas height {}", canvas.y1);
}

#[test]
fn run_reports_source_failure() {
    let mut sink = Recorder::default();
    let err = run(&mut BrokenSource, &mut sink, &RegularizeConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Read(Unreadable)));
    assert_eq!(err.to_string(), "failed to read drawing: unreadable input");
    assert!(sink.written.is_empty());
}
