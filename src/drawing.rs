//! In-memory drawing model: points grouped into curves, curves into paths.

use kurbo::{BezPath, PathEl, Point, Rect};

/// One continuous drawn stroke. Point order is traversal order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    pub points: Vec<Point>,
}

/// The curves making up one logical figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub curves: Vec<Curve>,
}

/// An ordered sequence of paths: the full input/output unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    pub paths: Vec<Path>,
}

impl Curve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the first and last points coincide within `eps`.
    pub fn is_closed(&self, eps: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 1 => a.distance(*b) <= eps,
            _ => false,
        }
    }

    /// Polyline `BezPath` for rendering.
    ///
    /// Open curves get a `ClosePath`, matching the reference renderer
    /// which closes every stroke whose ends don't already meet.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some(&first) = self.points.first() {
            path.move_to(first);
            for &p in &self.points[1..] {
                path.line_to(p);
            }
            if !self.is_closed(1e-8) {
                path.push(PathEl::ClosePath);
            }
        }
        path
    }
}

impl From<Vec<Point>> for Curve {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<(f64, f64)>> for Curve {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Point::from).collect())
    }
}

impl Path {
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }
}

impl Drawing {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn curve_count(&self) -> usize {
        self.paths.iter().map(|p| p.curves.len()).sum()
    }

    pub fn point_count(&self) -> usize {
        self.paths
            .iter()
            .flat_map(|p| &p.curves)
            .map(Curve::len)
            .sum()
    }

    fn points(&self) -> impl Iterator<Item = &Point> {
        self.paths
            .iter()
            .flat_map(|p| &p.curves)
            .flat_map(|c| &c.points)
    }

    /// Canvas from the origin to the maximum coordinates, grown by
    /// `padding` (a fraction of each extent) and truncated to whole units.
    ///
    /// The extent never drops below the origin. `None` when the drawing
    /// holds no points.
    pub fn canvas(&self, padding: f64) -> Option<Rect> {
        let mut points = self.points().peekable();
        points.peek()?;
        let (max_x, max_y) = points.fold((0.0f64, 0.0f64), |(w, h), p| {
            (w.max(p.x), h.max(p.y))
        });
        let w = (max_x + padding * max_x).trunc();
        let h = (max_y + padding * max_y).trunc();
        Some(Rect::new(0.0, 0.0, w, h))
    }

    /// Every curve as a polyline `BezPath`, grouped by path.
    pub fn to_bezpaths(&self) -> Vec<Vec<BezPath>> {
        self.paths
            .iter()
            .map(|p| p.curves.iter().map(Curve::to_bezpath).collect())
            .collect()
    }
}
