//! Shared geometry utilities.

use geo::{BoundingRect, Centroid, MultiPoint};
use kurbo::{Point, Rect};

/// Slope and intercept of a least-squares fit of y on x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Ordinary least squares of y on x.
    ///
    /// `None` for fewer than 2 points or when x has no spread
    /// (a vertical stroke has no y-on-x fit).
    pub fn fit(points: &[Point]) -> Option<Regression> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for p in points {
            let dx = p.x - mean_x;
            sxx += dx * dx;
            sxy += dx * (p.y - mean_y);
        }
        if sxx <= 0.0 {
            return None;
        }
        let slope = sxy / sxx;
        Some(Regression {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Mean of all points.
pub fn centroid(points: &[Point]) -> Option<Point> {
    let multi: MultiPoint<f64> = points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into();
    multi.centroid().map(|c| Point::new(c.x(), c.y()))
}

/// Axis-aligned bounding box of the points.
pub fn bounds(points: &[Point]) -> Option<Rect> {
    let multi: MultiPoint<f64> = points.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>().into();
    multi
        .bounding_rect()
        .map(|r| Rect::new(r.min().x, r.min().y, r.max().x, r.max().y))
}

/// Distance from `center` to every point.
pub fn radii(points: &[Point], center: Point) -> Vec<f64> {
    points.iter().map(|p| p.distance(center)).collect()
}

/// Consecutive side lengths of a closed polygon (last wraps to first).
pub fn side_lengths(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    (0..n).map(|i| points[i].distance(points[(i + 1) % n])).collect()
}

/// Consecutive edge lengths of an open polyline.
pub fn edge_lengths(points: &[Point]) -> Vec<f64> {
    points.windows(2).map(|w| w[0].distance(w[1])).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}
