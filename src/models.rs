use serde::{Deserialize, Serialize};

/// One (x, y) pair in world coordinates, as read from a point file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered points of one chart. Order is significant: it is the order in which
/// the polyline connects the points.
///
/// A series is built wholesale (by the loader or from a `Vec`) and never
/// mutated point by point afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSeries {
    points: Vec<Point>,
}

impl PointSeries {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Points with both coordinates finite, in series order.
    pub fn finite_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(|p| p.is_finite())
    }

    /// True when x never decreases along the series (NaN-free pairs only).
    pub fn is_x_sorted(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x <= w[1].x)
    }
}

impl From<Vec<Point>> for PointSeries {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for PointSeries {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSeries {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_sorted_detection() {
        let sorted: PointSeries = [(0.0, 1.0), (1.0, -1.0), (1.0, 3.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert!(sorted.is_x_sorted());

        let unsorted: PointSeries = [(2.0, 0.0), (1.0, 0.0)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert!(!unsorted.is_x_sorted());

        assert!(PointSeries::default().is_x_sorted());
    }

    #[test]
    fn finite_points_skip_nan_and_inf() {
        let s = PointSeries::new(vec![
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 1.0),
            Point::new(1.0, f64::INFINITY),
            Point::new(2.0, 2.0),
        ]);
        let xs: Vec<f64> = s.finite_points().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0]);
    }
}
