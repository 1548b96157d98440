// Copyright Kyler Chin <kyler@catenarymaps.org>
// Catenary Transit Initiatives
// Attribution cannot be removed

//! Hashable planar coordinate used as node identity in road graphs.

use geo::{Distance, Euclidean};
use geo_types::Coord;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div};

/// A 2D point. Two nodes are the same node iff their coordinates are equal,
/// so the coordinates are stored as `OrderedFloat` to get `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: OrderedFloat<f64>,
    pub y: OrderedFloat<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x: OrderedFloat(x),
            y: OrderedFloat(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x.into_inner()
    }

    pub fn y(&self) -> f64 {
        self.y.into_inner()
    }

    /// Euclidean distance in the plane of the coordinates.
    pub fn distance(&self, other: &Point) -> f64 {
        Euclidean.distance(geo::Point::from(*self), geo::Point::from(*other))
    }

    /// Componentwise average of two points.
    pub fn midpoint(&self, other: &Point) -> Point {
        (*self + *other) / 2.0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x() / rhs, self.y() / rhs)
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.x(), p.y())
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(p: geo::Point<f64>) -> Self {
        Point::new(p.x(), p.y())
    }
}

impl From<Coord<f64>> for Point {
    fn from(c: Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for Coord<f64> {
    fn from(p: Point) -> Self {
        Coord { x: p.x(), y: p.y() }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn test_point_identity_is_value_equality() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(1.5, -2.0);
        let c = Point::new(1.5, -2.000001);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = AHashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_point_arithmetic() {
        let min = Point::new(0.0, 0.0);
        let max = Point::new(10.0, 4.0);

        assert_eq!(min + max, Point::new(10.0, 4.0));
        assert_eq!((min + max) / 2.0, Point::new(5.0, 2.0));
        assert_eq!(min.midpoint(&max), Point::new(5.0, 2.0));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_geo_conversion() {
        let p = Point::new(-118.25, 34.05);
        let g: geo::Point<f64> = p.into();
        assert_eq!(g.x(), -118.25);
        assert_eq!(Point::from(g), p);

        let c: Coord<f64> = p.into();
        assert_eq!(Point::from(c), p);
    }
}
