use log::debug;
use std::fmt;

/// Number of decimal places distances are usually reported with.
pub const ROUNDING_PLACES: u32 = 2;

/// A location in the 2D Cartesian plane.
///
/// Coordinates are fixed at construction, use [`Point::x`] and [`Point::y`]
/// to read them back.
#[derive(Copy, Clone, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    ///
    /// NaN and infinite coordinates are not rejected, they propagate into the
    /// result following IEEE 754 rules.
    pub fn distance(&self, other: &Self) -> f64 {
        let xs = other.x - self.x;
        let ys = other.y - self.y;
        let distance = ((xs * xs) + (ys * ys)).sqrt();

        if !distance.is_finite() {
            debug!("Non-finite distance between {} and {}", self, other);
        }

        distance
    }

    /// Distance to `other` rounded half away from zero to `places` decimals.
    pub fn rounded_distance(&self, other: &Self, places: u32) -> f64 {
        let distance = self.distance(other);
        let factor = 10f64.powi(places.min(i32::MAX as u32) as i32);
        let scaled = distance * factor;

        // Too many places to represent, nothing left to round.
        if !factor.is_finite() || !scaled.is_finite() {
            return distance;
        }

        scaled.round() / factor
    }
}

/// Creates a point from its two coordinates.
pub fn create(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Euclidean distance between `p1` and `p2`.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    p1.distance(p2)
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
