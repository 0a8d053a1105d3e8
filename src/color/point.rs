use core::ops::{Add, Mul, Sub};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Location in CIE 1931 xy chromaticity space. Also used as a 2D vector
/// when taking differences.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// z component of the 3D cross product
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point on the segment a-b closest to self
    pub fn closest_on_segment(&self, a: &Point, b: &Point) -> Point {
        let ap = *self - *a;
        let ab = *b - *a;
        let ab2 = ab.dot(&ab);
        if ab2 == 0.0 {
            return *a;
        }
        let t = (ap.dot(&ab) / ab2).clamp(0.0, 1.0);
        *a + ab * t
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, b: Point) -> Self::Output {
        Point::new(self.x + b.x, self.y + b.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, b: Point) -> Self::Output {
        Point::new(self.x - b.x, self.y - b.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Self::Output {
        Point::new(self.x * s, self.y * s)
    }
}

impl From<[f64; 2]> for Point {
    fn from(xy: [f64; 2]) -> Point {
        Point::new(xy[0], xy[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> [f64; 2] {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
