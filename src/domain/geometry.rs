//! Geometric types for canvas coordinates
//!
//! Canvas coordinates have x growing right and y growing down.

use std::ops::{Add, Mul, Sub};

use serde::Serialize;

/// A point on the canvas
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector for an angle in degrees measured from the downward
    /// vertical: x = sin, y = cos
    pub fn from_angle(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self { x: sin, y: cos }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Shortest distance from this point to the segment `a`-`b`
    pub fn distance_to_segment(&self, a: Point, b: Point) -> f32 {
        let ab = b - a;
        let len_sq = ab.x * ab.x + ab.y * ab.y;
        if len_sq <= f32::EPSILON {
            return self.distance_to(a);
        }
        let ap = *self - a;
        let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
        self.distance_to(a + ab * t)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_angle_zero_points_down() {
        let p = Point::from_angle(0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_from_angle_ninety_points_right() {
        let p = Point::from_angle(90.0);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_abs_diff_eq!(Point::new(5.0, 3.0).distance_to_segment(a, b), 3.0);
        // Past the end clamps to the endpoint
        assert_abs_diff_eq!(Point::new(13.0, 4.0).distance_to_segment(a, b), 5.0);
        // Degenerate segment
        assert_abs_diff_eq!(Point::new(3.0, 4.0).distance_to_segment(a, a), 5.0);
    }

    #[test]
    fn test_vector_ops() {
        let p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0) * 2.0 - Point::new(1.0, 1.0);
        assert_eq!(p, Point::new(6.0, 9.0));
    }
}
