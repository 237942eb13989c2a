//! 2D free vector / point.

use super::{Point2, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point or a free vector, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a vector from a magnitude and an angle in radians.
    pub fn polar(magnitude: f64, radians: f64) -> Self {
        Self {
            x: radians.cos() * magnitude,
            y: radians.sin() * magnitude,
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Angle from the positive x axis, in radians.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle().to_degrees()
    }

    /// Same direction, magnitude multiplied by `factor`.
    ///
    /// Rebuilt through [`Vector2::polar`] rather than multiplied per
    /// component; a negative factor flips the direction through the
    /// magnitude sign. Use `v * factor` for the literal componentwise product.
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self::polar(self.magnitude() * factor, self.angle())
    }

    /// Same magnitude, angle increased by `radians`.
    pub fn rotated_by(&self, radians: f64) -> Self {
        Self::polar(self.magnitude(), self.angle() + radians)
    }

    /// Rotate this vector, taken as a point, about `center`.
    pub fn rotated_around_point(&self, center: Vector2, radians: f64) -> Self {
        center + (*self - center).rotated_by(radians)
    }

    /// Unit vector with the same direction.
    ///
    /// The magnitude must be non-zero; a zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        Self::new(self.x / magnitude, self.y / magnitude)
    }

    /// Projection of `self` onto `onto`.
    pub fn projected(&self, onto: Vector2) -> Self {
        onto.scaled_by(self.dot(onto) / onto.magnitude_squared())
    }

    pub fn distance(&self, other: Vector2) -> f64 {
        (*self - other).magnitude()
    }

    pub fn distance_squared(&self, other: Vector2) -> f64 {
        (*self - other).magnitude_squared()
    }

    pub fn translate(&mut self, by: Vector2) {
        *self = *self + by;
    }

    pub fn rotate(&mut self, radians: f64) {
        *self = self.rotated_by(radians);
    }

    pub fn rotate_around_point(&mut self, center: Vector2, radians: f64) {
        *self = self.rotated_around_point(center, radians);
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Point2> for Vector2 {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for Point2 {
    fn from(v: Vector2) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
