use super::Vector2;
use serde::{Deserialize, Serialize};

/// A directed segment from `start` to `start + displacement`.
///
/// A zero `displacement` is valid and behaves as a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vector2,
    pub displacement: Vector2,
}

impl Segment {
    pub fn new(start: Vector2, displacement: Vector2) -> Self {
        Self { start, displacement }
    }

    pub fn from_points(start: Vector2, end: Vector2) -> Self {
        Self::new(start, end - start)
    }

    pub fn end(&self) -> Vector2 {
        self.start + self.displacement
    }

    pub fn length(&self) -> f64 {
        self.displacement.magnitude()
    }

    pub fn midpoint(&self) -> Vector2 {
        self.start + self.displacement * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.displacement == Vector2::ZERO
    }

    pub fn moved_by(&self, by: Vector2) -> Self {
        Self::new(self.start + by, self.displacement)
    }

    pub fn rotated_around(&self, center: Vector2, radians: f64) -> Self {
        Self::new(
            self.start.rotated_around_point(center, radians),
            self.displacement.rotated_by(radians),
        )
    }

    pub fn translate(&mut self, by: Vector2) {
        self.start.translate(by);
    }
}

/// A parallelogram spanned by `horizontal` and `vertical` from `origin`.
///
/// Corners are `origin`, `origin + horizontal`, `origin + horizontal + vertical`
/// and `origin + vertical`. [`Rect::rect`] builds the usual axis-aligned box.
/// Naming follows screen coordinates: `top` runs along `horizontal` from the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vector2,
    pub horizontal: Vector2,
    pub vertical: Vector2,
}

impl Rect {
    pub fn new(origin: Vector2, horizontal: Vector2, vertical: Vector2) -> Self {
        Self { origin, horizontal, vertical }
    }

    /// Axis-aligned box with its origin corner at `(x, y)`.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Vector2::new(x, y),
            Vector2::new(width, 0.0),
            Vector2::new(0.0, height),
        )
    }

    // Edges

    pub fn top(&self) -> Segment {
        Segment::new(self.origin, self.horizontal)
    }

    pub fn right(&self) -> Segment {
        Segment::new(self.origin + self.horizontal, self.vertical)
    }

    pub fn bottom(&self) -> Segment {
        Segment::new(self.origin + self.vertical, self.horizontal)
    }

    pub fn left(&self) -> Segment {
        Segment::new(self.origin, self.vertical)
    }

    /// Top, right, bottom, left.
    pub fn edges(&self) -> [Segment; 4] {
        [self.top(), self.right(), self.bottom(), self.left()]
    }

    // Corners and midpoints

    pub fn top_left(&self) -> Vector2 {
        self.origin
    }

    pub fn top_mid(&self) -> Vector2 {
        self.origin + self.horizontal * 0.5
    }

    pub fn top_right(&self) -> Vector2 {
        self.origin + self.horizontal
    }

    pub fn mid_right(&self) -> Vector2 {
        self.origin + self.horizontal + self.vertical * 0.5
    }

    pub fn bottom_right(&self) -> Vector2 {
        self.origin + self.horizontal + self.vertical
    }

    pub fn bottom_mid(&self) -> Vector2 {
        self.origin + self.vertical + self.horizontal * 0.5
    }

    pub fn bottom_left(&self) -> Vector2 {
        self.origin + self.vertical
    }

    pub fn mid_left(&self) -> Vector2 {
        self.origin + self.vertical * 0.5
    }

    pub fn center(&self) -> Vector2 {
        self.origin + (self.horizontal + self.vertical) * 0.5
    }

    // Transforms

    pub fn moved_by(&self, by: Vector2) -> Self {
        Self::new(self.origin + by, self.horizontal, self.vertical)
    }

    /// Rotate the origin about `center`; the spanning vectors turn by the
    /// same angle but are not translated.
    pub fn rotated_around(&self, center: Vector2, radians: f64) -> Self {
        Self::new(
            self.origin.rotated_around_point(center, radians),
            self.horizontal.rotated_by(radians),
            self.vertical.rotated_by(radians),
        )
    }

    pub fn translate(&mut self, by: Vector2) {
        self.origin.translate(by);
    }

    pub fn rotate_around(&mut self, center: Vector2, radians: f64) {
        *self = self.rotated_around(center, radians);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vector2,
    /// Expected to be non-negative; not validated.
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vector2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn moved_by(&self, by: Vector2) -> Self {
        Self::new(self.center + by, self.radius)
    }

    pub fn rotated_around(&self, center: Vector2, radians: f64) -> Self {
        Self::new(self.center.rotated_around_point(center, radians), self.radius)
    }

    pub fn translate(&mut self, by: Vector2) {
        self.center.translate(by);
    }

    pub fn rotate_around(&mut self, center: Vector2, radians: f64) {
        self.center.rotate_around_point(center, radians);
    }
}
