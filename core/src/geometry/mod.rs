//! Value types for 2D collision geometry.
//!
//! Every type here is a plain `Copy` value. Operations return new values;
//! the few in-place variants are named as such (`translate`, `rotate`, ...).

use nalgebra as na;

pub mod vector;
pub use vector::Vector2;

pub mod primitives;
pub use primitives::*;

pub type Point2 = na::Point2<f64>;
pub type Vec2 = na::Vector2<f64>;

/// Tolerance for every approximate comparison in the collision core.
pub const MAX_DELTA: f64 = 0.0001;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_equal(*self, *other)
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_equal(self.x, other.x) && approx_equal(self.y, other.y)
    }
}

/// `|a - b| < MAX_DELTA` (open bound).
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < MAX_DELTA
}

/// `lo - MAX_DELTA <= x <= hi + MAX_DELTA` (closed, widened bounds).
#[inline]
pub fn approx_between(x: f64, lo: f64, hi: f64) -> bool {
    lo - MAX_DELTA <= x && x <= hi + MAX_DELTA
}
