//! Pairwise collision tests between 2D shapes.
//!
//! Primitive shapes (point, segment, rect, circle) are resolved through the
//! closed [`Shape`] enum and an exhaustive match over pairs. Any other type
//! takes part through the [`Collidable`] trait, either by exposing a body
//! shape or through a collider registered in a [`ColliderRegistry`].

pub mod predicates;
pub mod registry;
pub mod dispatch;

#[cfg(test)]
mod tests_dispatch;

pub use dispatch::{collide, collide_all, collide_all_map, CollectLimit};
pub use registry::{BoxError, ColliderRegistry};

use crate::geometry::{Circle, Rect, Segment, Vector2};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by the dispatcher. Predicates themselves never fail.
#[derive(Debug, Error)]
pub enum CollideError {
    #[error("No collider registered for {first} and {second}")]
    UnsupportedPair {
        first: &'static str,
        second: &'static str,
    },

    #[error("Collider for {first} and {second} failed: {source}")]
    Predicate {
        first: &'static str,
        second: &'static str,
        #[source]
        source: BoxError,
    },
}

/// Result type for dispatcher operations.
pub type CollideResult<T> = Result<T, CollideError>;

/// The primitive shape kinds, ordered by their dispatch tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShapeKind {
    Point = 1,
    Segment = 2,
    Rect = 4,
    Circle = 8,
}

impl ShapeKind {
    /// Single-bit tag; the OR of two tags identifies an unordered pair.
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Point),
            2 => Some(Self::Segment),
            4 => Some(Self::Rect),
            8 => Some(Self::Circle),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Segment => "segment",
            Self::Rect => "rect",
            Self::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A primitive shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Vector2),
    Segment(Segment),
    Rect(Rect),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Point(_) => ShapeKind::Point,
            Self::Segment(_) => ShapeKind::Segment,
            Self::Rect(_) => ShapeKind::Rect,
            Self::Circle(_) => ShapeKind::Circle,
        }
    }

    pub fn tag(&self) -> u8 {
        self.kind().tag()
    }

    /// Geometric test against another primitive. Symmetric in its operands.
    pub fn collides(&self, other: &Shape) -> bool {
        use predicates::*;

        match (self, other) {
            (Self::Point(a), Self::Point(b)) => point_point(*a, *b),
            (Self::Segment(a), Self::Segment(b)) => segment_segment(a, b),
            (Self::Rect(a), Self::Rect(b)) => rect_rect(a, b),
            (Self::Circle(a), Self::Circle(b)) => circle_circle(a, b),

            (Self::Point(p), Self::Segment(s)) | (Self::Segment(s), Self::Point(p)) => {
                point_segment(*p, s)
            }
            (Self::Point(p), Self::Rect(r)) | (Self::Rect(r), Self::Point(p)) => point_rect(*p, r),
            (Self::Point(p), Self::Circle(c)) | (Self::Circle(c), Self::Point(p)) => {
                point_circle(*p, c)
            }
            (Self::Segment(s), Self::Rect(r)) | (Self::Rect(r), Self::Segment(s)) => {
                segment_rect(s, r)
            }
            (Self::Segment(s), Self::Circle(c)) | (Self::Circle(c), Self::Segment(s)) => {
                segment_circle(s, c)
            }
            (Self::Rect(r), Self::Circle(c)) | (Self::Circle(c), Self::Rect(r)) => rect_circle(r, c),
        }
    }

    pub fn moved_by(&self, by: Vector2) -> Self {
        match self {
            Self::Point(p) => Self::Point(*p + by),
            Self::Segment(s) => Self::Segment(s.moved_by(by)),
            Self::Rect(r) => Self::Rect(r.moved_by(by)),
            Self::Circle(c) => Self::Circle(c.moved_by(by)),
        }
    }

    pub fn rotated_around(&self, center: Vector2, radians: f64) -> Self {
        match self {
            Self::Point(p) => Self::Point(p.rotated_around_point(center, radians)),
            Self::Segment(s) => Self::Segment(s.rotated_around(center, radians)),
            Self::Rect(r) => Self::Rect(r.rotated_around(center, radians)),
            Self::Circle(c) => Self::Circle(c.rotated_around(center, radians)),
        }
    }

    /// The wrapped primitive as a trait object, so registry lookups see the
    /// concrete primitive type rather than `Shape`.
    pub fn as_collidable(&self) -> &dyn Collidable {
        match self {
            Self::Point(p) => p,
            Self::Segment(s) => s,
            Self::Rect(r) => r,
            Self::Circle(c) => c,
        }
    }
}

impl From<Vector2> for Shape {
    fn from(p: Vector2) -> Self {
        Self::Point(p)
    }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Self::Segment(s)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

/// Anything that can be handed to the dispatcher.
///
/// Primitives answer [`Collidable::shape`]. Wrapper types that carry a
/// primitive answer [`Collidable::body`] and are substituted by it, once.
/// Everything else needs a collider in a [`ColliderRegistry`].
pub trait Collidable: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// The primitive this value is, if any.
    fn shape(&self) -> Option<Shape> {
        None
    }

    /// A primitive shape standing in for this value.
    fn body(&self) -> Option<Shape> {
        None
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! impl_primitive_collidable {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Collidable for $ty {
                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn shape(&self) -> Option<Shape> {
                    Some(Shape::$variant(*self))
                }
            }
        )*
    };
}

impl_primitive_collidable! {
    Vector2 => Point,
    Segment => Segment,
    Rect => Rect,
    Circle => Circle,
}

impl Collidable for Shape {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn shape(&self) -> Option<Shape> {
        Some(*self)
    }
}

/// Dispatch tag of a value: 1, 2, 4 or 8 for primitives, 0 otherwise.
pub fn shape_tag(value: &dyn Collidable) -> u8 {
    value.shape().map_or(0, |shape| shape.tag())
}
