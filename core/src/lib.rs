//! 2D collision detection between points, segments, rects and circles,
//! with user-registered colliders for any other pair of types.

pub mod geometry;
pub mod collision;

pub use collision::{
    collide, collide_all, collide_all_map, shape_tag, Collidable, CollectLimit, CollideError,
    CollideResult, ColliderRegistry, Shape, ShapeKind,
};
pub use geometry::{Circle, Rect, Segment, Vector2, MAX_DELTA};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
