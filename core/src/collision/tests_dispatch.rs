use super::*;
use crate::geometry::{Circle, Rect, Segment, Vector2};
use std::any::Any;

/// A game object whose collision shape is a circle.
struct Ball {
    body: Circle,
}

impl Collidable for Ball {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn body(&self) -> Option<Shape> {
        Some(Shape::Circle(self.body))
    }
}

/// Holds a bodied wrapper but exposes no body of its own.
struct Nested {
    inner: Ball,
}

impl Collidable for Nested {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Opaque region identified by a row index.
struct Lane {
    row: i32,
}

impl Collidable for Lane {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn test_primitive_pairs_need_no_registry() {
    let registry = ColliderRegistry::new();
    let point = v(5.0, 5.0);
    let rect = Rect::rect(0.0, 0.0, 10.0, 10.0);

    assert!(registry.collide(&point, &rect).unwrap());
    assert!(registry.collide(&rect, &point).unwrap());
    assert!(!registry.collide(&v(20.0, 5.0), &rect).unwrap());
}

#[test]
fn test_shape_and_bare_primitive_agree() {
    let registry = ColliderRegistry::new();
    let segment = Segment::from_points(v(0.0, 0.0), v(2.0, 2.0));
    let circle = Circle::new(v(1.0, 1.0), 0.5);

    assert_eq!(
        registry.collide(&segment, &circle).unwrap(),
        registry.collide(&Shape::from(segment), &Shape::from(circle)).unwrap()
    );
}

#[test]
fn test_body_is_substituted() {
    let registry = ColliderRegistry::new();
    let ball = Ball { body: Circle::new(v(0.0, 0.0), 1.0) };

    assert!(registry.collide(&ball, &v(0.5, 0.0)).unwrap());
    assert!(registry.collide(&Rect::rect(0.5, -1.0, 2.0, 2.0), &ball).unwrap());
    assert!(!registry.collide(&ball, &Circle::new(v(5.0, 0.0), 1.0)).unwrap());

    let other = Ball { body: Circle::new(v(1.5, 0.0), 1.0) };
    assert!(registry.collide(&ball, &other).unwrap());
}

#[test]
fn test_wrapper_without_body_is_opaque() {
    let registry = ColliderRegistry::new();
    let nested = Nested {
        inner: Ball { body: Circle::new(v(0.0, 0.0), 1.0) },
    };
    assert!(nested.inner.body().is_some());

    // The inner field is never searched for a body.
    let err = registry.collide(&nested, &v(0.0, 0.0)).unwrap_err();
    assert!(matches!(err, CollideError::UnsupportedPair { .. }));

    // A registered collider receives the wrapper itself.
    registry.register::<Nested, Vector2, _>(|n, p| predicates::point_circle(*p, &n.inner.body));
    assert!(registry.collide(&nested, &v(0.5, 0.0)).unwrap());
}

#[test]
fn test_unregistered_pair_is_an_error() {
    let registry = ColliderRegistry::new();
    let err = registry.collide(&Lane { row: 1 }, &Lane { row: 2 }).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Lane"), "message was: {message}");
    match err {
        CollideError::UnsupportedPair { first, second } => {
            assert!(first.ends_with("Lane"));
            assert!(second.ends_with("Lane"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_fallback_for_opaque_pair() {
    let registry = ColliderRegistry::new();
    registry.register::<Lane, Lane, _>(|a, b| a.row == b.row);

    assert!(registry.collide(&Lane { row: 3 }, &Lane { row: 3 }).unwrap());
    assert!(!registry.collide(&Lane { row: 3 }, &Lane { row: 4 }).unwrap());
}

#[test]
fn test_fallback_sees_primitive_type_of_body() {
    let registry = ColliderRegistry::new();
    registry.register::<Circle, Lane, _>(|circle, lane| {
        (circle.center.y - lane.row as f64).abs() <= circle.radius
    });

    let ball = Ball { body: Circle::new(v(0.0, 2.0), 0.5) };
    assert!(registry.collide(&ball, &Lane { row: 2 }).unwrap());
    assert!(registry.collide(&Lane { row: 2 }, &ball).unwrap());
    assert!(!registry.collide(&Lane { row: 5 }, &ball).unwrap());

    // Bare and enum-wrapped circles hit the same collider.
    let circle = Circle::new(v(0.0, 5.0), 0.5);
    assert!(registry.collide(&circle, &Lane { row: 5 }).unwrap());
    assert!(registry.collide(&Shape::Circle(circle), &Lane { row: 5 }).unwrap());

    // A rect has no collider for Lane.
    assert!(registry.collide(&Rect::rect(0.0, 0.0, 1.0, 1.0), &Lane { row: 0 }).is_err());
}

#[test]
fn test_collide_all_in_order() {
    let registry = ColliderRegistry::new();
    let subject = Rect::rect(0.0, 0.0, 10.0, 10.0);
    let candidates = [
        Shape::Point(v(1.0, 1.0)),
        Shape::Point(v(20.0, 1.0)),
        Shape::Circle(Circle::new(v(11.0, 5.0), 2.0)),
        Shape::Segment(Segment::from_points(v(-5.0, -5.0), v(-1.0, -1.0))),
        Shape::Segment(Segment::from_points(v(-5.0, 5.0), v(5.0, 5.0))),
    ];

    let hits = registry
        .collide_all(&subject, candidates.iter().map(|c| c as &dyn Collidable), CollectLimit::Unbounded)
        .unwrap();

    let kinds: Vec<ShapeKind> = hits
        .iter()
        .map(|hit| hit.shape().map(|s| s.kind()).unwrap())
        .collect();
    assert_eq!(kinds, vec![ShapeKind::Point, ShapeKind::Circle, ShapeKind::Segment]);
}

#[test]
fn test_collide_all_limits() {
    let registry = ColliderRegistry::new();
    let subject = Circle::new(v(0.0, 0.0), 100.0);
    let candidates: Vec<Vector2> = (0..10).map(|i| v(i as f64, 0.0)).collect();
    let as_dyn = || candidates.iter().map(|c| c as &dyn Collidable);

    let all = registry.collide_all(&subject, as_dyn(), CollectLimit::Unbounded).unwrap();
    assert_eq!(all.len(), 10);

    let three = registry.collide_all(&subject, as_dyn(), CollectLimit::from_raw(3)).unwrap();
    assert_eq!(three.len(), 3);

    let all_but_four = registry.collide_all(&subject, as_dyn(), CollectLimit::from_raw(-4)).unwrap();
    assert_eq!(all_but_four.len(), 6);

    let none = registry.collide_all(&subject, as_dyn(), CollectLimit::AtMost(0)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_collide_all_map_transforms_matches() {
    let registry = ColliderRegistry::new();
    let subject = Segment::from_points(v(0.0, 0.5), v(10.0, 0.5));
    let balls: Vec<Ball> = (0..5)
        .map(|i| Ball { body: Circle::new(v(i as f64 * 3.0, (i % 2) as f64 * 4.0), 1.0) })
        .collect();

    let centers = registry
        .collide_all_map(
            &subject,
            balls.iter().map(|b| b as &dyn Collidable),
            CollectLimit::Unbounded,
            |hit| hit.body().map(|shape| match shape {
                Shape::Circle(c) => c.center.x,
                _ => f64::NAN,
            }),
        )
        .unwrap();

    assert_eq!(centers, vec![Some(0.0), Some(6.0)]);
}

#[test]
fn test_collide_all_propagates_errors() {
    let registry = ColliderRegistry::new();
    let origin = v(0.0, 0.0);
    let lane = Lane { row: 0 };
    let candidates: [&dyn Collidable; 2] = [&origin, &lane];

    let result = registry.collide_all(&v(0.0, 0.0), candidates, CollectLimit::Unbounded);
    assert!(matches!(result, Err(CollideError::UnsupportedPair { .. })));

    // Stopping before the opaque candidate avoids the error.
    let first = registry
        .collide_all(&v(0.0, 0.0), candidates, CollectLimit::AtMost(1))
        .unwrap();
    assert_eq!(first.len(), 1);
}
