//! The ten primitive collision tests.
//!
//! All tests are pure and closed-form. Tolerances use [`MAX_DELTA`] through
//! `approx_equal` (open) and `approx_between` (closed, widened), except where
//! noted. Zero-length inputs take explicit branches instead of dividing by zero.

use crate::geometry::{approx_between, approx_equal, Circle, Rect, Segment, Vector2, MAX_DELTA};

/// Below this, `|det| / (|a| * |b|)` (the sine between two directions) marks
/// the segment system as singular.
const PARALLEL_SINE: f64 = 1e-12;

pub fn point_point(a: Vector2, b: Vector2) -> bool {
    approx_equal(a.x, b.x) && approx_equal(a.y, b.y)
}

/// Solves `p = start + t * displacement` along the dominant axis of the
/// displacement, then checks the other coordinate. `t` must lie in `[0, 1]`
/// without widening: `t` scales with the segment length.
pub fn point_segment(p: Vector2, s: &Segment) -> bool {
    let d = s.displacement;
    if d == Vector2::ZERO {
        return point_point(p, s.start);
    }

    if d.x.abs() >= d.y.abs() {
        let t = (p.x - s.start.x) / d.x;
        (0.0..=1.0).contains(&t) && approx_equal(s.start.y + t * d.y, p.y)
    } else {
        let t = (p.y - s.start.y) / d.y;
        (0.0..=1.0).contains(&t) && approx_equal(s.start.x + t * d.x, p.x)
    }
}

/// Projects the point onto both spanning vectors; both normalized
/// projections must fall in `[0, 1]` (no widening).
pub fn point_rect(p: Vector2, r: &Rect) -> bool {
    let h_len_sq = r.horizontal.magnitude_squared();
    let v_len_sq = r.vertical.magnitude_squared();

    // Flat rects collapse to a segment (or a point).
    if h_len_sq == 0.0 {
        return point_segment(p, &r.left());
    }
    if v_len_sq == 0.0 {
        return point_segment(p, &r.top());
    }

    let local = p - r.origin;
    let h = local.dot(r.horizontal) / h_len_sq;
    let v = local.dot(r.vertical) / v_len_sq;

    (0.0..=1.0).contains(&h) && (0.0..=1.0).contains(&v)
}

pub fn point_circle(p: Vector2, c: &Circle) -> bool {
    approx_between(p.distance_squared(c.center), 0.0, c.radius * c.radius)
}

/// Solves `a.start + k * a.displacement = b.start + j * b.displacement` by
/// Gaussian elimination with at most one row swap; both parameters must lie in
/// `[0, 1]`. Parallel segments on a common line fall back to endpoint tests.
pub fn segment_segment(a: &Segment, b: &Segment) -> bool {
    let va = a.displacement;
    let vb = b.displacement;

    if va == Vector2::ZERO {
        return point_segment(a.start, b);
    }
    if vb == Vector2::ZERO {
        return point_segment(b.start, a);
    }

    // [ va.x  -vb.x ] [k]   [ r.x ]
    // [ va.y  -vb.y ] [j] = [ r.y ]
    let r = b.start - a.start;
    let mut rows = [[va.x, -vb.x, r.x], [va.y, -vb.y, r.y]];
    // Covers the zero first pivot; va is non-zero so a11 != 0 afterwards.
    if rows[0][0].abs() < rows[1][0].abs() {
        rows.swap(0, 1);
    }

    let [[a11, a12, r1], [a21, a22, r2]] = rows;
    let factor = a21 / a11;
    let pivot = a22 - factor * a12;
    let residual = r2 - factor * r1;

    if (pivot * a11).abs() <= PARALLEL_SINE * va.magnitude() * vb.magnitude() {
        if residual.abs() >= MAX_DELTA {
            // Parallel lines, apart.
            return false;
        }
        // Collinear: overlap iff some endpoint lies on the other segment.
        return point_segment(a.start, b)
            || point_segment(a.end(), b)
            || point_segment(b.start, a)
            || point_segment(b.end(), a);
    }

    let j = residual / pivot;
    let k = (r1 - a12 * j) / a11;

    approx_between(k, 0.0, 1.0) && approx_between(j, 0.0, 1.0)
}

/// True when the segment crosses or touches any edge of the rect.
pub fn segment_rect(s: &Segment, r: &Rect) -> bool {
    r.edges().iter().any(|edge| segment_segment(s, edge))
}

/// Roots of `|start + t * displacement - center|^2 = radius^2` in `t`;
/// collides when a root falls in `[0, 1]`.
pub fn segment_circle(s: &Segment, c: &Circle) -> bool {
    let d = s.displacement;
    let f = s.start - c.center;

    let a = d.magnitude_squared();
    if a == 0.0 {
        return point_circle(s.start, c);
    }
    let b = 2.0 * f.dot(d);
    let cc = f.magnitude_squared() - c.radius * c.radius;

    let discriminant = b * b - 4.0 * a * cc;
    if discriminant < 0.0 {
        return false;
    }
    if discriminant == 0.0 {
        return approx_between(-b / (2.0 * a), 0.0, 1.0);
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    approx_between(t1, 0.0, 1.0) || approx_between(t2, 0.0, 1.0)
}

pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.edges().iter().any(|edge| segment_rect(edge, b))
}

pub fn rect_circle(r: &Rect, c: &Circle) -> bool {
    r.edges().iter().any(|edge| segment_circle(edge, c))
}

/// Tangent circles collide; the tolerance is applied on the distance side only.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) - MAX_DELTA <= a.radius + b.radius
}
