//! Resolving two arbitrary operands to a collision answer.
//!
//! Each operand is first reduced to a primitive: itself if it is one,
//! otherwise its body if it has one (no further unwrapping). Two primitives
//! go through [`Shape::collides`]; anything else goes to the registry.

use super::{Collidable, CollideResult, ColliderRegistry, Shape};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How many matches [`collide_all`] collects before stopping.
///
/// An integer limit of zero means no limit and maps to
/// [`CollectLimit::Unbounded`] (see [`CollectLimit::from_raw`]).
/// `AtMost(0)` built directly collects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollectLimit {
    #[default]
    Unbounded,
    /// Stop after this many matches.
    AtMost(usize),
    /// Stop after `candidate_count - n` matches. Unbounded when `n` is not
    /// smaller than the candidate count.
    AllBut(usize),
}

impl CollectLimit {
    /// Integer form: positive caps the matches, negative `-k` means "all but
    /// k", zero means no limit. Magnitudes past `usize::MAX` saturate.
    pub fn from_raw(limit: i64) -> Self {
        match limit {
            0 => Self::Unbounded,
            n if n > 0 => Self::AtMost(usize::try_from(n).unwrap_or(usize::MAX)),
            n => Self::AllBut(usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX)),
        }
    }

    /// The match count to stop at for `candidate_count` candidates.
    pub fn resolve(self, candidate_count: usize) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::AtMost(n) => Some(n),
            Self::AllBut(k) if k < candidate_count => Some(candidate_count - k),
            Self::AllBut(_) => None,
        }
    }
}

fn primitive_of(value: &dyn Collidable) -> Option<Shape> {
    if let Some(shape) = value.shape() {
        return Some(shape);
    }
    let body = value.body()?;
    debug!(operand = value.type_name(), body = %body.kind(), "Substituted body shape");
    Some(body)
}

impl ColliderRegistry {
    /// Tests `a` against `b`, using this registry for non-primitive pairs.
    pub fn collide(&self, a: &dyn Collidable, b: &dyn Collidable) -> CollideResult<bool> {
        let shape_a = primitive_of(a);
        let shape_b = primitive_of(b);

        if let (Some(sa), Some(sb)) = (&shape_a, &shape_b) {
            return Ok(sa.collides(sb));
        }

        // A substituted body takes part under its primitive type.
        let a = match &shape_a {
            Some(shape) => shape.as_collidable(),
            None => a,
        };
        let b = match &shape_b {
            Some(shape) => shape.as_collidable(),
            None => b,
        };
        self.collide_fallback(a, b)
    }

    /// Candidates colliding with `subject`, in order, up to `limit`.
    pub fn collide_all<'c, I>(
        &self,
        subject: &dyn Collidable,
        candidates: I,
        limit: CollectLimit,
    ) -> CollideResult<Vec<&'c dyn Collidable>>
    where
        I: IntoIterator<Item = &'c dyn Collidable>,
        I::IntoIter: ExactSizeIterator,
    {
        self.collide_all_map(subject, candidates, limit, |candidate| candidate)
    }

    /// Like [`ColliderRegistry::collide_all`], collecting `transform(candidate)`
    /// for each match instead of the candidate itself.
    pub fn collide_all_map<'c, I, T, F>(
        &self,
        subject: &dyn Collidable,
        candidates: I,
        limit: CollectLimit,
        mut transform: F,
    ) -> CollideResult<Vec<T>>
    where
        I: IntoIterator<Item = &'c dyn Collidable>,
        I::IntoIter: ExactSizeIterator,
        F: FnMut(&'c dyn Collidable) -> T,
    {
        let candidates = candidates.into_iter();
        let stop_at = limit.resolve(candidates.len());

        let mut matches = Vec::new();
        if stop_at == Some(0) {
            return Ok(matches);
        }

        for candidate in candidates {
            if !self.collide(subject, candidate)? {
                continue;
            }
            matches.push(transform(candidate));
            if Some(matches.len()) == stop_at {
                trace!(matches = matches.len(), "collide_all reached its limit");
                break;
            }
        }

        Ok(matches)
    }
}

/// [`ColliderRegistry::collide`] against the global registry.
pub fn collide(a: &dyn Collidable, b: &dyn Collidable) -> CollideResult<bool> {
    ColliderRegistry::global().collide(a, b)
}

/// [`ColliderRegistry::collide_all`] against the global registry.
pub fn collide_all<'c, I>(
    subject: &dyn Collidable,
    candidates: I,
    limit: CollectLimit,
) -> CollideResult<Vec<&'c dyn Collidable>>
where
    I: IntoIterator<Item = &'c dyn Collidable>,
    I::IntoIter: ExactSizeIterator,
{
    ColliderRegistry::global().collide_all(subject, candidates, limit)
}

/// [`ColliderRegistry::collide_all_map`] against the global registry.
pub fn collide_all_map<'c, I, T, F>(
    subject: &dyn Collidable,
    candidates: I,
    limit: CollectLimit,
    transform: F,
) -> CollideResult<Vec<T>>
where
    I: IntoIterator<Item = &'c dyn Collidable>,
    I::IntoIter: ExactSizeIterator,
    F: FnMut(&'c dyn Collidable) -> T,
{
    ColliderRegistry::global().collide_all_map(subject, candidates, limit, transform)
}
