//! Fallback colliders for non-primitive types.
//!
//! Keys are unordered pairs of concrete types. The registry is meant to be
//! filled during setup and read afterwards; the lock is held only for the
//! lookup, never while a collider runs.

use super::{Collidable, CollideError, CollideResult};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Error type a fallible collider may return.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type ErasedCollider = Arc<dyn Fn(&dyn Any, &dyn Any) -> Result<bool, BoxError> + Send + Sync>;

type PairKey = (TypeId, TypeId);

struct Entry {
    /// Type the collider expects as its first argument.
    first: TypeId,
    first_name: &'static str,
    second_name: &'static str,
    collider: ErasedCollider,
}

static GLOBAL: Lazy<ColliderRegistry> = Lazy::new(ColliderRegistry::new);

fn pair_key(a: TypeId, b: TypeId) -> PairKey {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Maps unordered type pairs to user-supplied collision tests.
#[derive(Default)]
pub struct ColliderRegistry {
    colliders: RwLock<HashMap<PairKey, Entry>>,
}

impl ColliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry behind [`super::collide`] and
    /// [`super::collide_all`].
    pub fn global() -> &'static ColliderRegistry {
        &GLOBAL
    }

    /// Registers `collider` for the pair `(A, B)`. Queries with the operands
    /// in either order reach it with arguments in `(A, B)` order. Replaces
    /// any collider already registered for the pair.
    pub fn register<A, B, F>(&self, collider: F)
    where
        A: Collidable,
        B: Collidable,
        F: Fn(&A, &B) -> bool + Send + Sync + 'static,
    {
        self.register_fallible::<A, B, _>(move |a, b| Ok(collider(a, b)));
    }

    /// Like [`ColliderRegistry::register`], for tests that can fail. An error
    /// is surfaced as [`CollideError::Predicate`].
    pub fn register_fallible<A, B, F>(&self, collider: F)
    where
        A: Collidable,
        B: Collidable,
        F: Fn(&A, &B) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        let first_name = std::any::type_name::<A>();
        let second_name = std::any::type_name::<B>();

        let erased: ErasedCollider = Arc::new(move |a: &dyn Any, b: &dyn Any| {
            match (a.downcast_ref::<A>(), b.downcast_ref::<B>()) {
                (Some(a), Some(b)) => collider(a, b),
                _ => Err(format!("operands are not ({}, {})", first_name, second_name).into()),
            }
        });

        let entry = Entry {
            first: TypeId::of::<A>(),
            first_name,
            second_name,
            collider: erased,
        };

        let previous = self
            .colliders
            .write()
            .insert(pair_key(TypeId::of::<A>(), TypeId::of::<B>()), entry);

        if previous.is_some() {
            info!(first = first_name, second = second_name, "Replaced fallback collider");
        } else {
            info!(first = first_name, second = second_name, "Registered fallback collider");
        }
    }

    /// Removes the collider for `(A, B)` (or `(B, A)`). Returns whether one
    /// was present.
    pub fn unregister<A: Collidable, B: Collidable>(&self) -> bool {
        let removed = self
            .colliders
            .write()
            .remove(&pair_key(TypeId::of::<A>(), TypeId::of::<B>()));

        if let Some(entry) = &removed {
            debug!(first = entry.first_name, second = entry.second_name, "Unregistered fallback collider");
        }
        removed.is_some()
    }

    pub fn contains<A: Collidable, B: Collidable>(&self) -> bool {
        self.colliders
            .read()
            .contains_key(&pair_key(TypeId::of::<A>(), TypeId::of::<B>()))
    }

    pub fn len(&self) -> usize {
        self.colliders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.read().is_empty()
    }

    pub fn clear(&self) {
        self.colliders.write().clear();
        debug!("Cleared fallback colliders");
    }

    /// Runs the collider registered for the concrete types of `a` and `b`.
    pub(crate) fn collide_fallback(&self, a: &dyn Collidable, b: &dyn Collidable) -> CollideResult<bool> {
        let type_a = a.as_any().type_id();
        let type_b = b.as_any().type_id();

        let found = self
            .colliders
            .read()
            .get(&pair_key(type_a, type_b))
            .map(|entry| (entry.first, Arc::clone(&entry.collider)));

        let Some((first, collider)) = found else {
            warn!(first = a.type_name(), second = b.type_name(), "No collider registered for pair");
            return Err(CollideError::UnsupportedPair {
                first: a.type_name(),
                second: b.type_name(),
            });
        };

        debug!(first = a.type_name(), second = b.type_name(), "Using fallback collider");

        let result = if first == type_a {
            collider(a.as_any(), b.as_any())
        } else {
            collider(b.as_any(), a.as_any())
        };

        result.map_err(|source| CollideError::Predicate {
            first: a.type_name(),
            second: b.type_name(),
            source,
        })
    }
}

impl fmt::Debug for ColliderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colliders = self.colliders.read();
        let mut pairs: Vec<(&str, &str)> = colliders
            .values()
            .map(|entry| (entry.first_name, entry.second_name))
            .collect();
        pairs.sort_unstable();

        f.debug_struct("ColliderRegistry").field("colliders", &pairs).finish()
    }
}
