//! Named force contributions and the model that keeps them current.
//!
//! Each body owns a [`ForceMap`] with exactly one entry per [`ForceKind`].
//! The resultant is always the sum over the map; there is no separately
//! tracked running total that could go stale.

use alloc::collections::BTreeMap;

use crate::body::{Body, Mass};
use crate::config::PhysicsConfig;
use crate::float::Float;
use crate::vec::{Vec, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one contribution in a body's force map.
///
/// Ordering is total so the resultant is summed in the same order
/// regardless of when entries were inserted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ForceKind {
    /// `mass * gravity`.
    Gravitational,
    /// `-drag_coefficient * velocity`.
    LinearDrag,
    /// Cancels net vertical force while the body is grounded.
    Normal,
    /// Gameplay-defined persistent force (thrust, wind, ...).
    Custom(u16),
}

impl ForceKind {
    /// Kinds rewritten by [`ForceModel::refresh`] on every step.
    pub const BUILT_IN: [ForceKind; 3] = [
        ForceKind::Gravitational,
        ForceKind::LinearDrag,
        ForceKind::Normal,
    ];

    pub fn is_built_in(self) -> bool {
        !matches!(self, ForceKind::Custom(_))
    }
}

/// Mapping from force kind to force vector. One entry per kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForceMap<F: Float> {
    entries: BTreeMap<ForceKind, Vec2<F>>,
}

impl<F: Float> ForceMap<F> {
    pub fn new() -> Self {
        ForceMap { entries: BTreeMap::new() }
    }

    /// Insert or overwrite the entry for `kind`.
    pub fn set(&mut self, kind: ForceKind, force: Vec2<F>) {
        self.entries.insert(kind, force);
    }

    pub fn get(&self, kind: ForceKind) -> Option<Vec2<F>> {
        self.entries.get(&kind).copied()
    }

    pub fn remove(&mut self, kind: ForceKind) -> Option<Vec2<F>> {
        self.entries.remove(&kind)
    }

    pub fn contains(&self, kind: ForceKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (ForceKind, Vec2<F>)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// Vector sum over all entries.
    pub fn resultant(&self) -> Vec2<F> {
        self.entries.values().fold(Vec2::zero(), |acc, f| acc + *f)
    }

    /// Vector sum over all entries except `excluded`.
    pub fn resultant_excluding(&self, excluded: ForceKind) -> Vec2<F> {
        self.entries
            .iter()
            .filter(|(k, _)| **k != excluded)
            .fold(Vec2::zero(), |acc, (_, f)| acc + *f)
    }
}

/// Derives the built-in force entries from the current configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForceModel<F: Float> {
    gravity: Vec2<F>,
    drag_coefficient: F,
}

impl<F: Float> ForceModel<F> {
    pub fn new(config: &PhysicsConfig<F>) -> Self {
        ForceModel {
            gravity: config.gravity,
            drag_coefficient: config.drag_coefficient,
        }
    }

    /// Install every built-in entry for a body of the given mass.
    ///
    /// Gravity is `mass * g`, drag is `-k * v` (zero at rest), normal starts
    /// at zero. Infinite-mass bodies get zero entries throughout.
    pub fn seed(&self, body: &mut Body<F>, mass: Mass<F>) {
        let drag = self.drag(body);
        body.forces.set(ForceKind::Gravitational, self.gravitational(mass));
        body.forces.set(ForceKind::LinearDrag, drag);
        body.forces.set(ForceKind::Normal, Vec2::zero());
    }

    /// Recompute every state- or config-dependent entry in place.
    ///
    /// Gravity tracks the current config so a reload takes effect on the
    /// next step. The normal entry is written last because it cancels the
    /// vertical sum of everything else.
    pub fn refresh(&self, body: &mut Body<F>) {
        let drag = self.drag(body);
        body.forces.set(ForceKind::Gravitational, self.gravitational(body.mass));
        body.forces.set(ForceKind::LinearDrag, drag);

        let normal = if body.grounded && !body.is_static() {
            let others = body.forces.resultant_excluding(ForceKind::Normal);
            Vec2::new(F::zero(), -others.y)
        } else {
            Vec2::zero()
        };
        body.forces.set(ForceKind::Normal, normal);
    }

    /// Sum over all of a body's entries.
    pub fn resultant(body: &Body<F>) -> Vec2<F> {
        body.forces.resultant()
    }

    pub(crate) fn gravitational(&self, mass: Mass<F>) -> Vec2<F> {
        match mass {
            Mass::Finite(m) => self.gravity.scale(m),
            Mass::Infinite => Vec2::zero(),
        }
    }

    fn drag(&self, body: &Body<F>) -> Vec2<F> {
        if body.is_static() {
            return Vec2::zero();
        }
        body.velocity.scale(-self.drag_coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_instead_of_appending() {
        let mut map: ForceMap<f32> = ForceMap::new();
        map.set(ForceKind::LinearDrag, Vec2::new(1.0, 0.0));
        map.set(ForceKind::LinearDrag, Vec2::new(-3.0, 2.0));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(ForceKind::LinearDrag), Some(Vec2::new(-3.0, 2.0)));
    }

    #[test]
    fn resultant_ignores_insertion_order() {
        let forces = [
            (ForceKind::Custom(7), Vec2::new(0.1f32, 0.7)),
            (ForceKind::Gravitational, Vec2::new(0.0, 1140.0)),
            (ForceKind::LinearDrag, Vec2::new(-0.3, 1e-3)),
            (ForceKind::Normal, Vec2::new(0.0, -1139.9)),
        ];

        let mut forward = ForceMap::new();
        for (k, f) in forces.iter() {
            forward.set(*k, *f);
        }
        let mut backward = ForceMap::new();
        for (k, f) in forces.iter().rev() {
            backward.set(*k, *f);
        }

        assert_eq!(forward.resultant(), backward.resultant());
    }

    #[test]
    fn resultant_excluding_skips_one_kind() {
        let mut map: ForceMap<f64> = ForceMap::new();
        map.set(ForceKind::Gravitational, Vec2::new(0.0, 10.0));
        map.set(ForceKind::Normal, Vec2::new(0.0, -10.0));
        map.set(ForceKind::Custom(1), Vec2::new(2.0, 1.0));
        assert_eq!(map.resultant_excluding(ForceKind::Normal), Vec2::new(2.0, 11.0));
        assert_eq!(map.resultant(), Vec2::new(2.0, 1.0));
    }

    #[test]
    fn built_in_kinds_sort_before_custom() {
        assert!(ForceKind::Normal < ForceKind::Custom(0));
        assert!(ForceKind::Gravitational.is_built_in());
        assert!(!ForceKind::Custom(3).is_built_in());
    }
}
