//! The entity table and the per-frame step.

use alloc::vec::Vec as AllocVec;

use tracing::{debug, warn};

use crate::body::{Body, Mass};
use crate::collider::Collider;
use crate::config::PhysicsConfig;
use crate::contact::ContactCache;
use crate::error::{PhysicsError, Result};
use crate::float::Float;
use crate::integrator::Integrator;
use crate::observer::StepObserver;
use crate::resolver::{CollidableSet, Member, Resolver};
use crate::transform::Transform;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense identifier of an entity in a [`World`], assigned in spawn order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityId(usize);

impl EntityId {
    pub fn new(index: usize) -> Self {
        EntityId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Every physical entity, stored as parallel arrays indexed by [`EntityId`].
///
/// An entity always has a transform. Without a collider it never collides;
/// without a body it is static. Despawned slots stay in place so ids and
/// iteration order never shift.
pub struct World<F: Float> {
    transforms: AllocVec<Transform<F>>,
    colliders: AllocVec<Option<Collider<F>>>,
    bodies: AllocVec<Option<Body<F>>>,
    alive: AllocVec<bool>,
    contacts: ContactCache<F>,
    members: AllocVec<Member<F>>,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        World {
            transforms: AllocVec::new(),
            colliders: AllocVec::new(),
            bodies: AllocVec::new(),
            alive: AllocVec::new(),
            contacts: ContactCache::new(),
            members: AllocVec::new(),
        }
    }

    /// Add an entity. Returns its id.
    pub fn spawn(
        &mut self,
        position: Vec2<F>,
        collider: Option<Collider<F>>,
        body: Option<Body<F>>,
    ) -> EntityId {
        let id = EntityId(self.transforms.len());
        self.transforms.push(Transform::new(position));
        self.colliders.push(collider);
        self.bodies.push(body);
        self.alive.push(true);
        id
    }

    /// Add a body with the given mass, seeded from `config`.
    pub fn spawn_dynamic(
        &mut self,
        position: Vec2<F>,
        collider: Collider<F>,
        mass: Mass<F>,
        config: &PhysicsConfig<F>,
    ) -> Result<EntityId> {
        let body = Body::new(mass, config)?;
        Ok(self.spawn(position, Some(collider), Some(body)))
    }

    /// Add scenery: a collider with no body.
    pub fn spawn_static(&mut self, position: Vec2<F>, collider: Collider<F>) -> EntityId {
        self.spawn(position, Some(collider), None)
    }

    /// Remove an entity. Its id is never reused.
    pub fn despawn(&mut self, id: EntityId) -> Result<()> {
        self.check(id)?;
        self.alive[id.0] = false;
        self.colliders[id.0] = None;
        self.bodies[id.0] = None;
        Ok(())
    }

    /// Slots ever spawned, including despawned ones.
    pub fn capacity_used(&self) -> usize {
        self.transforms.len()
    }

    /// Live entities.
    pub fn len(&self) -> usize {
        self.alive.iter().filter(|a| **a).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.alive.get(id.0).copied().unwrap_or(false)
    }

    /// Live entity ids in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| EntityId(i))
    }

    pub fn transform(&self, id: EntityId) -> Option<&Transform<F>> {
        self.contains(id).then(|| &self.transforms[id.0])
    }

    pub fn position(&self, id: EntityId) -> Option<Vec2<F>> {
        self.transform(id).map(Transform::position)
    }

    pub fn collider(&self, id: EntityId) -> Option<&Collider<F>> {
        self.colliders.get(id.0).and_then(Option::as_ref)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body<F>> {
        self.bodies.get(id.0).and_then(Option::as_ref)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body<F>> {
        self.bodies.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Queue an impulse on an entity's body.
    pub fn add_impulse(&mut self, id: EntityId, impulse: Vec2<F>) -> Result<()> {
        self.require_body(id)?.add_impulse(impulse);
        Ok(())
    }

    /// Supply ground contact for an entity's body.
    pub fn set_grounded(&mut self, id: EntityId, grounded: bool) -> Result<()> {
        self.require_body(id)?.set_grounded(grounded);
        Ok(())
    }

    /// Change an entity's mass; see [`Body::set_mass`].
    pub fn set_mass(&mut self, id: EntityId, mass: Mass<F>, config: &PhysicsConfig<F>) -> Result<()> {
        self.require_body(id)?.set_mass(mass, config)
    }

    /// Contacts found during the last step.
    pub fn contacts(&self) -> &ContactCache<F> {
        &self.contacts
    }

    /// Advance the world by `dt`.
    ///
    /// Every body is integrated before any pair is tested, then the
    /// configured number of relaxation passes run over all collidable
    /// entities in spawn order. The step always runs to completion.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        dt: F,
        config: &PhysicsConfig<F>,
        observer: &mut O,
    ) {
        if !(dt > F::zero() && dt.is_finite()) {
            warn!(dt = dt.to_f64(), "time step is not a finite positive value; treating as zero");
        }

        let integrator = Integrator::new(config);
        for (i, slot) in self.bodies.iter_mut().enumerate() {
            if let Some(body) = slot {
                integrator.advance(body, &mut self.transforms[i], dt);
            }
        }
        observer.on_integrate();

        self.members.clear();
        for (i, collider) in self.colliders.iter().enumerate() {
            if let Some(collider) = collider {
                let inverse_mass = self.bodies[i]
                    .as_ref()
                    .map_or(F::zero(), Body::inverse_mass);
                self.members.push(Member { index: i, collider: *collider, inverse_mass });
            }
        }

        self.contacts.clear();
        let report = Resolver::from_config(config).relax(
            CollidableSet { transforms: &mut self.transforms, members: &self.members },
            &mut self.contacts,
            observer,
        );

        debug!(
            bodies = self.bodies.iter().filter(|b| b.is_some()).count(),
            collidable = self.members.len(),
            contacts = self.contacts.len(),
            passes = report.passes_run,
            corrections = report.corrections,
            "step complete"
        );
        observer.on_step_complete(&self.contacts);
    }

    fn check(&self, id: EntityId) -> Result<()> {
        match self.alive.get(id.0) {
            None => Err(PhysicsError::EntityOutOfBounds { index: id.0, count: self.alive.len() }),
            Some(false) => Err(PhysicsError::EntityRemoved { index: id.0 }),
            Some(true) => Ok(()),
        }
    }

    fn require_body(&mut self, id: EntityId) -> Result<&mut Body<F>> {
        self.check(id)?;
        self.bodies[id.0]
            .as_mut()
            .ok_or(PhysicsError::MissingBody { index: id.0 })
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new()
    }
}
