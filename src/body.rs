//! Rigid bodies: mass, velocity, named forces, and unspent impulse.

use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::float::Float;
use crate::force::{ForceKind, ForceMap, ForceModel};
use crate::vec::{Vec, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Body mass, with an explicit sentinel for immovable bodies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mass<F: Float> {
    /// Positive, finite mass.
    Finite(F),
    /// Immovable. Inverse mass is zero.
    Infinite,
}

impl<F: Float> Mass<F> {
    /// Reject finite masses that are non-positive, NaN, infinite, or so
    /// small that their inverse overflows.
    pub fn validate(self) -> Result<Self> {
        match self {
            Mass::Finite(m) if !(m > F::zero()) || !m.is_finite() || !(F::one() / m).is_finite() => {
                Err(PhysicsError::InvalidMass { mass: m.to_f64() })
            }
            other => Ok(other),
        }
    }

    pub fn value(self) -> F {
        match self {
            Mass::Finite(m) => m,
            Mass::Infinite => F::infinity(),
        }
    }

    pub fn inverse(self) -> F {
        match self {
            Mass::Finite(m) => F::one() / m,
            Mass::Infinite => F::zero(),
        }
    }
}

/// A movable (or immovable) body. Position lives on the paired
/// [`Transform`](crate::Transform); the body carries everything else.
#[derive(Clone, Debug)]
pub struct Body<F: Float> {
    pub(crate) mass: Mass<F>,
    pub(crate) inv_mass: F,
    pub(crate) velocity: Vec2<F>,
    pub(crate) acceleration: Vec2<F>,
    pub(crate) forces: ForceMap<F>,
    pub(crate) unspent_impulse: Vec2<F>,
    pub(crate) grounded: bool,
}

impl<F: Float> Body<F> {
    /// Create a body at rest and seed its force map from `config`.
    pub fn new(mass: Mass<F>, config: &PhysicsConfig<F>) -> Result<Self> {
        let mass = mass.validate()?;
        let mut body = Body {
            mass,
            inv_mass: mass.inverse(),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            forces: ForceMap::new(),
            unspent_impulse: Vec2::zero(),
            grounded: false,
        };
        ForceModel::new(config).seed(&mut body, mass);
        Ok(body)
    }

    /// Shorthand for a finite-mass body.
    pub fn dynamic(mass: F, config: &PhysicsConfig<F>) -> Result<Self> {
        Self::new(Mass::Finite(mass), config)
    }

    /// An infinite-mass body. Forces and impulses never move it.
    pub fn immovable() -> Self {
        let mut body = Body {
            mass: Mass::Infinite,
            inv_mass: F::zero(),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            forces: ForceMap::new(),
            unspent_impulse: Vec2::zero(),
            grounded: false,
        };
        ForceModel::new(&PhysicsConfig::new()).seed(&mut body, Mass::Infinite);
        body
    }

    /// Reported mass; `+inf` for immovable bodies.
    pub fn mass(&self) -> F {
        self.mass.value()
    }

    pub fn inverse_mass(&self) -> F {
        self.inv_mass
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == F::zero()
    }

    /// Change mass. Inverse mass and the gravitational entry are updated
    /// together; on error nothing changes.
    pub fn set_mass(&mut self, mass: Mass<F>, config: &PhysicsConfig<F>) -> Result<()> {
        let mass = mass.validate()?;
        self.mass = mass;
        self.inv_mass = mass.inverse();
        let gravitational = ForceModel::new(config).gravitational(mass);
        self.forces.set(ForceKind::Gravitational, gravitational);
        if self.is_static() {
            self.velocity = Vec2::zero();
            self.acceleration = Vec2::zero();
        }
        Ok(())
    }

    pub fn velocity(&self) -> Vec2<F> {
        self.velocity
    }

    /// Override velocity (gameplay movement). Ignored for static bodies.
    ///
    /// Under [`IntegrationMethod::Verlet`](crate::IntegrationMethod::Verlet)
    /// velocity is re-derived from displacement once a body has moved, so
    /// use [`add_impulse`](Self::add_impulse) there instead.
    pub fn set_velocity(&mut self, velocity: Vec2<F>) {
        if !self.is_static() {
            self.velocity = velocity;
        }
    }

    /// Acceleration computed during the last integration.
    pub fn acceleration(&self) -> Vec2<F> {
        self.acceleration
    }

    /// Sum over the force map.
    pub fn resultant_force(&self) -> Vec2<F> {
        ForceModel::resultant(self)
    }

    pub fn forces(&self) -> &ForceMap<F> {
        &self.forces
    }

    pub fn force(&self, kind: ForceKind) -> Option<Vec2<F>> {
        self.forces.get(kind)
    }

    /// Install or overwrite a force. Built-in kinds are rewritten on the
    /// next refresh, so this is only persistent for `ForceKind::Custom`.
    pub fn set_force(&mut self, kind: ForceKind, force: Vec2<F>) {
        self.forces.set(kind, force);
    }

    /// Remove a custom force. Built-in entries always stay present.
    pub fn remove_force(&mut self, kind: ForceKind) -> Option<Vec2<F>> {
        if kind.is_built_in() {
            return None;
        }
        self.forces.remove(kind)
    }

    /// Queue an instantaneous impulse, folded into velocity next step.
    pub fn add_impulse(&mut self, impulse: Vec2<F>) {
        self.unspent_impulse = self.unspent_impulse + impulse;
    }

    pub fn unspent_impulse(&self) -> Vec2<F> {
        self.unspent_impulse
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Externally supplied ground contact. Drives the normal-force entry.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    /// Fold the unspent impulse into velocity and clear it.
    pub(crate) fn spend_impulse(&mut self) {
        self.velocity = self.velocity + self.unspent_impulse.scale(self.inv_mass);
        self.unspent_impulse = Vec2::zero();
    }
}
