//! Configuration types for the physics step.

use crate::error::{PhysicsError, Result};
use crate::float::Float;
use crate::vec::{Vec, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How bodies are advanced over a time step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntegrationMethod {
    /// Velocity first, then position from the new velocity.
    #[default]
    SemiImplicitEuler,
    /// Position Verlet. Velocity is implied by the previous position, so
    /// positional corrections from the resolver carry into the next step.
    Verlet,
}

/// Simulation parameters shared by every body.
///
/// Passed by reference into each [`World::step`](crate::World::step), so an
/// external loader can swap values between frames.
///
/// # Builder Pattern
/// ```
/// use tria_physics::config::PhysicsConfig;
/// use tria_physics::vec::Vec2;
///
/// let config: PhysicsConfig<f32> = PhysicsConfig::new()
///     .with_gravity(Vec2::new(0.0, 1140.0))
///     .with_drag_coefficient(0.5)
///     .with_relaxation_passes(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig<F: Float> {
    /// Gravitational acceleration. Default: zero (no gravity).
    pub gravity: Vec2<F>,
    /// Linear drag: `drag = -coefficient * velocity`. Default: 0.
    pub drag_coefficient: F,
    /// Detect-and-correct sweeps per step. Default: 6.
    pub relaxation_passes: usize,
    /// Integration scheme. Default: semi-implicit Euler.
    pub integration: IntegrationMethod,
    /// Per-axis speed below which velocity snaps to zero. Default: off.
    pub rest_speed: Option<F>,
}

impl<F: Float> PhysicsConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        PhysicsConfig {
            gravity: Vec2::zero(),
            drag_coefficient: F::zero(),
            relaxation_passes: 6,
            integration: IntegrationMethod::SemiImplicitEuler,
            rest_speed: None,
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the linear drag coefficient.
    pub fn with_drag_coefficient(mut self, coefficient: F) -> Self {
        self.drag_coefficient = coefficient;
        self
    }

    /// Set the number of relaxation passes (at least one).
    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes.max(1);
        self
    }

    /// Set the integration scheme.
    pub fn with_integration(mut self, method: IntegrationMethod) -> Self {
        self.integration = method;
        self
    }

    /// Enable the low-speed snap.
    pub fn with_rest_speed(mut self, threshold: F) -> Self {
        self.rest_speed = Some(threshold);
        self
    }

    /// Relaxation passes actually run; a deserialized zero still runs one.
    pub fn passes(&self) -> usize {
        self.relaxation_passes.max(1)
    }

    /// Check values that arrive from outside (e.g. a deserialized file).
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite"));
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < F::zero() {
            return Err(PhysicsError::InvalidConfig("drag coefficient must be finite and non-negative"));
        }
        if let Some(threshold) = self.rest_speed {
            if !threshold.is_finite() || threshold < F::zero() {
                return Err(PhysicsError::InvalidConfig("rest speed must be finite and non-negative"));
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for PhysicsConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
