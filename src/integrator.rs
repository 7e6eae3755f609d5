//! Advancing bodies over a time step.
//!
//! Per dynamic body, semi-implicit Euler runs:
//!
//! 1. `velocity += impulse * inv_mass`, impulse cleared (never scaled by `dt`)
//! 2. force refresh
//! 3. `acceleration = resultant * inv_mass`
//! 4. `velocity += acceleration * dt`
//! 5. `position += velocity * dt`
//!
//! Static bodies stop after step 2. The optional rest-speed snap runs
//! after step 5, per axis.

use crate::body::Body;
use crate::config::{IntegrationMethod, PhysicsConfig};
use crate::float::Float;
use crate::force::ForceModel;
use crate::transform::Transform;
use crate::vec::{Vec, Vec2};

/// Integrates bodies with the force model and settings of one config.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Integrator<F: Float> {
    model: ForceModel<F>,
    method: IntegrationMethod,
    rest_speed: Option<F>,
}

impl<F: Float> Integrator<F> {
    pub fn new(config: &PhysicsConfig<F>) -> Self {
        Integrator {
            model: ForceModel::new(config),
            method: config.integration,
            rest_speed: config.rest_speed,
        }
    }

    /// Advance one body over `dt`. A `dt` that is not positive and finite
    /// behaves like zero: nothing moves.
    pub fn advance(&self, body: &mut Body<F>, transform: &mut Transform<F>, dt: F) {
        let dt = if dt > F::zero() && dt.is_finite() { dt } else { F::zero() };

        match self.method {
            IntegrationMethod::SemiImplicitEuler => self.semi_implicit_euler(body, transform, dt),
            IntegrationMethod::Verlet => self.verlet(body, transform, dt),
        }
    }

    fn semi_implicit_euler(&self, body: &mut Body<F>, transform: &mut Transform<F>, dt: F) {
        if dt > F::zero() {
            transform.previous_position = transform.position;
            transform.last_dt = dt;
        }
        body.spend_impulse();
        self.model.refresh(body);

        if body.is_static() {
            body.acceleration = Vec2::zero();
            return;
        }

        body.acceleration = body.resultant_force().scale(body.inv_mass);
        body.velocity = body.velocity + body.acceleration.scale(dt);
        transform.position = transform.position + body.velocity.scale(dt);

        self.snap_to_rest(body, None);
    }

    /// Position Verlet over the transform's last displacement.
    ///
    /// Velocity is re-derived as displacement over the step that produced
    /// it, so any correction the resolver applied last step counts as
    /// motion. A zero-length step holds state entirely: the displacement is
    /// kept and queued impulses wait for the next real step.
    fn verlet(&self, body: &mut Body<F>, transform: &mut Transform<F>, dt: F) {
        if body.is_static() {
            body.spend_impulse();
            self.model.refresh(body);
            body.acceleration = Vec2::zero();
            return;
        }
        if dt == F::zero() {
            self.model.refresh(body);
            return;
        }

        if transform.last_dt > F::zero() {
            body.velocity = transform.displacement().scale(F::one() / transform.last_dt);
        }
        transform.previous_position = transform.position;
        transform.last_dt = dt;

        body.spend_impulse();
        self.model.refresh(body);

        body.acceleration = body.resultant_force().scale(body.inv_mass);
        let step = body.velocity.scale(dt) + body.acceleration.scale(dt * dt);
        transform.position = transform.position + step;
        body.velocity = body.velocity + body.acceleration.scale(dt);

        self.snap_to_rest(body, Some(transform));
    }

    fn snap_to_rest(&self, body: &mut Body<F>, verlet: Option<&mut Transform<F>>) {
        let Some(threshold) = self.rest_speed else {
            return;
        };
        let snap_x = body.velocity.x.abs() < threshold;
        let snap_y = body.velocity.y.abs() < threshold;
        if snap_x {
            body.velocity.x = F::zero();
        }
        if snap_y {
            body.velocity.y = F::zero();
        }
        if let Some(transform) = verlet {
            // The next Verlet step reads velocity back from displacement.
            if snap_x {
                transform.previous_position.x = transform.position.x;
            }
            if snap_y {
                transform.previous_position.y = transform.position.y;
            }
        }
    }
}
