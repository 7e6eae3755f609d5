//! Positional collision resolution by iterative relaxation.
//!
//! Overlap is removed by moving transforms apart, weighted by inverse
//! mass. Velocities are left alone. A single sweep can push a body into a
//! third one, so the detect-and-correct sweep is repeated several times in
//! the same pair order.

use tracing::trace;

use crate::collider::Collider;
use crate::config::PhysicsConfig;
use crate::contact::{Contact, ContactCache};
use crate::detector::{detect, Placed};
use crate::float::Float;
use crate::observer::StepObserver;
use crate::transform::Transform;
use crate::vec::{Vec, Vec2};
use crate::world::EntityId;

/// Share of the correction each participant takes, `(first, second)`.
///
/// Returns `None` when both are immovable. A zero-inverse-mass side gets 0
/// and the other side the whole correction.
pub fn correction_coefficients<F: Float>(inv_mass1: F, inv_mass2: F) -> Option<(F, F)> {
    let zero = F::zero();
    match (inv_mass1 == zero, inv_mass2 == zero) {
        (true, true) => None,
        (true, false) => Some((zero, F::one())),
        (false, true) => Some((-F::one(), zero)),
        (false, false) => {
            let total = inv_mass1 + inv_mass2;
            Some((-inv_mass1 / total, inv_mass2 / total))
        }
    }
}

/// Position changes `(first, second)` that remove a contact's overlap.
///
/// `None` if there is nothing to correct: non-positive depth or two
/// immovable participants.
pub fn displacements<F: Float>(
    contact: &Contact<F>,
    inv_mass1: F,
    inv_mass2: F,
) -> Option<(Vec2<F>, Vec2<F>)> {
    if !(contact.depth > F::zero()) {
        return None;
    }
    let (coeff1, coeff2) = correction_coefficients(inv_mass1, inv_mass2)?;
    let push = contact.normal.scale(contact.depth);
    Some((push.scale(coeff1), push.scale(coeff2)))
}

/// One collidable entity: where its transform lives, its shape, and how
/// much of a correction it accepts. Entities without a body have zero
/// inverse mass.
#[derive(Copy, Clone, Debug)]
pub struct Member<F: Float> {
    pub index: usize,
    pub collider: Collider<F>,
    pub inverse_mass: F,
}

/// The explicit set of things that can collide this step, in iteration order.
pub struct CollidableSet<'a, F: Float> {
    pub transforms: &'a mut [Transform<F>],
    pub members: &'a [Member<F>],
}

/// Totals from one call to [`Resolver::relax`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RelaxationReport {
    pub passes_run: usize,
    pub corrections: usize,
}

/// Runs the detect-and-correct sweeps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolver {
    passes: usize,
}

impl Resolver {
    pub fn new(passes: usize) -> Self {
        Resolver { passes: passes.max(1) }
    }

    pub fn from_config<F: Float>(config: &PhysicsConfig<F>) -> Self {
        Self::new(config.passes())
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Sweep every pair up to `passes` times, recording contacts in `cache`
    /// and correcting positions as they are found.
    ///
    /// A pass that corrects nothing leaves every transform unchanged, so
    /// the remaining passes would repeat it exactly; relaxation stops there.
    ///
    /// # Panics
    /// If a member's `index` is out of range for `set.transforms`.
    pub fn relax<F: Float, O: StepObserver<F>>(
        &self,
        set: CollidableSet<'_, F>,
        cache: &mut ContactCache<F>,
        observer: &mut O,
    ) -> RelaxationReport {
        let CollidableSet { transforms, members } = set;
        let mut report = RelaxationReport::default();

        for pass in 0..self.passes {
            let mut corrections = 0;

            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    let first = Placed::new(EntityId::new(a.index), transforms[a.index].position, &a.collider);
                    let second = Placed::new(EntityId::new(b.index), transforms[b.index].position, &b.collider);

                    let Some(contact) = detect(&first, &second) else {
                        continue;
                    };

                    if cache.record(contact) {
                        trace!(
                            first = a.index,
                            second = b.index,
                            depth = contact.depth.to_f64(),
                            pass,
                            "contact"
                        );
                        observer.on_contact(&contact);
                    }

                    if let Some((d1, d2)) = displacements(&contact, a.inverse_mass, b.inverse_mass) {
                        transforms[a.index].translate(d1);
                        transforms[b.index].translate(d2);
                        corrections += 1;
                    }
                }
            }

            observer.on_relaxation_pass(pass, corrections);
            report.passes_run += 1;
            report.corrections += corrections;

            if corrections == 0 {
                break;
            }
        }

        report
    }
}
