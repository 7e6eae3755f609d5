//! Hooks into the phases of a world step.

use crate::contact::{Contact, ContactCache};
use crate::float::Float;

/// Receives callbacks while [`World::step`](crate::World::step) runs.
///
/// Gameplay reacts to collisions here (landing, damage, triggers); debug
/// overlays and profilers can use the pass counts. Every method defaults
/// to doing nothing.
pub trait StepObserver<F: Float> {
    /// All bodies have been integrated; no pair has been tested yet.
    fn on_integrate(&mut self) {}

    /// A pair was found overlapping for the first time this step.
    fn on_contact(&mut self, _contact: &Contact<F>) {}

    /// A relaxation pass finished after correcting `corrections` pairs.
    fn on_relaxation_pass(&mut self, _pass: usize, _corrections: usize) {}

    /// The step is over; `contacts` holds everything confirmed during it.
    fn on_step_complete(&mut self, _contacts: &ContactCache<F>) {}
}

/// Observer for callers that do not need callbacks.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
