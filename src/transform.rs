//! Entity placement.

use crate::float::Float;
use crate::vec::Vec2;

/// Position of an entity's centre, plus where it was before the last step.
///
/// Only integration and collision resolution move a transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform<F: Float> {
    pub(crate) position: Vec2<F>,
    pub(crate) previous_position: Vec2<F>,
    /// Length of the step that produced `position - previous_position`;
    /// zero until the first non-empty step.
    pub(crate) last_dt: F,
}

impl<F: Float> Transform<F> {
    pub fn new(position: Vec2<F>) -> Self {
        Transform { position, previous_position: position, last_dt: F::zero() }
    }

    pub fn position(&self) -> Vec2<F> {
        self.position
    }

    /// Position at the start of the last non-empty integration. Verlet
    /// derives velocity from this; renderers may interpolate with it.
    pub fn previous_position(&self) -> Vec2<F> {
        self.previous_position
    }

    /// Displacement over the last step, resolver corrections included.
    pub fn displacement(&self) -> Vec2<F> {
        self.position - self.previous_position
    }

    pub(crate) fn translate(&mut self, delta: Vec2<F>) {
        self.position = self.position + delta;
    }
}
