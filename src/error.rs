//! Error types for physics operations.

use thiserror::Error;

/// Errors raised while constructing or mutating physics state.
///
/// A simulation step never returns one of these: every check happens
/// when a body, collider, or config value is created or assigned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Finite mass must be positive. Use `Mass::Infinite` for immovable bodies.
    #[error("mass must be positive and finite, got {mass}")]
    InvalidMass { mass: f64 },

    /// Collider extents (radius, half-width, half-height) must be positive.
    #[error("collider {extent} must be positive and finite, got {value}")]
    InvalidExtent { extent: &'static str, value: f64 },

    /// The shape is declared but has no narrow-phase implementation.
    #[error("{0} colliders are not supported")]
    UnsupportedShape(&'static str),

    /// Entity index is out of bounds.
    #[error("entity index {index} out of bounds (count: {count})")]
    EntityOutOfBounds { index: usize, count: usize },

    /// Entity was despawned.
    #[error("entity {index} has been despawned")]
    EntityRemoved { index: usize },

    /// The operation needs a body, but the entity only has a collider.
    #[error("entity {index} has no body")]
    MissingBody { index: usize },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Shorthand for results carrying a [`PhysicsError`].
pub type Result<T> = core::result::Result<T, PhysicsError>;
