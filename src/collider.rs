//! Collision shapes: circles and axis-aligned rectangles.
//!
//! Shapes are pure geometry. Each one is centred on its entity's
//! transform and never changes after construction.

use crate::error::{PhysicsError, Result};
use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn positive<F: Float>(extent: &'static str, value: F) -> Result<F> {
    if value > F::zero() && value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidExtent { extent, value: value.to_f64() })
    }
}

/// Circle of fixed radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Circle<F: Float> {
    radius: F,
}

impl<F: Float> Circle<F> {
    pub fn new(radius: F) -> Result<Self> {
        Ok(Circle { radius: positive("radius", radius)? })
    }

    pub fn radius(&self) -> F {
        self.radius
    }
}

/// Axis-aligned rectangle, stored as half extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AxisAlignedRect<F: Float> {
    half_width: F,
    half_height: F,
}

impl<F: Float> AxisAlignedRect<F> {
    pub fn new(half_width: F, half_height: F) -> Result<Self> {
        Ok(AxisAlignedRect {
            half_width: positive("half width", half_width)?,
            half_height: positive("half height", half_height)?,
        })
    }

    /// Build from full width and height.
    pub fn from_size(width: F, height: F) -> Result<Self> {
        Ok(AxisAlignedRect {
            half_width: positive("width", width)? * F::half(),
            half_height: positive("height", height)? * F::half(),
        })
    }

    pub fn half_width(&self) -> F {
        self.half_width
    }

    pub fn half_height(&self) -> F {
        self.half_height
    }

    pub fn half_extents(&self) -> Vec2<F> {
        Vec2::new(self.half_width, self.half_height)
    }

    /// Corners `(min, max)` when centred at `centre`.
    pub fn bounds(&self, centre: Vec2<F>) -> (Vec2<F>, Vec2<F>) {
        let h = self.half_extents();
        (centre - h, centre + h)
    }
}

/// Shape discriminant, used to pick the narrow-phase routine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Circle,
    AxisAlignedRect,
}

/// A collider bound to one transform.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Collider<F: Float> {
    Circle(Circle<F>),
    AxisAlignedRect(AxisAlignedRect<F>),
}

impl<F: Float> Collider<F> {
    pub fn circle(radius: F) -> Result<Self> {
        Circle::new(radius).map(Collider::Circle)
    }

    pub fn rect(half_width: F, half_height: F) -> Result<Self> {
        AxisAlignedRect::new(half_width, half_height).map(Collider::AxisAlignedRect)
    }

    pub fn rect_from_size(width: F, height: F) -> Result<Self> {
        AxisAlignedRect::from_size(width, height).map(Collider::AxisAlignedRect)
    }

    /// Capsules have no intersection routines yet, so they cannot be built.
    pub fn capsule(_half_length: F, _radius: F) -> Result<Self> {
        Err(PhysicsError::UnsupportedShape("capsule"))
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Collider::Circle(_) => ShapeKind::Circle,
            Collider::AxisAlignedRect(_) => ShapeKind::AxisAlignedRect,
        }
    }

    /// Bounding box `(min, max)` when centred at `centre`.
    pub fn bounds(&self, centre: Vec2<F>) -> (Vec2<F>, Vec2<F>) {
        match self {
            Collider::Circle(c) => {
                let r = Vec2::new(c.radius, c.radius);
                (centre - r, centre + r)
            }
            Collider::AxisAlignedRect(r) => r.bounds(centre),
        }
    }
}

impl<F: Float> From<Circle<F>> for Collider<F> {
    fn from(c: Circle<F>) -> Self {
        Collider::Circle(c)
    }
}

impl<F: Float> From<AxisAlignedRect<F>> for Collider<F> {
    fn from(r: AxisAlignedRect<F>) -> Self {
        Collider::AxisAlignedRect(r)
    }
}
