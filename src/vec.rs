//! Planar vectors.
//!
//! Screen convention throughout: +X right, +Y down. "Up" in a platformer
//! is therefore negative Y.

use core::ops::{Add, Neg, Sub};

use crate::float::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vector operations shared by the force model, detector, and resolver.
pub trait Vec:
    Copy + PartialEq + Default + core::fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self>
{
    type Scalar: Float;

    fn zero() -> Self;
    fn dot(self, other: Self) -> Self::Scalar;
    fn scale(self, s: Self::Scalar) -> Self;
    /// False if any component is NaN or infinite.
    fn is_finite(self) -> bool;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (other - self).length()
    }

    /// Unit vector in the same direction, or `None` for a (near) zero vector.
    fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > Self::Scalar::from_f32(1e-10) {
            Some(self.scale(Self::Scalar::one() / len))
        } else {
            None
        }
    }
}

/// 2D vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self {
        Vec2 { x, y }
    }

    /// `(0, 1)`, pointing down the screen.
    pub fn unit_y() -> Self {
        Vec2::new(F::zero(), F::one())
    }

    /// Per-component clamp into the box `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Vec2::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Vec2::new(-self.x, -self.y)
    }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;

    fn zero() -> Self {
        Vec2::new(F::zero(), F::zero())
    }

    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    fn scale(self, s: F) -> Self {
        Vec2::new(self.x * s, self.y * s)
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_3_4() {
        assert_eq!(Vec2::new(3.0f32, 4.0).length(), 5.0);
        assert_eq!(Vec2::new(1.0f64, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(Vec2::<f32>::zero().try_normalize(), None);
        assert_eq!(Vec2::new(0.0f64, -2.0).try_normalize(), Some(Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn clamp_into_box() {
        let lo = Vec2::new(0.0f32, 0.0);
        let hi = Vec2::new(10.0, 10.0);
        assert_eq!(Vec2::new(-5.0, 12.0).clamp(lo, hi), Vec2::new(0.0, 10.0));
        assert_eq!(Vec2::new(3.0, 4.0).clamp(lo, hi), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn non_finite_components_detected() {
        assert!(Vec2::new(1.0f64, 2.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 2.0).is_finite());
        assert!(!Vec2::new(0.0f64, f64::INFINITY).is_finite());
    }
}
