//! Scalar abstraction so the engine runs on `f32` or `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// The scalar operations the engine needs, backed by `libm` so they stay
/// available under `no_std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    /// Reported as the mass of immovable bodies.
    fn infinity() -> Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;

    /// Lossless for `f32`, widening for `f64`. Used for constants.
    fn from_f32(v: f32) -> Self;
    /// For error payloads and log fields.
    fn to_f64(self) -> f64;

    /// Smaller of the two; `other` if either is NaN.
    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Larger of the two; `other` if either is NaN.
    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// `-1` for negative values, `1` otherwise (zero included).
    ///
    /// Contact normals are signed with this so a zero offset still yields
    /// a unit axis.
    fn sign_or_positive(self) -> Self {
        if self < Self::zero() { -Self::one() } else { Self::one() }
    }
}

macro_rules! impl_float {
    ($t:ty, $sqrt:path, $fabs:path) => {
        impl Float for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn half() -> Self { 0.5 }
            fn infinity() -> Self { <$t>::INFINITY }
            fn sqrt(self) -> Self { $sqrt(self) }
            fn abs(self) -> Self { $fabs(self) }
            fn is_finite(self) -> bool { <$t>::is_finite(self) }
            fn from_f32(v: f32) -> Self { v as $t }
            fn to_f64(self) -> f64 { self as f64 }
        }
    };
}

impl_float!(f32, libm::sqrtf, libm::fabsf);
impl_float!(f64, libm::sqrt, libm::fabs);
