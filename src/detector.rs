//! Narrow-phase collision detection.
//!
//! Pure geometry over current positions: every function here takes shapes
//! and centres and returns at most one [`Contact`] per pair. There is no
//! broad phase; [`detect_all`] tests every unordered pair.

use alloc::vec::Vec as AllocVec;

use crate::collider::{AxisAlignedRect, Circle, Collider};
use crate::contact::Contact;
use crate::float::Float;
use crate::vec::{Vec, Vec2};
use crate::world::EntityId;

/// A collider placed in the world, as seen by the detector.
#[derive(Copy, Clone, Debug)]
pub struct Placed<'a, F: Float> {
    pub id: EntityId,
    pub position: Vec2<F>,
    pub collider: &'a Collider<F>,
}

impl<'a, F: Float> Placed<'a, F> {
    pub fn new(id: EntityId, position: Vec2<F>, collider: &'a Collider<F>) -> Self {
        Placed { id, position, collider }
    }
}

/// Separation normal (first towards second) and positive depth.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration<F: Float> {
    pub normal: Vec2<F>,
    pub depth: F,
}

fn near_zero<F: Float>() -> F {
    F::from_f32(1e-10)
}

/// Test one pair. The normal of the result points from `a` to `b`.
pub fn detect<F: Float>(a: &Placed<'_, F>, b: &Placed<'_, F>) -> Option<Contact<F>> {
    let penetration = match (a.collider, b.collider) {
        (Collider::Circle(c1), Collider::Circle(c2)) => {
            circle_circle(a.position, c1, b.position, c2)
        }
        (Collider::Circle(c), Collider::AxisAlignedRect(r)) => {
            circle_rect(a.position, c, b.position, r)
        }
        // Reuse circle-rect with the roles swapped.
        (Collider::AxisAlignedRect(_), Collider::Circle(_)) => {
            return detect(b, a).map(Contact::flipped);
        }
        (Collider::AxisAlignedRect(r1), Collider::AxisAlignedRect(r2)) => {
            rect_rect(a.position, r1, b.position, r2)
        }
    }?;

    Some(Contact {
        first: a.id,
        second: b.id,
        normal: penetration.normal,
        depth: penetration.depth,
    })
}

/// Test every unordered pair in slice order: `(0,1), (0,2), .., (1,2), ..`.
pub fn detect_all<F: Float>(placed: &[Placed<'_, F>]) -> AllocVec<Contact<F>> {
    let mut contacts = AllocVec::new();
    for (i, a) in placed.iter().enumerate() {
        for b in &placed[i + 1..] {
            if let Some(contact) = detect(a, b) {
                contacts.push(contact);
            }
        }
    }
    contacts
}

/// Overlap iff the centre distance is below the radius sum. Coincident
/// centres separate along +Y.
pub fn circle_circle<F: Float>(
    p1: Vec2<F>,
    c1: &Circle<F>,
    p2: Vec2<F>,
    c2: &Circle<F>,
) -> Option<Penetration<F>> {
    let relative = p2 - p1;
    let distance = relative.length();
    let depth = c1.radius() + c2.radius() - distance;

    if !(depth > F::zero()) {
        return None;
    }

    let normal = if distance > near_zero() {
        relative.scale(F::one() / distance)
    } else {
        Vec2::unit_y()
    };

    Some(Penetration { normal, depth })
}

/// Circle against rectangle, normal pointing from the circle into the rect.
///
/// With the centre outside the rectangle the closest point on the rect
/// gives both normal and depth. With the centre inside, the axis with less
/// penetration wins (X on ties) and depth covers the whole radius, so one
/// full correction pushes the circle clear.
pub fn circle_rect<F: Float>(
    circle_pos: Vec2<F>,
    circle: &Circle<F>,
    rect_pos: Vec2<F>,
    rect: &AxisAlignedRect<F>,
) -> Option<Penetration<F>> {
    let (min, max) = rect.bounds(rect_pos);
    let closest = circle_pos.clamp(min, max);
    let from_rect = circle_pos - closest;
    let distance = from_rect.length();
    let radius = circle.radius();

    if !(distance < radius) {
        return None;
    }

    if distance > near_zero() {
        return Some(Penetration {
            normal: -from_rect.scale(F::one() / distance),
            depth: radius - distance,
        });
    }

    let offset = circle_pos - rect_pos;
    let horizontal = rect.half_width() - offset.x.abs();
    let vertical = rect.half_height() - offset.y.abs();

    let (outward, penetration) = if horizontal <= vertical {
        (Vec2::new(offset.x.sign_or_positive(), F::zero()), horizontal)
    } else {
        (Vec2::new(F::zero(), offset.y.sign_or_positive()), vertical)
    };

    Some(Penetration {
        normal: -outward,
        depth: penetration + radius,
    })
}

/// Overlap iff both axis overlaps are positive. The smaller overlap picks
/// the axis (X on ties), signed by where `r2` sits relative to `r1`.
pub fn rect_rect<F: Float>(
    p1: Vec2<F>,
    r1: &AxisAlignedRect<F>,
    p2: Vec2<F>,
    r2: &AxisAlignedRect<F>,
) -> Option<Penetration<F>> {
    let delta = p2 - p1;

    let overlap_x = r1.half_width() + r2.half_width() - delta.x.abs();
    if !(overlap_x > F::zero()) {
        return None;
    }

    let overlap_y = r1.half_height() + r2.half_height() - delta.y.abs();
    if !(overlap_y > F::zero()) {
        return None;
    }

    if overlap_x <= overlap_y {
        Some(Penetration {
            normal: Vec2::new(delta.x.sign_or_positive(), F::zero()),
            depth: overlap_x,
        })
    } else {
        Some(Penetration {
            normal: Vec2::new(F::zero(), delta.y.sign_or_positive()),
            depth: overlap_y,
        })
    }
}
