//! Contacts and the per-frame contact cache.

use alloc::vec::Vec as AllocVec;

use crate::float::Float;
use crate::vec::Vec2;
use crate::world::EntityId;

/// A confirmed overlap between two colliders.
///
/// `normal` is a unit vector pointing from `first` towards `second`;
/// `depth` is strictly positive. Contacts only live for one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    pub first: EntityId,
    pub second: EntityId,
    pub normal: Vec2<F>,
    pub depth: F,
}

impl<F: Float> Contact<F> {
    /// True if `id` is one of the participants.
    pub fn involves(&self, id: EntityId) -> bool {
        self.first == id || self.second == id
    }

    /// The participant that is not `id`.
    pub fn other(&self, id: EntityId) -> Option<EntityId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }

    /// Normal oriented away from `id`, towards the other participant.
    pub fn normal_from(&self, id: EntityId) -> Option<Vec2<F>> {
        if self.first == id {
            Some(self.normal)
        } else if self.second == id {
            Some(-self.normal)
        } else {
            None
        }
    }

    /// Same contact seen from the other participant.
    pub fn flipped(self) -> Self {
        Contact {
            first: self.second,
            second: self.first,
            normal: -self.normal,
            depth: self.depth,
        }
    }

    fn same_pair(&self, a: EntityId, b: EntityId) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// Contacts confirmed during the current step.
///
/// Cleared at the start of every step. Each unordered pair appears at most
/// once, holding the geometry from the pass that first found it.
#[derive(Clone, Debug, Default)]
pub struct ContactCache<F: Float> {
    contacts: AllocVec<Contact<F>>,
}

impl<F: Float> ContactCache<F> {
    pub fn new() -> Self {
        ContactCache { contacts: AllocVec::new() }
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Record a contact unless its pair is already cached.
    /// Returns true if it was added.
    pub fn record(&mut self, contact: Contact<F>) -> bool {
        if self.between(contact.first, contact.second).is_some() {
            return false;
        }
        self.contacts.push(contact);
        true
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn as_slice(&self) -> &[Contact<F>] {
        &self.contacts
    }

    /// Contacts in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact<F>> + '_ {
        self.contacts.iter()
    }

    /// The cached contact for a pair, in either order.
    pub fn between(&self, a: EntityId, b: EntityId) -> Option<&Contact<F>> {
        self.contacts.iter().find(|c| c.same_pair(a, b))
    }

    /// Normal of the `id`/`other` contact, pointing away from `id`.
    pub fn normal_from(&self, id: EntityId, other: EntityId) -> Option<Vec2<F>> {
        self.between(id, other).and_then(|c| c.normal_from(id))
    }

    /// Every contact that `id` takes part in.
    pub fn involving(&self, id: EntityId) -> impl Iterator<Item = &Contact<F>> + '_ {
        self.contacts.iter().filter(move |c| c.involves(id))
    }
}

impl<'a, F: Float> IntoIterator for &'a ContactCache<F> {
    type Item = &'a Contact<F>;
    type IntoIter = core::slice::Iter<'a, Contact<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
