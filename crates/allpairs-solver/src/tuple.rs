//! Tuples: one chosen value index per domain.
//!
//! A [`PartialTuple`] is built during the greedy fold; slots only ever go
//! from open to assigned. [`PartialTuple::finish`] fills the remaining open
//! slots and freezes the result into a [`Tuple`].

use serde::Serialize;

use crate::domain::{Domain, Value};
use crate::requirement::Requirement;

/// Value index used for slots still open when a tuple is finished.
pub const DEFAULT_VALUE: usize = 0;

/// An in-progress assignment. `None` marks an open slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialTuple {
    slots: Vec<Option<usize>>,
}

impl PartialTuple {
    /// A tuple over `width` domains with only `requirement`'s two slots set.
    ///
    /// # Panics
    ///
    /// Panics if either of `requirement`'s domains is not below `width`.
    pub fn seeded(width: usize, requirement: &Requirement) -> Self {
        let mut slots = vec![None; width];
        for value in [requirement.a(), requirement.b()] {
            slots[value.domain] = Some(value.value);
        }
        Self { slots }
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Assigned value index for `domain`, `None` if open.
    pub fn get(&self, domain: usize) -> Option<usize> {
        self.slots.get(domain).copied().flatten()
    }

    pub fn is_open(&self, domain: usize) -> bool {
        matches!(self.slots.get(domain), Some(None))
    }

    fn holds(&self, value: Value) -> bool {
        self.get(value.domain) == Some(value.value)
    }

    /// Whether both of `requirement`'s slots already match.
    pub fn satisfies(&self, requirement: &Requirement) -> bool {
        self.holds(requirement.a()) && self.holds(requirement.b())
    }

    /// Satisfy `requirement` if possible, committing at most one open slot.
    ///
    /// Succeeds when both slots already match, or when one matches and the
    /// other is open; in the latter case the open slot is filled. Returns
    /// `false` and leaves the tuple untouched otherwise.
    pub fn absorb(&mut self, requirement: &Requirement) -> bool {
        let (a, b) = (requirement.a(), requirement.b());
        match (self.get(a.domain), self.get(b.domain)) {
            (Some(x), Some(y)) => x == a.value && y == b.value,
            (Some(x), None) if x == a.value => {
                self.slots[b.domain] = Some(b.value);
                true
            }
            (None, Some(y)) if y == b.value => {
                self.slots[a.domain] = Some(a.value);
                true
            }
            _ => false,
        }
    }

    /// Fill every open slot with [`DEFAULT_VALUE`].
    pub fn finish(self) -> Tuple {
        Tuple {
            values: self
                .slots
                .into_iter()
                .map(|slot| slot.unwrap_or(DEFAULT_VALUE))
                .collect(),
        }
    }
}

/// A fully assigned combination. Index `i` holds the value index chosen for
/// domain `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tuple {
    values: Vec<usize>,
}

impl Tuple {
    pub fn from_values(values: Vec<usize>) -> Self {
        Self { values }
    }

    /// Value index chosen for `domain`.
    ///
    /// # Panics
    ///
    /// Panics if `domain` is not below [`Tuple::width`].
    pub fn value(&self, domain: usize) -> usize {
        self.values[domain]
    }

    pub fn get(&self, domain: usize) -> Option<usize> {
        self.values.get(domain).copied()
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn satisfies(&self, requirement: &Requirement) -> bool {
        let (a, b) = (requirement.a(), requirement.b());
        self.get(a.domain) == Some(a.value) && self.get(b.domain) == Some(b.value)
    }

    /// One value per domain, each within that domain's size.
    pub fn is_valid_for(&self, domains: &[Domain]) -> bool {
        self.values.len() == domains.len()
            && self
                .values
                .iter()
                .zip(domains)
                .all(|(&value, domain)| value < domain.size())
    }
}

impl std::fmt::Display for Tuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(da: usize, va: usize, db: usize, vb: usize) -> Requirement {
        Requirement::new(Value::new(da, va), Value::new(db, vb)).unwrap()
    }

    #[test]
    fn test_seeded_tuple_has_two_slots() {
        let t = PartialTuple::seeded(4, &req(1, 2, 3, 0));
        assert_eq!(t.width(), 4);
        assert_eq!(t.get(1), Some(2));
        assert_eq!(t.get(3), Some(0));
        assert!(t.is_open(0));
        assert!(t.is_open(2));
        assert!(!t.is_open(1));
    }

    #[test]
    #[should_panic]
    fn test_seeded_domain_beyond_width_panics() {
        PartialTuple::seeded(2, &req(0, 0, 2, 0));
    }

    #[test]
    fn test_absorb_fills_open_slot() {
        let mut t = PartialTuple::seeded(3, &req(0, 1, 1, 1));
        assert!(t.absorb(&req(0, 1, 2, 4)));
        assert_eq!(t.get(2), Some(4));

        // Slot 2 is now committed.
        assert!(!t.absorb(&req(0, 1, 2, 3)));
        assert_eq!(t.get(2), Some(4));
    }

    #[test]
    fn test_absorb_from_b_side() {
        let mut t = PartialTuple::seeded(3, &req(1, 0, 2, 2));
        assert!(t.absorb(&req(0, 5, 2, 2)));
        assert_eq!(t.get(0), Some(5));
    }

    #[test]
    fn test_absorb_rejects_mismatch() {
        let mut t = PartialTuple::seeded(3, &req(0, 0, 1, 0));
        let before = t.clone();
        assert!(!t.absorb(&req(0, 1, 2, 0)));
        assert!(!t.absorb(&req(0, 1, 1, 0)));
        assert_eq!(t, before);
    }

    #[test]
    fn test_absorb_rejects_both_open() {
        let mut t = PartialTuple::seeded(4, &req(0, 0, 1, 0));
        assert!(!t.absorb(&req(2, 0, 3, 0)));
        assert!(t.is_open(2));
        assert!(t.is_open(3));
    }

    #[test]
    fn test_absorb_already_satisfied() {
        let mut t = PartialTuple::seeded(2, &req(0, 3, 1, 1));
        assert!(t.satisfies(&req(0, 3, 1, 1)));
        assert!(t.absorb(&req(0, 3, 1, 1)));
    }

    #[test]
    fn test_finish_defaults_open_slots() {
        let t = PartialTuple::seeded(4, &req(1, 2, 2, 1)).finish();
        assert_eq!(t.values(), &[0, 2, 1, 0]);
        assert_eq!(t.value(1), 2);
        assert_eq!(t.to_string(), "[0, 2, 1, 0]");
    }

    #[test]
    fn test_validity_against_domains() {
        let domains = crate::domain::domains_from_sizes(&[2, 3]).unwrap();
        assert!(Tuple::from_values(vec![1, 2]).is_valid_for(&domains));
        assert!(!Tuple::from_values(vec![2, 0]).is_valid_for(&domains));
        assert!(!Tuple::from_values(vec![0]).is_valid_for(&domains));
    }
}
