//! Compact suspect sets.
//!
//! A `SuspectSet` is a bitmask keyed by `SuspectId`. Worlds are compared
//! by membership only, so two sets built in different orders are equal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::suspect::SuspectId;

/// Largest id a set can hold (exclusive).
pub const SET_CAPACITY: u8 = 64;

/// Set of suspects, stored as a bitmask over ids.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<SuspectId>", into = "Vec<SuspectId>")]
pub struct SuspectSet(u64);

impl SuspectSet {
    /// The empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert an id. Returns whether it was newly added.
    pub fn insert(&mut self, id: SuspectId) -> bool {
        debug_assert!(id.0 < SET_CAPACITY, "suspect id {} exceeds set capacity", id.0);
        if id.0 >= SET_CAPACITY {
            return false;
        }
        let bit = 1u64 << id.0;
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[must_use]
    pub fn contains(&self, id: SuspectId) -> bool {
        id.0 < SET_CAPACITY && self.0 & (1u64 << id.0) != 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether any member satisfies the predicate.
    pub fn any(&self, f: impl FnMut(SuspectId) -> bool) -> bool {
        self.iter().any(f)
    }

    /// Whether every member of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &SuspectSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = SuspectId> + '_ {
        let bits = self.0;
        (0..SET_CAPACITY).filter(move |i| bits & (1u64 << i) != 0).map(SuspectId)
    }
}

impl FromIterator<SuspectId> for SuspectSet {
    fn from_iter<I: IntoIterator<Item = SuspectId>>(iter: I) -> Self {
        let mut set = SuspectSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl TryFrom<Vec<SuspectId>> for SuspectSet {
    type Error = ConfigError;

    fn try_from(ids: Vec<SuspectId>) -> Result<Self, Self::Error> {
        let mut set = SuspectSet::new();
        for id in ids {
            if id.0 >= SET_CAPACITY {
                return Err(ConfigError::IdOutOfRange(id));
            }
            set.insert(id);
        }
        Ok(set)
    }
}

impl From<SuspectSet> for Vec<SuspectId> {
    fn from(set: SuspectSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for SuspectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|id| id.0)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u8]) -> SuspectSet {
        ids.iter().copied().map(SuspectId).collect()
    }

    #[test]
    fn test_membership() {
        let mut s = SuspectSet::new();
        assert!(s.is_empty());
        assert!(s.insert(SuspectId(3)));
        assert!(!s.insert(SuspectId(3)));
        assert!(s.contains(SuspectId(3)));
        assert!(!s.contains(SuspectId(4)));
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        assert_eq!(set(&[5, 1, 3]), set(&[1, 3, 5]));
        assert_ne!(set(&[1, 3]), set(&[1, 3, 5]));
    }

    #[test]
    fn test_iter_is_ascending() {
        let ids: Vec<u8> = set(&[7, 2, 4]).iter().map(SuspectId::get).collect();
        assert_eq!(ids, vec![2, 4, 7]);
    }

    #[test]
    fn test_subset() {
        assert!(set(&[1, 2]).is_subset(&set(&[1, 2, 3])));
        assert!(!set(&[1, 4]).is_subset(&set(&[1, 2, 3])));
        assert!(SuspectSet::new().is_subset(&set(&[1])));
    }

    #[test]
    fn test_serde_as_sorted_list() {
        let json = serde_json::to_string(&set(&[6, 2])).unwrap();
        assert_eq!(json, "[2,6]");

        let back: SuspectSet = serde_json::from_str("[6,2,2]").unwrap();
        assert_eq!(back, set(&[2, 6]));

        assert!(serde_json::from_str::<SuspectSet>("[64]").is_err());
    }
}
