//! Ordinal and reserved-slot set types.

use std::collections::BTreeSet;

/// An ordinal identifies one logical position in a replicated
/// workload's ordered sequence.
///
/// Ordinals are non-negative 32-bit integers. A reserved ordinal is
/// never handed out again until it is explicitly un-reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(u32);

impl Ordinal {
    /// Creates an ordinal from its integer value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the next ordinal in sequence.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Ordinal {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ordinal> for u32 {
    fn from(ordinal: Ordinal) -> Self {
        ordinal.0
    }
}

impl serde::Serialize for Ordinal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Ordinal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Ok(Self(value))
    }
}

/// The set of ordinals currently excluded from allocation.
///
/// Backed by a `BTreeSet` so that iteration is always in ascending
/// numeric order. The boundary resolution scan depends on this:
/// processing reservations out of order can skip a reservation that a
/// smaller one would have pulled inside the boundary.
///
/// The set is mutated only by explicit reservation-management calls;
/// the allocator reads it and never writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedSlots(BTreeSet<Ordinal>);

/// A derived set of active ordinals.
///
/// Recomputed on every allocation call; never stored.
pub type OrdinalSet = BTreeSet<Ordinal>;

impl ReservedSlots {
    /// Creates an empty reservation set.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds an ordinal to the set. Returns true if it was not already
    /// present.
    pub fn insert(&mut self, ordinal: Ordinal) -> bool {
        self.0.insert(ordinal)
    }

    /// Removes an ordinal from the set. Returns true if it was
    /// present.
    pub fn remove(&mut self, ordinal: Ordinal) -> bool {
        self.0.remove(&ordinal)
    }

    /// Removes all ordinals from the set.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns true if the ordinal is reserved.
    #[must_use]
    pub fn contains(&self, ordinal: Ordinal) -> bool {
        self.0.contains(&ordinal)
    }

    /// Returns the number of reserved ordinals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no ordinals are reserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the reserved ordinals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Ordinal> + '_ {
        self.0.iter().copied()
    }

    /// Returns the union of this set and another.
    #[must_use]
    pub fn union(&self, other: &ReservedSlots) -> ReservedSlots {
        Self(self.0.union(&other.0).copied().collect())
    }
}

impl FromIterator<Ordinal> for ReservedSlots {
    fn from_iter<I: IntoIterator<Item = Ordinal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<u32> for ReservedSlots {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().map(Ordinal::new).collect())
    }
}

impl Extend<Ordinal> for ReservedSlots {
    fn extend<I: IntoIterator<Item = Ordinal>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ReservedSlots {
    type Item = Ordinal;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Ordinal>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
