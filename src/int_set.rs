use std::{fmt, io};

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::{
    IntSetError,
    constants::{DEFAULT_MAX_SIZE, DUMP_SEPARATOR},
};

/// A set of distinct `i32` values held in a fixed array of `N` slots.
///
/// Members always occupy `data[0..used]` with no holes, ordered by admission:
/// `data[0]` is the member that has been present the longest. Re-adding a
/// present value changes nothing, while removing a value and adding it again
/// moves it to the back. Slots from `used` onwards hold stale values and are
/// never read.
#[derive(Clone, Copy)]
pub struct IntSet<const N: usize = DEFAULT_MAX_SIZE> {
    data: [i32; N],
    used: usize,
}

impl<const N: usize> IntSet<N> {
    /// Maximum number of distinct members
    pub const MAX_SIZE: usize = N;

    /// Create a new, empty set
    pub const fn new() -> Self {
        IntSet {
            data: [0; N],
            used: 0,
        }
    }

    pub const fn size(&self) -> usize {
        self.used
    }

    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub const fn is_full(&self) -> bool {
        self.used == N
    }

    /// The valid members, in admission order
    pub fn as_slice(&self) -> &[i32] {
        &self.data[..self.used]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.position(value).is_some()
    }

    fn position(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&member| member == value)
    }

    /// Add a value at the back of the admission order.
    /// Returns false and leaves the set untouched if the value is already a member or the set is full.
    pub fn add(&mut self, value: i32) -> bool {
        if self.contains(value) {
            trace!("Rejected {value}: already a member");
            return false;
        }

        if self.is_full() {
            trace!("Rejected {value}: set is full ({N} members)");
            return false;
        }

        self.data[self.used] = value;
        self.used += 1;
        true
    }

    /// Remove a value, shifting every later member one slot to the left so
    /// the surviving members keep their relative order.
    /// Returns false if the value is not a member.
    pub fn remove(&mut self, value: i32) -> bool {
        let Some(index) = self.position(value) else {
            trace!("Ignored removal of {value}: not a member");
            return false;
        };

        self.data.copy_within(index + 1..self.used, index);
        self.used -= 1;
        true
    }

    /// Forget every member. Stale slots are left as they are.
    pub fn reset(&mut self) {
        debug!("Reset set holding {} members", self.used);
        self.used = 0;
    }

    /// Returns true if every member of this set is also a member of `other`
    pub fn is_subset_of<const M: usize>(&self, other: &IntSet<M>) -> bool {
        if self.is_empty() {
            return true;
        }

        let found = self.iter().filter(|&&member| other.contains(member)).count();
        found == self.used
    }

    /// Members of this set (in this set's order) followed by the members of
    /// `other` that are not already present (in `other`'s order).
    ///
    /// # Panics
    /// Panics if the union holds more than `N` distinct values. Use
    /// [`IntSet::try_union_with`] when the inputs are not known to fit.
    pub fn union_with(&self, other: &IntSet<N>) -> IntSet<N> {
        let required = self.union_size(other);
        assert!(
            required <= N,
            "union needs {required} slots but capacity is {N}"
        );

        self.fill_union(other)
    }

    /// Like [`IntSet::union_with`], but reports an over-capacity union as an error instead of panicking
    pub fn try_union_with(&self, other: &IntSet<N>) -> Result<IntSet<N>, IntSetError> {
        let required = self.union_size(other);
        if required > N {
            warn!("Refused union of {required} distinct values into capacity {N}");
            return Err(IntSetError::CapacityExceeded {
                required,
                capacity: N,
            });
        }

        Ok(self.fill_union(other))
    }

    fn union_size(&self, other: &IntSet<N>) -> usize {
        self.used + other.subtract(self).size()
    }

    fn fill_union(&self, other: &IntSet<N>) -> IntSet<N> {
        let mut union = *self;
        for &member in other {
            union.add(member);
        }
        union
    }

    /// Members of this set that are also in `other`, in this set's order
    pub fn intersect<const M: usize>(&self, other: &IntSet<M>) -> IntSet<N> {
        self.iter().copied().filter(|&member| other.contains(member)).collect()
    }

    /// Members of this set that are not in `other`, in this set's order
    pub fn subtract<const M: usize>(&self, other: &IntSet<M>) -> IntSet<N> {
        self.iter().copied().filter(|&member| !other.contains(member)).collect()
    }

    /// Write the members in admission order, separated by two spaces, with no trailing separator or newline
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

/// Returns true if both sets hold exactly the same members, regardless of order
pub fn equal<const N: usize, const M: usize>(a: &IntSet<N>, b: &IntSet<M>) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }
    if a.size() != b.size() {
        return false;
    }
    a.is_subset_of(b) && b.is_subset_of(a)
}

impl<const N: usize> Default for IntSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const M: usize> PartialEq<IntSet<M>> for IntSet<N> {
    fn eq(&self, other: &IntSet<M>) -> bool {
        equal(self, other)
    }
}

impl<const N: usize> Eq for IntSet<N> {}

impl<const N: usize> fmt::Display for IntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut members = self.iter();
        if let Some(first) = members.next() {
            write!(f, "{first}")?;
            for member in members {
                write!(f, "{DUMP_SEPARATOR}{member}")?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for IntSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IntSet<{N}> ")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, const N: usize> IntoIterator for &'a IntSet<N> {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Values that are already members, or that arrive once the set is full, are dropped
impl<const N: usize> Extend<i32> for IntSet<N> {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<const N: usize> FromIterator<i32> for IntSet<N> {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = IntSet::new();
        set.extend(iter);
        set
    }
}

/// Strict construction: every value must be distinct and all of them must fit
impl<const N: usize> TryFrom<&[i32]> for IntSet<N> {
    type Error = IntSetError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        if values.len() > N {
            return Err(IntSetError::CapacityExceeded {
                required: values.len(),
                capacity: N,
            });
        }

        let mut set = IntSet::new();
        for &value in values {
            if !set.add(value) {
                return Err(IntSetError::DuplicateMember(value));
            }
        }
        Ok(set)
    }
}

impl<const N: usize> Serialize for IntSet<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for IntSet<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<i32>::deserialize(deserializer)?;
        IntSet::try_from(values.as_slice()).map_err(|e| {
            warn!("Rejected serialized set: {e}");
            serde::de::Error::custom(e)
        })
    }
}
