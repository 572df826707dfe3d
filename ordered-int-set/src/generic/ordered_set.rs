//! Fixed-capacity, insertion-ordered set of `i32` values.
//!
//! This module provides [`OrderedIntSet`], an array-backed set that keeps its members in the
//! order they most recently joined, and [`IntSet`], the same type at the default [`MAX_SIZE`].

use core::fmt;

use crate::error::OrderedSetError;
use crate::generic::set_ops::OrderedIntSetOps;

/// Default capacity of an [`IntSet`].
pub const MAX_SIZE: usize = 20;

/// An [`OrderedIntSet`] with the default capacity.
pub type IntSet = OrderedIntSet<MAX_SIZE>;

/// A set of distinct `i32` values stored in a fixed array, oldest member first.
///
/// Re-adding a live value does not move it. A value removed and added again is treated as a
/// new member and goes to the back.
///
/// # Type Parameters
///
/// * `SIZE` - The maximum number of distinct values the set can hold (compile-time constant).
///
/// # Examples
///
/// ```rust
/// use ordered_int_set::prelude::*;
///
/// let mut set: OrderedIntSet<5> = OrderedIntSet::new();
///
/// assert!(set.add(3));
/// assert!(set.add(7));
/// assert!(!set.add(3));
/// assert_eq!(set.as_slice(), &[3, 7]);
///
/// assert!(set.remove(3));
/// set.add(3);
/// assert_eq!(set.as_slice(), &[7, 3]);
/// assert_eq!(set.to_string(), "7  3");
/// ```
///
/// # Memory Layout
///
/// The set stores an array of `SIZE` values followed by a length field. Only the first `len`
/// values are members; the rest are stale.
#[derive(Clone, Copy, Debug)]
pub struct OrderedIntSet<const SIZE: usize> {
    items: [i32; SIZE],
    len: usize,
}

impl<const SIZE: usize> Default for OrderedIntSet<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> OrderedIntSet<SIZE> {
    /// Creates an empty set.
    ///
    /// ```rust
    /// use ordered_int_set::prelude::*;
    ///
    /// let set = IntSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), MAX_SIZE);
    /// ```
    pub const fn new() -> Self {
        Self {
            items: [0; SIZE],
            len: 0,
        }
    }

    /// Builds a set by adding each value of `values` in turn. Duplicates collapse onto their
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::CapacityExceeded`] if `values` holds more than `SIZE`
    /// distinct values.
    ///
    /// ```rust
    /// use ordered_int_set::prelude::*;
    ///
    /// let set = OrderedIntSet::<3>::try_from_slice(&[4, 1, 4, 2]).unwrap();
    /// assert_eq!(set.as_slice(), &[4, 1, 2]);
    ///
    /// assert!(OrderedIntSet::<2>::try_from_slice(&[1, 2, 3]).is_err());
    /// ```
    pub fn try_from_slice(values: &[i32]) -> Result<Self, OrderedSetError> {
        let mut set = Self::new();
        for &value in values {
            set.try_add(value)?;
        }
        Ok(set)
    }

    fn position(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&item| item == value)
    }
}

impl<const SIZE: usize> OrderedIntSetOps for OrderedIntSet<SIZE> {
    fn capacity(&self) -> usize {
        SIZE
    }

    fn as_slice(&self) -> &[i32] {
        &self.items[..self.len]
    }

    fn len(&self) -> usize {
        self.len
    }

    fn try_add(&mut self, value: i32) -> Result<bool, OrderedSetError> {
        if self.contains(value) {
            return Ok(false);
        }
        if self.len >= SIZE {
            tracing::error!(value, capacity = SIZE, "ordered int set is full");
            return Err(OrderedSetError::CapacityExceeded { capacity: SIZE });
        }

        self.items[self.len] = value;
        self.len += 1;

        Ok(true)
    }

    fn remove(&mut self, value: i32) -> bool {
        let Some(pos) = self.position(value) else {
            return false;
        };

        self.items.copy_within(pos + 1..self.len, pos);
        self.len -= 1;

        true
    }

    fn reset(&mut self) {
        tracing::trace!(len = self.len, "resetting ordered int set");
        self.len = 0;
    }
}

/// Order-independent: two sets are equal when they hold the same values.
impl<const SIZE: usize, const OTHER: usize> PartialEq<OrderedIntSet<OTHER>>
    for OrderedIntSet<SIZE>
{
    fn eq(&self, other: &OrderedIntSet<OTHER>) -> bool {
        crate::generic::set_ops::equal(self, other)
    }
}

impl<const SIZE: usize> Eq for OrderedIntSet<SIZE> {}

/// Same text as [`OrderedIntSetOps::dump_data`].
impl<const SIZE: usize> fmt::Display for OrderedIntSet<SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, "  {value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<const SIZE: usize> serde::Serialize for OrderedIntSet<SIZE> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, const SIZE: usize> serde::Deserialize<'de> for OrderedIntSet<SIZE> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SetVisitor<const SIZE: usize>;

        impl<'de, const SIZE: usize> serde::de::Visitor<'de> for SetVisitor<SIZE> {
            type Value = OrderedIntSet<SIZE>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of at most {SIZE} distinct integers")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut set = OrderedIntSet::<SIZE>::new();
                while let Some(value) = seq.next_element::<i32>()? {
                    set.try_add(value).map_err(serde::de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor::<SIZE>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 5;

    #[test]
    fn test_new_and_default_are_empty() {
        let set = OrderedIntSet::<SIZE>::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(!set.is_full());

        let default_set: OrderedIntSet<SIZE> = Default::default();
        assert!(default_set.is_empty());
        assert_eq!(default_set.capacity(), SIZE);
    }

    #[test]
    fn test_add_and_contains() {
        let mut set = OrderedIntSet::<SIZE>::new();
        assert!(!set.contains(3));
        assert!(set.add(3));
        assert!(set.contains(3));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_add_duplicate_keeps_position() {
        let mut set = OrderedIntSet::<SIZE>::new();
        set.add(1);
        set.add(2);
        set.add(3);

        assert!(!set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_add_duplicate_when_full() {
        let mut set = OrderedIntSet::<2>::new();
        set.add(1);
        set.add(2);
        assert!(set.is_full());

        assert!(!set.add(2));
        assert_eq!(set.try_add(1), Ok(false));
    }

    #[test]
    fn test_try_add_past_capacity() {
        let mut set = OrderedIntSet::<2>::new();
        set.add(1);
        set.add(2);

        assert_eq!(
            set.try_add(3),
            Err(OrderedSetError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(set.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "ordered int set capacity of 2 exceeded")]
    fn test_add_past_capacity_panics() {
        let mut set = OrderedIntSet::<2>::new();
        set.add(1);
        set.add(2);
        set.add(3);
    }

    #[test]
    fn test_remove_closes_gap() {
        let mut set = OrderedIntSet::<SIZE>::try_from_slice(&[10, 20, 30, 40]).unwrap();

        assert!(set.remove(20));
        assert_eq!(set.as_slice(), &[10, 30, 40]);

        assert!(set.remove(40));
        assert_eq!(set.as_slice(), &[10, 30]);

        assert!(set.remove(10));
        assert_eq!(set.as_slice(), &[30]);
    }

    #[test]
    fn test_remove_missing() {
        let mut set = OrderedIntSet::<SIZE>::try_from_slice(&[1, 2]).unwrap();
        assert!(!set.remove(3));
        assert_eq!(set.as_slice(), &[1, 2]);

        let mut empty = OrderedIntSet::<SIZE>::new();
        assert!(!empty.remove(0));
    }

    #[test]
    fn test_readd_after_remove_goes_last() {
        let mut set = OrderedIntSet::<SIZE>::try_from_slice(&[1, 2, 3]).unwrap();
        set.remove(1);
        assert!(set.add(1));
        assert_eq!(set.as_slice(), &[2, 3, 1]);
    }

    #[test]
    fn test_remove_frees_capacity() {
        let mut set = OrderedIntSet::<2>::try_from_slice(&[1, 2]).unwrap();
        set.remove(1);
        assert!(set.add(3));
        assert_eq!(set.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_reset() {
        let mut set = OrderedIntSet::<SIZE>::try_from_slice(&[1, 2, 3]).unwrap();
        set.reset();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(!set.contains(1));

        // Stale slots are not resurrected.
        set.add(9);
        assert_eq!(set.as_slice(), &[9]);
    }

    #[test]
    fn test_copies_are_independent() {
        let mut original = OrderedIntSet::<SIZE>::try_from_slice(&[1, 2]).unwrap();
        let copy = original;
        original.add(3);
        original.remove(1);

        assert_eq!(copy.as_slice(), &[1, 2]);
        assert_eq!(original.as_slice(), &[2, 3]);
    }

    #[test]
    fn test_try_from_slice_collapses_duplicates() {
        let set = OrderedIntSet::<SIZE>::try_from_slice(&[5, 5, 4, 5, 3]).unwrap();
        assert_eq!(set.as_slice(), &[5, 4, 3]);
    }

    #[test]
    fn test_try_from_slice_past_capacity() {
        assert_eq!(
            OrderedIntSet::<2>::try_from_slice(&[1, 2, 3]).unwrap_err(),
            OrderedSetError::CapacityExceeded { capacity: 2 }
        );
    }

    #[test]
    fn test_eq_ignores_order_and_capacity() {
        let a = OrderedIntSet::<3>::try_from_slice(&[1, 2, 3]).unwrap();
        let b = OrderedIntSet::<8>::try_from_slice(&[3, 1, 2]).unwrap();
        let c = OrderedIntSet::<8>::try_from_slice(&[1, 2]).unwrap();

        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn test_display() {
        let set = OrderedIntSet::<SIZE>::try_from_slice(&[3, 7, -1]).unwrap();
        assert_eq!(set.to_string(), "3  7  -1");
        assert_eq!(OrderedIntSet::<SIZE>::new().to_string(), "");
    }

    #[test]
    fn test_int_set_capacity() {
        let mut set = IntSet::new();
        for value in 0..MAX_SIZE as i32 {
            assert!(set.add(value));
        }
        assert!(set.is_full());
        assert!(set.try_add(-1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let set = OrderedIntSet::<SIZE>::try_from_slice(&[7, -2, 5]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[7,-2,5]");

        let decoded: OrderedIntSet<SIZE> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.as_slice(), set.as_slice());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_collapses_duplicates() {
        let decoded: OrderedIntSet<SIZE> = serde_json::from_str("[1,2,1]").unwrap();
        assert_eq!(decoded.as_slice(), &[1, 2]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_past_capacity() {
        let err = serde_json::from_str::<OrderedIntSet<2>>("[1,2,3]").unwrap_err();
        assert!(err
            .to_string()
            .contains("ordered int set capacity of 2 exceeded"));
    }
}
