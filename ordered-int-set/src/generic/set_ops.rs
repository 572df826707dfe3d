//! Set algebra shared by every ordered int set representation.
//!
//! This module provides [`OrderedIntSetOps`], a trait that asks an implementor for a handful of
//! storage primitives and derives membership, subset, union, intersection and subtraction from
//! them. Both [`OrderedIntSet`] and the zero-copy types generated by
//! [`declare_ordered_int_set!`] implement it, so operands of different representations and
//! capacities can be mixed freely.
//!
//! [`OrderedIntSet`]: crate::generic::ordered_set::OrderedIntSet
//! [`declare_ordered_int_set!`]: macro@crate::declare_ordered_int_set

use std::io;

use crate::error::OrderedSetError;

/// A fixed-capacity set of distinct `i32` values that remembers membership order.
///
/// Implementors keep their live entries contiguous at the front of a fixed buffer, oldest
/// member first. Everything beyond `len()` is stale and never observed.
///
/// # Examples
///
/// ```rust
/// use ordered_int_set::prelude::*;
///
/// let mut a: OrderedIntSet<8> = OrderedIntSet::new();
/// let mut b: OrderedIntSet<8> = OrderedIntSet::new();
/// for value in [1, 2, 3] {
///     a.add(value);
/// }
/// for value in [3, 4, 5] {
///     b.add(value);
/// }
///
/// assert_eq!(a.union_with(&b).as_slice(), &[1, 2, 3, 4, 5]);
/// assert_eq!(a.intersect(&b).as_slice(), &[3]);
/// assert_eq!(a.subtract(&b).as_slice(), &[1, 2]);
/// assert!(equal(&a.union_with(&b), &b.union_with(&a)));
/// ```
pub trait OrderedIntSetOps: Clone {
    /// Maximum number of distinct values the set can hold.
    fn capacity(&self) -> usize;

    /// Live entries in membership order.
    fn as_slice(&self) -> &[i32];

    /// Appends `value` if it is not already a member.
    ///
    /// Returns `Ok(true)` when the value was appended and `Ok(false)` when it was already live.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::CapacityExceeded`] if `value` is new and the set is full. The
    /// set is left untouched in that case.
    fn try_add(&mut self, value: i32) -> Result<bool, OrderedSetError>;

    /// Removes `value`, closing the gap so the remaining members keep their relative order.
    ///
    /// Returns `false` and leaves the set unchanged if `value` is not a member.
    fn remove(&mut self, value: i32) -> bool;

    /// Forgets every member in O(1). Stale slots are not cleared.
    fn reset(&mut self);

    /// Number of live entries.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if no new value can be added.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Iterator over live entries, oldest member first.
    fn iter(&self) -> core::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Linear scan of the live entries.
    fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    /// Appends `value` if it is not already a member, returning whether it was appended.
    ///
    /// # Panics
    ///
    /// Panics if `value` is new and the set is already full. Use [`try_add`] to handle that
    /// case without aborting.
    ///
    /// ```rust,should_panic
    /// use ordered_int_set::prelude::*;
    ///
    /// let mut set: OrderedIntSet<1> = OrderedIntSet::new();
    /// set.add(1);
    /// set.add(2); // capacity exceeded
    /// ```
    ///
    /// [`try_add`]: OrderedIntSetOps::try_add
    fn add(&mut self, value: i32) -> bool {
        match self.try_add(value) {
            Ok(added) => added,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns `true` if every member of `self` is also a member of `other`.
    ///
    /// A non-empty set is never a subset of an empty one.
    fn is_subset_of<O: OrderedIntSetOps>(&self, other: &O) -> bool {
        if other.is_empty() {
            return self.is_empty();
        }

        self.iter().all(|&value| other.contains(value))
    }

    /// Checked union. Members of `self` come first, followed by the members of `other` that
    /// were missing, in `other`'s order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::CapacityExceeded`] if the union holds more distinct values
    /// than `self.capacity()`. Nothing is copied in that case.
    fn try_union_with<O: OrderedIntSetOps>(&self, other: &O) -> Result<Self, OrderedSetError> {
        let missing = other.iter().filter(|&&value| !self.contains(value)).count();
        if self.len() + missing > self.capacity() {
            tracing::error!(
                len = self.len(),
                missing,
                capacity = self.capacity(),
                "union does not fit in ordered int set"
            );
            return Err(OrderedSetError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }

        let mut union = self.clone();
        for &value in other.iter() {
            union.try_add(value)?;
        }

        Ok(union)
    }

    /// Union of `self` and `other`, ordered as described on [`try_union_with`].
    ///
    /// # Panics
    ///
    /// Panics if the union does not fit in `self.capacity()`.
    ///
    /// [`try_union_with`]: OrderedIntSetOps::try_union_with
    fn union_with<O: OrderedIntSetOps>(&self, other: &O) -> Self {
        match self.try_union_with(other) {
            Ok(union) => union,
            Err(err) => panic!("{err}"),
        }
    }

    /// Members of `self` that are also members of `other`, in `self`'s order.
    fn intersect<O: OrderedIntSetOps>(&self, other: &O) -> Self {
        let mut intersection = self.clone();
        for &value in self.iter() {
            if !other.contains(value) {
                intersection.remove(value);
            }
        }

        intersection
    }

    /// Members of `self` that are not members of `other`, in `self`'s order.
    fn subtract<O: OrderedIntSetOps>(&self, other: &O) -> Self {
        let mut difference = self.clone();
        for &value in other.iter() {
            difference.remove(value);
        }

        difference
    }

    /// Writes the live entries to `out` in membership order, separated by two spaces.
    ///
    /// Nothing is written for an empty set and no trailing separator is emitted.
    ///
    /// ```rust
    /// use ordered_int_set::prelude::*;
    ///
    /// let mut set: OrderedIntSet<4> = OrderedIntSet::new();
    /// set.add(3);
    /// set.add(7);
    ///
    /// let mut out = Vec::new();
    /// set.dump_data(&mut out).unwrap();
    /// assert_eq!(out, b"3  7");
    /// ```
    fn dump_data<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(out, "{first}")?;
            for value in values {
                write!(out, "  {value}")?;
            }
        }

        Ok(())
    }
}

/// Returns `true` if `a` and `b` hold the same values, regardless of membership order.
pub fn equal<A: OrderedIntSetOps, B: OrderedIntSetOps>(a: &A, b: &B) -> bool {
    a.is_subset_of(b) && b.is_subset_of(a)
}
