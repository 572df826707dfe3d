//! # Ordered Int Set
//!
//! A fixed-capacity set of distinct `i32` values that remembers the order in which its members
//! joined, with classic set algebra on top: union, intersection, subtraction, subset and
//! equality tests.
//!
//! Sets never allocate. Their capacity is a compile-time constant, and exceeding it is treated
//! as a broken precondition: [`add`] and [`union_with`] panic, in release builds too. The
//! checked forms [`try_add`] and [`try_union_with`] return [`OrderedSetError`] instead.
//!
//! ## Features
//!
//! - **[`OrderedIntSet<SIZE>`]** – array-backed set, oldest member first
//! - **[`IntSet`]** – the same set at the default capacity [`MAX_SIZE`]
//! - **[`OrderedIntSetOps`]** – trait deriving the set algebra from four storage primitives
//! - **[`declare_ordered_int_set!`]** – generate a `Pod + Zeroable` set type for zero-copy storage
//! - **`serde`** (default feature) – serialize a set as the sequence of its members
//!
//! ## Quick Example
//!
//! ```rust
//! use ordered_int_set::prelude::*;
//!
//! let mut a = IntSet::new();
//! let mut b = IntSet::new();
//! for value in [1, 2, 3] {
//!     a.add(value);
//! }
//! for value in [3, 4, 5] {
//!     b.add(value);
//! }
//!
//! assert!(equal(&a.union_with(&b), &b.union_with(&a)));
//! assert_eq!(a.intersect(&b).as_slice(), &[3]);
//! assert_eq!(a.subtract(&b).as_slice(), &[1, 2]);
//! assert_eq!(a.to_string(), "1  2  3");
//! ```
//!
//! [`add`]: generic::set_ops::OrderedIntSetOps::add
//! [`union_with`]: generic::set_ops::OrderedIntSetOps::union_with
//! [`try_add`]: generic::set_ops::OrderedIntSetOps::try_add
//! [`try_union_with`]: generic::set_ops::OrderedIntSetOps::try_union_with
//! [`OrderedSetError`]: error::OrderedSetError
//! [`OrderedIntSet<SIZE>`]: generic::ordered_set::OrderedIntSet
//! [`IntSet`]: generic::ordered_set::IntSet
//! [`MAX_SIZE`]: generic::ordered_set::MAX_SIZE
//! [`OrderedIntSetOps`]: generic::set_ops::OrderedIntSetOps
//! [`declare_ordered_int_set!`]: macro@declare_ordered_int_set

pub mod error;
pub mod generic;
pub mod macros;
pub mod prelude;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
