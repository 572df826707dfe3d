//! Everything needed to build sets and run set algebra on them.
//!
//! Import this as `use ordered_int_set::prelude::*` so the [`OrderedIntSetOps`] methods are in
//! scope alongside the set types.

pub use crate::error::OrderedSetError;
pub use crate::generic::ordered_set::{IntSet, OrderedIntSet, MAX_SIZE};
pub use crate::generic::set_ops::{equal, OrderedIntSetOps};
