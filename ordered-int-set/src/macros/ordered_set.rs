/// Declares a `Pod + Zeroable` ordered int set type with a deterministic layout.
///
/// The generated struct is `#[repr(C)]` with an `[i32; SIZE]` buffer followed by a `u32`
/// length, so it can be stored in or read from raw bytes with `bytemuck`. An all-zero image is
/// a valid empty set. The calling crate needs `bytemuck` as a dependency for the derives.
///
/// The type implements [`OrderedIntSetOps`] and converts to and from
/// [`OrderedIntSet<SIZE>`], so it takes part in the same set algebra.
///
/// # Examples
///
/// ```rust
/// use ordered_int_set::declare_ordered_int_set;
/// use ordered_int_set::prelude::*;
///
/// declare_ordered_int_set!(SlotSet, 4);
///
/// let mut slots = SlotSet::new();
/// slots.add(2);
/// slots.add(9);
///
/// let bytes = bytemuck::bytes_of(&slots);
/// let restored: &SlotSet = bytemuck::from_bytes(bytes);
/// assert_eq!(restored.as_slice(), &[2, 9]);
/// ```
///
/// [`OrderedIntSetOps`]: crate::generic::set_ops::OrderedIntSetOps
/// [`OrderedIntSet<SIZE>`]: crate::generic::ordered_set::OrderedIntSet
#[macro_export]
macro_rules! declare_ordered_int_set {
    ($Name:ident, $SIZE:expr) => {
        #[repr(C)]
        #[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $Name {
            items: [i32; $SIZE],
            len: u32,
        }

        const _: () = {
            use core::mem::size_of;

            const _SIZE: usize = size_of::<$Name>();
            const _EXPECTED_SIZE: usize = size_of::<i32>() * $SIZE + size_of::<u32>();
            assert!(_SIZE == _EXPECTED_SIZE, "Size mismatch in ordered int set struct!");
            assert!($SIZE <= u32::MAX as usize, "Ordered int set capacity must fit in u32!");
        };

        impl $Name {
            /// Creates an empty set.
            pub const fn new() -> Self {
                Self {
                    items: [0; $SIZE],
                    len: 0,
                }
            }

            // Clamped so a foreign byte image cannot index past the buffer.
            fn live_len(&self) -> usize {
                core::cmp::min(self.len as usize, $SIZE)
            }

            fn live(&self) -> &[i32] {
                &self.items[..self.live_len()]
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::generic::set_ops::OrderedIntSetOps for $Name {
            fn capacity(&self) -> usize {
                $SIZE
            }

            fn as_slice(&self) -> &[i32] {
                self.live()
            }

            fn len(&self) -> usize {
                self.live_len()
            }

            fn try_add(&mut self, value: i32) -> Result<bool, $crate::error::OrderedSetError> {
                if self.live().contains(&value) {
                    return Ok(false);
                }
                let len = self.live_len();
                if len >= $SIZE {
                    $crate::__private::tracing::error!(
                        value,
                        capacity = $SIZE,
                        "ordered int set is full"
                    );
                    return Err($crate::error::OrderedSetError::CapacityExceeded {
                        capacity: $SIZE,
                    });
                }

                self.items[len] = value;
                self.len = (len + 1) as u32;
                Ok(true)
            }

            fn remove(&mut self, value: i32) -> bool {
                let len = self.live_len();
                let Some(pos) = self.live().iter().position(|&item| item == value) else {
                    return false;
                };

                self.items.copy_within(pos + 1..len, pos);
                self.len = (len - 1) as u32;
                true
            }

            fn reset(&mut self) {
                self.len = 0;
            }
        }

        impl From<$crate::generic::ordered_set::OrderedIntSet<$SIZE>> for $Name {
            fn from(set: $crate::generic::ordered_set::OrderedIntSet<$SIZE>) -> Self {
                use $crate::generic::set_ops::OrderedIntSetOps;

                let mut custom = Self::new();
                for &value in set.as_slice() {
                    // Capacities match, so this cannot overflow.
                    let _ = custom.try_add(value);
                }
                custom
            }
        }

        impl From<$Name> for $crate::generic::ordered_set::OrderedIntSet<$SIZE> {
            fn from(custom: $Name) -> Self {
                use $crate::generic::set_ops::OrderedIntSetOps;

                let mut set = Self::new();
                for &value in custom.as_slice() {
                    let _ = set.try_add(value);
                }
                set
            }
        }
    };
}
