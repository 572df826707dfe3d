use thiserror::Error;

/// Error type for the checked operations of an ordered int set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum OrderedSetError {
    /// A new distinct value would push the set past its fixed capacity.
    #[error("ordered int set capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
}
