//! Error type shared by the bounded containers.

/// Error returned by fallible container operations.
///
/// Errors are local to the failing call: a container that returns one of
/// these is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The container is at capacity.
    #[error("capacity exceeded")]
    Overflow,
    /// There is no element to remove.
    #[error("container is empty")]
    Empty,
    /// The index is outside the logical length.
    #[error("index out of bounds")]
    OutOfBounds,
    /// Backing storage could not be allocated.
    #[error("allocation failed")]
    Alloc,
}

impl Error {
    /// Returns `true` if this error is the `Overflow` variant.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow)
    }

    /// Returns `true` if this error is the `Empty` variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if this error is the `OutOfBounds` variant.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds)
    }

    /// Returns `true` if this error is the `Alloc` variant.
    pub fn is_alloc(&self) -> bool {
        matches!(self, Self::Alloc)
    }
}
