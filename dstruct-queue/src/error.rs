//! Value-returning errors for the ring containers.
//!
//! A rejected value is handed back to the caller inside the error.

/// Error returned when a push finds the ring at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("ring is full")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error returned when an index is outside the ring's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index out of bounds")]
pub struct OutOfBounds<T>(pub T);

impl<T> OutOfBounds<T> {
    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error returned by [`CircularList::insert`](crate::CircularList::insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InsertError<T> {
    /// The index is greater than the length. Contains the rejected value.
    #[error("index out of bounds")]
    OutOfBounds(T),
    /// The ring is full. Contains the rejected value.
    #[error("ring is full")]
    Full(T),
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            Self::OutOfBounds(val) | Self::Full(val) => val,
        }
    }

    /// Returns `true` if this error is the `Full` variant.
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }

    /// Returns `true` if this error is the `OutOfBounds` variant.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds(_))
    }
}

impl<T> From<Full<T>> for InsertError<T> {
    fn from(err: Full<T>) -> Self {
        Self::Full(err.0)
    }
}
