//! Stack - a fixed-capacity LIFO over [`BoundedList`].

use crate::{BoundedList, Error};

/// A last-in, first-out stack with a fixed capacity.
///
/// # Example
///
/// ```
/// use dstruct_collections::{Error, Stack};
///
/// let mut stack: Stack<char> = Stack::with_capacity(2).unwrap();
/// stack.push('a').unwrap();
/// stack.push('b').unwrap();
/// assert_eq!(stack.push('c'), Err(Error::Overflow));
///
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.pop(), Ok('a'));
/// assert_eq!(stack.pop(), Err(Error::Empty));
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    list: BoundedList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack able to hold `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the store cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            list: BoundedList::with_capacity(capacity)?,
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the stack is full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.list.push(value)
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        self.list.pop()
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.list.last()
    }

    /// Returns a mutable reference to the top element.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.as_mut_slice().last_mut()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.list.clear();
    }
}
