//! Queue - a fixed-capacity FIFO over [`CircularList`].

use crate::{CircularList, Full};

/// A first-in, first-out queue with a fixed capacity.
///
/// # Example
///
/// ```
/// use dstruct_queue::{Full, Queue};
///
/// let mut queue: Queue<u32> = Queue::with_capacity(2);
/// queue.push(1).unwrap();
/// queue.push(2).unwrap();
/// assert_eq!(queue.push(3), Err(Full(3)));
///
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    ring: CircularList<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: CircularList::with_capacity(capacity),
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if the queue is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Enqueues `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the queue is full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Full<T>> {
        self.ring.push_back(value)
    }

    /// Dequeues the oldest element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.ring.pop_front()
    }

    /// Returns the oldest element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.ring.front()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}
