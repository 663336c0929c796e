//! CircularList - a fixed-capacity ring with O(1) access at both ends.
//!
//! Storage is a single boxed slice allocated at construction. Logical index
//! `i` lives at physical slot `(head + i) % capacity`, so the list wraps
//! around the end of the buffer instead of shifting on every front push.
//!
//! ```text
//!  physical:  [ 4 | 5 | _ | _ | 1 | 2 | 3 ]
//!                       ^       ^
//!                      tail    head
//!  logical:   [ 1, 2, 3, 4, 5 ]
//! ```
//!
//! Pushes and pops at either end are O(1). [`insert`](CircularList::insert)
//! and [`remove`](CircularList::remove) shift the tail side of the ring, so
//! they are O(len - index).

use core::fmt;

use crate::{Full, InsertError, OutOfBounds};

/// A fixed-capacity double-ended ring list.
///
/// # Example
///
/// ```
/// use dstruct_queue::CircularList;
///
/// let mut ring: CircularList<u32> = CircularList::with_capacity(4);
/// ring.push_back(2).unwrap();
/// ring.push_back(3).unwrap();
/// ring.push_front(1).unwrap();
///
/// assert_eq!(ring.get(0), Some(&1));
/// assert_eq!(ring.pop_back(), Some(3));
/// assert_eq!(ring.pop_front(), Some(1));
/// assert_eq!(ring.len(), 1);
/// ```
pub struct CircularList<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> CircularList<T> {
    /// Creates an empty ring holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the ring is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Maps a logical index to its physical slot.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    /// Appends `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the ring is full.
    pub fn push_back(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push_back rejected");
            return Err(Full(value));
        }
        let at = self.physical(self.len);
        self.slots[at] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Prepends `value` at the front.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the ring is full.
    pub fn push_front(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            trace!(capacity = self.capacity(), "push_front rejected");
            return Err(Full(value));
        }
        self.head = self.physical(self.slots.len() - 1);
        self.slots[self.head] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let at = self.physical(self.len);
        self.slots[at].take()
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.physical(1);
        self.len -= 1;
        value
    }

    /// Returns a reference to the element at logical `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Returns a mutable reference to the element at logical `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let at = self.physical(index);
        self.slots[at].as_mut()
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Err(OutOfBounds(value))` unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, OutOfBounds<T>> {
        match self.get_mut(index) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(OutOfBounds(value)),
        }
    }

    /// Returns the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Inserts `value` at logical `index`, shifting `[index, len)` towards
    /// the back.
    ///
    /// `insert(0, v)` is O(n); prefer [`push_front`](Self::push_front).
    ///
    /// # Errors
    ///
    /// - `InsertError::OutOfBounds(value)` if `index > len` (checked first)
    /// - `InsertError::Full(value)` if the ring is full
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        if index > self.len {
            return Err(InsertError::OutOfBounds(value));
        }
        if self.is_full() {
            trace!(capacity = self.capacity(), index, "insert rejected");
            return Err(InsertError::Full(value));
        }

        for i in (index..self.len).rev() {
            let from = self.physical(i);
            let to = self.physical(i + 1);
            self.slots[to] = self.slots[from].take();
        }

        let at = self.physical(index);
        self.slots[at] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at logical `index`, shifting
    /// `[index + 1, len)` towards the front.
    ///
    /// Returns `None` unless `index < len`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let at = self.physical(index);
        let value = self.slots[at].take();

        for i in index + 1..self.len {
            let from = self.physical(i);
            let to = self.physical(i - 1);
            self.slots[to] = self.slots[from].take();
        }

        self.len -= 1;
        value
    }

    /// Removes every element and rewinds to the start of the buffer.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Returns an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            index: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`CircularList`], front to back.
pub struct Iter<'a, T> {
    ring: &'a CircularList<T>,
    index: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.ring.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
