//! BoundedList - a fixed-capacity, variable-length array list.
//!
//! The list allocates storage for `capacity` elements once, at construction,
//! and never reallocates. Operations that would exceed the capacity fail with
//! [`Error::Overflow`] and leave the list untouched.
//!
//! # Example
//!
//! ```
//! use dstruct_collections::{BoundedList, Error};
//!
//! let mut list: BoundedList<i32> = BoundedList::with_capacity(3).unwrap();
//!
//! list.push(10).unwrap();
//! list.push(30).unwrap();
//! list.insert(1, 20).unwrap();
//! assert_eq!(list.as_slice(), &[10, 20, 30]);
//!
//! assert_eq!(list.push(40), Err(Error::Overflow));
//! assert_eq!(list.get(3), Err(Error::OutOfBounds));
//!
//! assert_eq!(list.remove(0), Ok(10));
//! assert_eq!(list.pop(), Ok(30));
//! assert_eq!(list.len(), 1);
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::Error;
use crate::sort::quick_sort_by;

/// A homogeneous sequence with a fixed maximum length.
///
/// Logical indices `[0, len)` are valid. Capacity is fixed at construction.
pub struct BoundedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedList<T> {
    /// Creates an empty list able to hold `capacity` elements.
    ///
    /// The whole store is reserved up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the allocator cannot provide the store.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| Error::Alloc)?;
        Ok(Self { items, capacity })
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the list is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Appends `value` at index `len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the list is full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.is_full() {
            trace!(capacity = self.capacity, "push rejected");
            return Err(Error::Overflow);
        }
        self.items.push(value);
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        self.items.pop().ok_or(Error::Empty)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.items.get(index).ok_or(Error::OutOfBounds)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.items.get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let slot = self.get_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends, exactly like [`push`](Self::push). O(n).
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`] if `index > len` (checked first)
    /// - [`Error::Overflow`] if the list is full
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.items.len() {
            return Err(Error::OutOfBounds);
        }
        if self.is_full() {
            trace!(capacity = self.capacity, index, "insert rejected");
            return Err(Error::Overflow);
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] unless `index < len`. The bounds check
    /// comes first, so an empty list reports `OutOfBounds` for every index.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.items.len() {
            return Err(Error::OutOfBounds);
        }
        Ok(self.items.remove(index))
    }

    /// Sets the length to zero, dropping every element.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sorts the list in place with the partition quicksort in
    /// [`crate::sort`].
    ///
    /// Not stable. Elements comparing equal to a pivot go to its left.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort_by(&mut self.items, compare);
    }

    /// Sorts the list by `T`'s natural order.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T: Clone> BoundedList<T> {
    /// Changes the length to `new_len`.
    ///
    /// Growing appends clones of `filler`; shrinking truncates; equal length
    /// is a no-op. One slot is always held back: `new_len` must be strictly
    /// less than the capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if `new_len >= capacity`. The list is not
    /// modified in that case.
    pub fn resize(&mut self, new_len: usize, filler: T) -> Result<(), Error> {
        if new_len >= self.capacity {
            trace!(capacity = self.capacity, new_len, "resize rejected");
            return Err(Error::Overflow);
        }
        self.items.resize(new_len, filler);
        Ok(())
    }
}

impl<T: Clone> Clone for BoundedList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BoundedList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
