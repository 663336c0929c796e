//! LinkedList - a doubly linked list over an owned slot arena.
//!
//! Nodes live in a growable arena and link to each other by slot index, with
//! `u32::MAX` as the "no node" sentinel. Callers hold [`NodeId`] handles and
//! every edit is relative to a node they already have, so pushing, inserting
//! and removing are O(1) regardless of position.
//!
//! Freed slots are reused. Each slot carries a generation that is bumped on
//! release, so a handle to a removed node is rejected instead of aliasing
//! whatever later reuses the slot.
//!
//! # Example
//!
//! ```
//! use dstruct_collections::LinkedList;
//!
//! let mut list = LinkedList::new();
//! let a = list.push_back('a');
//! let c = list.push_back('c');
//! let b = list.insert(Some(c), 'b').unwrap();
//!
//! assert_eq!(list.iter().collect::<String>(), "abc");
//!
//! // Removing returns the value and the following node.
//! let (value, next) = list.remove(b).unwrap();
//! assert_eq!(value, 'b');
//! assert_eq!(next, Some(c));
//!
//! // The handle is dead now.
//! assert!(list.get(b).is_none());
//! assert_eq!(list.get(a), Some(&'a'));
//! ```

use core::fmt;

/// Sentinel value for "no slot".
const NONE: u32 = u32::MAX;

/// Handle to a node in a [`LinkedList`].
///
/// Handles stay valid until their node is removed, even as other nodes come
/// and go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

enum Slot<T> {
    /// Free; part of the arena's free list.
    Vacant { next_free: u32 },
    /// Holds a value linked into the list.
    Occupied { value: T, prev: u32, next: u32 },
}

struct Entry<T> {
    generation: u32,
    slot: Slot<T>,
}

/// A doubly linked list addressed through [`NodeId`] handles.
pub struct LinkedList<T> {
    entries: Vec<Entry<T>>,
    free_head: u32,
    head: u32,
    tail: u32,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: NONE,
            head: NONE,
            tail: NONE,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of nodes. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first node.
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.id_of(self.head)
    }

    /// Returns the last node.
    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.id_of(self.tail)
    }

    /// Returns the node after `node`.
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        let index = self.resolve(node)?;
        self.id_of(self.links(index).1)
    }

    /// Returns the node before `node`.
    pub fn prev(&self, node: NodeId) -> Option<NodeId> {
        let index = self.resolve(node)?;
        self.id_of(self.links(index).0)
    }

    /// Returns a reference to `node`'s value.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        let index = self.resolve(node)?;
        match &self.entries[index as usize].slot {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Returns a mutable reference to `node`'s value.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        let index = self.resolve(node)?;
        match &mut self.entries[index as usize].slot {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Creates a node holding `value` after `after` and returns it.
    ///
    /// With `after == None` the node becomes the new head, which on an empty
    /// list makes it the only node. Returns `None` (and drops nothing into
    /// the list) if `after` is a stale handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena would exceed `u32::MAX - 1` slots.
    pub fn push(&mut self, after: Option<NodeId>, value: T) -> Option<NodeId> {
        let (prev, next) = match after {
            Some(node) => {
                let at = self.resolve(node)?;
                (at, self.links(at).1)
            }
            None => (NONE, self.head),
        };
        Some(self.link_new(value, prev, next))
    }

    /// Creates a node holding `value` before `before` and returns it.
    ///
    /// With `before == None` the node becomes the new tail. Returns `None` if
    /// `before` is a stale handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena would exceed `u32::MAX - 1` slots.
    pub fn insert(&mut self, before: Option<NodeId>, value: T) -> Option<NodeId> {
        let (prev, next) = match before {
            Some(node) => {
                let at = self.resolve(node)?;
                (self.links(at).0, at)
            }
            None => (self.tail, NONE),
        };
        Some(self.link_new(value, prev, next))
    }

    /// Appends `value` and returns its node.
    #[inline]
    pub fn push_back(&mut self, value: T) -> NodeId {
        self.link_new(value, self.tail, NONE)
    }

    /// Prepends `value` and returns its node.
    #[inline]
    pub fn push_front(&mut self, value: T) -> NodeId {
        self.link_new(value, NONE, self.head)
    }

    /// Deletes `node`, returning its value and the node that preceded it.
    ///
    /// Returns `None` if `node` is stale.
    pub fn pop(&mut self, node: NodeId) -> Option<(T, Option<NodeId>)> {
        let index = self.resolve(node)?;
        let (prev, _) = self.unlink(index);
        let value = self.release(index)?;
        Some((value, self.id_of(prev)))
    }

    /// Deletes `node`, returning its value and the node that followed it.
    ///
    /// Returns `None` if `node` is stale.
    pub fn remove(&mut self, node: NodeId) -> Option<(T, Option<NodeId>)> {
        let index = self.resolve(node)?;
        let (_, next) = self.unlink(index);
        let value = self.release(index)?;
        Some((value, self.id_of(next)))
    }

    /// Counts the nodes from `node` to the tail, inclusive. O(n).
    ///
    /// A stale handle counts as an empty list.
    pub fn len_from(&self, node: NodeId) -> usize {
        let mut count = 0;
        let mut index = match self.resolve(node) {
            Some(index) => index,
            None => return 0,
        };
        while index != NONE {
            count += 1;
            index = self.links(index).1;
        }
        count
    }

    /// Removes every node.
    ///
    /// Outstanding handles are invalidated; the arena keeps its allocation.
    pub fn clear(&mut self) {
        let mut index = self.head;
        while index != NONE {
            let next = self.links(index).1;
            drop(self.release(index));
            index = next;
        }
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }

    /// Returns an iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            index: self.head,
            remaining: self.len,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn resolve(&self, node: NodeId) -> Option<u32> {
        let entry = self.entries.get(node.index as usize)?;
        let live = entry.generation == node.generation
            && matches!(entry.slot, Slot::Occupied { .. });
        live.then_some(node.index)
    }

    fn id_of(&self, index: u32) -> Option<NodeId> {
        if index == NONE {
            return None;
        }
        self.entries.get(index as usize).map(|entry| NodeId {
            index,
            generation: entry.generation,
        })
    }

    /// Returns `(prev, next)` of an occupied slot.
    fn links(&self, index: u32) -> (u32, u32) {
        match self.entries.get(index as usize) {
            Some(Entry {
                slot: Slot::Occupied { prev, next, .. },
                ..
            }) => (*prev, *next),
            _ => (NONE, NONE),
        }
    }

    fn set_prev(&mut self, index: u32, to: u32) {
        if let Some(Entry {
            slot: Slot::Occupied { prev, .. },
            ..
        }) = self.entries.get_mut(index as usize)
        {
            *prev = to;
        }
    }

    fn set_next(&mut self, index: u32, to: u32) {
        if let Some(Entry {
            slot: Slot::Occupied { next, .. },
            ..
        }) = self.entries.get_mut(index as usize)
        {
            *next = to;
        }
    }

    /// Stores `value` between `prev` and `next` and fixes up their links.
    fn link_new(&mut self, value: T, prev: u32, next: u32) -> NodeId {
        let slot = Slot::Occupied { value, prev, next };

        let index = if self.free_head != NONE {
            let index = self.free_head;
            let entry = &mut self.entries[index as usize];
            if let Slot::Vacant { next_free } = entry.slot {
                self.free_head = next_free;
            }
            entry.slot = slot;
            index
        } else {
            let index = self.entries.len();
            assert!(index < NONE as usize, "linked list arena exhausted");
            self.entries.push(Entry {
                generation: 0,
                slot,
            });
            index as u32
        };

        if prev != NONE {
            self.set_next(prev, index);
        } else {
            self.head = index;
        }

        if next != NONE {
            self.set_prev(next, index);
        } else {
            self.tail = index;
        }

        self.len += 1;

        NodeId {
            index,
            generation: self.entries[index as usize].generation,
        }
    }

    /// Detaches an occupied slot from its neighbours, returning its old links.
    fn unlink(&mut self, index: u32) -> (u32, u32) {
        let (prev, next) = self.links(index);

        if prev != NONE {
            self.set_next(prev, next);
        } else {
            self.head = next;
        }

        if next != NONE {
            self.set_prev(next, prev);
        } else {
            self.tail = prev;
        }

        self.len -= 1;
        (prev, next)
    }

    /// Frees a slot, returning the value it held.
    fn release(&mut self, index: u32) -> Option<T> {
        let entry = self.entries.get_mut(index as usize)?;
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match core::mem::replace(&mut entry.slot, vacant) {
            Slot::Occupied { value, .. } => {
                entry.generation = entry.generation.wrapping_add(1);
                self.free_head = index;
                Some(value)
            }
            old @ Slot::Vacant { .. } => {
                entry.slot = old;
                None
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`LinkedList`]'s values, head to tail.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    index: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == NONE {
            return None;
        }
        match &self.list.entries.get(self.index as usize)?.slot {
            Slot::Occupied { value, next, .. } => {
                self.index = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Vacant { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
