//! Fixed-capacity and node-based container primitives.
//!
//! Everything in this crate is single-owner and synchronous. Bounded
//! containers allocate their whole store once, at construction, and report
//! capacity exhaustion as an error instead of reallocating.
//!
//! # Quick Start
//!
//! ```
//! use dstruct_collections::{BoundedList, Error, SearchTree};
//!
//! let mut list: BoundedList<u32> = BoundedList::with_capacity(4).unwrap();
//! for v in [3, 1, 4, 1] {
//!     list.push(v).unwrap();
//! }
//! assert_eq!(list.push(5), Err(Error::Overflow));
//!
//! list.sort();
//! assert_eq!(list.as_slice(), &[1, 1, 3, 4]);
//!
//! let mut tree = SearchTree::new();
//! for key in [10, 5, 15] {
//!     tree.insert(key);
//! }
//! assert!(tree.find(&5).is_some());
//! assert!(tree.is_ordered());
//! ```
//!
//! # Data Structures
//!
//! | Structure | Capacity | Key Operations |
//! |-----------|----------|----------------|
//! | [`BoundedList`] | Fixed (runtime) | O(1) push/pop/get/set, O(n) insert/remove, in-place sort |
//! | [`Stack`] | Fixed (runtime) | O(1) push/pop/peek |
//! | [`SearchTree`] | Unbounded | O(depth) insert/find/remove, no rebalancing |
//! | [`LinkedList`] | Unbounded | O(1) node-relative push/insert/pop/remove |
//!
//! # Ordering
//!
//! Sorting takes a closure returning [`core::cmp::Ordering`], the same shape
//! as [`slice::sort_by`]. The search tree takes its ordering through the
//! [`Compare`] trait, implemented by [`Natural`] and by any such closure.
//!
//! # Feature Flags
//!
//! - `tracing` - emit `trace`-level events on overflow rejections, sorts and
//!   tree restructuring. Off by default; the default build does no logging.

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod alist;
pub mod compare;
pub mod error;
pub mod linked;
pub mod sort;
pub mod stack;
pub mod tree;

pub use alist::BoundedList;
pub use compare::{Compare, Natural};
pub use error::Error;
pub use linked::{LinkedList, NodeId};
pub use sort::{quick_sort, quick_sort_by};
pub use stack::Stack;
pub use tree::{Node, Removed, SearchTree};
