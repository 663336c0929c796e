//! # dstruct-queue
//!
//! Fixed-capacity ring containers: a double-ended [`CircularList`] and a FIFO
//! [`Queue`] built on it.
//!
//! ## Design
//!
//! - One allocation, at construction. Nothing grows afterwards.
//! - A rejected value is returned inside the error ([`Full`],
//!   [`OutOfBounds`], [`InsertError`]), so nothing is dropped on failure.
//! - Single-owner and synchronous. There is no internal locking.
//!
//! ## Example
//!
//! ```
//! use dstruct_queue::{CircularList, InsertError};
//!
//! let mut ring = CircularList::with_capacity(3);
//! ring.push_back('b').unwrap();
//! ring.push_front('a').unwrap();
//! ring.insert(2, 'c').unwrap();
//!
//! assert_eq!(ring.insert(0, 'z'), Err(InsertError::Full('z')));
//! assert_eq!(ring.iter().collect::<String>(), "abc");
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` - emit `trace`-level events when a push or insert is rejected.

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod error;
pub mod queue;
pub mod ring;

pub use error::{Full, InsertError, OutOfBounds};
pub use queue::Queue;
pub use ring::CircularList;
