//! Provider-aware containers for the cask allocation toolkit.
//!
//! Two containers are built on the [`cask_alloc`] block provider:
//!
//! - [`BoundedVec`]: a fixed-capacity, append-only sequence backed by a
//!   single block allocated on first push.
//! - [`SlabList`]: a doubly linked list whose node records live in slab
//!   blocks obtained from a pool *derived* for the node type — the same
//!   block-size policy as the caller's element pool, but a fresh
//!   reserve. Nodes are addressed by stable [`NodeId`] handles and
//!   erased slots are recycled through a free list.
//!
//! Traversal of a [`SlabList`] goes through [`Cursor`] / [`CursorMut`]
//! handles or the [`Iter`] iterator; `None` node references are the end
//! sentinel of a half-open range.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod cursor;
pub mod list;

pub use bounded::BoundedVec;
pub use cursor::{Cursor, CursorMut, Iter};
pub use list::{NodeId, SlabList};
