//! Block-pooled memory provider for cask containers.
//!
//! A [`BlockPool`] is constructed for one element type and one
//! [`PoolConfig`](cask_core::PoolConfig). At construction it acquires a
//! fixed reserve sized `block_size * size_of::<T>()`; the reserve is
//! held for the pool's lifetime and released on drop. Servicing
//! allocations ([`BlockPool::allocate`]) draw from the general-purpose
//! heap instead — the reserve is deliberately inert (see the crate-level
//! DESIGN notes). Pools are derived for other element types with
//! [`BlockPool::derive_for`], preserving the block-size policy.
//!
//! A [`Block`] is a fixed run of tagged-optional slots: each slot is
//! either vacant or holds a live value, and dropping a block drops
//! exactly its live values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod pool;

pub use block::Block;
pub use pool::BlockPool;
