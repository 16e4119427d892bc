//! Cask: block-pooled allocation and provider-aware containers.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the cask sub-crates. For most users, adding `cask` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cask::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A fixed-capacity sequence: storage is one block, allocated on
//! // the first push.
//! let mut recent = BoundedVec::new(10)?;
//! for i in 0..10u32 {
//!     recent.push(i)?;
//! }
//! assert_eq!(recent.get(5), Ok(&5));
//! assert!(matches!(
//!     recent.push(10),
//!     Err(ContainerError::CapacityExceeded { .. })
//! ));
//!
//! // A linked list whose node storage comes from a pool derived
//! // from an element pool — same block-size policy, fresh reserve.
//! let pool = BlockPool::<u32>::with_config(PoolConfig::new(16))?;
//! let mut queue = SlabList::with_pool(&pool)?;
//! for i in 0..10u32 {
//!     queue.push_back(i)?;
//! }
//! queue.insert(3, 99)?;
//!
//! let mut cursor = queue.cursor_front();
//! let mut seen = Vec::new();
//! while cursor != queue.cursor_end() {
//!     seen.push(*cursor.value()?);
//!     cursor.advance();
//! }
//! assert_eq!(seen, vec![0, 1, 2, 99, 3, 4, 5, 6, 7, 8, 9]);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cask-core` | Pool config and error types |
//! | [`provider`] | `cask-alloc` | `BlockPool`, `Block` |
//! | [`collections`] | `cask-collections` | `BoundedVec`, `SlabList`, cursors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Pool configuration and error types (`cask-core`).
///
/// [`types::PoolConfig`] is the block-size policy a pool preserves
/// across derivation; [`types::AllocError`] and
/// [`types::ContainerError`] are the workspace's error vocabulary.
pub use cask_core as types;

/// The block provider (`cask-alloc`).
///
/// [`provider::BlockPool`] owns a per-instance reserve and hands out
/// [`provider::Block`] slot runs; `derive_for` re-parameterizes a pool
/// for another element type under the same policy.
pub use cask_alloc as provider;

/// Provider-aware containers (`cask-collections`).
///
/// [`collections::BoundedVec`] for fixed-capacity append-only storage,
/// [`collections::SlabList`] for slab-backed linked lists, and the
/// cursor types for traversal.
pub use cask_collections as collections;

/// Common imports for typical cask usage.
///
/// ```rust
/// use cask::prelude::*;
/// ```
pub mod prelude {
    // Provider
    pub use cask_alloc::{Block, BlockPool};

    // Containers and traversal
    pub use cask_collections::{BoundedVec, Cursor, CursorMut, NodeId, SlabList};

    // Config and errors
    pub use cask_core::{AllocError, ContainerError, PoolConfig};
}
