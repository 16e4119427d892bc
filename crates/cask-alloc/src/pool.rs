//! The block pool: reserve ownership, block servicing, and derivation.

use std::fmt;

use cask_core::{AllocError, PoolConfig};

use crate::block::Block;

/// A memory provider for one element type under a block-size policy.
///
/// Construction acquires a reserve buffer of exactly
/// `block_size * size_of::<T>()` bytes; the reserve is held for the
/// pool's lifetime and released when the pool is dropped. Servicing
/// allocations do **not** draw from the reserve — [`allocate`] obtains
/// each [`Block`] from the general-purpose heap. The reserve is sized,
/// held, and freed, but otherwise inert; [`reserve_bytes`] makes it
/// observable.
///
/// # Equality
///
/// Any two pools compare equal, including pools for different element
/// types, regardless of reserve state or allocation history. This is
/// the interchangeability contract a provider-aware container relies
/// on when it treats providers as substitutable, and it is deliberate —
/// pool identity and bookkeeping never participate in comparisons.
///
/// [`allocate`]: BlockPool::allocate
/// [`reserve_bytes`]: BlockPool::reserve_bytes
pub struct BlockPool<T> {
    /// Block-size policy, preserved across [`BlockPool::derive_for`].
    config: PoolConfig,
    /// Reserve buffer acquired at construction. Capacity is the pool's
    /// entire involvement with it: no element is ever constructed here.
    reserve: Vec<T>,
    /// Slots handed out minus slots returned. Bookkeeping only — blocks
    /// dropped without [`BlockPool::deallocate`] are not counted back.
    slots_outstanding: usize,
}

impl<T> BlockPool<T> {
    /// Create a pool with the default block size.
    pub fn new() -> Result<Self, AllocError> {
        Self::with_config(PoolConfig::default())
    }

    /// Create a pool with the given config, acquiring its reserve.
    ///
    /// Fails with [`AllocError::InvalidConfig`] for a zero block size,
    /// or [`AllocError::AllocationFailed`] if the reserve cannot be
    /// acquired.
    pub fn with_config(config: PoolConfig) -> Result<Self, AllocError> {
        if config.block_size == 0 {
            return Err(AllocError::InvalidConfig {
                reason: "block_size must be at least 1".to_string(),
            });
        }

        let mut reserve = Vec::new();
        reserve
            .try_reserve_exact(config.block_size as usize)
            .map_err(|_| AllocError::AllocationFailed {
                requested_bytes: config.block_bytes::<T>(),
            })?;

        Ok(Self {
            config,
            reserve,
            slots_outstanding: 0,
        })
    }

    /// Derive a pool for element type `U` under the same block-size
    /// policy.
    ///
    /// The derived pool acquires its own fresh reserve, sized
    /// `block_size * size_of::<U>()`; nothing is shared with or
    /// transferred from `self`.
    pub fn derive_for<U>(&self) -> Result<BlockPool<U>, AllocError> {
        BlockPool::with_config(self.config)
    }

    /// Allocate a block of `n` vacant slots.
    ///
    /// The block is obtained from the general-purpose heap, not the
    /// reserve. Fails with [`AllocError::AllocationFailed`] if the heap
    /// cannot satisfy the request; bookkeeping is untouched on failure.
    pub fn allocate(&mut self, n: usize) -> Result<Block<T>, AllocError> {
        let block = Block::new(n)?;
        self.slots_outstanding += n;
        Ok(block)
    }

    /// Return a block previously obtained from [`BlockPool::allocate`].
    ///
    /// Consumes the block, dropping its live values and releasing its
    /// storage, and counts its slots back out of the bookkeeping.
    pub fn deallocate(&mut self, block: Block<T>) {
        self.slots_outstanding = self.slots_outstanding.saturating_sub(block.len());
    }

    /// The pool's config.
    pub fn config(&self) -> PoolConfig {
        self.config
    }

    /// Number of slots per block under this pool's policy.
    pub fn block_size(&self) -> usize {
        self.config.block_size as usize
    }

    /// Size of the owned reserve in bytes.
    ///
    /// Constant for the pool's lifetime: block servicing bypasses the
    /// reserve entirely.
    pub fn reserve_bytes(&self) -> usize {
        self.reserve.capacity() * std::mem::size_of::<T>()
    }

    /// Slots handed out and not yet returned via
    /// [`BlockPool::deallocate`]. Bookkeeping only, not authoritative.
    pub fn slots_outstanding(&self) -> usize {
        self.slots_outstanding
    }
}

impl<T> fmt::Debug for BlockPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockPool")
            .field("config", &self.config)
            .field("reserve_bytes", &self.reserve_bytes())
            .field("slots_outstanding", &self.slots_outstanding)
            .finish()
    }
}

/// Pools of mutually compatible element types always compare equal.
impl<T, U> PartialEq<BlockPool<U>> for BlockPool<T> {
    fn eq(&self, _other: &BlockPool<U>) -> bool {
        true
    }
}

impl<T> Eq for BlockPool<T> {}
