//! Fixed-capacity, append-only sequences.

use cask_alloc::{Block, BlockPool};
use cask_core::{AllocError, ContainerError};

/// A contiguous, append-only, bounds-checked sequence with a fixed
/// capacity.
///
/// Storage is a single [`Block`] of exactly `capacity` slots, requested
/// from the pool on the first push and never reallocated — a container
/// that is never pushed to never allocates. Slots `[0, len)` are live,
/// `[len, capacity)` vacant. There is no removal, middle insertion, or
/// resize; a full container stays full.
///
/// Dropping the container returns the block to its pool, dropping the
/// live elements with it.
pub struct BoundedVec<T> {
    /// Provider for the storage block.
    pool: BlockPool<T>,
    /// Allocated on first push; sized for exactly `capacity` slots.
    storage: Option<Block<T>>,
    /// Fixed upper bound on element count.
    capacity: usize,
    /// Number of live elements.
    len: usize,
}

impl<T> BoundedVec<T> {
    /// Create an empty container with the given capacity, constructing
    /// a pool with the default block-size policy.
    ///
    /// Fails only if the pool's reserve cannot be acquired.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self::with_pool(capacity, BlockPool::new()?))
    }

    /// Create an empty container using a caller-supplied pool.
    pub fn with_pool(capacity: usize, pool: BlockPool<T>) -> Self {
        Self {
            pool,
            storage: None,
            capacity,
            len: 0,
        }
    }

    /// Append a value.
    ///
    /// Fails with [`ContainerError::CapacityExceeded`] when the
    /// container is full, and with [`ContainerError::Alloc`] if the
    /// first push cannot allocate the storage block. Neither failure
    /// mutates the container.
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        if self.len == self.capacity {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let block = match &mut self.storage {
            Some(block) => block,
            vacant => {
                let block = self.pool.allocate(self.capacity)?;
                vacant.insert(block)
            }
        };

        block.place(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Read the element at `index`.
    ///
    /// Fails with [`ContainerError::OutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        if index >= self.len {
            return Err(ContainerError::OutOfRange {
                index,
                len: self.len,
            });
        }
        match self.storage.as_ref().and_then(|block| block.get(index)) {
            Some(value) => Ok(value),
            None => Err(ContainerError::OutOfRange {
                index,
                len: self.len,
            }),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the storage block has been allocated yet.
    pub fn is_allocated(&self) -> bool {
        self.storage.is_some()
    }

    /// Iterate over the live elements in append order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.storage.iter().flat_map(|block| block.live_values())
    }
}

impl<T> Drop for BoundedVec<T> {
    fn drop(&mut self) {
        if let Some(block) = self.storage.take() {
            self.pool.deallocate(block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cask_core::PoolConfig;

    #[test]
    fn new_container_is_empty_and_unallocated() {
        let vec = BoundedVec::<u32>::new(10).unwrap();
        assert_eq!(vec.len(), 0);
        assert!(vec.is_empty());
        assert!(!vec.is_allocated());
    }

    #[test]
    fn first_push_allocates_exactly_once() {
        let mut vec = BoundedVec::new(10).unwrap();
        vec.push(1u32).unwrap();
        assert!(vec.is_allocated());
        let outstanding = vec.pool.slots_outstanding();
        for i in 2..=10u32 {
            vec.push(i).unwrap();
        }
        // Later pushes reuse the same block.
        assert_eq!(vec.pool.slots_outstanding(), outstanding);
    }

    #[test]
    fn push_beyond_capacity_is_rejected_without_mutation() {
        let mut vec = BoundedVec::new(3).unwrap();
        for i in 0..3u32 {
            vec.push(i).unwrap();
        }
        let result = vec.push(99);
        assert_eq!(
            result,
            Err(ContainerError::CapacityExceeded { capacity: 3 })
        );
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.get(2), Ok(&2));
    }

    #[test]
    fn get_returns_values_in_append_order() {
        let mut vec = BoundedVec::new(10).unwrap();
        for i in 0..10u32 {
            vec.push(i * 7).unwrap();
        }
        for i in 0..10usize {
            assert_eq!(vec.get(i), Ok(&(i as u32 * 7)));
        }
    }

    #[test]
    fn get_past_len_is_out_of_range() {
        let mut vec = BoundedVec::new(10).unwrap();
        vec.push(1u32).unwrap();
        assert_eq!(
            vec.get(1),
            Err(ContainerError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            vec.get(100),
            Err(ContainerError::OutOfRange { index: 100, len: 1 })
        );
    }

    #[test]
    fn get_on_never_pushed_container_is_out_of_range() {
        let vec = BoundedVec::<u32>::new(10).unwrap();
        assert_eq!(
            vec.get(0),
            Err(ContainerError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn zero_capacity_container_rejects_every_push() {
        let mut vec = BoundedVec::new(0).unwrap();
        assert_eq!(
            vec.push(1u32),
            Err(ContainerError::CapacityExceeded { capacity: 0 })
        );
        assert!(!vec.is_allocated());
    }

    #[test]
    fn iter_yields_append_order() {
        let mut vec = BoundedVec::new(5).unwrap();
        for c in ['a', 'b', 'c'] {
            vec.push(c).unwrap();
        }
        let collected: Vec<char> = vec.iter().copied().collect();
        assert_eq!(collected, vec!['a', 'b', 'c']);
    }

    #[test]
    fn storage_comes_from_the_heap_not_the_reserve() {
        let pool = BlockPool::with_config(PoolConfig::new(4)).unwrap();
        let reserve = pool.reserve_bytes();
        let mut vec = BoundedVec::with_pool(100, pool);
        for i in 0..100u32 {
            vec.push(i).unwrap();
        }
        // A capacity far beyond the block size still fits in one block,
        // and the reserve never moves.
        assert_eq!(vec.pool.reserve_bytes(), reserve);
        assert_eq!(vec.len(), 100);
    }

    #[test]
    fn drop_releases_live_elements() {
        use std::rc::Rc;

        let marker = Rc::new(());
        let mut vec = BoundedVec::new(4).unwrap();
        vec.push(Rc::clone(&marker)).unwrap();
        vec.push(Rc::clone(&marker)).unwrap();
        assert_eq!(Rc::strong_count(&marker), 3);
        drop(vec);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn end_to_end_ten_integers() {
        let mut vec = BoundedVec::new(10).unwrap();
        for i in 0..10i32 {
            vec.push(i).unwrap();
        }
        assert_eq!(vec.len(), 10);
        assert_eq!(vec.get(5), Ok(&5));
        assert_eq!(
            vec.push(10),
            Err(ContainerError::CapacityExceeded { capacity: 10 })
        );
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn len_tracks_successful_pushes(
                capacity in 0usize..32,
                values in proptest::collection::vec(0u32..1000, 0..48),
            ) {
                let mut vec = BoundedVec::new(capacity).unwrap();
                let mut accepted = 0usize;
                for &v in &values {
                    if vec.push(v).is_ok() {
                        accepted += 1;
                    }
                }
                prop_assert_eq!(accepted, values.len().min(capacity));
                prop_assert_eq!(vec.len(), accepted);
            }

            #[test]
            fn get_matches_append_order(
                values in proptest::collection::vec(any::<u32>(), 1..32),
            ) {
                let mut vec = BoundedVec::new(values.len()).unwrap();
                for &v in &values {
                    vec.push(v).unwrap();
                }
                for (i, &v) in values.iter().enumerate() {
                    prop_assert_eq!(vec.get(i), Ok(&v));
                }
                prop_assert!(vec.get(values.len()).is_err());
            }
        }
    }
}
