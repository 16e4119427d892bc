//! Fixed runs of tagged-optional element slots.
//!
//! A [`Block`] is the unit of storage a [`BlockPool`](crate::BlockPool)
//! hands out: a run of slots whose length is fixed at allocation time.
//! Each slot is either vacant or holds a live value. Placing and taking
//! values is explicit, so construction and destruction are always
//! paired — dropping a block drops exactly its live values and nothing
//! else.

use cask_core::AllocError;

/// A fixed-length run of element slots.
///
/// Created by [`BlockPool::allocate`](crate::BlockPool::allocate) with
/// every slot vacant. The slot count never changes after allocation.
pub struct Block<T> {
    /// Backing storage. One entry per slot; `None` marks a vacant slot.
    slots: Vec<Option<T>>,
}

impl<T> Block<T> {
    /// Allocate a block of `len` vacant slots from the global heap.
    ///
    /// Fails with [`AllocError::AllocationFailed`] if the heap cannot
    /// satisfy the request; no partial block is created.
    pub(crate) fn new(len: usize) -> Result<Self, AllocError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| AllocError::AllocationFailed {
                requested_bytes: len * std::mem::size_of::<Option<T>>(),
            })?;
        slots.resize_with(len, || None);
        Ok(Self { slots })
    }

    /// Number of slots in this block.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether this is a zero-slot block.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the value in a slot, or `None` if the slot is vacant.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the block.
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots[slot].as_ref()
    }

    /// Mutably read the value in a slot, or `None` if the slot is vacant.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the block.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.slots[slot].as_mut()
    }

    /// Place a value into a slot, returning the displaced value if the
    /// slot was live.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the block.
    pub fn place(&mut self, slot: usize, value: T) -> Option<T> {
        self.slots[slot].replace(value)
    }

    /// Take the value out of a slot, leaving it vacant.
    ///
    /// Returns `None` if the slot was already vacant.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the block.
    pub fn take(&mut self, slot: usize) -> Option<T> {
        self.slots[slot].take()
    }

    /// Whether a slot is vacant.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the block.
    pub fn is_vacant(&self, slot: usize) -> bool {
        self.slots[slot].is_none()
    }

    /// Iterate over the live values in slot order.
    pub fn live_values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.capacity() * std::mem::size_of::<Option<T>>()
    }
}
