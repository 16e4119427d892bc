//! Benchmark workloads and utilities for the cask toolkit.
//!
//! Provides pre-built containers for benchmarking and examples:
//!
//! - [`sample_list`]: a `SlabList<u64>` filled with `0..n`
//! - [`sample_bounded`]: a full `BoundedVec<u64>` of the given capacity
//! - [`BENCH_BLOCK_SIZE`]: the block-size policy shared by all
//!   benchmark pools

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cask_alloc::BlockPool;
use cask_collections::{BoundedVec, SlabList};
use cask_core::PoolConfig;

/// Block-size policy used by every benchmark pool.
///
/// Large enough that slab growth is rare at the benchmark sizes, small
/// enough that growth paths are still exercised.
pub const BENCH_BLOCK_SIZE: u32 = 64;

/// Build a `SlabList<u64>` holding `0..n`.
pub fn sample_list(n: u64) -> SlabList<u64> {
    let pool = BlockPool::with_config(PoolConfig::new(BENCH_BLOCK_SIZE))
        .expect("benchmark pool construction");
    let mut list = SlabList::with_pool(&pool).expect("benchmark list construction");
    for i in 0..n {
        list.push_back(i).expect("benchmark push");
    }
    list
}

/// Build a full `BoundedVec<u64>` of the given capacity.
pub fn sample_bounded(capacity: usize) -> BoundedVec<u64> {
    let mut vec = BoundedVec::new(capacity).expect("benchmark vec construction");
    for i in 0..capacity as u64 {
        vec.push(i).expect("benchmark push");
    }
    vec
}
