//! End-to-end demo: the factorial-table walk.
//!
//! Demonstrates: an insertion-ordered map of `i → i!` → a bounded pair
//! container filled to capacity → a slab list exercised through
//! append, splice, and erase, printed via cursor traversal.

use cask_alloc::BlockPool;
use cask_collections::{BoundedVec, SlabList};
use cask_core::PoolConfig;
use indexmap::IndexMap;

/// `n!` for the small inputs the demo uses.
fn factorial(n: u64) -> u64 {
    (1..=n).product()
}

fn print_list(label: &str, list: &SlabList<u64>) {
    let mut cursor = list.cursor_front();
    print!("{label}: ");
    while cursor != list.cursor_end() {
        print!("{} ", cursor.value().expect("cursor on a live node"));
        cursor.advance();
    }
    println!();
}

fn main() {
    println!("=== Cask factorial-table demo ===\n");

    // --- Ordered map of i → i! ---
    let mut table: IndexMap<u64, u64> = IndexMap::new();
    for i in 0..10 {
        table.insert(i, factorial(i));
    }
    println!("factorial table:");
    for (i, value) in &table {
        println!("  {i}! = {value}");
    }

    // --- Bounded pair container, filled to capacity ---
    let pool = BlockPool::with_config(PoolConfig::new(10)).unwrap();
    let mut pairs: BoundedVec<(u64, u64)> = BoundedVec::with_pool(10, pool);
    for i in 0..10 {
        pairs.push((i, factorial(i))).unwrap();
    }

    println!("\nbounded pairs ({} of {}):", pairs.len(), pairs.capacity());
    for i in 0..pairs.len() {
        let (n, value) = pairs.get(i).unwrap();
        println!("  {n} {value}");
    }
    match pairs.push((10, factorial(10))) {
        Err(err) => println!("  11th push rejected: {err}"),
        Ok(()) => unreachable!("the container is full"),
    }

    // --- Slab list: append, splice, erase ---
    let element_pool = BlockPool::<u64>::with_config(PoolConfig::new(10)).unwrap();
    let mut list = SlabList::with_pool(&element_pool).unwrap();
    for i in 0..10 {
        list.push_back(i).unwrap();
    }
    println!();
    print_list("list after 10 appends", &list);

    list.insert(3, 99).unwrap();
    print_list("after insert(3, 99)   ", &list);

    let removed = list.remove(0).unwrap();
    print_list("after remove(0)       ", &list);
    println!(
        "removed {removed}; {} nodes in {} slab block(s)",
        list.len(),
        list.block_count()
    );

    println!("\nDone.");
}
