//! Seeded reachability traversals.
//!
//! Both traversals take the neighbor relation as a closure so the pruning
//! pass can walk occupancy adjacency and the repair pass can walk the
//! road graph with the same machinery. Seeds are visited in input order;
//! the result set is order-independent, but the visit order is not, and
//! repair tie-breaking depends on it.

use std::collections::{BTreeSet, VecDeque};

use crate::addressing::Coord;

/// Breadth-first reachable set from `seeds`. Seeds themselves are members
/// even when isolated.
pub fn bfs_reachable<I, F>(seeds: I, mut neighbors_of: F) -> BTreeSet<Coord>
where
    I: IntoIterator<Item = Coord>,
    F: FnMut(Coord) -> Vec<Coord>,
{
    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    for seed in seeds {
        if visited.insert(seed) {
            queue.push_back(seed);
        }
    }
    while let Some(current) = queue.pop_front() {
        for neighbor in neighbors_of(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    visited
}

/// Depth-first reachable set from `seeds`, same membership semantics as
/// [`bfs_reachable`]. Each seed is explored to exhaustion before the next
/// seed starts. Uses an explicit stack, so the recursion depth does not
/// grow with the grid, and revisits are guarded (cycles are fine).
pub fn dfs_reachable<I, F>(seeds: I, mut neighbors_of: F) -> BTreeSet<Coord>
where
    I: IntoIterator<Item = Coord>,
    F: FnMut(Coord) -> Vec<Coord>,
{
    let mut visited = BTreeSet::new();
    let mut stack = Vec::new();
    for seed in seeds {
        if !visited.insert(seed) {
            continue;
        }
        stack.push(seed);
        while let Some(current) = stack.pop() {
            for neighbor in neighbors_of(current) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }
    visited
}
