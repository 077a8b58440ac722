/*!
# Utilities

Containers consumed by the algorithms:
- [`UnionFind`]: disjoint sets with union by size, used by Kruskal and Boruvka,
- [`IndexMinPQ`]: an indexed min-priority queue with `decrease_key`, used by Dijkstra.

Stacks, queues and lists are plain `Vec`, `VecDeque` and `SmallVec`.
*/

mod index_pq;
mod union_find;

pub use index_pq::IndexMinPQ;
pub use union_find::UnionFind;
