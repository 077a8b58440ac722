/*!
# Minimum Spanning Trees

Three algorithms computing a minimum spanning forest of an undirected weighted graph:

- [`LazyPrim`]: grows one tree per component from a priority queue of crossing edges
- [`Kruskal`]: accepts edges in weight order unless they close a cycle
- [`Boruvka`]: repeatedly adds the lightest edge leaving every component

All of them implement [`MinimumSpanningTree`]. For a connected graph with `n` vertices the result has
exactly `n - 1` edges; for disconnected graphs, one tree per component. The edge sets may differ
between the algorithms if weights are tied, the total weight never does.

# Examples
```
use wgraphs::{prelude::*, algo::*};

let g = EdgeWeightedGraph::from_edges(
    4,
    [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 2.5), (2, 3, 0.5), (1, 3, 4.0)],
).unwrap();

for mst in [
    LazyPrim::new(&g).weight(),
    Kruskal::new(&g).weight(),
    Boruvka::new(&g).weight(),
] {
    assert_eq!(mst, 3.5);
}
```
*/

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use super::*;

/// Common result of all minimum spanning tree algorithms
pub trait MinimumSpanningTree {
    type Edge: WeightedGraphEdge;

    /// Returns the edges of the spanning forest
    fn edges(&self) -> &[Self::Edge];

    /// Returns the total weight of the spanning forest
    fn weight(&self) -> Weight {
        self.edges().iter().map(|e| e.weight()).sum()
    }
}

/// Queue entry ordered by weight and then by edge id
#[derive(Copy, Clone, Debug)]
struct HeapEdge {
    weight: Weight,
    id: EdgeId,
}

impl PartialEq for HeapEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEdge {}

impl PartialOrd for HeapEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then(self.id.cmp(&other.id))
    }
}

type MinHeap = BinaryHeap<Reverse<HeapEdge>>;

fn push_edge<E: WeightedGraphEdge>(heap: &mut MinHeap, id: EdgeId, edge: &E) {
    heap.push(Reverse(HeapEdge {
        weight: edge.weight(),
        id,
    }));
}

/// Minimum spanning forest by the lazy version of Prim's algorithm.
///
/// Edges in the queue are not removed when both of their endpoints join the tree; they are
/// discarded once they are popped.
#[derive(Clone, Debug)]
pub struct LazyPrim<E> {
    edges: Vec<E>,
}

impl<E: WeightedGraphEdge> LazyPrim<E> {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList<Edge = E> + GraphType<Dir = Undirected>,
    {
        let mut marked = graph.vertex_bitset_unset();
        let mut heap = MinHeap::new();
        let mut edges = Vec::with_capacity(graph.len().saturating_sub(1));

        let visit = |u: Node, marked: &mut NodeBitSet, heap: &mut MinHeap| {
            marked.set_bit(u);
            for (id, edge) in graph.incident_edges_of(u) {
                if !marked.get_bit(graph.head_of(u, id)) {
                    push_edge(heap, id, &edge);
                }
            }
        };

        for root in graph.vertices_range() {
            if marked.get_bit(root) {
                continue;
            }

            visit(root, &mut marked, &mut heap);
            while let Some(Reverse(HeapEdge { id, .. })) = heap.pop() {
                let edge = graph.edge(id);
                let (u, v) = edge.endpoints();
                if marked.get_bit(u) && marked.get_bit(v) {
                    continue;
                }

                edges.push(edge);
                let next = if marked.get_bit(u) { v } else { u };
                visit(next, &mut marked, &mut heap);
            }
        }

        let mst = Self { edges };
        debug!(
            "lazy prim: spanning forest with {} edges of weight {}",
            mst.edges.len(),
            mst.weight()
        );
        mst
    }
}

impl<E: WeightedGraphEdge> MinimumSpanningTree for LazyPrim<E> {
    type Edge = E;

    fn edges(&self) -> &[E] {
        &self.edges
    }
}

/// Minimum spanning forest by Kruskal's algorithm
#[derive(Clone, Debug)]
pub struct Kruskal<E> {
    edges: Vec<E>,
}

impl<E: WeightedGraphEdge> Kruskal<E> {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList<Edge = E> + GraphType<Dir = Undirected>,
    {
        let mut heap: MinHeap = graph
            .edges()
            .enumerate()
            .map(|(id, edge)| {
                Reverse(HeapEdge {
                    weight: edge.weight(),
                    id: id as EdgeId,
                })
            })
            .collect();

        let target = graph.len().saturating_sub(1);
        let mut uf = UnionFind::new(graph.number_of_nodes());
        let mut edges = Vec::with_capacity(target);

        while edges.len() < target {
            let Some(Reverse(HeapEdge { id, .. })) = heap.pop() else {
                break;
            };

            let edge = graph.edge(id);
            let (u, v) = edge.endpoints();
            if uf.union(u, v) {
                edges.push(edge);
            }
        }

        let mst = Self { edges };
        debug!(
            "kruskal: spanning forest with {} edges of weight {}",
            mst.edges.len(),
            mst.weight()
        );
        mst
    }
}

impl<E: WeightedGraphEdge> MinimumSpanningTree for Kruskal<E> {
    type Edge = E;

    fn edges(&self) -> &[E] {
        &self.edges
    }
}

/// Minimum spanning forest by Boruvka's algorithm.
///
/// In every round each component selects its lightest leaving edge; among edges of equal weight,
/// the one with the smaller id wins. All selected edges are added at once, so there are at most
/// `ceil(log2(n))` rounds.
#[derive(Clone, Debug)]
pub struct Boruvka<E> {
    edges: Vec<E>,
}

impl<E: WeightedGraphEdge> Boruvka<E> {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList<Edge = E> + GraphType<Dir = Undirected>,
    {
        let n = graph.len();
        let target = n.saturating_sub(1);
        let mut uf = UnionFind::new(graph.number_of_nodes());
        let mut edges = Vec::with_capacity(target);

        let mut round = 1;
        while round < n && edges.len() < target {
            let mut closest: Vec<Option<(EdgeId, E)>> = vec![None; n];

            for (id, edge) in graph.edges().enumerate() {
                let (u, v) = edge.endpoints();
                let (i, j) = (uf.find(u), uf.find(v));
                if i == j {
                    continue;
                }

                for root in [i, j] {
                    let slot = &mut closest[root as usize];
                    if slot.is_none_or(|(_, best)| edge.weight() < best.weight()) {
                        *slot = Some((id as EdgeId, edge));
                    }
                }
            }

            let mut added = 0;
            for (_, edge) in closest.into_iter().flatten() {
                let (u, v) = edge.endpoints();
                // an edge selected by both of its components is added once
                if uf.union(u, v) {
                    edges.push(edge);
                    added += 1;
                }
            }

            trace!("boruvka round {round}: {added} edges added, {} components left", uf.count());
            if added == 0 {
                break;
            }
            round += round;
        }

        let mst = Self { edges };
        debug!(
            "boruvka: spanning forest with {} edges of weight {}",
            mst.edges.len(),
            mst.weight()
        );
        mst
    }
}

impl<E: WeightedGraphEdge> MinimumSpanningTree for Boruvka<E> {
    type Edge = E;

    fn edges(&self) -> &[E] {
        &self.edges
    }
}
