/*!
# Connectivity

- [`ConnectedComponents`]: components of an undirected graph, numbered in discovery order.
- [`StrongComponents`]: strongly connected components of a directed graph (Kosaraju-Sharir).
- [`TransitiveClosure`]: all-pairs reachability by one depth-first search per vertex.

The [`Connectivity`] trait exposes them as methods on graphs.
*/

use super::{order::*, traversal::*, *};

/// Connected components of an undirected graph.
///
/// Component ids are assigned in the order the components are discovered, i.e. the component of
/// vertex `0` has id `0` and ids increase with the smallest vertex of each component.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_edges(5, [(0, 3), (1, 2), (3, 4)]).unwrap();
/// let cc = ConnectedComponents::new(&g);
///
/// assert_eq!(cc.count(), 2);
/// assert_eq!(cc.id(4), 0);
/// assert_eq!(cc.id(2), 1);
/// assert_eq!(cc.size(3), 3);
/// assert!(!cc.connected(0, 1));
/// ```
#[derive(Clone, Debug)]
pub struct ConnectedComponents {
    id: Vec<NumNodes>,
    size: Vec<NumNodes>,
}

impl ConnectedComponents {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let mut id = vec![0; graph.len()];
        let mut size = Vec::new();

        let mut walk = DepthFirstWalk::new(graph);
        for root in graph.vertices_range() {
            if !walk.start_at(root) {
                continue;
            }

            let component = size.len() as NumNodes;
            let mut members = 0;
            for event in walk.by_ref() {
                if let DfsEvent::Discover { node, .. } = event {
                    id[node as usize] = component;
                    members += 1;
                }
            }
            size.push(members);
        }

        debug!(
            "found {} connected components in a graph with {} vertices",
            size.len(),
            graph.len()
        );

        Self { id, size }
    }

    /// Returns the number of components
    pub fn count(&self) -> NumNodes {
        self.size.len() as NumNodes
    }

    /// Returns the id of the component containing `v`
    /// ** Panics if `v >= n` **
    pub fn id(&self, v: Node) -> NumNodes {
        self.id[v as usize]
    }

    /// Returns the number of vertices in the component containing `v`
    /// ** Panics if `v >= n` **
    pub fn size(&self, v: Node) -> NumNodes {
        self.size[self.id(v) as usize]
    }

    /// Returns *true* if `v` and `w` are in the same component
    /// ** Panics if `v >= n || w >= n` **
    pub fn connected(&self, v: Node, w: Node) -> bool {
        self.id(v) == self.id(w)
    }

    /// Returns the members of each component, ordered by component id and vertex
    pub fn components(&self) -> Vec<Vec<Node>> {
        let mut components = vec![Vec::new(); self.size.len()];
        for (u, &c) in self.id.iter().enumerate() {
            components[c as usize].push(u as Node);
        }
        components
    }
}

/// Strongly connected components of a directed graph.
///
/// The components are found by the Kosaraju-Sharir algorithm: a depth-first search over the
/// graph in reverse postorder of its reverse graph discovers exactly one component per root.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)]).unwrap();
/// let scc = StrongComponents::new(&g);
///
/// assert_eq!(scc.count(), 2);
/// assert!(scc.strongly_connected(0, 2));
/// assert!(!scc.strongly_connected(2, 3));
/// ```
#[derive(Clone, Debug)]
pub struct StrongComponents {
    id: Vec<NumNodes>,
    count: NumNodes,
}

impl StrongComponents {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphReverse + GraphType<Dir = Directed>,
    {
        let order = DepthFirstOrder::new(&graph.reverse());

        let mut id = vec![0; graph.len()];
        let mut count = 0;

        let mut walk = DepthFirstWalk::new(graph);
        for root in order.reverse_post() {
            if !walk.start_at(root) {
                continue;
            }

            for event in walk.by_ref() {
                if let DfsEvent::Discover { node, .. } = event {
                    id[node as usize] = count;
                }
            }
            count += 1;
        }

        debug!(
            "found {count} strongly connected components in a graph with {} vertices",
            graph.len()
        );

        Self { id, count }
    }

    /// Returns the number of strong components
    pub fn count(&self) -> NumNodes {
        self.count
    }

    /// Returns the id of the strong component containing `v`.
    /// Edges between different components lead from larger to smaller ids.
    /// ** Panics if `v >= n` **
    pub fn id(&self, v: Node) -> NumNodes {
        self.id[v as usize]
    }

    /// Returns *true* if `v` and `w` can reach each other
    /// ** Panics if `v >= n || w >= n` **
    pub fn strongly_connected(&self, v: Node, w: Node) -> bool {
        self.id(v) == self.id(w)
    }
}

/// Reachability between all pairs of vertices
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let closure = TransitiveClosure::new(&g);
///
/// assert!(closure.reachable(0, 2));
/// assert!(closure.reachable(1, 1));
/// assert!(!closure.reachable(2, 0));
/// ```
#[derive(Clone, Debug)]
pub struct TransitiveClosure {
    reachable: Vec<NodeBitSet>,
}

impl TransitiveClosure {
    /// Runs one depth-first search per vertex, taking `O(n * (n + m))` time
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let reachable = graph
            .vertices()
            .map(|u| {
                let mut walk = graph.dfs(u);
                walk.by_ref().for_each(drop);
                walk.into_visited()
            })
            .collect();

        Self { reachable }
    }

    /// Returns *true* if there is a path from `v` to `w`; every vertex reaches itself
    /// ** Panics if `v >= n || w >= n` **
    pub fn reachable(&self, v: Node, w: Node) -> bool {
        self.reachable[v as usize].get_bit(w)
    }
}

/// Provides connectivity queries directly on graphs
pub trait Connectivity: AdjacencyList {
    /// Returns the connected components of an undirected graph
    fn connected_components(&self) -> ConnectedComponents
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self)
    }

    /// Returns *true* if the undirected graph has at most one component
    fn is_connected(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self).count() <= 1
    }

    /// Returns the strongly connected components of a directed graph
    fn strong_components(&self) -> StrongComponents
    where
        Self: GraphReverse + GraphType<Dir = Directed>,
    {
        StrongComponents::new(self)
    }

    /// Returns the reachability relation of the graph
    fn transitive_closure(&self) -> TransitiveClosure {
        TransitiveClosure::new(self)
    }
}

impl<G: AdjacencyList> Connectivity for G {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, utils::UnionFind};

    #[test]
    fn components_match_union_find() {
        let rng = &mut Pcg64Mcg::seed_from_u64(51);

        for n in [1 as NumNodes, 10, 40, 100] {
            let g = Graph::gnm(rng, n, n as NumEdges / 2).unwrap();
            let cc = g.connected_components();

            let mut uf = UnionFind::new(n);
            for Edge(u, v) in g.edges() {
                uf.union(u, v);
            }

            assert_eq!(cc.count(), uf.count());
            for u in g.vertices() {
                assert_eq!(cc.size(u), uf.size_of(u));
                for v in g.vertices() {
                    assert_eq!(cc.connected(u, v), uf.connected(u, v));
                }
            }

            // discovery order
            let components = cc.components();
            assert!(components.windows(2).all(|w| w[0][0] < w[1][0]));
            assert_eq!(components.iter().map(|c| c.len()).sum::<usize>(), n as usize);
        }
    }

    #[test]
    fn empty_and_connected_graphs() {
        let g = Graph::new(0);
        assert_eq!(g.connected_components().count(), 0);
        assert!(g.is_connected());

        let rng = &mut Pcg64Mcg::seed_from_u64(52);
        let tree = Graph::random_tree(rng, 30).unwrap();
        assert!(tree.is_connected());
    }

    #[test]
    fn strong_components_agree_with_closure() {
        let rng = &mut Pcg64Mcg::seed_from_u64(53);

        for n in [3 as NumNodes, 10, 30] {
            let g = Digraph::gnm(rng, n, 3 * n as NumEdges / 2).unwrap();
            let scc = g.strong_components();
            let closure = g.transitive_closure();

            for u in g.vertices() {
                for v in g.vertices() {
                    assert_eq!(
                        scc.strongly_connected(u, v),
                        closure.reachable(u, v) && closure.reachable(v, u)
                    );
                }
            }

            for Edge(u, v) in g.edges() {
                assert!(scc.id(u) >= scc.id(v));
            }
        }
    }

    #[test]
    fn strong_components_of_cycle_and_dag() {
        let mut g = Digraph::new(6);
        g.connect_cycle(0..6).unwrap();
        assert_eq!(g.strong_components().count(), 1);

        let dag = Digraph::from_edges(4, [(0, 1), (1, 2), (0, 3)]).unwrap();
        assert_eq!(dag.strong_components().count(), 4);
    }

    #[test]
    fn undirected_closure() {
        let g = Graph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
        let closure = g.transitive_closure();

        assert!(closure.reachable(1, 0));
        assert!(closure.reachable(3, 2));
        assert!(!closure.reachable(0, 2));
    }
}
