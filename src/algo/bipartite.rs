/*!
# Bipartite Graphs

Tests whether an undirected graph is two-colorable. If it is not, an odd cycle serves as a certificate.

Functionality includes:
- Computing a two-coloring via depth-first search ([`Bipartite`])
- Verifying a given candidate bipartition ([`BipartiteTest::is_bipartition`])
*/

use super::{traversal::*, *};

/// Two-coloring or odd cycle of an undirected graph
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
/// let bip = Bipartite::new(&square);
/// assert!(bip.is_bipartite());
/// assert_ne!(bip.color(0), bip.color(1));
///
/// let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// let bip = Bipartite::new(&triangle);
/// assert_eq!(bip.odd_cycle(), Some(&[0, 1, 2, 0][..]));
/// ```
#[derive(Clone, Debug)]
pub struct Bipartite {
    color: NodeBitSet,
    odd_cycle: Option<Vec<Node>>,
}

impl Bipartite {
    /// Colors every depth-first tree alternately, starting each root with `false`.
    /// Stops at the first edge between two vertices of the same color.
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let mut color = graph.vertex_bitset_unset();
        let mut walk = DepthFirstWalk::new(graph);

        for root in graph.vertices_range() {
            if !walk.start_at(root) {
                continue;
            }

            while let Some(event) = walk.next() {
                match event {
                    DfsEvent::Discover {
                        node,
                        edge: Some(edge),
                    } => {
                        let parent = graph.edge(edge).other(node);
                        if !color.get_bit(parent) {
                            color.set_bit(node);
                        }
                    }
                    DfsEvent::NonTreeEdge { from, to, .. }
                        if color.get_bit(from) == color.get_bit(to) =>
                    {
                        // `to` is an ancestor of `from` with an even number of tree edges between them
                        let mut cycle: Vec<Node> = walk.stack().skip_while(|&x| x != to).collect();
                        cycle.push(to);

                        debug!("odd cycle of length {} found", cycle.len() - 1);
                        return Self {
                            color,
                            odd_cycle: Some(cycle),
                        };
                    }
                    _ => {}
                }
            }
        }

        Self {
            color,
            odd_cycle: None,
        }
    }

    /// Returns *true* if the graph is bipartite
    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// Returns the side of `v` in the two-coloring.
    /// Only meaningful if the graph is bipartite.
    /// ** Panics if `v >= n` **
    pub fn color(&self, v: Node) -> bool {
        self.color.get_bit(v)
    }

    /// Returns the vertices `[v, ..., v]` of an odd cycle if the graph is not bipartite
    pub fn odd_cycle(&self) -> Option<&[Node]> {
        self.odd_cycle.as_deref()
    }

    /// Consumes the result and returns the vertices colored *true*, if the graph is bipartite
    pub fn into_bipartition(self) -> Option<NodeBitSet> {
        self.odd_cycle.is_none().then_some(self.color)
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList {
    /// Tests whether no edge connects two vertices on the same side of `bipartition`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = Graph::new(10);
    /// g.connect_path(0..10).unwrap();
    ///
    /// assert!(g.is_bipartition(&NodeBitSet::new_with_bits_set(10, vec![0 as Node, 2, 4, 6, 8])));
    /// ```
    fn is_bipartition(&self, bipartition: &NodeBitSet) -> bool {
        self.edges().all(|e| {
            let (u, v) = e.endpoints();
            bipartition.get_bit(u) != bipartition.get_bit(v)
        })
    }

    /// Computes a valid bipartition of the graph, if one exists.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = Graph::new(10);
    /// g.connect_path(0..10).unwrap();
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.cardinality(), 5);
    /// ```
    fn compute_bipartition(&self) -> Option<NodeBitSet>
    where
        Self: GraphType<Dir = Undirected>,
    {
        Bipartite::new(self).into_bipartition()
    }

    /// Tests whether the graph is bipartite.
    fn is_bipartite(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        Bipartite::new(self).is_bipartite()
    }
}

impl<G: AdjacencyList> BipartiteTest for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = Graph::new(n);
            graph.connect_path(0..n).unwrap();
            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge((1 - (n % 2), n - 1)).unwrap();
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn self_loop_is_odd() {
        let g = Graph::from_edges(3, [(0, 1), (1, 1)]).unwrap();
        assert_eq!(Bipartite::new(&g).odd_cycle(), Some(&[1, 1][..]));
    }

    #[test]
    fn parallel_edges_are_even() {
        let g = Graph::from_edges(2, [(0, 1), (0, 1), (1, 0)]).unwrap();
        assert!(g.is_bipartite());
    }

    #[test]
    fn random_trees_and_odd_cycles() {
        let rng = &mut Pcg64Mcg::seed_from_u64(61);

        for n in [3 as NumNodes, 10, 100] {
            let mut g = Graph::random_tree(rng, n).unwrap();
            let bip = g.compute_bipartition().unwrap();
            assert!(g.is_bipartition(&bip));

            // connect two vertices of the same color
            let (u, v) = g
                .vertices_range()
                .tuple_combinations()
                .find(|&(u, v)| bip.get_bit(u) == bip.get_bit(v))
                .unwrap();
            g.add_edge((u, v)).unwrap();

            let result = Bipartite::new(&g);
            let cycle = result.odd_cycle().unwrap();
            assert_eq!(cycle.len() % 2, 0);
            assert_eq!(cycle.first(), cycle.last());
            for (a, b) in cycle.iter().tuple_windows() {
                assert!(g.neighbors_of(*a).contains(b));
            }
        }
    }
}
