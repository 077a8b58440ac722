/*!
# Oriented Representations

[`Digraph`], [`EdgeWeightedDigraph`] and [`FlowNetwork`] maintain in- and out-degree counters per vertex,
as the incidence lists of a directed graph only reveal out-edges and those of a flow network mix both.
*/

use super::*;
use crate::testing::test_graph_ops;

impl<E: GraphEdge> DirectedAdjacencyList for EdgeListGraph<E, Directed> {
    #[inline]
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u)
    }

    #[inline]
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degrees[u as usize]
    }

    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.neighbors_of(u)
    }
}

impl<E: GraphEdge> DirectedAdjacencyList for EdgeListGraph<E, Residual> {
    #[inline]
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_degrees[u as usize]
    }

    #[inline]
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degrees[u as usize]
    }
}

impl<E: GraphEdge> GraphReverse for EdgeListGraph<E, Directed> {
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = Digraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// let r = g.reverse();
    ///
    /// assert_eq!(r.edges().collect::<Vec<_>>(), vec![Edge(1, 0), Edge(2, 1)]);
    /// assert_eq!(r.in_degree_of(0), 1);
    /// ```
    fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.number_of_nodes());
        for edge in &self.edges {
            reversed.push_edge(edge.reversed());
        }
        reversed
    }
}

test_graph_ops!(
    test_digraph,
    Digraph,
    (GraphNew, AdjacencyList, DirectedAdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_edge_weighted_digraph,
    EdgeWeightedDigraph,
    (GraphNew, AdjacencyList, DirectedAdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_flow_network,
    FlowNetwork,
    (GraphNew, AdjacencyList, DirectedAdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn reverse_flips_every_edge() {
        let rng = &mut Pcg64Mcg::seed_from_u64(12);

        for n in [1 as NumNodes, 5, 20] {
            let edges = (0..3 * n)
                .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                .collect_vec();
            let graph = Digraph::from_edges(n, edges.iter().copied()).unwrap();
            let reversed = graph.reverse();

            assert_eq!(graph.number_of_nodes(), reversed.number_of_nodes());
            assert_eq!(graph.number_of_edges(), reversed.number_of_edges());

            for u in graph.vertices() {
                for v in graph.out_neighbors_of(u) {
                    assert!(reversed.out_neighbors_of(v).contains(&u));
                }
                assert_eq!(graph.out_degree_of(u), reversed.in_degree_of(u));
                assert_eq!(graph.in_degree_of(u), reversed.out_degree_of(u));
            }

            let back = reversed.reverse();
            assert_eq!(back.edges().collect_vec(), edges);
        }
    }

    #[test]
    fn flow_edges_are_listed_at_both_ends() {
        let network =
            FlowNetwork::from_edges(3, [(0, 1, 2.0), (1, 2, 1.0), (2, 0, 3.0)]).unwrap();

        assert_eq!(network.incidence_of(1), &[0, 1]);
        assert_eq!(network.out_degree_of(1), 1);
        assert_eq!(network.in_degree_of(1), 1);
        assert_eq!(network.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(network.out_neighbors_of(1).collect_vec(), vec![2]);
    }

    #[test]
    fn flow_network_degrees_count_self_loops_once() {
        let network =
            FlowNetwork::from_edges(2, [(0, 0, 1.0), (0, 1, 1.0), (0, 1, 2.0), (1, 0, 1.0)]).unwrap();

        assert_eq!(network.out_degree_of(0), 3);
        assert_eq!(network.in_degree_of(0), 2);
        assert_eq!(network.out_degree_of(1), 1);
        assert_eq!(network.in_degree_of(1), 2);
        assert_eq!(network.total_degree_of(0), 5);
    }

    #[test]
    fn flow_network_rejects_invalid_edges() {
        let mut network = FlowNetwork::new(2);
        assert!(matches!(
            network.add_edge((0, 1, -1.0)),
            Err(GraphError::InvalidCapacity(_))
        ));
        assert!(matches!(
            network.add_edge(FlowEdge::with_flow(0, 1, 1.0, 2.0)),
            Err(GraphError::InvalidFlow { .. })
        ));
        assert!(network.is_singleton());
    }
}
