use super::*;
use crate::testing::test_graph_ops;

test_graph_ops!(
    test_graph,
    Graph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

test_graph_ops!(
    test_edge_weighted_graph,
    EdgeWeightedGraph,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_count_twice() {
        let graph = Graph::from_edges(2, [(0, 0), (0, 1)]).unwrap();
        assert_eq!(graph.degree_of(0), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.incidence_of(0), &[0, 0, 1]);
        assert_eq!(graph.neighbors_of(0).collect::<Vec<_>>(), vec![0, 0, 1]);
    }

    #[test]
    fn weighted_edges_are_shared() {
        let graph = EdgeWeightedGraph::from_edges(3, [(0, 1, 0.5), (2, 1, 1.5)]).unwrap();
        assert_eq!(graph.incidence_of(1), &[0, 1]);
        assert_eq!(graph.head_of(1, 1), 2);
        assert_eq!(graph.edge(1).weight(), 1.5);
        assert_eq!(graph.max_degree(), 2);
    }
}
