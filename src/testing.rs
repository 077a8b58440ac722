#[cfg(test)]
use crate::{edge::*, node::*};

/// Builds an edge of any kind from two endpoints and a non-negative number.
/// Used to generate the same random instances for all representations.
#[cfg(test)]
pub(crate) trait TestEdge: GraphEdge {
    fn test_edge(u: Node, v: Node, x: Weight) -> Self;
}

#[cfg(test)]
impl TestEdge for Edge {
    fn test_edge(u: Node, v: Node, _: Weight) -> Self {
        Edge(u, v)
    }
}

#[cfg(test)]
impl TestEdge for WeightedEdge {
    fn test_edge(u: Node, v: Node, x: Weight) -> Self {
        WeightedEdge::new(u, v, x)
    }
}

#[cfg(test)]
impl TestEdge for DirectedEdge {
    fn test_edge(u: Node, v: Node, x: Weight) -> Self {
        DirectedEdge::new(u, v, x)
    }
}

#[cfg(test)]
impl TestEdge for FlowEdge {
    fn test_edge(u: Node, v: Node, x: Weight) -> Self {
        FlowEdge::with_flow(u, v, 2.0 * x, x)
    }
}

/// Every representation should implement `GraphNew`, `AdjacencyList` and `GraphEdgeEditing`;
/// oriented ones additionally `DirectedAdjacencyList`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, edge::*, node::*, error::*, testing::{test_graph_ops, TestEdge}};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            type E = <$graph as AdjacencyList>::Edge;

            /// Creates a list of `m` random edges (including loops and parallel edges) for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<E> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    E::test_edge(u, v, rng.random_range(0.0..10.0))
                }).collect_vec()
            }

            /// Neighbors of each vertex as they should be listed
            fn expected_neighbors(n: NumNodes, edges: &[E]) -> Vec<Vec<Node>> {
                let mut nbs = vec![Vec::new(); n as usize];
                for e in edges {
                    let (u, v) = e.endpoints();
                    nbs[u as usize].push(v);
                    if <$graph>::lists_edge_at_head(u, v) {
                        nbs[v as usize].push(u);
                    }
                }
                nbs
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [0, n, n * 5] {
                    let edges = random_edges(rng, n, m);
                    let graph = <$graph>::from_edges(n, edges.iter().copied()).unwrap();
                    let nbs = expected_neighbors(n, &edges);

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), m);
                    assert_eq!(graph.edges().collect_vec(), edges);

                    for u in 0..n {
                        assert_eq!(graph.neighbors_of(u).collect_vec(), nbs[u as usize]);
                        assert_eq!(graph.degree_of(u) as usize, nbs[u as usize].len());

                        for (id, e) in graph.incident_edges_of(u) {
                            assert_eq!(graph.edge(id), e);
                            assert!(e.tail() == u || e.head() == u);
                        }
                    }

                    let total: usize = graph.degrees().map(|d| d as usize).sum();
                    assert_eq!(total, nbs.iter().map(|x| x.len()).sum::<usize>());
                    assert!(total >= m as usize);
                }
            }
        }
    };
    ($graph:ident: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(<$graph>::is_directed());

            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 20, 50] {
                for m in [0, n, n * 5] {
                    let edges = random_edges(rng, n, m);
                    let graph = <$graph>::from_edges(n, edges.iter().copied()).unwrap();

                    let mut in_degs = vec![0 as NumNodes; n as usize];
                    let mut out_degs = vec![0 as NumNodes; n as usize];
                    for e in &edges {
                        out_degs[e.tail() as usize] += 1;
                        in_degs[e.head() as usize] += 1;
                    }

                    for u in 0..n {
                        assert_eq!(graph.in_degree_of(u), in_degs[u as usize]);
                        assert_eq!(
                            graph.out_neighbors_of(u).collect_vec(),
                            edges.iter().filter(|e| e.tail() == u).map(|e| e.head()).collect_vec()
                        );
                        assert_eq!(graph.out_degree_of(u), out_degs[u as usize]);
                    }

                    assert_eq!(graph.in_degrees().sum::<NumNodes>(), m);
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(7);

            for n in [1 as NumNodes, 10, 20] {
                let mut graph = <$graph>::new(n);
                let mut m = 0;

                for _ in 0..(3 * n) {
                    let u = rng.random_range(0..n + 2);
                    let v = rng.random_range(0..n + 2);
                    let result = graph.add_edge(E::test_edge(u, v, 1.0));

                    if u < n && v < n {
                        assert_eq!(result.unwrap(), m);
                        m += 1;
                    } else {
                        assert!(matches!(result, Err(GraphError::VertexOutOfRange { .. })));
                    }

                    assert_eq!(graph.number_of_edges(), m);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Routes log output of the library through the test harness; safe to call from every test
#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
