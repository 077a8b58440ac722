use std::collections::VecDeque;

use super::{cycle::*, shortest_paths::*, *};

/// Single-source shortest paths with arbitrary edge weights.
///
/// Edges are relaxed queue-based: only vertices whose distance changed in the previous pass are
/// scanned again, and a vertex is never queued twice. After every `n`-th scanned vertex, the graph
/// of predecessor edges is searched for a directed cycle; any such cycle has negative weight. Once a
/// negative cycle is found, the algorithm stops and all distance and path queries fail with
/// [`GraphError::NegativeCycle`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = EdgeWeightedDigraph::from_edges(3, [(0, 1, 4.0), (0, 2, 1.0), (2, 1, -2.0)]).unwrap();
/// let sp = BellmanFord::new(&g, 0).unwrap();
/// assert_eq!(sp.dist_to(1).unwrap(), -1.0);
///
/// let g = EdgeWeightedDigraph::from_edges(3, [(0, 1, 1.0), (1, 2, -3.0), (2, 1, 1.0)]).unwrap();
/// let sp = BellmanFord::new(&g, 0).unwrap();
/// assert!(sp.has_negative_cycle());
/// assert!(sp.dist_to(1).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct BellmanFord<E> {
    tree: PathTree<E, Shortest>,
    negative_cycle: Option<Vec<E>>,
}

impl<E: WeightedGraphEdge> BellmanFord<E> {
    /// Fails only if `source` is not a vertex; a negative cycle is recorded on the result
    pub fn new<G>(graph: &G, source: Node) -> Result<Self>
    where
        G: AdjacencyList<Edge = E> + GraphType<Dir = Directed>,
    {
        check_vertex(source, graph.number_of_nodes())?;

        let n = graph.number_of_nodes();
        let mut result = Self {
            tree: PathTree::new(n, source),
            negative_cycle: None,
        };

        let mut on_queue = graph.vertex_bitset_unset();
        let mut queue = VecDeque::from([source]);
        on_queue.set_bit(source);

        let mut scanned: u64 = 0;
        while let Some(u) = queue.pop_front() {
            on_queue.clear_bit(u);

            for (id, edge) in graph.incident_edges_of(u) {
                let v = graph.head_of(u, id);
                if result.tree.relax(u, v, edge) && !on_queue.set_bit(v) {
                    queue.push_back(v);
                }
            }

            scanned += 1;
            if scanned % n as u64 == 0 {
                result.negative_cycle = result.find_negative_cycle(n)?;
                if result.negative_cycle.is_some() {
                    break;
                }
            }
        }

        match &result.negative_cycle {
            Some(cycle) => debug!(
                "negative cycle of {} edges reachable from {source} after {scanned} scans",
                cycle.len()
            ),
            None => debug!("bellman-ford from {source} converged after {scanned} scans"),
        }

        Ok(result)
    }

    /// Searches the graph of predecessor edges for a directed cycle
    fn find_negative_cycle(&self, n: NumNodes) -> Result<Option<Vec<E>>> {
        let spt = EdgeListGraph::<E, Directed>::from_edges(n, self.tree.tree_edges())?;
        let cycle = DirectedCycle::new(&spt);
        trace!("negative cycle probe on {} tree edges", spt.number_of_edges());

        Ok(cycle
            .cycle_edges()
            .map(|ids| ids.iter().map(|&id| spt.edge(id)).collect()))
    }

    /// Returns *true* if a negative cycle is reachable from the source
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Returns the edges of a negative cycle reachable from the source, if any
    pub fn negative_cycle(&self) -> Option<&[E]> {
        self.negative_cycle.as_deref()
    }

    /// Returns the shortest path tree unless a negative cycle was found
    pub fn tree(&self) -> Result<&PathTree<E, Shortest>> {
        if self.has_negative_cycle() {
            Err(GraphError::NegativeCycle)
        } else {
            Ok(&self.tree)
        }
    }

    /// Returns *true* if there is a path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> Result<bool> {
        Ok(self.tree()?.has_path_to(v))
    }

    /// Returns the weight of a shortest path to `v`, or `+inf` if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn dist_to(&self, v: Node) -> Result<Weight> {
        Ok(self.tree()?.dist_to(v))
    }

    /// Returns the edges of a shortest path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Result<Option<Vec<E>>> {
        Ok(self.tree()?.path_to(v))
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        algo::shortest_paths::tests::{assert_paths_replay, brute_force_distances, close},
        gens::*,
    };

    #[test]
    fn agrees_with_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(91);
        let weights = RandomWeights::new(0.0..5.0).unwrap();

        for n in [5 as NumNodes, 20, 60] {
            let g = EdgeWeightedDigraph::gnm_weighted(rng, n, 3 * n as NumEdges, &weights).unwrap();
            let s = rng.random_range(0..n);

            let bf = BellmanFord::new(&g, s).unwrap();
            let dijkstra = DijkstraPaths::new(&g, s).unwrap();
            assert!(!bf.has_negative_cycle());

            for v in g.vertices() {
                assert!(close(bf.dist_to(v).unwrap(), dijkstra.dist_to(v)));
                assert_eq!(bf.has_path_to(v).unwrap(), dijkstra.has_path_to(v));
            }
            assert_paths_replay(&g, bf.tree().unwrap());
        }
    }

    #[test]
    fn negative_weights_without_cycles() {
        let rng = &mut Pcg64Mcg::seed_from_u64(92);
        let weights = RandomWeights::new(-3.0..5.0).unwrap();

        for n in [5 as NumNodes, 20, 60] {
            // acyclic: every edge goes from a smaller to a larger vertex
            let edges = Graph::gnm(rng, n, 2 * n as NumEdges)
                .unwrap()
                .edges()
                .map(|e| e.normalized())
                .collect::<Vec<_>>();
            let weighted: Vec<_> = weights.weigh(rng, edges).collect();
            let g = EdgeWeightedDigraph::from_edges(n, weighted).unwrap();

            let bf = BellmanFord::new(&g, 0).unwrap();
            assert!(!bf.has_negative_cycle());

            let expected = brute_force_distances(&g, 0);
            for v in g.vertices() {
                assert!(close(bf.dist_to(v).unwrap(), expected[v as usize]));
            }
            assert_paths_replay(&g, bf.tree().unwrap());
        }
    }

    #[test]
    fn negative_cycle_invalidates_queries() {
        crate::testing::init_logger();
        let g = EdgeWeightedDigraph::from_edges(
            5,
            [
                (0, 1, 1.0),
                (1, 2, 1.0),
                (2, 3, -2.0),
                (3, 1, 0.5),
                (3, 4, 1.0),
            ],
        )
        .unwrap();
        let bf = BellmanFord::new(&g, 0).unwrap();

        assert!(bf.has_negative_cycle());
        let cycle = bf.negative_cycle().unwrap();
        assert_eq!(cycle.len(), 3);
        assert!(cycle.iter().map(|e| e.weight()).sum::<Weight>() < 0.0);
        for (i, e) in cycle.iter().enumerate() {
            assert_eq!(e.head(), cycle[(i + 1) % cycle.len()].tail());
        }

        assert!(matches!(bf.dist_to(0), Err(GraphError::NegativeCycle)));
        assert!(matches!(bf.path_to(4), Err(GraphError::NegativeCycle)));
        assert!(bf.has_path_to(1).is_err());
        assert!(bf.tree().is_err());
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g = EdgeWeightedDigraph::from_edges(4, [(0, 1, 2.0), (2, 3, -1.0), (3, 2, -1.0)]).unwrap();
        let bf = BellmanFord::new(&g, 0).unwrap();

        assert!(!bf.has_negative_cycle());
        assert_eq!(bf.dist_to(1).unwrap(), 2.0);
        assert_eq!(bf.dist_to(2).unwrap(), Weight::INFINITY);
        assert!(BellmanFord::new(&g, 4).is_err());
    }

    #[test]
    fn negative_self_loop() {
        let g = EdgeWeightedDigraph::from_edges(2, [(0, 1, 1.0), (1, 1, -0.5)]).unwrap();
        let bf = BellmanFord::new(&g, 0).unwrap();
        assert_eq!(bf.negative_cycle(), Some(&[DirectedEdge::new(1, 1, -0.5)][..]));
    }
}
