/*!
# Shortest Paths

[`PathTree`] is the bookkeeping shared by all weighted path algorithms: per vertex the best known
distance and the edge it was reached by. The algorithms differ only in the order they relax
edges in:

- [`DijkstraPaths`]: single-source shortest paths for non-negative weights with an indexed priority queue
- [`DijkstraAllPairs`]: one [`DijkstraPaths`] per vertex
- [`BellmanFord`](super::BellmanFord) and [`AcyclicPaths`](super::AcyclicPaths) live in their own modules

Whether a tree tracks shortest or longest paths is chosen by the [`PathObjective`] marker.
Unreached vertices keep the sentinel distance `+inf` (shortest) or `-inf` (longest). Reachability
is tracked through the predecessor edges, so a path whose weight overflows to the sentinel still counts.
*/

use std::marker::PhantomData;

use super::*;

/// Decides which of two path lengths is better
pub trait PathObjective {
    /// Distance of vertices that are not reached
    const UNREACHED: Weight;

    /// Returns *true* if `candidate` is strictly better than `current`
    fn improves(candidate: Weight, current: Weight) -> bool;
}

/// Minimizes path weights
#[derive(Copy, Clone, Debug, Default)]
pub struct Shortest;

/// Maximizes path weights
#[derive(Copy, Clone, Debug, Default)]
pub struct Longest;

impl PathObjective for Shortest {
    const UNREACHED: Weight = Weight::INFINITY;

    #[inline]
    fn improves(candidate: Weight, current: Weight) -> bool {
        candidate < current
    }
}

impl PathObjective for Longest {
    const UNREACHED: Weight = Weight::NEG_INFINITY;

    #[inline]
    fn improves(candidate: Weight, current: Weight) -> bool {
        candidate > current
    }
}

/// Distances and predecessor edges from a single source
#[derive(Clone, Debug)]
pub struct PathTree<E, O = Shortest> {
    source: Node,
    dist_to: Vec<Weight>,
    edge_to: Vec<Option<(Node, E)>>,
    _objective: PhantomData<O>,
}

impl<E, O> PathTree<E, O>
where
    E: WeightedGraphEdge,
    O: PathObjective,
{
    /// Creates a tree in which only `source` is reached
    pub(crate) fn new(n: NumNodes, source: Node) -> Self {
        let mut dist_to = vec![O::UNREACHED; n as usize];
        dist_to[source as usize] = 0.0;

        Self {
            source,
            dist_to,
            edge_to: vec![None; n as usize],
            _objective: PhantomData,
        }
    }

    /// Relaxes `edge` when leaving `u` towards `v` and returns *true* if the distance of `v` improved
    /// or `v` was reached for the first time
    pub(crate) fn relax(&mut self, u: Node, v: Node, edge: E) -> bool {
        let candidate = self.dist_to[u as usize] + edge.weight();
        if self.has_path_to(v) && !O::improves(candidate, self.dist_to[v as usize]) {
            return false;
        }

        self.dist_to[v as usize] = candidate;
        self.edge_to[v as usize] = Some((u, edge));
        true
    }

    /// Returns the predecessor edges of all vertices that have one
    pub(crate) fn tree_edges(&self) -> impl Iterator<Item = E> + '_ {
        self.edge_to.iter().filter_map(|e| e.map(|(_, edge)| edge))
    }

    /// Returns the source vertex
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns *true* if there is a path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        v == self.source || self.edge_to[v as usize].is_some()
    }

    /// Returns the weight of a best path from the source to `v`, or the sentinel
    /// `+inf` / `-inf` if there is none
    /// ** Panics if `v >= n` **
    pub fn dist_to(&self, v: Node) -> Weight {
        self.dist_to[v as usize]
    }

    /// Returns the edges of a best path from the source to `v` in walking order
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<E>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = Vec::new();
        let mut u = v;
        while let Some((parent, edge)) = self.edge_to[u as usize] {
            path.push(edge);
            u = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the vertices of a best path from the source to `v`, source first
    /// ** Panics if `v >= n` **
    pub fn vertices_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some((parent, _)) = self.edge_to[u as usize] {
            path.push(parent);
            u = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Fails with [`GraphError::NegativeWeight`] on the first edge of negative weight
fn check_non_negative<G>(graph: &G) -> Result<()>
where
    G: AdjacencyList,
    G::Edge: WeightedGraphEdge,
{
    match graph.edges().find(|e| e.weight() < 0.0) {
        Some(e) => Err(GraphError::NegativeWeight {
            from: e.tail(),
            to: e.head(),
            weight: e.weight(),
        }),
        None => Ok(()),
    }
}

/// Single-source shortest paths in graphs with non-negative edge weights.
///
/// Works for directed and undirected weighted graphs in `O((n + m) log n)`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = EdgeWeightedDigraph::from_edges(
///     4,
///     [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)],
/// ).unwrap();
/// let sp = DijkstraPaths::new(&g, 0).unwrap();
///
/// assert_eq!(sp.dist_to(3), 4.0);
/// assert_eq!(sp.vertices_to(3), Some(vec![0, 1, 2, 3]));
/// ```
#[derive(Clone, Debug)]
pub struct DijkstraPaths<E> {
    tree: PathTree<E, Shortest>,
}

impl<E: WeightedGraphEdge> DijkstraPaths<E> {
    /// Fails if `source` is not a vertex or some edge has a negative weight
    pub fn new<G>(graph: &G, source: Node) -> Result<Self>
    where
        G: AdjacencyList<Edge = E>,
    {
        check_vertex(source, graph.number_of_nodes())?;
        check_non_negative(graph)?;
        Ok(Self::run(graph, source))
    }

    /// Runs Dijkstra's algorithm on an already validated graph
    fn run<G>(graph: &G, source: Node) -> Self
    where
        G: AdjacencyList<Edge = E>,
    {
        let mut tree = PathTree::new(graph.number_of_nodes(), source);
        let mut pq = IndexMinPQ::new(graph.number_of_nodes());
        pq.insert(source, 0.0);

        let mut settled = 0;
        while let Some(u) = pq.delete_min() {
            settled += 1;
            for (id, edge) in graph.incident_edges_of(u) {
                let v = graph.head_of(u, id);
                if tree.relax(u, v, edge) {
                    pq.insert_or_decrease(v, tree.dist_to(v));
                }
            }
        }

        trace!("dijkstra from {source} settled {settled} vertices");
        Self { tree }
    }

    /// Returns the underlying shortest path tree
    pub fn tree(&self) -> &PathTree<E, Shortest> {
        &self.tree
    }

    /// Returns *true* if there is a path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        self.tree.has_path_to(v)
    }

    /// Returns the weight of a shortest path to `v`, or `+inf` if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn dist_to(&self, v: Node) -> Weight {
        self.tree.dist_to(v)
    }

    /// Returns the edges of a shortest path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<E>> {
        self.tree.path_to(v)
    }

    /// Returns the vertices of a shortest path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn vertices_to(&self, v: Node) -> Option<Vec<Node>> {
        self.tree.vertices_to(v)
    }
}

/// Shortest paths between all pairs of vertices in graphs with non-negative edge weights
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = EdgeWeightedGraph::from_edges(3, [(0, 1, 2.0), (1, 2, 3.0)]).unwrap();
/// let apsp = DijkstraAllPairs::new(&g).unwrap();
///
/// assert_eq!(apsp.dist(2, 0), 5.0);
/// assert_eq!(apsp.path(0, 2).map(|p| p.len()), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct DijkstraAllPairs<E> {
    all: Vec<DijkstraPaths<E>>,
}

impl<E: WeightedGraphEdge> DijkstraAllPairs<E> {
    /// Fails if some edge has a negative weight
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: AdjacencyList<Edge = E>,
    {
        check_non_negative(graph)?;
        let all = graph
            .vertices()
            .map(|s| DijkstraPaths::run(graph, s))
            .collect();

        debug!("computed shortest paths between all pairs of {} vertices", graph.len());
        Ok(Self { all })
    }

    /// Returns the shortest paths from `s`
    /// ** Panics if `s >= n` **
    pub fn paths_from(&self, s: Node) -> &DijkstraPaths<E> {
        &self.all[s as usize]
    }

    /// Returns *true* if there is a path from `s` to `t`
    /// ** Panics if `s >= n || t >= n` **
    pub fn has_path(&self, s: Node, t: Node) -> bool {
        self.paths_from(s).has_path_to(t)
    }

    /// Returns the weight of a shortest path from `s` to `t`, or `+inf` if there is none
    /// ** Panics if `s >= n || t >= n` **
    pub fn dist(&self, s: Node, t: Node) -> Weight {
        self.paths_from(s).dist_to(t)
    }

    /// Returns the edges of a shortest path from `s` to `t`
    /// ** Panics if `s >= n || t >= n` **
    pub fn path(&self, s: Node, t: Node) -> Option<Vec<E>> {
        self.paths_from(s).path_to(t)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// Distances of all vertices from `s` by exhaustive relaxation
    pub(crate) fn brute_force_distances<G>(graph: &G, s: Node) -> Vec<Weight>
    where
        G: AdjacencyList,
        G::Edge: WeightedGraphEdge,
    {
        let mut dist = vec![Weight::INFINITY; graph.len()];
        dist[s as usize] = 0.0;

        for _ in 0..graph.len() {
            for u in graph.vertices() {
                for (id, e) in graph.incident_edges_of(u) {
                    let v = graph.head_of(u, id);
                    if dist[u as usize] + e.weight() < dist[v as usize] {
                        dist[v as usize] = dist[u as usize] + e.weight();
                    }
                }
            }
        }

        dist
    }

    /// Equal up to rounding; infinite distances must match exactly
    pub(crate) fn close(a: Weight, b: Weight) -> bool {
        a == b || (a - b).abs() < 1e-9
    }

    /// Checks that the path to every reachable vertex walks from `s` to it with the reported weight
    pub(crate) fn assert_paths_replay<G, O>(graph: &G, tree: &PathTree<G::Edge, O>)
    where
        G: AdjacencyList,
        G::Edge: WeightedGraphEdge,
        O: PathObjective,
    {
        for v in graph.vertices() {
            let Some(path) = tree.path_to(v) else {
                assert!(!tree.has_path_to(v));
                continue;
            };

            let mut u = tree.source();
            let mut weight = 0.0;
            for e in path {
                u = e.other(u);
                weight += e.weight();
            }
            assert_eq!(u, v);
            assert!(close(weight, tree.dist_to(v)));
        }
    }

    #[test]
    fn example_scenario() {
        let g = EdgeWeightedDigraph::from_edges(
            4,
            [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)],
        )
        .unwrap();
        let sp = DijkstraPaths::new(&g, 0).unwrap();

        assert_eq!(sp.dist_to(3), 4.0);
        assert_eq!(
            sp.path_to(3).unwrap(),
            vec![
                DirectedEdge::new(0, 1, 1.0),
                DirectedEdge::new(1, 2, 2.0),
                DirectedEdge::new(2, 3, 1.0)
            ]
        );
        assert_eq!(sp.path_to(0), Some(vec![]));
    }

    #[test]
    fn unreachable_and_invalid() {
        let g = EdgeWeightedDigraph::from_edges(3, [(0, 1, 1.0), (2, 1, 1.0)]).unwrap();
        let sp = DijkstraPaths::new(&g, 0).unwrap();
        assert!(!sp.has_path_to(2));
        assert_eq!(sp.dist_to(2), Weight::INFINITY);
        assert_eq!(sp.path_to(2), None);

        assert!(matches!(
            DijkstraPaths::new(&g, 3),
            Err(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));

        let g = EdgeWeightedDigraph::from_edges(2, [(0, 1, 1.0), (1, 0, -0.5)]).unwrap();
        assert!(matches!(
            DijkstraPaths::new(&g, 0),
            Err(GraphError::NegativeWeight { from: 1, to: 0, .. })
        ));
        assert!(DijkstraAllPairs::new(&g).is_err());
    }

    #[test]
    fn overflowing_paths_stay_reachable() {
        let g = EdgeWeightedDigraph::from_edges(4, [(0, 1, 1e308), (1, 2, 1e308), (3, 0, 1.0)]).unwrap();
        let sp = DijkstraPaths::new(&g, 0).unwrap();

        assert!(sp.has_path_to(2));
        assert_eq!(sp.dist_to(2), Weight::INFINITY);
        assert_eq!(sp.vertices_to(2), Some(vec![0, 1, 2]));
        assert!(!sp.has_path_to(3));
        assert_eq!(sp.path_to(3), None);
    }

    #[test]
    fn random_graphs_match_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(81);
        let weights = RandomWeights::new(0.0..10.0).unwrap();

        for n in [5 as NumNodes, 20, 50] {
            let m = 2 * n as NumEdges;

            let digraph = EdgeWeightedDigraph::gnm_weighted(rng, n, m, &weights).unwrap();
            let s = rng.random_range(0..n);
            let sp = DijkstraPaths::new(&digraph, s).unwrap();
            let expected = brute_force_distances(&digraph, s);
            for v in digraph.vertices() {
                assert!(close(sp.dist_to(v), expected[v as usize]));
            }
            assert_paths_replay(&digraph, sp.tree());

            let graph = EdgeWeightedGraph::gnm_weighted(rng, n, m, &weights).unwrap();
            let apsp = DijkstraAllPairs::new(&graph).unwrap();
            for s in graph.vertices() {
                let expected = brute_force_distances(&graph, s);
                for t in graph.vertices() {
                    assert!(close(apsp.dist(s, t), expected[t as usize]));
                    assert!(close(apsp.dist(s, t), apsp.dist(t, s)));
                }
                assert_paths_replay(&graph, apsp.paths_from(s).tree());
            }
        }
    }
}
