use super::{order::*, shortest_paths::*, *};

/// Single-source shortest or longest paths in a directed acyclic graph.
///
/// Vertices are visited in topological order and every edge is relaxed exactly once, so arbitrary
/// weights are supported in `O(n + m)`. Use the aliases [`AcyclicShortestPaths`] and
/// [`AcyclicLongestPaths`].
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = EdgeWeightedDigraph::from_edges(
///     4,
///     [(0, 1, 5.0), (0, 2, 3.0), (2, 1, 1.0), (1, 3, -2.0)],
/// ).unwrap();
///
/// let shortest = AcyclicShortestPaths::new(&g, 0).unwrap();
/// assert_eq!(shortest.dist_to(3), 2.0);
///
/// let longest = AcyclicLongestPaths::new(&g, 0).unwrap();
/// assert_eq!(longest.dist_to(3), 3.0);
/// assert_eq!(longest.tree().vertices_to(3), Some(vec![0, 1, 3]));
/// ```
#[derive(Clone, Debug)]
pub struct AcyclicPaths<E, O = Shortest> {
    tree: PathTree<E, O>,
}

/// Shortest paths in a directed acyclic graph
pub type AcyclicShortestPaths<E> = AcyclicPaths<E, Shortest>;

/// Longest paths in a directed acyclic graph
pub type AcyclicLongestPaths<E> = AcyclicPaths<E, Longest>;

impl<E, O> AcyclicPaths<E, O>
where
    E: WeightedGraphEdge,
    O: PathObjective,
{
    /// Fails if `source` is not a vertex or the graph has a directed cycle
    pub fn new<G>(graph: &G, source: Node) -> Result<Self>
    where
        G: AdjacencyList<Edge = E> + GraphType<Dir = Directed>,
    {
        check_vertex(source, graph.number_of_nodes())?;

        let topological = Topological::new(graph);
        let order = topological.order().ok_or(GraphError::NotAcyclic)?;

        let mut tree = PathTree::new(graph.number_of_nodes(), source);
        for &u in order.iter().skip_while(|&&u| u != source) {
            if !tree.has_path_to(u) {
                continue;
            }
            for (id, edge) in graph.incident_edges_of(u) {
                tree.relax(u, graph.head_of(u, id), edge);
            }
        }

        Ok(Self { tree })
    }

    /// Returns the underlying path tree
    pub fn tree(&self) -> &PathTree<E, O> {
        &self.tree
    }

    /// Returns *true* if there is a path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        self.tree.has_path_to(v)
    }

    /// Returns the weight of a best path to `v`, or the sentinel (`+inf` for shortest,
    /// `-inf` for longest paths) if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn dist_to(&self, v: Node) -> Weight {
        self.tree.dist_to(v)
    }

    /// Returns the edges of a best path from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<E>> {
        self.tree.path_to(v)
    }
}
