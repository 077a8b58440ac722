/*!
Graph traversal primitives and reachability results.

This module provides:
- [`DepthFirstWalk`], an iterative depth-first search emitting [`DfsEvent`]s. It keeps an explicit
  stack of `(vertex, position in incidence list)` pairs, so its memory is bounded by `O(n)` and
  long paths never exhaust the call stack. All depth-first algorithms of this crate are built on it.
- [`DepthFirstSearch`] / [`DepthFirstPaths`]: reachability and DFS-tree paths from a set of sources.
- [`BreadthFirstPaths`]: fewest-edge paths and distances from a set of sources.
- A high-level [`Traversal`] trait that exposes these directly as methods on graphs.

Edges are followed the way the representation lists them: directed graphs are traversed along
edge orientation, undirected graphs and flow networks from both endpoints.
*/

use std::collections::VecDeque;

use super::*;

/// Events reported by a [`DepthFirstWalk`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DfsEvent {
    /// `node` is visited for the first time; `edge` is the tree edge it was reached by (`None` for roots)
    Discover { node: Node, edge: Option<EdgeId> },
    /// Edge `edge` leads from `from` to the already visited `to`.
    /// In undirected graphs, the tree edge is reported again from the child towards its parent.
    NonTreeEdge { from: Node, edge: EdgeId, to: Node },
    /// All edges of the node have been scanned
    Finish(Node),
}

/// Iterative depth-first search over a graph.
///
/// A walk is started at a root with [`DepthFirstWalk::start_at`] and then iterated until it returns
/// `None`; it can be restarted at further roots afterwards, keeping its visited-state.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(3, [(0, 1), (1, 2), (0, 2)]).unwrap();
/// let mut walk = DepthFirstWalk::new(&g);
/// assert!(walk.start_at(0));
///
/// let finished: Vec<Node> = walk
///     .filter_map(|ev| match ev {
///         DfsEvent::Finish(u) => Some(u),
///         _ => None,
///     })
///     .collect();
/// assert_eq!(finished, vec![2, 1, 0]);
/// ```
pub struct DepthFirstWalk<'a, G: AdjacencyList> {
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<(Node, usize)>,
    pending_root: Option<Node>,
}

impl<'a, G: AdjacencyList> DepthFirstWalk<'a, G> {
    /// Creates a walk without roots; nothing is visited yet
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: Vec::new(),
            pending_root: None,
        }
    }

    /// Starts the walk at `root` if it is not visited yet and returns *true* iff it was started.
    /// ** Panics if `root >= n` or the previous walk has not been exhausted **
    pub fn start_at(&mut self, root: Node) -> bool {
        assert!(self.stack.is_empty() && self.pending_root.is_none());

        if self.visited.set_bit(root) {
            return false;
        }
        self.stack.push((root, 0));
        self.pending_root = Some(root);
        true
    }

    /// Returns *true* if `u` was discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the set of discovered vertices
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Consumes the walk and returns the set of discovered vertices
    pub fn into_visited(self) -> NodeBitSet {
        self.visited
    }

    /// Returns the vertices currently on the stack, i.e. the path from the root to the current vertex
    pub fn stack(&self) -> impl Iterator<Item = Node> + '_ {
        self.stack.iter().map(|&(u, _)| u)
    }
}

impl<G: AdjacencyList> Iterator for DepthFirstWalk<'_, G> {
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.pending_root.take() {
            return Some(DfsEvent::Discover {
                node: root,
                edge: None,
            });
        }

        let graph = self.graph;
        let (u, edge) = {
            let (u, pos) = self.stack.last_mut()?;
            let incidence = graph.incidence_of(*u);
            if *pos == incidence.len() {
                (*u, None)
            } else {
                *pos += 1;
                (*u, Some(incidence[*pos - 1]))
            }
        };

        let Some(edge) = edge else {
            self.stack.pop();
            return Some(DfsEvent::Finish(u));
        };

        let v = graph.head_of(u, edge);
        if self.visited.set_bit(v) {
            Some(DfsEvent::NonTreeEdge { from: u, edge, to: v })
        } else {
            self.stack.push((v, 0));
            Some(DfsEvent::Discover {
                node: v,
                edge: Some(edge),
            })
        }
    }
}

fn check_sources<G: GraphNodeOrder>(
    graph: &G,
    sources: impl IntoIterator<Item = Node>,
) -> Result<Vec<Node>> {
    let sources: Vec<Node> = sources.into_iter().collect();
    for &s in &sources {
        check_vertex(s, graph.number_of_nodes())?;
    }
    Ok(sources)
}

/// Marks all vertices reachable from a set of sources
#[derive(Clone, Debug)]
pub struct DepthFirstSearch {
    marked: NodeBitSet,
    count: NumNodes,
}

impl DepthFirstSearch {
    /// Runs a depth-first search from every source.
    /// Fails if a source is not a vertex of the graph.
    pub fn new<G: AdjacencyList>(graph: &G, sources: impl IntoIterator<Item = Node>) -> Result<Self> {
        let sources = check_sources(graph, sources)?;

        let mut walk = DepthFirstWalk::new(graph);
        for s in sources {
            if walk.start_at(s) {
                walk.by_ref().for_each(drop);
            }
        }

        let marked = walk.into_visited();
        let count = marked.cardinality() as NumNodes;
        Ok(Self { marked, count })
    }

    /// Returns *true* if `v` is reachable from a source
    /// ** Panics if `v >= n` **
    pub fn marked(&self, v: Node) -> bool {
        self.marked.get_bit(v)
    }

    /// Returns the number of reachable vertices, sources included
    pub fn count(&self) -> NumNodes {
        self.count
    }
}

/// Paths in a depth-first search forest
#[derive(Clone, Debug)]
pub struct DepthFirstPaths {
    marked: NodeBitSet,
    parent: Vec<Node>,
}

impl DepthFirstPaths {
    /// Computes a depth-first search forest rooted at the sources.
    /// Fails if a source is not a vertex of the graph.
    pub fn new<G: AdjacencyList>(graph: &G, sources: impl IntoIterator<Item = Node>) -> Result<Self> {
        let sources = check_sources(graph, sources)?;

        let mut parent = vec![INVALID_NODE; graph.len()];
        let mut walk = DepthFirstWalk::new(graph);
        for s in sources {
            if !walk.start_at(s) {
                continue;
            }
            for event in walk.by_ref() {
                if let DfsEvent::Discover {
                    node,
                    edge: Some(edge),
                } = event
                {
                    parent[node as usize] = graph.edge(edge).other(node);
                }
            }
        }

        Ok(Self {
            marked: walk.into_visited(),
            parent,
        })
    }

    /// Returns *true* if there is a path from a source to `v`
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        self.marked.get_bit(v)
    }

    /// Returns the vertices of the tree path from its source to `v`, or `None` if `v` is unreachable
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.has_path_to(v).then(|| tree_path(&self.parent, v))
    }

    /// Returns the number of reachable vertices
    pub fn count(&self) -> NumNodes {
        self.marked.cardinality() as NumNodes
    }
}

/// Follows `parent` from `v` up to a root and returns the path root-first
fn tree_path(parent: &[Node], v: Node) -> Vec<Node> {
    let mut path = vec![v];
    let mut u = v;
    while parent[u as usize] != INVALID_NODE {
        u = parent[u as usize];
        path.push(u);
    }
    path.reverse();
    path
}

/// Shortest (fewest-edge) paths from a set of sources.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
/// let bfs = BreadthFirstPaths::new(&g, [0]).unwrap();
///
/// assert_eq!(bfs.dist_to(2), Some(2));
/// assert_eq!(bfs.path_to(3), Some(vec![0, 3]));
/// ```
#[derive(Clone, Debug)]
pub struct BreadthFirstPaths {
    marked: NodeBitSet,
    parent: Vec<Node>,
    dist_to: Vec<NumNodes>,
    order: Vec<Node>,
}

impl BreadthFirstPaths {
    /// Runs a breadth-first search from all sources simultaneously.
    /// Fails if a source is not a vertex of the graph.
    pub fn new<G: AdjacencyList>(graph: &G, sources: impl IntoIterator<Item = Node>) -> Result<Self> {
        let sources = check_sources(graph, sources)?;

        let mut marked = graph.vertex_bitset_unset();
        let mut parent = vec![INVALID_NODE; graph.len()];
        let mut dist_to = vec![NumNodes::MAX; graph.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        for s in sources {
            if !marked.set_bit(s) {
                dist_to[s as usize] = 0;
                queue.push_back(s);
            }
        }

        while let Some(u) = queue.pop_front() {
            order.push(u);
            for v in graph.neighbors_of(u) {
                if !marked.set_bit(v) {
                    parent[v as usize] = u;
                    dist_to[v as usize] = dist_to[u as usize] + 1;
                    queue.push_back(v);
                }
            }
        }

        debug!(
            "breadth-first search reached {} of {} vertices",
            order.len(),
            graph.len()
        );

        Ok(Self {
            marked,
            parent,
            dist_to,
            order,
        })
    }

    /// Returns *true* if there is a path from a source to `v`
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        self.marked.get_bit(v)
    }

    /// Returns the number of edges on a shortest path from a source to `v`
    /// ** Panics if `v >= n` **
    pub fn dist_to(&self, v: Node) -> Option<NumNodes> {
        self.has_path_to(v).then(|| self.dist_to[v as usize])
    }

    /// Returns the vertices of a shortest path from a source to `v`, source first
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.has_path_to(v).then(|| tree_path(&self.parent, v))
    }

    /// Returns the reachable vertices in the order they were visited;
    /// their distances are non-decreasing
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Returns the number of reachable vertices
    pub fn count(&self) -> NumNodes {
        self.order.len() as NumNodes
    }
}

/// Provides convenient traversal methods
pub trait Traversal: AdjacencyList {
    /// Returns a depth-first walk started at `start`
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(2, [(0, 1)]).unwrap();
    /// assert_eq!(g.dfs(0).count(), 5); // discover 0, discover 1, edge back to 0, finish 1, finish 0
    /// ```
    fn dfs(&self, start: Node) -> DepthFirstWalk<'_, Self> {
        let mut walk = DepthFirstWalk::new(self);
        walk.start_at(start);
        walk
    }

    /// Returns the vertices reachable from `start` in breadth-first order
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> Vec<Node> {
        match BreadthFirstPaths::new(self, [start]) {
            Ok(bfs) => bfs.order,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns *true* if there is a path from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    fn is_node_reachable(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.dfs(u).any(|ev| matches!(ev, DfsEvent::Discover { node, .. } if node == v))
    }
}

impl<G: AdjacencyList> Traversal for G {}
