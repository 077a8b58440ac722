/*!
# Depth-First Orders

[`DepthFirstOrder`] records the preorder and postorder of a depth-first search over the whole graph,
restarted at every unvisited vertex in increasing order. [`Topological`] derives a topological
order of a directed acyclic graph as the reverse postorder.
*/

use super::{cycle::*, traversal::*, *};

/// Preorder, postorder and reverse postorder of a depth-first search forest
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(4, [(0, 1), (0, 2), (2, 3)]).unwrap();
/// let order = DepthFirstOrder::new(&g);
///
/// assert_eq!(order.pre(), &[0, 1, 2, 3]);
/// assert_eq!(order.post(), &[1, 3, 2, 0]);
/// assert_eq!(order.reverse_post().collect::<Vec<_>>(), vec![0, 2, 3, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct DepthFirstOrder {
    pre: Vec<Node>,
    post: Vec<Node>,
    pre_rank: Vec<usize>,
    post_rank: Vec<usize>,
}

impl DepthFirstOrder {
    pub fn new<G: AdjacencyList>(graph: &G) -> Self {
        let mut pre = Vec::with_capacity(graph.len());
        let mut post = Vec::with_capacity(graph.len());
        let mut pre_rank = vec![0; graph.len()];
        let mut post_rank = vec![0; graph.len()];

        let mut walk = DepthFirstWalk::new(graph);
        for root in graph.vertices_range() {
            if !walk.start_at(root) {
                continue;
            }

            for event in walk.by_ref() {
                match event {
                    DfsEvent::Discover { node, .. } => {
                        pre_rank[node as usize] = pre.len();
                        pre.push(node);
                    }
                    DfsEvent::Finish(node) => {
                        post_rank[node as usize] = post.len();
                        post.push(node);
                    }
                    DfsEvent::NonTreeEdge { .. } => {}
                }
            }
        }

        Self {
            pre,
            post,
            pre_rank,
            post_rank,
        }
    }

    /// Returns the vertices in the order they were discovered
    pub fn pre(&self) -> &[Node] {
        &self.pre
    }

    /// Returns the vertices in the order they were finished
    pub fn post(&self) -> &[Node] {
        &self.post
    }

    /// Returns the vertices in reverse postorder
    pub fn reverse_post(&self) -> impl Iterator<Item = Node> + '_ {
        self.post.iter().rev().copied()
    }

    /// Returns the position of `v` in the preorder
    /// ** Panics if `v >= n` **
    pub fn pre_rank(&self, v: Node) -> usize {
        self.pre_rank[v as usize]
    }

    /// Returns the position of `v` in the postorder
    /// ** Panics if `v >= n` **
    pub fn post_rank(&self, v: Node) -> usize {
        self.post_rank[v as usize]
    }
}

/// Topological order of a directed graph, if it is acyclic
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(3, [(2, 0), (0, 1), (2, 1)]).unwrap();
/// let topo = Topological::new(&g);
///
/// assert_eq!(topo.order(), Some(&[2, 0, 1][..]));
/// assert_eq!(topo.rank(0), Some(1));
///
/// let cyclic = Digraph::from_edges(2, [(0, 1), (1, 0)]).unwrap();
/// assert_eq!(Topological::new(&cyclic).rank(0), None);
/// ```
#[derive(Clone, Debug)]
pub struct Topological {
    order: Option<Vec<Node>>,
    rank: Vec<usize>,
}

impl Topological {
    /// Computes the reverse postorder of the graph unless it has a directed cycle
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Directed>,
    {
        if DirectedCycle::new(graph).has_cycle() {
            debug!("graph has a directed cycle, there is no topological order");
            return Self {
                order: None,
                rank: Vec::new(),
            };
        }

        let order: Vec<Node> = DepthFirstOrder::new(graph).reverse_post().collect();
        let mut rank = vec![0; graph.len()];
        for (i, &u) in order.iter().enumerate() {
            rank[u as usize] = i;
        }

        Self {
            order: Some(order),
            rank,
        }
    }

    /// Returns *true* if the graph is acyclic
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns a topological order, or `None` if the graph has a directed cycle
    pub fn order(&self) -> Option<&[Node]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the topological order, or `None` if there is no order
    /// ** Panics if an order exists and `v >= n` **
    pub fn rank(&self, v: Node) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[v as usize])
    }
}

/// Provides topological sorting directly on directed graphs
pub trait TopologicalSort: AdjacencyList + GraphType<Dir = Directed> {
    /// Returns a topological order, or `None` if the graph has a directed cycle
    fn topological_order(&self) -> Option<Vec<Node>> {
        Topological::new(self).order
    }
}

impl<G: AdjacencyList + GraphType<Dir = Directed>> TopologicalSort for G {}
