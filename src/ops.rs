/*!
# Graph Operations

Traits every representation implements. Algorithms are written against these traits only,
so they work on any representation with the right edge kind and [`Direction`].

A representation stores its edges in an arena (see [`AdjacencyList::edge`]) and every vertex owns
the ordered list of ids of the edges it is *listed at* ([`AdjacencyList::incidence_of`]).
Whether an edge is listed at its tail only or at both endpoints is decided by the [`Direction`].
*/

use std::{fmt::Debug, ops::Range};

use itertools::Itertools;

use crate::{edge::*, error::*, node::*};

/// Orientation semantics of a representation
pub trait Direction: Copy + Clone + Debug + Default + 'static {
    /// Edges are oriented from tail to head
    const DIRECTED: bool;

    /// Edges appear in the incidence lists of both endpoints
    const LISTED_AT_BOTH_ENDS: bool;
}

/// Edges are listed at their tail only
#[derive(Copy, Clone, Debug, Default)]
pub struct Directed;

/// Edges are listed at both endpoints and can be traversed both ways
#[derive(Copy, Clone, Debug, Default)]
pub struct Undirected;

/// Oriented edges that are listed at both endpoints, as needed for residual networks
#[derive(Copy, Clone, Debug, Default)]
pub struct Residual;

impl Direction for Directed {
    const DIRECTED: bool = true;
    const LISTED_AT_BOTH_ENDS: bool = false;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
    const LISTED_AT_BOTH_ENDS: bool = true;
}

impl Direction for Residual {
    const DIRECTED: bool = true;
    const LISTED_AT_BOTH_ENDS: bool = true;
}

/// Associates a graph with its [`Direction`]
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if edges of this graph are oriented
    fn is_directed() -> bool {
        Self::Dir::DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all vertices. In contrast to `vertices()`, the range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of logical edges of the graph.
    /// An undirected edge counts once even though it is listed at both endpoints.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns empty bitset with one entry per edge id
    fn edge_bitset_unset(&self) -> EdgeBitSet {
        EdgeBitSet::new(self.number_of_edges())
    }

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the edge arena and the incidence lists of a graph
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + GraphType + Sized {
    type Edge: GraphEdge;

    /// Returns the edge with the given id.
    /// ** Panics if `id >= m` **
    fn edge(&self, id: EdgeId) -> Self::Edge;

    /// Returns the ids of all edges listed at `u` in insertion order.
    /// A self-loop of an undirected graph is listed twice.
    /// ** Panics if `u >= n` **
    fn incidence_of(&self, u: Node) -> &[EdgeId];

    /// Returns all edges in insertion order, i.e. ordered by id
    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_ {
        (0..self.number_of_edges()).map(|id| self.edge(id))
    }

    /// Returns the vertex reached when leaving `u` over edge `id`
    /// ** Panics if `u` is not an endpoint of the edge **
    #[inline]
    fn head_of(&self, u: Node, id: EdgeId) -> Node {
        let edge = self.edge(id);
        if Self::Dir::LISTED_AT_BOTH_ENDS {
            edge.other(u)
        } else {
            edge.head()
        }
    }

    /// Returns an iterator over `(id, edge)` for all edges listed at `u`
    /// ** Panics if `u >= n` **
    fn incident_edges_of(&self, u: Node) -> impl Iterator<Item = (EdgeId, Self::Edge)> + '_ {
        self.incidence_of(u).iter().map(|&id| (id, self.edge(id)))
    }

    /// Returns an iterator over the vertices reachable from `u` by a single edge, with repetitions
    /// for parallel edges.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incidence_of(u).iter().map(move |&id| self.head_of(u, id))
    }

    /// Returns the number of edges listed at `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.incidence_of(u).len() as NumNodes
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the neighbors of `u` as a bitset
    /// ** Panics if `u >= n` **
    fn neighbors_of_as_bitset(&self, u: Node) -> NodeBitSet {
        NodeBitSet::new_with_bits_set(self.number_of_nodes(), self.neighbors_of(u))
    }

    /// Returns the neighbors of `u` in sorted order
    /// ** Panics if `u >= n` **
    fn ordered_neighbors_of(&self, u: Node) -> Vec<Node> {
        self.neighbors_of(u).sorted_unstable().collect()
    }
}

/// Degree queries of oriented graphs
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns the number of edges leaving `u`
    /// ** Panics if `u >= n` **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.incidence_of(u)
            .iter()
            .filter(|&&id| self.edge(id).tail() == u)
            .count() as NumNodes
    }

    /// Returns the number of edges entering `u`
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the heads of edges leaving `u`
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.incidence_of(u)
            .iter()
            .map(|&id| self.edge(id))
            .filter(move |e| e.tail() == u)
            .map(|e| e.head())
    }

    /// Returns an iterator over the in-degrees of all vertices
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.in_degree_of(u))
    }

    /// Returns the out-degree and in-degree of a given vertex
    /// ** Panics if `u >= n` **
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }
}

/// Reversal of oriented graphs
pub trait GraphReverse {
    /// Returns a copy of the graph with every edge reversed.
    /// Vertex and edge counts as well as edge ids are preserved.
    fn reverse(&self) -> Self;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides the only mutator of a graph
pub trait GraphEdgeEditing: GraphNew + AdjacencyList {
    /// Validates both endpoints as well as all attributes of the edge, inserts it and returns its id.
    /// On error, the graph is left unchanged.
    fn add_edge(&mut self, edge: impl Into<Self::Edge>) -> Result<EdgeId>;

    /// Adds all edges in the collection, stopping at the first invalid edge
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Self::Edge>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    type FromEdge;

    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Self::FromEdge>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    type FromEdge = G::Edge;

    fn from_edges<I>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Self::FromEdge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
