/*!
# Graph Representations

All representations are instances of a single generic type [`EdgeListGraph`], parameterized by
the edge kind and a [`Direction`]:

| Alias                   | Edge             | Direction      |
|-------------------------|------------------|----------------|
| [`Graph`]               | [`Edge`]         | [`Undirected`] |
| [`Digraph`]             | [`Edge`]         | [`Directed`]   |
| [`EdgeWeightedGraph`]   | [`WeightedEdge`] | [`Undirected`] |
| [`EdgeWeightedDigraph`] | [`DirectedEdge`] | [`Directed`]   |
| [`FlowNetwork`]         | [`FlowEdge`]     | [`Residual`]   |

Edges live in an arena and are identified by their insertion index ([`EdgeId`]). Every vertex
keeps the ids of the edges listed at it in insertion order: directed edges are listed at their
tail, undirected and flow edges at both endpoints. Parallel edges and self-loops are allowed;
an undirected self-loop is listed twice at its vertex.
*/

use std::{fmt, marker::PhantomData};

use smallvec::SmallVec;

use crate::{error::*, prelude::*};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

type Incidence = SmallVec<[EdgeId; 4]>;

/// A vertex-indexed multigraph storing its edges in an arena
#[derive(Clone)]
pub struct EdgeListGraph<E: GraphEdge, D: Direction> {
    edges: Vec<E>,
    incidence: Vec<Incidence>,
    in_degrees: Vec<NumNodes>,
    out_degrees: Vec<NumNodes>,
    _dir: PhantomData<D>,
}

/// Undirected unweighted graph
pub type Graph = EdgeListGraph<Edge, Undirected>;

/// Directed unweighted graph
pub type Digraph = EdgeListGraph<Edge, Directed>;

/// Undirected graph with weighted edges
pub type EdgeWeightedGraph = EdgeListGraph<WeightedEdge, Undirected>;

/// Directed graph with weighted edges
pub type EdgeWeightedDigraph = EdgeListGraph<DirectedEdge, Directed>;

/// Capacitated network whose edges are reachable from both endpoints
pub type FlowNetwork = EdgeListGraph<FlowEdge, Residual>;

impl<E: GraphEdge, D: Direction> EdgeListGraph<E, D> {
    /// Inserts an edge whose endpoints and attributes were already validated
    fn push_edge(&mut self, edge: E) -> EdgeId {
        let id = self.edges.len() as EdgeId;
        let (u, v) = edge.endpoints();

        self.edges.push(edge);
        self.incidence[u as usize].push(id);
        if Self::lists_edge_at_head(u, v) {
            self.incidence[v as usize].push(id);
        }
        self.out_degrees[u as usize] += 1;
        self.in_degrees[v as usize] += 1;

        id
    }

    /// Returns *true* if an edge `u -> v` also appears in the incidence list of `v`.
    /// Undirected self-loops are listed twice at their vertex, oriented ones only once.
    pub fn lists_edge_at_head(u: Node, v: Node) -> bool {
        D::LISTED_AT_BOTH_ENDS && (!D::DIRECTED || u != v)
    }

    /// Returns all edges as a slice ordered by id
    pub fn edges_as_slice(&self) -> &[E] {
        &self.edges
    }
}

impl<E: GraphEdge, D: Direction> GraphType for EdgeListGraph<E, D> {
    type Dir = D;
}

impl<E: GraphEdge, D: Direction> GraphNodeOrder for EdgeListGraph<E, D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.incidence.len() as NumNodes
    }
}

impl<E: GraphEdge, D: Direction> GraphEdgeOrder for EdgeListGraph<E, D> {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl<E: GraphEdge, D: Direction> AdjacencyList for EdgeListGraph<E, D> {
    type Edge = E;

    #[inline]
    fn edge(&self, id: EdgeId) -> E {
        self.edges[id as usize]
    }

    #[inline]
    fn incidence_of(&self, u: Node) -> &[EdgeId] {
        &self.incidence[u as usize]
    }

    fn edges(&self) -> impl Iterator<Item = E> + '_ {
        self.edges.iter().copied()
    }
}

impl<E: GraphEdge, D: Direction> GraphNew for EdgeListGraph<E, D> {
    fn new(n: NumNodes) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Incidence::new(); n as usize],
            in_degrees: vec![0; n as usize],
            out_degrees: vec![0; n as usize],
            _dir: PhantomData,
        }
    }
}

impl<E: GraphEdge, D: Direction> GraphEdgeEditing for EdgeListGraph<E, D> {
    fn add_edge(&mut self, edge: impl Into<E>) -> Result<EdgeId> {
        let edge = edge.into();
        let (u, v) = edge.endpoints();

        check_vertex(u, self.number_of_nodes())?;
        check_vertex(v, self.number_of_nodes())?;
        edge.validate()?;

        Ok(self.push_edge(edge))
    }
}

impl<E: GraphEdge, D: Direction> fmt::Debug for EdgeListGraph<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vertices, {} edges",
            self.number_of_nodes(),
            self.number_of_edges()
        )?;
        for u in self.vertices() {
            write!(f, "{u}:")?;
            for &id in self.incidence_of(u) {
                write!(f, " {:?}", self.edges[id as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_edges_leave_graph_unchanged() {
        let mut graph = EdgeWeightedDigraph::new(3);
        graph.add_edge((0, 1, 1.0)).unwrap();

        assert!(matches!(
            graph.add_edge((0, 3, 1.0)),
            Err(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(matches!(
            graph.add_edge((0, 2, Weight::NAN)),
            Err(GraphError::InvalidWeight(_))
        ));

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(0), 1);
        assert_eq!(graph.in_degree_of(2), 0);
    }

    #[test]
    fn edge_ids_are_insertion_indices() {
        let mut graph = Graph::new(4);
        assert_eq!(graph.add_edge((0, 1)).unwrap(), 0);
        assert_eq!(graph.add_edge((2, 3)).unwrap(), 1);
        assert_eq!(graph.add_edge((1, 2)).unwrap(), 2);

        assert_eq!(graph.edge(1), Edge(2, 3));
        assert_eq!(graph.incidence_of(1), &[0, 2]);
        assert_eq!(graph.incidence_of(2), &[1, 2]);
        assert_eq!(graph.edges_as_slice().len(), 3);
    }

    #[test]
    fn empty_graph() {
        let graph = Digraph::new(0);
        assert!(graph.is_empty());
        assert!(graph.is_singleton());
        assert_eq!(graph.vertices().count(), 0);
    }

    #[test]
    fn clone_preserves_order() {
        let graph = EdgeWeightedGraph::from_edges(3, [(0, 1, 0.5), (0, 2, 0.25), (0, 1, 1.5)]).unwrap();
        let copy = graph.clone();

        for u in graph.vertices() {
            assert_eq!(graph.incidence_of(u), copy.incidence_of(u));
        }
        assert_eq!(graph.edges().collect::<Vec<_>>(), copy.edges().collect::<Vec<_>>());
    }
}
