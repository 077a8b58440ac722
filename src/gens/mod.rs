/*!
# Graph Generators

This module provides builders for seeded random graph generators as well as helpers to add
deterministic substructures (paths and cycles) to existing graphs.

Each generator produces plain [`Edge`]s through [`GraphGenerator`], either as a complete list or
as a lazy stream. The typical workflow is:

1. Create a generator instance (e.g., `Gnm::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).edges(m)`).
3. Generate edges via `generate()` or `stream()`.

Weights are attached afterwards with [`RandomWeights`]. The [`RandomGraph`] and
[`RandomWeightedGraph`] traits combine both steps into constructors of whole representations.

Supported models include:
- G(n,m): uniform simple graphs with a fixed number of nodes and edges
- random spanning trees rooted at a given vertex
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod gnm;
mod substructures;
mod tree;
mod weights;

pub use gnm::*;
pub use substructures::*;
pub use tree::*;
pub use weights::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of edges in the graph generator.
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Builds unweighted representations from random models
pub trait RandomGraph: Sized {
    /// Creates a random simple `G(n,m)` graph with exactly `m` edges and no self-loops.
    /// ** Panics if `m` exceeds the number of possible edges **
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng;

    /// Creates a random spanning tree on `n` nodes with all edges oriented away from `0`
    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphEdgeEditing,
    G::Edge: From<Edge>,
{
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Result<Self>
    where
        R: Rng,
    {
        let edges = Gnm::new()
            .nodes(n)
            .edges(m)
            .undirected(!Self::is_directed())
            .generate(rng);
        Self::from_edges(n, edges)
    }

    fn random_tree<R>(rng: &mut R, n: NumNodes) -> Result<Self>
    where
        R: Rng,
    {
        let edges = RandomTree::new().nodes(n).generate(rng);
        Self::from_edges(n, edges)
    }
}

/// Builds weighted representations (and flow networks, using the weight as capacity) from random models
pub trait RandomWeightedGraph: Sized {
    /// Creates a random simple `G(n,m)` graph whose weights are drawn uniformly from `weights`
    /// ** Panics if `m` exceeds the number of possible edges **
    fn gnm_weighted<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: &RandomWeights) -> Result<Self>
    where
        R: Rng;

    /// Creates a random spanning tree oriented away from `0` whose weights are drawn uniformly from `weights`
    fn random_tree_weighted<R>(rng: &mut R, n: NumNodes, weights: &RandomWeights) -> Result<Self>
    where
        R: Rng;
}

impl<G> RandomWeightedGraph for G
where
    G: GraphEdgeEditing,
    G::Edge: From<(Node, Node, Weight)>,
{
    fn gnm_weighted<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: &RandomWeights) -> Result<Self>
    where
        R: Rng,
    {
        let edges = Gnm::new()
            .nodes(n)
            .edges(m)
            .undirected(!Self::is_directed())
            .generate(rng);
        let weighted: Vec<_> = weights.weigh(rng, edges).collect();
        Self::from_edges(n, weighted)
    }

    fn random_tree_weighted<R>(rng: &mut R, n: NumNodes, weights: &RandomWeights) -> Result<Self>
    where
        R: Rng,
    {
        let edges = RandomTree::new().nodes(n).generate(rng);
        let weighted: Vec<_> = weights.weigh(rng, edges).collect();
        Self::from_edges(n, weighted)
    }
}
