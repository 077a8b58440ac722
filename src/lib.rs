/*!
`wgraphs` is a graph data structure & algorithms library for **w**eighted graphs: vertices are numbered
`0` to `n - 1`, edges may carry a weight, a capacity and a flow.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
All graphs are instances of one generic edge-list type, [`EdgeListGraph`](crate::repr::EdgeListGraph),
parameterized by the kind of edge it stores and its orientation:

- [`Graph`](crate::repr::Graph) / [`Digraph`](crate::repr::Digraph): unweighted, with [`Edge`](crate::edge::Edge)
- [`EdgeWeightedGraph`](crate::repr::EdgeWeightedGraph): undirected, with [`WeightedEdge`](crate::edge::WeightedEdge)
- [`EdgeWeightedDigraph`](crate::repr::EdgeWeightedDigraph): directed, with [`DirectedEdge`](crate::edge::DirectedEdge)
- [`FlowNetwork`](crate::repr::FlowNetwork): capacitated edges carrying a flow, with [`FlowEdge`](crate::edge::FlowEdge)

Parallel edges and self-loops are allowed everywhere. Edges are identified by their insertion index
and every vertex lists its incident edges in insertion order, so all algorithms are deterministic.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all representations,
- [`algo`] includes traversal, cycles, topological orders, connectivity, bipartiteness, Eulerian walks,
  shortest and longest paths, minimum spanning trees and maximum flows,
- [`gens`] includes seeded random graph generators (and deterministic substructures such as paths/cycles),
- [`io`] includes readers and writers for the plain-text `V E (u v [w])*` format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let g = EdgeWeightedDigraph::from_edges(
    4,
    [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0)],
).unwrap();

let sp = DijkstraPaths::new(&g, 0).unwrap();
assert_eq!(sp.dist_to(3), 4.0);
assert_eq!(sp.vertices_to(3), Some(vec![0, 1, 2, 3]));
```

# Errors and Logging

Fallible operations return [`error::Result`]. The library emits diagnostics through the [`log`] facade
and never installs a logger itself.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes and edges, the error type, all basic graph operation traits
/// as well as all representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
