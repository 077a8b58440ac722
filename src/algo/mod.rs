/*!
# Graph Algorithms

This module provides the classical **graph algorithms** on top of the representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, cycles, orders, connectivity, shortest paths, spanning trees and flows.

Most algorithms are *result objects*: the constructor runs the computation once and the returned
value answers queries. Queries about a specific vertex panic if the vertex is out of range; constructors
taking a source vertex return [`GraphError::VertexOutOfRange`] instead.
*/

mod acyclic_paths;
mod bellman_ford;
mod bipartite;
mod connectivity;
mod cycle;
mod eulerian;
mod mst;
mod network_flow;
mod order;
mod shortest_paths;
mod traversal;

use crate::{error::*, prelude::*, utils::*};
use log::{debug, trace};

pub use acyclic_paths::*;
pub use bellman_ford::*;
pub use bipartite::*;
pub use connectivity::*;
pub use cycle::*;
pub use eulerian::*;
pub use mst::*;
pub use network_flow::*;
pub use order::*;
pub use shortest_paths::*;
pub use traversal::*;
