/*!
# Errors

Every fallible operation of this crate returns [`Result<T>`] with a [`GraphError`].
Errors fall into three groups:

- **Invalid input**: rejected while constructing or reading a graph, before anything is built.
- **Precondition violations**: the graph given to an algorithm does not satisfy its requirements.
- **Infeasibility**: detected while an algorithm runs; the result object records it and every
  query depending on the invalidated result returns the error.

Internal invariant violations (e.g. a maximum flow failing its own optimality certificate) are
defects of this crate and panic instead.
*/

use thiserror::Error;

use crate::{edge::Weight, node::*};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is not between 0 and {}", num_nodes.saturating_sub(1))]
    VertexOutOfRange { vertex: i64, num_nodes: NumNodes },

    #[error("weight {0} is not a finite number")]
    InvalidWeight(Weight),

    #[error("capacity {0} is negative or not finite")]
    InvalidCapacity(Weight),

    #[error("flow {flow} is not between 0 and the capacity {capacity}")]
    InvalidFlow { flow: Weight, capacity: Weight },

    #[error("edge {from}-{to} has negative weight {weight}")]
    NegativeWeight { from: Node, to: Node, weight: Weight },

    #[error("graph is not acyclic")]
    NotAcyclic,

    #[error("source equals sink {0}")]
    SourceIsSink(Node),

    #[error("negative cycle reachable from source")]
    NegativeCycle,

    #[error("initial flow is infeasible: {0}")]
    InfeasibleFlow(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn vertex_out_of_range(vertex: impl Into<i64>, num_nodes: NumNodes) -> Self {
        Self::VertexOutOfRange {
            vertex: vertex.into(),
            num_nodes,
        }
    }
}

/// Returns an error if `u` is not a vertex of a graph with `n` vertices
pub(crate) fn check_vertex(u: Node, n: NumNodes) -> Result<()> {
    if u < n {
        Ok(())
    } else {
        Err(GraphError::vertex_out_of_range(u, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::vertex_out_of_range(7, 5).to_string(),
            "vertex 7 is not between 0 and 4"
        );
        assert_eq!(
            GraphError::Parse {
                line: 3,
                reason: "expected weight".into()
            }
            .to_string(),
            "line 3: expected weight"
        );
        assert!(check_vertex(4, 5).is_ok());
        assert!(matches!(
            check_vertex(5, 5),
            Err(GraphError::VertexOutOfRange { vertex: 5, .. })
        ));
    }
}
