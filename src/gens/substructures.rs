/*!
# Substructure Generators

Utility methods to add **paths** and **cycles** to an already existing unweighted graph.

# Example

```rust
use wgraphs::{prelude::*, gens::*};

let mut g = Digraph::new(5);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(
    g.edges().collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(4, 2)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a path.
    /// Fails on the first node that is not a vertex of the graph; earlier edges remain.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes in order with a cycle, i.e. a path closed by an edge from the last
    /// node back to the first. A single node receives a self-loop.
    /// Fails on the first node that is not a vertex of the graph; earlier edges remain.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
    G::Edge: From<Edge>,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(Edge(u, v))?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(Edge(prev, cur))?;
                prev = cur;
            }

            self.add_edge(Edge(prev, first))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        let mut g = Graph::new(6);
        g.connect_path([]).unwrap();
        g.connect_path([1]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([0, 3, 1, 4]).unwrap();
        assert_eq!(g.edges().collect_vec(), vec![Edge(0, 3), Edge(3, 1), Edge(1, 4)]);

        assert!(g.connect_path([2, 5, 6]).is_err());
        assert_eq!(g.number_of_edges(), 4);
    }

    #[test]
    fn test_connect_cycle() {
        let mut g = Digraph::new(6);
        g.connect_cycle([]).unwrap();
        assert_eq!(g.number_of_edges(), 0);

        g.connect_cycle([1]).unwrap();
        assert_eq!(g.edges().collect_vec(), vec![Edge(1, 1)]);

        let mut g = Digraph::new(6);
        g.connect_cycle([0, 3, 1, 4]).unwrap();
        assert_eq!(
            g.edges().collect_vec(),
            vec![Edge(0, 3), Edge(3, 1), Edge(1, 4), Edge(4, 0)]
        );
    }
}
