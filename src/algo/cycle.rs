/*!
# Cycle Detection

[`Cycle`] finds a cycle in an undirected graph, [`DirectedCycle`] a directed cycle in an oriented
graph (weighted or not). Both are built on [`DepthFirstWalk`] and report the cycle as a closed
vertex sequence `[v, ..., v]` together with the ids of the edges along it.

A self-loop is a cycle of length one and two parallel edges form a cycle of length two.
*/

use super::{traversal::*, *};

/// A closed walk `[v, ..., v]` and the ids of its edges in walking order
#[derive(Clone, Debug, PartialEq, Eq)]
struct FoundCycle {
    vertices: Vec<Node>,
    edges: Vec<EdgeId>,
}

/// Finds a cycle in an undirected graph
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap();
/// let cycle = Cycle::new(&g);
///
/// assert!(cycle.has_cycle());
/// assert_eq!(cycle.cycle(), Some(&[1, 2, 3, 1][..]));
/// ```
#[derive(Clone, Debug)]
pub struct Cycle {
    cycle: Option<FoundCycle>,
}

impl Cycle {
    /// Searches for self-loops first, then for parallel edges and finally for a back edge
    /// of a depth-first search to an ancestor other than the parent.
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let cycle = if let Some(id) = find_self_loop(graph) {
            let u = graph.edge(id).tail();
            Some(FoundCycle {
                vertices: vec![u, u],
                edges: vec![id],
            })
        } else if let Some((first, second)) = find_parallel_edges(graph) {
            let (u, v) = graph.edge(first).endpoints();
            Some(FoundCycle {
                vertices: vec![u, v, u],
                edges: vec![first, second],
            })
        } else {
            search_back_edge(graph, true)
        };

        Self { cycle }
    }

    /// Returns *true* if the graph has a cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the vertices of a cycle, starting and ending with the same vertex
    pub fn cycle(&self) -> Option<&[Node]> {
        self.cycle.as_ref().map(|c| c.vertices.as_slice())
    }

    /// Returns the ids of the edges of the cycle in the order they are walked
    pub fn cycle_edges(&self) -> Option<&[EdgeId]> {
        self.cycle.as_ref().map(|c| c.edges.as_slice())
    }
}

/// Finds a directed cycle in an oriented graph
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// let cycle = DirectedCycle::new(&g);
///
/// assert_eq!(cycle.cycle(), Some(&[0, 1, 2, 0][..]));
/// assert_eq!(cycle.cycle_edges(), Some(&[0, 1, 2][..]));
/// ```
#[derive(Clone, Debug)]
pub struct DirectedCycle {
    cycle: Option<FoundCycle>,
}

impl DirectedCycle {
    /// Runs a depth-first search from every vertex until an edge into a vertex on the current
    /// search path is found
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Directed>,
    {
        Self {
            cycle: search_back_edge(graph, false),
        }
    }

    /// Returns *true* if the graph has a directed cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the vertices of a directed cycle, starting and ending with the same vertex
    pub fn cycle(&self) -> Option<&[Node]> {
        self.cycle.as_ref().map(|c| c.vertices.as_slice())
    }

    /// Returns the ids of the edges of the cycle in the order they are walked
    pub fn cycle_edges(&self) -> Option<&[EdgeId]> {
        self.cycle.as_ref().map(|c| c.edges.as_slice())
    }
}

/// Returns the id of the first self-loop, if any
fn find_self_loop<G: AdjacencyList>(graph: &G) -> Option<EdgeId> {
    graph
        .edges()
        .position(|e| e.is_loop())
        .map(|i| i as EdgeId)
}

/// Returns the ids of two distinct edges connecting the same pair of distinct vertices, if any
fn find_parallel_edges<G: AdjacencyList>(graph: &G) -> Option<(EdgeId, EdgeId)> {
    let mut seen_at: Vec<Option<EdgeId>> = vec![None; graph.len()];

    for u in graph.vertices() {
        for &id in graph.incidence_of(u) {
            let v = graph.head_of(u, id);
            if v == u {
                continue;
            }
            if let Some(first) = seen_at[v as usize] {
                return Some((first, id));
            }
            seen_at[v as usize] = Some(id);
        }
        for v in graph.neighbors_of(u) {
            seen_at[v as usize] = None;
        }
    }

    None
}

/// Depth-first search for an edge into a vertex on the search path.
/// With `skip_tree_edges`, the tree edge a vertex was discovered by is not followed back.
fn search_back_edge<G: AdjacencyList>(graph: &G, skip_tree_edges: bool) -> Option<FoundCycle> {
    let mut edge_to: Vec<Option<EdgeId>> = vec![None; graph.len()];
    let mut on_stack = graph.vertex_bitset_unset();
    let mut walk = DepthFirstWalk::new(graph);

    for root in graph.vertices_range() {
        if !walk.start_at(root) {
            continue;
        }

        while let Some(event) = walk.next() {
            match event {
                DfsEvent::Discover { node, edge } => {
                    edge_to[node as usize] = edge;
                    on_stack.set_bit(node);
                }
                DfsEvent::Finish(u) => {
                    on_stack.clear_bit(u);
                }
                DfsEvent::NonTreeEdge { from, edge, to } => {
                    if skip_tree_edges && edge_to[from as usize] == Some(edge) {
                        continue;
                    }
                    if !on_stack.get_bit(to) {
                        continue;
                    }

                    let mut vertices: Vec<Node> = walk.stack().skip_while(|&x| x != to).collect();
                    let mut edges: Vec<EdgeId> = vertices[1..]
                        .iter()
                        .filter_map(|&x| edge_to[x as usize])
                        .collect();
                    vertices.push(to);
                    edges.push(edge);

                    trace!("back edge {from} -> {to} closes a cycle of length {}", edges.len());
                    return Some(FoundCycle { vertices, edges });
                }
            }
        }
    }

    None
}

/// Provides cycle queries directly on graphs
pub trait Acyclicity {
    /// Returns *true* if the graph contains a cycle
    fn has_cycle(&self) -> bool;

    /// Returns *true* if the graph contains no cycle
    fn is_acyclic(&self) -> bool {
        !self.has_cycle()
    }
}

impl<E: GraphEdge> Acyclicity for EdgeListGraph<E, Undirected> {
    fn has_cycle(&self) -> bool {
        Cycle::new(self).has_cycle()
    }
}

impl<E: GraphEdge> Acyclicity for EdgeListGraph<E, Directed> {
    fn has_cycle(&self) -> bool {
        DirectedCycle::new(self).has_cycle()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// Checks that the reported vertices and edges describe the same closed walk
    fn assert_closed_walk<G: AdjacencyList>(graph: &G, vertices: &[Node], edges: &[EdgeId]) {
        assert_eq!(vertices.first(), vertices.last());
        assert_eq!(vertices.len(), edges.len() + 1);
        assert!(edges.iter().all_unique());

        for (i, &id) in edges.iter().enumerate() {
            assert!(graph.incidence_of(vertices[i]).contains(&id));
            assert_eq!(graph.head_of(vertices[i], id), vertices[i + 1]);
        }
    }

    #[test]
    fn undirected_shortcuts() {
        let g = Graph::from_edges(3, [(0, 1), (2, 2)]).unwrap();
        let cycle = Cycle::new(&g);
        assert_eq!(cycle.cycle(), Some(&[2, 2][..]));
        assert_eq!(cycle.cycle_edges(), Some(&[1][..]));

        let g = Graph::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
        let cycle = Cycle::new(&g);
        assert_eq!(cycle.cycle(), Some(&[1, 2, 1][..]));
        assert_eq!(cycle.cycle_edges(), Some(&[1, 2][..]));
    }

    #[test]
    fn trees_are_acyclic() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for n in [1 as NumNodes, 2, 10, 100] {
            let tree = Graph::random_tree(rng, n).unwrap();
            assert!(!Cycle::new(&tree).has_cycle());
            assert!(tree.is_acyclic());

            let dag = Digraph::random_tree(rng, n).unwrap();
            assert!(dag.is_acyclic());
        }

        let g = Graph::new(0);
        assert!(!Cycle::new(&g).has_cycle());
    }

    #[test]
    fn undirected_random_cycles() {
        let rng = &mut Pcg64Mcg::seed_from_u64(32);

        for n in [3 as NumNodes, 10, 50] {
            let mut g = Graph::random_tree(rng, n).unwrap();
            g.connect_cycle([0, n / 2, n - 1]).unwrap();

            let cycle = Cycle::new(&g);
            let (vertices, edges) = (cycle.cycle().unwrap(), cycle.cycle_edges().unwrap());
            assert!(vertices.len() >= 3);
            assert_closed_walk(&g, vertices, edges);
        }
    }

    #[test]
    fn directed_cycles() {
        let g = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (1, 3)]).unwrap();
        assert!(!DirectedCycle::new(&g).has_cycle());

        let g = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap();
        let cycle = DirectedCycle::new(&g);
        assert_eq!(cycle.cycle(), Some(&[1, 2, 3, 1][..]));
        assert_closed_walk(&g, cycle.cycle().unwrap(), cycle.cycle_edges().unwrap());

        // a pair of opposite edges is a directed cycle
        let g = Digraph::from_edges(2, [(0, 1), (1, 0)]).unwrap();
        assert_eq!(DirectedCycle::new(&g).cycle(), Some(&[0, 1, 0][..]));

        let g = EdgeWeightedDigraph::from_edges(2, [(0, 1, 1.0), (1, 1, -1.0)]).unwrap();
        let cycle = DirectedCycle::new(&g);
        assert_eq!(cycle.cycle(), Some(&[1, 1][..]));
        assert_eq!(cycle.cycle_edges(), Some(&[1][..]));
    }

    #[test]
    fn directed_random_cycles() {
        let rng = &mut Pcg64Mcg::seed_from_u64(33);

        for n in [2 as NumNodes, 10, 50] {
            let mut g = Digraph::random_tree(rng, n).unwrap();
            assert!(!g.has_cycle());

            // closing edge from a leaf back to the root
            let leaf = g.vertices().find(|&u| g.out_degree_of(u) == 0).unwrap();
            g.add_edge((leaf, 0)).unwrap();

            let cycle = DirectedCycle::new(&g);
            assert_closed_walk(&g, cycle.cycle().unwrap(), cycle.cycle_edges().unwrap());
        }
    }
}
