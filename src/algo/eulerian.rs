/*!
# Eulerian Cycles and Paths

An Eulerian path uses every edge exactly once; an Eulerian cycle additionally ends where it starts.
Existence is decided from vertex degrees and connectivity (see [`EulerianGraph`]); the walk itself is
constructed with Hierholzer's algorithm on an explicit stack, marking every consumed edge id in an
[`EdgeBitSet`] so that undirected edges, which are listed at both endpoints, are used only once.

Isolated vertices are ignored. A graph without edges has no Eulerian cycle, while its Eulerian path
consists of its first vertex only.
*/

use super::{traversal::*, *};

/// Degree conditions for Eulerian walks
pub trait EulerianGraph: AdjacencyList {
    /// Returns the vertex an Eulerian cycle (or path, if `closed` is *false*) has to start at,
    /// provided the degree conditions hold and the graph has at least one edge.
    fn eulerian_start(&self, closed: bool) -> Option<Node>;

    /// Returns *true* if no edge is incident to `u`
    /// ** Panics if `u >= n` **
    fn is_isolated(&self, u: Node) -> bool;
}

impl<E: GraphEdge> EulerianGraph for EdgeListGraph<E, Undirected> {
    /// Every vertex has even degree (cycle), or exactly two vertices have odd degree (path);
    /// the path starts at the first of them
    fn eulerian_start(&self, closed: bool) -> Option<Node> {
        let mut odd = self.vertices().filter(|&u| self.degree_of(u) % 2 == 1);

        match (odd.next(), odd.next(), odd.next()) {
            (None, _, _) => self.vertices_with_neighbors().next(),
            (Some(u), Some(_), None) if !closed => Some(u),
            _ => None,
        }
    }

    fn is_isolated(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }
}

impl<E: GraphEdge> EulerianGraph for EdgeListGraph<E, Directed> {
    /// Every vertex is balanced (cycle), or one vertex has one more outgoing than incoming edge and
    /// one vertex has one more incoming than outgoing edge (path); the path starts at the former
    fn eulerian_start(&self, closed: bool) -> Option<Node> {
        let mut surplus = None;
        let mut deficit = None;

        for u in self.vertices() {
            match self.out_degree_of(u) as i64 - self.in_degree_of(u) as i64 {
                0 => {}
                1 if !closed && surplus.is_none() => surplus = Some(u),
                -1 if !closed && deficit.is_none() => deficit = Some(u),
                _ => return None,
            }
        }

        match (surplus, deficit) {
            (Some(u), Some(_)) => Some(u),
            (None, None) => self.vertices().find(|&u| self.out_degree_of(u) > 0),
            _ => None,
        }
    }

    fn is_isolated(&self, u: Node) -> bool {
        self.total_degree_of(u) == 0
    }
}

/// Walks every edge once, starting at `start`; returns `None` if an edge is left over.
/// The vertices of the walk are returned in walking order.
fn hierholzer<G: EulerianGraph>(graph: &G, start: Node) -> Option<Vec<Node>> {
    let m = graph.number_of_edges() as usize;

    let reached = DepthFirstSearch::new(graph, [start]).ok()?;
    if !graph.vertices().all(|u| graph.is_isolated(u) || reached.marked(u)) {
        return None;
    }

    let mut position = vec![0usize; graph.len()];
    let mut consumed = graph.edge_bitset_unset();
    let mut stack = vec![start];
    let mut walk = Vec::with_capacity(m + 1);

    while let Some(&u) = stack.last() {
        let incidence = graph.incidence_of(u);
        let pos = &mut position[u as usize];
        while *pos < incidence.len() && consumed.get_bit(incidence[*pos]) {
            *pos += 1;
        }

        if *pos == incidence.len() {
            walk.push(u);
            stack.pop();
        } else {
            let id = incidence[*pos];
            *pos += 1;
            consumed.set_bit(id);
            stack.push(graph.head_of(u, id));
        }
    }

    walk.reverse();
    trace!("hierholzer walked {} of {m} edges", walk.len().saturating_sub(1));

    (walk.len() == m + 1).then_some(walk)
}

/// An Eulerian cycle, if it exists
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Digraph::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 2), (2, 0)]).unwrap();
/// let euler = EulerianCycle::new(&g);
///
/// assert_eq!(euler.cycle(), Some(&[0, 1, 2, 0, 2, 0][..]));
/// ```
#[derive(Clone, Debug)]
pub struct EulerianCycle {
    cycle: Option<Vec<Node>>,
}

impl EulerianCycle {
    pub fn new<G: EulerianGraph>(graph: &G) -> Self {
        let cycle = graph
            .eulerian_start(true)
            .and_then(|start| hierholzer(graph, start));

        debug!(
            "graph with {} edges has {}Eulerian cycle",
            graph.number_of_edges(),
            if cycle.is_some() { "an " } else { "no " }
        );

        Self { cycle }
    }

    /// Returns *true* if the graph has an Eulerian cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the `m + 1` vertices of the cycle; the first and last vertex coincide
    pub fn cycle(&self) -> Option<&[Node]> {
        self.cycle.as_deref()
    }
}

/// An Eulerian path, if it exists
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// let euler = EulerianPath::new(&g);
///
/// assert_eq!(euler.path(), Some(&[2, 1, 0, 2, 3][..]));
/// ```
#[derive(Clone, Debug)]
pub struct EulerianPath {
    path: Option<Vec<Node>>,
}

impl EulerianPath {
    pub fn new<G: EulerianGraph>(graph: &G) -> Self {
        let path = if graph.is_singleton() {
            graph.vertices().next().map(|u| vec![u])
        } else {
            graph
                .eulerian_start(false)
                .and_then(|start| hierholzer(graph, start))
        };

        Self { path }
    }

    /// Returns *true* if the graph has an Eulerian path
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the `m + 1` vertices of the path in walking order
    pub fn path(&self) -> Option<&[Node]> {
        self.path.as_deref()
    }
}
