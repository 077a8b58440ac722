/*!
# Maximum Flow and Minimum Cut

[`FordFulkerson`] computes a maximum `s`-`t` flow in a [`FlowNetwork`] by repeatedly augmenting
along a shortest path of the residual network (Edmonds-Karp augmenting path selection). The vertices
reachable from `s` in the final residual network form a minimum cut.

## Verification
- Before augmenting, the initial flow must be feasible: every vertex other than `s` and `t` conserves
  flow, and the net flow out of `s` equals the net flow into `t`. An infeasible initial flow is recorded
  on the result; [`FordFulkerson::is_feasible`] reports it and all flow queries fail with
  [`GraphError::InfeasibleFlow`].
- After augmenting, the result certifies itself: `s` is on the source side of the cut, `t` is not, and
  the flow value equals the capacity of the cut. A failing certificate is a defect of this crate and panics.

Capacity bounds are checked exactly; the flow on an edge is snapped to its bounds within
[`FLOATING_POINT_EPSILON`] while augmenting. Conservation and the cut capacity are sums over many edges,
so they are compared with [`FLOATING_POINT_EPSILON`] scaled by the total capacity of the network.
*/

use std::collections::VecDeque;

use super::*;

/// Maximum flow and minimum cut between two vertices of a flow network
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let network = FlowNetwork::from_edges(
///     4,
///     [(0, 1, 10.0), (0, 2, 10.0), (1, 3, 10.0), (2, 3, 10.0)],
/// ).unwrap();
/// let ff = FordFulkerson::new(&network, 0, 3).unwrap();
///
/// assert_eq!(ff.value().unwrap(), 20.0);
/// assert_eq!(ff.min_cut().unwrap(), vec![0, 1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct FordFulkerson {
    s: Node,
    t: Node,
    edges: Vec<FlowEdge>,
    value: Weight,
    tolerance: Weight,
    in_cut: NodeBitSet,
    infeasible: Option<String>,
}

impl FordFulkerson {
    /// Fails if `s` or `t` is not a vertex or `s == t`; an infeasible initial flow is recorded on the result.
    /// ** Panics if the computed flow fails its optimality certificate **
    pub fn new<G>(graph: &G, s: Node, t: Node) -> Result<Self>
    where
        G: AdjacencyList<Edge = FlowEdge> + GraphType<Dir = Residual>,
    {
        check_vertex(s, graph.number_of_nodes())?;
        check_vertex(t, graph.number_of_nodes())?;
        if s == t {
            return Err(GraphError::SourceIsSink(s));
        }

        let edges: Vec<FlowEdge> = graph.edges().collect();
        let total_capacity: Weight = edges.iter().map(|e| e.capacity()).sum();

        let mut ff = Self {
            s,
            t,
            edges,
            value: 0.0,
            tolerance: FLOATING_POINT_EPSILON * total_capacity.max(1.0),
            in_cut: graph.vertex_bitset_unset(),
            infeasible: None,
        };
        ff.value = ff.excess(t);

        if let Err(reason) = ff.check_feasibility() {
            debug!("initial flow from {s} to {t} is infeasible: {reason}");
            ff.infeasible = Some(reason);
            return Ok(ff);
        }

        let mut edge_to: Vec<Option<EdgeId>> = vec![None; graph.len()];
        let mut augmentations = 0;
        while ff.has_augmenting_path(graph, &mut edge_to) {
            let mut bottleneck = Weight::INFINITY;
            let mut v = t;
            while let Some(id) = edge_to[v as usize] {
                let edge = &ff.edges[id as usize];
                bottleneck = bottleneck.min(edge.residual_capacity_to(v));
                v = edge.other(v);
            }

            let mut v = t;
            while let Some(id) = edge_to[v as usize] {
                let edge = &mut ff.edges[id as usize];
                edge.add_residual_flow_to(v, bottleneck);
                v = edge.other(v);
            }

            ff.value += bottleneck;
            augmentations += 1;
            trace!("augmented {bottleneck} units, flow value is now {}", ff.value);
        }

        ff.certify();
        debug!(
            "maximum flow from {s} to {t} has value {} after {augmentations} augmentations",
            ff.value
        );
        Ok(ff)
    }

    /// Breadth-first search from `s` over edges with residual capacity.
    /// Marks the reached vertices in `in_cut` and returns *true* if `t` was reached.
    fn has_augmenting_path<G>(&mut self, graph: &G, edge_to: &mut [Option<EdgeId>]) -> bool
    where
        G: AdjacencyList<Edge = FlowEdge>,
    {
        self.in_cut.clear_all();
        edge_to.fill(None);

        let mut queue = VecDeque::from([self.s]);
        self.in_cut.set_bit(self.s);

        while let Some(u) = queue.pop_front() {
            for &id in graph.incidence_of(u) {
                let edge = &self.edges[id as usize];
                let v = edge.other(u);
                if edge.residual_capacity_to(v) > 0.0 && !self.in_cut.set_bit(v) {
                    edge_to[v as usize] = Some(id);
                    if v == self.t {
                        return true;
                    }
                    queue.push_back(v);
                }
            }
        }

        false
    }

    /// Returns inflow minus outflow of `v`
    fn excess(&self, v: Node) -> Weight {
        self.edges
            .iter()
            .map(|e| {
                let mut excess = 0.0;
                if e.to() == v {
                    excess += e.flow();
                }
                if e.from() == v {
                    excess -= e.flow();
                }
                excess
            })
            .sum()
    }

    /// Checks capacity bounds and flow conservation
    fn check_feasibility(&self) -> std::result::Result<(), String> {
        if let Some(e) = self
            .edges
            .iter()
            .find(|e| !(0.0..=e.capacity()).contains(&e.flow()))
        {
            return Err(format!("flow on edge {e} violates its capacity"));
        }

        if (self.value + self.excess(self.s)).abs() > self.tolerance {
            return Err(format!(
                "excess at source {} is {} but flow value is {}",
                self.s,
                self.excess(self.s),
                self.value
            ));
        }

        let n = self.in_cut.number_of_bits();
        for v in (0..n).filter(|&v| v != self.s && v != self.t) {
            let excess = self.excess(v);
            if excess.abs() > self.tolerance {
                return Err(format!("net flow into vertex {v} is {excess}"));
            }
        }

        Ok(())
    }

    /// Verifies that the flow is feasible and its value matches the capacity of the cut
    fn certify(&self) {
        if let Err(reason) = self.check_feasibility() {
            panic!("maximum flow is infeasible: {reason}");
        }

        assert!(self.in_cut.get_bit(self.s), "source is not on the source side of the cut");
        assert!(!self.in_cut.get_bit(self.t), "sink is on the source side of the cut");

        let cut_capacity: Weight = self
            .edges
            .iter()
            .filter(|e| self.in_cut.get_bit(e.from()) && !self.in_cut.get_bit(e.to()))
            .map(|e| e.capacity())
            .sum();
        assert!(
            (cut_capacity - self.value).abs() <= self.tolerance,
            "flow value {} differs from cut capacity {cut_capacity}",
            self.value
        );
    }

    fn ensure_feasible(&self) -> Result<()> {
        match &self.infeasible {
            Some(reason) => Err(GraphError::InfeasibleFlow(reason.clone())),
            None => Ok(()),
        }
    }

    /// Returns *true* if the initial flow was feasible and a maximum flow was computed
    pub fn is_feasible(&self) -> bool {
        self.infeasible.is_none()
    }

    /// Returns the value of the maximum flow
    pub fn value(&self) -> Result<Weight> {
        self.ensure_feasible()?;
        Ok(self.value)
    }

    /// Returns *true* if `v` is on the source side of the minimum cut
    /// ** Panics if `v >= n` **
    pub fn in_cut(&self, v: Node) -> Result<bool> {
        self.ensure_feasible()?;
        Ok(self.in_cut.get_bit(v))
    }

    /// Returns the vertices on the source side of the minimum cut in increasing order
    pub fn min_cut(&self) -> Result<Vec<Node>> {
        self.ensure_feasible()?;
        let n = self.in_cut.number_of_bits();
        Ok((0..n).filter(|&v| self.in_cut.get_bit(v)).collect())
    }

    /// Returns all edges of the network carrying the maximum flow, ordered by id
    pub fn flow_edges(&self) -> Result<&[FlowEdge]> {
        self.ensure_feasible()?;
        Ok(&self.edges)
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    /// Checks conservation at every inner vertex and that the cut capacity equals the value,
    /// up to rounding relative to the total capacity
    fn assert_max_flow(network: &FlowNetwork, ff: &FordFulkerson, s: Node, t: Node) {
        let edges = ff.flow_edges().unwrap();
        let value = ff.value().unwrap();
        let tolerance = 1e-9 * network.edges().map(|e| e.capacity()).sum::<Weight>().max(1.0);

        assert!(edges.iter().all(|e| (0.0..=e.capacity()).contains(&e.flow())));

        for v in network.vertices() {
            let excess: Weight = edges
                .iter()
                .map(|e| {
                    (if e.to() == v { e.flow() } else { 0.0 })
                        - (if e.from() == v { e.flow() } else { 0.0 })
                })
                .sum();

            let expected = if v == s {
                -value
            } else if v == t {
                value
            } else {
                0.0
            };
            assert!((excess - expected).abs() <= tolerance);
        }

        let cut = ff.min_cut().unwrap();
        assert!(cut.contains(&s) && !cut.contains(&t));

        let capacity: Weight = edges
            .iter()
            .filter(|e| ff.in_cut(e.from()).unwrap() && !ff.in_cut(e.to()).unwrap())
            .map(|e| e.capacity())
            .sum();
        assert!((capacity - value).abs() <= tolerance);
    }

    #[test]
    fn example_scenario() {
        let network = FlowNetwork::from_edges(
            4,
            [(0, 1, 10.0), (0, 2, 10.0), (1, 3, 10.0), (2, 3, 10.0)],
        )
        .unwrap();
        let ff = FordFulkerson::new(&network, 0, 3).unwrap();

        assert!(ff.is_feasible());
        assert_eq!(ff.value().unwrap(), 20.0);
        assert_max_flow(&network, &ff, 0, 3);
    }

    #[test]
    fn crossing_paths() {
        let network = FlowNetwork::from_edges(
            4,
            [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (0, 2, 1.0), (1, 3, 1.0)],
        )
        .unwrap();
        let ff = FordFulkerson::new(&network, 0, 3).unwrap();

        assert_eq!(ff.value().unwrap(), 2.0);
        assert_max_flow(&network, &ff, 0, 3);
    }

    #[test]
    fn random_networks() {
        crate::testing::init_logger();
        let rng = &mut Pcg64Mcg::seed_from_u64(121);
        let weights = RandomWeights::new(0.0..10.0).unwrap();

        for n in [2 as NumNodes, 10, 40] {
            for _ in 0..5 {
                let m = (2 * n as NumEdges).min(n * (n - 1));
                let network = FlowNetwork::gnm_weighted(rng, n, m, &weights).unwrap();
                let s = rng.random_range(0..n);
                let t = (s + rng.random_range(1..n)) % n;

                let ff = FordFulkerson::new(&network, s, t).unwrap();
                assert_max_flow(&network, &ff, s, t);

                // the original network is untouched
                assert!(network.edges().all(|e| e.flow() == 0.0));
            }
        }
    }

    #[test]
    fn large_fractional_capacities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(122);
        let weights = RandomWeights::new(0.0..1.0e7).unwrap();

        for _ in 0..20 {
            let network = FlowNetwork::gnm_weighted(rng, 30, 120, &weights).unwrap();
            let s = rng.random_range(0..30);
            let t = (s + rng.random_range(1..30)) % 30;

            let ff = FordFulkerson::new(&network, s, t).unwrap();
            assert!(ff.is_feasible());
            assert_max_flow(&network, &ff, s, t);
        }
    }

    #[test]
    fn fractional_initial_flow_is_feasible() {
        // the flow into the sink is summed in a different order than the flow out of the source
        let (a, b, c) = (1234567.1, 2345678.2, 3456789.3);
        let network = FlowNetwork::from_edges(
            5,
            [
                FlowEdge::with_flow(0, 1, a, a),
                FlowEdge::with_flow(0, 2, b, b),
                FlowEdge::with_flow(0, 3, c, c),
                FlowEdge::with_flow(3, 4, c, c),
                FlowEdge::with_flow(1, 4, a, a),
                FlowEdge::with_flow(2, 4, b, b),
            ],
        )
        .unwrap();
        let ff = FordFulkerson::new(&network, 0, 4).unwrap();

        assert!(ff.is_feasible());
        assert!((ff.value().unwrap() - 7037034.6).abs() < 1e-6);
        assert_eq!(ff.min_cut().unwrap(), vec![0]);
        assert_max_flow(&network, &ff, 0, 4);
    }

    #[test]
    fn initial_flow_is_kept() {
        let network = FlowNetwork::from_edges(
            3,
            [
                FlowEdge::with_flow(0, 1, 3.0, 2.0),
                FlowEdge::with_flow(1, 2, 2.0, 2.0),
                FlowEdge::new(0, 2, 1.0),
            ],
        )
        .unwrap();
        let ff = FordFulkerson::new(&network, 0, 2).unwrap();

        assert_eq!(ff.value().unwrap(), 3.0);
        assert_max_flow(&network, &ff, 0, 2);
    }

    #[test]
    fn infeasible_initial_flow() {
        let network = FlowNetwork::from_edges(
            3,
            [
                FlowEdge::with_flow(0, 1, 3.0, 2.0),
                FlowEdge::with_flow(1, 2, 3.0, 1.0),
            ],
        )
        .unwrap();
        let ff = FordFulkerson::new(&network, 0, 2).unwrap();

        assert!(!ff.is_feasible());
        assert!(matches!(ff.value(), Err(GraphError::InfeasibleFlow(_))));
        assert!(ff.min_cut().is_err());
        assert!(ff.flow_edges().is_err());
        assert!(ff.in_cut(0).is_err());
    }

    #[test]
    fn invalid_terminals() {
        let network = FlowNetwork::from_edges(2, [(0, 1, 1.0)]).unwrap();
        assert!(matches!(
            FordFulkerson::new(&network, 1, 1),
            Err(GraphError::SourceIsSink(1))
        ));
        assert!(matches!(
            FordFulkerson::new(&network, 0, 2),
            Err(GraphError::VertexOutOfRange { vertex: 2, .. })
        ));
    }
}
