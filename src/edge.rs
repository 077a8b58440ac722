/*!
# Edge Representations

All representations store their edges in an arena and refer to them by [`EdgeId`], the position
of the edge in insertion order. Four edge kinds exist:

- [`Edge`]: a plain pair of endpoints used by [`Graph`](crate::repr::Graph) and [`Digraph`](crate::repr::Digraph)
- [`WeightedEdge`]: an undirected edge with a weight
- [`DirectedEdge`]: an edge oriented from `from` to `to` with a weight
- [`FlowEdge`]: an oriented edge with a capacity and a current flow

All of them implement [`GraphEdge`]; the weighted ones additionally implement [`WeightedGraphEdge`].
*/

use std::fmt::{Debug, Display};

use stream_bitset::bitset::BitSetImpl;

use crate::{error::*, node::*};

/// Weights, capacities and flows are doubles
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Position of an edge in the edge arena of a graph
pub type EdgeId = NumEdges;

/// A BitSet over edge ids
pub type EdgeBitSet = BitSetImpl<NumEdges>;

/// Flows closer than this to `0` or to the capacity are rounded onto the bound
pub const FLOATING_POINT_EPSILON: Weight = 1e-10;

/// Common interface of all edge kinds
pub trait GraphEdge: Copy + Debug {
    /// Returns both endpoints. For oriented edges, this is `(tail, head)`.
    fn endpoints(&self) -> (Node, Node);

    /// Returns the first endpoint (the tail of an oriented edge)
    fn tail(&self) -> Node {
        self.endpoints().0
    }

    /// Returns the second endpoint (the head of an oriented edge)
    fn head(&self) -> Node {
        self.endpoints().1
    }

    /// Returns the endpoint opposite of `u`.
    /// ** Panics if `u` is not an endpoint of the edge **
    fn other(&self, u: Node) -> Node {
        let (a, b) = self.endpoints();
        if u == a {
            b
        } else {
            assert_eq!(u, b, "{u} is not an endpoint of {self:?}");
            a
        }
    }

    /// Returns *true* if both endpoints are equal
    fn is_loop(&self) -> bool {
        let (a, b) = self.endpoints();
        a == b
    }

    /// Returns a copy of the edge with switched endpoints
    fn reversed(&self) -> Self;

    /// Checks all non-endpoint attributes (weights, capacities, flows)
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Edges carrying a finite weight
pub trait WeightedGraphEdge: GraphEdge {
    fn weight(&self) -> Weight;
}

fn validate_weight(weight: Weight) -> Result<()> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}

/// An edge is defined by two nodes/endpoints.
/// Is is up to the representation whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

impl GraphEdge for Edge {
    fn endpoints(&self) -> (Node, Node) {
        (self.0, self.1)
    }

    fn reversed(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An undirected weighted edge `v - w`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdge {
    v: Node,
    w: Node,
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(v: Node, w: Node, weight: Weight) -> Self {
        Self { v, w, weight }
    }

    /// Returns either endpoint of the edge
    pub fn either(&self) -> Node {
        self.v
    }
}

impl GraphEdge for WeightedEdge {
    fn endpoints(&self) -> (Node, Node) {
        (self.v, self.w)
    }

    fn reversed(&self) -> Self {
        Self::new(self.w, self.v, self.weight)
    }

    fn validate(&self) -> Result<()> {
        validate_weight(self.weight)
    }
}

impl WeightedGraphEdge for WeightedEdge {
    fn weight(&self) -> Weight {
        self.weight
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}

/// A weighted edge oriented from `from` to `to`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectedEdge {
    from: Node,
    to: Node,
    weight: Weight,
}

impl DirectedEdge {
    pub fn new(from: Node, to: Node, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    pub fn from(&self) -> Node {
        self.from
    }

    pub fn to(&self) -> Node {
        self.to
    }
}

impl GraphEdge for DirectedEdge {
    fn endpoints(&self) -> (Node, Node) {
        (self.from, self.to)
    }

    fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }

    fn validate(&self) -> Result<()> {
        validate_weight(self.weight)
    }
}

impl WeightedGraphEdge for DirectedEdge {
    fn weight(&self) -> Weight {
        self.weight
    }
}

impl Display for DirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{} {:5.2}", self.from, self.to, self.weight)
    }
}

impl From<(Node, Node, Weight)> for DirectedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&DirectedEdge> for DirectedEdge {
    fn from(value: &DirectedEdge) -> Self {
        *value
    }
}

/// An edge `from -> to` of a flow network with `0 <= flow <= capacity`.
///
/// In the residual network, the edge can be traversed from both endpoints:
/// forward with the remaining capacity, backward by cancelling flow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowEdge {
    from: Node,
    to: Node,
    capacity: Weight,
    flow: Weight,
}

impl FlowEdge {
    /// Creates an edge without flow
    pub fn new(from: Node, to: Node, capacity: Weight) -> Self {
        Self::with_flow(from, to, capacity, 0.0)
    }

    /// Creates an edge carrying an initial flow.
    /// Capacity and flow are checked once the edge is added to a network.
    pub fn with_flow(from: Node, to: Node, capacity: Weight, flow: Weight) -> Self {
        Self {
            from,
            to,
            capacity,
            flow,
        }
    }

    pub fn from(&self) -> Node {
        self.from
    }

    pub fn to(&self) -> Node {
        self.to
    }

    pub fn capacity(&self) -> Weight {
        self.capacity
    }

    pub fn flow(&self) -> Weight {
        self.flow
    }

    /// Returns the capacity left when moving from `other(v)` towards `v`:
    /// the unused capacity if `v` is the head, the cancellable flow if `v` is the tail.
    /// ** Panics if `v` is not an endpoint **
    pub fn residual_capacity_to(&self, v: Node) -> Weight {
        if v == self.to {
            self.capacity - self.flow
        } else {
            assert_eq!(v, self.from, "{v} is not an endpoint of {self}");
            self.flow
        }
    }

    /// Pushes `delta` units of residual flow towards `v`: increases the flow if `v` is the head and
    /// cancels flow if `v` is the tail. Results within [`FLOATING_POINT_EPSILON`] of `0` or of the
    /// capacity are rounded onto the bound.
    /// ** Panics if `v` is not an endpoint, `delta` is negative or the bounds are violated **
    pub fn add_residual_flow_to(&mut self, v: Node, delta: Weight) {
        assert!(delta >= 0.0, "residual flow must be non-negative, got {delta}");

        if v == self.to {
            self.flow += delta;
        } else {
            assert_eq!(v, self.from, "{v} is not an endpoint of {self}");
            self.flow -= delta;
        }

        if (self.flow - self.capacity).abs() <= FLOATING_POINT_EPSILON {
            self.flow = self.capacity;
        }
        if self.flow.abs() <= FLOATING_POINT_EPSILON {
            self.flow = 0.0;
        }

        assert!(
            (0.0..=self.capacity).contains(&self.flow),
            "flow of {self} left its bounds"
        );
    }
}

impl GraphEdge for FlowEdge {
    fn endpoints(&self) -> (Node, Node) {
        (self.from, self.to)
    }

    fn reversed(&self) -> Self {
        Self::with_flow(self.to, self.from, self.capacity, self.flow)
    }

    fn validate(&self) -> Result<()> {
        if !(self.capacity >= 0.0 && self.capacity.is_finite()) {
            return Err(GraphError::InvalidCapacity(self.capacity));
        }
        if !(0.0..=self.capacity).contains(&self.flow) {
            return Err(GraphError::InvalidFlow {
                flow: self.flow,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Display for FlowEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}->{} {}/{}",
            self.from, self.to, self.flow, self.capacity
        )
    }
}

impl From<(Node, Node, Weight)> for FlowEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&FlowEdge> for FlowEdge {
    fn from(value: &FlowEdge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_endpoint() {
        let e = WeightedEdge::new(3, 7, 0.5);
        assert_eq!(e.other(3), 7);
        assert_eq!(e.other(7), 3);
        assert_eq!(e.either(), 3);

        let d = DirectedEdge::new(1, 1, -2.0);
        assert!(d.is_loop());
        assert_eq!(d.other(1), 1);
    }

    #[test]
    #[should_panic]
    fn other_of_foreign_vertex() {
        WeightedEdge::new(0, 1, 1.0).other(2);
    }

    #[test]
    fn weights_are_validated() {
        assert!(WeightedEdge::new(0, 1, 1.5).validate().is_ok());
        assert!(WeightedEdge::new(0, 1, Weight::NAN).validate().is_err());
        assert!(DirectedEdge::new(0, 1, Weight::INFINITY).validate().is_err());
        assert!(DirectedEdge::new(0, 1, -3.0).validate().is_ok());
    }

    #[test]
    fn flow_edge_bounds() {
        assert!(FlowEdge::new(0, 1, 2.0).validate().is_ok());
        assert!(FlowEdge::new(0, 1, -1.0).validate().is_err());
        assert!(FlowEdge::new(0, 1, Weight::NAN).validate().is_err());
        assert!(FlowEdge::with_flow(0, 1, 2.0, 3.0).validate().is_err());
        assert!(FlowEdge::with_flow(0, 1, 2.0, -0.5).validate().is_err());
    }

    #[test]
    fn residual_flow() {
        let mut e = FlowEdge::new(0, 1, 10.0);
        assert_eq!(e.residual_capacity_to(1), 10.0);
        assert_eq!(e.residual_capacity_to(0), 0.0);

        e.add_residual_flow_to(1, 4.0);
        assert_eq!(e.flow(), 4.0);
        assert_eq!(e.residual_capacity_to(1), 6.0);
        assert_eq!(e.residual_capacity_to(0), 4.0);

        e.add_residual_flow_to(0, 1.5);
        assert_eq!(e.flow(), 2.5);
    }

    #[test]
    fn residual_flow_rounds_to_bounds() {
        let mut e = FlowEdge::new(0, 1, 1.0);
        e.add_residual_flow_to(1, 1.0 - 1e-12);
        assert_eq!(e.flow(), 1.0);

        e.add_residual_flow_to(0, 1.0 - 1e-12);
        assert_eq!(e.flow(), 0.0);
    }

    #[test]
    #[should_panic]
    fn residual_flow_beyond_capacity() {
        FlowEdge::new(0, 1, 1.0).add_residual_flow_to(1, 2.0);
    }
}
