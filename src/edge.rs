/*!
# Edges, Arcs and Links

- [`Edge`] is a plain pair of endpoints used to describe graphs and to compare edge sets.
  Whether it is directed is up to the caller.
- [`Arc`] is the weighted directed link stored by [`DirectedGraph`](crate::repr::DirectedGraph).
  Two arcs are equal iff they connect the same ordered pair; the weight is ignored.
- [`UndirectedEdge`] is the weighted link stored by [`UndirectedGraph`](crate::repr::UndirectedGraph).
  Equality is symmetric and self-loops can not be constructed.

Both link types implement [`Link`], which is all the adjacency structures need to know about them.
*/

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::{GraphError, Node, Result};

/// An edge is defined by two nodes/endpoints.
/// Is is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Edge weights. Unweighted links carry `0.0`.
pub type Weight = f64;

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

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
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

/// The capability shared by directed arcs and undirected edges: two endpoints and a weight.
pub trait Link: Copy {
    /// Returns both endpoints. For arcs this is `Edge(source, sink)`.
    fn endpoints(&self) -> Edge;

    /// Returns the weight of the link
    fn weight(&self) -> Weight;

    /// Returns the endpoint opposite to `u`.
    /// If `u` is not an endpoint, the first endpoint is returned.
    fn other_endpoint(&self, u: Node) -> Node {
        let Edge(a, b) = self.endpoints();
        if u == a { b } else { a }
    }
}

/// A weighted directed edge `source -> sink`. Self-loops are allowed.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    source: Node,
    sink: Node,
    weight: Weight,
}

impl Arc {
    /// Creates an unweighted arc
    pub fn new(source: Node, sink: Node) -> Self {
        Self::with_weight(source, sink, 0.0)
    }

    /// Creates an arc with a given weight
    pub fn with_weight(source: Node, sink: Node, weight: Weight) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }

    /// Returns the arc `sink -> source` with the same weight
    pub fn reversed(&self) -> Self {
        Self::with_weight(self.sink, self.source, self.weight)
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.sink == other.sink
    }
}

impl Eq for Arc {}

impl Hash for Arc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}->{})", self.source, self.sink)
    }
}

impl Link for Arc {
    fn endpoints(&self) -> Edge {
        Edge(self.source, self.sink)
    }

    fn weight(&self) -> Weight {
        self.weight
    }
}

impl From<Edge> for Arc {
    fn from(Edge(u, v): Edge) -> Self {
        Arc::new(u, v)
    }
}

/// A weighted undirected edge `{u, v}` with `u != v`.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedEdge {
    u: Node,
    v: Node,
    weight: Weight,
}

impl UndirectedEdge {
    /// Creates an unweighted edge.
    /// Fails with [`GraphError::SelfLoop`] if `u == v`.
    pub fn try_new(u: Node, v: Node) -> Result<Self> {
        Self::try_with_weight(u, v, 0.0)
    }

    /// Creates a weighted edge.
    /// Fails with [`GraphError::SelfLoop`] if `u == v`.
    pub fn try_with_weight(u: Node, v: Node, weight: Weight) -> Result<Self> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        Ok(Self { u, v, weight })
    }

    /// Returns one of the endpoints, namely the first one passed at construction
    pub fn either(&self) -> Node {
        self.u
    }
}

impl PartialEq for UndirectedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints().normalized() == other.endpoints().normalized()
    }
}

impl Eq for UndirectedEdge {}

impl Hash for UndirectedEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().normalized().hash(state);
    }
}

impl Display for UndirectedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.u, self.v)
    }
}

impl Link for UndirectedEdge {
    fn endpoints(&self) -> Edge {
        Edge(self.u, self.v)
    }

    fn weight(&self) -> Weight {
        self.weight
    }
}

#[cfg(test)]
mod test {
    use fxhash::FxHashSet;

    use super::*;

    #[test]
    fn arc_equality_is_directed() {
        assert_eq!(Arc::new(1, 2), Arc::with_weight(1, 2, 5.0));
        assert_ne!(Arc::new(1, 2), Arc::new(2, 1));
        assert_eq!(Arc::new(1, 2).reversed(), Arc::new(2, 1));
        assert_eq!(Arc::new(3, 3).other_endpoint(3), 3);
    }

    #[test]
    fn undirected_edge_is_symmetric() {
        let a = UndirectedEdge::try_new(1, 2).unwrap();
        let b = UndirectedEdge::try_with_weight(2, 1, 3.0).unwrap();
        assert_eq!(a, b);

        let set: FxHashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);

        assert_eq!(a.other_endpoint(1), 2);
        assert_eq!(a.other_endpoint(2), 1);
    }

    #[test]
    fn undirected_self_loop() {
        assert!(matches!(
            UndirectedEdge::try_new(4, 4),
            Err(GraphError::SelfLoop(4))
        ));
    }

    #[test]
    fn edge_helpers() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(Edge(1, 3).reverse(), Edge(3, 1));
    }
}
