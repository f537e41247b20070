/*!
# Graph Operations

Capabilities of graphs are expressed as traits so that algorithms can be written once for
every representation providing them. Methods without a `try_`-prefix follow the usual
convention of panicking on vertices outside of `0..n`; their `try_`-companions report
[`GraphError::VertexOutOfRange`] instead.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Marker for the orientation of a graph
pub trait GraphDirection {
    const IS_DIRECTED: bool;
}

/// Orientation of directed graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Orientation of undirected graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl GraphDirection for Directed {
    const IS_DIRECTED: bool = true;
}

impl GraphDirection for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Tells whether a graph is directed or not
pub trait GraphType {
    type Dir: GraphDirection;

    fn is_directed() -> bool {
        Self::Dir::IS_DIRECTED
    }

    fn is_undirected() -> bool {
        !Self::is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n` which, in contrast to `vertices()`, does not borrow the graph
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Ok(())` iff `u` is a vertex of the graph
    fn check_vertex(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex
    /// in insertion order.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this should be equivalent to `out_neighbors_of`
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Like `neighbors_of` but fails if `u >= n`
    fn try_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.check_vertex(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Like `degree_of` but fails if `u >= n`
    fn try_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_vertex(u)?;
        Ok(self.degree_of(u))
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over outgoing edges of a given vertex in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn ordered_edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> {
        let mut edges = self.edges_of(u, only_normalized).collect_vec();
        edges.sort();
        edges.into_iter()
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.ordered_edges_of(u, only_normalized))
    }
}

/// Access to the weights of the links incident to a vertex
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Returns `(other endpoint, weight)` for every link of `u` in insertion order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;
}

/// Random access into a neighborhood. Explicit-stack traversals use this to
/// resume a vertex at the position where they left off.
pub trait IndexedAdjacencyList: AdjacencyList {
    /// Returns the ith neighbor (0-indexed) of a given vertex
    /// ** Panics if `u >= n || i >= deg(u)` **
    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node;
}

macro_rules! propagate {
    ($out_fn:ident => $fn:ident($($arg:ident : $type:ty),*) -> $ret:ty) => {
        #[inline]
        fn $out_fn(&self, $($arg: $type),*) -> $ret {
            self.$fn($($arg),*)
        }
    };
}

pub trait DirectedAdjacencyList: AdjacencyList {
    propagate!(out_neighbors_of => neighbors_of(u : Node) -> impl Iterator<Item = Node> + '_);
    propagate!(out_degree_of => degree_of(u : Node) -> NumNodes);

    #[inline]
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.edges_of(u, false)
    }

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Like `in_degree_of` but fails if `u >= n`
    fn try_in_degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_vertex(u)?;
        Ok(self.in_degree_of(u))
    }

    /// Returns the out-degree plus the in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over the in-degrees of all vertices
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.in_degree_of(u))
    }

    /// Returns an iterator over the vertices without incoming arcs
    fn sources(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.in_degree_of(u) == 0)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph with n singleton nodes. `n = 0` is allowed.
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the weighted edge `(u, v)` unless it is already present.
    /// Returns *true* exactly if the edge was present previously, in which case the graph is unchanged.
    ///
    /// Fails if `u` or `v` is out of range, or on a self-loop in an undirected graph.
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool>;

    /// Unweighted version of [`GraphEdgeEditing::try_add_weighted_edge`]
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.try_add_weighted_edge(u, v, 0.0)
    }

    /// Adds the weighted edge `(u, v)` to the graph.
    /// In addition to the failures of `try_add_weighted_edge`, fails with
    /// [`GraphError::DuplicateEdge`] if the edge was already present.
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        if self.try_add_weighted_edge(u, v, weight)? {
            Err(GraphError::DuplicateEdge { u, v })
        } else {
            Ok(())
        }
    }

    /// Adds the edge `(u, v)` to the graph. See [`GraphEdgeEditing::add_weighted_edge`].
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.add_weighted_edge(u, v, 0.0)
    }

    /// Adds all edges in the collection and stops at the first failure
    fn add_edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> Result<()>
    where
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges<E>(n: NumNodes, edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Edge>;

    /// Create a graph from a number of nodes and an iterator over `(u, v, weight)`
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = (Node, Node, Weight)>,
    ) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<E>(n: NumNodes, edges: impl IntoIterator<Item = E>) -> Result<Self>
    where
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = (Node, Node, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::new(n);
        for (u, v, w) in edges {
            graph.add_weighted_edge(u, v, w)?;
        }
        Ok(graph)
    }
}
