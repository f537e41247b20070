/*!
# Directed Graph Representation

[`DirectedGraph`] stores the **outgoing arcs** of every vertex in insertion order and
counts the **incoming arcs**, so that in- and out-degrees are both `O(1)`.
In-neighborhoods are not stored; algorithms requiring them work on [`DirectedGraph::reversed`].
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph with weighted arcs. Parallel arcs are rejected, self-loops are allowed.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    out_arcs: Vec<Vec<Arc>>,
    in_degrees: Vec<NumNodes>,
    num_edges: NumEdges,
}

impl_common_graph_ops!(DirectedGraph => out_arcs, Directed);

impl DirectedAdjacencyList for DirectedGraph {
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_degrees[u as usize]
    }
}

impl GraphNew for DirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            out_arcs: vec![Vec::new(); n as usize],
            in_degrees: vec![0; n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for DirectedGraph {
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(!self.insert_arc_if_absent(Arc::with_weight(u, v, weight)))
    }
}

impl DirectedGraph {
    /// Inserts `arc` unless an arc with the same endpoints exists and returns *true* iff it was inserted.
    /// ** Panics if an endpoint is `>= n` **
    pub(crate) fn insert_arc_if_absent(&mut self, arc: Arc) -> bool {
        if self.has_edge(arc.source(), arc.sink()) {
            return false;
        }

        self.push_arc(arc);
        true
    }

    /// Inserts `arc` without checking for a parallel arc.
    /// ** Panics if an endpoint is `>= n` **
    pub(crate) fn push_arc(&mut self, arc: Arc) {
        self.in_degrees[arc.sink() as usize] += 1;
        self.out_arcs[arc.source() as usize].push(arc);
        self.num_edges += 1;
    }

    /// Returns the outgoing arcs of `u` in insertion order.
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[Arc] {
        &self.out_arcs[u as usize]
    }

    /// Like `arcs_of` but fails if `u >= n`
    pub fn try_arcs_of(&self, u: Node) -> Result<&[Arc]> {
        self.check_vertex(u)?;
        Ok(self.arcs_of(u))
    }

    /// Returns an iterator over all arcs, grouped by source
    pub fn arcs(&self) -> impl Iterator<Item = Arc> + '_ {
        self.out_arcs.iter().flatten().copied()
    }

    /// Returns the graph with every arc flipped. Weights are kept.
    pub fn reversed(&self) -> Self {
        let mut reversed = Self::new(self.number_of_nodes());
        for arc in self.arcs() {
            reversed.push_arc(arc.reversed());
        }
        reversed
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn degrees() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (0, 2), (2, 1), (3, 3)]).unwrap();

        assert_eq!(graph.out_degree_of(0), 2);
        assert_eq!(graph.in_degree_of(1), 2);
        assert_eq!(graph.in_degree_of(0), 0);
        assert_eq!(graph.total_degree_of(3), 2);
        assert_eq!(graph.sources().collect_vec(), vec![0]);
        assert!(graph.has_self_loop(3));
    }

    #[test]
    fn rejects_invalid_arcs() {
        let mut graph = DirectedGraph::new(3);
        graph.add_edge(0, 1).unwrap();

        assert!(matches!(
            graph.add_edge(0, 1),
            Err(GraphError::DuplicateEdge { u: 0, v: 1 })
        ));
        assert!(matches!(
            graph.add_edge(0, 3),
            Err(GraphError::VertexOutOfRange {
                vertex: 3,
                number_of_nodes: 3
            })
        ));
        assert!(matches!(graph.try_add_edge(0, 1), Ok(true)));
        assert!(matches!(graph.try_add_edge(1, 0), Ok(false)));
        assert_eq!(graph.number_of_edges(), 2);

        assert!(graph.try_degree_of(5).is_err());
        assert!(graph.try_neighbors_of(5).is_err());
        assert!(graph.try_in_degree_of(3).is_err());
        assert!(graph.try_arcs_of(3).is_err());
        assert_eq!(graph.try_degree_of(0).unwrap(), 1);
    }

    #[test]
    fn reversal_keeps_weights() {
        let graph = DirectedGraph::from_weighted_edges(3, [(0, 1, 1.5), (1, 2, 2.5)]).unwrap();
        let reversed = graph.reversed();

        assert_eq!(
            reversed.ordered_edges(false).collect_vec(),
            vec![Edge(1, 0), Edge(2, 1)]
        );
        assert_eq!(
            reversed.weighted_neighbors_of(2).collect_vec(),
            vec![(1, 2.5)]
        );
    }

    #[test]
    fn empty_graph() {
        let graph = DirectedGraph::new(0);
        assert!(graph.is_empty());
        assert!(graph.has_no_edges());
        assert_eq!(graph.reversed().number_of_nodes(), 0);
    }
}

test_graph_ops!(
    test_directed_graph,
    DirectedGraph,
    false,
    (
        GraphNew,
        AdjacencyList,
        DirectedAdjacencyList,
        GraphEdgeEditing,
        GraphReversal
    )
);
