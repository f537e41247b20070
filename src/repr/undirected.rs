use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// An undirected graph with weighted edges.
/// Every edge `{u, v}` is stored in the lists of both `u` and `v`; self-loops and parallel edges are rejected.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    nbs: Vec<Vec<UndirectedEdge>>,
    num_edges: NumEdges,
}

impl_common_graph_ops!(UndirectedGraph => nbs, Undirected);

impl GraphNew for UndirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for UndirectedGraph {
    fn try_add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let edge = UndirectedEdge::try_with_weight(u, v, weight)?;

        if self.has_edge(u, v) {
            return Ok(true);
        }

        self.nbs[u as usize].push(edge);
        self.nbs[v as usize].push(edge);
        self.num_edges += 1;
        Ok(false)
    }
}

impl UndirectedGraph {
    /// Returns the edges incident to `u` in insertion order.
    /// ** Panics if `u >= n` **
    pub fn incident_edges_of(&self, u: Node) -> &[UndirectedEdge] {
        &self.nbs[u as usize]
    }

    /// Returns every edge of the graph exactly once
    pub fn undirected_edges(&self) -> impl Iterator<Item = UndirectedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.nbs[u as usize]
                .iter()
                .filter(move |e| e.other_endpoint(u) > u)
                .copied()
        })
    }
}


test_graph_ops!(
    test_undirected_graph,
    UndirectedGraph,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
