use super::*;

/// Searches a directed graph for a cycle.
///
/// Runs [`DfsEvents`] over all vertices and stops at the first back edge `(u, v)`, i.e. an arc
/// whose head `v` is still in progress. Then `v` is an ancestor of `u` in the DFS tree and the
/// tree path `v -> ... -> u` closed by `(u, v)` is a cycle.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let g = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]).unwrap();
/// let cycle = DirectedCycle::new(&g);
/// assert_eq!(cycle.cycle().unwrap(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<Node>>,
}

impl DirectedCycle {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        let mut predecessors = vec![INVALID_NODE; graph.len()];
        let mut back_edge = None;

        for event in graph.dfs_events() {
            match event {
                DfsEvent::Discover {
                    node,
                    parent: Some(parent),
                } => predecessors[node as usize] = parent,
                DfsEvent::Revisit {
                    from,
                    to,
                    color: Color::InProgress,
                } => {
                    back_edge = Some((from, to));
                    break;
                }
                _ => {}
            }
        }

        let cycle = back_edge.map(|(u, v)| {
            let mut cycle = vec![u];
            let mut w = u;
            while w != v {
                w = predecessors[w as usize];
                cycle.push(w);
            }
            cycle.reverse();
            cycle
        });

        match &cycle {
            Some(cycle) => tracing::debug!("Found directed cycle of length {}", cycle.len()),
            None => tracing::debug!("Graph with {} nodes is acyclic", graph.len()),
        }

        Self { cycle }
    }

    /// Returns *true* if the graph contains a directed cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the vertices `v, ..., u` of the cycle closed by the back edge `(u, v)`.
    /// A self-loop `(u, u)` yields `[u]`.
    ///
    /// Fails with [`GraphError::Acyclic`] if there is no cycle.
    pub fn cycle(&self) -> Result<&[Node]> {
        self.cycle.as_deref().ok_or(GraphError::Acyclic)
    }
}
