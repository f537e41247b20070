use super::*;

/// Topological sorting by depth-first search.
///
/// Every vertex is placed in front of all vertices finished before it, i.e. the order is the
/// reversed finish order of [`DfsEvents`]. The first back edge proves a cycle and ends the search;
/// no partial order is ever exposed.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let g = DirectedGraph::from_edges(4, [(2, 3), (0, 2), (1, 2)]).unwrap();
/// let topo = TopologicalOrder::new(&g);
/// assert!(topo.is_acyclic());
/// assert_eq!(topo.order().unwrap(), &[1, 0, 2, 3]);
///
/// let g = DirectedGraph::from_edges(2, [(0, 1), (1, 0)]).unwrap();
/// assert!(matches!(TopologicalOrder::new(&g).order(), Err(GraphError::NotAcyclic)));
/// ```
#[derive(Debug, Clone)]
pub struct TopologicalOrder {
    order: Option<Vec<Node>>,
}

impl TopologicalOrder {
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        let mut finished = Vec::with_capacity(graph.len());
        let mut is_acyclic = true;

        for event in graph.dfs_events() {
            match event {
                DfsEvent::Finish(u) => finished.push(u),
                DfsEvent::Revisit {
                    color: Color::InProgress,
                    ..
                } => {
                    is_acyclic = false;
                    break;
                }
                _ => {}
            }
        }

        let order = is_acyclic.then(|| {
            finished.reverse();
            finished
        });

        tracing::debug!(
            "Topological sort of {} nodes: {}",
            graph.len(),
            if order.is_some() { "acyclic" } else { "cycle found" }
        );

        Self { order }
    }

    /// Returns *true* if the graph has no directed cycle
    pub fn is_acyclic(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the vertices such that every arc points from an earlier to a later vertex.
    /// Fails with [`GraphError::NotAcyclic`] if the graph has a cycle.
    pub fn order(&self) -> Result<&[Node]> {
        self.order.as_deref().ok_or(GraphError::NotAcyclic)
    }

    /// Owned variant of [`TopologicalOrder::order`]
    pub fn into_order(self) -> Result<Vec<Node>> {
        self.order.ok_or(GraphError::NotAcyclic)
    }

    /// Returns `ranking` with `ranking[u]` being the position of `u` in the order.
    /// Fails with [`GraphError::NotAcyclic`] if the graph has a cycle.
    pub fn ranking(&self) -> Result<Vec<Node>> {
        let order = self.order()?;
        let mut ranking = vec![INVALID_NODE; order.len()];
        for (rank, &u) in order.iter().enumerate() {
            ranking[u as usize] = rank as Node;
        }
        Ok(ranking)
    }
}
