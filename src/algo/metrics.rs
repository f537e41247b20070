/*!
# Distance Metrics

Eccentricity based metrics of connected undirected graphs, all derived from one BFS per vertex:
- the **eccentricity** of `v` is the greatest distance from `v` to any vertex,
- the **diameter** and **radius** are the greatest and smallest eccentricity,
- the **center** is the first vertex of minimum eccentricity,
- the **Wiener index** is the sum of distances over all unordered vertex pairs.
*/

use itertools::Itertools;

use super::*;

/// Distance metrics of a connected undirected graph.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let path = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
/// let metrics = GraphMetrics::new(&path).unwrap();
///
/// assert_eq!(metrics.diameter(), 3);
/// assert_eq!(metrics.radius(), 2);
/// assert_eq!(metrics.center(), 1);
/// assert_eq!(metrics.wiener_index(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct GraphMetrics {
    eccentricities: Vec<NumNodes>,
    center: Node,
    wiener_index: u64,
}

impl GraphMetrics {
    /// Fails with [`GraphError::EmptyGraph`] if `n = 0` and with [`GraphError::NotConnected`] if
    /// vertex `0` does not reach every vertex.
    pub fn new<G>(graph: &G) -> Result<Self>
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        if graph.bfs(0).count() < graph.len() {
            return Err(GraphError::NotConnected);
        }

        let mut eccentricities = Vec::with_capacity(graph.len());
        let mut wiener_index = 0u64;

        for u in graph.vertices() {
            let bfs = BreadthFirstSearch::new(graph, u)?;
            let distances = bfs.distances();

            eccentricities.push(distances.iter().flatten().copied().max().unwrap_or_default());
            wiener_index += distances[u as usize + 1..]
                .iter()
                .flatten()
                .map(|&d| d as u64)
                .sum::<u64>();
        }

        let center = eccentricities
            .iter()
            .position_min()
            .map_or(0, |c| c as Node);

        tracing::debug!(
            "Metrics of {} nodes: radius {}, wiener index {}",
            graph.len(),
            eccentricities[center as usize],
            wiener_index
        );

        Ok(Self {
            eccentricities,
            center,
            wiener_index,
        })
    }

    /// Returns the greatest distance from `v` to any other vertex.
    /// Fails if `v` is out of range.
    pub fn eccentricity(&self, v: Node) -> Result<NumNodes> {
        self.eccentricities
            .get(v as usize)
            .copied()
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                number_of_nodes: self.eccentricities.len() as NumNodes,
            })
    }

    pub fn eccentricities(&self) -> &[NumNodes] {
        &self.eccentricities
    }

    pub fn diameter(&self) -> NumNodes {
        self.eccentricities.iter().copied().max().unwrap_or_default()
    }

    pub fn radius(&self) -> NumNodes {
        self.eccentricities[self.center as usize]
    }

    /// First vertex with minimum eccentricity
    pub fn center(&self) -> Node {
        self.center
    }

    pub fn wiener_index(&self) -> u64 {
        self.wiener_index
    }
}
