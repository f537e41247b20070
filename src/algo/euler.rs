use super::*;

/// Eulerian circuit of a strongly connected directed graph, i.e. a closed walk using every arc exactly once.
///
/// Such a circuit exists iff every vertex has equal in- and out-degree. It is found with
/// Hierholzer's algorithm on an explicit stack, starting at the first arc of the smallest
/// vertex with outgoing arcs.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let g = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0), (1, 1)]).unwrap();
/// let euler = EulerianCircuit::new(&g).unwrap();
/// let walk: Vec<_> = euler.circuit().unwrap().iter().map(|a| a.source()).collect();
/// assert_eq!(walk, vec![0, 1, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct EulerianCircuit {
    circuit: Option<Vec<Arc>>,
}

impl EulerianCircuit {
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no vertices and with
    /// [`GraphError::NotStronglyConnected`] if vertex `0` does not reach every vertex in
    /// the graph and in its reversal.
    pub fn new(graph: &DirectedGraph) -> Result<Self> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        if graph.bfs(0).count() < graph.len() || graph.reversed().bfs(0).count() < graph.len() {
            return Err(GraphError::NotStronglyConnected);
        }

        let is_balanced = graph
            .vertices()
            .all(|u| graph.in_degree_of(u) == graph.out_degree_of(u));

        let circuit = is_balanced.then(|| Self::hierholzer(graph));

        tracing::debug!(
            "Graph with {} nodes and {} arcs {}",
            graph.number_of_nodes(),
            graph.number_of_edges(),
            if circuit.is_some() {
                "has an eulerian circuit"
            } else {
                "is not eulerian"
            }
        );

        Ok(Self { circuit })
    }

    fn hierholzer(graph: &DirectedGraph) -> Vec<Arc> {
        let mut circuit = Vec::with_capacity(graph.number_of_edges() as usize);
        let Some(start) = graph.vertices_with_neighbors().next() else {
            return circuit;
        };

        let mut next_arc = vec![0usize; graph.len()];
        let mut stack: Vec<(Node, Option<Arc>)> = vec![(start, None)];

        while let Some(&(u, entered_by)) = stack.last() {
            let arcs = graph.arcs_of(u);
            if let Some(&arc) = arcs.get(next_arc[u as usize]) {
                next_arc[u as usize] += 1;
                stack.push((arc.sink(), Some(arc)));
            } else {
                stack.pop();
                circuit.extend(entered_by);
            }
        }

        circuit.reverse();
        circuit
    }

    pub fn has_eulerian_circuit(&self) -> bool {
        self.circuit.is_some()
    }

    /// Returns the arcs of the circuit in walk order.
    /// Fails with [`GraphError::NotEulerian`] if some vertex has different in- and out-degree.
    pub fn circuit(&self) -> Result<&[Arc]> {
        self.circuit.as_deref().ok_or(GraphError::NotEulerian)
    }
}
