use std::{cmp::Ordering, collections::BinaryHeap};

use itertools::Itertools;

use super::*;

/// Minimum spanning forest of an undirected weighted graph.
///
/// [`MinimumSpanningTree::kruskal`] considers edges by increasing weight, ties broken by their
/// normalized endpoints, and keeps them whenever they join two different trees.
/// [`MinimumSpanningTree::prim`] grows one tree at a time from the smallest vertex not yet
/// covered. Both span every component separately on a disconnected graph and find forests of
/// equal total weight.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let g = UndirectedGraph::from_weighted_edges(
///     4,
///     [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 2.5), (2, 3, 0.5)],
/// )
/// .unwrap();
///
/// let mst = MinimumSpanningTree::kruskal(&g);
/// assert_eq!(mst.edges().len(), 3);
/// assert_eq!(mst.total_weight(), 3.5);
/// ```
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree {
    edges: Vec<UndirectedEdge>,
    number_of_trees: NumNodes,
}

impl MinimumSpanningTree {
    pub fn kruskal(graph: &UndirectedGraph) -> Self {
        let candidates = graph
            .undirected_edges()
            .sorted_by(|a, b| {
                a.weight()
                    .total_cmp(&b.weight())
                    .then_with(|| a.endpoints().normalized().cmp(&b.endpoints().normalized()))
            })
            .collect_vec();

        let mut sets = DisjointSets::new(graph.number_of_nodes());
        let edges = candidates
            .into_iter()
            .filter(|e| {
                let Edge(u, v) = e.endpoints();
                sets.merge(u, v)
            })
            .collect_vec();

        let tree = Self {
            edges,
            number_of_trees: sets.number_of_sets(),
        };

        tracing::debug!(
            "Spanning forest with {} trees and weight {}",
            tree.number_of_trees,
            tree.total_weight()
        );

        tree
    }

    /// Grows each tree from its smallest vertex, always adding the lightest edge that leaves it.
    /// Candidate edges wait in a binary heap and are discarded once both endpoints are covered.
    pub fn prim(graph: &UndirectedGraph) -> Self {
        let mut in_tree = vec![false; graph.len()];
        let mut heap = BinaryHeap::new();
        let mut edges = Vec::with_capacity(graph.len().saturating_sub(1));
        let mut number_of_trees = 0;

        for root in graph.vertices() {
            if in_tree[root as usize] {
                continue;
            }
            number_of_trees += 1;

            Self::cover(graph, root, &mut in_tree, &mut heap);
            while let Some(Candidate { edge, target }) = heap.pop() {
                if in_tree[target as usize] {
                    continue;
                }
                edges.push(edge);
                Self::cover(graph, target, &mut in_tree, &mut heap);
            }
        }

        let tree = Self {
            edges,
            number_of_trees,
        };

        tracing::debug!(
            "Prim spanning forest with {} trees and weight {}",
            tree.number_of_trees,
            tree.total_weight()
        );

        tree
    }

    /// Adds `u` to the current tree and queues its edges to uncovered vertices
    fn cover(
        graph: &UndirectedGraph,
        u: Node,
        in_tree: &mut [bool],
        heap: &mut BinaryHeap<Candidate>,
    ) {
        in_tree[u as usize] = true;
        for &edge in graph.incident_edges_of(u) {
            let target = edge.other_endpoint(u);
            if !in_tree[target as usize] {
                heap.push(Candidate { edge, target });
            }
        }
    }

    /// Returns the chosen edges in the order they were accepted
    pub fn edges(&self) -> &[UndirectedEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight()).sum()
    }

    /// Returns the number of trees, i.e. the number of connected components of the graph
    pub fn number_of_trees(&self) -> NumNodes {
        self.number_of_trees
    }

    /// Returns *true* if the result is a single tree spanning all vertices
    pub fn is_spanning_tree(&self) -> bool {
        self.number_of_trees <= 1
    }
}

/// Edge leaving the current tree towards `target`.
/// Ordered in reverse so that [`BinaryHeap`] pops the lightest one first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    edge: UndirectedEdge,
    target: Node,
}

impl Candidate {
    fn key(&self) -> (Weight, Edge) {
        (self.edge.weight(), self.edge.endpoints().normalized())
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        let (w1, e1) = self.key();
        let (w2, e2) = other.key();
        w2.total_cmp(&w1).then_with(|| e2.cmp(&e1))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_undirected_graph;

    #[test]
    fn known_minimum() {
        // classic example with 7 vertices and weight 39
        let graph = UndirectedGraph::from_weighted_edges(
            7,
            [
                (0, 1, 7.0),
                (0, 3, 5.0),
                (1, 2, 8.0),
                (1, 3, 9.0),
                (1, 4, 7.0),
                (2, 4, 5.0),
                (3, 4, 15.0),
                (3, 5, 6.0),
                (4, 5, 8.0),
                (4, 6, 9.0),
                (5, 6, 11.0),
            ],
        )
        .unwrap();

        let mst = MinimumSpanningTree::kruskal(&graph);
        assert!(mst.is_spanning_tree());
        assert_eq!(mst.edges().len(), 6);
        assert_eq!(mst.total_weight(), 39.0);
        assert_eq!(
            mst.edges().iter().map(|e| e.endpoints().normalized()).collect_vec(),
            vec![Edge(0, 3), Edge(2, 4), Edge(3, 5), Edge(0, 1), Edge(1, 4), Edge(4, 6)]
        );
    }

    #[test]
    fn prim_on_known_minimum() {
        let graph = UndirectedGraph::from_weighted_edges(
            7,
            [
                (0, 1, 7.0),
                (0, 3, 5.0),
                (1, 2, 8.0),
                (1, 3, 9.0),
                (1, 4, 7.0),
                (2, 4, 5.0),
                (3, 4, 15.0),
                (3, 5, 6.0),
                (4, 5, 8.0),
                (4, 6, 9.0),
                (5, 6, 11.0),
            ],
        )
        .unwrap();

        let mst = MinimumSpanningTree::prim(&graph);
        assert!(mst.is_spanning_tree());
        assert_eq!(mst.total_weight(), 39.0);
        assert_eq!(
            mst.edges().iter().map(|e| e.endpoints().normalized()).collect_vec(),
            vec![Edge(0, 3), Edge(3, 5), Edge(0, 1), Edge(1, 4), Edge(2, 4), Edge(4, 6)]
        );
    }

    #[test]
    fn prim_forest() {
        let graph =
            UndirectedGraph::from_weighted_edges(6, [(1, 2, 2.0), (4, 5, -1.0), (2, 0, 3.0)])
                .unwrap();
        let mst = MinimumSpanningTree::prim(&graph);

        assert_eq!(mst.number_of_trees(), 3);
        assert!(!mst.is_spanning_tree());
        assert_eq!(mst.total_weight(), 4.0);
        assert_eq!(
            mst.edges().iter().map(|e| e.endpoints().normalized()).collect_vec(),
            vec![Edge(0, 2), Edge(1, 2), Edge(4, 5)]
        );

        let empty = MinimumSpanningTree::prim(&UndirectedGraph::new(0));
        assert!(empty.edges().is_empty());
        assert_eq!(empty.number_of_trees(), 0);
    }

    #[test]
    fn prim_agrees_with_kruskal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for n in [5, 30, 120] {
            let unweighted = random_undirected_graph(rng, n, 2 * n);
            let graph = UndirectedGraph::from_weighted_edges(
                n,
                unweighted
                    .edges(true)
                    .map(|Edge(u, v)| (u, v, rng.random_range(-20..50) as Weight))
                    .collect_vec(),
            )
            .unwrap();

            let kruskal = MinimumSpanningTree::kruskal(&graph);
            let prim = MinimumSpanningTree::prim(&graph);
            assert_eq!(prim.number_of_trees(), kruskal.number_of_trees());
            assert_eq!(prim.edges().len(), kruskal.edges().len());
            assert_eq!(prim.total_weight(), kruskal.total_weight());
        }
    }

    #[test]
    fn ties_are_deterministic() {
        let graph = UndirectedGraph::from_edges(3, [(2, 1), (0, 2), (1, 0)]).unwrap();
        let mst = MinimumSpanningTree::kruskal(&graph);
        assert_eq!(
            mst.edges().iter().map(|e| e.endpoints().normalized()).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2)]
        );
    }

    #[test]
    fn forest() {
        let graph =
            UndirectedGraph::from_weighted_edges(5, [(0, 1, 2.0), (3, 4, -1.0)]).unwrap();
        let mst = MinimumSpanningTree::kruskal(&graph);

        assert!(!mst.is_spanning_tree());
        assert_eq!(mst.number_of_trees(), 3);
        assert_eq!(mst.total_weight(), 1.0);

        let empty = MinimumSpanningTree::kruskal(&UndirectedGraph::new(0));
        assert!(empty.edges().is_empty());
        assert!(empty.is_spanning_tree());
    }

    #[test]
    fn random_graphs_are_spanned() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [10, 40, 100] {
            let unweighted = random_undirected_graph(rng, n, 3 * n);
            let graph = UndirectedGraph::from_weighted_edges(
                n,
                unweighted
                    .edges(true)
                    .map(|Edge(u, v)| (u, v, rng.random_range(0..100) as Weight))
                    .collect_vec(),
            )
            .unwrap();

            let mst = MinimumSpanningTree::kruskal(&graph);
            let components = graph.connected_components().count() as NumNodes;
            assert_eq!(mst.number_of_trees(), components);
            assert_eq!(mst.edges().len() as NumNodes, n - components);

            // every non-tree edge is at least as heavy as the tree path it closes
            let tree = UndirectedGraph::from_weighted_edges(
                n,
                mst.edges().iter().map(|e| {
                    let Edge(u, v) = e.endpoints();
                    (u, v, e.weight())
                }),
            )
            .unwrap();
            for e in graph.undirected_edges() {
                let Edge(u, v) = e.endpoints();
                let path = BreadthFirstSearch::new(&tree, u)
                    .unwrap()
                    .shortest_path_to(v)
                    .unwrap();
                for (a, b) in path.into_iter().tuple_windows() {
                    let on_path = tree
                        .incident_edges_of(a)
                        .iter()
                        .find(|f| f.other_endpoint(a) == b)
                        .unwrap();
                    assert!(on_path.weight() <= e.weight());
                }
            }
        }
    }
}
