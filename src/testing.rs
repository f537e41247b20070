//! Shared test helpers: random graph generation and the `test_graph_ops!` macro
//! checking every representation against a naive adjacency matrix.

#[cfg(test)]
use itertools::Itertools;
#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use crate::{ops::*, repr::*, *};

/// Creates a sorted list of at most `m_ub` distinct random edges for nodes `0..n`.
/// Undirected edges are normalized and never loops.
#[cfg(test)]
pub(crate) fn random_edges<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
    undirected: bool,
) -> Vec<Edge> {
    let mut edges = (0..m_ub)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);

            if undirected {
                Edge(u, v).normalized()
            } else {
                Edge(u, v)
            }
        })
        .filter(|e| !(undirected && e.is_loop()))
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();

    edges
}

#[cfg(test)]
pub(crate) fn random_directed_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
) -> DirectedGraph {
    DirectedGraph::from_edges(n, random_edges(rng, n, m_ub, false)).unwrap()
}

#[cfg(test)]
pub(crate) fn random_undirected_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m_ub: NumEdges,
) -> UndirectedGraph {
    UndirectedGraph::from_edges(n, random_edges(rng, n, m_ub, true)).unwrap()
}

/// Directed cycle `0 -> 1 -> ... -> n-1 -> 0`
#[cfg(test)]
pub(crate) fn directed_cycle(n: NumNodes) -> DirectedGraph {
    DirectedGraph::from_edges(n, (0..n).map(|u| (u, (u + 1) % n))).unwrap()
}

/// Undirected path `0 - 1 - ... - n-1`
#[cfg(test)]
pub(crate) fn undirected_path(n: NumNodes) -> UndirectedGraph {
    UndirectedGraph::from_edges(n, (1..n).map(|u| (u - 1, u))).unwrap()
}

/// Every graph should implement `GraphNodeOrder` and `GraphEdgeOrder`
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::{random_edges, test_graph_ops}, *};
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Naive adjacency matrix of the given edges
            fn adjacency_matrix(n: NumNodes, edges: &[Edge]) -> Vec<Vec<bool>> {
                let mut matrix = vec![vec![false; n as usize]; n as usize];
                for &Edge(u, v) in edges {
                    matrix[u as usize][v as usize] = true;
                    if $undirected {
                        matrix[v as usize][u as usize] = true;
                    }
                }
                matrix
            }

            $(
                test_graph_ops!($graph<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges, $undirected);
                        let matrix = adjacency_matrix(n, &edges);

                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(edges, graph.ordered_edges($undirected).collect_vec());

                        for u in 0..n {
                            let expected = (0..n).filter(|&v| matrix[u as usize][v as usize]).collect_vec();
                            assert_eq!(graph.neighbors_of(u).sorted().collect_vec(), expected);
                            assert_eq!(graph.degree_of(u), expected.len() as NumNodes);

                            for i in 0..graph.degree_of(u) {
                                assert!(matrix[u as usize][graph.ith_neighbor(u, i) as usize]);
                            }
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), matrix[u as usize][v as usize]);
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DirectedAdjacencyList) => {
        #[test]
        fn test_directed_adjacency_list() {
            assert!(!$undirected);

            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges, false);
                        let matrix = adjacency_matrix(n, &edges);
                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                        for u in 0..n {
                            let in_degree = (0..n).filter(|&v| matrix[v as usize][u as usize]).count();
                            assert_eq!(graph.in_degree_of(u), in_degree as NumNodes);
                            assert_eq!(graph.out_degree_of(u), graph.degree_of(u));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges, $undirected);
                        let mut graph = <$graph>::new(n);

                        for (m, &Edge(u, v)) in edges.iter().enumerate() {
                            assert!(!graph.try_add_edge(u, v).unwrap());
                            assert_eq!(graph.number_of_edges(), m as NumEdges + 1);
                        }

                        for &Edge(u, v) in &edges {
                            assert!(graph.try_add_edge(u, v).unwrap());
                            assert!(matches!(graph.add_edge(u, v), Err(GraphError::DuplicateEdge { .. })));
                            if $undirected {
                                assert!(graph.try_add_edge(v, u).unwrap());
                            }
                        }

                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert!(graph.try_add_edge(n, 0).is_err());
                        assert!(graph.try_add_edge(0, n).is_err());
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphReversal) => {
        #[test]
        fn test_graph_reversal() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in [1 as NumNodes, 10, 50] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, 4 * n as NumEdges, false);
                    let graph = <$graph>::from_edges(n, edges.iter()).unwrap();

                    let reversed = graph.reversed();
                    let flipped = edges.iter().map(|e| e.reverse()).sorted().collect_vec();
                    assert_eq!(reversed.ordered_edges(false).collect_vec(), flipped);
                    assert_eq!(reversed.number_of_edges(), graph.number_of_edges());

                    assert_eq!(
                        reversed.reversed().ordered_edges(false).collect_vec(),
                        graph.ordered_edges(false).collect_vec()
                    );
                    for u in 0..n {
                        assert_eq!(reversed.in_degree_of(u), graph.out_degree_of(u));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
