/*!
# Bipartite Graph Algorithms

This module provides a test for **bipartiteness** of undirected graphs:
the vertices are split into two sides such that every edge connects both sides.

A side is proposed for every vertex by a BFS over all components and then verified edge by edge.
*/

use super::*;

/// The two sides of a bipartition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Two-colouring of an undirected graph.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let path = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
/// let coloring = TwoColoring::new(&path);
/// assert!(coloring.is_two_colorable());
/// assert_eq!(coloring.side_of(0), coloring.side_of(2));
/// assert_ne!(coloring.side_of(0), coloring.side_of(1));
///
/// let triangle = UndirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert!(!triangle.is_bipartite());
/// ```
#[derive(Debug, Clone)]
pub struct TwoColoring {
    sides: Option<Vec<Side>>,
}

impl TwoColoring {
    pub fn new<G>(graph: &G) -> Self
    where
        G: AdjacencyList + GraphType<Dir = Undirected>,
    {
        let proposal = propose_possibly_illegal_bipartition(graph);
        let is_valid = is_bipartition(graph, &proposal);

        tracing::debug!(
            "Graph with {} nodes is {}",
            graph.len(),
            if is_valid { "bipartite" } else { "not bipartite" }
        );

        Self {
            sides: is_valid.then_some(proposal),
        }
    }

    pub fn is_two_colorable(&self) -> bool {
        self.sides.is_some()
    }

    /// Returns the side of `v` or `None` if the graph is not bipartite or `v >= n`
    pub fn side_of(&self, v: Node) -> Option<Side> {
        self.sides.as_ref()?.get(v as usize).copied()
    }

    /// Returns the side of every vertex or `None` if the graph is not bipartite
    pub fn sides(&self) -> Option<&[Side]> {
        self.sides.as_deref()
    }
}

/// A trait for testing bipartiteness of undirected graphs.
pub trait BipartiteTest: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Tests whether every edge connects both sides of the given candidate.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(g.is_bipartition(&[Side::Left, Side::Right, Side::Left]));
    /// assert!(!g.is_bipartition(&[Side::Left, Side::Left, Side::Right]));
    /// ```
    fn is_bipartition(&self, sides: &[Side]) -> bool {
        is_bipartition(self, sides)
    }

    /// Computes the two-colouring of the graph
    fn two_coloring(&self) -> TwoColoring {
        TwoColoring::new(self)
    }

    /// Tests whether the graph is bipartite.
    fn is_bipartite(&self) -> bool {
        self.two_coloring().is_two_colorable()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + GraphType<Dir = Undirected> {}

fn is_bipartition<G: AdjacencyList>(graph: &G, sides: &[Side]) -> bool {
    graph
        .edges(true)
        .all(|Edge(u, v)| sides[u as usize] != sides[v as usize])
}

/// Computes a candidate bipartition of the graph using BFS traversal.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition may be invalid
///
/// Roots of the BFS trees are put on the left side.
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Vec<Side>
where
    G: AdjacencyList,
{
    let mut sides = vec![Side::Left; graph.len()];
    if graph.is_empty() {
        return sides;
    }

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            sides[node as usize] = sides[pred as usize].opposite();
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    sides
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{random_undirected_graph, undirected_path};

    #[test]
    fn paths_are_bipartite() {
        for n in [1, 2, 10, 1000] {
            let graph = undirected_path(n);
            let coloring = graph.two_coloring();
            assert!(coloring.is_two_colorable());

            for u in 0..n {
                let expected = if u % 2 == 0 { Side::Left } else { Side::Right };
                assert_eq!(coloring.side_of(u), Some(expected));
            }
            assert_eq!(coloring.side_of(n), None);
        }
    }

    #[test]
    fn odd_cycles_are_not() {
        for n in [3 as Node, 5, 101] {
            let graph = UndirectedGraph::from_edges(n, (0..n).map(|u| (u, (u + 1) % n))).unwrap();
            let coloring = graph.two_coloring();
            assert!(!coloring.is_two_colorable());
            assert_eq!(coloring.side_of(0), None);
            assert!(coloring.sides().is_none());
        }

        let even = UndirectedGraph::from_edges(6, (0..6).map(|u| (u, (u + 1) % 6))).unwrap();
        assert!(even.is_bipartite());
    }

    #[test]
    fn every_component_is_colored() {
        // a square and a separate edge; the triangle is closed later
        let mut graph = UndirectedGraph::from_edges(7, [(0, 1), (1, 2), (2, 3), (3, 0), (4, 5)]).unwrap();
        let sides = graph.two_coloring().sides().unwrap().to_vec();
        assert!(graph.is_bipartition(&sides));
        assert_ne!(sides[4], sides[5]);

        graph.add_edges([(5, 6), (6, 4)]).unwrap();
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn empty_graph() {
        let coloring = UndirectedGraph::new(0).two_coloring();
        assert!(coloring.is_two_colorable());
        assert_eq!(coloring.sides(), Some(&[][..]));
    }

    #[test]
    fn random_forests_are_bipartite() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [10, 50, 200] {
            let graph = random_undirected_graph(rng, n, n / 2);
            // keep only edges joining different components to obtain a forest
            let mut sets = DisjointSets::new(n);
            let forest = UndirectedGraph::from_edges(
                n,
                graph
                    .edges(true)
                    .filter(|&Edge(u, v)| sets.union(u, v).unwrap())
                    .collect::<Vec<_>>(),
            )
            .unwrap();
            assert!(forest.is_bipartite());
        }
    }
}
