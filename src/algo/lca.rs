use fxhash::FxHashSet;

use super::*;

/// Lowest common ancestors in a directed acyclic graph.
///
/// A vertex is never its own ancestor. The level of a vertex is the length of a longest path
/// reaching it from a source; among all common ancestors of two vertices the one with the greatest
/// level is the lowest, ties going to the smallest id.
///
/// All ancestor sets are built in topological order during construction, so queries only
/// intersect two sets.
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// //   0
/// //  / \
/// // 1   2
/// //  \ / \
/// //   3   4
/// let g = DirectedGraph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3), (2, 4)]).unwrap();
/// let lca = LowestCommonAncestor::new(&g).unwrap();
///
/// assert_eq!(lca.lca(3, 4).unwrap(), Some(2));
/// assert_eq!(lca.lca(1, 2).unwrap(), Some(0));
/// assert_eq!(lca.lca(0, 3).unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct LowestCommonAncestor {
    ancestors: Vec<FxHashSet<Node>>,
    levels: Vec<NumNodes>,
}

impl LowestCommonAncestor {
    /// Fails with [`GraphError::NotAcyclic`] if the graph has a directed cycle
    pub fn new(graph: &DirectedGraph) -> Result<Self> {
        let order = TopologicalOrder::new(graph).into_order()?;

        let n = graph.len();
        let mut ancestors = vec![FxHashSet::default(); n];
        let mut levels = vec![0; n];

        for u in order {
            // no self-loops in a DAG, so `u` is never among its own neighbors
            let ancestors_of_u = std::mem::take(&mut ancestors[u as usize]);
            for v in graph.neighbors_of(u) {
                let into = &mut ancestors[v as usize];
                into.extend(ancestors_of_u.iter().copied());
                into.insert(u);

                levels[v as usize] = levels[v as usize].max(levels[u as usize] + 1);
            }
            ancestors[u as usize] = ancestors_of_u;
        }

        tracing::debug!(
            "Computed ancestors of {} nodes, deepest level is {}",
            n,
            levels.iter().max().copied().unwrap_or_default()
        );

        Ok(Self { ancestors, levels })
    }

    /// Returns the lowest common (strict) ancestor of `u` and `v` or `None` if there is none.
    /// Fails if `u` or `v` are out of range.
    pub fn lca(&self, u: Node, v: Node) -> Result<Option<Node>> {
        let a = self.try_ancestors_of(u)?;
        let b = self.try_ancestors_of(v)?;

        let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        Ok(smaller
            .iter()
            .copied()
            .filter(|w| larger.contains(w))
            .max_by_key(|&w| (self.levels[w as usize], std::cmp::Reverse(w))))
    }

    /// Returns all strict ancestors of `v`
    pub fn ancestors_of(&self, v: Node) -> Result<impl Iterator<Item = Node> + '_> {
        Ok(self.try_ancestors_of(v)?.iter().copied())
    }

    /// Returns the length of a longest path from a source to `v`
    pub fn level_of(&self, v: Node) -> Result<NumNodes> {
        self.try_ancestors_of(v)?;
        Ok(self.levels[v as usize])
    }

    fn try_ancestors_of(&self, v: Node) -> Result<&FxHashSet<Node>> {
        self.ancestors
            .get(v as usize)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                number_of_nodes: self.ancestors.len() as NumNodes,
            })
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_directed_graph;

    #[test]
    fn diamond_with_tail() {
        // 0 -> 1 -> 3 -> 5
        // 0 -> 2 -> 3
        // 2 -> 4
        let graph =
            DirectedGraph::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 5), (2, 4)]).unwrap();
        let lca = LowestCommonAncestor::new(&graph).unwrap();

        assert_eq!(lca.lca(5, 4).unwrap(), Some(2));
        assert_eq!(lca.lca(4, 5).unwrap(), Some(2));
        // 1 and 2 share the greatest level
        assert_eq!(lca.lca(3, 5).unwrap(), Some(1));
        assert_eq!(lca.lca(5, 5).unwrap(), Some(3));
        assert_eq!(lca.lca(1, 2).unwrap(), Some(0));
        assert_eq!(lca.lca(0, 5).unwrap(), None);

        assert_eq!(lca.level_of(5).unwrap(), 3);
        assert_eq!(lca.ancestors_of(3).unwrap().sorted().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn ties_go_to_smallest_id() {
        let graph = DirectedGraph::from_edges(4, [(2, 0), (1, 0), (2, 3), (1, 3)]).unwrap();
        let lca = LowestCommonAncestor::new(&graph).unwrap();
        assert_eq!(lca.lca(0, 3).unwrap(), Some(1));
    }

    #[test]
    fn level_is_longest_distance() {
        let graph = DirectedGraph::from_edges(4, [(0, 3), (0, 1), (1, 2), (2, 3), (1, 3)]).unwrap();
        let lca = LowestCommonAncestor::new(&graph).unwrap();

        assert_eq!(
            graph.vertices().map(|u| lca.level_of(u).unwrap()).collect_vec(),
            vec![0, 1, 2, 3]
        );
        // 0 and 1 are the common ancestors
        assert_eq!(lca.lca(3, 2).unwrap(), Some(1));
    }

    #[test]
    fn errors() {
        let graph = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
        assert!(matches!(
            LowestCommonAncestor::new(&graph),
            Err(GraphError::NotAcyclic)
        ));

        let lca = LowestCommonAncestor::new(&DirectedGraph::new(2)).unwrap();
        assert_eq!(lca.lca(0, 1).unwrap(), None);
        assert!(matches!(
            lca.lca(0, 2),
            Err(GraphError::VertexOutOfRange { vertex: 2, .. })
        ));
    }

    #[test]
    fn ancestors_match_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for n in [10, 30, 60] {
            let random = random_directed_graph(rng, n, 2 * n);
            let dag = DirectedGraph::from_edges(
                n,
                random
                    .edges(false)
                    .filter(|e| e.0 < e.1)
                    .collect_vec(),
            )
            .unwrap();
            let lca = LowestCommonAncestor::new(&dag).unwrap();

            for v in dag.vertices() {
                let expected = dag
                    .vertices()
                    .filter(|&u| u != v && dag.bfs(u).any(|w| w == v))
                    .collect_vec();
                assert_eq!(lca.ancestors_of(v).unwrap().sorted().collect_vec(), expected);
            }
        }
    }
}
