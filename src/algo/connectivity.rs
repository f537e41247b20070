use std::iter::FusedIterator;

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the vertex lists of the connected components
    fn connected_components(&self) -> ConnectedComponents<'_, Self>
    where
        Self: GraphType<Dir = Undirected>,
    {
        ConnectedComponents::new(self)
    }

    /// Partition the (undirected) graph into its connected components
    fn connected_components_partition(&self) -> DisjointSets
    where
        Self: GraphType<Dir = Undirected>,
    {
        let mut sets = DisjointSets::new(self.number_of_nodes());
        for component in self.connected_components() {
            for (&u, &v) in component.iter().tuple_windows() {
                sets.merge(u, v);
            }
        }
        sets
    }

    /// Returns *true* if every vertex is reachable from every other one.
    /// The empty graph is connected.
    fn is_connected(&self) -> bool
    where
        Self: GraphType<Dir = Undirected>,
    {
        self.is_empty() || self.bfs(0).count() == self.len()
    }

    /// Computes the strongly connected components of a directed graph with Kosaraju's algorithm
    fn strongly_connected_components(&self) -> StronglyConnectedComponents
    where
        Self: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        StronglyConnectedComponents::new(self)
    }

    /// Returns *true* if the directed graph has at most one strongly connected component
    fn is_strongly_connected(&self) -> bool
    where
        Self: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        self.strongly_connected_components().number_of_components() <= 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the connected components of an undirected graph.
/// Each component is emitted in BFS order starting at its smallest vertex.
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

/// Strongly connected components computed with Kosaraju's algorithm.
///
/// 1. A depth-first search over all vertices (in increasing order) records the finish order.
/// 2. A second search runs on the reversed graph and takes its roots in decreasing finish time.
///    Each of its DFS trees is exactly one strongly connected component.
///
/// Component ids are issued in the order the second search discovers them. The first tree grows
/// from the vertex finished last, which lies in a source component of the condensation; hence
/// every arc of [`StronglyConnectedComponents::component_graph`] points from a smaller to a larger id.
///
/// Both searches run on explicit stacks, so long paths do not overflow the call stack.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents {
    component_of: Vec<Node>,
    components: Vec<Vec<Node>>,
    is_cyclic: Vec<bool>,
    component_graph: DirectedGraph,
}

impl StronglyConnectedComponents {
    /// Runs Kosaraju's algorithm in time `O(n + m)`.
    /// The graph is expected to have no parallel arcs, which all representations of this crate guarantee.
    pub fn new<G>(graph: &G) -> Self
    where
        G: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        let n = graph.number_of_nodes();

        let mut order = graph.dfs_events().finish_order();
        order.reverse();

        let mut reversed = DirectedGraph::new(n);
        for Edge(u, v) in graph.edges(false) {
            reversed.push_arc(Arc::new(v, u));
        }

        let mut component_of = vec![INVALID_NODE; n as usize];
        let mut components: Vec<Vec<Node>> = Vec::new();
        for event in reversed.dfs_events().with_roots(order) {
            match event {
                DfsEvent::Discover { node, parent: None } => {
                    component_of[node as usize] = components.len() as Node;
                    components.push(vec![node]);
                }
                DfsEvent::Discover {
                    node,
                    parent: Some(parent),
                } => {
                    let id = component_of[parent as usize];
                    component_of[node as usize] = id;
                    components[id as usize].push(node);
                }
                _ => {}
            }
        }

        let mut is_cyclic = components.iter().map(|c| c.len() > 1).collect_vec();
        let mut component_graph = DirectedGraph::new(components.len() as NumNodes);
        let mut inserted = FxHashSet::default();

        for Edge(u, v) in graph.edges(false) {
            let (cu, cv) = (component_of[u as usize], component_of[v as usize]);
            if cu == cv {
                is_cyclic[cu as usize] |= u == v;
            } else if inserted.insert(Edge(cu, cv)) {
                component_graph.push_arc(Arc::new(cu, cv));
            }
        }

        tracing::debug!(
            "Found {} strongly connected components in graph with {} nodes; condensation has {} arcs",
            components.len(),
            n,
            component_graph.number_of_edges()
        );

        Self {
            component_of,
            components,
            is_cyclic,
            component_graph,
        }
    }

    pub fn number_of_components(&self) -> NumNodes {
        self.components.len() as NumNodes
    }

    /// Returns the id of the component containing `v`
    pub fn component_id(&self, v: Node) -> Result<Node> {
        self.check_vertex(v)?;
        Ok(self.component_of[v as usize])
    }

    /// Returns the component id of every vertex
    pub fn component_ids(&self) -> &[Node] {
        &self.component_of
    }

    /// Returns *true* iff `u` and `v` lie in the same strongly connected component
    pub fn are_strongly_connected(&self, u: Node, v: Node) -> Result<bool> {
        Ok(self.component_id(u)? == self.component_id(v)?)
    }

    /// Returns the members of each component, indexed by component id
    pub fn components(&self) -> &[Vec<Node>] {
        &self.components
    }

    /// Returns *true* if component `c` contains a cycle, i.e. it has more than one vertex or a self-loop.
    /// ** Panics if `c >= number_of_components()` **
    pub fn is_cyclic_component(&self, c: Node) -> bool {
        self.is_cyclic[c as usize]
    }

    /// Returns the members of every component containing a cycle
    pub fn cyclic_components(&self) -> impl Iterator<Item = &[Node]> + '_ {
        self.components
            .iter()
            .zip(&self.is_cyclic)
            .filter_map(|(c, &cyclic)| cyclic.then_some(c.as_slice()))
    }

    /// Returns the condensation: one vertex per component and an arc `(c, d)` iff
    /// some arc of the graph leads from component `c` to component `d != c`.
    pub fn component_graph(&self) -> &DirectedGraph {
        &self.component_graph
    }

    fn check_vertex(&self, v: Node) -> Result<()> {
        if (v as usize) < self.component_of.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                number_of_nodes: self.component_of.len() as NumNodes,
            })
        }
    }
}

/// Sorts the nodes in each component increasingly and then the components themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{directed_cycle, random_directed_graph, random_undirected_graph};

    #[test]
    fn connected_components() {
        let graph = UndirectedGraph::from_edges(7, [(1, 2), (2, 3), (4, 5)]).unwrap();

        let ccs = graph.connected_components().collect_vec();
        assert_eq!(ccs, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);

        let mut part = graph.connected_components_partition();
        assert_eq!(part.number_of_sets(), 4);
        assert!(part.same_set(1, 3).unwrap());
        assert!(part.same_set(4, 5).unwrap());
        assert!(!part.same_set(3, 4).unwrap());
        assert_eq!(part.size_of_set(2).unwrap(), 3);

        assert!(!graph.is_connected());
        assert!(UndirectedGraph::new(0).is_connected());
        assert_eq!(UndirectedGraph::new(0).connected_components().count(), 0);
    }

    #[test]
    fn connected_components_random() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for n in [10, 40, 100] {
            let graph = random_undirected_graph(rng, n, n / 2);
            let ccs = graph.connected_components().collect_vec();
            assert_eq!(ccs.iter().map(|c| c.len()).sum::<usize>(), n as usize);

            let mut part = graph.connected_components_partition();
            assert_eq!(part.number_of_sets(), ccs.len() as NumNodes);
            for Edge(u, v) in graph.edges(true) {
                assert!(part.same_set(u, v).unwrap());
            }
        }
    }

    #[test]
    pub fn scc() {
        let graph = DirectedGraph::from_edges(
            8,
            [
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        )
        .unwrap();

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 3);
        assert!(sccs.components().iter().all(|c| !c.is_empty()));

        let sorted = sort_components(sccs.components().to_vec());
        assert_eq!(sorted[0], [0, 1, 4]);
        assert_eq!(sorted[1], [2, 3, 7]);
        assert_eq!(sorted[2], [5, 6]);

        // the condensation is the path {0,1,4} -> {2,3,7} -> {5,6} plus a shortcut
        assert_eq!(sccs.component_id(4).unwrap(), 0);
        assert_eq!(sccs.component_id(7).unwrap(), 1);
        assert_eq!(sccs.component_id(6).unwrap(), 2);
        assert_eq!(
            sccs.component_graph().ordered_edges(false).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(1, 2)]
        );

        assert!(sccs.are_strongly_connected(2, 7).unwrap());
        assert!(!sccs.are_strongly_connected(0, 5).unwrap());
        assert!(matches!(
            sccs.are_strongly_connected(0, 8),
            Err(GraphError::VertexOutOfRange { vertex: 8, .. })
        ));
        assert!(sccs.component_id(8).is_err());
    }

    #[test]
    pub fn scc_singletons() {
        // {0,1} and {4,5} are scc pairs, 2 is a loop, 3 is a singleton
        let graph = DirectedGraph::from_edges(
            6,
            [
                (0, 1),
                (1, 0),
                (2, 2),
                // 3 is missing
                (4, 5),
                (5, 4),
            ],
        )
        .unwrap();

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 4);

        let sorted = sort_components(sccs.components().to_vec());
        assert_eq!(sorted, vec![vec![0, 1], vec![2], vec![3], vec![4, 5]]);

        let cyclic = sort_components(sccs.cyclic_components().map(|c| c.to_vec()).collect());
        assert_eq!(cyclic, vec![vec![0, 1], vec![2], vec![4, 5]]);
        assert!(!sccs.is_cyclic_component(sccs.component_id(3).unwrap()));
        assert!(sccs.component_graph().has_no_edges());
    }

    #[test]
    pub fn scc_tree() {
        let graph =
            DirectedGraph::from_edges(7, [(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]).unwrap();

        let sccs = graph.strongly_connected_components();
        // in a directed tree each vertex is a strongly connected component
        assert_eq!(sccs.number_of_components(), 7);
        assert_eq!(sccs.component_graph().number_of_edges(), 6);

        let sorted = sort_components(sccs.components().to_vec());
        for (i, scc) in sorted.iter().enumerate() {
            assert_eq!(scc, &[i as Node]);
        }
    }

    #[test]
    fn condensation_collapses_parallel_arcs() {
        let graph =
            DirectedGraph::from_edges(4, [(0, 1), (1, 0), (2, 3), (3, 2), (0, 2), (1, 3), (1, 2)])
                .unwrap();

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 2);
        assert_eq!(
            sccs.component_graph().ordered_edges(false).collect_vec(),
            vec![Edge(0, 1)]
        );
    }

    #[test]
    fn ids_follow_topological_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for n in [10, 50, 200] {
            for m in [n / 2, n, 2 * n] {
                let graph = random_directed_graph(rng, n, m);
                let sccs = graph.strongly_connected_components();
                let condensation = sccs.component_graph();

                assert!(condensation.is_acyclic());
                for Edge(c, d) in condensation.edges(false) {
                    assert!(c < d);
                }
                for Edge(u, v) in graph.edges(false) {
                    assert!(sccs.component_id(u).unwrap() <= sccs.component_id(v).unwrap());
                }
            }
        }
    }

    #[test]
    fn scc_is_mutual_reachability() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);

        for n in [5, 20, 40] {
            for _ in 0..5 {
                let graph = random_directed_graph(rng, n, 2 * n);
                let sccs = graph.strongly_connected_components();

                let reachable = (0..n)
                    .map(|u| {
                        let mut row = vec![false; n as usize];
                        graph.bfs(u).for_each(|v| row[v as usize] = true);
                        row
                    })
                    .collect_vec();

                for u in 0..n {
                    for v in 0..n {
                        assert_eq!(
                            sccs.are_strongly_connected(u, v).unwrap(),
                            reachable[u as usize][v as usize] && reachable[v as usize][u as usize]
                        );
                    }
                }

                assert_eq!(
                    sccs.components().iter().map(|c| c.len()).sum::<usize>(),
                    n as usize
                );
                for (id, members) in sccs.components().iter().enumerate() {
                    assert!(members.iter().all(|&u| sccs.component_ids()[u as usize] == id as Node));
                }
            }
        }
    }

    #[test]
    fn scc_long_cycle() {
        // assert that we can deal with very deep stacks
        let n: Node = 10_000;
        let graph = directed_cycle(n);
        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 1);
        assert_eq!(sccs.components()[0].len(), n as usize);
        assert!(graph.is_strongly_connected());
    }

    #[test]
    fn empty_graph() {
        let sccs = DirectedGraph::new(0).strongly_connected_components();
        assert_eq!(sccs.number_of_components(), 0);
        assert!(sccs.component_graph().is_empty());
    }
}
