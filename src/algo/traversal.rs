/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- [`DfsEvents`], a depth-first search on an explicit stack that reports every discovery,
  every revisited arc and every finished vertex. Cycle detection, topological sorting and
  Kosaraju's algorithm are all built on it.
- The analyses [`BreadthFirstSearch`] (distances, shortest paths) and [`DepthFirstSearch`]
  (predecessors, discovery and finish times).
- Abstractions (`TraversalTree`, `RankFromOrder`) that turn traversals into parent arrays,
  rankings, or depth arrays.
- A high-level `Traversal` trait that exposes traversal algorithms
  directly as methods on graph data structures.

Every traversal owns its per-vertex [`Color`]s; nothing is shared between two searches.
*/

use super::*;
use std::{collections::VecDeque, iter::FusedIterator, marker::PhantomData};

/// Per-vertex state of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Not seen yet
    #[default]
    Unvisited,
    /// Discovered, but not all of its neighbors were explored yet
    InProgress,
    /// Discovered and completely explored
    Finished,
}

/// Common interface for querying the colors of a traversal.
pub trait TraversalState {
    /// Returns the colors of all vertices
    fn colors(&self) -> &[Color];

    /// Returns the current color of `u`
    fn color_of(&self, u: Node) -> Color {
        self.colors()[u as usize]
    }

    /// Checks if a given node `u` has already been visited.
    fn did_visit_node(&self, u: Node) -> bool {
        self.color_of(u) != Color::Unvisited
    }
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns a clone of the next node without removing it.
    fn peek(&self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn peek(&self) -> Option<T> {
        self.front().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T>
where
    T: Clone,
{
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn peek(&self) -> Option<T> {
        self.last().cloned()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit and the colors of all
/// nodes: a node becomes `InProgress` when it enters the frontier and `Finished` once it was
/// yielded and its neighbors were pushed.
/// Parameterized by the container type for the frontier and the type of
/// items yielded (either `Node` or `PredecessorOfNode`).
///
/// Note that the stack-based variant marks nodes when they are pushed, so its order is a
/// valid preorder but it does not report finish times. Use [`DfsEvents`] for that.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    colors: Vec<Color>,
    sequencer: S,
    stop_at: Option<Node>,
    potentially_unvisited: Node,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> WithGraphRef<G> for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I> TraversalState for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if self.colors[v as usize] == Color::Unvisited {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                    self.colors[v as usize] = Color::InProgress;
                }
            }
        }

        self.colors[u as usize] = Color::Finished;
        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut colors = vec![Color::Unvisited; graph.len()];
        colors[start as usize] = Color::InProgress;
        Self {
            graph,
            colors,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            potentially_unvisited: 0,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        while self.potentially_unvisited < self.graph.number_of_nodes() {
            let u = self.potentially_unvisited;
            self.potentially_unvisited += 1;

            if self.colors[u as usize] == Color::Unvisited {
                self.colors[u as usize] = Color::InProgress;
                self.sequencer.push(I::new_without_predecessor(u));
                return true;
            }
        }
        false
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken. If the node was already visited,
    /// this is a non-op.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already on the stack. It is therefore highly
    /// recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        if self.colors[u as usize] == Color::Unvisited {
            self.colors[u as usize] = Color::Finished;
        }
    }

    /// Builder-variant of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Exclude multiple nodes from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_node`].
    pub fn exclude_nodes<N>(&mut self, us: N)
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
    }

    /// Builder-variant of [`TraversalSearch::exclude_nodes`]
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        self.exclude_nodes(us);
        self
    }

    /// Consumes the traversal search and returns true iff there exists a (directed) path
    /// with at least one edge from the start node to `u`.
    ///
    /// # Warning
    /// It is undefined behavior to call the method on a partially executed iterator.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 1);
        self.next();
        // `u` may be the start node, which is finished by now
        if self.colors[u as usize] == Color::Finished {
            self.colors[u as usize] = Color::Unvisited;
        }
        self.any(|v| v.item() == u)
    }
}

impl<G, S, I> FusedIterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
}

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let ranking = g.bfs(0).ranking().unwrap();
    /// assert_eq!(ranking, vec![0, 1, 2]);
    /// ```
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<'a, G, S> RankFromOrder<'a, G> for TraversalSearch<'a, G, S, Node>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    /// Unvisited entries remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array of size `graph.len()` where
    /// each node is initially set to be its own parent.
    /// Then fills in the traversal tree structure using `parent_array_into`.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(2, [(0, 1)]).unwrap();
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited node in
    /// the traversal tree (root depth = 0).
    /// Unvisited entries remain unchanged.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Constructs a fresh depth array of size `graph.len()` initialized with 0.
    /// Then fills in the traversal tree depths using `depths_into`.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let depths = g.bfs_with_predecessor(0).depths();
    /// assert_eq!(depths, vec![0, 1, 2]);
    /// ```
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![0; self.graph_ref().number_of_nodes() as usize];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// A single step of a depth-first search, see [`DfsEvents`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DfsEvent {
    /// `node` is seen for the first time and becomes `InProgress`.
    /// `parent` is `None` iff `node` is the root of a new DFS tree.
    Discover { node: Node, parent: Option<Node> },
    /// The arc `from -> to` leads to a vertex that was already discovered.
    /// `color` is the color of `to` at that time; `InProgress` means `from -> to` is a back edge.
    Revisit { from: Node, to: Node, color: Color },
    /// All neighbors of `node` were explored and it becomes `Finished`
    Finish(Node),
}

/// Depth-first search over all vertices reporting every step as a [`DfsEvent`].
///
/// A recursive DFS overflows the call stack on long paths. Instead we keep an explicit
/// call stack of `(node, position in its neighborhood)` frames: a frame is resumed at the
/// neighbor where it left off, which requires an [`IndexedAdjacencyList`].
///
/// Roots are taken in increasing order by default; after a tree is finished the search
/// restarts at the next root that is still unvisited. [`DfsEvents::with_roots`] replaces
/// the candidate roots (and their order).
///
/// # Examples
/// ```
/// use grafo::{prelude::*, algo::*};
///
/// let g = DirectedGraph::from_edges(2, [(0, 1)]).unwrap();
/// let events: Vec<_> = g.dfs_events().collect();
/// assert_eq!(events, vec![
///     DfsEvent::Discover { node: 0, parent: None },
///     DfsEvent::Discover { node: 1, parent: Some(0) },
///     DfsEvent::Finish(1),
///     DfsEvent::Finish(0),
/// ]);
/// ```
pub struct DfsEvents<'a, G>
where
    G: IndexedAdjacencyList,
{
    graph: &'a G,
    colors: Vec<Color>,
    call_stack: Vec<StackFrame>,
    roots: Option<Vec<Node>>,
    next_root: usize,
}

#[derive(Debug, Clone, Copy)]
struct StackFrame {
    node: Node,
    next_neighbor: NumNodes,
}

impl<'a, G> DfsEvents<'a, G>
where
    G: IndexedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            colors: vec![Color::Unvisited; graph.len()],
            call_stack: Vec::with_capacity(32),
            roots: None,
            next_root: 0,
        }
    }

    /// Only starts new trees at the given roots, in the given order.
    /// Roots that were already visited by an earlier tree are skipped.
    /// ** Panics during iteration if a root is `>= n` **
    pub fn set_roots<I>(&mut self, roots: I)
    where
        I: IntoIterator<Item = Node>,
    {
        self.roots = Some(roots.into_iter().collect());
        self.next_root = 0;
    }

    /// Builder-variant of [`DfsEvents::set_roots`]
    pub fn with_roots<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.set_roots(roots);
        self
    }

    /// Consumes the search and returns all vertices in the order they were finished
    pub fn finish_order(self) -> Vec<Node> {
        self.filter_map(|event| match event {
            DfsEvent::Finish(u) => Some(u),
            _ => None,
        })
        .collect()
    }

    fn next_root(&mut self) -> Option<Node> {
        loop {
            let root = match &self.roots {
                Some(roots) => *roots.get(self.next_root)?,
                None if self.next_root < self.graph.len() => self.next_root as Node,
                None => return None,
            };
            self.next_root += 1;

            if self.colors[root as usize] == Color::Unvisited {
                return Some(root);
            }
        }
    }

    fn discover(&mut self, node: Node) {
        self.colors[node as usize] = Color::InProgress;
        self.call_stack.push(StackFrame {
            node,
            next_neighbor: 0,
        });
    }
}

impl<G> WithGraphRef<G> for DfsEvents<'_, G>
where
    G: IndexedAdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> TraversalState for DfsEvents<'_, G>
where
    G: IndexedAdjacencyList,
{
    fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl<G> Iterator for DfsEvents<'_, G>
where
    G: IndexedAdjacencyList,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(frame) = self.call_stack.last_mut() {
            let u = frame.node;

            if frame.next_neighbor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, frame.next_neighbor);
                frame.next_neighbor += 1;

                return Some(match self.colors[v as usize] {
                    Color::Unvisited => {
                        self.discover(v);
                        DfsEvent::Discover {
                            node: v,
                            parent: Some(u),
                        }
                    }
                    color => DfsEvent::Revisit {
                        from: u,
                        to: v,
                        color,
                    },
                });
            }

            self.call_stack.pop();
            self.colors[u as usize] = Color::Finished;
            return Some(DfsEvent::Finish(u));
        }

        let root = self.next_root()?;
        self.discover(root);
        Some(DfsEvent::Discover {
            node: root,
            parent: None,
        })
    }
}

impl<G> FusedIterator for DfsEvents<'_, G> where G: IndexedAdjacencyList {}

/// Depth-first forest of a graph with predecessors and discovery/finish times.
///
/// Discovery and finish events share one clock that starts at `1`, so for any two
/// discovered vertices their `[discovery, finish]` intervals are either nested or disjoint.
/// Vertices never reached keep time `0`.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    predecessors: Vec<Option<OptionalNode>>,
    discovery: Vec<NumNodes>,
    finish: Vec<NumNodes>,
}

impl DepthFirstSearch {
    /// Searches from every vertex in increasing order
    pub fn new<G: IndexedAdjacencyList>(graph: &G) -> Self {
        Self::from_events(graph, DfsEvents::new(graph))
    }

    /// Searches only from `source`
    pub fn from_source<G: IndexedAdjacencyList>(graph: &G, source: Node) -> Result<Self> {
        graph.check_vertex(source)?;
        Ok(Self::from_events(
            graph,
            DfsEvents::new(graph).with_roots([source]),
        ))
    }

    fn from_events<G: IndexedAdjacencyList>(graph: &G, events: DfsEvents<'_, G>) -> Self {
        let n = graph.len();
        let mut search = Self {
            predecessors: vec![None; n],
            discovery: vec![0; n],
            finish: vec![0; n],
        };

        let mut time: NumNodes = 0;
        for event in events {
            match event {
                DfsEvent::Discover { node, parent } => {
                    time += 1;
                    search.discovery[node as usize] = time;
                    search.predecessors[node as usize] = parent.and_then(OptionalNode::new);
                }
                DfsEvent::Finish(node) => {
                    time += 1;
                    search.finish[node as usize] = time;
                }
                DfsEvent::Revisit { .. } => {}
            }
        }

        search
    }

    /// Returns the parent of `v` in the DFS forest
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|p| p.get())
    }

    /// ** Panics if `v >= n` **
    pub fn discovery_time(&self, v: Node) -> NumNodes {
        self.discovery[v as usize]
    }

    /// ** Panics if `v >= n` **
    pub fn finish_time(&self, v: Node) -> NumNodes {
        self.finish[v as usize]
    }

    /// Returns *true* if `v` was reached by the search
    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        self.discovery[v as usize] > 0
    }

    /// Returns the tree path from the root of `v`'s DFS tree to `v`
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessor(u) {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first search from a single source with distances and shortest paths.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    source: Node,
    distances: Vec<Option<NumNodes>>,
    predecessors: Vec<Option<Node>>,
}

impl BreadthFirstSearch {
    /// Fails if `source >= n`
    pub fn new<G: AdjacencyList>(graph: &G, source: Node) -> Result<Self> {
        graph.check_vertex(source)?;

        let n = graph.len();
        let mut distances = vec![None; n];
        let mut predecessors = vec![None; n];

        for item in graph.bfs_with_predecessor(source) {
            let (pred, v) = item.predecessor_with_item();
            distances[v as usize] = Some(
                pred.and_then(|p| distances[p as usize])
                    .map_or(0, |d: NumNodes| d + 1),
            );
            predecessors[v as usize] = pred;
        }

        Ok(Self {
            source,
            distances,
            predecessors,
        })
    }

    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of edges on a shortest path from the source to `v`
    /// or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance(&self, v: Node) -> Option<NumNodes> {
        self.distances[v as usize]
    }

    /// Returns the distances of all vertices
    pub fn distances(&self) -> &[Option<NumNodes>] {
        &self.distances
    }

    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize]
    }

    /// ** Panics if `v >= n` **
    pub fn has_path_to(&self, v: Node) -> bool {
        self.distances[v as usize].is_some()
    }

    /// Returns a path with the fewest edges from the source to `v`, both included
    /// ** Panics if `v >= n` **
    pub fn shortest_path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.has_path_to(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessors[u as usize] {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(2, [(0, 1)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = UndirectedGraph::from_edges(2, [(0, 1)]).unwrap();
    ///
    /// let mut it = g.bfs_with_predecessor(0);
    /// assert_eq!(it.next().unwrap().item(), 0);
    /// assert_eq!(it.next().unwrap().predecessor(), Some(0));
    /// ```
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns the event stream of a depth-first search over all vertices
    fn dfs_events(&self) -> DfsEvents<'_, Self>
    where
        Self: IndexedAdjacencyList,
    {
        DfsEvents::new(self)
    }

    /// Computes BFS distances and shortest paths from `source`.
    /// Fails if `source >= n`.
    fn breadth_first_search(&self, source: Node) -> Result<BreadthFirstSearch> {
        BreadthFirstSearch::new(self, source)
    }

    /// Computes the DFS forest with discovery and finish times
    fn depth_first_search(&self) -> DepthFirstSearch
    where
        Self: IndexedAdjacencyList,
    {
        DepthFirstSearch::new(self)
    }

    /// Returns a topological order of the vertices or fails with
    /// [`GraphError::NotAcyclic`] if the graph has a cycle.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges(3, [(1, 2), (0, 1)]).unwrap();
    /// assert_eq!(g.topological_order().unwrap(), vec![0, 1, 2]);
    /// ```
    fn topological_order(&self) -> Result<Vec<Node>>
    where
        Self: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        TopologicalOrder::new(self).into_order()
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(g.is_acyclic());
    /// ```
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList + IndexedAdjacencyList,
    {
        !DirectedCycle::new(self).has_cycle()
    }

    /// Returns `true` if node `u` lies on a directed cycle.
    ///
    /// # Examples
    /// ```
    /// use grafo::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges(3, [(0, 1), (1, 2), (2, 1)]).unwrap();
    /// assert!(!g.is_node_on_cycle(0));
    /// assert!(g.is_node_on_cycle(1));
    /// ```
    fn is_node_on_cycle(&self, u: Node) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        self.bfs(u).is_node_reachable(u)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::testing::random_directed_graph;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = DirectedGraph::from_edges(
            6,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        )
        .unwrap();

        {
            let order: Vec<Node> = graph.bfs(1).collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
            assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
            assert_eq!(order[5], 3);
        }

        {
            let order: Vec<Node> = BFS::new(&graph, 5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = DirectedGraph::from_edges(
            6,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        )
        .unwrap();

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn test_stopper() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);

        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn bfs_tree() {
        let graph = DirectedGraph::from_edges(
            6,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        )
        .unwrap();
        let tree = graph.bfs_with_predecessor(1).parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 2, 0]);
    }

    #[test]
    fn restart_and_exclude() {
        let graph = UndirectedGraph::from_edges(5, [(0, 1), (3, 4)]).unwrap();

        let mut bfs = graph.bfs(0).with_node_excluded(4);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3]);
        assert!(!bfs.try_restart_at_unvisited());
        assert_eq!(bfs.color_of(4), Color::Finished);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph =
            DirectedGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]).unwrap();

        {
            let order: Vec<Node> = DFS::new(&graph, 1).collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);

            if order[1] == 2 {
                assert_eq!(order[2..6], [0, 5, 4, 3]);
            } else {
                assert_eq!(order[1..6], [0, 5, 4, 3, 2]);
            }
        }

        {
            let order: Vec<Node> = graph.dfs(5).collect();
            assert_eq!(order, [5, 4, 3]);
        }
    }

    #[test]
    fn dfs_tree() {
        let graph =
            DirectedGraph::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]).unwrap();
        let tree = graph.dfs_with_predecessor(1).parent_array();
        assert_eq!(tree, vec![1, 1, 1, 4, 5, 0]);

        let depths = graph.dfs_with_predecessor(1).depths();
        assert_eq!(depths, vec![1, 0, 1, 4, 3, 2]);
    }

    #[test]
    fn dfs_events() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 3)]).unwrap();

        use DfsEvent::*;
        assert_eq!(
            graph.dfs_events().collect_vec(),
            vec![
                Discover {
                    node: 0,
                    parent: None
                },
                Discover {
                    node: 1,
                    parent: Some(0)
                },
                Discover {
                    node: 2,
                    parent: Some(1)
                },
                Revisit {
                    from: 2,
                    to: 0,
                    color: Color::InProgress
                },
                Finish(2),
                Finish(1),
                Discover {
                    node: 3,
                    parent: Some(0)
                },
                Finish(3),
                Finish(0),
            ]
        );
    }

    #[test]
    fn dfs_events_with_roots() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (2, 1), (3, 3)]).unwrap();

        let roots = graph
            .dfs_events()
            .with_roots([2, 0, 2])
            .filter_map(|e| match e {
                DfsEvent::Discover { node, parent: None } => Some(node),
                _ => None,
            })
            .collect_vec();
        assert_eq!(roots, vec![2, 0]);

        assert_eq!(graph.dfs_events().finish_order(), vec![1, 0, 2, 3]);
        assert!(graph.dfs_events().any(|e| e
            == DfsEvent::Revisit {
                from: 3,
                to: 3,
                color: Color::InProgress
            }));
    }

    #[test]
    fn depth_first_search_times() {
        let graph = DirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 3)]).unwrap();
        let dfs = graph.depth_first_search();

        assert_eq!(
            (0..4).map(|u| dfs.discovery_time(u)).collect_vec(),
            vec![1, 2, 3, 6]
        );
        assert_eq!(
            (0..4).map(|u| dfs.finish_time(u)).collect_vec(),
            vec![8, 5, 4, 7]
        );
        assert_eq!(dfs.predecessor(0), None);
        assert_eq!(dfs.predecessor(2), Some(1));
        assert_eq!(dfs.path_to(2), Some(vec![0, 1, 2]));

        let from_three = DepthFirstSearch::from_source(&graph, 3).unwrap();
        assert!(from_three.has_path_to(3));
        assert!(!from_three.has_path_to(0));
        assert_eq!(from_three.path_to(1), None);
        assert!(DepthFirstSearch::from_source(&graph, 4).is_err());
    }

    #[test]
    fn depth_first_search_intervals_nest() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5, 20, 100] {
            let graph = random_directed_graph(rng, n, 3 * n);
            let dfs = graph.depth_first_search();

            for u in 0..n {
                assert!(dfs.discovery_time(u) < dfs.finish_time(u));
                for v in 0..n {
                    let (du, fu) = (dfs.discovery_time(u), dfs.finish_time(u));
                    let (dv, fv) = (dfs.discovery_time(v), dfs.finish_time(v));
                    let disjoint = fu < dv || fv < du;
                    let nested = (du <= dv && fv <= fu) || (dv <= du && fu <= fv);
                    assert!(disjoint || nested);
                }
                if let Some(p) = dfs.predecessor(u) {
                    assert!(graph.has_edge(p, u));
                    assert!(dfs.discovery_time(p) < dfs.discovery_time(u));
                    assert!(dfs.finish_time(u) < dfs.finish_time(p));
                }
            }
        }
    }

    #[test]
    fn dfs_long_path() {
        let n: Node = 200_000;
        let graph = DirectedGraph::from_edges(n, (1..n).map(|u| (u - 1, u))).unwrap();
        let dfs = graph.depth_first_search();
        assert_eq!(dfs.finish_time(0), 2 * n);
        assert_eq!(dfs.discovery_time(n - 1), n);
    }

    #[test]
    fn breadth_first_search() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = UndirectedGraph::from_edges(
            7,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        )
        .unwrap();
        let bfs = graph.breadth_first_search(1).unwrap();

        assert_eq!(bfs.source(), 1);
        assert_eq!(
            bfs.distances(),
            &[Some(1), Some(0), Some(1), Some(3), Some(2), Some(2), None]
        );
        assert!(!bfs.has_path_to(6));
        assert_eq!(bfs.shortest_path_to(6), None);
        assert_eq!(bfs.shortest_path_to(1), Some(vec![1]));
        assert_eq!(bfs.shortest_path_to(3), Some(vec![1, 2, 4, 3]));
        assert_eq!(bfs.predecessor(5), Some(0));

        assert!(matches!(
            graph.breadth_first_search(7),
            Err(GraphError::VertexOutOfRange { vertex: 7, .. })
        ));
    }

    #[test]
    fn breadth_first_search_paths_are_shortest() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5, 30, 80] {
            let graph = random_directed_graph(rng, n, 2 * n);
            let bfs = graph.breadth_first_search(0).unwrap();

            for Edge(u, v) in graph.edges(false) {
                if let Some(du) = bfs.distance(u) {
                    let dv = bfs.distance(v).unwrap();
                    assert!(dv <= du + 1);
                }
            }
            for v in 0..n {
                if let Some(path) = bfs.shortest_path_to(v) {
                    assert_eq!(path.len() as NumNodes, bfs.distance(v).unwrap() + 1);
                    assert!(path.iter().tuple_windows().all(|(&a, &b)| graph.has_edge(a, b)));
                }
            }
        }
    }

    #[test]
    fn node_on_cycle() {
        let mut graph =
            DirectedGraph::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 0), (3, 4), (4, 5)])
                .unwrap();
        assert!(graph.is_node_on_cycle(0));
        assert!(graph.is_node_on_cycle(1));
        assert!(graph.is_node_on_cycle(2));
        assert!(graph.is_node_on_cycle(3));
        assert!(!graph.is_node_on_cycle(4));
        assert!(!graph.is_node_on_cycle(5));

        graph.add_edge(5, 2).unwrap();
        assert!(graph.vertices().all(|u| graph.is_node_on_cycle(u)));
    }
}
