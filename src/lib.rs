/*!
`grafo` is a library of classical graph algorithms on graphs whose vertices are the
dense indices `0..n`.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Per-vertex state is never attached to a vertex object; it lives in vectors indexed by the vertex.
For plain **edges**, we use a simple tuple-struct `Edge(Node, Node)`; the stored links are the
weighted [`Arc`] (directed) and [`UndirectedEdge`].

See the [`repr`] module for the two representations:

- [`DirectedGraph`](crate::repr::DirectedGraph): outgoing arcs plus in-degree counters
- [`UndirectedGraph`](crate::repr::UndirectedGraph): every edge stored at both endpoints

Both reject duplicate edges; undirected graphs also reject self-loops.

# Design

Algorithms are provided as structs that do all their work in the constructor and afterwards
only answer queries. Constructors of analyses with a structural precondition (e.g. a strongly
connected graph for [`EulerianCircuit`](crate::algo::EulerianCircuit)) return a [`Result`].
Depth-first searches never recurse: they run on an explicit stack of frames, so arbitrarily
deep graphs are fine.

The most commonly used functionality is also available via traits implemented on the graphs
themselves (`graph.bfs(u)`, `graph.strongly_connected_components()`, ...).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and both graph representations,
- [`algo`] includes traversals, cycle detection, topological order, (strongly) connected components,
  2-SAT, Eulerian circuits, bipartiteness, lowest common ancestors, distance metrics and spanning trees,
- [`io`] includes readers and writers for the edge-list graph format and the 2-CNF formula format,
- [`utils`] includes helpers such as [`DisjointSets`](crate::utils::DisjointSets).

In most use-cases, `use grafo::{prelude::*, algo::*};` suffices for your needs.

```
use grafo::{prelude::*, algo::*};

let formula: TwoCnf = "0 1\n-0 1\n-1 2".parse().unwrap();
let solver = TwoSatSolver::new(&formula);
assert!(solver.is_satisfiable());
assert!(formula.is_satisfied_by(solver.assignment().unwrap()));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `grafo::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
