/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use grafo::algo::*;
```
and gain access to traversals, cycle detection, topological sorting, strongly connected components,
2-SAT and the other classical routines.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
Everything else is computed eagerly by a constructor and afterwards only queried.
*/

mod bipartite;
mod connectivity;
mod cycle;
mod euler;
mod lca;
mod metrics;
mod spanning_tree;
mod topological;
mod traversal;
mod two_sat;

use crate::{prelude::*, utils::*};

pub use bipartite::*;
pub use connectivity::*;
pub use cycle::*;
pub use euler::*;
pub use lca::*;
pub use metrics::*;
pub use spanning_tree::*;
pub use topological::*;
pub use traversal::*;
pub use two_sat::*;
