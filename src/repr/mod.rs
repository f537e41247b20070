/*!
# Graph Representations

Both representations store, for every vertex, the list of incident links in insertion order:

- [`DirectedGraph`] keeps the outgoing [`Arc`]s of every vertex plus a counter of incoming arcs.
- [`UndirectedGraph`] keeps every [`UndirectedEdge`] in the lists of both endpoints.

Insertion rejects duplicates, and the undirected variant also rejects self-loops.
*/

use crate::{ops::*, *};

mod directed;
mod undirected;

pub use directed::*;
pub use undirected::*;

pub(crate) mod macros {
    /// Implements the read-only operations shared by both representations on top of a
    /// `Vec<Vec<L>>` field of links `L: Link`.
    macro_rules! impl_common_graph_ops {
        ($struct:ident => $nbs:ident, $directed:ident) => {
            impl GraphType for $struct {
                type Dir = $directed;
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl AdjacencyList for $struct {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize]
                        .iter()
                        .map(move |link| link.other_endpoint(u))
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].len() as NumNodes
                }
            }

            impl WeightedAdjacencyList for $struct {
                fn weighted_neighbors_of(
                    &self,
                    u: Node,
                ) -> impl Iterator<Item = (Node, Weight)> + '_ {
                    self.$nbs[u as usize]
                        .iter()
                        .map(move |link| (link.other_endpoint(u), link.weight()))
                }
            }

            impl IndexedAdjacencyList for $struct {
                #[inline]
                fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
                    self.$nbs[u as usize][i as usize].other_endpoint(u)
                }
            }

            impl AdjacencyTest for $struct {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    self.$nbs[u as usize]
                        .iter()
                        .any(|link| link.other_endpoint(u) == v)
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
