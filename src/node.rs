/*!
# Vertex Representation

Vertices are plain indices `0..n` of type `Node = u32`. There is no vertex object:
every per-vertex datum lives in a `Vec` indexed by the vertex itself, and is owned
by whichever graph or analysis computed it.
*/

use std::num::NonZero;

/// Vertices can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// `Option<Node>` needs padding and doubles the size of `Vec<Option<Node>>`.
/// This wrapper stores `n ^ N` in a `NonZero` so that `Option<OptionalNodeImpl<N>>`
/// has the size of a plain `Node` and uses `N` as its `None`-Value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a vertex and hence safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}
