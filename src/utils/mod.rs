/*!
# Utilities

Helper structures shared by the algorithms:
- [`DisjointSets`]: union-find over `0..n`, used for spanning trees and component partitions,
- [`WithGraphRef`]: access to the graph an iterator or algorithm operates on.
*/

pub mod disjoint_sets;

pub use disjoint_sets::DisjointSets;

/// Implemented by iterators and analyses borrowing a graph
pub trait WithGraphRef<G> {
    /// Returns the graph being worked on
    fn graph_ref(&self) -> &G;
}
