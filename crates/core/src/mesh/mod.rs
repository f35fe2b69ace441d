//! Mesh topology types
//!
//! The routing algorithms traverse a node mesh supplied by a collaborator.
//! This module defines the interface that collaborator must provide
//! ([`Mesh`]) and one concrete implementation ([`StructuredMesh`]).

mod structured;

pub use structured::StructuredMesh;

/// Sentinel id for a missing neighbor (off the mesh edge).
pub const NO_NODE: usize = usize::MAX;

/// Topology interface consumed by the routing algorithms.
///
/// Node ids are dense (`0..node_count()`), so per-node state can live in
/// flat arrays indexed by id instead of hash maps. Core nodes are the
/// interior nodes with all eight neighbors defined; every other node is a
/// boundary node and is excluded from traversal.
pub trait Mesh {
    /// Total number of nodes, boundary nodes included.
    fn node_count(&self) -> usize;

    /// Orthogonal neighbors in fixed (east, north, west, south) order.
    /// Missing neighbors are [`NO_NODE`].
    fn neighbors(&self, node: usize) -> [usize; 4];

    /// Diagonal neighbors in fixed (northeast, northwest, southwest,
    /// southeast) order. Missing neighbors are [`NO_NODE`].
    fn diagonals(&self, node: usize) -> [usize; 4];

    /// Interior node ids, ascending.
    fn core_nodes(&self) -> &[usize];

    /// Whether `node` is a core (interior) node.
    fn is_core(&self, node: usize) -> bool {
        self.core_nodes().binary_search(&node).is_ok()
    }
}
