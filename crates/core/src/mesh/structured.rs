//! Rectangular structured mesh

use super::{Mesh, NO_NODE};

/// A rectangular grid of nodes.
///
/// Node ids run row-major from the bottom-left corner: node `0` is the
/// southwest node, ids increase eastward along each row, and row `r` starts
/// at `r * cols` (north is `id + cols`). The perimeter ring is boundary;
/// everything inside is core.
///
/// # Example
///
/// ```
/// use hydronet_core::mesh::{Mesh, StructuredMesh};
///
/// let mesh = StructuredMesh::new(4, 5);
/// assert_eq!(mesh.node_count(), 20);
/// // Interior nodes of a 4x5 grid form a 2x3 block
/// assert_eq!(mesh.core_nodes(), &[6, 7, 8, 11, 12, 13]);
/// ```
#[derive(Debug, Clone)]
pub struct StructuredMesh {
    rows: usize,
    cols: usize,
    core: Vec<usize>,
}

impl StructuredMesh {
    /// Create a mesh of `rows x cols` nodes.
    ///
    /// Meshes smaller than 3x3 have no interior and therefore no core nodes.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut core = Vec::new();
        if rows >= 3 && cols >= 3 {
            core.reserve((rows - 2) * (cols - 2));
            for row in 1..rows - 1 {
                for col in 1..cols - 1 {
                    core.push(row * cols + col);
                }
            }
        }
        Self { rows, cols, core }
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Node id at (row, col)
    pub fn node_id(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// (row, col) of a node id
    pub fn node_row_col(&self, node: usize) -> (usize, usize) {
        (node / self.cols, node % self.cols)
    }

    /// Boundary node ids, ascending
    pub fn perimeter_nodes(&self) -> Vec<usize> {
        (0..self.node_count()).filter(|&n| !self.is_core(n)).collect()
    }

    fn offset(&self, node: usize, dr: isize, dc: isize) -> usize {
        let (row, col) = self.node_row_col(node);
        let nr = row as isize + dr;
        let nc = col as isize + dc;
        if nr < 0 || nc < 0 || nr >= self.rows as isize || nc >= self.cols as isize {
            NO_NODE
        } else {
            nr as usize * self.cols + nc as usize
        }
    }
}

impl Mesh for StructuredMesh {
    fn node_count(&self) -> usize {
        self.rows * self.cols
    }

    fn neighbors(&self, node: usize) -> [usize; 4] {
        [
            self.offset(node, 0, 1),  // E
            self.offset(node, 1, 0),  // N
            self.offset(node, 0, -1), // W
            self.offset(node, -1, 0), // S
        ]
    }

    fn diagonals(&self, node: usize) -> [usize; 4] {
        [
            self.offset(node, 1, 1),   // NE
            self.offset(node, 1, -1),  // NW
            self.offset(node, -1, -1), // SW
            self.offset(node, -1, 1),  // SE
        ]
    }

    fn core_nodes(&self) -> &[usize] {
        &self.core
    }

    fn is_core(&self, node: usize) -> bool {
        if node >= self.node_count() {
            return false;
        }
        let (row, col) = self.node_row_col(node);
        row >= 1 && row + 1 < self.rows && col >= 1 && col + 1 < self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_creation() {
        let mesh = StructuredMesh::new(5, 5);
        assert_eq!(mesh.node_count(), 25);
        assert_eq!(mesh.shape(), (5, 5));
        assert_eq!(mesh.core_nodes().len(), 9);
    }

    #[test]
    fn test_interior_neighbors() {
        // 3x3 mesh, center node 4: all eight neighbors defined
        let mesh = StructuredMesh::new(3, 3);
        assert_eq!(mesh.core_nodes(), &[4]);
        assert_eq!(mesh.neighbors(4), [5, 7, 3, 1]);
        assert_eq!(mesh.diagonals(4), [8, 6, 0, 2]);
    }

    #[test]
    fn test_edge_neighbors_missing() {
        let mesh = StructuredMesh::new(3, 3);
        // Southwest corner: no west, no south
        let n = mesh.neighbors(0);
        assert_eq!(n[0], 1); // E
        assert_eq!(n[1], 3); // N
        assert_eq!(n[2], NO_NODE); // W
        assert_eq!(n[3], NO_NODE); // S
    }

    #[test]
    fn test_core_membership() {
        let mesh = StructuredMesh::new(4, 5);
        assert!(mesh.is_core(7));
        assert!(!mesh.is_core(0));
        assert!(!mesh.is_core(19)); // top-right corner
        assert!(!mesh.is_core(99)); // out of range
        assert_eq!(
            mesh.perimeter_nodes().len() + mesh.core_nodes().len(),
            mesh.node_count()
        );
    }

    #[test]
    fn test_degenerate_mesh_has_no_core() {
        assert!(StructuredMesh::new(2, 8).core_nodes().is_empty());
        assert!(StructuredMesh::new(8, 1).core_nodes().is_empty());
    }
}
