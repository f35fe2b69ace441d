//! Flow-direction code decoding
//!
//! Translates per-node power-of-two flow-direction codes into explicit
//! receiver node ids using the mesh neighbor topology.
//!
//! Code encoding, clockwise starting at the directly-east neighbor:
//! ```text
//!   32  64  128
//!   16   .    1
//!    8   4    2
//! ```
//! so `1`=E, `2`=SE, `4`=S, ..., `128`=NE. Any value outside that set is a
//! decode error for its node; the decoder never defaults silently.

use ndarray::Array1;

use crate::maybe_rayon::*;
use hydronet_core::mesh::Mesh;
use hydronet_core::{Algorithm, Error, Result, StructuredMesh};

/// Eight-direction neighbor ordering for one node, clockwise from east.
///
/// The native orderings are (E, N, W, S) orthogonal and (NE, NW, SW, SE)
/// diagonal; reversing each and interleaving yields
/// `[E, SE, S, SW, W, NW, N, NE]`, so the decoded code exponent indexes
/// straight into this array.
fn clockwise_neighbors<M: Mesh>(mesh: &M, node: usize) -> [usize; 8] {
    let n = mesh.neighbors(node);
    let d = mesh.diagonals(node);
    [n[0], d[3], n[3], d[2], n[2], d[1], n[1], d[0]]
}

/// Decode flow-direction codes into a receiver map.
///
/// For every core node the code must be an exact power of two in
/// {1, 2, 4, 8, 16, 32, 64, 128}; its base-2 logarithm selects the receiver
/// from the clockwise-from-east neighbor ordering. Entries for non-core
/// nodes are left at `0` and carry no meaning, since boundary nodes are
/// excluded from traversal.
///
/// # Arguments
/// * `mesh` - Node topology
/// * `codes` - One flow-direction code per node (`node_count` long)
///
/// # Returns
/// Receiver node id per node
///
/// # Errors
/// [`Error::InvalidFlowCode`] if a core node's code is not a valid power of
/// two; [`Error::SizeMismatch`] if `codes` does not cover the node universe.
pub fn decode_flow_codes<M: Mesh + Sync>(mesh: &M, codes: &Array1<u8>) -> Result<Vec<usize>> {
    if codes.len() != mesh.node_count() {
        return Err(Error::SizeMismatch {
            expected: mesh.node_count(),
            actual: codes.len(),
        });
    }

    let decoded: Vec<(usize, usize)> = mesh
        .core_nodes()
        .to_vec()
        .into_par_iter()
        .map(|node| {
            let code = codes[node];
            if !code.is_power_of_two() {
                return Err(Error::InvalidFlowCode {
                    node,
                    code: code as u32,
                });
            }
            let exponent = code.trailing_zeros() as usize;
            Ok((node, clockwise_neighbors(mesh, node)[exponent]))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut receivers = vec![0usize; mesh.node_count()];
    for (node, receiver) in decoded {
        receivers[node] = receiver;
    }
    Ok(receivers)
}

/// Flow-direction decoding algorithm
#[derive(Debug, Clone, Default)]
pub struct FlowCodeDecoder;

impl Algorithm for FlowCodeDecoder {
    type Input = (StructuredMesh, Array1<u8>);
    type Output = Vec<usize>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Flow Code Decoder"
    }

    fn description(&self) -> &'static str {
        "Decode power-of-two flow-direction codes into receiver node ids"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        decode_flow_codes(&input.0, &input.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_eight_directions() {
        // 3x3 mesh, single core node 4. Clockwise from east the neighbors
        // of node 4 are [5, 2, 1, 0, 3, 6, 7, 8].
        let mesh = StructuredMesh::new(3, 3);
        let expected = [5, 2, 1, 0, 3, 6, 7, 8];

        for (exponent, &neighbor) in expected.iter().enumerate() {
            let mut codes = Array1::zeros(9);
            codes[4] = 1u8 << exponent;
            let r = decode_flow_codes(&mesh, &codes).unwrap();
            assert_eq!(
                r[4], neighbor,
                "code {} should route node 4 to {}",
                1u8 << exponent,
                neighbor
            );
        }
    }

    #[test]
    fn test_decode_leaves_boundary_nodes_unset() {
        let mesh = StructuredMesh::new(3, 3);
        let mut codes = Array1::zeros(9);
        codes[4] = 4u8;
        let r = decode_flow_codes(&mesh, &codes).unwrap();
        for node in [0, 1, 2, 3, 5, 6, 7, 8] {
            assert_eq!(r[node], 0, "boundary node {} should stay unset", node);
        }
    }

    #[test]
    fn test_decode_rejects_non_power_of_two() {
        let mesh = StructuredMesh::new(3, 3);
        let mut codes = Array1::zeros(9);
        codes[4] = 3u8;
        let err = decode_flow_codes(&mesh, &codes).unwrap_err();
        assert!(matches!(err, Error::InvalidFlowCode { node: 4, code: 3 }));
    }

    #[test]
    fn test_decode_rejects_zero() {
        // Core node with code 0: no silent default
        let mesh = StructuredMesh::new(3, 3);
        let codes = Array1::zeros(9);
        let err = decode_flow_codes(&mesh, &codes).unwrap_err();
        assert!(matches!(err, Error::InvalidFlowCode { node: 4, code: 0 }));
    }

    #[test]
    fn test_decode_size_mismatch() {
        let mesh = StructuredMesh::new(3, 3);
        let codes = Array1::zeros(5);
        let err = decode_flow_codes(&mesh, &codes).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 9,
                actual: 5
            }
        ));
    }
}
