//! Error types for hydronet

use thiserror::Error;

/// Main error type for hydronet operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid flow-direction code {code} at node {node} (must be a power of two in 1..=128)")]
    InvalidFlowCode { node: usize, code: u32 },

    #[error("receiver chain starting at node {node} never reaches a sink: cycle in flow graph")]
    CyclicFlowGraph { node: usize },

    #[error("node {node} has no accumulated upstream entries")]
    DegenerateNode { node: usize },

    #[error("node field length mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for hydronet operations
pub type Result<T> = std::result::Result<T, Error>;
