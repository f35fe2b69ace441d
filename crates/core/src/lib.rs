//! # Hydronet Core
//!
//! Core types, traits and errors for the hydronet drainage-network library.
//!
//! This crate provides:
//! - `Mesh`: the topology interface the routing algorithms traverse
//! - `StructuredMesh`: a rectangular node mesh implementation
//! - Error taxonomy shared by all algorithms
//! - The `Algorithm` trait for a consistent API

pub mod error;
pub mod mesh;

pub use error::{Error, Result};
pub use mesh::{Mesh, StructuredMesh, NO_NODE};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::mesh::{Mesh, StructuredMesh, NO_NODE};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in hydronet.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
