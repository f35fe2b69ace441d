//! # Hydronet Algorithms
//!
//! Drainage-network routing algorithms for hydronet.
//!
//! ## Available Algorithm Categories
//!
//! - **routing**: Flow-code decoding, source-attribution flow accumulation,
//!   upstream-contribution aggregation

pub mod routing;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::routing::{
        decode_flow_codes, node_contributions, track_source, unique_source_fractions,
        ContributionAggregator, FlowCodeDecoder, SourceFractions, SourceTracker, SourceTracking,
    };
    pub use hydronet_core::prelude::*;
}
