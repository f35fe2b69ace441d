//! Drainage-network routing algorithms
//!
//! Source attribution over a single-flow-direction receiver network:
//! - Flow-code decoding: power-of-two direction codes to receiver node ids
//! - Source tracking: elevation-ordered traversal producing per-node
//!   upstream counts and upstream source-domain multisets
//! - Contributions: reduction of each multiset to unique source-domain ids
//!   and fractional shares

pub(crate) mod contributions;
pub(crate) mod flow_codes;
pub(crate) mod source_tracking;

pub use contributions::{
    node_contributions, unique_source_fractions, ContributionAggregator, SourceFractions,
};
pub use flow_codes::{decode_flow_codes, FlowCodeDecoder};
pub use source_tracking::{track_source, SourceTracker, SourceTracking};
