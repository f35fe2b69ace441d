//! Upstream-contribution aggregation
//!
//! Reduces each node's upstream HSD multiset to the set of distinct source
//! domains present and their fractional share of the node's accumulated
//! drainage.

use crate::routing::source_tracking::SourceTracking;
use hydronet_core::{Algorithm, Error, Result};

/// Distinct upstream HSD ids of one node and their contribution shares.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFractions<H> {
    /// Distinct upstream HSD ids in first-encountered order. The ordering
    /// is part of the contract: ids appear in the order they first occur in
    /// the node's upstream multiset.
    pub unique_ids: Vec<H>,
    /// Fraction of the node's accumulated count contributed by each id,
    /// aligned positionally with `unique_ids`. Sums to 1.
    pub coefficients: Vec<f64>,
}

/// Aggregate one node's upstream multiset into unique ids and fractions.
///
/// Occurrences are counted with a positional scan over the ids seen so far,
/// which keeps the first-encountered ordering explicit instead of leaning
/// on hash-map iteration order.
///
/// # Errors
/// [`Error::DegenerateNode`] if the sequence is empty; a tracked node
/// always drains at least itself, so an empty sequence means the input did
/// not come from a completed traversal.
pub fn node_contributions<H: Copy + PartialEq>(
    node: usize,
    upstream: &[H],
) -> Result<SourceFractions<H>> {
    if upstream.is_empty() {
        return Err(Error::DegenerateNode { node });
    }

    let mut unique_ids: Vec<H> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for &id in upstream {
        match unique_ids.iter().position(|&u| u == id) {
            Some(k) => counts[k] += 1,
            None => {
                unique_ids.push(id);
                counts.push(1);
            }
        }
    }

    let total = upstream.len() as f64;
    let coefficients = counts.iter().map(|&c| c as f64 / total).collect();
    Ok(SourceFractions {
        unique_ids,
        coefficients,
    })
}

/// Aggregate every tracked node of a [`SourceTracking`] result.
///
/// Returns one entry per node id; nodes the traversal never touched
/// (boundary nodes, off-mesh receivers) yield `None`.
pub fn unique_source_fractions<H: Copy + PartialEq>(
    tracking: &SourceTracking<H>,
) -> Result<Vec<Option<SourceFractions<H>>>> {
    tracking
        .hsd_upstr
        .iter()
        .enumerate()
        .map(|(node, upstream)| {
            if tracking.flow_accum[node] == 0 {
                Ok(None)
            } else {
                node_contributions(node, upstream).map(Some)
            }
        })
        .collect()
}

/// Contribution aggregation algorithm
#[derive(Debug, Clone, Default)]
pub struct ContributionAggregator;

impl Algorithm for ContributionAggregator {
    type Input = SourceTracking<u32>;
    type Output = Vec<Option<SourceFractions<u32>>>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Contribution Aggregator"
    }

    fn description(&self) -> &'static str {
        "Reduce upstream HSD multisets to unique ids and fractional shares"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        unique_source_fractions(&input)
    }
}
