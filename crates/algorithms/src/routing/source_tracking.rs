//! Source-attribution flow accumulation
//!
//! A customized variant of flow accumulation: besides counting the nodes
//! draining through each node, it records *which* hydrologic source domain
//! (HSD) every unit of upstream area came from, as an ordered multiset of
//! HSD ids per node.
//!
//! The traversal is brute force and revisit tolerant. Core nodes are
//! processed in descending elevation order rather than topological order,
//! so a downstream node can be reached by different upstream segments at
//! different times; each new tributary replays its frozen segment buffer
//! over every node down to the outlet. This trades repeated visits of
//! already-resolved nodes for not having to maintain explicit tree
//! bookkeeping.

use ndarray::Array1;

use hydronet_core::mesh::Mesh;
use hydronet_core::{Algorithm, Error, Result, StructuredMesh};

/// Output of [`track_source`], indexed densely by node id.
///
/// Invariant on return: `flow_accum[n] == hsd_upstr[n].len()` for every
/// node. Nodes the traversal never touched (boundary nodes, off-mesh
/// receivers) hold `0` and an empty list.
#[derive(Debug, Clone)]
pub struct SourceTracking<H> {
    /// Count of all nodes (including itself) draining through each node.
    pub flow_accum: Array1<u32>,
    /// HSD id of every upstream contributing node, with repetition, in the
    /// order tributaries were resolved.
    pub hsd_upstr: Vec<Vec<H>>,
}

impl<H> SourceTracking<H> {
    /// Upstream HSD multiset of one node.
    pub fn upstream_sources(&self, node: usize) -> &[H] {
        &self.hsd_upstr[node]
    }
}

/// Track the hydrologic source domains draining through every core node.
///
/// Core nodes are taken in strictly descending elevation order; equal
/// elevations are broken by ascending node id, so two runs over identical
/// inputs produce identical results. Each unvisited node starts a segment
/// that walks the receiver chain to a sink (`receivers[j] == j`) or off the
/// core set, carrying a segment buffer of the HSD ids newly claimed along
/// the way. When the walk merges into a branch an earlier segment already
/// resolved (a confluence), the buffer and its node count freeze, and only
/// the new tributary's contribution propagates downstream.
///
/// # Arguments
/// * `mesh` - Node topology
/// * `elevation` - Elevation per node (`node_count` long)
/// * `receivers` - Receiver node id per node, e.g. from
///   [`decode_flow_codes`](crate::routing::decode_flow_codes)
/// * `hsd_ids` - Source-domain id per node
///
/// # Errors
/// [`Error::CyclicFlowGraph`] if a receiver chain fails to reach a sink
/// within a core-node-count step bound; the whole call fails and no maps
/// are returned. [`Error::SizeMismatch`] if an input field does not cover
/// the node universe.
pub fn track_source<M: Mesh, H: Copy + PartialEq>(
    mesh: &M,
    elevation: &Array1<f64>,
    receivers: &[usize],
    hsd_ids: &Array1<H>,
) -> Result<SourceTracking<H>> {
    let node_count = mesh.node_count();
    for actual in [elevation.len(), receivers.len(), hsd_ids.len()] {
        if actual != node_count {
            return Err(Error::SizeMismatch {
                expected: node_count,
                actual,
            });
        }
    }

    let core = mesh.core_nodes();

    // Descending elevation; ties broken by ascending node id.
    let mut sorted = core.to_vec();
    sorted.sort_by(|&a, &b| elevation[b].total_cmp(&elevation[a]).then(a.cmp(&b)));

    let mut is_core = vec![false; node_count];
    for &node in core {
        is_core[node] = true;
    }

    let mut visited = vec![false; node_count];
    let mut flow_accum = vec![0u32; node_count];
    let mut hsd_upstr: Vec<Vec<H>> = vec![Vec::new(); node_count];

    for &start in &sorted {
        // Already claimed by an earlier segment.
        if visited[start] {
            continue;
        }
        // A sink drains only itself.
        if receivers[start] == start {
            hsd_upstr[start].push(hsd_ids[start]);
            flow_accum[start] += 1;
            visited[start] = true;
            continue;
        }

        // Walk the segment from `start` down to a sink or off the core set.
        // `segment` holds the HSD ids of nodes newly claimed by this walk;
        // `new_nodes` is its length. Both freeze at the first confluence
        // with an already-resolved branch, after which they are replayed
        // unchanged onto every remaining downstream node.
        let mut segment: Vec<H> = Vec::new();
        let mut new_nodes = 0u32;
        let mut steps = 0usize;
        let mut j = start;
        loop {
            // A cycle-free receiver chain can touch each core node at most
            // once, so exceeding the core count means no sink is reachable.
            steps += 1;
            if steps > core.len() {
                return Err(Error::CyclicFlowGraph { node: start });
            }

            if !visited[j] {
                visited[j] = true;
                new_nodes += 1;
                segment.push(hsd_ids[j]);
            }
            flow_accum[j] += new_nodes;
            hsd_upstr[j].extend_from_slice(&segment);

            if receivers[j] == j {
                break; // outlet reached
            }
            j = receivers[j];
            // Receivers may name any id at all, including ones outside the
            // node universe; anything non-core ends the segment.
            if j >= node_count || !is_core[j] {
                break; // flow leaves the tracked domain
            }
        }
    }

    Ok(SourceTracking {
        flow_accum: Array1::from(flow_accum),
        hsd_upstr,
    })
}

/// Source-tracking algorithm
#[derive(Debug, Clone, Default)]
pub struct SourceTracker;

impl Algorithm for SourceTracker {
    type Input = (StructuredMesh, Array1<f64>, Vec<usize>, Array1<u32>);
    type Output = SourceTracking<u32>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Source Tracker"
    }

    fn description(&self) -> &'static str {
        "Elevation-ordered traversal attributing upstream drainage to source domains"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let (mesh, elevation, receivers, hsd_ids) = input;
        track_source(&mesh, &elevation, &receivers, &hsd_ids)
    }
}
