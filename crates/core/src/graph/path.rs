//! Fewest-packs path search

use petgraph::{algo::astar, graph::NodeIndex};

use crate::graph::StateGraph;

/// Minimum-edge-count path from the root to the chosen candidate.
///
/// Every edge costs one regardless of its weight: the objective is the
/// fewest packs, and each traversed edge is one pack. Edge weights only
/// record which pack size was subtracted; summing them as the traversal
/// cost would bias the search towards large packs irrespective of how many
/// packs it takes, which is not the policy here.
pub(crate) fn shortest(
    graph: &StateGraph,
    root: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    astar(graph.inner(), root, |node| node == target, |_| 1u32, |_| 0)
        .map(|(_cost, path)| path)
}
