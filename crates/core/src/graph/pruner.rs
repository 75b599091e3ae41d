//! Graph pruning

use petgraph::graph::NodeIndex;
use rustc_hash::FxHashSet;

use crate::graph::StateGraph;

/// Shrink the graph to the subgraph relevant to the chosen candidate.
///
/// Every other candidate is removed together with its incident edges, then
/// dead branches are peeled off: any remaining state other than the chosen
/// candidate with no outgoing edges is removed, repeatedly, until a fixed
/// point. Afterwards the graph is a DAG rooted at the original root whose
/// only terminal state is the chosen candidate.
pub(crate) fn prune(graph: &mut StateGraph, candidates: &FxHashSet<NodeIndex>, chosen: NodeIndex) {
    for &candidate in candidates {
        if candidate != chosen {
            graph.remove(candidate);
        }
    }

    loop {
        let dead: Vec<NodeIndex> = graph
            .node_indices()
            .filter(|&node| node != chosen && graph.out_degree(node) == 0)
            .collect();

        if dead.is_empty() {
            break;
        }

        for node in dead {
            graph.remove(node);
        }
    }
}
