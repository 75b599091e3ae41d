//! Candidate selection

use petgraph::graph::NodeIndex;
use rustc_hash::FxHashSet;

use crate::graph::StateGraph;

/// Pick the candidate closest to zero, i.e. the one with the least overage.
///
/// Candidate values are at or below zero, so the maximum value wins. Equal
/// values are interned to the same node, so no further tie-break is needed.
pub(crate) fn select(graph: &StateGraph, candidates: &FxHashSet<NodeIndex>) -> Option<NodeIndex> {
    candidates
        .iter()
        .copied()
        .max_by_key(|&node| graph.value(node).unwrap_or(i64::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_least_overage() {
        let mut graph = StateGraph::new();

        let mut candidates = FxHashSet::default();
        candidates.insert(graph.intern(-750));
        candidates.insert(graph.intern(-249));
        candidates.insert(graph.intern(-4500));

        let chosen = select(&graph, &candidates);

        assert_eq!(
            chosen.and_then(|node| graph.value(node)),
            Some(-249),
            "candidate closest to zero should win"
        );
    }

    #[test]
    fn zero_beats_any_overage() {
        let mut graph = StateGraph::new();

        let mut candidates = FxHashSet::default();
        candidates.insert(graph.intern(0));
        candidates.insert(graph.intern(-1));

        let chosen = select(&graph, &candidates);

        assert_eq!(
            chosen.and_then(|node| graph.value(node)),
            Some(0),
            "an exact cover should always be chosen"
        );
    }

    #[test]
    fn empty_candidate_set_selects_nothing() {
        let graph = StateGraph::new();
        let candidates = FxHashSet::default();

        assert_eq!(select(&graph, &candidates), None, "nothing to select");
    }
}
