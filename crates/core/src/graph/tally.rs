//! Pack count aggregation

use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;

use crate::graph::StateGraph;

/// Tally how many packs of each size the path consumed.
///
/// Walks consecutive state pairs and counts one pack of the size written on
/// the edge between them. When parallel edges connect a pair the smallest
/// weight is taken, so the pick is deterministic. Returns `None` if some
/// pair is not connected at all, which the planner reports as an invariant
/// violation.
pub(crate) fn tally(graph: &StateGraph, path: &[NodeIndex]) -> Option<BTreeMap<u64, u64>> {
    let mut counts = BTreeMap::new();

    for pair in path.windows(2) {
        let (Some(&from), Some(&to)) = (pair.first(), pair.last()) else {
            continue;
        };

        let size = graph.smallest_weight_between(from, to)?;

        *counts.entry(size).or_insert(0) += 1;
    }

    Some(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_one_pack_per_edge() {
        let mut graph = StateGraph::new();

        let root = graph.intern(12_001);
        let a = graph.intern(7001);
        let b = graph.intern(2001);
        let c = graph.intern(1);
        let end = graph.intern(-249);

        graph.connect(root, a, 5000);
        graph.connect(a, b, 5000);
        graph.connect(b, c, 2000);
        graph.connect(c, end, 250);

        let counts = tally(&graph, &[root, a, b, c, end]);

        let expected: BTreeMap<u64, u64> = [(250, 1), (2000, 1), (5000, 2)].into();
        assert_eq!(counts, Some(expected), "each edge contributes one pack");
    }

    #[test]
    fn parallel_edges_resolve_to_the_smallest_weight() {
        let mut graph = StateGraph::new();

        let from = graph.intern(10);
        let to = graph.intern(5);

        graph.connect(from, to, 500);
        graph.connect(from, to, 250);

        let counts = tally(&graph, &[from, to]);

        let expected: BTreeMap<u64, u64> = [(250, 1)].into();
        assert_eq!(counts, Some(expected), "smallest parallel weight is taken");
    }

    #[test]
    fn empty_path_tallies_nothing() {
        let graph = StateGraph::new();

        assert_eq!(
            tally(&graph, &[]),
            Some(BTreeMap::new()),
            "no edges means no packs"
        );
    }

    #[test]
    fn disconnected_pair_is_an_error() {
        let mut graph = StateGraph::new();

        let a = graph.intern(10);
        let b = graph.intern(5);

        assert_eq!(
            tally(&graph, &[a, b]),
            None,
            "a path over missing edges must be rejected"
        );
    }
}
