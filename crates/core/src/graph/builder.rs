//! State graph expansion

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;
use rustc_hash::FxHashSet;

use crate::{catalog::PackCatalog, graph::StateGraph};

/// Outcome of expanding the search graph from a root quantity.
#[derive(Debug)]
pub(crate) struct BuildOutcome {
    /// The expanded graph.
    pub(crate) graph: StateGraph,

    /// Node holding the requested quantity.
    pub(crate) root: NodeIndex,

    /// States with value at or below zero, each recorded the first time it
    /// was reached. Candidates are never expanded further.
    pub(crate) candidates: FxHashSet<NodeIndex>,
}

/// Expand the state graph for a positive quantity.
///
/// Runs one pass per leading prefix of the catalog, from the full catalog
/// down to the largest size alone, subtracting sizes largest-first within
/// each prefix. The cascading passes explore every "restrict to the largest
/// few sizes" variant as well as the full catalog, because greedily taking
/// the largest pack first is not always optimal.
///
/// Expansion of further states stops once the number of distinct states with
/// an edge into the zero state reaches the catalog size; by then enough
/// zero-reaching alternatives exist. Termination is guaranteed regardless:
/// values decrease strictly along every edge and states at or below zero are
/// never expanded, so the reachable value range is finite.
pub(crate) fn build(catalog: &PackCatalog, quantity: i64) -> BuildOutcome {
    let mut graph = StateGraph::new();
    let root = graph.intern(quantity);

    let mut candidates = FxHashSet::default();
    let mut zero_feeders: FxHashSet<NodeIndex> = FxHashSet::default();

    let sizes = catalog.sizes();

    for prefix_len in (1..=sizes.len()).rev() {
        let Some(prefix) = sizes.get(..prefix_len) else {
            continue;
        };

        let mut worklist: VecDeque<NodeIndex> = VecDeque::from([root]);

        while let Some(state) = worklist.pop_front() {
            if zero_feeders.len() >= sizes.len() {
                break;
            }

            let Some(value) = graph.value(state) else {
                continue;
            };

            for &size in prefix.iter().rev() {
                let Ok(step) = i64::try_from(size) else {
                    continue;
                };

                let Some(next_value) = value.checked_sub(step) else {
                    continue;
                };

                let next = graph.intern(next_value);

                // A same-weight edge means this subtraction was already
                // explored during an earlier, larger prefix pass.
                if !graph.connect(state, next, size) {
                    continue;
                }

                if next_value == 0 {
                    zero_feeders.insert(state);
                }

                if next_value <= 0 {
                    candidates.insert(next);
                } else {
                    worklist.push_back(next);
                }
            }
        }
    }

    BuildOutcome {
        graph,
        root,
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn candidate_values(outcome: &BuildOutcome) -> Vec<i64> {
        let mut values: Vec<i64> = outcome
            .candidates
            .iter()
            .filter_map(|&node| outcome.graph.value(node))
            .collect();

        values.sort_unstable();
        values
    }

    #[test]
    fn root_holds_the_requested_quantity() -> TestResult {
        let catalog = PackCatalog::new([3, 5])?;
        let outcome = build(&catalog, 4);

        assert_eq!(
            outcome.graph.value(outcome.root),
            Some(4),
            "root should carry the quantity"
        );

        Ok(())
    }

    #[test]
    fn candidates_are_terminal_and_recorded_once() -> TestResult {
        let catalog = PackCatalog::new([3, 5])?;
        let outcome = build(&catalog, 4);

        // 4 -> -1 (5), 4 -> 1 (3), 1 -> -4 (5), 1 -> -2 (3)
        assert_eq!(
            candidate_values(&outcome),
            vec![-4, -2, -1],
            "all at-or-below-zero states should be candidates"
        );

        for &candidate in &outcome.candidates {
            assert_eq!(
                outcome.graph.out_degree(candidate),
                0,
                "candidates must not be expanded"
            );
        }

        Ok(())
    }

    #[test]
    fn exact_cover_reaches_the_zero_state() -> TestResult {
        let catalog = PackCatalog::new([250, 500])?;
        let outcome = build(&catalog, 500);

        let zero = outcome.graph.find(0);
        assert!(zero.is_some(), "the zero state should be reachable");

        assert!(
            outcome
                .candidates
                .iter()
                .any(|&node| outcome.graph.value(node) == Some(0)),
            "the zero state should be a candidate"
        );

        Ok(())
    }

    #[test]
    fn later_prefix_passes_do_not_duplicate_edges() -> TestResult {
        let catalog = PackCatalog::new([3, 5])?;
        let outcome = build(&catalog, 4);

        // 4 nodes besides the candidates: 4 and 1; edges 4->-1, 4->1, 1->-4, 1->-2.
        assert_eq!(outcome.graph.edge_count(), 4, "no duplicate edges expected");

        Ok(())
    }

    #[test]
    fn single_size_catalog_descends_to_a_candidate() -> TestResult {
        let catalog = PackCatalog::new([4])?;
        let outcome = build(&catalog, 10);

        // 10 -> 6 -> 2 -> -2
        assert_eq!(
            candidate_values(&outcome),
            vec![-2],
            "descent should cross zero exactly once"
        );

        Ok(())
    }
}
