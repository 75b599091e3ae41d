//! Remaining-quantity state graph
//!
//! The search space for a requested quantity is a directed graph whose nodes
//! are remaining quantities and whose edges subtract one pack size. Expansion
//! starts from the requested quantity and walks downwards; states at or below
//! zero are terminal (the amount below zero is the overage).

use petgraph::{graph::NodeIndex, stable_graph::StableDiGraph, visit::EdgeRef};
use rustc_hash::FxHashMap;

pub(crate) mod builder;
pub(crate) mod path;
pub(crate) mod pruner;
pub(crate) mod selector;
pub(crate) mod tally;

/// Search graph over remaining quantities.
///
/// Nodes are interned by their integer value: two states with the same
/// remaining quantity are the same node. Edges carry the pack size that was
/// subtracted to reach the target state. Several differently-weighted edges
/// may connect the same pair of states, but a same-weight duplicate is never
/// inserted twice.
#[derive(Debug, Default)]
pub struct StateGraph {
    graph: StableDiGraph<i64, u64>,
    index: FxHashMap<i64, NodeIndex>,
}

impl StateGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Find or create the node for a remaining-quantity value.
    pub(crate) fn intern(&mut self, value: i64) -> NodeIndex {
        if let Some(&node) = self.index.get(&value) {
            return node;
        }

        let node = self.graph.add_node(value);
        self.index.insert(value, node);

        node
    }

    /// Node for a value, if the value was ever reached.
    pub fn find(&self, value: i64) -> Option<NodeIndex> {
        self.index.get(&value).copied()
    }

    /// Remaining quantity stored at a node.
    pub fn value(&self, node: NodeIndex) -> Option<i64> {
        self.graph.node_weight(node).copied()
    }

    /// Add an edge weighted by the subtracted pack size.
    ///
    /// Insertion is idempotent per `(from, to, weight)`: returns `false`
    /// without touching the graph when an edge of the same weight already
    /// connects the pair.
    pub(crate) fn connect(&mut self, from: NodeIndex, to: NodeIndex, size: u64) -> bool {
        let duplicate = self
            .graph
            .edges_connecting(from, to)
            .any(|edge| *edge.weight() == size);

        if duplicate {
            return false;
        }

        self.graph.add_edge(from, to, size);

        true
    }

    /// Smallest weight among the edges connecting a pair of states.
    pub(crate) fn smallest_weight_between(&self, from: NodeIndex, to: NodeIndex) -> Option<u64> {
        self.graph
            .edges_connecting(from, to)
            .map(|edge| *edge.weight())
            .min()
    }

    pub(crate) fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph.edges(node).count()
    }

    /// Remove a node and its incident edges, keeping the value index in sync.
    pub(crate) fn remove(&mut self, node: NodeIndex) {
        if let Some(value) = self.graph.remove_node(node) {
            self.index.remove(&value);
        }
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Number of live states.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<i64, u64> {
        &self.graph
    }
}
