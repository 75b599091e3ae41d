//! Baler
//!
//! Baler computes the smallest combination of fixed-size packs that covers a
//! requested item quantity, preferring the combination with the least surplus
//! and, among equal-surplus combinations, the fewest packs.
//!
//! The search models remaining quantities as nodes of a directed graph whose
//! edges subtract one pack size at a time. The best terminal state (closest to
//! zero) is selected, the graph is pruned down to the subgraph that can reach
//! it, and a fewest-edges path from the root recovers the pack counts.

pub mod catalog;
pub mod graph;
pub mod plan;

pub use catalog::{CatalogError, PackCatalog};
pub use plan::{PackPlan, PackPlanner, PlanError, QuantityError, parse_quantity};
