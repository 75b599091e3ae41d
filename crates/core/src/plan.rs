//! Pack planning
//!
//! Orchestrates the search pipeline for one request: expand the state graph,
//! select the candidate with the least overage, prune the graph down to the
//! relevant subgraph, find the fewest-edges path and tally the pack counts.

use std::collections::BTreeMap;
use std::num::ParseIntError;

use serde::Serialize;
use thiserror::Error;

use crate::{
    catalog::PackCatalog,
    graph::{builder, path, pruner, selector, tally},
};

/// Errors surfaced while planning packs for a quantity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The quantity exceeds the representable state space.
    #[error("item count {0} is too large to plan")]
    QuantityTooLarge(u64),

    /// No terminal state was reached during expansion. The smallest pack
    /// size always yields a candidate for any positive quantity, so this is
    /// a bug rather than a user error.
    #[error("no candidate state reached for quantity {quantity}")]
    NoCandidate {
        /// The requested quantity.
        quantity: u64,
    },

    /// The pruned graph had no path from the root to the chosen candidate.
    /// Pruning only removes states that cannot reach the chosen candidate,
    /// so this is a bug rather than a user error.
    #[error("no path from root to chosen candidate for quantity {quantity}")]
    NoPath {
        /// The requested quantity.
        quantity: u64,
    },

    /// Two consecutive path states were not connected by an edge.
    #[error("path edge missing between consecutive states for quantity {quantity}")]
    EdgeMissing {
        /// The requested quantity.
        quantity: u64,
    },
}

/// Errors raised while parsing a raw item count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// The input was not a non-negative integer.
    #[error("item count must be a non-negative integer, got {raw:?}")]
    Malformed {
        /// The rejected input.
        raw: String,

        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Parse a raw item-count string.
///
/// Malformed input is an explicit error rather than a silent zero: callers
/// must be able to tell "nothing to pack" apart from an unparseable request.
///
/// # Errors
///
/// Returns [`QuantityError::Malformed`] when the input is not a
/// non-negative integer.
pub fn parse_quantity(raw: &str) -> Result<u64, QuantityError> {
    match raw.parse() {
        Ok(quantity) => Ok(quantity),
        Err(source) => Err(QuantityError::Malformed {
            raw: raw.to_owned(),
            source,
        }),
    }
}

/// The packs chosen for one requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackPlan {
    /// The requested quantity.
    #[serde(rename = "itemCount")]
    pub quantity: u64,

    /// Pack size to number of packs of that size. Sizes with zero packs are
    /// absent.
    pub packs: BTreeMap<u64, u64>,
}

impl PackPlan {
    fn empty(quantity: u64) -> Self {
        Self {
            quantity,
            packs: BTreeMap::new(),
        }
    }

    /// Total number of packs used.
    #[must_use]
    pub fn pack_count(&self) -> u64 {
        self.packs.values().sum()
    }

    /// Total items covered by the chosen packs.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.packs
            .iter()
            .map(|(size, count)| size.saturating_mul(*count))
            .sum()
    }

    /// Items delivered beyond the requested quantity.
    #[must_use]
    pub fn overage(&self) -> u64 {
        self.total_items().saturating_sub(self.quantity)
    }

    /// Whether no packs are needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

/// Plans pack combinations for requested quantities against a fixed catalog.
///
/// The planner holds only the read-only catalog. Every call to
/// [`plan()`](Self::plan) builds and discards its own graph, so one planner
/// can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct PackPlanner {
    catalog: PackCatalog,
}

impl PackPlanner {
    /// Create a planner over the given catalog.
    #[must_use]
    pub fn new(catalog: PackCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this planner serves.
    #[must_use]
    pub fn catalog(&self) -> &PackCatalog {
        &self.catalog
    }

    /// Plan the smallest covering combination of packs for `quantity`.
    ///
    /// Prefers the combination with the least surplus over the requested
    /// amount; among equal-surplus combinations, the fewest packs. A zero
    /// quantity needs no packs and yields an empty plan.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanError`] if the quantity is outside the representable
    /// state space, or on an internal invariant violation.
    pub fn plan(&self, quantity: u64) -> Result<PackPlan, PlanError> {
        if quantity == 0 {
            return Ok(PackPlan::empty(0));
        }

        let Ok(root_value) = i64::try_from(quantity) else {
            return Err(PlanError::QuantityTooLarge(quantity));
        };

        let builder::BuildOutcome {
            mut graph,
            root,
            candidates,
        } = builder::build(&self.catalog, root_value);

        let chosen = selector::select(&graph, &candidates)
            .ok_or(PlanError::NoCandidate { quantity })?;

        pruner::prune(&mut graph, &candidates, chosen);

        let path =
            path::shortest(&graph, root, chosen).ok_or(PlanError::NoPath { quantity })?;

        let packs = tally::tally(&graph, &path).ok_or(PlanError::EdgeMissing { quantity })?;

        Ok(PackPlan { quantity, packs })
    }
}
