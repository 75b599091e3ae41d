//! Shared request state

use std::sync::Arc;

use salvo::{Depot, http::StatusError};

use baler::PackPlanner;

/// State shared across request handlers.
///
/// The planner only carries the read-only pack catalog; each request plans
/// with its own private graph, so one planner serves all workers safely.
#[derive(Debug)]
pub(crate) struct State {
    /// Pack planner over the configured catalog.
    pub planner: PackPlanner,
}

impl State {
    pub(crate) fn new(planner: PackPlanner) -> Self {
        Self { planner }
    }

    pub(crate) fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Fetch the shared state from the depot, or fail the request with a 500.
pub(crate) fn obtain(depot: &Depot) -> Result<&Arc<State>, StatusError> {
    match depot.obtain::<Arc<State>>() {
        Ok(state) => Ok(state),
        Err(_missing) => Err(StatusError::internal_server_error()),
    }
}
