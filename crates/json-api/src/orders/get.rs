//! Get Order Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use baler::{PackPlan, parse_quantity};

use crate::{orders::errors::into_status_error, state, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct OrderResponse {
    /// The requested number of items
    #[serde(rename = "itemCount")]
    pub item_count: u64,

    /// Pack size to number of packs used; sizes with zero packs are omitted
    pub packs: BTreeMap<u64, u64>,
}

impl From<PackPlan> for OrderResponse {
    fn from(plan: PackPlan) -> Self {
        Self {
            item_count: plan.quantity,
            packs: plan.packs,
        }
    }
}

/// Get Order Handler
///
/// Plans the smallest covering combination of packs for the requested item
/// count. Malformed item counts are rejected with a client error rather
/// than treated as zero.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state: &Arc<State> = state::obtain(depot)?;

    let raw = req
        .param::<String>("item_count")
        .ok_or_else(StatusError::bad_request)?;

    let quantity = match parse_quantity(&raw) {
        Ok(quantity) => quantity,
        Err(parse_error) => {
            return Err(StatusError::bad_request().brief(parse_error.to_string()));
        }
    };

    let plan = state
        .planner
        .plan(quantity)
        .map_err(into_status_error)?;

    Ok(Json(plan.into()))
}
