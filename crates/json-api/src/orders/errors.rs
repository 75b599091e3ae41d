//! Errors

use salvo::http::StatusError;
use tracing::error;

use baler::PlanError;

pub(crate) fn into_status_error(plan_error: PlanError) -> StatusError {
    match plan_error {
        PlanError::QuantityTooLarge(quantity) => {
            StatusError::bad_request().brief(format!("item count {quantity} is too large"))
        }
        PlanError::NoCandidate { .. } | PlanError::NoPath { .. } | PlanError::EdgeMissing { .. } => {
            error!("pack planning failed: {plan_error}");

            StatusError::internal_server_error()
        }
    }
}
