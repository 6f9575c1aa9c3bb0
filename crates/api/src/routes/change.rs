//! Change calculation route.

use axum::{
    Json, Router, extract::Query, http::StatusCode, response::IntoResponse, routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use cashtill_core::change::{ChangeError, compute_change};

/// Creates the change calculation routes.
pub fn routes() -> Router {
    Router::new().route("/change", get(get_change))
}

/// Query parameters for a change calculation.
#[derive(Debug, Deserialize)]
pub struct ChangeQuery {
    /// Amount handed over by the customer.
    pub tendered: Decimal,
    /// Price of the item.
    pub item_value: Decimal,
}

/// GET `/change` - Compute the change summary for a tendered amount.
///
/// Success is the rendered summary as a plain text body; validation
/// failures map to 400 with the error's exact message.
async fn get_change(Query(query): Query<ChangeQuery>) -> impl IntoResponse {
    match compute_change(query.tendered, query.item_value) {
        Ok(summary) => (StatusCode::OK, summary).into_response(),
        Err(e) => {
            warn!(
                error = %e,
                tendered = %query.tendered,
                item_value = %query.item_value,
                "Change request rejected"
            );
            let error_code = match e {
                ChangeError::InvalidTendered => "invalid_tendered",
                ChangeError::InvalidItemValue => "invalid_item_value",
                ChangeError::TenderedBelowItemValue => "tendered_below_item_value",
            };
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": error_code,
                    "message": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
