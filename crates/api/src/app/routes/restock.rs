use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use chrono::Utc;

use stockline_ai::{build_restock_input, ConsumptionRateAdvisor, RestockAdvisor};
use stockline_auth::{policy, User};

use crate::app::{dto, errors, AppState};

const DEFAULT_WINDOW_DAYS: i64 = 30;

pub fn router() -> Router {
    Router::new().route("/alerts", post(generate_alerts))
}

/// Run the restock advisor over the caller-visible inventory.
///
/// Alerts are all-or-nothing: an advisor failure yields an error response,
/// never a partial alert list.
pub async fn generate_alerts(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::RestockRequest>,
) -> axum::response::Response {
    if !policy::can_generate_restock(user.role) {
        return errors::forbidden("restock alerts require manager access");
    }

    let inventory = match state
        .with_service_read(|service, directory| service.visible(&user, directory).inventory)
    {
        Ok(inventory) => inventory,
        Err(resp) => return resp,
    };

    let now = Utc::now();
    let window_days = body.window_days.unwrap_or(DEFAULT_WINDOW_DAYS);
    let input = match build_restock_input(&inventory, window_days, now) {
        Ok(input) => input,
        Err(e) => return errors::ai_error_to_response(e),
    };

    let result = match &state.advisor {
        Some(advisor) => advisor.generate(&input),
        None => ConsumptionRateAdvisor::new(now.date_naive()).generate(&input),
    };
    match result {
        Ok(alerts) => (
            StatusCode::OK,
            Json(serde_json::json!({ "alerts": alerts })),
        )
            .into_response(),
        Err(e) => errors::ai_error_to_response(e),
    }
}
