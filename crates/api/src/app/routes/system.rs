use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stockline_auth::User;

use crate::app::AppState;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(user): Extension<User>) -> impl IntoResponse {
    Json(serde_json::json!({
        "id": user.id.to_string(),
        "name": user.name,
        "email": user.email,
        "role": user.role.as_str(),
        "company_id": user.company_id,
    }))
}

/// Per-collection counts of the caller-visible slice.
pub async fn overview(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let visible = match state.with_service_read(|service, directory| service.visible(&user, directory))
    {
        Ok(visible) => visible,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "inventory": visible.inventory.len(),
            "sales": visible.sales.len(),
            "purchase_orders": visible.purchase_orders.len(),
            "customers": visible.customers.len(),
            "suppliers": visible.suppliers.len(),
            "transactions": visible.transactions.len(),
            "total": visible.record_count(),
        })),
    )
        .into_response()
}
