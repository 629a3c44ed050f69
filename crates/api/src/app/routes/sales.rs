use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;

use stockline_auth::User;
use stockline_core::RecordId;
use stockline_store::AddSale;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_sale).get(list_sales))
        .route("/:id/status", post(update_status))
}

pub async fn list_sales(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let sales =
        match state.with_service_read(|service, directory| service.visible(&user, directory).sales)
        {
            Ok(sales) => sales,
            Err(resp) => return resp,
        };
    (StatusCode::OK, Json(serde_json::json!({ "items": sales }))).into_response()
}

pub async fn add_sale(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddSaleRequest>,
) -> axum::response::Response {
    let cmd = AddSale {
        customer: body.customer,
        status: body.status,
        total: body.total,
        occurred_at: Utc::now(),
    };
    let result = match state.with_service_write(|service, _| service.add_sale(&user, cmd)) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": id })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_status(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateSaleStatusRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state.with_service_write(|service, directory| {
        service.update_sale_status(&user, directory, &id, body.status)
    }) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
