use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use chrono::Utc;

use stockline_auth::User;
use stockline_core::RecordId;
use stockline_store::AddPurchaseOrder;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_order).get(list_orders))
        .route("/:id", patch(update_order).delete(delete_order))
}

pub async fn list_orders(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let orders = match state.with_service_read(|service, directory| {
        service.visible(&user, directory).purchase_orders
    }) {
        Ok(orders) => orders,
        Err(resp) => return resp,
    };
    (StatusCode::OK, Json(serde_json::json!({ "items": orders }))).into_response()
}

pub async fn add_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddPurchaseOrderRequest>,
) -> axum::response::Response {
    let cmd = AddPurchaseOrder {
        supplier: body.supplier,
        total: body.total,
        occurred_at: Utc::now(),
    };
    let result = match state.with_service_write(|service, _| service.add_purchase_order(&user, cmd))
    {
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

pub async fn update_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdatePurchaseOrderRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state.with_service_write(|service, directory| {
        service.update_purchase_order(&user, directory, &id, body.into_patch())
    }) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state.with_service_write(|service, directory| {
        service.delete_purchase_order(&user, directory, &id)
    }) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
