use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use stockline_auth::User;
use stockline_core::RecordId;
use stockline_store::{AddInventoryItem, AdjustStock};

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_item).get(list_items))
        .route("/:id", get(get_item).delete(remove_item))
        .route("/:id/adjust", post(adjust_stock))
}

pub async fn list_items(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let items = match state.with_service_read(|service, directory| {
        service.visible(&user, directory).inventory
    }) {
        Ok(items) => items,
        Err(resp) => return resp,
    };
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_item(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let item = match state
        .with_service_read(|service, directory| service.inventory_item(&user, directory, &id))
    {
        Ok(item) => item,
        Err(resp) => return resp,
    };
    match item {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "inventory item not found"),
    }
}

pub async fn add_item(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let cmd = AddInventoryItem {
        name: body.name,
        sku: body.sku,
        category: body.category,
        supplier: body.supplier,
        cost: body.cost,
        price: body.price,
        quantity: body.quantity,
        occurred_at: Utc::now(),
    };
    let result = match state.with_service_write(|service, _| service.add_inventory_item(&user, cmd))
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

pub async fn adjust_stock(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let item_id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let cmd = AdjustStock {
        item_id,
        delta: body.delta,
        occurred_at: Utc::now(),
    };
    let result = match state
        .with_service_write(|service, directory| service.adjust_stock(&user, directory, cmd))
    {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(quantity) => (
            StatusCode::OK,
            Json(serde_json::json!({ "quantity": quantity })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_item(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state.with_service_write(|service, directory| {
        service.remove_inventory_item(&user, directory, &id)
    }) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
