use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};

use stockline_auth::User;
use stockline_core::RecordId;
use stockline_store::AddSupplier;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_supplier).get(list_suppliers))
        .route("/:id", patch(update_supplier).delete(delete_supplier))
}

pub async fn list_suppliers(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let suppliers = match state
        .with_service_read(|service, directory| service.visible(&user, directory).suppliers)
    {
        Ok(suppliers) => suppliers,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": suppliers })),
    )
        .into_response()
}

pub async fn add_supplier(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddSupplierRequest>,
) -> axum::response::Response {
    let cmd = AddSupplier {
        name: body.name,
        contact: body.contact,
        category: body.category,
    };
    let result = match state.with_service_write(|service, _| service.add_supplier(&user, cmd)) {
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

pub async fn update_supplier(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateSupplierRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state.with_service_write(|service, directory| {
        service.update_supplier(&user, directory, &id, body.into_patch())
    }) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_supplier(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state
        .with_service_write(|service, directory| service.delete_supplier(&user, directory, &id))
    {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
