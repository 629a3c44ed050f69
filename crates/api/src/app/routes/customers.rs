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
use stockline_store::AddCustomer;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_customer).get(list_customers))
        .route("/:id", patch(update_customer).delete(delete_customer))
}

pub async fn list_customers(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let customers = match state
        .with_service_read(|service, directory| service.visible(&user, directory).customers)
    {
        Ok(customers) => customers,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": customers })),
    )
        .into_response()
}

pub async fn add_customer(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddCustomerRequest>,
) -> axum::response::Response {
    let cmd = AddCustomer {
        name: body.name,
        email: body.email,
    };
    let result = match state.with_service_write(|service, _| service.add_customer(&user, cmd)) {
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

pub async fn update_customer(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCustomerRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state.with_service_write(|service, directory| {
        service.update_customer(&user, directory, &id, body.into_patch())
    }) {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_customer(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let result = match state
        .with_service_write(|service, directory| service.delete_customer(&user, directory, &id))
    {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
