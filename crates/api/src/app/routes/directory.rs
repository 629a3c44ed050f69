use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockline_auth::{policy, User};

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/companies", get(list_companies).post(add_company))
        .route("/groups", get(list_groups))
        .route("/verify", post(verify_company))
}

pub async fn list_companies(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    let companies = match state.with_directory_read(|directory| directory.companies().to_vec()) {
        Ok(companies) => companies,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": companies })),
    )
        .into_response()
}

pub async fn list_groups(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let groups = match state.with_directory_read(|directory| directory.groups().to_vec()) {
        Ok(groups) => groups,
        Err(resp) => return resp,
    };
    (StatusCode::OK, Json(serde_json::json!({ "items": groups }))).into_response()
}

pub async fn add_company(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddCompanyRequest>,
) -> axum::response::Response {
    if !policy::can_manage_directory(user.role) {
        return errors::forbidden("directory changes require admin access");
    }
    let result = match state.with_directory_write(|directory| {
        directory.add_company(body.name, body.address, body.group.as_deref())
    }) {
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

pub async fn verify_company(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::VerifyCompanyRequest>,
) -> axum::response::Response {
    let result = match state
        .with_directory_read(|directory| directory.verify_company_id(&user, &body.company_id))
    {
        Ok(result) => result,
        Err(resp) => return resp,
    };
    match result {
        Ok(id) => (StatusCode::OK, Json(serde_json::json!({ "company_id": id }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
