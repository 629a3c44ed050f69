use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use chrono::Utc;

use stockline_auth::User;
use stockline_store::AddTransaction;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new().route("/", post(add_transaction).get(list_transactions))
}

pub async fn list_transactions(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> axum::response::Response {
    let transactions = match state
        .with_service_read(|service, directory| service.visible(&user, directory).transactions)
    {
        Ok(transactions) => transactions,
        Err(resp) => return resp,
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": transactions })),
    )
        .into_response()
}

pub async fn add_transaction(
    Extension(state): Extension<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(body): Json<dto::AddTransactionRequest>,
) -> axum::response::Response {
    let cmd = AddTransaction {
        description: body.description,
        amount: body.amount,
        kind: body.kind,
        occurred_at: Utc::now(),
    };
    let result = match state.with_service_write(|service, _| service.add_transaction(&user, cmd)) {
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
