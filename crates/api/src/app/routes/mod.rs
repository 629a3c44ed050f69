use axum::{routing::get, Router};

pub mod customers;
pub mod directory;
pub mod finance;
pub mod inventory;
pub mod purchases;
pub mod restock;
pub mod sales;
pub mod suppliers;
pub mod system;

/// Router for all authenticated (identity-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/overview", get(system::overview))
        .nest("/inventory", inventory::router())
        .nest("/sales", sales::router())
        .nest("/purchases", purchases::router())
        .nest("/customers", customers::router())
        .nest("/suppliers", suppliers::router())
        .nest("/transactions", finance::router())
        .nest("/directory", directory::router())
        .nest("/restock", restock::router())
}
