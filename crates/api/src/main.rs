use std::sync::Arc;

use stockline_api::app::{build_app, AppState};
use stockline_api::identity::UserRegistry;
use stockline_api::seed;
use stockline_store::{DataService, JsonFileSnapshotStore, SnapshotStore};

#[tokio::main]
async fn main() {
    stockline_observability::init();

    let snapshot_path = std::env::var("STOCKLINE_SNAPSHOT_PATH")
        .unwrap_or_else(|_| "stockline-snapshot.json".to_string());
    let snapshot: Arc<dyn SnapshotStore> = Arc::new(JsonFileSnapshotStore::new(&snapshot_path));

    let demo = seed::demo().expect("failed to build demo dataset");
    let users = demo.users();

    let service = DataService::open(Arc::clone(&snapshot)).expect("failed to open snapshot store");
    let service = if service.store().is_empty() {
        tracing::info!(path = %snapshot_path, "empty snapshot; seeding demo dataset");
        DataService::with_store(demo.store, snapshot).expect("failed to seed demo dataset")
    } else {
        service
    };

    for user in &users {
        tracing::info!(user = %user.id, role = %user.role, name = %user.name, "known user");
    }

    let state = Arc::new(AppState::new(
        service,
        demo.directory,
        UserRegistry::new(users),
        None,
    ));
    let app = build_app(state);

    let addr = std::env::var("STOCKLINE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
