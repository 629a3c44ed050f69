//! HTTP API application wiring (Axum router + shared state).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::{Arc, RwLock};

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use stockline_ai::RestockAdvisor;
use stockline_directory::CompanyDirectory;
use stockline_store::DataService;

use crate::identity::{self, UserRegistry};

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared application state behind the router.
///
/// The store and directory sit behind `RwLock`s: reads resolve visibility
/// concurrently, mutations take the write lock for the duration of the
/// operation (including the write-through persist).
pub struct AppState {
    service: RwLock<DataService>,
    directory: RwLock<CompanyDirectory>,
    pub users: Arc<UserRegistry>,
    /// Injected advisor; `None` means a consumption-rate advisor dated at
    /// request time.
    pub advisor: Option<Arc<dyn RestockAdvisor>>,
}

impl AppState {
    pub fn new(
        service: DataService,
        directory: CompanyDirectory,
        users: UserRegistry,
        advisor: Option<Arc<dyn RestockAdvisor>>,
    ) -> Self {
        Self {
            service: RwLock::new(service),
            directory: RwLock::new(directory),
            users: Arc::new(users),
            advisor,
        }
    }

    /// Run a read against the service under both read locks.
    pub fn with_service_read<T>(
        &self,
        f: impl FnOnce(&DataService, &CompanyDirectory) -> T,
    ) -> Result<T, axum::response::Response> {
        let directory = self.directory.read().map_err(|_| errors::lock_error())?;
        let service = self.service.read().map_err(|_| errors::lock_error())?;
        Ok(f(&service, &directory))
    }

    /// Run a mutation against the service under the write lock.
    pub fn with_service_write<T>(
        &self,
        f: impl FnOnce(&mut DataService, &CompanyDirectory) -> T,
    ) -> Result<T, axum::response::Response> {
        let directory = self.directory.read().map_err(|_| errors::lock_error())?;
        let mut service = self.service.write().map_err(|_| errors::lock_error())?;
        Ok(f(&mut service, &directory))
    }

    pub fn with_directory_read<T>(
        &self,
        f: impl FnOnce(&CompanyDirectory) -> T,
    ) -> Result<T, axum::response::Response> {
        let directory = self.directory.read().map_err(|_| errors::lock_error())?;
        Ok(f(&directory))
    }

    pub fn with_directory_write<T>(
        &self,
        f: impl FnOnce(&mut CompanyDirectory) -> T,
    ) -> Result<T, axum::response::Response> {
        let mut directory = self.directory.write().map_err(|_| errors::lock_error())?;
        Ok(f(&mut directory))
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(state: Arc<AppState>) -> Router {
    // Protected routes: require a resolvable `x-user-id`.
    let protected = routes::router()
        .layer(Extension(Arc::clone(&state)))
        .layer(axum::middleware::from_fn_with_state(
            Arc::clone(&state.users),
            identity::identity_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
