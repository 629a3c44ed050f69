//! Request identity resolution.
//!
//! The identity provider is an external collaborator; by the time a request
//! reaches this service it carries the provider-issued user id in
//! `x-user-id`. The middleware resolves it against the user registry and
//! injects the full [`User`] into request extensions.

use std::str::FromStr;
use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use stockline_auth::User;
use stockline_core::UserId;

/// Known users, seeded at startup from the identity provider's directory.
#[derive(Debug, Default)]
pub struct UserRegistry {
    inner: RwLock<Vec<User>>,
}

impl UserRegistry {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: RwLock::new(users),
        }
    }

    pub fn find(&self, id: UserId) -> Option<User> {
        let guard = self.inner.read().ok()?;
        guard.iter().find(|u| u.id == id).cloned()
    }

    /// Register a user; refuses duplicate emails (surfaced to the caller as
    /// a conflict, mirroring signup behavior).
    pub fn add(&self, user: User) -> Result<(), stockline_core::DomainError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| stockline_core::DomainError::upstream("user registry unavailable"))?;
        if guard.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(stockline_core::DomainError::conflict(
                "email already registered",
            ));
        }
        guard.push(user);
        Ok(())
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.read().map(|g| g.clone()).unwrap_or_default()
    }
}

pub async fn identity_middleware(
    State(registry): State<Arc<UserRegistry>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = resolve_user(req.headers(), &registry).ok_or(StatusCode::UNAUTHORIZED)?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

fn resolve_user(headers: &HeaderMap, registry: &UserRegistry) -> Option<User> {
    let raw = headers.get("x-user-id")?.to_str().ok()?;
    let user_id = UserId::from_str(raw.trim()).ok()?;
    registry.find(user_id)
}
