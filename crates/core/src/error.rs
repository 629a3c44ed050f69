//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The source design recovered most of these silently; they are explicit
/// variants here so the contract is testable. Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The acting user has no company context (mutations require one).
    #[error("not authenticated: no company context")]
    NotAuthenticated,

    /// A requested record was not in the caller's visible set.
    #[error("not found")]
    NotFound,

    /// A conflict occurred (e.g. duplicate identity).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An external collaborator failed; the message is surfaced verbatim.
    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl DomainError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
