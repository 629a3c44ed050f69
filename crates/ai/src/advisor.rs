use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::RestockInput;

/// A single restock recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockAlert {
    pub item_name: String,
    /// ISO-8601 date the item should be reordered by.
    pub predicted_restock_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AiError {
    #[error("invalid advisor input: {0}")]
    InvalidInput(String),

    /// The external prediction service failed; the message is reported
    /// verbatim to the caller.
    #[error("{0}")]
    Upstream(String),
}

/// Seam to the restock-prediction service.
///
/// Implementations take the serialized input blobs and return the full alert
/// set, or fail as a whole. No retries, no partial results.
pub trait RestockAdvisor: Send + Sync {
    fn generate(&self, input: &RestockInput) -> Result<Vec<RestockAlert>, AiError>;
}

impl<A> RestockAdvisor for std::sync::Arc<A>
where
    A: RestockAdvisor + ?Sized,
{
    fn generate(&self, input: &RestockInput) -> Result<Vec<RestockAlert>, AiError> {
        (**self).generate(input)
    }
}
