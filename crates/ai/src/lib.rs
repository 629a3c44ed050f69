//! `stockline-ai` — restock-alert generation.
//!
//! The hosted prediction model is an external collaborator. This crate owns
//! the seam: serializing the caller-visible inventory into the model's input
//! shape, the advisor trait, and a deterministic consumption-rate advisor
//! used in dev and tests. Upstream failures surface verbatim; a failed call
//! yields no partial alerts.

pub mod advisor;
pub mod consumption;
pub mod input;

pub use advisor::{AiError, RestockAdvisor, RestockAlert};
pub use consumption::ConsumptionRateAdvisor;
pub use input::{build_restock_input, RestockInput};
