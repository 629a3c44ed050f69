//! `stockline-api` — HTTP surface over the visibility resolver, the mutation
//! operations, and the company directory.
//!
//! Identity is delegated: the external identity provider authenticates users;
//! this layer only resolves `x-user-id` against the known user registry and
//! hands the resolved [`stockline_auth::User`] to the service.

pub mod app;
pub mod identity;
pub mod seed;
