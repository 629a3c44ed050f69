//! `stockline-auth` — user identity, role tiers, and the authorization policy.
//!
//! Credentials live with the external identity provider; this crate only
//! models the resolved user and the policy decisions derived from it.

pub mod policy;
pub mod role;
pub mod user;

pub use policy::{
    can_generate_restock, can_manage_directory, can_view_group_aggregate, require_company,
};
pub use role::Role;
pub use user::User;
