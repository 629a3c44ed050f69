//! Centralized authorization policy.
//!
//! Every read and mutation path consults these functions instead of comparing
//! role strings inline.
//!
//! - No IO
//! - No panics
//! - No business logic (pure policy checks)

use stockline_core::{CompanyId, DomainError};

use crate::role::Role;
use crate::user::User;

/// Whether a role may see the aggregated data of its company group.
///
/// Head, Manager and Admin aggregate; Employee never does, regardless of
/// group membership.
pub fn can_view_group_aggregate(role: Role) -> bool {
    role >= Role::Head
}

/// Whether a role may mutate the company directory (add companies/groups).
pub fn can_manage_directory(role: Role) -> bool {
    role == Role::Admin
}

/// Whether a role may request restock alerts.
pub fn can_generate_restock(role: Role) -> bool {
    role >= Role::Manager
}

/// Extract the acting user's company context, or refuse.
///
/// Mutations require a bound tenant; a user without one gets
/// `NotAuthenticated` instead of a silent no-op.
pub fn require_company(user: &User) -> Result<CompanyId, DomainError> {
    user.company_id
        .clone()
        .ok_or(DomainError::NotAuthenticated)
}
