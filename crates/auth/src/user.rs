use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, UserId};

use crate::role::Role;

/// A resolved user, as handed over by the identity provider.
///
/// `company_id` is `None` until the user is bound to a tenant; mutations are
/// refused in that state (fail-safe default). Credential material never
/// appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub company_id: Option<CompanyId>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        company_id: Option<CompanyId>,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            role,
            company_id,
        }
    }
}
