use serde::{Deserialize, Serialize};

/// Role tier of a user.
///
/// A closed, ordered set: each tier includes everything the tiers below it may
/// do. Derived `Ord` follows declaration order, so `Employee < Head < Manager
/// < Admin` holds structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Lowest tier: sees only the own-company partition.
    Employee,
    /// Supervisor tier. Same data breadth and write access as `Manager`.
    Head,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Head => "head",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_lowest_first() {
        assert!(Role::Employee < Role::Head);
        assert!(Role::Head < Role::Manager);
        assert!(Role::Manager < Role::Admin);
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Head).unwrap(), "\"head\"");
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }
}
