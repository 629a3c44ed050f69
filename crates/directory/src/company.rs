use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, GroupId};

/// A tenant: owns a disjoint partition of business records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub address: String,
    /// Absent means the company is standalone (no shared visibility).
    pub group_id: Option<GroupId>,
}

/// A label over a set of companies that share aggregated visibility for
/// privileged roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyGroup {
    pub id: GroupId,
    pub name: String,
}
