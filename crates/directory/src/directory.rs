use serde::{Deserialize, Serialize};

use stockline_auth::User;
use stockline_core::{CompanyId, DomainError, DomainResult, GroupId};

use crate::company::{Company, CompanyGroup};

/// How many allocation redraws before giving up.
///
/// 36^6 tokens make collisions rare even for thousands of companies, so
/// hitting this limit means something is broken, not unlucky.
const MAX_ALLOCATION_ATTEMPTS: usize = 16;

/// The company/group directory.
///
/// Companies keep their insertion order; group aggregation walks members in
/// that directory order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
    groups: Vec<CompanyGroup>,
}

impl CompanyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory with known companies and groups (fixtures, import).
    pub fn with_entries(companies: Vec<Company>, groups: Vec<CompanyGroup>) -> Self {
        Self { companies, groups }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn groups(&self) -> &[CompanyGroup] {
        &self.groups
    }

    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| &c.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&CompanyGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Member companies of a group, in directory order.
    pub fn group_members(&self, group_id: GroupId) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|c| c.group_id == Some(group_id))
            .collect()
    }

    /// Register a new company, optionally attaching it to a named group.
    ///
    /// A blank group name means standalone. Otherwise the group is looked up
    /// by case-insensitive name and created with a fresh id if absent.
    /// Returns the new company's allocated id.
    pub fn add_company(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        group_name: Option<&str>,
    ) -> DomainResult<CompanyId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }

        let group_id = match group_name.map(str::trim).filter(|g| !g.is_empty()) {
            Some(group_name) => Some(self.group_id_by_name_or_create(group_name)),
            None => None,
        };

        let id = self.allocate_company_id()?;
        tracing::info!(company_id = %id, company = %name, "company registered");
        self.companies.push(Company {
            id: id.clone(),
            name,
            address: address.into(),
            group_id,
        });
        Ok(id)
    }

    /// Verify a candidate company token against the directory and the user's
    /// own pre-assigned company.
    ///
    /// This is the strict gate: it never reassigns a user's tenant. The
    /// candidate is normalized (uppercased) before comparison.
    pub fn verify_company_id(&self, user: &User, candidate: &str) -> DomainResult<CompanyId> {
        let candidate = CompanyId::parse(candidate)?;
        if self.company(&candidate).is_none() {
            return Err(DomainError::not_found());
        }
        match &user.company_id {
            Some(own) if *own == candidate => Ok(candidate),
            _ => {
                tracing::warn!(user = %user.id, candidate = %candidate, "company id verification refused");
                Err(DomainError::NotAuthenticated)
            }
        }
    }

    /// Case-insensitive group lookup; creates the group when none matches.
    fn group_id_by_name_or_create(&mut self, group_name: &str) -> GroupId {
        if let Some(group) = self
            .groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(group_name))
        {
            return group.id;
        }
        let group = CompanyGroup {
            id: GroupId::new(),
            name: group_name.to_string(),
        };
        let id = group.id;
        tracing::info!(group = %group.name, "company group created");
        self.groups.push(group);
        id
    }

    /// Draw company tokens until one is unused.
    fn allocate_company_id(&self) -> DomainResult<CompanyId> {
        for _ in 0..MAX_ALLOCATION_ATTEMPTS {
            let id = CompanyId::from_entropy();
            if self.company(&id).is_none() {
                return Ok(id);
            }
        }
        Err(DomainError::conflict(
            "could not allocate a unique company id",
        ))
    }
}

#[cfg(test)]
mod tests {
    use stockline_auth::Role;

    use super::*;

    fn seeded() -> CompanyDirectory {
        let mut dir = CompanyDirectory::new();
        dir.add_company("InventoryFlow Inc.", "123 ERP Lane", Some("Global-Wide"))
            .unwrap();
        dir.add_company("RetailOps Solutions", "456 Commerce Ave", Some("Global-Wide"))
            .unwrap();
        dir.add_company("SoloLogistics", "789 Supply Chain Rd", None)
            .unwrap();
        dir
    }

    #[test]
    fn add_company_reuses_group_by_case_insensitive_name() {
        let mut dir = CompanyDirectory::new();
        dir.add_company("A", "addr", Some("Global-Wide")).unwrap();
        dir.add_company("B", "addr", Some("global-wide")).unwrap();
        assert_eq!(dir.groups().len(), 1);
        let group_id = dir.groups()[0].id;
        assert_eq!(dir.group_members(group_id).len(), 2);
    }

    #[test]
    fn blank_group_name_means_standalone() {
        let mut dir = CompanyDirectory::new();
        let id = dir.add_company("A", "addr", Some("   ")).unwrap();
        assert!(dir.company(&id).unwrap().group_id.is_none());
        assert!(dir.groups().is_empty());
    }

    #[test]
    fn group_members_preserve_directory_order() {
        let dir = seeded();
        let group_id = dir.groups()[0].id;
        let members = dir.group_members(group_id);
        let names: Vec<&str> = members.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["InventoryFlow Inc.", "RetailOps Solutions"]);
    }

    #[test]
    fn allocated_ids_are_distinct() {
        let dir = seeded();
        let mut ids: Vec<&str> = dir.companies().iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn verify_accepts_own_company_case_insensitively() {
        let dir = seeded();
        let own = dir.companies()[0].id.clone();
        let user = User::new("A", "a@x.com", Role::Employee, Some(own.clone()));
        let verified = dir
            .verify_company_id(&user, &own.as_str().to_ascii_lowercase())
            .unwrap();
        assert_eq!(verified, own);
    }

    #[test]
    fn verify_never_reassigns_to_a_sibling_company() {
        let dir = seeded();
        let own = dir.companies()[0].id.clone();
        let other = dir.companies()[1].id.clone();
        let user = User::new("A", "a@x.com", Role::Admin, Some(own));
        assert_eq!(
            dir.verify_company_id(&user, other.as_str()),
            Err(DomainError::NotAuthenticated)
        );
    }

    #[test]
    fn verify_rejects_unknown_tokens() {
        let dir = seeded();
        let user = User::new("A", "a@x.com", Role::Admin, None);
        assert_eq!(
            dir.verify_company_id(&user, "ZZZZZ9"),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn empty_company_name_is_rejected() {
        let mut dir = CompanyDirectory::new();
        assert!(matches!(
            dir.add_company("  ", "addr", None),
            Err(DomainError::Validation(_))
        ));
    }
}
