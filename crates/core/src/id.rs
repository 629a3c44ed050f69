//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a user (actor identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

/// Identifier of a company group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(UserId, "UserId");
impl_uuid_newtype!(GroupId, "GroupId");

/// Length of a company token.
const COMPANY_ID_LEN: usize = 6;

/// Alphabet for company tokens (uppercase alphanumeric, human-shareable).
const COMPANY_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Identifier of a company (the multi-tenant boundary).
///
/// A short uppercase alphanumeric token meant to be read out loud or pasted
/// into a company-id gate. Always stored normalized (uppercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Parse and normalize a candidate token.
    ///
    /// Lowercase input is accepted and uppercased; anything that is not a
    /// 6-character alphanumeric token is rejected.
    pub fn parse(candidate: &str) -> Result<Self, DomainError> {
        let normalized = candidate.trim().to_ascii_uppercase();
        if normalized.len() != COMPANY_ID_LEN {
            return Err(DomainError::invalid_id(format!(
                "CompanyId: expected {COMPANY_ID_LEN} characters, got {}",
                normalized.len()
            )));
        }
        if !normalized.bytes().all(|b| COMPANY_ID_ALPHABET.contains(&b)) {
            return Err(DomainError::invalid_id(
                "CompanyId: only A-Z and 0-9 are allowed".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// Draw a fresh random token.
    ///
    /// Uniqueness is NOT guaranteed here; the directory checks the token
    /// against existing entries and redraws on collision.
    pub fn from_entropy() -> Self {
        let bytes = *Uuid::new_v4().as_bytes();
        let token: String = bytes
            .iter()
            .take(COMPANY_ID_LEN)
            .map(|b| COMPANY_ID_ALPHABET[*b as usize % COMPANY_ID_ALPHABET.len()] as char)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CompanyId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Identifier of a business record (inventory item, sale, order, ...).
///
/// Prefixed, time-ordered, unique enough for a single store: `INV-0190...`.
/// The prefix conveys the record family in logs and exports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Allocate a fresh id with the given family prefix.
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{prefix}-{}", Uuid::now_v7().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("RecordId: empty".to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_id_parse_normalizes_to_uppercase() {
        let id = CompanyId::parse("ejy1ut").unwrap();
        assert_eq!(id.as_str(), "EJY1UT");
    }

    #[test]
    fn company_id_parse_rejects_wrong_length_and_charset() {
        assert!(CompanyId::parse("ABC").is_err());
        assert!(CompanyId::parse("ABCDEFG").is_err());
        assert!(CompanyId::parse("AB-C1D").is_err());
    }

    #[test]
    fn company_id_from_entropy_is_well_formed() {
        for _ in 0..32 {
            let id = CompanyId::from_entropy();
            assert!(CompanyId::parse(id.as_str()).is_ok());
        }
    }

    #[test]
    fn record_id_carries_prefix() {
        let id = RecordId::generate("INV");
        assert!(id.as_str().starts_with("INV-"));
    }
}
