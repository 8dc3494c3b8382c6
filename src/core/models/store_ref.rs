use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::core::errors::CertCryptError;

/// Category of certificate store to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum StoreName {
    /// Personal certificates, usually the only ones with private keys.
    #[default]
    My,
    Root,
    TrustedPublisher,
    TrustedPeople,
    CertificateAuthority,
    AuthRoot,
    AddressBook,
    Disallowed,
}

impl StoreName {
    pub const ALL: [StoreName; 8] = [
        StoreName::My,
        StoreName::Root,
        StoreName::TrustedPublisher,
        StoreName::TrustedPeople,
        StoreName::CertificateAuthority,
        StoreName::AuthRoot,
        StoreName::AddressBook,
        StoreName::Disallowed,
    ];

    /// Directory-friendly identifier, e.g. `trusted_publisher`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreName::My => "my",
            StoreName::Root => "root",
            StoreName::TrustedPublisher => "trusted_publisher",
            StoreName::TrustedPeople => "trusted_people",
            StoreName::CertificateAuthority => "certificate_authority",
            StoreName::AuthRoot => "auth_root",
            StoreName::AddressBook => "address_book",
            StoreName::Disallowed => "disallowed",
        }
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreName {
    type Err = CertCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        if normalized == "personal" {
            return Ok(StoreName::My);
        }
        StoreName::ALL
            .into_iter()
            .find(|name| name.as_str() == normalized)
            .ok_or_else(|| CertCryptError::InvalidConfig {
                detail: format!(
                    "Unknown store name: '{s}'. Use one of: {}",
                    StoreName::ALL.map(|n| n.as_str()).join(", ")
                ),
            })
    }
}

impl TryFrom<String> for StoreName {
    type Error = CertCryptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Scope a store search is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum StoreLocation {
    #[default]
    CurrentUser,
    LocalMachine,
}

impl StoreLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreLocation::CurrentUser => "current_user",
            StoreLocation::LocalMachine => "local_machine",
        }
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreLocation {
    type Err = CertCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "current_user" | "user" => Ok(StoreLocation::CurrentUser),
            "local_machine" | "machine" => Ok(StoreLocation::LocalMachine),
            _ => Err(CertCryptError::InvalidConfig {
                detail: format!(
                    "Unknown store location: '{s}'. Use 'current_user' or 'local_machine'."
                ),
            }),
        }
    }
}

impl TryFrom<String> for StoreLocation {
    type Error = CertCryptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Identifies where to search: a store category within a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StoreRef {
    pub name: StoreName,
    pub location: StoreLocation,
}

impl StoreRef {
    pub fn new(name: StoreName, location: StoreLocation) -> Self {
        Self { name, location }
    }
}

impl fmt::Display for StoreRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.location, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_store_name_variants() {
        assert_eq!("my".parse::<StoreName>().unwrap(), StoreName::My);
        assert_eq!("Personal".parse::<StoreName>().unwrap(), StoreName::My);
        assert_eq!(
            "trusted-publisher".parse::<StoreName>().unwrap(),
            StoreName::TrustedPublisher
        );
        assert_eq!("ROOT".parse::<StoreName>().unwrap(), StoreName::Root);
    }

    #[test]
    fn parse_unknown_store_name_fails() {
        let err = "vault".parse::<StoreName>().unwrap_err();
        assert!(err.to_string().contains("Unknown store name"));
    }

    #[test]
    fn parse_store_location() {
        assert_eq!(
            "local-machine".parse::<StoreLocation>().unwrap(),
            StoreLocation::LocalMachine
        );
        assert_eq!(
            "current_user".parse::<StoreLocation>().unwrap(),
            StoreLocation::CurrentUser
        );
        assert!("everywhere".parse::<StoreLocation>().is_err());
    }

    #[test]
    fn store_ref_display() {
        let store = StoreRef::new(StoreName::Root, StoreLocation::LocalMachine);
        assert_eq!(store.to_string(), "local_machine/root");
    }
}
