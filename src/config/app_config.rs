use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::providers::directory_store::StoreRoots;
use crate::core::errors::{CertCryptError, Result};
use crate::core::models::crypto_options::{
    CryptoOptions, DigestAlgorithm, EncryptionMode, TextEncoding,
};
use crate::core::models::store_ref::{StoreLocation, StoreName, StoreRef};

/// Top-level configuration read from `config.toml`.
///
/// Every section is optional; missing values fall back to the defaults
/// (SHA-256, OAEP, UTF-16LE, the personal store of the current user).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub certcrypt: CertCryptSection,
    pub store: StoreSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CertCryptError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a configuration file and check its format version.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CertCryptError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if config.certcrypt.format_version > CURRENT_FORMAT_VERSION {
            return Err(CertCryptError::FormatVersionTooNew {
                config_version: config.certcrypt.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        Ok(config)
    }

    /// Default configuration file: `{config_dir}/certcrypt/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("certcrypt").join("config.toml"))
    }

    pub fn crypto_options(&self) -> CryptoOptions {
        CryptoOptions {
            digest: self.certcrypt.digest,
            mode: self.certcrypt.encryption_mode,
            encoding: self.certcrypt.encoding,
        }
    }

    pub fn store_ref(&self) -> StoreRef {
        StoreRef::new(self.store.name, self.store.location)
    }

    /// Store roots with configured overrides applied to the platform defaults.
    pub fn store_roots(&self) -> Result<StoreRoots> {
        if let (Some(user), Some(machine)) = (&self.store.user_root, &self.store.machine_root) {
            return Ok(StoreRoots {
                user: user.clone(),
                machine: machine.clone(),
            });
        }

        let mut roots = StoreRoots::default_roots()?;
        if let Some(user) = &self.store.user_root {
            roots.user = user.clone();
        }
        if let Some(machine) = &self.store.machine_root {
            roots.machine = machine.clone();
        }
        Ok(roots)
    }
}

/// Current format version supported by this build.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// The `[certcrypt]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CertCryptSection {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    pub format_version: u32,
    pub digest: DigestAlgorithm,
    pub encryption_mode: EncryptionMode,
    pub encoding: TextEncoding,
}

impl Default for CertCryptSection {
    fn default() -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            digest: DigestAlgorithm::default(),
            encryption_mode: EncryptionMode::default(),
            encoding: TextEncoding::default(),
        }
    }
}

/// The `[store]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub name: StoreName,
    pub location: StoreLocation,
    pub user_root: Option<PathBuf>,
    pub machine_root: Option<PathBuf>,
}
