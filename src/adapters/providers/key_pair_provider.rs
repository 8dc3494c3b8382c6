use std::path::{Path, PathBuf};

use crate::core::errors::{CertCryptError, Result};
use crate::core::models::certificate::{self, CertificateRecord};
use crate::core::traits::provider::CertificateProvider;

/// Provider for a certificate (and optional private key) given directly
/// as files, for environments without a certificate store.
///
/// Files are read on every lookup; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct KeyPairProvider {
    cert_path: PathBuf,
    key_path: Option<PathBuf>,
}

impl KeyPairProvider {
    pub fn new(cert_path: PathBuf, key_path: Option<PathBuf>) -> Self {
        Self {
            cert_path,
            key_path,
        }
    }

    fn read(path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(CertCryptError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(std::fs::read(path)?)
    }

    fn load(&self) -> Result<CertificateRecord> {
        let data = Self::read(&self.cert_path)?;
        let origin = self.cert_path.display().to_string();

        let record = if certificate::is_pem(&data) {
            CertificateRecord::from_pem(&data, &origin)?
        } else {
            CertificateRecord::from_der(data, &origin)?
        };

        let Some(key_path) = &self.key_path else {
            return Ok(record);
        };

        let key_origin = key_path.display().to_string();
        let blocks = pem::parse_many(Self::read(key_path)?).map_err(|e| {
            CertCryptError::InvalidCertificate {
                origin: key_origin.clone(),
                detail: format!("Failed to parse key PEM: {e}"),
            }
        })?;
        let block = certificate::find_private_key(&blocks).ok_or_else(|| {
            CertCryptError::InvalidCertificate {
                origin: key_origin.clone(),
                detail: "No private key block found".into(),
            }
        })?;
        let key = certificate::decode_private_key(block).map_err(|detail| {
            CertCryptError::InvalidCertificate {
                origin: key_origin,
                detail,
            }
        })?;

        record.with_private_key(key)
    }
}

impl CertificateProvider for KeyPairProvider {
    fn certificates(&self) -> Result<Vec<CertificateRecord>> {
        Ok(vec![self.load()?])
    }

    fn describe(&self) -> String {
        format!("file:{}", self.cert_path.display())
    }
}
