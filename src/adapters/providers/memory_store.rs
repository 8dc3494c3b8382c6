use crate::core::errors::{CertCryptError, Result};
use crate::core::models::certificate::CertificateRecord;
use crate::core::traits::provider::CertificateProvider;

/// In-memory certificate store.
///
/// Records are enumerated in insertion order. Useful for embedding the
/// service without a filesystem store, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<CertificateRecord>,
    unavailable: Option<String>,
}

impl MemoryStore {
    pub fn new(records: Vec<CertificateRecord>) -> Self {
        Self {
            records,
            unavailable: None,
        }
    }

    /// A store that fails to open with the given reason.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            records: Vec::new(),
            unavailable: Some(reason.to_string()),
        }
    }

    /// Append a record at the end of the enumeration order.
    pub fn push(&mut self, record: CertificateRecord) {
        self.records.push(record);
    }
}

impl CertificateProvider for MemoryStore {
    fn certificates(&self) -> Result<Vec<CertificateRecord>> {
        if let Some(reason) = &self.unavailable {
            return Err(CertCryptError::StoreUnavailable {
                store: self.describe(),
                reason: reason.clone(),
            });
        }
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
