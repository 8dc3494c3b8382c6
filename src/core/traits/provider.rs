use crate::core::errors::Result;
use crate::core::models::certificate::CertificateRecord;

/// Port for read-only certificate stores.
///
/// Implementations live in `adapters::providers` (e.g. DirectoryStore,
/// KeyPairProvider, MemoryStore). The core layer only depends on this
/// trait, never on a concrete store.
pub trait CertificateProvider: Send + Sync {
    /// Enumerate every certificate in the store, in store order.
    ///
    /// A store that cannot be opened is an error, not an empty list.
    fn certificates(&self) -> Result<Vec<CertificateRecord>>;

    /// Find the first certificate whose subject equals `subject` exactly.
    fn find(&self, subject: &str) -> Result<Option<CertificateRecord>> {
        Ok(self
            .certificates()?
            .into_iter()
            .find(|record| record.subject() == subject))
    }

    /// Human-readable description of the store (e.g. "current_user/my").
    fn describe(&self) -> String;
}

impl<T: CertificateProvider + ?Sized> CertificateProvider for Box<T> {
    fn certificates(&self) -> Result<Vec<CertificateRecord>> {
        (**self).certificates()
    }

    fn find(&self, subject: &str) -> Result<Option<CertificateRecord>> {
        (**self).find(subject)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
