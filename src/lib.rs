//! Sign, verify, encrypt and decrypt short text payloads with the RSA key
//! pair of a certificate looked up by subject in a certificate store.
//!
//! ```no_run
//! use certcrypt::{CryptoOptions, CryptoService, DirectoryStore, StoreRef, StoreRoots};
//!
//! let roots = StoreRoots::default_roots()?;
//! let store = DirectoryStore::open(&roots, StoreRef::default());
//! let service = CryptoService::new(store, CryptoOptions::default());
//!
//! let signature = service.sign("CN=Alice, O=Example", "hello")?;
//! assert!(service.verify("CN=Alice, O=Example", "hello", &signature)?);
//! # Ok::<(), certcrypt::CertCryptError>(())
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;

pub use crate::adapters::providers::directory_store::{DirectoryStore, StoreRoots};
pub use crate::adapters::providers::key_pair_provider::KeyPairProvider;
pub use crate::adapters::providers::memory_store::MemoryStore;
pub use crate::core::errors::{CertCryptError, Result};
pub use crate::core::models::certificate::CertificateRecord;
pub use crate::core::models::crypto_options::{
    CryptoOptions, DigestAlgorithm, EncryptionMode, TextEncoding,
};
pub use crate::core::models::store_ref::{StoreLocation, StoreName, StoreRef};
pub use crate::core::services::crypto_service::CryptoService;
pub use crate::core::traits::provider::CertificateProvider;
