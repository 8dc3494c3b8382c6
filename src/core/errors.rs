use std::path::PathBuf;

/// All domain errors for certcrypt.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum CertCryptError {
    #[error("Invalid argument: '{name}' must not be empty")]
    InvalidArgument { name: &'static str },

    #[error(
        "No certificate with subject '{subject}' in store {store}\n\n  \
         Subjects are matched exactly (case-sensitive).\n  \
         Run 'certcrypt list' to see the subjects in this store."
    )]
    CertificateNotFound { subject: String, store: String },

    #[error(
        "Certificate store {store} is unavailable: {reason}\n\n  \
         Check the store name, the location (--location) and the store root."
    )]
    StoreUnavailable { store: String, reason: String },

    #[error("Key unavailable for '{subject}': {reason}")]
    KeyUnavailable { subject: String, reason: String },

    #[error("Unsupported key for '{subject}': {detail}\n\n  Only RSA keys are supported.")]
    UnsupportedKey { subject: String, detail: String },

    #[error("Malformed {name}: {detail}")]
    MalformedInput { name: &'static str, detail: String },

    #[error("Signing failed: {reason}")]
    SigningFailed { reason: String },

    #[error("Encryption failed: {reason}")]
    EncryptionFailed { reason: String },

    #[error("Decryption failed: {reason}")]
    DecryptionFailed { reason: String },

    #[error("Invalid certificate {origin}: {detail}")]
    InvalidCertificate { origin: String, detail: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "This configuration uses format version {config_version}, but this build \
         only supports up to version {supported_version}."
    )]
    FormatVersionTooNew {
        config_version: u32,
        supported_version: u32,
    },

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CertCryptError>;
