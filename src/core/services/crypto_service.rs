use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rsa::{Oaep, Pkcs1v15Encrypt};
use sha1::Sha1;
use tracing::debug;

use crate::core::errors::{CertCryptError, Result};
use crate::core::models::certificate::CertificateRecord;
use crate::core::models::crypto_options::{CryptoOptions, EncryptionMode};
use crate::core::traits::provider::CertificateProvider;

/// Signs, verifies, encrypts and decrypts text payloads with the key pair
/// of the first certificate in a `CertificateProvider` whose subject matches.
///
/// Every call validates its arguments before touching the store, looks the
/// certificate up afresh, and keeps nothing between calls.
pub struct CryptoService<P: CertificateProvider> {
    pub provider: P,
    pub options: CryptoOptions,
}

impl<P: CertificateProvider> CryptoService<P> {
    pub fn new(provider: P, options: CryptoOptions) -> Self {
        Self { provider, options }
    }

    /// Hash `content` and sign the digest with the certificate's private key
    /// (RSA PKCS#1 v1.5). Returns the base64 signature.
    pub fn sign(&self, subject: &str, content: &str) -> Result<String> {
        require("subject", subject)?;
        require("content", content)?;

        let record = self.lookup(subject)?;
        let key = record.rsa_private_key()?;

        let digest = self.digest(content);
        let signature = key
            .sign(self.options.digest.pkcs1v15(), &digest)
            .map_err(|e| CertCryptError::SigningFailed {
                reason: e.to_string(),
            })?;

        debug!(subject, digest = %self.options.digest, "signed payload");
        Ok(STANDARD.encode(signature))
    }

    /// Check a base64 signature over `content` against the certificate's
    /// public key. A mismatch is `Ok(false)`; undecodable base64 is an error.
    pub fn verify(&self, subject: &str, content: &str, signature: &str) -> Result<bool> {
        require("subject", subject)?;
        require("content", content)?;
        require("signature", signature)?;
        let signature = decode_base64("signature", signature)?;

        let record = self.lookup(subject)?;
        let public_key = record.rsa_public_key()?;

        let digest = self.digest(content);
        let valid = public_key
            .verify(self.options.digest.pkcs1v15(), &digest, &signature)
            .is_ok();

        debug!(subject, digest = %self.options.digest, valid, "verified signature");
        Ok(valid)
    }

    /// Encrypt `content` for the certificate. Returns base64 ciphertext.
    pub fn encrypt(&self, subject: &str, content: &str) -> Result<String> {
        require("subject", subject)?;
        require("content", content)?;

        let record = self.lookup(subject)?;
        let plaintext = self.options.encoding.encode(content);
        let mut rng = rand::thread_rng();

        let ciphertext = match self.options.mode {
            EncryptionMode::Oaep => record
                .rsa_public_key()?
                .encrypt(&mut rng, Oaep::new::<Sha1>(), &plaintext),
            EncryptionMode::Legacy => record
                .rsa_private_key()?
                .to_public_key()
                .encrypt(&mut rng, Pkcs1v15Encrypt, &plaintext),
        }
        .map_err(|e| CertCryptError::EncryptionFailed {
            reason: e.to_string(),
        })?;

        debug!(subject, mode = %self.options.mode, "encrypted payload");
        Ok(STANDARD.encode(ciphertext))
    }

    /// Decrypt base64 `ciphertext`. Returns the raw plaintext bytes as base64;
    /// use `TextEncoding::decode` to turn them back into text.
    pub fn decrypt(&self, subject: &str, ciphertext: &str) -> Result<String> {
        require("subject", subject)?;
        require("ciphertext", ciphertext)?;
        let ciphertext = decode_base64("ciphertext", ciphertext)?;

        let record = self.lookup(subject)?;

        let plaintext = match self.options.mode {
            EncryptionMode::Oaep => record
                .rsa_private_key()?
                .decrypt(Oaep::new::<Sha1>(), &ciphertext)
                .map_err(|e| CertCryptError::DecryptionFailed {
                    reason: e.to_string(),
                })?,
            EncryptionMode::Legacy => {
                record.rsa_public_key()?;
                return Err(CertCryptError::KeyUnavailable {
                    subject: subject.to_string(),
                    reason: "legacy mode decrypts with the public key, which cannot reverse \
                             RSA encryption (use --mode oaep)"
                        .into(),
                });
            }
        };

        debug!(subject, mode = %self.options.mode, "decrypted payload");
        Ok(STANDARD.encode(plaintext))
    }

    /// Every certificate in the store, in enumeration order.
    pub fn list(&self) -> Result<Vec<CertificateRecord>> {
        self.provider.certificates()
    }

    fn lookup(&self, subject: &str) -> Result<CertificateRecord> {
        let store = self.provider.describe();
        debug!(subject, %store, "looking up certificate");

        self.provider
            .find(subject)?
            .ok_or_else(|| CertCryptError::CertificateNotFound {
                subject: subject.to_string(),
                store,
            })
    }

    fn digest(&self, content: &str) -> Vec<u8> {
        self.options.digest.digest(&self.options.encoding.encode(content))
    }
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CertCryptError::InvalidArgument { name });
    }
    Ok(())
}

fn decode_base64(name: &'static str, value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value.trim())
        .map_err(|e| CertCryptError::MalformedInput {
            name,
            detail: format!("invalid base64: {e}"),
        })
}
