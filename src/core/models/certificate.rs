use std::fmt;

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use x509_parser::objects;
use x509_parser::prelude::{AttributeTypeAndValue, FromDer, X509Certificate, X509Name};

use crate::core::errors::{CertCryptError, Result};

const CERTIFICATE_TAG: &str = "CERTIFICATE";
const PKCS8_KEY_TAG: &str = "PRIVATE KEY";
const PKCS1_KEY_TAG: &str = "RSA PRIVATE KEY";
const ENCRYPTED_KEY_TAG: &str = "ENCRYPTED PRIVATE KEY";
const KEY_TAGS: [&str; 3] = [PKCS8_KEY_TAG, PKCS1_KEY_TAG, ENCRYPTED_KEY_TAG];

/// A certificate as handed out by a certificate store.
///
/// The public key is always present (as the certificate's
/// SubjectPublicKeyInfo); the private key only when the store
/// grants access to it.
#[derive(Clone)]
pub struct CertificateRecord {
    subject: String,
    der: Vec<u8>,
    public_key_der: Vec<u8>,
    private_key: Option<RsaPrivateKey>,
}

impl CertificateRecord {
    /// Parse a DER-encoded X.509 certificate. `origin` names the source
    /// in error messages (a file path, a store entry).
    pub fn from_der(der: Vec<u8>, origin: &str) -> Result<Self> {
        let (subject, public_key_der) = {
            let (_, cert) =
                X509Certificate::from_der(&der).map_err(|e| CertCryptError::InvalidCertificate {
                    origin: origin.to_string(),
                    detail: format!("Failed to parse certificate DER: {e}"),
                })?;
            (render_name(cert.subject()), cert.public_key().raw.to_vec())
        };

        Ok(Self {
            subject,
            der,
            public_key_der,
            private_key: None,
        })
    }

    /// Parse PEM text holding one certificate and, optionally, its RSA
    /// private key (PKCS#8 or PKCS#1).
    ///
    /// An embedded key that cannot be used (encrypted, non-RSA, or not
    /// matching the certificate) is reported as an error.
    pub fn from_pem(pem_data: &[u8], origin: &str) -> Result<Self> {
        let blocks = pem::parse_many(pem_data).map_err(|e| CertCryptError::InvalidCertificate {
            origin: origin.to_string(),
            detail: format!("Failed to parse PEM: {e}"),
        })?;

        let cert_block =
            find_certificate(&blocks).ok_or_else(|| CertCryptError::InvalidCertificate {
                origin: origin.to_string(),
                detail: "No CERTIFICATE block found".into(),
            })?;

        let record = Self::from_der(cert_block.contents().to_vec(), origin)?;

        match find_private_key(&blocks) {
            Some(block) => {
                let key = decode_private_key(block).map_err(|detail| {
                    CertCryptError::InvalidCertificate {
                        origin: origin.to_string(),
                        detail,
                    }
                })?;
                record.with_private_key(key)
            }
            None => Ok(record),
        }
    }

    /// Attach the private half of the key pair.
    ///
    /// Fails with `KeyUnavailable` when the key does not belong to this
    /// certificate's public key.
    pub fn with_private_key(mut self, key: RsaPrivateKey) -> Result<Self> {
        if !self.key_matches(&key) {
            return Err(CertCryptError::KeyUnavailable {
                subject: self.subject,
                reason: "private key does not match the certificate's public key".into(),
            });
        }
        self.private_key = Some(key);
        Ok(self)
    }

    /// Whether `key` is the private half of this certificate's RSA key.
    pub fn key_matches(&self, key: &RsaPrivateKey) -> bool {
        self.rsa_public_key()
            .is_ok_and(|public| public == key.to_public_key())
    }

    /// Subject name, most specific part first: `CN=Alice, O=Example, C=US`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// DER-encoded certificate bytes.
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Extract the RSA public key from the certificate.
    pub fn rsa_public_key(&self) -> Result<RsaPublicKey> {
        RsaPublicKey::from_public_key_der(&self.public_key_der).map_err(|e| {
            CertCryptError::UnsupportedKey {
                subject: self.subject.clone(),
                detail: format!("public key is not RSA ({e})"),
            }
        })
    }

    /// Borrow the RSA private key, if the store made one available.
    pub fn rsa_private_key(&self) -> Result<&RsaPrivateKey> {
        self.private_key
            .as_ref()
            .ok_or_else(|| CertCryptError::KeyUnavailable {
                subject: self.subject.clone(),
                reason: "certificate has no accessible private key".into(),
            })
    }
}

impl fmt::Debug for CertificateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateRecord")
            .field("subject", &self.subject)
            .field("der_len", &self.der.len())
            .field("has_private_key", &self.has_private_key())
            .finish()
    }
}

/// Render a distinguished name in reverse encoding order, the way
/// certificate stores display subjects. Multi-valued parts are joined
/// with ` + `.
fn render_name(name: &X509Name<'_>) -> String {
    let mut parts: Vec<String> = name
        .iter()
        .map(|rdn| {
            rdn.iter()
                .map(render_attribute)
                .collect::<Vec<_>>()
                .join(" + ")
        })
        .collect();
    parts.reverse();
    parts.join(", ")
}

fn render_attribute(attr: &AttributeTypeAndValue<'_>) -> String {
    let key = objects::oid2abbrev(attr.attr_type(), objects::oid_registry())
        .map(str::to_string)
        .unwrap_or_else(|_| attr.attr_type().to_id_string());
    match attr.as_str() {
        Ok(value) => format!("{key}={value}"),
        Err(_) => {
            let hex: String = attr.as_slice().iter().map(|b| format!("{b:02X}")).collect();
            format!("{key}=#{hex}")
        }
    }
}

/// Whether `data` is PEM text rather than raw DER.
pub(crate) fn is_pem(data: &[u8]) -> bool {
    data.trim_ascii_start().starts_with(b"-----BEGIN")
}

/// Return the first certificate block in a PEM bundle, if any.
pub(crate) fn find_certificate(blocks: &[pem::Pem]) -> Option<&pem::Pem> {
    blocks.iter().find(|b| b.tag() == CERTIFICATE_TAG)
}

/// Return the first private key block in a PEM bundle, if any.
pub(crate) fn find_private_key(blocks: &[pem::Pem]) -> Option<&pem::Pem> {
    blocks.iter().find(|b| KEY_TAGS.contains(&b.tag()))
}

/// Decode an RSA private key from a PEM block.
pub(crate) fn decode_private_key(block: &pem::Pem) -> std::result::Result<RsaPrivateKey, String> {
    match block.tag() {
        PKCS8_KEY_TAG => RsaPrivateKey::from_pkcs8_der(block.contents())
            .map_err(|e| format!("Private key is not an RSA PKCS#8 key: {e}")),
        PKCS1_KEY_TAG => RsaPrivateKey::from_pkcs1_der(block.contents())
            .map_err(|e| format!("Invalid RSA PKCS#1 private key: {e}")),
        ENCRYPTED_KEY_TAG => Err("Encrypted private keys are not supported".into()),
        other => Err(format!("Unexpected PEM block '{other}'")),
    }
}
