use std::fmt;
use std::str::FromStr;

use rsa::Pkcs1v15Sign;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::core::errors::{CertCryptError, Result};

/// Digest applied to the payload before PKCS#1 v1.5 signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DigestAlgorithm {
    /// Kept for compatibility with signatures produced by older deployments.
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Hash `data` with this algorithm.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// PKCS#1 v1.5 signature scheme carrying this algorithm's DigestInfo OID.
    pub fn pkcs1v15(&self) -> Pkcs1v15Sign {
        match self {
            DigestAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
            DigestAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            DigestAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            DigestAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CertCryptError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(CertCryptError::InvalidConfig {
                detail: format!(
                    "Unknown digest algorithm: '{s}'. Use 'sha1', 'sha256', 'sha384' or 'sha512'."
                ),
            }),
        }
    }
}

impl TryFrom<String> for DigestAlgorithm {
    type Error = CertCryptError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Key-half and padding pairing used by encrypt/decrypt.
///
/// `Oaep` encrypts with the public key and decrypts with the private key,
/// OAEP (SHA-1) on both sides, so the two operations are inverses.
///
/// `Legacy` reproduces the older pairing: encryption requires the private
/// key and uses PKCS#1 v1.5 padding, decryption uses the public key with
/// OAEP. A public key cannot reverse RSA encryption, so in this mode
/// `decrypt` never succeeds and `encrypt` output cannot be decrypted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EncryptionMode {
    #[default]
    Oaep,
    Legacy,
}

impl EncryptionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionMode::Oaep => "oaep",
            EncryptionMode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for EncryptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionMode {
    type Err = CertCryptError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oaep" => Ok(EncryptionMode::Oaep),
            "legacy" => Ok(EncryptionMode::Legacy),
            _ => Err(CertCryptError::InvalidConfig {
                detail: format!("Unknown encryption mode: '{s}'. Use 'oaep' or 'legacy'."),
            }),
        }
    }
}

impl TryFrom<String> for EncryptionMode {
    type Error = CertCryptError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// How text payloads are turned into bytes before hashing or encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TextEncoding {
    /// UTF-16 little-endian without a byte order mark.
    #[default]
    Utf16Le,
    Utf8,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf16Le => "utf16le",
            TextEncoding::Utf8 => "utf8",
        }
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            TextEncoding::Utf16Le => {
                if !bytes.len().is_multiple_of(2) {
                    return Err(CertCryptError::MalformedInput {
                        name: "plaintext",
                        detail: "odd number of bytes for UTF-16".into(),
                    });
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|e| CertCryptError::MalformedInput {
                    name: "plaintext",
                    detail: format!("invalid UTF-16: {e}"),
                })
            }
            TextEncoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|e| CertCryptError::MalformedInput {
                    name: "plaintext",
                    detail: format!("invalid UTF-8: {e}"),
                })
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextEncoding {
    type Err = CertCryptError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "utf16le" | "utf16" | "unicode" => Ok(TextEncoding::Utf16Le),
            "utf8" => Ok(TextEncoding::Utf8),
            _ => Err(CertCryptError::InvalidConfig {
                detail: format!("Unknown text encoding: '{s}'. Use 'utf16le' or 'utf8'."),
            }),
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = CertCryptError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Algorithm choices applied by `CryptoService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CryptoOptions {
    pub digest: DigestAlgorithm,
    pub mode: EncryptionMode,
    pub encoding: TextEncoding,
}
