pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sign, verify, encrypt and decrypt short payloads with certificates
/// from a certificate store.
#[derive(Parser, Debug)]
#[command(name = "certcrypt", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Certificate store to search (my, root, trusted_publisher, ...)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Store scope (current_user, local_machine)
    #[arg(long, global = true)]
    pub location: Option<String>,

    /// Directory holding `{location}/{store}/` certificate folders
    #[arg(long, global = true, env = "CERTCRYPT_STORE_ROOT")]
    pub store_root: Option<PathBuf>,

    /// Use this certificate file instead of a store
    #[arg(long, global = true)]
    pub cert: Option<PathBuf>,

    /// Private key file for --cert
    #[arg(long, global = true, requires = "cert")]
    pub key: Option<PathBuf>,

    /// Digest algorithm for sign/verify (sha1, sha256, sha384, sha512)
    #[arg(long, global = true)]
    pub digest: Option<String>,

    /// Encryption mode (oaep, legacy)
    #[arg(long, global = true)]
    pub mode: Option<String>,

    /// Text encoding of payloads (utf16le, utf8)
    #[arg(long, global = true)]
    pub encoding: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true, env = "CERTCRYPT_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign content with the certificate's private key
    Sign {
        /// Certificate subject, e.g. "CN=Alice, O=Example"
        #[arg(long)]
        subject: String,
        /// The content to sign
        #[arg(long)]
        content: String,
    },

    /// Verify a base64 signature against the certificate's public key
    Verify {
        /// Certificate subject
        #[arg(long)]
        subject: String,
        /// The signed content
        #[arg(long)]
        content: String,
        /// Base64 signature
        #[arg(long)]
        signature: String,
    },

    /// Encrypt content for the certificate
    Encrypt {
        /// Certificate subject
        #[arg(long)]
        subject: String,
        /// The content to encrypt
        #[arg(long)]
        content: String,
    },

    /// Decrypt base64 ciphertext with the certificate's key
    Decrypt {
        /// Certificate subject
        #[arg(long)]
        subject: String,
        /// Base64 ciphertext
        #[arg(long)]
        ciphertext: String,
        /// Print the plaintext as text instead of base64
        #[arg(long)]
        text: bool,
    },

    /// List certificates in the store
    List,
}
