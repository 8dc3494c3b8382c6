use std::path::PathBuf;

use crate::adapters::providers::directory_store::{DirectoryStore, StoreRoots};
use crate::adapters::providers::key_pair_provider::KeyPairProvider;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::crypto_options::CryptoOptions;
use crate::core::models::store_ref::StoreRef;
use crate::core::services::crypto_service::CryptoService;
use crate::core::traits::provider::CertificateProvider;

/// Where certificates come from for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Store { roots: StoreRoots, store: StoreRef },
    KeyPair { cert: PathBuf, key: Option<PathBuf> },
}

/// Settings resolved from the config file and command-line flags.
/// Flags win over the config file.
#[derive(Debug, Clone)]
pub struct Context {
    pub options: CryptoOptions,
    pub source: Source,
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = AppConfig::load(cli.config.as_deref())?;

        let mut options = config.crypto_options();
        if let Some(digest) = &cli.digest {
            options.digest = digest.parse()?;
        }
        if let Some(mode) = &cli.mode {
            options.mode = mode.parse()?;
        }
        if let Some(encoding) = &cli.encoding {
            options.encoding = encoding.parse()?;
        }

        let source = match &cli.cert {
            Some(cert) => Source::KeyPair {
                cert: cert.clone(),
                key: cli.key.clone(),
            },
            None => {
                let mut store = config.store_ref();
                if let Some(name) = &cli.store {
                    store.name = name.parse()?;
                }
                if let Some(location) = &cli.location {
                    store.location = location.parse()?;
                }
                let roots = match &cli.store_root {
                    Some(root) => StoreRoots::single(root.clone()),
                    None => config.store_roots()?,
                };
                Source::Store { roots, store }
            }
        };

        Ok(Self {
            options,
            source,
            json: cli.json,
            quiet: cli.quiet,
            verbose: cli.verbose,
        })
    }

    pub fn provider(&self) -> Box<dyn CertificateProvider> {
        match &self.source {
            Source::Store { roots, store } => Box::new(DirectoryStore::open(roots, *store)),
            Source::KeyPair { cert, key } => {
                Box::new(KeyPairProvider::new(cert.clone(), key.clone()))
            }
        }
    }

    pub fn service(&self) -> CryptoService<Box<dyn CertificateProvider>> {
        CryptoService::new(self.provider(), self.options)
    }
}
