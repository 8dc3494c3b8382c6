pub mod certificate;
pub mod crypto_options;
pub mod store_ref;
