pub mod directory_store;
pub mod key_pair_provider;
pub mod memory_store;
