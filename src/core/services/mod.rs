pub mod crypto_service;
