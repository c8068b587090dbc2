pub mod cli;
pub mod crypto;
pub mod errors;
pub mod keystore;
pub mod store;
pub mod vault;
