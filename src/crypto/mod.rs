//! Cryptographic primitives: the master key type and the
//! authenticated-encryption seal/open pair.

pub mod cipher;
pub mod keys;

pub use cipher::{open, seal};
pub use keys::MasterKey;
