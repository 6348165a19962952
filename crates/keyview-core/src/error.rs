//! Error types for keyview-core

use thiserror::Error;

use crate::types::Address;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    #[error("a multisig key needs at least {min} keys, got {got}")]
    TooFewKeys { min: usize, got: usize },

    #[error("invalid Bech32 prefix encoding provided: {0}")]
    InvalidPrefix(String),

    #[error("Bech32 error: {0}")]
    Bech32(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    #[error("{0}.info: key not found")]
    KeyNotFound(String),

    #[error("key with address {0} not found")]
    AddressNotFound(Address),

    #[error("invalid key name: {0}")]
    InvalidKeyName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether this error means the store simply has no such key
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_) | Error::AddressNotFound(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Multisig threshold validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("threshold must be a positive integer")]
    NotPositive,

    #[error("threshold k of n multisignature: {keys} < {threshold}")]
    ExceedsKeys { threshold: i64, keys: usize },
}
