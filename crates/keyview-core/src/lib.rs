//! keyview core - key records, addresses and multisig keys
//!
//! This crate provides the data model behind `keyview show`: public keys and
//! their derived addresses, legacy amino multisig aggregation, bech32
//! rendering for account, validator and consensus scopes, and the key store
//! interface with its in-memory and file backends.

pub mod crypto;
pub mod error;
pub mod hd;
pub mod keyring;
pub mod multisig;
pub mod output;
pub mod prefix;
pub mod types;

pub use crypto::{Ed25519PublicKey, PublicKey, Secp256k1PublicKey};
pub use error::{Error, Result, ThresholdError};
pub use hd::DerivationPath;
pub use keyring::{FileKeyring, KeyRecord, KeyType, Keyring, MemoryKeyring};
pub use multisig::{aggregate, validate_threshold, LegacyAminoPubKey};
pub use output::{BechKeyOutFn, KeyOutput, MultisigPubKeyOutput};
pub use prefix::{AccountKind, Bech32Config};
pub use types::Address;
