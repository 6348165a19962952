//! Key records and the key store interface
//!
//! Records are read-only here: the store decides how they are created and
//! persisted, callers only look them up by name or by derived address.

mod file;
mod memory;

pub use file::{FileKeyring, TEST_KEYRING_DIR};
pub use memory::MemoryKeyring;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::PublicKey;
use crate::error::{Error, Result};
use crate::hd::DerivationPath;
use crate::multisig::LegacyAminoPubKey;
use crate::types::Address;

/// Where the private half of a key lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Private key held by the local store
    Local,
    /// Private key held by a hardware device
    Ledger,
    /// Public key only
    Offline,
    /// Multisig aggregate of other keys
    Multi,
}

impl KeyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Local => "local",
            KeyType::Ledger => "ledger",
            KeyType::Offline => "offline",
            KeyType::Multi => "multi",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    name: String,
    #[serde(rename = "type")]
    key_type: KeyType,
    public_key: PublicKey,
    /// Device derivation path, Ledger keys only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<DerivationPath>,
}

impl KeyRecord {
    pub fn local(name: impl Into<String>, public_key: impl Into<PublicKey>) -> Self {
        Self::with_type(name, KeyType::Local, public_key.into(), None)
    }

    pub fn offline(name: impl Into<String>, public_key: impl Into<PublicKey>) -> Self {
        Self::with_type(name, KeyType::Offline, public_key.into(), None)
    }

    pub fn ledger(
        name: impl Into<String>,
        public_key: impl Into<PublicKey>,
        path: DerivationPath,
    ) -> Self {
        Self::with_type(name, KeyType::Ledger, public_key.into(), Some(path))
    }

    pub fn multi(name: impl Into<String>, public_key: LegacyAminoPubKey) -> Self {
        Self::with_type(name, KeyType::Multi, public_key.into(), None)
    }

    fn with_type(
        name: impl Into<String>,
        key_type: KeyType,
        public_key: PublicKey,
        path: Option<DerivationPath>,
    ) -> Self {
        Self {
            name: name.into(),
            key_type,
            public_key,
            path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Derived from the public key on every call
    pub fn address(&self) -> Address {
        self.public_key.address()
    }

    /// Device derivation path
    pub fn path(&self) -> Result<&DerivationPath> {
        match (self.key_type, &self.path) {
            (KeyType::Ledger, Some(path)) => Ok(path),
            (KeyType::Ledger, None) => Err(Error::InvalidDerivationPath(format!(
                "ledger key {} has no derivation path",
                self.name
            ))),
            (other, _) => Err(Error::InvalidDerivationPath(format!(
                "{} keys have no derivation path",
                other
            ))),
        }
    }
}

/// Read access to a key store backend
pub trait Keyring {
    /// Backend name, for logs
    fn backend(&self) -> &'static str;

    /// Look up a record by its unique name
    fn key(&self, name: &str) -> Result<KeyRecord>;

    /// Every record in the store, ordered by name
    fn list(&self) -> Result<Vec<KeyRecord>>;

    /// Look up the record whose derived address equals `address`
    fn key_by_address(&self, address: &Address) -> Result<KeyRecord> {
        self.list()?
            .into_iter()
            .find(|record| record.address() == *address)
            .ok_or(Error::AddressNotFound(*address))
    }
}

/// Reject names that cannot be used as a store key
pub(crate) fn check_key_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control)
    {
        return Err(Error::InvalidKeyName(name.to_string()));
    }
    Ok(())
}
