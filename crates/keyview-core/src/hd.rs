//! BIP-44 derivation paths carried by device-backed keys
//!
//! Keys held on a hardware device are referenced by the path the device uses
//! to derive them; showing such a key on the device needs that path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BIP-44 purpose
pub const BIP44_PURPOSE: u32 = 44;

/// SLIP-44 coin type of the Cosmos Hub
pub const COSMOS_COIN_TYPE: u32 = 118;

/// HD derivation path component
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathComponent {
    /// Index value
    pub index: u32,
    /// Whether this is a hardened derivation
    pub hardened: bool,
}

impl PathComponent {
    pub fn normal(index: u32) -> Self {
        Self {
            index,
            hardened: false,
        }
    }

    pub fn hardened(index: u32) -> Self {
        Self {
            index,
            hardened: true,
        }
    }
}

/// HD derivation path (e.g., m/44'/118'/0'/0/0)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivationPath {
    pub components: Vec<PathComponent>,
}

impl DerivationPath {
    /// m/44'/coin_type'/account'/0/address_index
    pub fn bip44(coin_type: u32, account: u32, address_index: u32) -> Self {
        Self {
            components: vec![
                PathComponent::hardened(BIP44_PURPOSE),
                PathComponent::hardened(coin_type),
                PathComponent::hardened(account),
                PathComponent::normal(0),
                PathComponent::normal(address_index),
            ],
        }
    }

    /// Cosmos Hub path for `account` / `address_index`
    pub fn cosmos(account: u32, address_index: u32) -> Self {
        Self::bip44(COSMOS_COIN_TYPE, account, address_index)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for component in &self.components {
            write!(f, "/{}", component.index)?;
            if component.hardened {
                f.write_str("'")?;
            }
        }
        Ok(())
    }
}
