//! Bech32 prefixes and encoding
//!
//! One account prefix (e.g. `cosmos`) fans out into six human-readable parts:
//! account, validator operator and validator consensus, each with an address
//! and a public key form.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Address;

/// Default account prefix
pub const DEFAULT_ACCOUNT_PREFIX: &str = "cosmos";

/// CLI token for account keys
pub const PREFIX_ACCOUNT: &str = "acc";
/// CLI token for validator operator keys
pub const PREFIX_VALIDATOR: &str = "val";
/// CLI token for validator consensus keys
pub const PREFIX_CONSENSUS: &str = "cons";

const VALIDATOR_SUFFIX: &str = "valoper";
const CONSENSUS_SUFFIX: &str = "valcons";
const PUBKEY_SUFFIX: &str = "pub";

/// Scope a key is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Account,
    Validator,
    Consensus,
}

impl AccountKind {
    /// The CLI token naming this kind
    pub fn token(&self) -> &'static str {
        match self {
            AccountKind::Account => PREFIX_ACCOUNT,
            AccountKind::Validator => PREFIX_VALIDATOR,
            AccountKind::Consensus => PREFIX_CONSENSUS,
        }
    }
}

impl FromStr for AccountKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            PREFIX_ACCOUNT => Ok(AccountKind::Account),
            PREFIX_VALIDATOR => Ok(AccountKind::Validator),
            PREFIX_CONSENSUS => Ok(AccountKind::Consensus),
            other => Err(Error::InvalidPrefix(other.to_string())),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Human-readable parts derived from one account prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bech32Config {
    account_prefix: String,
}

impl Default for Bech32Config {
    fn default() -> Self {
        Self {
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
        }
    }
}

impl Bech32Config {
    /// Create from an account prefix, rejecting anything that is not a valid HRP
    pub fn new(account_prefix: impl Into<String>) -> Result<Self> {
        let account_prefix = account_prefix.into().to_ascii_lowercase();
        Hrp::parse(&account_prefix).map_err(|e| Error::Bech32(e.to_string()))?;
        Ok(Self { account_prefix })
    }

    pub fn account_prefix(&self) -> &str {
        &self.account_prefix
    }

    /// HRP for addresses of `kind`
    pub fn address_hrp(&self, kind: AccountKind) -> String {
        match kind {
            AccountKind::Account => self.account_prefix.clone(),
            AccountKind::Validator => format!("{}{}", self.account_prefix, VALIDATOR_SUFFIX),
            AccountKind::Consensus => format!("{}{}", self.account_prefix, CONSENSUS_SUFFIX),
        }
    }

    /// HRP for public keys of `kind`
    pub fn pubkey_hrp(&self, kind: AccountKind) -> String {
        format!("{}{}", self.address_hrp(kind), PUBKEY_SUFFIX)
    }

    /// Render an address for `kind`
    pub fn encode_address(&self, kind: AccountKind, address: &Address) -> Result<String> {
        encode(&self.address_hrp(kind), address.as_bytes())
    }

    /// Decode an account address, requiring the account HRP
    pub fn decode_account_address(&self, s: &str) -> Result<Address> {
        let (hrp, data) = decode(s)?;
        if hrp != self.account_prefix {
            return Err(Error::InvalidAddress(format!(
                "invalid Bech32 prefix; expected {}, got {}",
                self.account_prefix, hrp
            )));
        }
        Address::try_from(data.as_slice())
    }
}

/// Encode `data` under `hrp`
pub fn encode(hrp: &str, data: &[u8]) -> Result<String> {
    let hrp = Hrp::parse(hrp).map_err(|e| Error::Bech32(e.to_string()))?;
    bech32::encode::<Bech32>(hrp, data).map_err(|e| Error::Bech32(e.to_string()))
}

/// Decode a bech32 string into its lower-case HRP and payload
///
/// Only the original bech32 checksum is accepted; bech32m strings are rejected.
pub fn decode(s: &str) -> Result<(String, Vec<u8>)> {
    let checked =
        CheckedHrpstring::new::<Bech32>(s).map_err(|e| Error::Bech32(e.to_string()))?;
    let hrp = checked.hrp().as_str().to_ascii_lowercase();
    Ok((hrp, checked.byte_iter().collect()))
}
