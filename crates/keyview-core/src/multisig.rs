//! K-of-N legacy amino multisig keys
//!
//! The aggregate key encodes the threshold and the ordered member keys; its
//! address is the truncated SHA256 of that encoding. Member order and threshold
//! both feed the address, so permuting members yields a different account.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crypto::{truncated_sha256, PublicKey};
pub use crate::error::ThresholdError;
use crate::error::{Error, Result};
use crate::keyring::KeyRecord;
use crate::types::Address;

/// Amino registration prefix of `tendermint/PubKeyMultisigThreshold`
pub const MULTISIG_AMINO_PREFIX: [u8; 4] = [0x22, 0xc1, 0xf7, 0xe2];

/// Fewest records `aggregate` combines into a multisig record
pub const MIN_MULTISIG_KEYS: usize = 2;

/// Name given to multisig records built on the fly
pub const DEFAULT_MULTISIG_KEY_NAME: &str = "multi";

/// Amino field tags: field 1 varint, field 2 length-delimited
const THRESHOLD_FIELD_TAG: u8 = 0x08;
const PUBKEYS_FIELD_TAG: u8 = 0x12;

/// Check that `1 <= threshold <= keys`
pub fn validate_threshold(
    threshold: i64,
    keys: usize,
) -> std::result::Result<u32, ThresholdError> {
    if threshold <= 0 {
        return Err(ThresholdError::NotPositive);
    }
    if (keys as u64) < threshold as u64 {
        return Err(ThresholdError::ExceedsKeys { threshold, keys });
    }
    u32::try_from(threshold).map_err(|_| ThresholdError::ExceedsKeys { threshold, keys })
}

/// K-of-N multisig public key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredMultisig")]
pub struct LegacyAminoPubKey {
    threshold: u32,
    public_keys: Vec<PublicKey>,
}

/// Unchecked stored form, validated through [`LegacyAminoPubKey::new`]
#[derive(Deserialize)]
struct StoredMultisig {
    threshold: u32,
    public_keys: Vec<PublicKey>,
}

impl TryFrom<StoredMultisig> for LegacyAminoPubKey {
    type Error = Error;

    fn try_from(stored: StoredMultisig) -> Result<Self> {
        Self::new(i64::from(stored.threshold), stored.public_keys)
    }
}

impl LegacyAminoPubKey {
    /// Aggregate `public_keys` under `threshold`
    ///
    /// Member order is preserved exactly as given. A 1-of-1 key is valid.
    pub fn new(threshold: i64, public_keys: Vec<PublicKey>) -> Result<Self> {
        let threshold = validate_threshold(threshold, public_keys.len())?;

        debug!(
            threshold,
            members = public_keys.len(),
            "Aggregated multisig public key"
        );

        Ok(Self {
            threshold,
            public_keys,
        })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn public_keys(&self) -> &[PublicKey] {
        &self.public_keys
    }

    /// Amino binary encoding of the whole key
    pub fn amino_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&MULTISIG_AMINO_PREFIX);

        out.push(THRESHOLD_FIELD_TAG);
        prost::encoding::encode_varint(u64::from(self.threshold), &mut out);

        for key in &self.public_keys {
            let member = key.amino_bytes();
            out.push(PUBKEYS_FIELD_TAG);
            prost::encoding::encode_varint(member.len() as u64, &mut out);
            out.extend_from_slice(&member);
        }
        out
    }

    /// SHA256 of the amino encoding, truncated to 20 bytes
    pub fn address(&self) -> Address {
        truncated_sha256(&self.amino_bytes())
    }
}

/// Build a synthetic `multi` record from resolved records, keeping their order
pub fn aggregate(threshold: i64, records: &[KeyRecord]) -> Result<KeyRecord> {
    if records.len() < MIN_MULTISIG_KEYS {
        return Err(Error::TooFewKeys {
            min: MIN_MULTISIG_KEYS,
            got: records.len(),
        });
    }
    let public_keys = records.iter().map(|r| r.public_key().clone()).collect();
    let multi = LegacyAminoPubKey::new(threshold, public_keys)?;
    Ok(KeyRecord::multi(DEFAULT_MULTISIG_KEY_NAME, multi))
}
